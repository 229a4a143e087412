//! Out-of-band status queries.
//!
//! `ENQ`, `DLE`, `BEL` and `CAN` are single bytes exchanged outside the
//! `ESC P ... ESC \` envelope; none of this module touches
//! [`crate::framing`].

use crate::error::DriverError;
use crate::transport::Connection;
use crate::types::{DleStatus, EnqStatus};

const ENQ: u8 = 0x05;
const DLE: u8 = 0x10;
const BEL: u8 = 0x07;
const CAN: u8 = 0x18;

/// Sounds the printer's audible signal.
pub fn bell(conn: &mut Connection) -> Result<(), DriverError> {
    conn.write_bytes(&[BEL])
}

/// Aborts interpretation of the command currently being received.
pub fn cancel(conn: &mut Connection) -> Result<(), DriverError> {
    conn.write_bytes(&[CAN])
}

/// Decodes an `ENQ` reply byte in `0x60..=0x6F`.
pub fn decode_enq(byte: u8) -> EnqStatus {
    EnqStatus {
        fiscal: byte & 0x08 != 0,
        command: byte & 0x04 != 0,
        transaction: byte & 0x02 != 0,
        transaction_ok: byte & 0x01 != 0,
    }
}

/// Decodes a `DLE` reply byte in `0x70..=0x77`.
pub fn decode_dle(byte: u8) -> DleStatus {
    DleStatus {
        online: byte & 0x04 != 0,
        paper: byte & 0x02 != 0,
        error: byte & 0x01 != 0,
    }
}

/// Writes `ENQ` and reads single bytes until one falls in `0x60..=0x6F`,
/// then decodes it.
pub fn get_enq_status(conn: &mut Connection) -> Result<EnqStatus, DriverError> {
    conn.write_bytes(&[ENQ])?;
    loop {
        let byte = conn.read_byte()?;
        if (0x60..=0x6F).contains(&byte) {
            return Ok(decode_enq(byte));
        }
    }
}

/// Writes `DLE` and reads single bytes until one falls in `0x70..=0x77`,
/// then decodes it.
pub fn get_dle_status(conn: &mut Connection) -> Result<DleStatus, DriverError> {
    conn.write_bytes(&[DLE])?;
    loop {
        let byte = conn.read_byte()?;
        if (0x70..=0x77).contains(&byte) {
            return Ok(decode_dle(byte));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_enq_scenario_from_spec() {
        // §8 scenario 3: reply 0x61 -> only transactionOk set.
        let status = decode_enq(0x61);
        assert_eq!(
            status,
            EnqStatus {
                fiscal: false,
                command: false,
                transaction: false,
                transaction_ok: true,
            }
        );
    }

    #[test]
    fn decode_enq_all_bits_set() {
        let status = decode_enq(0x6F);
        assert!(status.fiscal && status.command && status.transaction && status.transaction_ok);
    }

    #[test]
    fn decode_dle_bits() {
        let status = decode_dle(0x74);
        assert!(status.online);
        assert!(!status.paper);
        assert!(!status.error);
    }
}
