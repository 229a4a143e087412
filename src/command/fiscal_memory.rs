//! Fiscal memory archive reads.
//!
//! `beginFiscalMemoryReadByDate`/`ByRow` position the firmware's read
//! cursor; `getFiscalMemoryRecord` then pulls records one at a time
//! until the reply no longer matches one of the five known prefixes,
//! at which point it is read as [`FiscalMemoryRecord::Empty`].

use crate::command::{CR, Reply, Request};
use crate::error::DriverError;
use crate::transport::Connection;
use crate::types::{
    DailyReportRecord, FiscalMemoryRecord, FiscalMemoryRecordDate, RamResetRecord,
    SellAfterRamResetRecord, VatChangeRecord,
};

/// Positions the fiscal memory read cursor at a calendar date range
/// (opcode `$m`, mode 0).
pub fn begin_fiscal_memory_read_by_date(
    conn: &mut Connection,
    from: (u16, u8, u8),
    to: (u16, u8, u8),
) -> Result<(), DriverError> {
    let req = Request::new("$m")
        .int(0)
        .int(from.0 as i64)
        .int(from.1 as i64)
        .int(from.2 as i64)
        .int(to.0 as i64)
        .int(to.1 as i64)
        .int(to.2 as i64);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Positions the fiscal memory read cursor at a row range (opcode
/// `$m`, mode 1).
pub fn begin_fiscal_memory_read_by_row(
    conn: &mut Connection,
    from_row: i64,
    to_row: i64,
) -> Result<(), DriverError> {
    let req = Request::new("$m").int(1).int(from_row).int(to_row);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

fn parse_date(reply: &mut Reply) -> FiscalMemoryRecordDate {
    FiscalMemoryRecordDate {
        year: reply.int(b';').unwrap_or(0) as u16,
        month: reply.int(b';').unwrap_or(0) as u8,
        day: reply.int(b';').unwrap_or(0) as u8,
        hour: reply.int(b';').unwrap_or(0) as u8,
        minute: reply.int(b';').unwrap_or(0) as u8,
        second: reply.int(b';').unwrap_or(0) as u8,
    }
}

/// Reads the next record from the positioned cursor (opcode `$n`).
///
/// An unrecognized reply prefix, including a blank reply once the
/// cursor is exhausted, parses to [`FiscalMemoryRecord::Empty`].
pub fn get_fiscal_memory_record(conn: &mut Connection) -> Result<FiscalMemoryRecord, DriverError> {
    let req = Request::new("$n");
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(parse_record(&payload))
}

fn parse_record(payload: &[u8]) -> FiscalMemoryRecord {
    let mut reply = Reply::new(payload);

    if reply.literal("10#X") {
        let date = parse_date(&mut reply);
        let receipts = reply.int(b';').unwrap_or(0) as i32;
        let cancelled_receipts = reply.int(b';').unwrap_or(0) as i32;
        let database_changes = reply.int(b';').unwrap_or(0) as i32;
        let cancelled_receipts_value = reply.rest_until(b';');
        let tot = std::array::from_fn(|_| reply.rest_until(b';'));
        return FiscalMemoryRecord::DailyReport(DailyReportRecord {
            date,
            receipts,
            cancelled_receipts,
            database_changes,
            cancelled_receipts_value,
            tot,
        });
    }

    if reply.literal("11#X") {
        let date = parse_date(&mut reply);
        let vat = std::array::from_fn(|_| reply.rest_until(b';'));
        return FiscalMemoryRecord::VatChange(VatChangeRecord { date, vat });
    }

    if reply.literal("12#X") {
        let date = parse_date(&mut reply);
        let reason = reply.int(b';').unwrap_or(0) as i32;
        let reset_number = reply.int(CR).unwrap_or(0) as i32;
        return FiscalMemoryRecord::RamReset(RamResetRecord {
            date,
            reason,
            reset_number,
        });
    }

    if reply.literal("13#X") || reply.literal("25#X") {
        let date = parse_date(&mut reply);
        return FiscalMemoryRecord::SellAfterRamReset(SellAfterRamResetRecord { date });
    }

    FiscalMemoryRecord::Empty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_prefix_is_empty() {
        assert_eq!(parse_record(b""), FiscalMemoryRecord::Empty);
        assert_eq!(parse_record(b"garbage"), FiscalMemoryRecord::Empty);
    }

    #[test]
    fn daily_report_prefix_selects_variant() {
        let payload = b"10#X2026;7;28;12;0;0;5;0;0;0.00;1.00;2.00;3.00;4.00;5.00;6.00;7.00\r";
        match parse_record(payload) {
            FiscalMemoryRecord::DailyReport(r) => {
                assert_eq!(r.date.year, 2026);
                assert_eq!(r.receipts, 5);
            }
            other => panic!("expected DailyReport, got {other:?}"),
        }
    }

    #[test]
    fn ram_reset_prefix_selects_variant() {
        let payload = b"12#X2026;7;28;12;0;0;1;3\r";
        match parse_record(payload) {
            FiscalMemoryRecord::RamReset(r) => {
                assert_eq!(r.reason, 1);
                assert_eq!(r.reset_number, 3);
            }
            other => panic!("expected RamReset, got {other:?}"),
        }
    }

    #[test]
    fn sell_after_ram_reset_accepts_either_prefix() {
        let a = parse_record(b"13#X2026;7;28;12;0;0\r");
        let b = parse_record(b"25#X2026;7;28;12;0;0\r");
        assert!(matches!(a, FiscalMemoryRecord::SellAfterRamReset(_)));
        assert!(matches!(b, FiscalMemoryRecord::SellAfterRamReset(_)));
    }

    #[test]
    fn begin_read_by_row_has_no_control_byte() {
        let req = Request::new("$m").int(1).int(10).int(20);
        assert!(!req.wants_ctrl());
        assert_eq!(req.body(), b"1;10;20$m".to_vec());
    }
}
