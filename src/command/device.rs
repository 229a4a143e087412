//! Device identity, clock, header, VAT rates and display operations.

use crate::command::{CR, Reply, Request, from_float};
use crate::error::DriverError;
use crate::mazovia;
use crate::transport::Connection;
use crate::types::{
    ClockInfo, DeviceInfo1, DeviceInfo2, DiscountAlgorithm, DisplayMode, ErrorHandlingMode, Id,
    PrinterError, ServiceDate, VersionInfo,
};

/// Reads the last firmware error code (opcode `#n`).
pub fn get_last_error(conn: &mut Connection) -> Result<PrinterError, DriverError> {
    let req = Request::new("#n");
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("1#E");
    let code = reply.int(CR).unwrap_or(0) as i32;
    Ok(PrinterError::new(code))
}

/// Sets how the printer reacts to invalid commands.
pub fn set_error_handling_mode(
    conn: &mut Connection,
    mode: ErrorHandlingMode,
) -> Result<(), DriverError> {
    let req = Request::new("#e").with_ctrl().int(mode as i64);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Reads firmware identity (opcode `#v`).
///
/// §8 scenario 5: payload `"1#RVENTO/1.00"` parses as
/// `{kind="VENTO", version="1.00"}`.
pub fn get_version_info(conn: &mut Connection) -> Result<VersionInfo, DriverError> {
    let req = Request::new("#v");
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("1#R");
    let kind = reply.rest_until(b'/');
    let version = reply.rest_until(CR);
    Ok(VersionInfo { kind, version })
}

/// Reads device/hardware identity (opcode `$i`, mode 0).
pub fn get_device_info1(conn: &mut Connection) -> Result<DeviceInfo1, DriverError> {
    let req = Request::new("$i").int(0);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("$I");
    let name = reply.rest_until(CR);
    let software_version = reply.rest_until(CR);
    let print_module_version = reply.rest_until(CR);
    let system_name = reply.rest_until(CR);
    let system_version = reply.rest_until(CR);
    let displays = reply.int(CR).unwrap_or(0) as i32;
    let printing_width = reply.int(CR).unwrap_or(0) as i32;
    let e_copy = reply.bool_flag(CR).unwrap_or(false);
    let fiscal_memory_size = reply.int(CR).unwrap_or(0);

    Ok(DeviceInfo1 {
        name,
        software_version,
        print_module_version,
        system_name,
        system_version,
        displays,
        printing_width,
        e_copy,
        fiscal_memory_size,
    })
}

/// Reads fiscal memory capacity/usage counters (opcode `$i`, mode 1).
pub fn get_device_info2(conn: &mut Connection) -> Result<DeviceInfo2, DriverError> {
    let req = Request::new("$i").int(1);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("$I");
    let fiscal_memory_size = reply.int(CR).unwrap_or(0);
    let record_size = reply.int(CR).unwrap_or(0);
    let mode = reply.int(CR).unwrap_or(0) as i32;
    let unique_number = reply.rest_until(CR);
    let nip = reply.rest_until(CR);
    let max_records_count = reply.int(CR).unwrap_or(0);
    let records_count = reply.int(CR).unwrap_or(0);
    let max_daily_reports_count = reply.int(CR).unwrap_or(0);
    let daily_reports_count = reply.int(CR).unwrap_or(0);
    let max_ram_resets_count = reply.int(CR).unwrap_or(0);
    let ram_resets_count = reply.int(CR).unwrap_or(0);
    let max_vat_rate_changes_count = reply.int(CR).unwrap_or(0);
    let vat_rate_changes_count = reply.int(CR).unwrap_or(0);
    let max_currency_changes_count = reply.int(CR).unwrap_or(0);
    let currency_changes_count = reply.int(CR).unwrap_or(0);

    Ok(DeviceInfo2 {
        fiscal_memory_size,
        record_size,
        mode,
        unique_number,
        nip,
        max_records_count,
        records_count,
        max_daily_reports_count,
        daily_reports_count,
        max_ram_resets_count,
        ram_resets_count,
        max_vat_rate_changes_count,
        vat_rate_changes_count,
        max_currency_changes_count,
        currency_changes_count,
    })
}

/// Reads the device clock (opcode `#c`).
pub fn get_clock(conn: &mut Connection) -> Result<ClockInfo, DriverError> {
    let req = Request::new("#c").int(0);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("1#C");
    let year = reply.int(b';').unwrap_or(0) as u16;
    let month = reply.int(b';').unwrap_or(0) as u8;
    let day = reply.int(b';').unwrap_or(0) as u8;
    let hour = reply.int(b';').unwrap_or(0) as u8;
    let minute = reply.int(b';').unwrap_or(0) as u8;
    // A trailing seconds field follows but is not captured into the
    // record, matching the source.
    Ok(ClockInfo {
        year,
        month,
        day,
        hour,
        minute,
    })
}

/// Sets the device clock (opcode `$c`).
pub fn set_clock(conn: &mut Connection, clock: ClockInfo) -> Result<(), DriverError> {
    let req = Request::new("$c")
        .with_ctrl()
        .int(clock.year as i64)
        .int(clock.month as i64)
        .int(clock.day as i64)
        .int(clock.hour as i64)
        .int(clock.minute as i64);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Reads the receipt header lines (opcode `^u`).
///
/// The source strips four trailing control characters from the
/// captured text; this preserves that behavior.
pub fn get_header(conn: &mut Connection) -> Result<String, DriverError> {
    let req = Request::new("^u");
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("1#U");
    let raw = reply.rest();
    let text = mazovia::from_mazovia(raw);
    let keep = text.chars().count().saturating_sub(4);
    Ok(text.chars().take(keep).collect())
}

/// Programs the receipt header, up to several lines, optionally under
/// a specific operator [`Id`].
pub fn set_header(conn: &mut Connection, lines: &[String], id: &Id) -> Result<(), DriverError> {
    let mut req = Request::new("$f").with_ctrl().int(0);
    for line in lines {
        req = req.cr(line);
    }
    req = req.raw_text(&[0xFF]);
    if !id.is_empty() {
        req = req.cr(format!("{}{}", id.printer_id, id.operator_id));
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Last service-check date and message (opcode `^t`, mode 11).
pub fn get_service_check_date(conn: &mut Connection) -> Result<ServiceDate, DriverError> {
    get_service_date(conn, 11)
}

/// Last service-lock date and message (opcode `^t`, mode 12).
pub fn get_service_lock_date(conn: &mut Connection) -> Result<ServiceDate, DriverError> {
    get_service_date(conn, 12)
}

fn get_service_date(conn: &mut Connection, mode: i64) -> Result<ServiceDate, DriverError> {
    let req = Request::new("^t").int(mode);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("^t");
    let year = reply.int(b'/').unwrap_or(0) as u16;
    let month = reply.int(b'/').unwrap_or(0) as u8;
    let day = reply.int(b'/').unwrap_or(0) as u8;
    let message = reply.rest_until(CR);

    Ok(ServiceDate {
        year,
        month,
        day,
        message,
    })
}

/// Programs up to seven VAT rate letters (A-G).
///
/// An empty `rates` programs only the first four slots with zero,
/// matching the source's fallback branch for a zero-length table.
pub fn set_vat_rates(conn: &mut Connection, rates: &[f64]) -> Result<(), DriverError> {
    let mut req = Request::new("$p").with_ctrl();
    if rates.is_empty() {
        for _ in 0..4 {
            req = req.slash(from_float(0.0));
        }
    } else {
        for &rate in rates.iter().take(7) {
            req = req.slash(from_float(rate));
        }
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Opens the cash drawer.
pub fn open_drawer(conn: &mut Connection) -> Result<(), DriverError> {
    let req = Request::new("$d").with_ctrl().int(1);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Writes a message to the customer display.
pub fn set_display_message(conn: &mut Connection, message: &str) -> Result<(), DriverError> {
    let req = Request::new("$d").with_ctrl().int(2).cr(message);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Sets the customer display's line mode.
pub fn set_display_mode(conn: &mut Connection, mode: DisplayMode) -> Result<(), DriverError> {
    let req = Request::new("$d").with_ctrl().int(mode as i64);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Selects how the printer rounds and distributes discounts across a
/// transaction's line items (opcode `$r`).
pub fn set_discount_algorithm(
    conn: &mut Connection,
    mode: DiscountAlgorithm,
) -> Result<(), DriverError> {
    let req = Request::new("$r").with_ctrl().int(mode as i64);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Feeds the paper forward by `lines` lines (opcode `#l`).
pub fn paper_feed(conn: &mut Connection, lines: i32) -> Result<(), DriverError> {
    let req = Request::new("#l").with_ctrl().int(lines as i64);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Triggers a firmware-side diagnostic error for driver testing.
///
/// The source reuses the `#l` opcode with no parameters and no control
/// byte as an intentional debug hook; kept here for parity since
/// nothing in the public surface otherwise exercises malformed frames.
pub fn debug_generate_error(conn: &mut Connection) -> Result<Vec<u8>, DriverError> {
    let req = Request::new("#l");
    conn.execute_command(&req.body(), req.wants_ctrl())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_version_info_parses_spec_example() {
        let mut reply = Reply::new(b"1#RVENTO/1.00");
        reply.literal("1#R");
        let kind = reply.rest_until(b'/');
        let version = reply.rest_until(CR);
        assert_eq!(kind, "VENTO");
        assert_eq!(version, "1.00");
    }

    #[test]
    fn set_error_handling_mode_matches_spec_scenario() {
        // §8 scenario 4: body "2#e" before the control byte.
        let req = Request::new("#e").with_ctrl().int(ErrorHandlingMode::Mode2 as i64);
        assert_eq!(req.body(), b"2#e".to_vec());
    }

    #[test]
    fn get_header_strips_four_trailing_chars() {
        let raw = mazovia::to_mazovia("Header text\x01\x02\x03\x04");
        let mut reply = Reply::new(&{
            let mut v = b"1#U".to_vec();
            v.extend_from_slice(&raw);
            v
        });
        reply.literal("1#U");
        let text = mazovia::from_mazovia(reply.rest());
        let keep = text.chars().count().saturating_sub(4);
        let trimmed: String = text.chars().take(keep).collect();
        assert_eq!(trimmed, "Header text");
    }

    #[test]
    fn set_discount_algorithm_encodes_mode() {
        let req = Request::new("$r").with_ctrl().int(DiscountAlgorithm::Algorithm1 as i64);
        assert_eq!(req.body(), b"1$r".to_vec());
    }

    #[test]
    fn set_vat_rates_empty_programs_four_zero_slots() {
        let mut req = Request::new("$p").with_ctrl();
        for _ in 0..4 {
            req = req.slash(from_float(0.0));
        }
        assert_eq!(req.body(), b"$p0.00/0.00/0.00/0.00/".to_vec());
    }

    #[test]
    fn paper_feed_encodes_line_count() {
        let req = Request::new("#l").with_ctrl().int(5);
        assert_eq!(req.body(), b"5#l".to_vec());
    }
}
