//! Non-fiscal printouts: `beginNonFiscal` → one-or-many
//! `printNonFiscal` → `finishNonFiscal`. Unlike receipts and invoices
//! these documents have no tax significance and carry a caller-chosen
//! print number rather than a firmware-assigned sequence.

use crate::command::Request;
use crate::error::DriverError;
use crate::transport::Connection;
use crate::types::{ExtraLines, NonFiscalLine};

/// Opens a non-fiscal document under `print_nr`, referencing a
/// previously programmed header via `header_nr` (opcode `$w`).
pub fn begin_non_fiscal(
    conn: &mut Connection,
    print_nr: i32,
    header_nr: i32,
) -> Result<(), DriverError> {
    let req = Request::new("$w")
        .with_ctrl()
        .int(0)
        .int(print_nr as i64)
        .int(header_nr as i64);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints one line of the open non-fiscal document.
pub fn print_non_fiscal(conn: &mut Connection, line: &NonFiscalLine) -> Result<(), DriverError> {
    let attrs = line.attrs.map(|a| a as i64).unwrap_or(0);
    let mut req = Request::new("$w")
        .with_ctrl()
        .int(line.print_nr as i64)
        .int(line.line_nr as i64)
        .int(line.bold as i64)
        .int(line.inverse as i64)
        .int(line.font as i64)
        .int(line.center as i64)
        .int(attrs);
    for segment in &line.lines {
        req = req.cr(segment);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Closes the open non-fiscal document, optionally with up to three
/// footer lines (opcode `$w`).
pub fn finish_non_fiscal(
    conn: &mut Connection,
    print_nr: i32,
    sys_nr: &str,
    extra_lines: &ExtraLines,
) -> Result<(), DriverError> {
    let lines = [&extra_lines.line1, &extra_lines.line2, &extra_lines.line3];
    let mut req = Request::new("$w")
        .with_ctrl()
        .int(1)
        .int(print_nr as i64)
        .int(if sys_nr.is_empty() { 0 } else { 1 })
        .int(extra_lines.count() as i64)
        .cr(sys_nr);
    match extra_lines.count() {
        1 => req = req.cr(lines[0]),
        2 => req = req.cr(lines[0]).cr(lines[1]),
        3 => req = req.cr(lines[0]).cr(lines[1]).cr(lines[2]),
        _ => {}
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_non_fiscal_encodes_print_and_header_number() {
        let req = Request::new("$w").with_ctrl().int(0).int(7).int(2);
        assert_eq!(req.body(), b"0;7;2$w".to_vec());
    }

    #[test]
    fn finish_non_fiscal_omits_footer_block_when_empty() {
        let req = Request::new("$w")
            .with_ctrl()
            .int(1)
            .int(7)
            .int(0)
            .int(0)
            .cr("");
        assert_eq!(req.body(), b"1;7;0;0$w\r".to_vec());
    }
}
