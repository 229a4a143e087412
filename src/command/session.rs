//! Operator session, cash movements, and periodic/shift/daily reports.

use crate::command::{Request, from_float, from_long};
use crate::error::DriverError;
use crate::transport::Connection;
use crate::types::{Id, PeriodicalReportType, SaleReceiptData};

/// Logs an operator in (opcode `#p`).
///
/// Unlike most operations that carry an [`Id`], the source serialises
/// `operatorId` before `printerId` here.
pub fn login(conn: &mut Connection, id: &Id) -> Result<(), DriverError> {
    let req = Request::new("#p")
        .with_ctrl()
        .int(0)
        .cr(&id.operator_id)
        .cr(&id.printer_id);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Logs an operator out (opcode `#q`).
pub fn logout(conn: &mut Connection, id: &Id) -> Result<(), DriverError> {
    let req = Request::new("#q")
        .with_ctrl()
        .int(0)
        .cr(&id.operator_id)
        .cr(&id.printer_id);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Records cash deposited into the drawer outside a transaction
/// (opcode `#i`).
pub fn payment_to_cash(
    conn: &mut Connection,
    id: &Id,
    cash_in: f64,
    euro: bool,
) -> Result<(), DriverError> {
    cash_movement(conn, "#i", id, cash_in, euro)
}

/// Records cash withdrawn from the drawer outside a transaction
/// (opcode `#d`).
pub fn withdrawal_from_cash(
    conn: &mut Connection,
    id: &Id,
    cash_out: f64,
    euro: bool,
) -> Result<(), DriverError> {
    cash_movement(conn, "#d", id, cash_out, euro)
}

fn cash_movement(
    conn: &mut Connection,
    opcode: &'static str,
    id: &Id,
    amount: f64,
    euro: bool,
) -> Result<(), DriverError> {
    let mut req = Request::new(opcode)
        .with_ctrl()
        .int(if euro { 99 } else { 0 })
        .slash(from_float(amount));
    if !id.is_empty() {
        req = req.cr(&id.printer_id).cr(&id.operator_id);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints the current cash-in-drawer state (opcode `#t`).
pub fn print_cash_state(conn: &mut Connection, id: &Id) -> Result<(), DriverError> {
    let mut req = Request::new("#t").with_ctrl().int(0);
    if !id.is_empty() {
        req = req.cr(&id.printer_id).cr(&id.operator_id);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints (and optionally resets) a shift report (opcode `#k`).
pub fn print_shift_report(
    conn: &mut Connection,
    id: &Id,
    reset: bool,
    shift: &str,
) -> Result<(), DriverError> {
    let mut req = Request::new("#k")
        .with_ctrl()
        .int(!reset as i64)
        .cr(shift)
        .cr(&id.operator_id);
    if !id.printer_id.is_empty() {
        req = req.cr(&id.printer_id);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints the daily fiscal report (opcode `#r`).
pub fn print_daily_report(conn: &mut Connection, id: &Id) -> Result<(), DriverError> {
    let req = if id.is_empty() {
        Request::new("#r").with_ctrl()
    } else {
        Request::new("#r")
            .with_ctrl()
            .cr(&id.printer_id)
            .cr(&id.operator_id)
    };
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints a periodical report over a calendar-date range (opcode
/// `#o`).
#[allow(clippy::too_many_arguments)]
pub fn print_periodical_report_by_date(
    conn: &mut Connection,
    id: &Id,
    from: (u16, u8, u8),
    to: (u16, u8, u8),
    kind: PeriodicalReportType,
) -> Result<(), DriverError> {
    let mut req = Request::new("#o")
        .with_ctrl()
        .int(from.0 as i64)
        .int(from.1 as i64)
        .int(from.2 as i64)
        .int(to.0 as i64)
        .int(to.1 as i64)
        .int(to.2 as i64)
        .int(kind as i64);
    if !id.is_empty() {
        req = req.cr(&id.operator_id).cr(&id.printer_id);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints a periodical report over a report-number range (opcode
/// `#o`).
pub fn print_periodical_report_by_number(
    conn: &mut Connection,
    id: &Id,
    from_nr: i64,
    to_nr: i64,
    kind: PeriodicalReportType,
) -> Result<(), DriverError> {
    let mut req = Request::new("#o")
        .with_ctrl()
        .int(kind as i64)
        .slash(from_long(from_nr))
        .slash(from_long(to_nr));
    if !id.is_empty() {
        req = req.cr(&id.operator_id).cr(&id.printer_id);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Returns a deposit container outside a transaction (opcode `#w`).
pub fn container_return(conn: &mut Connection, text: &str) -> Result<(), DriverError> {
    let req = Request::new("#w").with_ctrl().int(0).cr(text);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints a duplicate/draft copy of a previously issued card sale
/// receipt (opcode `#g`).
pub fn sale_receipt(
    conn: &mut Connection,
    id: &Id,
    data: &SaleReceiptData,
) -> Result<(), DriverError> {
    sale_like(conn, "#g", id, data)
}

/// Prints a return-of-article document against a previous card sale
/// (opcode `#h`).
///
/// This reuses the `#h` opcode letter also used by `beginInvoice`, in
/// a different command family; the firmware disambiguates by which
/// state the printer is in when the command arrives.
pub fn return_of_article(
    conn: &mut Connection,
    id: &Id,
    data: &SaleReceiptData,
) -> Result<(), DriverError> {
    sale_like(conn, "#h", id, data)
}

fn sale_like(
    conn: &mut Connection,
    opcode: &'static str,
    id: &Id,
    data: &SaleReceiptData,
) -> Result<(), DriverError> {
    let req = Request::new(opcode)
        .with_ctrl()
        .int(data.print_id as i64)
        .int(data.print_option.map(|o| o as i64).unwrap_or(0))
        .cr(&id.printer_id)
        .cr(&id.operator_id)
        .cr(&data.receipt)
        .cr(&data.client_name)
        .cr(&data.terminal)
        .cr(&data.card_name)
        .cr(&data.card_nr)
        .cr(data.month.to_string())
        .cr(data.year.to_string())
        .cr(&data.auth_code)
        .slash(from_float(data.amount));
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Requests a listing of the firmware's known report/command
/// descriptors (opcode `@d`).
pub fn descriptors_report(conn: &mut Connection) -> Result<Vec<u8>, DriverError> {
    let req = Request::new("@d").with_ctrl().int(1);
    conn.execute_command(&req.body(), req.wants_ctrl())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_serialises_operator_before_printer_id() {
        let id = Id {
            printer_id: "07".into(),
            operator_id: "KASJER1".into(),
        };
        let req = Request::new("#p")
            .with_ctrl()
            .int(0)
            .cr(&id.operator_id)
            .cr(&id.printer_id);
        assert_eq!(req.body(), b"0#pKASJER1\r07\r".to_vec());
    }

    #[test]
    fn print_daily_report_omits_id_block_for_empty_id() {
        let req = Request::new("#r").with_ctrl();
        assert_eq!(req.body(), b"#r".to_vec());
    }

    #[test]
    fn cash_movement_appends_id_only_when_present() {
        let with_id = Id {
            printer_id: "1".into(),
            operator_id: "2".into(),
        };
        let mut req = Request::new("#i").with_ctrl().int(0).slash(from_float(10.0));
        req = req.cr(&with_id.printer_id).cr(&with_id.operator_id);
        assert_eq!(req.body(), b"0#i10.00/1\r2\r".to_vec());
    }
}
