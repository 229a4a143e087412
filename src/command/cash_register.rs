//! Cash register / business-day summary queries (opcode `#s`).
//!
//! Each mode shares the opcode but selects a distinct reply grammar, so
//! every function here has its own parser rather than a shared one.

use crate::command::{CR, Reply, Request};
use crate::error::DriverError;
use crate::transport::Connection;
use crate::types::{
    CashRegisterInfo1, CashRegisterInfo2, CashRegisterInfo3, CashRegisterInfo4,
    CashRegisterInfo5, CashRegisterInfo6, CashRegisterInfo7,
};

fn read_vat7(reply: &mut Reply) -> [String; 7] {
    std::array::from_fn(|_| reply.rest_until(b';'))
}

/// `getCashRegisterInfo1` (opcode `#s`, mode 21).
pub fn get_cash_register_info1(conn: &mut Connection) -> Result<CashRegisterInfo1, DriverError> {
    let req = Request::new("#s").int(21);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("#s");
    let last_error = reply.int(b';').unwrap_or(0) as i32;
    let fiscal = reply.bool_flag(b';').unwrap_or(false);
    let transaction = reply.bool_flag(b';').unwrap_or(false);
    let transaction_ok = reply.bool_flag(b';').unwrap_or(false);
    let ram_resets = reply.int(b';').unwrap_or(0) as i32;
    let year = reply.int(b';').unwrap_or(0) as u16;
    let month = reply.int(b';').unwrap_or(0) as u8;
    let day = reply.int(b';').unwrap_or(0) as u8;
    let vat = std::array::from_fn(|_| reply.rest_until(b';'));
    let receipts = reply.int(b';').unwrap_or(0) as i32;
    let tot = read_vat7(&mut reply);
    let cash = reply.rest_until(b';');
    let number = reply.rest_until(CR);

    Ok(CashRegisterInfo1 {
        last_error,
        fiscal,
        transaction,
        transaction_ok,
        ram_resets,
        year,
        month,
        day,
        vat,
        receipts,
        tot,
        cash,
        number,
    })
}

/// `getCashRegisterInfo2` (opcode `#s`, modes 22/23/99).
///
/// The source first issues a `$r 243;<invoices>` side-effect command
/// before querying; `invoices` selects which historical business day
/// the totals below describe.
pub fn get_cash_register_info2(
    conn: &mut Connection,
    invoices: i32,
) -> Result<CashRegisterInfo2, DriverError> {
    let setup = Request::new("$r").with_ctrl().int(243).int(invoices as i64);
    conn.execute_command(&setup.body(), setup.wants_ctrl())?;

    let req = Request::new("#s").int(22);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("#s");
    let last_error = reply.int(b';').unwrap_or(0) as i32;
    let fiscal = reply.bool_flag(b';').unwrap_or(false);
    let transaction = reply.bool_flag(b';').unwrap_or(false);
    let transaction_ok = reply.bool_flag(b';').unwrap_or(false);
    let resets = reply.int(b';').unwrap_or(0) as i32;
    let year = reply.int(b';').unwrap_or(0) as u16;
    let month = reply.int(b';').unwrap_or(0) as u8;
    let day = reply.int(b';').unwrap_or(0) as u8;
    let vat = read_vat7(&mut reply);
    let receipts = reply.int(b';').unwrap_or(0) as i32;
    let tot = read_vat7(&mut reply);
    let cash = reply.rest_until(b';');
    let number = reply.rest_until(CR);

    Ok(CashRegisterInfo2 {
        last_error,
        fiscal,
        transaction,
        transaction_ok,
        resets,
        year,
        month,
        day,
        vat,
        receipts,
        tot,
        cash,
        number,
    })
}

/// `getCashRegisterInfo3` (opcode `#s`, mode 3).
pub fn get_cash_register_info3(conn: &mut Connection) -> Result<CashRegisterInfo3, DriverError> {
    let req = Request::new("#s").int(3);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("#s");
    let year = reply.int(b';').unwrap_or(0) as u16;
    let month = reply.int(b';').unwrap_or(0) as u8;
    let day = reply.int(b';').unwrap_or(0) as u8;
    let used_reports = reply.int(b';').unwrap_or(0) as i32;
    let free_reports = reply.int(b';').unwrap_or(0) as i32;
    let locked = reply.bool_flag(b';').unwrap_or(false);
    let tot = read_vat7(&mut reply);

    Ok(CashRegisterInfo3 {
        year,
        month,
        day,
        used_reports,
        free_reports,
        locked,
        tot,
    })
}

/// `getCashRegisterInfo4` (opcode `#s`, mode 50).
pub fn get_cash_register_info4(conn: &mut Connection) -> Result<CashRegisterInfo4, DriverError> {
    let req = Request::new("#s").int(50);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("#s");
    let documents = reply.int(b';').unwrap_or(0) as i32;
    let invoices = reply.int(CR).unwrap_or(0) as i32;

    Ok(CashRegisterInfo4 {
        documents,
        invoices,
    })
}

/// `getCashRegisterInfo5` (opcode `#s`, mode 90).
pub fn get_cash_register_info5(conn: &mut Connection) -> Result<CashRegisterInfo5, DriverError> {
    let req = Request::new("#s").int(90);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("#s");
    let label = reply.rest_until(b';');
    let state = reply.int(b';').unwrap_or(0) as i32;
    let size = reply.int(b';').unwrap_or(0);
    let free_mem = reply.int(b';').unwrap_or(0);
    let files = reply.int(b';').unwrap_or(0) as i32;
    let free_reports = reply.int(b';').unwrap_or(0) as i32;
    let last_report_nr = reply.int(b';').unwrap_or(0) as i32;
    let last_write = reply.rest_until(CR);

    Ok(CashRegisterInfo5 {
        label,
        state,
        size,
        free_mem,
        files,
        free_reports,
        last_report_nr,
        last_write,
    })
}

/// `getCashRegisterInfo6` (opcode `#s`, mode 91).
pub fn get_cash_register_info6(conn: &mut Connection) -> Result<CashRegisterInfo6, DriverError> {
    let req = Request::new("#s").int(91);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("#s");
    let kind = reply.int(b';').unwrap_or(0) as i32;
    let transaction = reply.int(b';').unwrap_or(0) as i32;
    let total = reply.rest_until(b';');
    let tot = read_vat7(&mut reply);

    Ok(CashRegisterInfo6 {
        kind,
        transaction,
        total,
        tot,
    })
}

/// `getCashRegisterInfo7` (opcode `#s`, mode 92).
pub fn get_cash_register_info7(conn: &mut Connection) -> Result<CashRegisterInfo7, DriverError> {
    let req = Request::new("#s").int(92);
    let payload = conn.execute_command(&req.body(), req.wants_ctrl())?;

    let mut reply = Reply::new(&payload);
    reply.literal("#s");
    let amount = reply.rest_until(CR);

    Ok(CashRegisterInfo7 { amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_cash_register_info1_parses_fixed_layout() {
        let payload =
            b"#s0;1;0;0;3;2026;7;28;1.00;2.00;3.00;4.00;5.00;6.00;12;1.00;2.00;3.00;4.00;5.00;6.00;7.00;123.45;00123456\r";
        let mut reply = Reply::new(payload);
        reply.literal("#s");
        let last_error = reply.int(b';').unwrap();
        let fiscal = reply.bool_flag(b';').unwrap();
        let transaction = reply.bool_flag(b';').unwrap();
        let transaction_ok = reply.bool_flag(b';').unwrap();
        let ram_resets = reply.int(b';').unwrap();
        let year = reply.int(b';').unwrap();
        assert_eq!((last_error, fiscal, transaction, transaction_ok, ram_resets, year), (0, true, false, false, 3, 2026));
    }

    #[test]
    fn get_cash_register_info4_parses_two_counters() {
        let payload = b"#s7;2\r";
        let mut reply = Reply::new(payload);
        reply.literal("#s");
        assert_eq!(reply.int(b';'), Some(7));
        assert_eq!(reply.int(CR), Some(2));
    }

    #[test]
    fn get_cash_register_info2_setup_command_matches_expected_body() {
        let setup = Request::new("$r").with_ctrl().int(243).int(5);
        assert_eq!(setup.body(), b"243;5$r".to_vec());
    }
}
