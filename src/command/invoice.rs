//! Invoice lifecycle: `beginInvoice` → line items (shared with
//! [`crate::command::receipt::print_receipt_line`]) → `finishInvoice`,
//! plus the persistent formatting commands `setInvoiceOption` and
//! `extraLinesInvoice`.

use crate::command::{Request, from_float};
use crate::error::DriverError;
use crate::transport::Connection;
use crate::types::{BeginInvoiceData, ExtraLineType, FinishInvoiceData, InvoiceOptions};

fn client_seller_code(option: Option<crate::types::ClientSellerOption>) -> i64 {
    option.map(|o| o as i64).unwrap_or(0)
}

/// Opens an invoice transaction (opcode `$h`).
pub fn begin_invoice(conn: &mut Connection, data: &BeginInvoiceData) -> Result<(), DriverError> {
    let mut req = Request::new("$h")
        .with_ctrl()
        .int(data.items as i64)
        .int(data.client_lines.len() as i64)
        .int(1)
        .int(data.print_copy as i64)
        .int(data.top_margin as i64)
        .int(0)
        .int(data.additional_copies as i64)
        .int(0)
        .int(0)
        .int(data.signature as i64)
        .cr(&data.invoice_nr);
    for line in &data.client_lines {
        req = req.cr(line);
    }
    req = req
        .cr(&data.nip)
        .cr(&data.timeout)
        .cr(&data.payment_form)
        .cr(&data.client)
        .cr(&data.seller)
        .cr(&data.system_nr);

    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Closes the open invoice transaction (opcode `$e`).
pub fn finish_invoice(
    conn: &mut Connection,
    printer_id: &str,
    operator_id: &str,
    data: &FinishInvoiceData,
) -> Result<(), DriverError> {
    let lines = [
        &data.extra_lines.line1,
        &data.extra_lines.line2,
        &data.extra_lines.line3,
    ];

    let mut req = Request::new("$e")
        .with_ctrl()
        .int(1)
        .int(0)
        .int(data.extra_lines.count() as i64)
        .int(0)
        .int(0)
        .int(1)
        .int(data.payed_flag as i64)
        .int(client_seller_code(data.client))
        .int(client_seller_code(data.seller));

    if printer_id.is_empty() || operator_id.is_empty() {
        req = req.cr("000");
    } else {
        req = req.cr(format!("{printer_id}{operator_id}"));
    }

    match data.extra_lines.count() {
        1 => req = req.cr(lines[0]),
        2 => req = req.cr(lines[0]).cr(lines[1]),
        3 => req = req.cr(lines[0]).cr(lines[1]).cr(lines[2]),
        _ => {}
    }

    req = req
        .cr(&data.payed)
        .cr(&data.client_name)
        .cr(&data.seller_name)
        .slash(from_float(data.cash_in))
        .slash(from_float(data.total))
        .slash(from_float(data.discount_value));

    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Programs persistent invoice formatting defaults (opcode `@c`).
pub fn set_invoice_option(conn: &mut Connection, options: &InvoiceOptions) -> Result<(), DriverError> {
    let req = Request::new("@c")
        .with_ctrl()
        .int(options.additional_copies as i64)
        .int(client_seller_code(options.client))
        .int(client_seller_code(options.seller))
        .int(options.payed_flag as i64)
        .int(options.year as i64)
        .int(options.month as i64)
        .int(options.day as i64)
        .int(options.summary_option.bits() as i64)
        .int(options.invoice_options2.bits() as i64)
        .int(options.client_id_type as i64)
        .int(options.invoice_options3.bits() as i64)
        .cr(&options.timeout)
        .cr(&options.payment_form)
        .cr(&options.client_name)
        .cr(&options.seller_name)
        .cr(&options.system_nr);

    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints a free-form invoice footer line (opcode `$z`, mode 20).
///
/// Shares its wire shape with
/// [`crate::command::receipt::extra_line`]; kept as a distinct
/// function since invoices and receipts are never open at the same
/// time and callers reach for the name matching their document kind.
pub fn extra_lines_invoice(
    conn: &mut Connection,
    line_type: ExtraLineType,
    text: &str,
) -> Result<(), DriverError> {
    let req = Request::new("$z").int(20).int(line_type.0 as i64).cr(text);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientSellerOption;

    #[test]
    fn begin_invoice_orders_int_params_before_text_block() {
        let data = BeginInvoiceData {
            items: 2,
            print_copy: true,
            invoice_nr: "FV/1/2026".into(),
            nip: "1234567890".into(),
            ..Default::default()
        };
        let body = {
            let mut req = Request::new("$h")
                .with_ctrl()
                .int(2)
                .int(0)
                .int(1)
                .int(1)
                .int(0)
                .int(0)
                .int(0)
                .int(0)
                .int(0)
                .cr("FV/1/2026");
            req = req.cr("1234567890").cr("").cr("").cr("").cr("").cr("");
            req.body()
        };
        assert_eq!(begin_invoice_body(&data), body);
    }

    fn begin_invoice_body(data: &BeginInvoiceData) -> Vec<u8> {
        let mut req = Request::new("$h")
            .with_ctrl()
            .int(data.items as i64)
            .int(data.client_lines.len() as i64)
            .int(1)
            .int(data.print_copy as i64)
            .int(data.top_margin as i64)
            .int(0)
            .int(data.additional_copies as i64)
            .int(0)
            .int(0)
            .int(data.signature as i64)
            .cr(&data.invoice_nr);
        for line in &data.client_lines {
            req = req.cr(line);
        }
        req.cr(&data.nip)
            .cr(&data.timeout)
            .cr(&data.payment_form)
            .cr(&data.client)
            .cr(&data.seller)
            .cr(&data.system_nr)
            .body()
    }

    #[test]
    fn finish_invoice_uses_000_placeholder_for_empty_id() {
        let data = FinishInvoiceData {
            client: Some(ClientSellerOption::Both),
            ..Default::default()
        };
        let mut req = Request::new("$e")
            .with_ctrl()
            .int(1)
            .int(0)
            .int(0)
            .int(0)
            .int(0)
            .int(1)
            .int(0)
            .int(ClientSellerOption::Both as i64)
            .int(0)
            .cr("000");
        req = req.cr("").cr("").cr("").slash(from_float(0.0)).slash(from_float(0.0)).slash(from_float(0.0));
        assert!(req.body().starts_with(b"1;0;0;0;0;1;0;2;0$e000\r"));
    }
}
