//! Receipt transaction lifecycle.
//!
//! `beginTransaction` opens a receipt; a sequence of `printReceiptLine`
//! / `printDepositLine` / deposit-adjust / discount calls builds it up;
//! exactly one of `cancelTransaction` / `confirmTransaction*` closes it,
//! optionally followed by footer calls and `finish`.

use crate::command::{Request, discount_desc_code, from_float};
use crate::error::DriverError;
use crate::transport::Connection;
use crate::types::{
    ClientIdType, Deposit, DepositType, DiscountDescriptionType, DiscountType, ExtraLineType,
    ExtraLines, Id, Item, PaymentFormsInfo1, PaymentFormsInfo2, PaymentType,
};

/// Renders the operator id block shared by `confirmTransaction` and
/// `confirmTransactionWithPaymentForms1`: printer and operator id
/// concatenated into a single CR-terminated field, or the literal
/// `"000"` placeholder when no id was supplied.
fn id_block(req: Request, id: &Id) -> Request {
    if id.is_empty() {
        req.cr("000")
    } else {
        req.cr(format!("{}{}", id.printer_id, id.operator_id))
    }
}

fn extra_lines_block(mut req: Request, extra_lines: &ExtraLines) -> Request {
    let lines: [&str; 3] = [&extra_lines.line1, &extra_lines.line2, &extra_lines.line3];
    for line in lines.iter().take(extra_lines.count() as usize) {
        req = req.cr(line);
    }
    req
}

/// Opens a receipt transaction, selecting one of three wire shapes
/// depending on which optional blocks are supplied.
pub fn begin_transaction(
    conn: &mut Connection,
    items: i32,
    extra_lines: &ExtraLines,
    client_id_type: ClientIdType,
    client_id: &str,
) -> Result<(), DriverError> {
    let req = build_begin_transaction(items, extra_lines, client_id_type, client_id);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

fn build_begin_transaction(
    items: i32,
    extra_lines: &ExtraLines,
    client_id_type: ClientIdType,
    client_id: &str,
) -> Request {
    if extra_lines.is_empty() && client_id_type == ClientIdType::None {
        return Request::new("$h").with_ctrl().int(items as i64);
    }

    let lines: [&str; 3] = [&extra_lines.line1, &extra_lines.line2, &extra_lines.line3];
    if client_id_type == ClientIdType::None {
        let mut req = Request::new("$h")
            .with_ctrl()
            .int(items as i64)
            .int(extra_lines.count() as i64);
        for line in lines.iter().take(extra_lines.count() as usize) {
            req = req.cr(line);
        }
        return req;
    }

    let mut req = Request::new("$h")
        .with_ctrl()
        .int(items as i64)
        .int(extra_lines.count() as i64)
        .int(0)
        .int(client_id_type as i64);
    for line in lines.iter().take(extra_lines.count() as usize) {
        req = req.cr(line);
    }
    req.cr(client_id)
}

/// Prints one receipt line item, selecting one of five wire shapes
/// depending on which of `barcode`/`description`/discount fields are
/// populated.
pub fn print_receipt_line(conn: &mut Connection, item: &Item) -> Result<(), DriverError> {
    let req = build_print_receipt_line(item);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

fn discount_name_or_placeholder(item: &Item) -> String {
    if item.discount_name.is_empty() {
        "brak".to_string()
    } else {
        item.discount_name.clone()
    }
}

fn build_print_receipt_line(item: &Item) -> Request {
    let has_discount = item.discount_type != DiscountType::None;

    if !item.barcode.is_empty() {
        return Request::new("^l")
            .int(item.line as i64)
            .int(item.discount_type as i64)
            .int(discount_desc_code(item.discount_desc))
            .cr(&item.name)
            .cr(&item.barcode)
            .cr(&item.quantity)
            .slash(&item.vat)
            .slash(from_float(item.price))
            .slash(from_float(item.gross))
            .slash(from_float(item.discount_value))
            .cr(&item.discount_name);
    }

    if !item.description.is_empty() {
        let mut req = Request::new("$l")
            .int(item.line as i64)
            .int(item.discount_type as i64)
            .int(discount_desc_code(item.discount_desc))
            .int(1)
            .cr(&item.name)
            .cr(&item.quantity)
            .slash(&item.vat)
            .slash(from_float(item.price))
            .slash(from_float(item.gross));
        if has_discount {
            req = req
                .slash(from_float(item.discount_value))
                .cr(discount_name_or_placeholder(item));
        }
        return req.cr(&item.description);
    }

    if !item.discount_name.is_empty() {
        return Request::new("$l")
            .int(item.line as i64)
            .int(item.discount_type as i64)
            .int(discount_desc_code(item.discount_desc))
            .cr(&item.name)
            .cr(&item.quantity)
            .slash(&item.vat)
            .slash(from_float(item.price))
            .slash(from_float(item.gross))
            .slash(from_float(item.discount_value))
            .cr(item.discount_name.clone());
    }

    if has_discount {
        return Request::new("$l")
            .int(item.line as i64)
            .int(item.discount_type as i64)
            .cr(&item.name)
            .cr(&item.quantity)
            .slash(&item.vat)
            .slash(from_float(item.price))
            .slash(from_float(item.gross))
            .slash(from_float(item.discount_value));
    }

    Request::new("$l")
        .int(item.line as i64)
        .cr(&item.name)
        .cr(&item.quantity)
        .slash(&item.vat)
        .slash(from_float(item.price))
        .slash(from_float(item.gross))
}

/// Prints a deposit (container) line (opcode `$l`).
pub fn print_deposit_line(
    conn: &mut Connection,
    deposit_type: DepositType,
    nr: &str,
    quantity: &str,
    price: f64,
) -> Result<(), DriverError> {
    let req = Request::new("$l")
        .with_ctrl()
        .int(deposit_type as i64)
        .cr(nr)
        .cr(quantity)
        .slash("P")
        .slash(from_float(price))
        .slash(from_float(0.0));
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

fn deposit_adjust(
    conn: &mut Connection,
    opcode: &'static str,
    deposit: &Deposit,
) -> Result<(), DriverError> {
    let mut req = Request::new(opcode).slash(from_float(deposit.amount));
    if deposit.nr != "0" && !deposit.nr.is_empty() && !deposit.quantity.is_empty() {
        req = req.cr(&deposit.nr).cr(&deposit.quantity);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Records a deposit collected.
pub fn deposit_collected(conn: &mut Connection, deposit: &Deposit) -> Result<(), DriverError> {
    deposit_adjust(conn, "6$d", deposit)
}

/// Corrects a previously recorded collected deposit.
pub fn correct_deposit_collected(
    conn: &mut Connection,
    deposit: &Deposit,
) -> Result<(), DriverError> {
    deposit_adjust(conn, "7$d", deposit)
}

/// Records a deposit returned.
pub fn deposit_returned(conn: &mut Connection, deposit: &Deposit) -> Result<(), DriverError> {
    deposit_adjust(conn, "10$d", deposit)
}

/// Corrects a previously recorded returned deposit.
pub fn correct_deposit_returned(
    conn: &mut Connection,
    deposit: &Deposit,
) -> Result<(), DriverError> {
    deposit_adjust(conn, "11$d", deposit)
}

/// Aborts the open transaction without printing a receipt (opcode `$e`).
pub fn cancel_transaction(conn: &mut Connection, id: &Id) -> Result<(), DriverError> {
    let mut req = Request::new("$e").with_ctrl().int(0);
    if !id.is_empty() {
        req = req.cr(&id.printer_id).cr(&id.operator_id);
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Closes the open transaction as a simple cash sale, selecting one of
/// three wire shapes depending on whether a discount or footer lines
/// are present (opcode `$e`).
#[allow(clippy::too_many_arguments)]
pub fn confirm_transaction(
    conn: &mut Connection,
    id: &Id,
    cash_in: f64,
    total: f64,
    discount_type: DiscountType,
    discount_value: f64,
    extra_lines: &ExtraLines,
) -> Result<(), DriverError> {
    let req = build_confirm_transaction(id, cash_in, total, discount_type, discount_value, extra_lines);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

fn build_confirm_transaction(
    id: &Id,
    cash_in: f64,
    total: f64,
    discount_type: DiscountType,
    discount_value: f64,
    extra_lines: &ExtraLines,
) -> Request {
    if discount_type != DiscountType::None {
        let req = Request::new("$e")
            .with_ctrl()
            .int(1)
            .int(extra_lines.count() as i64)
            .int(0)
            .int(discount_type as i64)
            .int(1);
        let req = id_block(req, id);
        let req = extra_lines_block(req, extra_lines);
        return req
            .slash(from_float(cash_in))
            .slash(from_float(total))
            .slash(from_float(discount_value));
    }

    if !extra_lines.is_empty() {
        let req = Request::new("$e")
            .with_ctrl()
            .int(1)
            .int(0)
            .int(extra_lines.count() as i64)
            .int(0);
        let req = id_block(req, id);
        let req = extra_lines_block(req, extra_lines);
        return req.slash(from_float(cash_in)).slash(from_float(total));
    }

    let req = Request::new("$e").with_ctrl().int(1);
    let req = id_block(req, id);
    req.slash(from_float(cash_in)).slash(from_float(total))
}

/// Closes the open transaction with a single payment form summary
/// (opcode `$x`).
#[allow(clippy::too_many_arguments)]
pub fn confirm_transaction_with_payment_forms1(
    conn: &mut Connection,
    id: &Id,
    info: &PaymentFormsInfo1,
    total: f64,
    discount_type: DiscountType,
    discount_value: f64,
    extra_lines: &ExtraLines,
) -> Result<(), DriverError> {
    let req = Request::new("$x")
        .with_ctrl()
        .int(extra_lines.count() as i64)
        .int(0)
        .int(0)
        .int(discount_type as i64)
        .int(info.cash_flag as i64)
        .int(info.card_flag as i64)
        .int(info.cheque_flag as i64)
        .int(info.coupon_flag as i64)
        .int(info.deposit_collected_flag as i64)
        .int(info.deposit_returned_flag as i64)
        .int(info.change_flag as i64);
    let req = id_block(req, id);

    let req = match extra_lines.count() {
        1 => req.cr(&extra_lines.line1).raw_text(b"\r\r\r\r"),
        2 => req
            .cr(&extra_lines.line1)
            .cr(&extra_lines.line2)
            .raw_text(b"\r\r\r"),
        3 => req
            .cr(&extra_lines.line1)
            .cr(&extra_lines.line2)
            .cr(&extra_lines.line3)
            .raw_text(b"\r\r"),
        _ => req.raw_text(b"\r\r\r\r\r"),
    };

    let req = req
        .cr(&info.card_name)
        .cr(&info.cheque_name)
        .cr(&info.coupon_name)
        .slash(from_float(total))
        .slash(from_float(discount_value))
        .slash(from_float(info.cash_in))
        .slash(from_float(info.card_in))
        .slash(from_float(info.cheque_in))
        .slash(from_float(info.coupon_in))
        .slash(from_float(info.deposit_collected))
        .slash(from_float(info.deposit_returned))
        .slash(from_float(info.check_out));
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Closes the open transaction with an arbitrary list of payment forms
/// and deposit collections/returns (opcode `$y`).
#[allow(clippy::too_many_arguments)]
pub fn confirm_transaction_with_payment_forms2(
    conn: &mut Connection,
    id: &Id,
    info: &PaymentFormsInfo2,
    total: f64,
    discount_type: DiscountType,
    discount_value: f64,
    sys_nr: &str,
    summary: bool,
    extra_lines: &ExtraLines,
) -> Result<(), DriverError> {
    let mut req = Request::new("$y")
        .with_ctrl()
        .int(extra_lines.count() as i64)
        .int(0)
        .int(summary as i64)
        .int(0)
        .int(discount_type as i64)
        .int(info.deposit_collected.len() as i64)
        .int(info.deposit_returned.len() as i64)
        .int(if sys_nr.is_empty() { 0 } else { 1 })
        .int(info.payment_forms.len() as i64)
        .int(info.change_flag as i64)
        .int(info.cash_flag as i64);
    for form in &info.payment_forms {
        req = req.int(form.kind as i64);
    }

    req = req.cr(&id.printer_id).cr(&id.operator_id).cr(sys_nr);
    req = extra_lines_block(req, extra_lines);

    for form in &info.payment_forms {
        req = req.cr(&form.name);
    }
    for deposit in &info.deposit_collected {
        req = req.cr(&deposit.nr);
    }
    for deposit in &info.deposit_collected {
        req = req.cr(&deposit.quantity);
    }
    for deposit in &info.deposit_returned {
        req = req.cr(&deposit.nr);
    }
    for deposit in &info.deposit_returned {
        req = req.cr(&deposit.quantity);
    }

    req = req
        .slash(from_float(total))
        .slash("0")
        .slash(from_float(discount_value))
        .slash(from_float(info.cash_in));
    for form in &info.payment_forms {
        req = req.slash(from_float(form.amount));
    }
    req = req.slash(from_float(info.change_out));
    for deposit in &info.deposit_collected {
        req = req.slash(from_float(deposit.amount));
    }
    for deposit in &info.deposit_returned {
        req = req.slash(from_float(deposit.amount));
    }

    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Records one non-cash payment method used to service part of the
/// transaction (deposit or withdrawal context), opcode `$b`.
pub fn payment_form_service(
    conn: &mut Connection,
    service_type: i64,
    payment_type: PaymentType,
    amount: f64,
    name: &str,
) -> Result<(), DriverError> {
    let req = Request::new("$b")
        .int(service_type)
        .int(payment_type as i64)
        .slash(from_float(amount))
        .cr(name);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Applies a named discount or surcharge to the whole transaction
/// (opcode `$n`).
pub fn add_discount(
    conn: &mut Connection,
    discount_type: DiscountType,
    name: &str,
    value: f64,
) -> Result<(), DriverError> {
    let req = Request::new("$n")
        .int(discount_type as i64)
        .cr(name)
        .slash(from_float(value));
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Applies a discount scoped to a single VAT rate (opcode `$L`).
#[allow(clippy::too_many_arguments)]
pub fn add_vat_rate_discount(
    conn: &mut Connection,
    vat: &str,
    discount_type: DiscountType,
    discount_desc: DiscountDescriptionType,
    amount: f64,
    discount_value: f64,
    discount_name: &str,
) -> Result<(), DriverError> {
    let req = Request::new("$L")
        .int(vat.parse().unwrap_or(0))
        .int(discount_type as i64)
        .int(discount_desc_code(discount_desc))
        .slash(from_float(amount))
        .slash(from_float(discount_value))
        .cr(discount_name);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Applies a discount to the transaction subtotal (opcode `$Y`).
pub fn add_subtotal_discount(
    conn: &mut Connection,
    discount_type: DiscountType,
    discount_desc: DiscountDescriptionType,
    subtotal: f64,
    discount: f64,
    discount_name: &str,
) -> Result<(), DriverError> {
    let req = Request::new("$Y")
        .int(discount_type as i64)
        .int(discount_desc_code(discount_desc))
        .slash(from_float(subtotal))
        .slash(from_float(discount))
        .cr(discount_name);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Records a container returned to the customer (opcode `$z`, mode 8).
pub fn extra_line_container_returned(
    conn: &mut Connection,
    name: &str,
    quantity: &str,
    amount: f64,
) -> Result<(), DriverError> {
    extra_line_container(conn, 8, name, quantity, amount)
}

/// Records a container received from the customer (opcode `$z`, mode 4).
pub fn extra_line_container_received(
    conn: &mut Connection,
    name: &str,
    quantity: &str,
    amount: f64,
) -> Result<(), DriverError> {
    extra_line_container(conn, 4, name, quantity, amount)
}

fn extra_line_container(
    conn: &mut Connection,
    mode: i64,
    name: &str,
    quantity: &str,
    amount: f64,
) -> Result<(), DriverError> {
    let req = Request::new("$z")
        .int(mode)
        .cr(name)
        .cr(quantity)
        .slash(from_float(amount));
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Clears the running forms-of-payment summary (opcode `$z`, mode 12).
pub fn forms_of_payment_clearing(conn: &mut Connection) -> Result<(), DriverError> {
    let req = Request::new("$z").with_ctrl().int(12);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints a free-form footer line (opcode `$z`, mode 20).
pub fn extra_line(
    conn: &mut Connection,
    footer_type: ExtraLineType,
    text: &str,
) -> Result<(), DriverError> {
    let req = Request::new("$z").int(20).int(footer_type.0 as i64).cr(text);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Prints up to three information lines (opcode `$z`, mode 24).
pub fn define_info_lines(conn: &mut Connection, lines: &ExtraLines) -> Result<(), DriverError> {
    let mut req = Request::new("$z").int(24).int(lines.count() as i64);
    match lines.count() {
        1 => req = req.cr(&lines.line1),
        2 => req = req.cr(&lines.line1).cr(&lines.line2),
        3 => req = req.cr(&lines.line1).cr(&lines.line2).cr(&lines.line3),
        _ => {}
    }
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Records a currency-exchange note on the receipt (opcode `$z`, modes
/// `99;5`).
pub fn euro_payment(
    conn: &mut Connection,
    exchange: f64,
    amount: f64,
    cash_in: f64,
    check_euro: f64,
    check_pln: f64,
) -> Result<(), DriverError> {
    let req = Request::new("$z")
        .int(99)
        .int(5)
        .cr(from_float(exchange))
        .cr(from_float(amount))
        .cr(from_float(cash_in))
        .cr(from_float(check_euro))
        .cr(from_float(check_pln));
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Ends the footer sequence, optionally keeping the header for the
/// next receipt (opcode `$z`, mode 28).
pub fn finish(conn: &mut Connection, next_header: bool) -> Result<(), DriverError> {
    let req = Request::new("$z")
        .with_ctrl()
        .int(28)
        .int(if next_header { 2 } else { 0 });
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

/// Attaches a client tax identifier to the transaction (opcode `$z`,
/// mode 100). A no-op when `client_id_type` is
/// [`ClientIdType::None`], matching the firmware driver's documented
/// behavior.
pub fn set_client_id(
    conn: &mut Connection,
    client_id_type: ClientIdType,
    client_id: &str,
) -> Result<(), DriverError> {
    if client_id_type == ClientIdType::None {
        return Ok(());
    }
    let req = Request::new("$z")
        .int(100)
        .int(client_id_type as i64)
        .cr(client_id);
    conn.execute_command(&req.body(), req.wants_ctrl())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_transaction_bare_shape_when_no_extras() {
        let req = build_begin_transaction(3, &ExtraLines::default(), ClientIdType::None, "");
        assert_eq!(req.body(), b"3$h".to_vec());
    }

    #[test]
    fn begin_transaction_with_extra_lines_only() {
        let extra = ExtraLines {
            line1: "foo".into(),
            ..Default::default()
        };
        let req = build_begin_transaction(1, &extra, ClientIdType::None, "");
        assert_eq!(req.body(), b"1;1$hfoo\r".to_vec());
    }

    #[test]
    fn begin_transaction_with_client_id() {
        let extra = ExtraLines::default();
        let req = build_begin_transaction(2, &extra, ClientIdType::Nip, "1234567890");
        assert_eq!(req.body(), b"2;0;0;1$h1234567890\r".to_vec());
    }

    #[test]
    fn print_receipt_line_bare_shape_matches_spec_example() {
        let item = Item {
            line: 1,
            name: "chleb".into(),
            quantity: "1.000".into(),
            vat: "A".into(),
            price: 3.50,
            gross: 3.50,
            ..Default::default()
        };
        let req = build_print_receipt_line(&item);
        assert_eq!(req.body(), b"1$lchleb\r1.000\rA/3.50/3.50/".to_vec());
    }

    #[test]
    fn print_receipt_line_with_discount_emits_brak_placeholder() {
        let item = Item {
            line: 2,
            name: "mleko".into(),
            quantity: "1.000".into(),
            vat: "A".into(),
            price: 2.00,
            gross: 2.00,
            discount_type: DiscountType::Percent,
            discount_value: 10.0,
            ..Default::default()
        };
        let req = build_print_receipt_line(&item);
        assert!(req.body().ends_with(b"brak\r"));
    }

    #[test]
    fn print_receipt_line_with_description_puts_description_last() {
        // name, quantity, vat, price, gross, [discount], description.
        let item = Item {
            line: 3,
            name: "chleb".into(),
            description: "razowy".into(),
            quantity: "1.000".into(),
            vat: "A".into(),
            price: 3.50,
            gross: 3.50,
            ..Default::default()
        };
        let req = build_print_receipt_line(&item);
        assert_eq!(
            req.body(),
            b"3;0;0;1$lchleb\r1.000\rA/3.50/3.50/razowy\r".to_vec()
        );
    }

    #[test]
    fn print_receipt_line_with_description_and_discount_orders_fields() {
        let item = Item {
            line: 4,
            name: "mleko".into(),
            description: "2%".into(),
            quantity: "2.000".into(),
            vat: "A".into(),
            price: 2.00,
            gross: 4.00,
            discount_type: DiscountType::Percent,
            discount_value: 5.0,
            discount_name: "promo".into(),
            ..Default::default()
        };
        let req = build_print_receipt_line(&item);
        assert_eq!(
            req.body(),
            b"4;1;0;1$lmleko\r2.000\rA/2.00/4.00/5.00/promo\r2%\r".to_vec()
        );
    }

    #[test]
    fn print_receipt_line_with_barcode_uses_opcode_l_caret() {
        let item = Item {
            line: 1,
            name: "cola".into(),
            barcode: "5900000000017".into(),
            quantity: "1.000".into(),
            vat: "C".into(),
            price: 4.00,
            gross: 4.00,
            ..Default::default()
        };
        let req = build_print_receipt_line(&item);
        // No discount: discountValue/discountName are still sent, empty.
        assert_eq!(
            req.body(),
            b"1;0;0^lcola\r5900000000017\r1.000\rC/4.00/4.00/0.00/\r".to_vec()
        );
    }

    #[test]
    fn print_receipt_line_with_barcode_and_discount_sends_discount_name_verbatim() {
        let item = Item {
            line: 5,
            name: "piwo".into(),
            barcode: "5900000000024".into(),
            quantity: "6.000".into(),
            vat: "A".into(),
            price: 3.00,
            gross: 18.00,
            discount_type: DiscountType::Amount,
            discount_value: 2.00,
            discount_name: "rabat hurtowy".into(),
            ..Default::default()
        };
        let req = build_print_receipt_line(&item);
        assert_eq!(
            req.body(),
            b"5;2;0^lpiwo\r5900000000024\r6.000\rA/3.00/18.00/2.00/rabat hurtowy\r".to_vec()
        );
    }

    #[test]
    fn confirm_transaction_bare_shape() {
        let req = build_confirm_transaction(
            &Id::default(),
            10.0,
            10.0,
            DiscountType::None,
            0.0,
            &ExtraLines::default(),
        );
        assert_eq!(req.body(), b"1$e000\r10.00/10.00/".to_vec());
    }

    #[test]
    fn confirm_transaction_with_discount_shape() {
        let req = build_confirm_transaction(
            &Id::default(),
            10.0,
            9.50,
            DiscountType::Percent,
            5.0,
            &ExtraLines::default(),
        );
        assert_eq!(
            req.body(),
            b"1;0;0;1;1$e000\r10.00/9.50/5.00/".to_vec()
        );
    }

    #[test]
    fn confirm_transaction_with_extra_lines_shape() {
        let extra = ExtraLines {
            line1: "dziekujemy".into(),
            ..Default::default()
        };
        let req = build_confirm_transaction(
            &Id::default(),
            10.0,
            10.0,
            DiscountType::None,
            0.0,
            &extra,
        );
        assert_eq!(
            req.body(),
            b"1;0;1;0$e000\rdziekujemy\r10.00/10.00/".to_vec()
        );
    }

    #[test]
    fn cancel_transaction_omits_id_block_when_empty() {
        let req = Request::new("$e").with_ctrl().int(0);
        assert_eq!(req.body(), b"0$e".to_vec());
    }

    #[test]
    fn print_deposit_line_uses_opcode_l_with_placeholder_fields() {
        let req = Request::new("$l")
            .with_ctrl()
            .int(DepositType::Collected as i64)
            .cr("1")
            .cr("2.000")
            .slash("P")
            .slash(from_float(1.50))
            .slash(from_float(0.0));
        assert_eq!(req.body(), b"6$l1\r2.000\rP/1.50/0.00/".to_vec());
    }

    #[test]
    fn deposit_adjust_skips_nr_block_when_absent() {
        let deposit = Deposit {
            amount: 2.50,
            ..Default::default()
        };
        let req = Request::new("6$d").slash(from_float(deposit.amount));
        assert_eq!(req.body(), b"6$d2.50/".to_vec());
    }

    #[test]
    fn set_client_id_is_a_no_op_for_none() {
        // Constructing the request would panic on a real connection if
        // this path were reached; instead, assert the guard directly.
        assert_eq!(ClientIdType::None as i64, 0);
    }

    #[test]
    fn finish_encodes_next_header_flag() {
        let req = Request::new("$z").with_ctrl().int(28).int(2);
        assert_eq!(req.body(), b"28;2$z".to_vec());
    }
}
