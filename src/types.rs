//! The driver's data model: the closed family of argument and record
//! types every operation in [`crate::command`] accepts or returns.
//!
//! Where the source used a virtual base class and downcasting (fiscal
//! memory records), this uses a tagged variant instead. Enumerations
//! that the source expresses as huge open-ended integer tables (extra
//! line footer types, invoice option bit sets) are kept as thin typed
//! wrappers around their wire representation rather than enumerated
//! variant-by-variant — the wire contract is "pass the firmware's
//! integer through", and the firmware's own table is the source of
//! truth for what each code means on a given model.

use bitflags::bitflags;

/// An operator/printer identity pair used by operations that can run
/// "as" a specific cash register operator.
///
/// `Id::is_empty()` iff either field is empty; operations that accept
/// a default id treat an empty `Id` as "omit the id block" rather than
/// sending empty strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Id {
    /// Printer-assigned operator number.
    pub printer_id: String,
    /// Caller-assigned operator identifier.
    pub operator_id: String,
}

impl Id {
    /// An id that operations should treat as "use the printer default".
    pub fn is_empty(&self) -> bool {
        self.printer_id.is_empty() || self.operator_id.is_empty()
    }
}

/// Up to three footer lines attached to a receipt or invoice.
///
/// `count()` is the index of the last non-empty line. Empty lines in
/// the middle are not supported by the firmware: a caller that leaves
/// `line1` empty but fills `line2` will see `count()` return `0`, and
/// `line2` is never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraLines {
    /// First footer line.
    pub line1: String,
    /// Second footer line.
    pub line2: String,
    /// Third footer line.
    pub line3: String,
}

impl ExtraLines {
    /// Whether all lines are empty.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The index (0-3) of the last populated line, scanning forward
    /// from `line1` and stopping at the first empty line encountered.
    /// An empty line in the middle (e.g. `line1` set, `line2` blank,
    /// `line3` set) is not representable; `line3` is simply not sent.
    pub fn count(&self) -> u8 {
        if self.line1.is_empty() {
            0
        } else if self.line2.is_empty() {
            1
        } else if self.line3.is_empty() {
            2
        } else {
            3
        }
    }
}

/// A firmware-reported error code, with a lookup to its human
/// description via [`PrinterError::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterError {
    /// The raw numeric code as reported by `getLastError` (opcode `#n`).
    pub code: i32,
}

impl PrinterError {
    /// Builds a `PrinterError` from a raw firmware code.
    pub const fn new(code: i32) -> Self {
        Self { code }
    }

    /// The human-readable description of this code, per the firmware's
    /// documented error table (see [`crate::error_codes`]).
    pub fn message(&self) -> &'static str {
        crate::error_codes::lookup(self.code)
    }
}

impl std::fmt::Display for PrinterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code)
    }
}

/// Four booleans decoded from the single-byte `ENQ` reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnqStatus {
    /// Device is in fiscal mode.
    pub fiscal: bool,
    /// The previous command completed successfully.
    pub command: bool,
    /// A receipt/invoice transaction is open.
    pub transaction: bool,
    /// The open transaction is in a confirmable state.
    pub transaction_ok: bool,
}

/// Three booleans decoded from the single-byte `DLE` reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DleStatus {
    /// Printer is online.
    pub online: bool,
    /// Paper is present.
    pub paper: bool,
    /// An error condition is latched.
    pub error: bool,
}

/// Error handling mode, set via `setErrorHandlingMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorHandlingMode {
    /// Mode 0.
    Mode0 = 0,
    /// Mode 1.
    Mode1 = 1,
    /// Mode 2.
    Mode2 = 2,
    /// Mode 3.
    Mode3 = 3,
}

/// Display configuration mode, set via `setDisplayMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DisplayMode {
    /// 3-line customer display.
    Lines3 = 3,
    /// 4-line customer display.
    Lines4 = 4,
}

/// Which kind of client tax identifier accompanies a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum ClientIdType {
    /// No client identifier; `setClientId` is a no-op in this case.
    #[default]
    None = 0,
    /// NIP (tax identification number).
    Nip = 1,
    /// REGON (business registry number).
    Regon = 2,
    /// PESEL (personal identification number).
    Pesel = 3,
}

/// Discount computation algorithm, set via `setDiscountAlgorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DiscountAlgorithm {
    /// Algorithm 0.
    Algorithm0 = 0,
    /// Algorithm 1.
    Algorithm1 = 1,
}

/// Discount kind applied to an item, subtotal, or transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum DiscountType {
    /// No discount.
    #[default]
    None = 0,
    /// Percentage discount.
    Percent = 1,
    /// Fixed-amount discount.
    Amount = 2,
    /// Percentage surcharge.
    PercentSurcharge = 3,
    /// Fixed-amount surcharge.
    AmountSurcharge = 4,
}

/// Discount description shown on the printout; one of the firmware's
/// documented reasons (promotion, loyalty, staff, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum DiscountDescriptionType {
    /// No description.
    #[default]
    None = 0,
    /// Generic rebate ("rabat").
    Rebate = 1,
    /// Generic surcharge ("narzut").
    Surcharge = 2,
    /// Promotion.
    Promotion = 3,
    /// Loyalty program.
    Loyalty = 4,
    /// Other, firmware-defined reasons continue up to 16.
    Other(u8),
}

/// Which cash-drawer deposit operation is being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DepositType {
    /// Deposit collected.
    Collected = 6,
    /// Deposit collected, correction.
    CollectedCorrection = 7,
    /// Deposit returned.
    Returned = 10,
    /// Deposit returned, correction.
    ReturnedCorrection = 11,
}

/// Whether a cash movement is a deposit or a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ServiceType {
    /// Cash deposited into the drawer.
    Deposit = 1,
    /// Cash withdrawn from the drawer.
    Withdrawal = 2,
}

/// A payment method, used both as a line-item tag and in payment-forms
/// summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PaymentType {
    /// Cash.
    Cash = 0,
    /// Payment card.
    Card = 1,
    /// Cheque.
    Cheque = 2,
    /// Voucher/coupon.
    Coupon = 3,
    /// Bank transfer.
    Transfer = 4,
    /// Mobile payment.
    Mobile = 5,
    /// Loyalty points.
    Points = 6,
    /// Credit (deferred payment).
    Credit = 7,
    /// Other.
    Other = 8,
}

/// A firmware-assigned footer line type code.
///
/// The source enumerates ~160 model-specific values (`ELT_0` through
/// `ELT_159`); this wraps the raw code rather than re-enumerating all
/// of them; see the printer's firmware manual for the per-model table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtraLineType(pub u16);

impl ExtraLineType {
    /// The generic, always-present "plain text" footer line.
    pub const PLAIN_TEXT: ExtraLineType = ExtraLineType(0);
}

/// How a periodical report should aggregate its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PeriodicalReportType {
    /// Fiscal (tax) report.
    Fiscal = 0,
    /// Non-fiscal report.
    NonFiscal = 1,
    /// Detailed report.
    Detailed = 6,
    /// Summary report.
    Summary = 7,
    /// Full-memory report.
    FullMemory = 96,
    /// Full-memory detailed report.
    FullMemoryDetailed = 97,
}

/// Whether the client and/or seller block is included on an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ClientSellerOption {
    /// Neither block printed.
    Neither = 0,
    /// Client block only.
    ClientOnly = 1,
    /// Both blocks printed.
    Both = 2,
}

/// How a sale receipt / return-of-article document should be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SaleReceiptOption {
    /// Standard copy.
    Standard = 0,
    /// Duplicate copy.
    Duplicate = 1,
    /// Draft (non-binding) copy.
    Draft = 2,
}

/// Text attributes for a non-fiscal printout line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FontAttrs {
    /// Normal weight, normal size.
    Normal = 0,
    /// Double height.
    DoubleHeight = 1,
    /// Double width.
    DoubleWidth = 2,
    /// Double height and width.
    DoubleBoth = 3,
    /// Condensed.
    Condensed = 4,
}

bitflags! {
    /// Which blocks appear in an invoice's trailing summary, set via
    /// `setInvoiceOption`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InvoiceSummaryOption: u32 {
        /// Print the VAT rate breakdown table.
        const VAT_BREAKDOWN   = 1 << 0;
        /// Print the payment form summary.
        const PAYMENT_FORMS   = 1 << 1;
        /// Print the total in words.
        const TOTAL_IN_WORDS  = 1 << 2;
        /// Print the due date.
        const DUE_DATE        = 1 << 3;
        /// Print the signature lines.
        const SIGNATURE_LINES = 1 << 4;
    }
}

bitflags! {
    /// Secondary invoice formatting options, set via `setInvoiceOption`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InvoiceOption2: u32 {
        /// Print the seller's bank account number.
        const BANK_ACCOUNT       = 1 << 0;
        /// Print a QR code linking to the invoice.
        const QR_CODE            = 1 << 1;
        /// Suppress the printed copy marker.
        const NO_COPY_MARKER     = 1 << 2;
        /// Print in landscape (wide) layout.
        const WIDE_LAYOUT        = 1 << 3;
    }
}

bitflags! {
    /// Tertiary invoice formatting options, set via `setInvoiceOption`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InvoiceOption3: u32 {
        /// Print split-payment (VAT mechanism) notice.
        const SPLIT_PAYMENT   = 1 << 0;
        /// Print the reverse-charge notice.
        const REVERSE_CHARGE  = 1 << 1;
    }
}

/// Device firmware and hardware identity, `getVersionInfo` (opcode `#v`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionInfo {
    /// Firmware variant name (e.g. `"VENTO"`).
    pub kind: String,
    /// Firmware version string (e.g. `"1.00"`).
    pub version: String,
}

/// `getDeviceInfo1` (opcode `$i`, mode 0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo1 {
    /// Device model name.
    pub name: String,
    /// Application firmware version.
    pub software_version: String,
    /// Print module firmware version.
    pub print_module_version: String,
    /// System name.
    pub system_name: String,
    /// System firmware version.
    pub system_version: String,
    /// Number of connected customer displays.
    pub displays: i32,
    /// Print head width, in dots.
    pub printing_width: i32,
    /// Whether electronic copy (e-journal) storage is present.
    pub e_copy: bool,
    /// Fiscal memory capacity, in bytes.
    pub fiscal_memory_size: i64,
}

/// `getDeviceInfo2` (opcode `$i`, mode 1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo2 {
    /// Fiscal memory capacity, in bytes.
    pub fiscal_memory_size: i64,
    /// Size of a single fiscal memory record, in bytes.
    pub record_size: i64,
    /// Fiscal memory operating mode.
    pub mode: i32,
    /// Factory-assigned unique device number.
    pub unique_number: String,
    /// Taxpayer NIP registered to this device.
    pub nip: String,
    /// Maximum number of fiscal memory records the device can hold.
    pub max_records_count: i64,
    /// Number of fiscal memory records written so far.
    pub records_count: i64,
    /// Maximum number of daily reports the device can hold.
    pub max_daily_reports_count: i64,
    /// Number of daily reports written so far.
    pub daily_reports_count: i64,
    /// Maximum number of RAM resets the device can record.
    pub max_ram_resets_count: i64,
    /// Number of RAM resets recorded so far.
    pub ram_resets_count: i64,
    /// Maximum number of VAT rate changes the device can record.
    pub max_vat_rate_changes_count: i64,
    /// Number of VAT rate changes recorded so far.
    pub vat_rate_changes_count: i64,
    /// Maximum number of currency changes the device can record.
    pub max_currency_changes_count: i64,
    /// Number of currency changes recorded so far.
    pub currency_changes_count: i64,
}

/// Device real-time clock, `getClock`/`setClock` (opcodes `#c`/`$c`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockInfo {
    /// Four-digit year.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
}

/// A service check/lock date with an optional message,
/// `getServiceCheckDate`/`getServiceLockDate` (opcode `^t`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDate {
    /// Four-digit year.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Optional service message.
    pub message: String,
}

/// `getCashRegisterInfo1` (opcode `#s`, mode 21).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashRegisterInfo1 {
    /// Last reported firmware error code.
    pub last_error: i32,
    /// Device is in fiscal mode.
    pub fiscal: bool,
    /// A transaction is open.
    pub transaction: bool,
    /// The open transaction is confirmable.
    pub transaction_ok: bool,
    /// Number of RAM resets recorded.
    pub ram_resets: i32,
    /// Four-digit year of the current business day.
    pub year: u16,
    /// Month of the current business day.
    pub month: u8,
    /// Day of the current business day.
    pub day: u8,
    /// Per-VAT-rate totalisers, A through F.
    pub vat: [String; 6],
    /// Number of receipts issued today.
    pub receipts: i32,
    /// Per-VAT-rate running totals, A through G.
    pub tot: [String; 7],
    /// Current cash-in-drawer amount.
    pub cash: String,
    /// Device serial number.
    pub number: String,
}

/// `getCashRegisterInfo2` (opcode `#s`, modes 22/23/99).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashRegisterInfo2 {
    /// Last reported firmware error code.
    pub last_error: i32,
    /// Device is in fiscal mode.
    pub fiscal: bool,
    /// A transaction is open.
    pub transaction: bool,
    /// The open transaction is confirmable.
    pub transaction_ok: bool,
    /// Number of memory resets recorded.
    pub resets: i32,
    /// Four-digit year of the current business day.
    pub year: u16,
    /// Month of the current business day.
    pub month: u8,
    /// Day of the current business day.
    pub day: u8,
    /// Per-VAT-rate totalisers, A through G.
    pub vat: [String; 7],
    /// Number of receipts issued today.
    pub receipts: i32,
    /// Per-VAT-rate running totals, A through G.
    pub tot: [String; 7],
    /// Current cash-in-drawer amount.
    pub cash: String,
    /// Device serial number.
    pub number: String,
}

/// `getCashRegisterInfo3` (opcode `#s`, mode 3).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashRegisterInfo3 {
    /// Four-digit year of the current business day.
    pub year: u16,
    /// Month of the current business day.
    pub month: u8,
    /// Day of the current business day.
    pub day: u8,
    /// Number of daily reports already used.
    pub used_reports: i32,
    /// Number of daily reports still available.
    pub free_reports: i32,
    /// Device is in a locked (out-of-service) state.
    pub locked: bool,
    /// Per-VAT-rate running totals, A through G.
    pub tot: [String; 7],
}

/// `getCashRegisterInfo4` (opcode `#s`, mode 50).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CashRegisterInfo4 {
    /// Number of non-fiscal documents printed.
    pub documents: i32,
    /// Number of invoices issued.
    pub invoices: i32,
}

/// `getCashRegisterInfo5` (opcode `#s`, mode 90).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashRegisterInfo5 {
    /// Storage volume label.
    pub label: String,
    /// Storage state code.
    pub state: i32,
    /// Total storage size, in bytes.
    pub size: i64,
    /// Free storage space, in bytes.
    pub free_mem: i64,
    /// Number of files stored.
    pub files: i32,
    /// Number of daily reports still available.
    pub free_reports: i32,
    /// Number of the last daily report written.
    pub last_report_nr: i32,
    /// Timestamp of the last write.
    pub last_write: String,
}

/// `getCashRegisterInfo6`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashRegisterInfo6 {
    /// Report/document kind code.
    pub kind: i32,
    /// Transaction count.
    pub transaction: i32,
    /// Grand total.
    pub total: String,
    /// Per-VAT-rate running totals, A through G.
    pub tot: [String; 7],
}

/// `getCashRegisterInfo7`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CashRegisterInfo7 {
    /// Reported amount.
    pub amount: String,
}

/// Shared date/time fields every fiscal memory record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FiscalMemoryRecordDate {
    /// Four-digit year.
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

/// A daily report written to fiscal memory (reply prefix `10#X`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReportRecord {
    /// The record's date/time.
    pub date: FiscalMemoryRecordDate,
    /// Number of receipts issued.
    pub receipts: i32,
    /// Number of receipts cancelled.
    pub cancelled_receipts: i32,
    /// Number of database changes during the day.
    pub database_changes: i32,
    /// Monetary value of cancelled receipts.
    pub cancelled_receipts_value: String,
    /// Per-VAT-rate running totals, A through G.
    pub tot: [String; 7],
}

/// A VAT rate change written to fiscal memory (reply prefix `11#X`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VatChangeRecord {
    /// The record's date/time.
    pub date: FiscalMemoryRecordDate,
    /// The new per-rate VAT percentages, A through G.
    pub vat: [String; 7],
}

/// A RAM reset written to fiscal memory (reply prefix `12#X`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RamResetRecord {
    /// The record's date/time.
    pub date: FiscalMemoryRecordDate,
    /// Firmware-reported reset reason code.
    pub reason: i32,
    /// Sequential reset number.
    pub reset_number: i32,
}

/// The post-reset sell marker written to fiscal memory (reply prefix
/// `13#X`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SellAfterRamResetRecord {
    /// The record's date/time.
    pub date: FiscalMemoryRecordDate,
}

/// A single fiscal memory record, as returned by `getFiscalMemoryRecord`.
///
/// Tagged variant replacing the source's `FiscalMemoryRecord` base
/// class and `getType()` virtual dispatch. The discriminant is one of
/// five literal reply prefixes (`10#X`, `11#X`, `12#X`, `13#X`,
/// `25#X`); anything else (including a blank reply) is `Empty`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FiscalMemoryRecord {
    /// No more records to read.
    #[default]
    Empty,
    /// `10#X`.
    DailyReport(DailyReportRecord),
    /// `11#X`.
    VatChange(VatChangeRecord),
    /// `12#X`.
    RamReset(RamResetRecord),
    /// `13#X` / `25#X`.
    SellAfterRamReset(SellAfterRamResetRecord),
}

/// A receipt line item, argument to `printReceiptLine`.
///
/// Which fields are populated selects the wire shape; see
/// [`crate::command::receipt::print_receipt_line`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// 1-based line number within the receipt.
    pub line: i32,
    /// Item name.
    pub name: String,
    /// Barcode, if this line should print one (selects the barcode
    /// wire shape when non-empty).
    pub barcode: String,
    /// Free-text description (selects the description wire shape when
    /// non-empty and no barcode is set).
    pub description: String,
    /// VAT rate letter, `"A"`-`"G"`.
    pub vat: String,
    /// Quantity, as the firmware's decimal string.
    pub quantity: String,
    /// Unit price.
    pub price: f64,
    /// Line gross total.
    pub gross: f64,
    /// Per-line discount kind.
    pub discount_type: DiscountType,
    /// Per-line discount reason.
    pub discount_desc: DiscountDescriptionType,
    /// Discount amount or percentage, per `discount_type`.
    pub discount_value: f64,
    /// Discount label printed on the receipt.
    pub discount_name: String,
}

/// One payment method's contribution to a transaction's settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    /// The payment method.
    pub kind: PaymentType,
    /// Display name (for card/cheque/coupon names).
    pub name: String,
    /// Amount settled via this method.
    pub amount: f64,
}

/// A single container deposit/return line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deposit {
    /// Container number/code.
    pub nr: String,
    /// Quantity.
    pub quantity: String,
    /// Per-unit deposit amount.
    pub amount: f64,
}

/// Simple single-form payment summary for `confirmTransactionWithPaymentForms1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFormsInfo1 {
    /// Cash was used.
    pub cash_flag: bool,
    /// Card was used.
    pub card_flag: bool,
    /// Cheque was used.
    pub cheque_flag: bool,
    /// Coupon was used.
    pub coupon_flag: bool,
    /// A deposit was collected.
    pub deposit_collected_flag: bool,
    /// A deposit was returned.
    pub deposit_returned_flag: bool,
    /// Change is due.
    pub change_flag: bool,
    /// Cash amount tendered.
    pub cash_in: f64,
    /// Card amount tendered.
    pub card_in: f64,
    /// Cheque amount tendered.
    pub cheque_in: f64,
    /// Coupon amount tendered.
    pub coupon_in: f64,
    /// Deposit amount collected.
    pub deposit_collected: f64,
    /// Deposit amount returned.
    pub deposit_returned: f64,
    /// Change given back to the customer.
    pub check_out: f64,
    /// Card name/network.
    pub card_name: String,
    /// Cheque issuer name.
    pub cheque_name: String,
    /// Coupon issuer name.
    pub coupon_name: String,
}

/// Multi-form payment summary for `confirmTransactionWithPaymentForms2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFormsInfo2 {
    /// Cash was used.
    pub cash_flag: bool,
    /// Change is due.
    pub change_flag: bool,
    /// Cash amount tendered.
    pub cash_in: f64,
    /// Change given back to the customer.
    pub change_out: f64,
    /// Non-cash payment forms, in settlement order.
    pub payment_forms: Vec<PaymentForm>,
    /// Deposits collected during the transaction.
    pub deposit_collected: Vec<Deposit>,
    /// Deposits returned during the transaction.
    pub deposit_returned: Vec<Deposit>,
}

/// Arguments to `beginInvoice`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeginInvoiceData {
    /// Number of line items to follow.
    pub items: i32,
    /// Print the customer's copy.
    pub print_copy: bool,
    /// Reserve a top margin for letterhead.
    pub top_margin: bool,
    /// Print a signature line.
    pub signature: bool,
    /// Number of additional copies to print.
    pub additional_copies: i32,
    /// Invoice number, assigned by the caller's system.
    pub invoice_nr: String,
    /// Buyer NIP.
    pub nip: String,
    /// Payment due date text.
    pub timeout: String,
    /// Payment form text.
    pub payment_form: String,
    /// Buyer name/address, first line.
    pub client: String,
    /// Seller name/address, first line.
    pub seller: String,
    /// External system invoice number.
    pub system_nr: String,
    /// Additional buyer address lines.
    pub client_lines: Vec<String>,
}

/// Arguments to `finishInvoice`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinishInvoiceData {
    /// Whether the invoice has been paid.
    pub payed_flag: bool,
    /// Payment date/description text.
    pub payed: String,
    /// Client block visibility.
    pub client: Option<ClientSellerOption>,
    /// Seller block visibility.
    pub seller: Option<ClientSellerOption>,
    /// Cash tendered.
    pub cash_in: f64,
    /// Invoice total.
    pub total: f64,
    /// Total discount applied.
    pub discount_value: f64,
    /// Buyer display name.
    pub client_name: String,
    /// Seller display name.
    pub seller_name: String,
    /// Footer lines.
    pub extra_lines: ExtraLines,
}

/// Persistent invoice formatting configuration, `setInvoiceOption`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceOptions {
    /// Number of additional copies to print by default.
    pub additional_copies: i32,
    /// Client block visibility.
    pub client: Option<ClientSellerOption>,
    /// Seller block visibility.
    pub seller: Option<ClientSellerOption>,
    /// Whether invoices default to paid.
    pub payed_flag: bool,
    /// Four-digit year used to seed invoice numbering.
    pub year: u16,
    /// Month used to seed invoice numbering.
    pub month: u8,
    /// Day used to seed invoice numbering.
    pub day: u8,
    /// Summary block options.
    pub summary_option: InvoiceSummaryOption,
    /// Secondary formatting options.
    pub invoice_options2: InvoiceOption2,
    /// Default client identifier kind.
    pub client_id_type: ClientIdType,
    /// Tertiary formatting options.
    pub invoice_options3: InvoiceOption3,
    /// Default payment due text.
    pub timeout: String,
    /// Default payment form text.
    pub payment_form: String,
    /// Default buyer display name.
    pub client_name: String,
    /// Default seller display name.
    pub seller_name: String,
    /// Default external system number.
    pub system_nr: String,
}

/// Arguments to `saleReceipt` / `returnOfArticle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleReceiptData {
    /// Print number to reference on the document.
    pub print_id: i32,
    /// How the document should be printed.
    pub print_option: Option<SaleReceiptOption>,
    /// Original receipt's month.
    pub month: i32,
    /// Original receipt's year.
    pub year: i32,
    /// Amount of the sale/return.
    pub amount: f64,
    /// Original receipt number/identifier.
    pub receipt: String,
    /// Customer display name.
    pub client_name: String,
    /// Payment terminal identifier.
    pub terminal: String,
    /// Card network name.
    pub card_name: String,
    /// Masked card number.
    pub card_nr: String,
    /// Card authorization code.
    pub auth_code: String,
}

/// A single line on a non-fiscal printout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NonFiscalLine {
    /// Document print number.
    pub print_nr: i32,
    /// 1-based line number within the document.
    pub line_nr: i32,
    /// Bold text.
    pub bold: bool,
    /// Inverse (highlighted) text.
    pub inverse: bool,
    /// Centered text.
    pub center: bool,
    /// Font selector.
    pub font: i32,
    /// Text attributes.
    pub attrs: Option<FontAttrs>,
    /// Wrapped text segments making up the line.
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_empty_when_either_field_missing() {
        assert!(Id::default().is_empty());
        assert!(
            Id {
                printer_id: "1".into(),
                operator_id: "".into(),
            }
            .is_empty()
        );
        assert!(
            !Id {
                printer_id: "1".into(),
                operator_id: "2".into(),
            }
            .is_empty()
        );
    }

    #[test]
    fn extra_lines_count_stops_at_first_empty_from_the_top() {
        let lines = ExtraLines {
            line1: "a".into(),
            line2: String::new(),
            line3: "c".into(),
        };
        // line2 is blank, so count stops there even though line3 is
        // populated; line3 is never sent in this configuration.
        assert_eq!(lines.count(), 1);

        let lines = ExtraLines {
            line1: "a".into(),
            ..Default::default()
        };
        assert_eq!(lines.count(), 1);

        assert_eq!(ExtraLines::default().count(), 0);

        let lines = ExtraLines {
            line1: "a".into(),
            line2: "b".into(),
            line3: "c".into(),
        };
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn printer_error_display_includes_code_and_message() {
        let err = PrinterError::new(0);
        assert!(err.to_string().contains("(0)"));
    }

    #[test]
    fn client_id_type_default_is_none() {
        assert_eq!(ClientIdType::default(), ClientIdType::None);
    }
}
