//! Command serialisation and response parsing.
//!
//! [`Request`] assembles a command body in the fixed order the firmware
//! expects: integer parameters joined by `;`, the opcode, then text
//! parameters (each carrying its own terminator, Mazovia-transcoded).
//! [`Reply`] is the matching cursor-based reader operation functions
//! use to pull typed fields out of a response payload.

pub mod cash_register;
pub mod device;
pub mod fiscal_memory;
pub mod invoice;
pub mod nonfiscal;
pub mod receipt;
pub mod session;
pub mod status;

use crate::mazovia;
use crate::types::DiscountDescriptionType;

/// Wire code for a discount description, including the open-ended
/// `Other` range.
pub(crate) fn discount_desc_code(desc: DiscountDescriptionType) -> i64 {
    match desc {
        DiscountDescriptionType::None => 0,
        DiscountDescriptionType::Rebate => 1,
        DiscountDescriptionType::Surcharge => 2,
        DiscountDescriptionType::Promotion => 3,
        DiscountDescriptionType::Loyalty => 4,
        DiscountDescriptionType::Other(code) => code as i64,
    }
}

/// Carriage-return terminator used for textual fields.
pub const CR: u8 = b'\r';

/// Slash terminator used for numeric-as-text fields.
pub const SLASH: u8 = b'/';

/// Formats an `i32` as a plain decimal string (`fromInt`).
pub fn from_int(n: i32) -> String {
    n.to_string()
}

/// Formats an `i64` as a plain decimal string (`fromLong`).
pub fn from_long(n: i64) -> String {
    n.to_string()
}

/// Formats a monetary/quantity value to two decimal places (`fromFloat`).
///
/// The firmware accepts (and the wire examples show) trailing zeros;
/// it does not accept a locale comma. Values are assumed by the caller
/// to fit the firmware's 10-digit / 2-decimal-place limit.
pub fn from_float(n: f64) -> String {
    format!("{n:.2}")
}

/// A command body under construction.
///
/// Built up with `.int(..)` / `.cr(..)` / `.slash(..)` calls in the
/// exact order the firmware expects them serialised, then turned into
/// wire bytes with [`Request::body`].
#[derive(Debug, Clone)]
pub struct Request {
    opcode: &'static str,
    int_params: Vec<i64>,
    text_params: Vec<u8>,
    with_ctrl: bool,
}

impl Request {
    /// Starts a new request for the given opcode (e.g. `"#v"`, `"$l"`).
    pub fn new(opcode: &'static str) -> Self {
        Self {
            opcode,
            int_params: Vec::new(),
            text_params: Vec::new(),
            with_ctrl: false,
        }
    }

    /// Marks this request as needing the trailing XOR control byte.
    pub fn with_ctrl(mut self) -> Self {
        self.with_ctrl = true;
        self
    }

    /// Appends one integer parameter.
    pub fn int(mut self, value: i64) -> Self {
        self.int_params.push(value);
        self
    }

    /// Appends an integer parameter only when `value` is `Some`.
    pub fn int_opt(self, value: Option<i64>) -> Self {
        match value {
            Some(v) => self.int(v),
            None => self,
        }
    }

    /// Appends a CR-terminated text field (a name, label, or free text).
    pub fn cr(mut self, text: impl AsRef<str>) -> Self {
        self.text_params.extend(mazovia::to_mazovia(text.as_ref()));
        self.text_params.push(CR);
        self
    }

    /// Appends a slash-terminated text field (a numeric value rendered
    /// as a string, e.g. via [`from_float`]).
    pub fn slash(mut self, text: impl AsRef<str>) -> Self {
        self.text_params.extend(mazovia::to_mazovia(text.as_ref()));
        self.text_params.push(SLASH);
        self
    }

    /// Appends raw already-terminated bytes, for callers that built a
    /// text block themselves (e.g. the header's trailing `0xFF` byte).
    pub fn raw_text(mut self, bytes: &[u8]) -> Self {
        self.text_params.extend_from_slice(bytes);
        self
    }

    /// Assembles the wire body: `int;int;...opcode<text-block>`.
    pub fn body(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let joined = self
            .int_params
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(";");
        out.extend_from_slice(joined.as_bytes());
        out.extend_from_slice(self.opcode.as_bytes());
        out.extend_from_slice(&self.text_params);
        out
    }

    /// Whether this request should carry the trailing control byte.
    pub fn wants_ctrl(&self) -> bool {
        self.with_ctrl
    }
}

/// A cursor over a response payload, used to pull typed fields out in
/// the firmware's fixed field order.
///
/// Unparseable or missing fields are reported via `None`/unchanged
/// cursor position rather than an error: the caller (an operation
/// function) leaves the corresponding record field at its default,
/// matching the firmware's forgiving, model-variable reply layouts.
#[derive(Debug, Clone, Copy)]
pub struct Reply<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reply<'a> {
    /// Wraps a response payload for reading.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Remaining unread bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Whether every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Tries to consume an exact literal prefix (e.g. `"1#R"`).
    /// Leaves the cursor unchanged and returns `false` if it doesn't match.
    pub fn literal(&mut self, lit: &str) -> bool {
        let lit = lit.as_bytes();
        if self.remaining().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Consumes one byte if it equals `b`.
    pub fn byte(&mut self, b: u8) -> bool {
        if self.remaining().first() == Some(&b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Parses a run of ASCII digits (optionally signed), consuming a
    /// trailing `delim` byte if present. Returns `None` without
    /// advancing past any partial digits if no digits are found.
    pub fn int(&mut self, delim: u8) -> Option<i64> {
        let start = self.pos;
        let bytes = self.remaining();
        let mut i = 0;
        if bytes.first() == Some(&b'-') {
            i += 1;
        }
        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits_start {
            self.pos = start;
            return None;
        }
        let text = std::str::from_utf8(&bytes[..i]).ok()?;
        let value = text.parse().ok()?;
        self.pos += i;
        self.byte(delim);
        Some(value)
    }

    /// Parses a strict decimal (mandatory `.` and fractional digits),
    /// consuming a trailing `delim` byte if present.
    pub fn real(&mut self, delim: u8) -> Option<f64> {
        let start = self.pos;
        let bytes = self.remaining();
        let mut i = 0;
        if bytes.first() == Some(&b'-') {
            i += 1;
        }
        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == int_start {
            self.pos = start;
            return None;
        }
        if bytes.get(i) != Some(&b'.') {
            self.pos = start;
            return None;
        }
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            self.pos = start;
            return None;
        }
        let text = std::str::from_utf8(&bytes[..i]).ok()?;
        let value = text.parse().ok()?;
        self.pos += i;
        self.byte(delim);
        Some(value)
    }

    /// Consumes everything up to (not including) the next `delim` byte,
    /// Mazovia-decoded to a `String`. Consumes the delimiter itself.
    /// If `delim` never occurs, consumes to the end of the payload.
    pub fn rest_until(&mut self, delim: u8) -> String {
        let bytes = self.remaining();
        let end = bytes.iter().position(|&b| b == delim).unwrap_or(bytes.len());
        let text = mazovia::from_mazovia(&bytes[..end]);
        self.pos += end;
        self.byte(delim);
        text
    }

    /// Consumes the rest of the payload as raw bytes (used for
    /// trailing free-form fields with no further structure).
    pub fn rest(&mut self) -> &'a [u8] {
        let bytes = self.remaining();
        self.pos = self.bytes.len();
        bytes
    }

    /// Parses a `"0"`/`"1"` boolean flag, consuming a trailing `delim`.
    pub fn bool_flag(&mut self, delim: u8) -> Option<bool> {
        self.int(delim).map(|n| n != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_desc_code_passes_through_other_variant() {
        assert_eq!(discount_desc_code(DiscountDescriptionType::Loyalty), 4);
        assert_eq!(discount_desc_code(DiscountDescriptionType::Other(9)), 9);
    }

    #[test]
    fn from_float_pads_to_two_decimals() {
        assert_eq!(from_float(3.5), "3.50");
        assert_eq!(from_float(3.0), "3.00");
    }

    #[test]
    fn request_body_matches_printreceiptline_example() {
        // §8 scenario 6: item {line=1, name="chleb", quantity="1.000",
        // vat="A", price=3.50, gross=3.50}, no barcode/description/discount.
        let req = Request::new("$l")
            .int(1)
            .cr("chleb")
            .cr("1.000")
            .slash("A")
            .slash(from_float(3.50))
            .slash(from_float(3.50));

        assert_eq!(
            req.body(),
            b"1$lchleb\r1.000\rA/3.50/3.50/".to_vec()
        );
    }

    #[test]
    fn request_body_joins_multiple_ints_with_semicolon() {
        let req = Request::new("#e").int(1).int(2).int(3);
        assert_eq!(req.body(), b"1;2;3#e".to_vec());
    }

    #[test]
    fn request_body_with_no_ints_has_bare_opcode_prefix() {
        let req = Request::new("#v");
        assert_eq!(req.body(), b"#v".to_vec());
    }

    #[test]
    fn reply_parses_version_info_example() {
        // §8 scenario 5.
        let mut reply = Reply::new(b"1#RVENTO/1.00");
        assert!(reply.literal("1#R"));
        let kind = reply.rest_until(b'/');
        let version = reply.rest_until(b'\r').trim_end().to_string();
        assert_eq!(kind, "VENTO");
        assert_eq!(version, "1.00");
    }

    #[test]
    fn reply_int_fails_without_advancing_on_no_digits() {
        let mut reply = Reply::new(b"abc");
        assert_eq!(reply.int(b';'), None);
        assert_eq!(reply.remaining(), b"abc");
    }

    #[test]
    fn reply_real_requires_fractional_part() {
        let mut reply = Reply::new(b"42;");
        assert_eq!(reply.real(b';'), None);
        assert_eq!(reply.remaining(), b"42;");

        let mut reply = Reply::new(b"42.50;");
        assert_eq!(reply.real(b';'), Some(42.50));
        assert!(reply.is_empty());
    }

    #[test]
    fn reply_rest_until_consumes_to_end_when_delim_absent() {
        let mut reply = Reply::new(b"12345");
        assert_eq!(reply.rest_until(b'/'), "12345");
        assert!(reply.is_empty());
    }
}
