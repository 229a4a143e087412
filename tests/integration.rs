//! Integration tests for the wire protocol pipeline.
//!
//! These exercise complete byte sequences produced by the framing,
//! checksum, Mazovia transcoding, and command-serialisation layers
//! together, matching the literal scenarios documented for the
//! protocol. They do not open a serial port: everything below
//! [`posnet_fiscal::transport::Connection`] is pure over byte strings,
//! so a real connection is never required to verify it.

use posnet_fiscal::command::status::{decode_dle, decode_enq};
use posnet_fiscal::command::{Request, from_float};
use posnet_fiscal::framing::{ESC, control_byte, frame, unframe};
use posnet_fiscal::mazovia::{from_mazovia, to_mazovia};
use posnet_fiscal::types::{DleStatus, EnqStatus};

// ============================================================================
// Framing & checksum
// ============================================================================

#[test]
fn frame_wraps_body_in_esc_p_escape() {
    let framed = frame(b"#v", false);
    assert_eq!(framed, [&[ESC, b'P'][..], b"#v", &[ESC, b'\\']].concat());
}

#[test]
fn frame_appends_two_hex_digit_control_byte_when_requested() {
    let framed = frame(b"2#e", true);
    let ctrl = control_byte(b"2#e");
    let mut expected = vec![ESC, b'P'];
    expected.extend_from_slice(b"2#e");
    expected.extend_from_slice(&ctrl);
    expected.extend_from_slice(&[ESC, b'\\']);
    assert_eq!(framed, expected);
}

#[test]
fn control_byte_is_zero_padded_below_0x10() {
    // A body whose XOR happens to need only one hex digit must still
    // render two ASCII characters, or the firmware rejects the frame.
    let body = [0xFFu8 ^ 0x05];
    assert_eq!(control_byte(&body), *b"05");
}

#[test]
fn unframe_strips_surrounding_noise() {
    let mut window = vec![0x00, 0xFF];
    window.extend_from_slice(&frame(b"hello", false));
    window.extend_from_slice(b"trailing garbage");
    assert_eq!(unframe(&window).unwrap(), b"hello");
}

#[test]
fn checksum_round_trip_xors_to_zero() {
    let body = b"1;2;3$x10.00/";
    let ctrl = control_byte(body);
    let ctrl_byte = u8::from_str_radix(std::str::from_utf8(&ctrl).unwrap(), 16).unwrap();
    let xor_all = body.iter().fold(0xFFu8, |acc, b| acc ^ b);
    assert_eq!(xor_all ^ ctrl_byte, 0x00);
}

// ============================================================================
// Mazovia transcoding
// ============================================================================

#[test]
fn mazovia_round_trips_polish_diacritics() {
    let text = "Zażółć gęślą jaźń";
    let encoded = to_mazovia(text);
    assert_eq!(from_mazovia(&encoded), text);
}

#[test]
fn mazovia_passes_through_ascii_unchanged() {
    assert_eq!(to_mazovia("FV/1/2026"), b"FV/1/2026".to_vec());
}

// ============================================================================
// Out-of-band status decoding
// ============================================================================

#[test]
fn enq_status_scenario_matches_documented_reply() {
    // A mock ENQ reply of 0x61 sets only transactionOk.
    assert_eq!(
        decode_enq(0x61),
        EnqStatus {
            fiscal: false,
            command: false,
            transaction: false,
            transaction_ok: true,
        }
    );
}

#[test]
fn dle_status_decodes_all_three_bits() {
    assert_eq!(
        decode_dle(0x77),
        DleStatus {
            online: true,
            paper: true,
            error: true,
        }
    );
}

// ============================================================================
// Command serialisation end-to-end
// ============================================================================

#[test]
fn set_error_handling_mode_matches_documented_scenario() {
    // setErrorHandlingMode(EHM_2) writes the framed body "2#e" followed
    // by its control byte.
    let req = Request::new("#e").with_ctrl().int(2);
    let body = req.body();
    assert_eq!(body, b"2#e".to_vec());

    let framed = frame(&body, req.wants_ctrl());
    let mut expected = vec![ESC, b'P'];
    expected.extend_from_slice(&body);
    expected.extend_from_slice(&control_byte(&body));
    expected.extend_from_slice(&[ESC, b'\\']);
    assert_eq!(framed, expected);
}

#[test]
fn print_receipt_line_matches_documented_scenario() {
    // A bare line item with no barcode, description or discount
    // serialises to exactly this byte sequence before framing.
    let req = Request::new("$l")
        .int(1)
        .cr("chleb")
        .cr("1.000")
        .slash("A")
        .slash(from_float(3.50))
        .slash(from_float(3.50));
    assert_eq!(req.body(), b"1$lchleb\r1.000\rA/3.50/3.50/".to_vec());
}

#[test]
fn get_version_info_request_has_no_parameters() {
    let req = Request::new("#v");
    assert_eq!(req.body(), b"#v".to_vec());
    assert!(!req.wants_ctrl());
}
