//! Envelope framing and the XOR control byte.
//!
//! Outbound frame: `ESC 'P' <body> [<ctrl-hex-2>] ESC '\'`. Inbound: the
//! same envelope, possibly preceded and followed by noise bytes the
//! firmware is known to emit; the driver locates `ESC P` and reads
//! until the matching `ESC \`.

use crate::error::FramingError;

/// `ESC` - starts and ends every frame.
pub const ESC: u8 = 0x1B;

/// Second byte of the opening marker, `ESC 'P'`.
const FRAME_OPEN: u8 = b'P';

/// Second byte of the closing marker, `ESC '\'`.
const FRAME_CLOSE: u8 = b'\\';

/// Computes the control byte for a command body.
///
/// `0xFF XOR` the byte-wise XOR of every byte in `body`, formatted as
/// two uppercase hex digits, zero-padded.
///
/// The source implementation formats the XOR result as hex and takes
/// the last two characters, which for values below `0x10` yields a
/// single digit and a malformed frame. This implementation always
/// zero-pads to two digits.
pub fn control_byte(body: &[u8]) -> [u8; 2] {
    let xor = body.iter().fold(0xFFu8, |acc, &b| acc ^ b);
    let hex = format!("{xor:02X}");
    let bytes = hex.as_bytes();
    [bytes[0], bytes[1]]
}

/// Wraps a command body in the `ESC P ... ESC \` envelope, appending
/// the control byte first when `with_ctrl` is set.
pub fn frame(body: &[u8], with_ctrl: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 6);
    out.push(ESC);
    out.push(FRAME_OPEN);
    out.extend_from_slice(body);
    if with_ctrl {
        out.extend_from_slice(&control_byte(body));
    }
    out.push(ESC);
    out.push(FRAME_CLOSE);
    out
}

/// Strips the envelope from a raw byte window, returning the payload
/// between `ESC P` and `ESC \`.
///
/// Any bytes before the opening marker or after the closing marker are
/// discarded. Returns [`FramingError`] if no complete envelope is
/// present in `window`.
pub fn unframe(window: &[u8]) -> Result<&[u8], FramingError> {
    let open_at = window
        .windows(2)
        .position(|w| w[0] == ESC && w[1] == FRAME_OPEN)
        .ok_or(FramingError::NoOpenMarker)?;
    let payload_start = open_at + 2;

    let close_at = window[payload_start..]
        .windows(2)
        .position(|w| w[0] == ESC && w[1] == FRAME_CLOSE)
        .ok_or(FramingError::NoCloseMarker)?;

    Ok(&window[payload_start..payload_start + close_at])
}
