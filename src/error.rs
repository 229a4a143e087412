//! Error types for the fiscal printer driver.
//!
//! Mirrors the taxonomy from the component design: transport and
//! framing failures are hard errors that abort the current operation;
//! response parsing is forgiving and never returns an error (fields
//! are left at their defaults, see [`crate::command::parse`]).
//! Firmware-reported error codes are a value
//! ([`crate::types::PrinterError`]), not a Rust error, since the
//! protocol surfaces them only when the caller explicitly asks via
//! `get_last_error`.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using [`DriverError`].
pub type Result<T> = std::result::Result<T, DriverError>;

/// Top-level error type for all driver operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    /// I/O failure at the OS/serial layer. The connection is no longer
    /// trusted; the caller should close and reopen it.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Bytes arrived but did not form a valid envelope.
    #[error("framing error: {0}")]
    #[diagnostic(transparent)]
    Framing(#[from] FramingError),
}

/// Transport-layer (serial port) errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the `serialport` crate (open, configure, enumerate).
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// An operation was attempted on a connection that is not open.
    #[error("connection is not open")]
    NotOpen,

    /// A read did not complete within the configured timeout.
    #[error("read timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Envelope framing errors.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// No `ESC P` opening marker found in the read window.
    #[error("no ESC P opening marker found in response")]
    NoOpenMarker,

    /// An opening marker was found but no `ESC \` closing marker
    /// followed it within the read window.
    #[error("no ESC \\ closing marker found after opening marker")]
    NoCloseMarker,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_error_displays_transport_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "device not found");
        let err: DriverError = TransportError::Io(io_err).into();
        assert!(err.to_string().contains("transport error"));
    }

    #[test]
    fn driver_error_displays_framing_error() {
        let err: DriverError = FramingError::NoOpenMarker.into();
        assert!(err.to_string().contains("framing error"));
    }
}
