//! Driver for NOVITUS/POSNET fiscal receipt printers.
//!
//! A fiscal printer is driven over a plain RS-232 (or USB-serial) link
//! using a half-duplex, request/response wire protocol: commands are
//! wrapped in an `ESC P ... ESC \` envelope with an optional XOR
//! control byte, text is transcoded to the Mazovia code page, and a
//! small set of out-of-band single bytes (`ENQ`/`DLE`/`BEL`/`CAN`)
//! carry status queries outside that envelope.
//!
//! The crate is organised bottom-up:
//!
//! - [`transport`] opens and owns the serial port.
//! - [`framing`] wraps/unwraps the `ESC P ... ESC \` envelope and
//!   computes the control byte.
//! - [`command`] serialises typed operation arguments into wire
//!   bodies and parses typed records back out of reply payloads; its
//!   submodules (`status`, `device`, `cash_register`, `fiscal_memory`,
//!   `receipt`, `invoice`, `session`, `nonfiscal`) are one function
//!   per documented firmware command.
//! - [`mazovia`] transcodes outbound text to the firmware's single-byte
//!   Polish code page, and can decode it back for display.
//! - [`types`] is the closed family of argument and record types the
//!   operation functions accept and return.
//! - [`error_codes`] maps the firmware's numeric error codes to their
//!   documented Polish diagnostic messages.
//!
//! The driver does not interpret fiscal semantics and does not pool or
//! multiplex connections: one [`transport::Connection`] is exclusively
//! owned by one caller for the lifetime of a call.

pub mod command;
pub mod error;
pub mod error_codes;
pub mod framing;
pub mod mazovia;
pub mod transport;
pub mod types;

pub use error::{DriverError, FramingError, Result, TransportError};
pub use transport::Connection;
