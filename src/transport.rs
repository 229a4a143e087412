//! Serial transport.
//!
//! Owns one serial port opened at a fixed line discipline (default
//! 9600 8N1, XON/XOFF). This is the only component that touches the
//! OS; everything above it works in terms of byte slices and is
//! trivially testable with an in-memory reader/writer.

use std::io::{Read, Write};
use std::time::Duration;

use log::{debug, trace};

use crate::error::{DriverError, TransportError};
use crate::framing;

/// Default baud rate for NOVITUS/POSNET printers.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Default soft read timeout.
///
/// The source driver busy-waits with no timeout at all; a disconnected
/// or hung printer hangs the caller forever. This is the documented
/// replacement default (see the Design Notes open question).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// An open connection to a fiscal printer.
///
/// Exclusively owned by one caller; there is no internal locking and
/// no shared-port support. Created closed, opened with [`Connection::open`],
/// closed with [`Connection::close`] (idempotent; also happens on drop).
pub struct Connection {
    path: String,
    baud_rate: u32,
    timeout: Duration,
    port: Option<Box<dyn serialport::SerialPort>>,
}

impl Connection {
    /// Opens `path` at [`DEFAULT_BAUD_RATE`] with [`DEFAULT_TIMEOUT`].
    pub fn open(path: &str) -> Result<Self, DriverError> {
        Self::open_with(path, DEFAULT_BAUD_RATE, DEFAULT_TIMEOUT)
    }

    /// Opens `path` at the given baud rate and read timeout.
    ///
    /// Configures 8 data bits, no parity, one stop bit, and XON/XOFF
    /// software flow control, matching the firmware's fixed line
    /// discipline.
    pub fn open_with(path: &str, baud_rate: u32, timeout: Duration) -> Result<Self, DriverError> {
        debug!("opening {path} at {baud_rate} baud");

        let port = serialport::new(path, baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::Software)
            .timeout(timeout)
            .open()
            .map_err(TransportError::from)?;

        Ok(Self {
            path: path.to_string(),
            baud_rate,
            timeout,
            port: Some(port),
        })
    }

    /// The device path this connection was opened on.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The configured baud rate.
    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// The configured read timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the underlying handle is currently open.
    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    /// Releases the OS handle. Idempotent.
    pub fn close(&mut self) {
        self.port = None;
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn serialport::SerialPort>, DriverError> {
        self.port
            .as_mut()
            .ok_or(DriverError::Transport(TransportError::NotOpen))
    }

    /// Writes all of `bytes`, blocking until they are queued to the OS.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), DriverError> {
        trace!("write {} bytes: {bytes:02x?}", bytes.len());
        self.port_mut()?
            .write_all(bytes)
            .map_err(|e| DriverError::Transport(TransportError::Io(e)))
    }

    /// Reads exactly one byte, blocking until it arrives.
    pub fn read_byte(&mut self) -> Result<u8, DriverError> {
        let mut buf = [0u8; 1];
        self.port_mut()?
            .read_exact(&mut buf)
            .map_err(|e| DriverError::Transport(TransportError::Io(e)))?;
        Ok(buf[0])
    }

    /// Reads bytes until the `ESC \` terminator is observed, returning
    /// the payload between the leading `ESC P` and the trailing `ESC \`,
    /// exclusive.
    pub fn read_frame(&mut self) -> Result<Vec<u8>, DriverError> {
        let mut window = Vec::new();
        loop {
            let byte = self.read_byte()?;
            window.push(byte);
            if window.len() >= 2
                && window[window.len() - 2] == framing::ESC
                && window[window.len() - 1] == b'\\'
            {
                break;
            }
        }
        let payload = framing::unframe(&window)?;
        trace!("read frame payload: {payload:02x?}");
        Ok(payload.to_vec())
    }

    /// Sends a framed command body, optionally with the control byte.
    /// Does not read a response.
    pub fn send_command(&mut self, body: &[u8], with_ctrl: bool) -> Result<(), DriverError> {
        self.write_bytes(&framing::frame(body, with_ctrl))
    }

    /// Sends a framed command body and reads the response frame.
    pub fn execute_command(
        &mut self,
        body: &[u8],
        with_ctrl: bool,
    ) -> Result<Vec<u8>, DriverError> {
        self.send_command(body, with_ctrl)?;
        self.read_frame()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}

/// An in-memory [`Connection`]-shaped transport for unit tests.
///
/// Wraps any `Read + Write` pair the way the source tests the protocol
/// engine against a mock serial stream.
pub struct MockTransport<S> {
    stream: S,
}

impl<S: Read + Write> MockTransport<S> {
    /// Wraps `stream` for use in tests.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Writes all of `bytes`.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.stream.write_all(bytes)
    }

    /// Reads exactly one byte.
    pub fn read_byte(&mut self) -> std::io::Result<u8> {
        let mut buf = [0u8; 1];
        self.stream.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Reads until `ESC \` and returns the unframed payload.
    pub fn read_frame(&mut self) -> Result<Vec<u8>, DriverError> {
        let mut window = Vec::new();
        loop {
            let byte = self
                .read_byte()
                .map_err(|e| DriverError::Transport(TransportError::Io(e)))?;
            window.push(byte);
            if window.len() >= 2
                && window[window.len() - 2] == framing::ESC
                && window[window.len() - 1] == b'\\'
            {
                break;
            }
        }
        Ok(framing::unframe(&window)?.to_vec())
    }

    /// Consumes the mock, returning the inner stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct LoopbackWriter(Vec<u8>);

    impl Write for LoopbackWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Read for LoopbackWriter {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Ok(0)
        }
    }

    #[test]
    fn mock_transport_write_bytes_roundtrips() {
        let mut mock = MockTransport::new(LoopbackWriter(Vec::new()));
        mock.write_bytes(&[0x07]).unwrap();
        assert_eq!(mock.into_inner().0, vec![0x07]);
    }

    #[test]
    fn mock_transport_read_frame_strips_envelope() {
        let mut framed = vec![0x1B, b'P'];
        framed.extend_from_slice(b"1#RVENTO/1.00");
        framed.extend_from_slice(&[0x1B, b'\\']);

        let mut mock = MockTransport::new(Cursor::new(framed));
        let payload = mock.read_frame().unwrap();
        assert_eq!(payload, b"1#RVENTO/1.00");
    }

    #[test]
    fn mock_transport_read_byte_reads_single_byte() {
        let mut mock = MockTransport::new(Cursor::new(vec![0x61, 0x00]));
        assert_eq!(mock.read_byte().unwrap(), 0x61);
    }
}
