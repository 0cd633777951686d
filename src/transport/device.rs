//! # Device Transport
//!
//! Writes compiled StarPRNT bytes to a printer device node: a USB or serial
//! printer (`/dev/usb/lp0`, `/dev/ttyUSB0`) or a bound Bluetooth RFCOMM port
//! (`/dev/rfcomm0`). Regular files work too, which is handy for capturing a
//! job.
//!
//! ## TTY Configuration
//!
//! Serial and RFCOMM ports are TTYs and are switched to raw mode
//! (`cfmakeraw`) before writing, so binary data passes through unmodified.
//! USB printer nodes and regular files are written as-is.
//!
//! ## Chunked Writes
//!
//! Data is written in 4096-byte chunks with a short pause between them so
//! slow links don't overflow the printer's receive buffer.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::TillrollError;
use crate::ir::Program;

/// Default device path
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Printer Device Transport
///
/// ## Example
///
/// ```no_run
/// use tillroll::interpreter::interpret;
/// use tillroll::transport::DeviceTransport;
///
/// let program = interpret(r#"{"layout":{"sections":[{"type":"thanks"}]}}"#, None);
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.send(&program)?;
/// # Ok::<(), tillroll::error::TillrollError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open a printer device for writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the `lp` or `dialout` group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, TillrollError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            TillrollError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let fd = file.as_raw_fd();
        if unsafe { libc::isatty(fd) } == 1 {
            configure_tty_raw(fd)?;
        }

        tracing::debug!(device = %path.display(), "opened printer device");

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Compile a program to StarPRNT and write it.
    pub fn send(&mut self, program: &Program) -> Result<(), TillrollError> {
        let bytes = program.to_bytes();
        tracing::info!(ops = program.len(), bytes = bytes.len(), "sending receipt");
        self.write_all(&bytes)
    }

    /// Write raw bytes, chunked, then flush.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), TillrollError> {
        let chunks = data.len().div_ceil(self.chunk_size);
        for (i, chunk) in data.chunks(self.chunk_size).enumerate() {
            self.file
                .write_all(chunk)
                .map_err(|e| TillrollError::Transport(format!("Write failed: {}", e)))?;

            if i + 1 < chunks && !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }

        self.file
            .flush()
            .map_err(|e| TillrollError::Transport(format!("Flush failed: {}", e)))
    }
}

/// Put a serial TTY into raw mode.
///
/// USB `lp` nodes are not TTYs and never get here. XON/XOFF must be off:
/// 0x11 and 0x13 are ordinary bytes in CP437 text.
fn configure_tty_raw(fd: i32) -> Result<(), TillrollError> {
    let mut termios = std::mem::MaybeUninit::uninit();
    if unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) } != 0 {
        return Err(tty_error("tcgetattr"));
    }
    let mut termios = unsafe { termios.assume_init() };
    unsafe { libc::cfmakeraw(&mut termios) };
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
        return Err(tty_error("tcsetattr"));
    }
    Ok(())
}

fn tty_error(call: &str) -> TillrollError {
    TillrollError::Transport(format!("{} failed: {}", call, io::Error::last_os_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Op;
    use crate::layout::Alignment;

    fn scratch_file(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tillroll-{}-{}", std::process::id(), name));
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_open_missing_device() {
        let err = DeviceTransport::open("/nonexistent/lp9").err().unwrap();
        assert!(matches!(err, TillrollError::Transport(_)));
        assert!(err.to_string().contains("/nonexistent/lp9"));
    }

    #[test]
    fn test_tty_is_switched_to_raw_mode() {
        let master = unsafe { libc::posix_openpt(libc::O_RDWR | libc::O_NOCTTY) };
        if master < 0 {
            return; // no pseudo-terminals in this environment
        }
        let slave = unsafe {
            assert_eq!(libc::grantpt(master), 0);
            assert_eq!(libc::unlockpt(master), 0);
            std::ffi::CStr::from_ptr(libc::ptsname(master))
                .to_string_lossy()
                .into_owned()
        };

        let transport = DeviceTransport::open(&slave).unwrap();
        let mut termios = std::mem::MaybeUninit::uninit();
        let termios = unsafe {
            assert_eq!(libc::tcgetattr(transport.file.as_raw_fd(), termios.as_mut_ptr()), 0);
            termios.assume_init()
        };
        assert_eq!(termios.c_iflag & libc::IXON, 0);
        assert_eq!(termios.c_oflag & libc::OPOST, 0);
        assert_eq!(termios.c_lflag & (libc::ICANON | libc::ECHO), 0);

        drop(transport);
        unsafe { libc::close(master) };
    }

    #[test]
    fn test_send_writes_compiled_program() {
        let path = scratch_file("send.bin");
        let program: Program = vec![
            Op::SetAlign(Alignment::Center),
            Op::Text {
                content: "HI".into(),
                style: None,
            },
            Op::Feed { lines: 2 },
            Op::Cut,
        ]
        .into_iter()
        .collect();

        let mut transport = DeviceTransport::open(&path).unwrap();
        transport.send(&program).unwrap();
        drop(transport);

        assert_eq!(std::fs::read(&path).unwrap(), program.to_bytes());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_chunked_write_is_complete() {
        let path = scratch_file("chunks.bin");
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();

        let mut transport = DeviceTransport::open(&path).unwrap();
        transport.set_chunk_size(1000);
        transport.set_chunk_delay(Duration::ZERO);
        transport.write_all(&data).unwrap();
        drop(transport);

        assert_eq!(std::fs::read(&path).unwrap(), data);
        std::fs::remove_file(&path).unwrap();
    }
}
