use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// System clipboard sink
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that asks the terminal to set the selection via OSC 52.
///
/// Works over SSH and inside tmux (with `set-clipboard on`); terminals that
/// ignore the sequence fail silently, which is indistinguishable from success.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        let sequence = osc52_sequence(text);
        self.out
            .write_all(sequence.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("#ff94a6"), "\x1b]52;c;I2ZmOTRhNg==\x07");
    }

    #[test]
    fn test_writes_to_sink() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.write("rgb(1, 2, 3)").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }

    #[test]
    fn test_io_failure_maps_to_clipboard_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = Osc52Clipboard::new(Closed).write("x").unwrap_err();
        assert!(matches!(err, Error::Clipboard(_)));
    }
}
