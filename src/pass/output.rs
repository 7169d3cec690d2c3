//! Password output: plain lines or a JSON array, streamed one character at a
//! time so memory use does not depend on `-l` or `-n`.

use std::io::{self, Write};

use zeroize::Zeroize;

use crate::error::Result;

const BUF_CAPACITY: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One password per line.
    #[default]
    Plain,
    /// A single JSON array, 2-space indented.
    Json,
}

/// Buffered writer that zeroes its buffer after every flush and on drop.
///
/// Dropping without `flush` discards whatever is still buffered.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// Streams passwords to `W` in one [`Format`].
///
/// Call `begin`, then `push` for each character, then `end` for every
/// password, and `finish` once at the end. Nothing reaches `W` past the
/// last full buffer unless `finish` succeeds.
pub struct PasswordWriter<W: Write> {
    out: SecureBufWriter<W>,
    format: Format,
    written: usize,
}

impl<W: Write> PasswordWriter<W> {
    pub fn new(out: W, format: Format) -> Self {
        Self {
            out: SecureBufWriter::new(out),
            format,
            written: 0,
        }
    }

    pub fn begin(&mut self) -> Result<()> {
        if self.format == Format::Json {
            let open: &[u8] = if self.written == 0 { b"[\n  \"" } else { b",\n  \"" };
            self.out.write_all(open)?;
        }
        Ok(())
    }

    pub fn push(&mut self, c: char) -> Result<()> {
        match self.format {
            Format::Plain => {
                let mut utf8 = [0u8; 4];
                let res = self.out.write_all(c.encode_utf8(&mut utf8).as_bytes());
                utf8.zeroize();
                res?;
            }
            Format::Json => {
                // Longest form is a quoted "\u001f".
                let mut quoted = [0u8; 16];
                let mut rest = &mut quoted[..];
                serde_json::to_writer(&mut rest, &c)?;
                let len = 16 - rest.len();
                let res = self.out.write_all(&quoted[1..len - 1]);
                quoted.zeroize();
                res?;
            }
        }
        Ok(())
    }

    pub fn end(&mut self) -> Result<()> {
        let close: &[u8] = match self.format {
            Format::Plain => b"\n",
            Format::Json => b"\"",
        };
        self.out.write_all(close)?;
        self.written += 1;
        Ok(())
    }

    /// Close the JSON array (if any) and flush everything to `W`.
    pub fn finish(mut self) -> Result<()> {
        if self.format == Format::Json {
            let close: &[u8] = if self.written == 0 { b"[]\n" } else { b"\n]\n" };
            self.out.write_all(close)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
