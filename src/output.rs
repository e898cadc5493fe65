//! Output formatting for the response body, cookies and failures

use crate::error::{LoginError, Result};
use crate::http::response::Cookie;
use std::io::Write;

/// Writes the login result to any sink, usually locked stdout.
pub struct OutputWriter<W: Write> {
    out: W,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the body bytes as-is, followed by a newline
    pub fn write_body(&mut self, body: &[u8]) -> Result<()> {
        self.out.write_all(body)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Write a name line and a value line per cookie
    pub fn write_cookies(&mut self, cookies: &[Cookie]) -> Result<()> {
        for cookie in cookies {
            writeln!(self.out, "Cookie Name:  {}", cookie.name)?;
            writeln!(self.out, "Cookie Value:  {}", cookie.value)?;
        }
        Ok(())
    }

    /// Write a failure message with its causes. Errors go to the same stream as the body.
    pub fn write_error(&mut self, err: &LoginError) {
        // Nothing is left to report to if this write fails too.
        let _ = writeln!(self.out, "{}", err.report());
        let _ = self.out.flush();
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests;
