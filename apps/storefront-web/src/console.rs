//! `tracing` output for the browser console.

use std::io;

use tracing_subscriber::fmt::MakeWriter;

/// Writes each formatted event as one `console.log` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine(Vec::new())
    }
}

/// Buffer for one event; emitted on drop.
pub struct ConsoleLine(Vec<u8>);

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if self.0.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.0);
        leptos::logging::log!("{}", line.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_console_line_buffers_until_drop() {
        let mut line = ConsoleWriter.make_writer();
        line.write_all(b"INFO storefront: ").unwrap();
        line.write_all(b"ready\n").unwrap();
        line.flush().unwrap();
        assert_eq!(line.0, b"INFO storefront: ready\n");
    }
}
