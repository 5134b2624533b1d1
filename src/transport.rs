//! Transport boundary: where encoded frames leave the controller.

/// Terminator appended to every line on the serial link.
pub const LINE_TERMINATOR: &str = "\r\n";

/// A line-oriented byte sink, typically a UART.
///
/// Implement this for your serial peripheral. Delivery is assumed reliable;
/// the controller does not wait for acknowledgement.
pub trait Transport {
    /// Error type returned by failed writes.
    type Error;

    /// Writes `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Adapts any [`core::fmt::Write`] sink, such as a HAL serial transmitter,
/// into a [`Transport`] that ends lines with [`LINE_TERMINATOR`].
#[derive(Debug)]
pub struct LineWriter<W> {
    inner: W,
}

impl<W: core::fmt::Write> LineWriter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sink.
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Unwraps the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: core::fmt::Write> Transport for LineWriter<W> {
    type Error = core::fmt::Error;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.inner.write_str(line)?;
        self.inner.write_str(LINE_TERMINATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_writer_appends_crlf() {
        let mut writer = LineWriter::new(heapless::String::<32>::new());
        writer.write_line("#0,0,0,0,0,0,0,0*").unwrap();
        writer.write_line("Dispatched").unwrap();
        assert_eq!(
            writer.into_inner().as_str(),
            "#0,0,0,0,0,0,0,0*\r\nDispatched\r\n"
        );
    }
}
