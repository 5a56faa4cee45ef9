use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use super::render;
use crate::line_mode::LineMode;
use crate::record::{Hook, Record};

/// Streaming sink that renders [`Record`] values into an [`io::Write`]
/// target.
///
/// The writer sits behind a [`Mutex`] so a single sink can serve loggers on
/// several threads; each record is written with one `write_all` call so lines
/// from concurrent loggers do not interleave.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use logging::{Record, StreamSink};
///
/// let sink = StreamSink::new(Vec::new(), false);
/// sink.write(&Record::new("net", vec!["up".into()], Duration::ZERO, 3))?;
///
/// assert_eq!(sink.into_inner(), b"net up +0ms\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct StreamSink<W> {
    writer: Mutex<W>,
    colors: bool,
    line_mode: LineMode,
}

impl<W> StreamSink<W> {
    /// Creates a sink that terminates each record with a newline.
    #[must_use]
    pub fn new(writer: W, colors: bool) -> Self {
        Self::with_line_mode(writer, colors, LineMode::WithNewline)
    }

    /// Creates a sink with an explicit [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, colors: bool, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            colors,
            line_mode,
        }
    }

    /// Reports whether records are rendered with ANSI colours.
    #[must_use]
    pub const fn colors(&self) -> bool {
        self.colors
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> StreamSink<W>
where
    W: Write,
{
    /// Renders and writes a single record.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by the underlying writer.
    pub fn write(&self, record: &Record) -> io::Result<()> {
        let mut line = render(record, self.colors);
        if self.line_mode.append_newline() {
            line.push('\n');
        }

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }

    /// Writes `record`, discarding any I/O error.
    ///
    /// Diagnostics must never take the host down, so a closed or failing
    /// stream simply loses the line.
    pub fn emit(&self, record: &Record) {
        let _ = self.write(record);
    }
}

impl<W> StreamSink<W>
where
    W: Write + Send + 'static,
{
    /// Wraps the sink in a [`Hook`] suitable for loggers and registries.
    #[must_use]
    pub fn into_hook(self) -> Hook {
        let sink = Arc::new(self);
        Arc::new(move |record: &Record| sink.emit(record))
    }
}

impl<W> fmt::Debug for StreamSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSink")
            .field("colors", &self.colors)
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}
