//! Timestamped line writer wrapping the logger's sink

use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;

/// Writes one prefixed line per call to an owned sink
///
/// Each line has the shape `<timestamp> <file>:<line>: <body>`, where both
/// prefix parts can be switched off. The whole line goes out in a single
/// `write_all`, so a sink shared behind one lock never sees torn lines.
pub struct LineWriter {
    sink: Box<dyn Write + Send>,
    timestamp_format: Option<TimestampFormat>,
    source_location: bool,
}

impl LineWriter {
    pub fn new<W>(sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_boxed(Box::new(sink))
    }

    pub fn from_boxed(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink,
            timestamp_format: Some(TimestampFormat::default()),
            source_location: true,
        }
    }

    /// Set the timestamp format, or `None` to omit the timestamp
    #[must_use]
    pub fn with_timestamp_format(mut self, format: Option<TimestampFormat>) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_source_location(mut self, enabled: bool) -> Self {
        self.source_location = enabled;
        self
    }

    /// Build the full line, trailing newline included
    pub fn format_line(
        &self,
        now: &DateTime<Local>,
        location: Option<&Location<'_>>,
        body: &str,
    ) -> String {
        let mut line = String::with_capacity(body.len() + 48);

        if let Some(format) = &self.timestamp_format {
            line.push_str(&format.format(now));
            line.push(' ');
        }

        if self.source_location {
            if let Some(location) = location {
                line.push_str(short_file(location.file()));
                line.push(':');
                line.push_str(&location.line().to_string());
                line.push_str(": ");
            }
        }

        line.push_str(body);
        if !body.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Prefix `body` and write it as one line
    pub fn write_line(&mut self, location: Option<&Location<'_>>, body: &str) -> io::Result<()> {
        let line = self.format_line(&Local::now(), location, body);
        self.sink.write_all(line.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("timestamp_format", &self.timestamp_format)
            .field("source_location", &self.source_location)
            .finish_non_exhaustive()
    }
}

/// Final path component, as printed in the line prefix
fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
