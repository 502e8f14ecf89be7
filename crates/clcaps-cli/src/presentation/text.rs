//! Aligned two-column text output.

use std::io::{self, Write};

use clcaps_core::{LabelMode, Line, ReportSink, Section};

/// Width of the label column, indentation included.
pub const LABEL_WIDTH: usize = 48;

const INDENT: &str = "  ";

/// Writes the report as `label  value` lines.
///
/// Write errors are held until [`TextSink::finish`], because the sink
/// interface cannot fail.
pub struct TextSink<W: Write, E: Write> {
    out: W,
    err: E,
    mode: LabelMode,
    started: bool,
    error: Option<io::Error>,
}

impl<W: Write, E: Write> TextSink<W, E> {
    pub const fn new(out: W, err: E, mode: LabelMode) -> Self {
        Self {
            out,
            err,
            mode,
            started: false,
            error: None,
        }
    }

    /// Flush both writers and surface the first write error.
    pub fn finish(mut self) -> io::Result<(W, E)> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        self.err.flush()?;
        Ok((self.out, self.err))
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

/// Format one line for the given label mode.
pub fn format_line(line: &Line, mode: LabelMode) -> String {
    let indent = INDENT.repeat(usize::from(line.depth));
    let width = LABEL_WIDTH.saturating_sub(indent.len());
    let label = line.label(mode);
    format!("{indent}{label:<width$}  {}", line.value)
        .trim_end()
        .to_string()
}

impl<W: Write, E: Write> ReportSink for TextSink<W, E> {
    fn section(&mut self, section: Section) {
        if self.error.is_some() {
            return;
        }
        // Platform and device blocks are separated by a blank line.
        let result = match section {
            Section::PlatformInfo { index: 0 } if !self.started => Ok(()),
            _ => writeln!(self.out),
        };
        self.started = true;
        self.record(result);
    }

    fn line(&mut self, line: Line) {
        if self.error.is_some() {
            return;
        }
        let result = writeln!(self.out, "{}", format_line(&line, self.mode));
        self.record(result);
    }

    fn diagnostic(&mut self, marker: &str, body: &str) {
        if self.error.is_some() {
            return;
        }
        let result = writeln!(self.err, "{marker}").and_then(|()| writeln!(self.err, "{body}"));
        self.record(result);
    }
}
