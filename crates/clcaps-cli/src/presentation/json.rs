//! JSON document output.

use std::io::{self, Write};

use clcaps_core::{LabelMode, Line, ReportSink, Section};
use serde::Serialize;

/// One section of the document with the lines that followed its boundary.
#[derive(Debug, Serialize)]
pub struct SectionBlock {
    #[serde(flatten)]
    pub section: Section,
    pub lines: Vec<Line>,
}

/// The whole report as one serializable document.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub label_mode: LabelMode,
    /// Lines that precede the first section (run-level counts).
    pub lines: Vec<Line>,
    pub sections: Vec<SectionBlock>,
}

/// Collects the report and writes it as one pretty-printed document.
/// Diagnostics are written straight to the error writer.
pub struct JsonSink<E: Write> {
    report: JsonReport,
    err: E,
    error: Option<io::Error>,
}

impl<E: Write> JsonSink<E> {
    pub const fn new(err: E, mode: LabelMode) -> Self {
        Self {
            report: JsonReport {
                label_mode: mode,
                lines: Vec::new(),
                sections: Vec::new(),
            },
            err,
            error: None,
        }
    }

    pub const fn report(&self) -> &JsonReport {
        &self.report
    }

    /// Serialize the collected document into `out`.
    pub fn finish<W: Write>(mut self, mut out: W) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        serde_json::to_writer_pretty(&mut out, &self.report)?;
        writeln!(out)?;
        out.flush()?;
        self.err.flush()?;
        Ok(out)
    }
}

impl<E: Write> ReportSink for JsonSink<E> {
    fn section(&mut self, section: Section) {
        self.report.sections.push(SectionBlock {
            section,
            lines: Vec::new(),
        });
    }

    fn line(&mut self, line: Line) {
        match self.report.sections.last_mut() {
            Some(block) => block.lines.push(line),
            None => self.report.lines.push(line),
        }
    }

    fn diagnostic(&mut self, marker: &str, body: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.err, "{marker}\n{body}") {
            self.error = Some(err);
        }
    }
}
