//! Report sink port.
//!
//! The walkers describe the report as a stream of section boundaries and
//! labelled lines. Adapters decide how to render it (aligned text, JSON).

use serde::Serialize;

/// Which label column the report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Human-readable display names.
    #[default]
    Human,
    /// Symbolic API names (e.g. `CL_DEVICE_NAME`).
    Raw,
}

/// Options that shape the report independently of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub label_mode: LabelMode,
    /// Separator used when joining decoded flags and list entries.
    pub separator: String,
    /// Compile a throwaway kernel to learn the preferred work-group multiple.
    pub probe_work_group: bool,
}

impl ReportOptions {
    /// Options for raw (symbolic-label) output.
    pub fn raw() -> Self {
        Self {
            label_mode: LabelMode::Raw,
            separator: " | ".to_string(),
            probe_work_group: true,
        }
    }

    /// Options for the given label mode with its default separator.
    pub fn for_mode(mode: LabelMode) -> Self {
        match mode {
            LabelMode::Human => Self::default(),
            LabelMode::Raw => Self::raw(),
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            label_mode: LabelMode::Human,
            separator: ", ".to_string(),
            probe_work_group: true,
        }
    }
}

/// Structural boundary in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Start of a platform's own properties (first pass).
    PlatformInfo { index: usize },
    /// Start of a platform's device listing (second pass).
    PlatformDevices { index: usize },
    /// Start of one device's properties.
    Device { platform: usize, index: usize },
}

/// One labelled report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Nesting level; 0 for run-level lines, 1 for properties, 2+ for sub-fields.
    pub depth: u8,
    /// Symbolic label.
    pub sname: String,
    /// Display label.
    pub pname: String,
    pub value: String,
    /// True when `value` holds a query diagnostic instead of a value.
    pub failed: bool,
}

impl Line {
    pub fn new(
        depth: u8,
        sname: impl Into<String>,
        pname: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            depth,
            sname: sname.into(),
            pname: pname.into(),
            value: value.into(),
            failed: false,
        }
    }

    /// A line whose value is a failure diagnostic.
    pub fn failure(
        depth: u8,
        sname: impl Into<String>,
        pname: impl Into<String>,
        diagnostic: impl Into<String>,
    ) -> Self {
        Self {
            failed: true,
            ..Self::new(depth, sname, pname, diagnostic)
        }
    }

    /// The label to show for the given mode.
    pub fn label(&self, mode: LabelMode) -> &str {
        match mode {
            LabelMode::Human => &self.pname,
            LabelMode::Raw => &self.sname,
        }
    }
}

/// Destination for the report stream.
pub trait ReportSink {
    fn section(&mut self, section: Section);

    fn line(&mut self, line: Line);

    /// Side-channel diagnostic that is not part of the structured report.
    fn diagnostic(&mut self, marker: &str, body: &str);
}
