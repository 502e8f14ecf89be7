//! Where to look for the OpenCL ICD loader.

use std::path::PathBuf;

#[cfg(target_os = "windows")]
const DEFAULT_CANDIDATES: &[&str] = &["OpenCL.dll"];

#[cfg(target_os = "macos")]
const DEFAULT_CANDIDATES: &[&str] = &["/System/Library/Frameworks/OpenCL.framework/OpenCL"];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_CANDIDATES: &[&str] = &["libOpenCL.so.1", "libOpenCL.so"];

/// Library names tried, in order, when no path is given.
pub fn default_candidates() -> &'static [&'static str] {
    DEFAULT_CANDIDATES
}

/// How to find the ICD loader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LibrarySource {
    /// Search the platform's usual library names.
    #[default]
    Search,
    /// Open exactly this file.
    Explicit(PathBuf),
}

impl LibrarySource {
    /// `Explicit` if a path is given, otherwise `Search`.
    pub fn from_override(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Search, Self::Explicit)
    }

    /// Paths to try, in order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match self {
            Self::Search => DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
            Self::Explicit(path) => vec![path.clone()],
        }
    }
}
