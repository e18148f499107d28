//! Include directive recognition
//!
//! A directive must occupy its entire line, surrounding whitespace aside.
//! A line that carries anything after the closing quote or bracket is not a
//! directive and is passed through as ordinary content.

use once_cell::sync::Lazy;
use regex::Regex;

static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*#\s*include\s*"([^"]*)"\s*$"#).unwrap());

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\s*include\s*<([^>]*)>\s*$").unwrap());

/// The two directive forms, which select different resolution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeKind {
    /// `#include "name"` - resolved against the including file's directory
    /// first, then the search paths.
    Quoted,
    /// `#include <name>` - resolved against the search paths only.
    Bracketed,
}

/// A recognized include line: its form and the name as written.
///
/// The name is kept verbatim; `..` segments and absolute paths mean whatever
/// the filesystem says they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub kind: IncludeKind,
    pub name: String,
}

/// Classify a single input line.
///
/// Returns `None` for ordinary content, which the caller copies verbatim.
pub fn classify(line: &str) -> Option<IncludeDirective> {
    if let Some(caps) = QUOTED.captures(line) {
        return Some(IncludeDirective {
            kind: IncludeKind::Quoted,
            name: caps[1].to_string(),
        });
    }
    if let Some(caps) = BRACKETED.captures(line) {
        return Some(IncludeDirective {
            kind: IncludeKind::Bracketed,
            name: caps[1].to_string(),
        });
    }
    None
}
