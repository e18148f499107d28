//! Recursive include expansion
//!
//! Walks an input file line by line, copies ordinary content to the sink and
//! inlines every include directive in place, depth-first. The sink is opened
//! in append mode on every call so that nested expansions compose into one
//! continuous artifact; pre-run cleanup of a stale sink is the caller's job.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::directive::{self, IncludeDirective, IncludeKind};
use crate::error::FlattenError;

/// Append the full expansion of `input` to `sink`.
///
/// Quoted includes are resolved against the including file's own directory
/// first, then against `search_paths` in order. Bracketed includes consult
/// `search_paths` only. Each resolved include is expanded recursively before
/// any later line of the including file, so the sink receives a pre-order
/// depth-first traversal of the include graph.
///
/// The first failure aborts the whole run; the sink may then hold a partial
/// expansion (nothing written is ever rolled back).
pub fn expand(input: &Path, sink: &Path, search_paths: &[PathBuf]) -> Result<(), FlattenError> {
    let file = File::open(input).map_err(|source| FlattenError::UnreadableInput {
        path: input.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let out = OpenOptions::new()
        .append(true)
        .create(true)
        .open(sink)
        .map_err(|source| FlattenError::UnwritableOutput {
            path: sink.to_path_buf(),
            source,
        })?;
    let mut out = BufWriter::new(out);

    // Base directory for quoted-relative resolution. Local to this call:
    // every nesting level resolves against its own file's location.
    let including_dir = input.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

    let mut line_number = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|source| FlattenError::UnreadableInput {
            path: input.to_path_buf(),
            source,
        })?;
        line_number += 1;

        let Some(inc) = directive::classify(&line) else {
            writeln!(out, "{line}").map_err(|source| FlattenError::UnwritableOutput {
                path: sink.to_path_buf(),
                source,
            })?;
            continue;
        };

        match resolve(&inc, &including_dir, search_paths) {
            Some(resolved) => {
                // The nested call reopens the sink, so everything buffered
                // here must land on disk first to keep append order.
                flush(&mut out, sink)?;
                expand(&resolved, sink, search_paths)?;
            }
            None => {
                return Err(FlattenError::UnresolvedInclude {
                    name: inc.name,
                    file: input.to_path_buf(),
                    line: line_number,
                });
            }
        }
    }

    flush(&mut out, sink)
}

/// Map an include directive to the file it names, or `None` if no candidate
/// location has it.
///
/// The two strategies are mutually exclusive per directive: a quoted include
/// that resolves relative to the including file never touches the search
/// paths, and a bracketed include never looks next to the including file.
fn resolve(
    inc: &IncludeDirective,
    including_dir: &Path,
    search_paths: &[PathBuf],
) -> Option<PathBuf> {
    if inc.kind == IncludeKind::Quoted {
        let candidate = including_dir.join(&inc.name);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    // First hit wins; later directories shadowed silently.
    search_paths
        .iter()
        .map(|dir| dir.join(&inc.name))
        .find(|candidate| candidate.exists())
}

fn flush(out: &mut BufWriter<File>, sink: &Path) -> Result<(), FlattenError> {
    out.flush().map_err(|source| FlattenError::UnwritableOutput {
        path: sink.to_path_buf(),
        source,
    })
}
