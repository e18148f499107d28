//! Recursive `#include` flattener
//!
//! Expands a source file's textual include directives into a single
//! concatenated output file. Two directive forms are recognized, each on a
//! line of its own:
//!
//! ```text
//! #include "name"   resolved against the including file's directory,
//!                   then the search directories in order
//! #include <name>   resolved against the search directories only
//! ```
//!
//! Expansion is depth-first: the full expansion of an included file is
//! emitted before any later line of the file that included it. Ordinary
//! lines pass through untouched. An include that resolves nowhere aborts the
//! whole run, reporting the missing name, the referencing file, and the
//! 1-based line number.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! let search = vec![PathBuf::from("include")];
//! include_flatten::expand(
//!     "src/a.cpp".as_ref(),
//!     "build/a.in".as_ref(),
//!     &search,
//! )?;
//! # Ok::<(), include_flatten::FlattenError>(())
//! ```
//!
//! The output sink is opened in append mode and never truncated here; a
//! caller wanting a fresh artifact removes the stale one before the run.
//! There is no guard against cyclic includes: a file that includes itself,
//! directly or indirectly, recurses without bound.

mod directive;
mod error;
mod expand;

pub mod output;

pub use directive::{classify, IncludeDirective, IncludeKind};
pub use error::FlattenError;
pub use expand::expand;
