//! Filesystem content discovery for Signpost.
//!
//! Walks the docs source directory and builds the
//! [`ContentIndex`](signpost_nav::ContentIndex) that dead-link validation
//! checks internal navigation targets against.
//!
//! # Example
//!
//! ```no_run
//! use signpost_fs::scan_content;
//!
//! let content = scan_content("docs");
//! assert!(content.contains("/python/pytest/get_started"));
//! ```

mod scanner;

use std::path::Path;

use signpost_nav::ContentIndex;

pub use scanner::Scanner;

/// Scan `source_dir` for markdown pages.
///
/// Missing or unreadable directories yield an empty (or partial) index and
/// a warning in the log.
#[must_use]
pub fn scan_content(source_dir: impl AsRef<Path>) -> ContentIndex {
    Scanner::new(source_dir.as_ref()).scan()
}
