//! Content discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use signpost_nav::ContentIndex;

/// Discovers content pages by walking the docs source directory.
///
/// Every `.md` file is a page:
/// - `guide.md` -> `/guide`
/// - `domain/setup.md` -> `/domain/setup`
/// - `domain/index.md` -> `/domain/` and `/domain/index`
/// - `index.md` -> `/` and `/index`
///
/// Hidden files and directories are skipped.
pub struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a new Scanner rooted at `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// Scan the filesystem and return the content index.
    ///
    /// Returns an empty index if the source directory doesn't exist.
    pub fn scan(&self) -> ContentIndex {
        let mut index = ContentIndex::new();
        if self.source_dir.exists() {
            self.scan_directory(&self.source_dir, "", &mut index);
        } else {
            tracing::warn!(dir = %self.source_dir.display(), "Source directory does not exist");
        }
        tracing::info!(
            dir = %self.source_dir.display(),
            pages = index.len(),
            "Scanned content"
        );
        index
    }

    fn scan_directory(&self, dir_path: &Path, url_prefix: &str, index: &mut ContentIndex) {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir_path.display(), error = %e, "Skipping unreadable directory");
                return;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                let child_prefix = format!("{url_prefix}/{name}");
                self.scan_directory(&entry.path(), &child_prefix, index);
            } else if Path::new(&name).extension().is_some_and(|e| e == "md") {
                for url in file_name_to_urls(&name, url_prefix) {
                    index.insert(&url);
                }
            }
        }
    }
}

/// URL paths served for markdown file `name` inside directory `base`.
///
/// `base` is the directory URL without trailing slash (`""` for the root).
fn file_name_to_urls(name: &str, base: &str) -> Vec<String> {
    let stem = name.strip_suffix(".md").unwrap_or(name);
    let page = format!("{base}/{stem}");

    if stem == "index" {
        vec![format!("{base}/"), page]
    } else {
        vec![page]
    }
}
