use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::model::{LoadReport, ROOT_KEY};
use crate::parser::parse_line;
use crate::store::Store;

impl Store {
    /// Load a dotenv file into the store.
    ///
    /// A relative `path` is resolved against the value stored under the
    /// reserved `root` key when one is set. Every accepted declaration
    /// overwrites any prior value for its key, including one seeded from the
    /// process environment. Malformed lines are skipped, never fatal; a
    /// missing or unreadable file is the only error, and it leaves values
    /// installed by earlier calls untouched.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadReport, Error> {
        let path = self.resolve_path(path.as_ref());
        let bytes = std::fs::read(&path)?;
        let content = std::str::from_utf8(&bytes)?;
        let report = self.load_str(content);
        debug!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "loaded dotenv file"
        );
        Ok(report)
    }

    /// Load dotenv declarations from any buffered byte source.
    pub fn load_reader<R: BufRead>(&self, mut reader: R) -> Result<LoadReport, Error> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let content = std::str::from_utf8(&buf)?;
        Ok(self.load_str(content))
    }

    /// Load dotenv declarations from in-memory text.
    ///
    /// Lines are terminated by `\n` with an optional preceding `\r`. Blank
    /// and comment lines are ignored; any other line that does not yield a
    /// declaration with a non-empty key counts as skipped.
    pub fn load_str(&self, content: &str) -> LoadReport {
        let mut report = LoadReport::default();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match parse_line(line) {
                Some((key, value)) if !key.is_empty() => {
                    self.set(key, value);
                    report.loaded += 1;
                }
                _ => {
                    debug!(line = idx + 1, "skipping malformed declaration");
                    report.skipped += 1;
                }
            }
        }
        report
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_relative()
            && let Some(root) = self.get(ROOT_KEY)
        {
            return Path::new(&root).join(path);
        }
        path.to_path_buf()
    }
}
