//! Change-gated atomic file output.
//!
//! 1. Normalise line endings to LF.
//! 2. Compare with whatever is on disk; skip if identical.
//! 3. Write to `<path>.lessonplan.tmp`, then rename over the target.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — on-disk content already matches.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    /// One-line, human-readable summary.
    pub fn print(&self) {
        match self {
            WriteResult::Written { path } => {
                println!("{} wrote {}", "✎".green(), path.display())
            }
            WriteResult::WouldWrite { path } => {
                println!("{} [dry-run] would write {}", "~".yellow(), path.display())
            }
            WriteResult::Unchanged { path } => {
                println!("{} unchanged {}", "·".dimmed(), path.display())
            }
        }
    }
}

pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Read a file, treating "not found" as empty.
pub fn read_existing_or_empty(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("cannot read '{}'", path.display())),
    }
}

/// Atomically write `content` to `path` unless it already holds the same bytes.
pub fn write_if_changed(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult> {
    let content = normalize_line_endings(content);

    if path.is_file() {
        let existing = std::fs::read(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        if existing == content.as_bytes() {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create '{}'", parent.display()))?;
    }

    let tmp = PathBuf::from(format!("{}.lessonplan.tmp", path.display()));
    let replaced = std::fs::write(&tmp, &content).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(e) = replaced {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("cannot replace '{}'", path.display()));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("page.html");
        let result = write_if_changed(&path, "<p>hi</p>\n", false).unwrap();
        assert_eq!(result, WriteResult::Written { path: path.clone() });
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>\n");
    }

    #[test]
    fn identical_content_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        write_if_changed(&path, "same\n", false).unwrap();
        let result = write_if_changed(&path, "same\r\n", false).unwrap();
        assert_eq!(result, WriteResult::Unchanged { path });
    }

    #[test]
    fn dry_run_leaves_disk_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        let result = write_if_changed(&path, "new\n", true).unwrap();
        assert_eq!(result, WriteResult::WouldWrite { path: path.clone() });
        assert!(!path.exists());
    }

    #[test]
    fn no_tmp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        write_if_changed(&path, "v1\n", false).unwrap();
        write_if_changed(&path, "v2\n", false).unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["page.html".to_string()]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "v2\n");
    }

    #[test]
    fn failed_replace_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        assert!(write_if_changed(&path, "v1\n", false).is_err());
        assert!(!dir.path().join("page.html.lessonplan.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_existing_or_empty(&dir.path().join("nope")).unwrap(), "");
    }
}
