//! Output file writer

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::defaults::OUTPUT_EXTENSION;
use crate::error::{CodegenError, Result};

/// Writes rendered declarations under the output directory.
///
/// Several tables may target the same file. With `rewrite` set, a file is
/// truncated the first time this writer touches it and appended to after
/// that; without it, every write appends.
#[derive(Debug)]
pub struct FileWriter {
    dir: PathBuf,
    rewrite: bool,
    dry_run: bool,
    touched: HashSet<PathBuf>,
}

impl FileWriter {
    pub fn new(dir: impl Into<PathBuf>, rewrite: bool) -> Self {
        Self {
            dir: dir.into(),
            rewrite,
            dry_run: false,
            touched: HashSet::new(),
        }
    }

    /// Print declarations to stdout instead of writing files.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Full output path for a descriptor's `file`: `dir/<file>.ts`.
    pub fn output_path(&self, file: &str) -> PathBuf {
        let suffix = format!(".{}", OUTPUT_EXTENSION);
        if file.ends_with(&suffix) {
            self.dir.join(file)
        } else {
            self.dir.join(format!("{}{}", file, suffix))
        }
    }

    /// Write one rendered declaration, returning the path written.
    pub fn write(&mut self, file: &str, code: &str) -> Result<PathBuf> {
        let path = self.output_path(file);

        if self.dry_run {
            println!("// {}", path.display());
            println!("{}", code);
            return Ok(path);
        }

        let truncate = self.rewrite && !self.touched.contains(&path);
        self.append(&path, code, truncate)
            .map_err(|source| CodegenError::FileWrite {
                path: path.clone(),
                source,
            })?;
        debug!(
            "{} {}",
            if truncate { "Wrote" } else { "Appended to" },
            path.display()
        );

        self.touched.insert(path.clone());
        Ok(path)
    }

    /// Paths written so far, in no particular order
    pub fn touched(&self) -> impl Iterator<Item = &Path> {
        self.touched.iter().map(PathBuf::as_path)
    }

    fn append(&self, path: &Path, code: &str, truncate: bool) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(!truncate)
            .truncate(truncate)
            .open(path)?;

        // Blank line between declarations sharing a file
        if !truncate && file.metadata()?.len() > 0 {
            file.write_all(b"\n")?;
        }
        file.write_all(code.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_extension() {
        let writer = FileWriter::new("/out", false);
        assert_eq!(writer.output_path("users-model"), PathBuf::from("/out/users-model.ts"));
        assert_eq!(writer.output_path("users.ts"), PathBuf::from("/out/users.ts"));
        assert_eq!(writer.output_path("nested/user"), PathBuf::from("/out/nested/user.ts"));
    }

    #[test]
    fn test_append_without_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users-model.ts");
        fs::write(&path, "// existing\n").unwrap();

        let mut writer = FileWriter::new(dir.path(), false);
        writer.write("users-model", "export interface A {\n}\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "// existing\n\nexport interface A {\n}\n");
    }

    #[test]
    fn test_rewrite_truncates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.ts");
        fs::write(&path, "// stale\n").unwrap();

        let mut writer = FileWriter::new(dir.path(), true);
        writer.write("models", "export interface A {\n}\n").unwrap();
        writer.write("models.ts", "export interface B {\n}\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "export interface A {\n}\n\nexport interface B {\n}\n"
        );
        assert_eq!(writer.touched().count(), 1);
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("src").join("models");

        let mut writer = FileWriter::new(&out, true);
        let path = writer.write("users", "export type U = {\n};\n").unwrap();

        assert_eq!(path, out.join("users.ts"));
        assert!(path.exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FileWriter::new(dir.path(), true).dry_run(true);
        let path = writer.write("users", "export interface U {\n}\n").unwrap();

        assert!(!path.exists());
        assert_eq!(writer.touched().count(), 0);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = dir.path().join("out");
        fs::write(&blocker, "").unwrap();

        let mut writer = FileWriter::new(&blocker, false);
        let err = writer.write("users", "x").unwrap_err();
        assert!(matches!(err, CodegenError::FileWrite { .. }));
        assert!(err.is_recoverable());
    }
}
