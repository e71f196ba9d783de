use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tag_kind_core::{default_records, RecordList};

/// Where the generated mappings end up.
pub enum OutputTarget<'a> {
    Stdout,
    /// Collected in memory and written out in one go by [`OutputTarget::write_with`].
    File { path: &'a Path, buffer: Vec<u8> },
}

impl<'a> OutputTarget<'a> {
    pub fn new(path: Option<&'a Path>) -> Self {
        match path {
            Some(path) => OutputTarget::File {
                path,
                buffer: vec![],
            },
            None => OutputTarget::Stdout,
        }
    }

    /// Run `write` against the target, then persist the result if the target is a file. Nothing
    /// is written to the file when `write` fails.
    pub fn write_with<T>(
        self,
        write: impl FnOnce(&mut dyn Write) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                write(&mut stdout)
            }
            OutputTarget::File { path, mut buffer } => {
                let result = write(&mut buffer)?;
                std::fs::write(path, &buffer)
                    .with_context(|| format!("Failed to write mappings to {}", path.display()))?;
                log::info!("Wrote {} bytes to {}", buffer.len(), path.display());
                Ok(result)
            }
        }
    }
}

/// Load the list at `path`, or the built-in list when no path is given.
pub fn load_records(path: Option<&Path>) -> anyhow::Result<RecordList> {
    match path {
        Some(path) => {
            log::info!("Reading tag kind list from {}", path.display());
            RecordList::from_file(path)
                .with_context(|| format!("Failed to load tag kind list {}", path.display()))
        }
        None => Ok(default_records().clone()),
    }
}

/// Log every repeated variant name or tag text. Repeats are not rejected, but they would produce
/// unreachable or conflicting match arms.
pub fn warn_duplicates(records: &RecordList) {
    for (variant, lines) in records.duplicate_variants() {
        log::warn!("Variant `{variant}` is listed more than once, on lines {lines:?}");
    }
    for (tag, lines) in records.duplicate_tags() {
        log::warn!("Tag `{tag}` is listed more than once, on lines {lines:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_target_is_written_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mappings.rs");

        OutputTarget::new(Some(&path))
            .write_with(|output| {
                writeln!(output, "\"html\" => TagKind::Html,")?;
                Ok(())
            })
            .unwrap();

        assert_eq!(
            "\"html\" => TagKind::Html,\n",
            std::fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn file_target_is_untouched_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mappings.rs");

        let result: anyhow::Result<()> = OutputTarget::new(Some(&path)).write_with(|output| {
            writeln!(output, "partial")?;
            anyhow::bail!("pass failed")
        });

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_records(Some(&dir.path().join("missing.list"))).unwrap_err();
        assert!(error.to_string().contains("missing.list"));
    }

    #[test]
    fn default_input_is_the_built_in_list() {
        assert_eq!(default_records(), &load_records(None).unwrap());
    }
}
