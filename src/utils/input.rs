use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Where the text of one sub-sequence comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Literal(String),
    /// Text read from a file
    File(std::path::PathBuf),
}

impl InputSource {
    /// Short description for progress and error messages
    pub fn describe(&self) -> String {
        match self {
            InputSource::Literal(text) => {
                let preview: String = text.chars().take(24).collect();
                if preview.len() < text.len() {
                    format!("\"{}...\"", preview)
                } else {
                    format!("\"{}\"", preview)
                }
            }
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Load the text, decoding invalid UTF-8 lossily
    pub fn load(&self) -> Result<String> {
        match self {
            InputSource::Literal(text) => Ok(text.clone()),
            InputSource::File(path) => read_file(path),
        }
    }
}

/// Read a whole file through a memory map
pub fn read_file(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    // Mapping an empty file fails on some platforms
    if file.metadata()?.len() == 0 {
        return Ok(String::new());
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(String::from_utf8_lossy(&mmap).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "banana").unwrap();

        assert_eq!(read_file(file.path()).unwrap(), "banana");
    }

    #[test]
    fn test_read_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(read_file(file.path()).unwrap(), "");
    }

    #[test]
    fn test_missing_file() {
        let source = InputSource::File("/nonexistent/gstree/input.txt".into());
        assert!(source.load().is_err());
    }

    #[test]
    fn test_describe_literal() {
        assert_eq!(InputSource::Literal("abc".into()).describe(), "\"abc\"");
        let long = "x".repeat(40);
        assert!(InputSource::Literal(long).describe().ends_with("...\""));
    }
}
