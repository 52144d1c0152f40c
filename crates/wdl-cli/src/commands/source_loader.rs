use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A loaded source: display name, output stem and text.
pub struct SourceFile {
    pub name: String,
    pub stem: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, stem: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stem: stem.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Reads `path`, or stdin when it is `-`.
pub fn load_source(path: &Path) -> Result<SourceFile, LoadError> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let stem = path
        .file_stem()
        .map_or_else(|| "out".to_string(), |s| s.to_string_lossy().into_owned());

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded source");
    Ok(SourceFile::new(path.display().to_string(), stem, content))
}

fn load_stdin() -> Result<SourceFile, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(SourceFile::new("<stdin>", "stdin", buf))
}
