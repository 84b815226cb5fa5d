use std::path::{Path, PathBuf};

use crate::{Manifest, Result};

/// Default manifest file name.
pub const DEFAULT_FILENAME: &str = "script.toml";

/// A script.toml file with both its raw content and the parsed manifest.
#[derive(Debug)]
pub struct ScriptToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ScriptToml {
    /// Open and parse a script.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        tracing::debug!(path = %path.display(), "loaded script manifest");

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
