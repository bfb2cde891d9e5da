//! Source file persistence
//!
//! Writes rendered class sources into a directory tree mirroring each
//! class's namespace, one file per class, with test files under an optional
//! separate root.

use crate::error::{Error, Result};
use crate::render::RenderedClass;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persists rendered sources to disk
#[derive(Debug, Clone)]
pub struct Emitter {
    /// File extension for generated sources, without the dot
    extension: String,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            extension: "php".to_string(),
        }
    }
}

impl Emitter {
    /// Create an emitter with the default extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file extension used for generated files
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Write all rendered classes under `out_dir`
    ///
    /// Test sources go under `test_dir` when given, otherwise next to their
    /// class. Returns the paths written.
    pub fn save(
        &self,
        rendered: &[RenderedClass],
        out_dir: impl AsRef<Path>,
        test_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        let out_dir = writable_dir(out_dir.as_ref())?;
        let test_dir = match test_dir {
            Some(dir) => Some(writable_dir(dir)?),
            None => None,
        };

        let mut written = Vec::new();

        for class in rendered {
            let path = self.class_path(&out_dir, class, false)?;
            fs::write(&path, &class.source)?;
            info!(path = %path.display(), "class source written");
            written.push(path);

            if let Some(test_source) = &class.test_source {
                let root = test_dir.as_deref().unwrap_or(&out_dir);
                let path = self.class_path(root, class, true)?;
                fs::write(&path, test_source)?;
                info!(path = %path.display(), "test source written");
                written.push(path);
            }
        }

        Ok(written)
    }

    /// Build (and create) the namespace-mirroring path for one class file
    fn class_path(&self, root: &Path, class: &RenderedClass, test: bool) -> Result<PathBuf> {
        let mut dir = root.to_path_buf();
        for segment in class.namespace.split('\\').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        fs::create_dir_all(&dir)?;

        let file_name = if test {
            format!("{}Test.{}", class.name, self.extension)
        } else {
            format!("{}.{}", class.name, self.extension)
        };
        Ok(dir.join(file_name))
    }
}

/// Check that a target directory exists and is writable
fn writable_dir(dir: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(dir).map_err(|_| Error::not_writable(dir.display().to_string()))?;
    if !metadata.is_dir() || metadata.permissions().readonly() {
        return Err(Error::not_writable(dir.display().to_string()));
    }
    Ok(dir.to_path_buf())
}
