//! Assets a host UI loads at startup, held either in memory or on disk.

use anyhow::{Context, Result};
use mime_guess::mime;
use std::borrow::Cow;
use std::path::PathBuf;

/// Where an asset's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Inline(Vec<u8>),
    Reference(PathBuf),
}

/// A named asset such as an icon or a UI definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub source: AssetSource,
}

impl Asset {
    pub fn inline(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            source: AssetSource::Inline(bytes.into()),
        }
    }

    pub fn reference(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: AssetSource::Reference(path.into()),
        }
    }

    /// Returns the asset bytes, borrowing inline data and reading referenced files.
    pub fn load(&self) -> Result<Cow<'_, [u8]>> {
        match &self.source {
            AssetSource::Inline(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
            AssetSource::Reference(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to load asset {} from {:?}", self.name, path))?;
                tracing::debug!("Loaded asset {} ({} bytes)", self.name, bytes.len());
                Ok(Cow::Owned(bytes))
            }
        }
    }

    /// Content type guessed from the asset name.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or(mime::APPLICATION_OCTET_STREAM)
            .essence_str()
            .to_string()
    }
}
