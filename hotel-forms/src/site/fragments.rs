//! Shared HTML partials (header, footer)

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::dom::Document;

/// Reasons a partial could not be loaded
#[derive(Debug, Error)]
pub enum FragmentError {
    /// No partial at this location
    #[error("fragment '{0}' not found")]
    NotFound(String),

    /// The url points outside the partials directory
    #[error("fragment url '{0}' leaves the partials directory")]
    OutsideRoot(String),

    /// Reading the partial failed
    #[error("failed to read fragment '{url}': {source}")]
    Io {
        /// Requested url
        url: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// No element to inject into
    #[error("placeholder '{0}' not found")]
    MissingPlaceholder(String),
}

/// Where partials come from
#[cfg_attr(test, mockall::automock)]
pub trait FragmentSource: Send + Sync {
    /// Fetch the HTML for a relative url
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError`] if the partial cannot be read.
    fn fetch(&self, url: &str) -> Result<String, FragmentError>;
}

/// Partials read from a directory on disk
#[derive(Debug, Clone)]
pub struct FsFragmentSource {
    root: PathBuf,
}

impl FsFragmentSource {
    /// Serve partials from `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, url: &str) -> Result<PathBuf, FragmentError> {
        let relative = Path::new(url);
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(FragmentError::OutsideRoot(url.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl FragmentSource for FsFragmentSource {
    fn fetch(&self, url: &str) -> Result<String, FragmentError> {
        let path = self.resolve(url)?;
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FragmentError::NotFound(url.to_string())
            } else {
                FragmentError::Io {
                    url: url.to_string(),
                    source,
                }
            }
        })
    }
}

/// Inject a partial into a placeholder element
///
/// Failures are logged and reported as `false`; the page keeps working
/// without the partial.
pub fn load_fragment<D: Document>(
    document: &D,
    source: &dyn FragmentSource,
    url: &str,
    placeholder_id: &str,
) -> bool {
    load_fragment_then(document, source, url, placeholder_id, || {})
}

/// Inject a partial, then run `on_loaded` once it is in place
///
/// `on_loaded` is not called when loading fails.
pub fn load_fragment_then<D: Document>(
    document: &D,
    source: &dyn FragmentSource,
    url: &str,
    placeholder_id: &str,
    on_loaded: impl FnOnce(),
) -> bool {
    let result = source.fetch(url).and_then(|html| {
        if document.set_inner_html(placeholder_id, &html) {
            Ok(())
        } else {
            Err(FragmentError::MissingPlaceholder(placeholder_id.to_string()))
        }
    });

    match result {
        Ok(()) => {
            tracing::debug!(url, placeholder = placeholder_id, "fragment loaded");
            on_loaded();
            true
        }
        Err(error) => {
            tracing::error!(%error, "Error loading {url}");
            false
        }
    }
}
