use serde::{Deserialize, Serialize};

/// Manifest for a file in `out/files/`. All four keys are always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFileManifest {
    /// False stores the file only temporarily (for days).
    pub is_permanent: bool,
    pub is_public: bool,
    pub tags: Vec<String>,
    /// Notify project members about the upload.
    pub notify: bool,
}

impl Default for OutputFileManifest {
    fn default() -> Self {
        Self { is_permanent: true, is_public: false, tags: Vec::new(), notify: false }
    }
}

impl OutputFileManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn permanent(mut self, is_permanent: bool) -> Self {
        self.is_permanent = is_permanent;
        self
    }

    pub fn notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }
}
