// SPDX-License-Identifier: Apache-2.0
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, instrument};
use uuid::Uuid;

/// File name of the static layout template
pub const LAYOUT_FILE: &str = "layout.html";
/// File name of the persisted email configuration
pub const CONFIG_FILE: &str = "emailConfig.json";
/// Directory name for uploaded assets
pub const UPLOADS_DIR: &str = "uploads";

/// Handle to the on-disk state of the service: the layout template,
/// the single email-configuration document and the uploads directory.
///
/// All paths derive from one root so a deployment (or a test) can point
/// the whole store somewhere else.
#[derive(Debug, Clone)]
pub struct EmailStore {
    root: PathBuf,
}

impl EmailStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn layout_path(&self) -> PathBuf {
        self.root.join(LAYOUT_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.root.join(UPLOADS_DIR)
    }

    /// Read the static layout template as UTF-8 text
    pub fn read_layout(&self) -> io::Result<String> {
        fs::read_to_string(self.layout_path())
    }

    /// Overwrite the persisted email configuration with a pretty-printed
    /// rendition of `config`. No merge with prior state.
    pub fn save_config(&self, config: &serde_json::Value) -> io::Result<()> {
        let pretty = serde_json::to_string_pretty(config).map_err(io::Error::other)?;
        fs::write(self.config_path(), pretty)
    }

    /// Persist an uploaded asset under a timestamped name and return the
    /// stored file name.
    ///
    /// The name is `<millis>-<original-filename>`; if that path already
    /// exists (same-millisecond upload of the same name) a short random
    /// segment is inserted instead of overwriting.
    #[instrument(skip(self, data), fields(original = %original_name, bytes = data.len()))]
    pub fn store_upload(&self, original_name: &str, data: &[u8]) -> io::Result<String> {
        let uploads = self.uploads_dir();
        if !uploads.exists() {
            fs::create_dir_all(&uploads)?;
        }

        // Keep only the final path component of the client-supplied name
        let base = Path::new(original_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(io::Error::other)?
            .as_millis();

        let mut stored = format!("{}-{}", millis, base);
        if uploads.join(&stored).exists() {
            let tag = Uuid::new_v4().simple().to_string();
            stored = format!("{}-{}-{}", millis, &tag[..8], base);
        }

        fs::write(uploads.join(&stored), data)?;
        debug!(stored = %stored, "Stored uploaded asset");
        Ok(stored)
    }
}
