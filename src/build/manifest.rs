use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name of the optional manifest inside the docs directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Optional `manifest.json` describing the reading order of the docs.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DocsManifest {
    #[serde(default = "default_version")]
    pub version: u32,
    /// File stems in reading order (`index` for the root document).
    #[serde(default)]
    pub order: Vec<String>,
}

fn default_version() -> u32 {
    1
}

impl DocsManifest {
    /// Read `manifest.json` from the docs directory. A missing file is not an error.
    pub fn load(docs_dir: &Path) -> Result<Option<Self>, String> {
        let path = docs_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read manifest: {}", e))?;
        let manifest = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid manifest JSON: {}", e))?;
        Ok(Some(manifest))
    }
}
