use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::roster::read_text;

/// Course manifest: which roster/group file pair belongs to which class
/// section. Replaces the original page's hard-coded file references.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseManifest {
    #[serde(default)]
    pub course: String,
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    pub name: String,
    pub roster: String,
    pub groups: String,
}

pub fn load_manifest(path: &Path) -> anyhow::Result<CourseManifest> {
    let text = read_text("manifest", path)?;
    let manifest: CourseManifest = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;
    if manifest.sections.is_empty() {
        anyhow::bail!("manifest {} lists no sections", path.display());
    }
    Ok(manifest)
}

/// Resolve a manifest-relative path against the manifest's parent
/// directory. Absolute paths pass through unchanged.
pub fn resolve_input(manifest_path: &Path, rel: &str) -> PathBuf {
    let p = Path::new(rel);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    match manifest_path.parent() {
        Some(dir) => dir.join(p),
        None => p.to_path_buf(),
    }
}
