use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use serde::Serialize;

use crate::diff::unassigned;
use crate::groups::flatten_groups;
use crate::manifest::{load_manifest, resolve_input};
use crate::roster::{parse_roster, read_text};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section: String,
    pub roster_count: usize,
    pub grouped_count: usize,
    pub unassigned: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseReport {
    pub course: String,
    pub sections: Vec<SectionReport>,
}

/// One section pipeline: load both files, flatten, diff. A failed load
/// aborts this section with the error; nothing is substituted.
pub fn run_section(
    name: &str,
    roster_path: &Path,
    groups_path: &Path,
) -> anyhow::Result<SectionReport> {
    debug!("loading roster {}", roster_path.display());
    let roster_text = read_text("roster", roster_path)?;
    debug!("loading groups {}", groups_path.display());
    let group_text = read_text("groups", groups_path)?;

    let roster = parse_roster(&roster_text);
    let grouped = flatten_groups(&group_text);
    let unassigned = unassigned(&roster, &grouped);

    info!(
        "section {}: {} on roster, {} grouped entries, {} unassigned",
        name,
        roster.len(),
        grouped.len(),
        unassigned.len()
    );

    Ok(SectionReport {
        section: name.to_string(),
        roster_count: roster.len(),
        grouped_count: grouped.len(),
        unassigned,
    })
}

/// Run every section in the manifest, in manifest order. The first
/// failing section aborts the run with the section named in the error.
pub fn run_course(manifest_path: &Path) -> anyhow::Result<CourseReport> {
    let manifest = load_manifest(manifest_path)?;

    let mut sections: Vec<SectionReport> = Vec::new();
    for entry in &manifest.sections {
        let roster_path = resolve_input(manifest_path, &entry.roster);
        let groups_path = resolve_input(manifest_path, &entry.groups);
        let report = run_section(&entry.name, &roster_path, &groups_path)
            .with_context(|| format!("section {} failed", entry.name))?;
        sections.push(report);
    }

    Ok(CourseReport {
        course: manifest.course,
        sections,
    })
}
