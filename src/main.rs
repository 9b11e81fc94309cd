mod diff;
mod groups;
mod manifest;
mod render;
mod report;
mod roster;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::report::{run_course, run_section, CourseReport};

#[derive(Parser)]
#[command(
    name = "groupcheck",
    version = "0.1.0",
    about = "Report roster students not yet assigned to a project group"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run every section listed in a course manifest
    Course {
        /// Course manifest path
        #[arg(default_value = "course.json")]
        manifest: PathBuf,
        /// Emit the report as JSON instead of numbered text
        #[arg(long)]
        json: bool,
    },
    /// Run one ad-hoc roster/groups file pair
    Section {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long)]
        groups: PathBuf,
        /// Section label used in the JSON report
        #[arg(long, default_value = "section")]
        name: String,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // The full report is materialized before anything reaches stdout, so a
    // failed load never leaves partial output behind.
    match cli.cmd {
        Cmd::Course { manifest, json } => {
            let report = run_course(&manifest)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", course_text(&report));
            }
        }
        Cmd::Section {
            roster,
            groups,
            name,
            json,
        } => {
            let report = run_section(&name, &roster, &groups)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::render_numbered(&report.unassigned));
            }
        }
    }

    Ok(())
}

/// Text layout for a whole course: a `[name]` header per section followed
/// by its numbered list, one blank line between sections.
fn course_text(report: &CourseReport) -> String {
    let mut out = String::new();
    for (i, s) in report.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(&s.section);
        out.push_str("]\n");
        out.push_str(&render::render_numbered(&s.unassigned));
    }
    out
}
