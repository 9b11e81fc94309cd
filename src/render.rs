use std::fmt::Write;

/// Render the unassigned list as 1-based numbered lines, one per entry:
/// `第{n}位: {id}` plus '\n'. An empty list renders as the empty string.
pub fn render_numbered(ids: &[String]) -> String {
    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "第{}位: {}", i + 1, id);
    }
    out
}
