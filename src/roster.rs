use std::path::Path;

use anyhow::Context;

/// Read one of the input files into a string. `role` names the file's
/// purpose ("roster", "groups", "manifest") so a failed section run says
/// which of its two inputs was missing.
pub fn read_text(role: &str, path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {} file {}", role, path.display()))
}

/// Split roster text on '\n' and drop the final element.
///
/// The drop is positional: roster files end with an empty terminator line,
/// and the last element of the split is discarded whatever it contains. A
/// file missing its final newline loses its last real entry, same as the
/// source data always has. Nothing is trimmed; interior empty lines stay
/// as empty identifiers.
pub fn parse_roster(text: &str) -> Vec<String> {
    let mut ids: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();
    ids.pop();
    ids
}
