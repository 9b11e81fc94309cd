use crate::groups::flatten_groups;
use crate::roster::parse_roster;

/// Roster entries that appear in no group, in roster order.
///
/// Exact string equality, naive scan. Inputs are tens of students, so the
/// quadratic membership test is fine.
pub fn unassigned(roster: &[String], grouped: &[String]) -> Vec<String> {
    roster
        .iter()
        .filter(|id| !grouped.iter().any(|g| g == *id))
        .cloned()
        .collect()
}

/// Full pipeline over raw file contents: parse the roster, flatten the
/// groups, take the difference.
pub fn compute_unassigned(roster_text: &str, group_text: &str) -> Vec<String> {
    let roster = parse_roster(roster_text);
    let grouped = flatten_groups(group_text);
    unassigned(&roster, &grouped)
}
