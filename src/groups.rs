/// Flatten a group file into the list of every grouped identifier.
///
/// One group per line, members comma-separated. An empty line contributes
/// zero identifiers; every other line contributes each comma-split token
/// exactly as produced, in file order. Duplicates across groups are kept.
///
/// Tokens are not trimmed. A member written with surrounding whitespace
/// (" B2") will never match the roster entry "B2" in the difference pass;
/// the source data behaves this way and the behavior is kept.
pub fn flatten_groups(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if line.is_empty() {
            continue;
        }
        for token in line.split(',') {
            out.push(token.to_string());
        }
    }
    out
}
