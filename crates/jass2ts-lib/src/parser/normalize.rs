//! Line normalization shared by every recognition stage.

/// Start of a line comment.
pub const COMMENT_MARKER: &str = "//";

/// Normalize one raw source line.
///
/// Truncates at the first `//`, trims, then collapses every interior whitespace
/// run (spaces, tabs, stray `\r`) into a single space. Idempotent.
pub fn normalize(line: &str) -> String {
    let code = match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut out = String::with_capacity(code.len());
    for word in code.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// The first non-whitespace characters of the line start a comment.
pub fn is_comment_only(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}
