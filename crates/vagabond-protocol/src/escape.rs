//! Field unescaping.
//!
//! Vagrant keeps one record per line by replacing commas with
//! `%!(VAGRANT_COMMA)` and line breaks with the two characters `\n` / `\r`.
//! The escape grammar is not formally documented, so anything that is not one
//! of those exact sequences is passed through untouched.

/// Token Vagrant writes in place of a literal comma.
pub const ESCAPED_COMMA: &str = "%!(VAGRANT_COMMA)";

/// Reverse Vagrant's field escaping in a single left-to-right pass.
pub fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut rest = field;

    while let Some(c) = rest.chars().next() {
        if c == '%' && rest.starts_with(ESCAPED_COMMA) {
            out.push(',');
            rest = &rest[ESCAPED_COMMA.len()..];
        } else if rest.starts_with("\\n") {
            out.push('\n');
            rest = &rest[2..];
        } else if rest.starts_with("\\r") {
            out.push('\r');
            rest = &rest[2..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}
