//! Makes arbitrary text safe to drop inside a PDF literal string `( ... )`.

/// Replace everything outside printable ASCII (plus tab/LF/CR) by a space.
///
/// Lossy on purpose: the built-in fonts have no encoding we could map
/// arbitrary Unicode onto, and the reports only carry simple audit text.
pub fn clean(text: &str) -> String {
    text.chars()
        .map(|c| if is_representable(c) { c } else { ' ' })
        .collect()
}

#[inline]
fn is_representable(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | ' '..='~')
}

/// Backslash-escape the literal-string delimiters `\`, `(` and `)`.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `clean` followed by `escape_literal`; the result goes between the parens
/// of a `Tj` operand verbatim.
pub fn sanitize(text: &str) -> String {
    escape_literal(&clean(text))
}
