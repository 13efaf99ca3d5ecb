use crate::page_params::PageParams;
use crate::sanitize::sanitize;

/// Resource name the shared font is registered under on every page.
pub const FONT_RESOURCE: &str = "F1";

/// Text program for page `index` (1-based) out of `total`.
///
/// Operators are newline separated with no trailing newline; the byte length
/// of the returned buffer is what the stream's `/Length` must declare.
pub fn page_program<S: AsRef<str>>(
    params: &PageParams,
    title: &str,
    index: usize,
    total: usize,
    lines: &[S],
) -> Vec<u8> {
    let mut ops: Vec<String> = Vec::with_capacity(6 + 2 * lines.len());
    ops.push("BT".into());
    ops.push(format!("/{FONT_RESOURCE} {} Tf", params.font_size));
    ops.push(format!("{} {} Td", params.left, params.top));

    // title + page indicator on every page
    ops.push(show(&format!("{title}  (Page {index} of {total})")));
    ops.push(format!("0 -{} Td", params.title_gap()));

    for line in lines {
        ops.push(show(line.as_ref()));
        ops.push(format!("0 -{} Td", params.line_height));
    }
    ops.push("ET".into());

    ops.join("\n").into_bytes()
}

fn show(text: &str) -> String {
    format!("({}) Tj", sanitize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(title: &str, index: usize, total: usize, lines: &[&str]) -> String {
        String::from_utf8(page_program(&PageParams::default(), title, index, total, lines)).unwrap()
    }

    #[test]
    fn empty_page_has_only_title_line() {
        assert_eq!(
            program("Report", 1, 1, &[]),
            "BT\n/F1 12 Tf\n50 800 Td\n(Report  \\(Page 1 of 1\\)) Tj\n0 -28 Td\nET"
        );
    }

    #[test]
    fn lines_advance_by_one_line_height() {
        let p = program("T", 2, 3, &["a", "b"]);
        assert_eq!(
            p,
            "BT\n/F1 12 Tf\n50 800 Td\n(T  \\(Page 2 of 3\\)) Tj\n0 -28 Td\n\
             (a) Tj\n0 -14 Td\n(b) Tj\n0 -14 Td\nET"
        );
    }

    #[test]
    fn line_text_is_sanitized() {
        let p = program("T", 1, 1, &["Price: $5 (final)", "naïve"]);
        assert!(p.contains("(Price: $5 \\(final\\)) Tj"));
        assert!(p.contains("(na ve) Tj"));
    }
}
