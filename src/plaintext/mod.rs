// Fragment stream → final plaintext.
//
// The fragments are joined into one blob, whitespace-normalized in a single
// pass, trimmed, wrapped, and finally patched where wrapping split a link.

pub(crate) mod fixup;
pub(crate) mod whitespace;
pub(crate) mod wrap;

/// Turn rendered fragments into the final text.
pub(crate) fn finish(fragments: &[String], line_length: isize) -> String {
    let joined = fragments.concat();
    let normalized = whitespace::normalize(&joined);
    let wrapped = wrap::word_wrap(normalized.trim(), line_length);
    let fixed = fixup::fix_wrapped_links(&wrapped);
    fixed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish_all(fragments: &[&str], line_length: isize) -> String {
        let owned: Vec<String> = fragments.iter().map(|f| f.to_string()).collect();
        finish(&owned, line_length)
    }

    #[test]
    fn test_joins_and_trims() {
        assert_eq!(finish_all(&["\n\t", "Test", "\n\n"], 65), "Test");
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(finish_all(&[], 65), "");
        assert_eq!(finish_all(&[" \n ", "\t"], 65), "");
    }

    #[test]
    fn test_long_link_moves_to_its_own_line() {
        let href = format!("http://example.com/{}", "A".repeat(65));
        let text = finish_all(&[&format!("Hello ( {href} )")], 65);
        assert_eq!(text, format!("Hello \n( {href} )"));
    }

    #[test]
    fn test_wrapping_disabled() {
        let line = "word ".repeat(40);
        assert_eq!(finish_all(&[&line], 0), line.trim());
    }
}
