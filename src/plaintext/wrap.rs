// Word-safe line wrapping.
//
// Each line is cut greedily at the last space that keeps the piece within the
// limit. A token longer than the limit is never split: the cut moves forward
// to the first space after it instead. Lengths are counted in chars.

/// Wrap every line of `text` to at most `line_length` chars.
///
/// A `line_length` of zero or less disables wrapping.
pub(crate) fn word_wrap(text: &str, line_length: isize) -> String {
    let Ok(limit) = usize::try_from(line_length) else {
        return text.to_string();
    };
    if limit == 0 {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.split('\n') {
        wrap_line(line, limit, &mut lines);
    }
    lines.join("\n")
}

fn wrap_line(line: &str, limit: usize, lines: &mut Vec<String>) {
    let chars: Vec<char> = line.chars().collect();
    let first = lines.len();
    let mut start = 0;

    while chars.len() - start > limit {
        let Some(cut) = break_point(&chars, start, limit) else {
            break;
        };
        let piece: String = chars[start..cut].iter().collect();
        lines.push(piece.trim_end_matches(' ').to_string());
        start = cut;
        // the separating spaces are consumed by the break
        while chars.get(start) == Some(&' ') {
            start += 1;
        }
    }

    if start < chars.len() || lines.len() == first {
        lines.push(chars[start..].iter().collect());
    }
}

/// Index of the space to break at, for a line continuing at `start`.
fn break_point(chars: &[char], start: usize, limit: usize) -> Option<usize> {
    // Leading spaces belong to the first piece; never break inside them.
    let content = start + chars[start..].iter().take_while(|&&c| c == ' ').count();
    let window_end = start + limit;

    if content < window_end {
        if let Some(i) = chars[content + 1..=window_end].iter().rposition(|&c| c == ' ') {
            return Some(content + 1 + i);
        }
    }

    let from = (window_end + 1).max(content + 1);
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == ' ')
        .map(|i| from + i)
}
