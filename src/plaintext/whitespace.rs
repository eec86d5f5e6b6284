// Whitespace normalization for the joined fragment stream.
//
// One left-to-right pass over the text. Each input character is judged
// against the last two characters already written:
//
// - spaces and tabs collapse to a single space and vanish after a newline
// - a newline drops a trailing space and at most one blank line survives
// - a tab or newline after a space becomes a newline
// - inside a list, a blank line before another `* ` item is dropped
// - a line that does not open with `* ` leaves the list
// - invisible padding characters vanish; a run of them with spaces inside
//   leaves at most one space

/// Characters senders use to pad hidden preheader text.
const INVISIBLE: [char; 8] = [
    '\u{00AD}', // soft hyphen
    '\u{034F}', // combining grapheme joiner
    '\u{2007}', // figure space
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // zero width no-break space
];

/// How far past a newline to look for the next list marker.
const LIST_MARKER_LOOKAHEAD: usize = 256;

fn is_invisible(c: char) -> bool {
    INVISIBLE.contains(&c)
}

/// Normalize whitespace in a single pass.
pub(crate) fn normalize(text: &str) -> String {
    let chars = canonical_chars(text);
    let mut cursor = Cursor::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_invisible(c) {
            let run = chars[i..]
                .iter()
                .take_while(|&&c| c == ' ' || is_invisible(c))
                .count();
            // A space inside the run still separates the words around it.
            if chars[i..i + run].contains(&' ') {
                cursor.space();
            }
            i += run;
            continue;
        }
        match c {
            ' ' => cursor.space(),
            '\t' => cursor.tab(&chars[i + 1..]),
            '\n' => cursor.newline(&chars[i + 1..]),
            _ => cursor.push(c),
        }
        i += 1;
    }

    cursor.out
}

/// Decode to chars with `\r\n` and `\r` folded into `\n` and no-break
/// spaces turned into plain spaces.
fn canonical_chars(text: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(text.len());
    let mut iter = text.chars().peekable();
    while let Some(c) = iter.next() {
        match c {
            '\r' if iter.peek() == Some(&'\n') => {}
            '\r' => chars.push('\n'),
            '\u{00A0}' => chars.push(' '),
            c => chars.push(c),
        }
    }
    chars
}

/// Output buffer plus the list-mode flag.
struct Cursor {
    out: String,
    in_list: bool,
}

impl Cursor {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            in_list: false,
        }
    }

    /// The last and second-to-last characters written.
    fn tail(&self) -> (Option<char>, Option<char>) {
        let mut rev = self.out.chars().rev();
        (rev.next(), rev.next())
    }

    fn push(&mut self, c: char) {
        let at_line_start = |ch: Option<char>| matches!(ch, None | Some('\n'));
        let (last, before) = self.tail();
        // Any line that does not open with `* ` ends the list.
        if (at_line_start(last) && c != '*') || (last == Some('*') && at_line_start(before)) {
            self.in_list = false;
        }
        self.out.push(c);
    }

    fn space(&mut self) {
        if matches!(self.out.chars().next_back(), None | Some(' ' | '\n')) {
            return;
        }
        self.out.push(' ');
        // `* ` at the start of a line opens a list.
        if self.out.ends_with("* ") {
            let marker = self.out.len() - 2;
            if marker == 0 || self.out[..marker].ends_with('\n') {
                self.in_list = true;
            }
        }
    }

    fn tab(&mut self, rest: &[char]) {
        if self.out.ends_with(' ') {
            self.newline(rest);
        } else {
            self.space();
        }
    }

    fn newline(&mut self, rest: &[char]) {
        if self.out.ends_with(' ') {
            self.out.pop();
        }
        match self.tail() {
            (None, _) | (Some('\n'), Some('\n')) => {}
            (Some('\n'), _) => {
                if self.in_list && starts_list_item(rest) {
                    return;
                }
                self.out.push('\n');
                self.in_list = false;
            }
            _ => self.out.push('\n'),
        }
    }
}

/// Whether the next non-whitespace text is a `* ` list marker.
fn starts_list_item(rest: &[char]) -> bool {
    let mut ahead = rest
        .iter()
        .take(LIST_MARKER_LOOKAHEAD)
        .skip_while(|&&c| c.is_whitespace() || is_invisible(c));
    ahead.next() == Some(&'*') && ahead.next() == Some(&' ')
}
