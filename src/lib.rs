// html2plaintext — HTML to plaintext for the text/plain part of an email.
//
// Architecture:
//   HTML string → html5ever parse → <body> → render → fragments
//     → normalize whitespace → trim → word wrap → link fixups → text

mod error;
mod plaintext;
mod render;

use std::io::Read;

use markup5ever_rcdom::RcDom;

pub use error::HtmlToTextError;

/// Line length used when none is given.
pub const DEFAULT_LINE_LENGTH: isize = 65;

/// What to do with a document that has no `<body>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingBody {
    /// Treat it as an empty document and return `""` (default).
    #[default]
    Empty,
    /// Fail with [`HtmlToTextError::BodyNotFound`].
    Error,
}

/// Conversion options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum line length in chars. Zero or less disables wrapping.
    pub line_length: isize,
    /// Policy for documents without a `<body>`.
    pub missing_body: MissingBody,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            missing_body: MissingBody::default(),
        }
    }
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum line length. Zero or less disables wrapping.
    pub fn with_line_length(mut self, line_length: isize) -> Self {
        self.line_length = line_length;
        self
    }

    /// Set the policy for documents without a `<body>`.
    pub fn with_missing_body(mut self, missing_body: MissingBody) -> Self {
        self.missing_body = missing_body;
        self
    }
}

/// Convert an HTML string to plaintext wrapped at `line_length` chars.
///
/// # Examples
///
/// ```
/// let text = html2plaintext::convert("<h1>Test</h1>", 65).unwrap();
/// assert_eq!(text, "****\nTest\n****");
/// ```
pub fn convert(html: &str, line_length: isize) -> Result<String, HtmlToTextError> {
    convert_with(html, &Options::new().with_line_length(line_length))
}

/// Convert an HTML string to plaintext with custom options.
///
/// # Examples
///
/// ```
/// use html2plaintext::{convert_with, Options};
///
/// let options = Options::new().with_line_length(0);
/// let text = convert_with(r#"<a href="http://example.com/">Link</a>"#, &options).unwrap();
/// assert_eq!(text, "Link ( http://example.com/ )");
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(bytes = html.len()))
)]
pub fn convert_with(html: &str, options: &Options) -> Result<String, HtmlToTextError> {
    let fragments = render_fragments(html, options)?;
    Ok(fragments_to_text(&fragments, options.line_length))
}

/// Read HTML from `reader` and convert it to plaintext.
///
/// Invalid UTF-8 is replaced rather than rejected; only a failing reader
/// produces [`HtmlToTextError::Read`].
pub fn convert_read<R: Read>(reader: &mut R, options: &Options) -> Result<String, HtmlToTextError> {
    let dom = render::read_html(reader)?;
    let fragments = fragments_from_dom(&dom, options)?;
    Ok(fragments_to_text(&fragments, options.line_length))
}

/// Parse HTML and render its `<body>` into raw text fragments.
///
/// Fragments are not yet whitespace-normalized; see [`fragments_to_text`].
pub fn render_fragments(html: &str, options: &Options) -> Result<Vec<String>, HtmlToTextError> {
    let dom = render::parse_html(html);
    fragments_from_dom(&dom, options)
}

/// Join, normalize, wrap and tidy a fragment stream into the final text.
pub fn fragments_to_text(fragments: &[String], line_length: isize) -> String {
    plaintext::finish(fragments, line_length)
}

/// Wrap plain text at `line_length` chars without splitting words.
///
/// A `line_length` of zero or less returns the text unchanged.
///
/// # Examples
///
/// ```
/// assert_eq!(html2plaintext::word_wrap("aaa bbb ccc", 7), "aaa bbb\nccc");
/// ```
pub fn word_wrap(text: &str, line_length: isize) -> String {
    plaintext::wrap::word_wrap(text, line_length)
}

fn fragments_from_dom(dom: &RcDom, options: &Options) -> Result<Vec<String>, HtmlToTextError> {
    match render::find_body(&dom.document) {
        Some(body) => Ok(render::render(&body)),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(policy = ?options.missing_body, "no <body> element found");
            match options.missing_body {
                MissingBody::Empty => Ok(Vec::new()),
                MissingBody::Error => Err(HtmlToTextError::BodyNotFound),
            }
        }
    }
}
