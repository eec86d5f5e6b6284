// HTML tree → fragment stream.
//
// Parses HTML via html5ever and walks the `<body>` subtree, dispatching each
// element to a handler that appends raw text fragments. Entity decoding is
// done by the parser, so fragments already hold decoded characters.

pub(crate) mod handlers;
pub(crate) mod kind;
pub(crate) mod util;

use std::io::{self, Read};

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Element depth beyond which subtrees are flattened to their text.
pub(crate) const MAX_DEPTH: usize = 256;

/// Rendering state threaded through all handlers.
pub(crate) struct State {
    /// Current element nesting depth below `<body>`.
    pub depth: usize,
}

impl State {
    fn new() -> Self {
        Self { depth: 0 }
    }
}

/// Render the children of `body` into a fragment stream.
pub(crate) fn render(body: &Handle) -> Vec<String> {
    let mut state = State::new();
    let mut out = Vec::new();
    handlers::all(&mut state, body, &mut out);
    out
}

fn parse_opts() -> ParseOpts {
    ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Parse an HTML string into an html5ever RcDom.
pub(crate) fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), parse_opts())
        .from_utf8()
        .one(html.as_bytes())
}

/// Parse HTML from a byte stream. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn read_html<R: Read>(reader: &mut R) -> io::Result<RcDom> {
    parse_document(RcDom::default(), parse_opts())
        .from_utf8()
        .read_from(reader)
}

/// Find the first `<body>` element in document order.
pub(crate) fn find_body(document: &Handle) -> Option<Handle> {
    let mut stack = vec![document.clone()];
    while let Some(node) = stack.pop() {
        if let NodeData::Element { ref name, .. } = node.data {
            if name.local.as_ref() == "body" {
                return Some(node.clone());
            }
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}
