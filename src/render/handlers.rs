// Element handlers — one function per element kind.
//
// Each handler takes an html5ever node and appends zero or more text
// fragments to `out`. Fragments are raw: whitespace is cleaned up later by
// the normalizer, so handlers only decide structure (line breaks, markers,
// link targets).

use markup5ever_rcdom::{Handle, NodeData};

use super::kind::ElementKind;
use super::util::{
    collapse_trailing_whitespace, get_attr, has_descendant, is_comment_marker,
    needs_leading_break, text_content, HIDDEN_END, HIDDEN_START,
};
use super::{State, MAX_DEPTH};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Render all children of a node.
///
/// Handles the sibling-level rules: hidden comment blocks are skipped and
/// contiguous span runs are merged onto one line.
pub(crate) fn all(state: &mut State, handle: &Handle, out: &mut Vec<String>) {
    let children = handle.children.borrow();
    let mut i = 0;
    while i < children.len() {
        let child = &children[i];

        if is_comment_marker(child, HIDDEN_START) {
            if let Some(end) = children[i + 1..]
                .iter()
                .position(|c| is_comment_marker(c, HIDDEN_END))
            {
                #[cfg(feature = "tracing")]
                tracing::trace!(skipped = end, "skipping hidden block");
                i += end + 2;
                continue;
            }
        }

        if ElementKind::of(child) == Some(ElementKind::Span) {
            i += span_run(state, &children[i..], out);
            continue;
        }

        one(state, child, out);
        i += 1;
    }
}

/// Render a single node.
pub(crate) fn one(state: &mut State, handle: &Handle, out: &mut Vec<String>) {
    match handle.data {
        NodeData::Text { ref contents } => {
            let text = contents.borrow();
            if !text.is_empty() {
                out.push(text.to_string());
            }
        }
        NodeData::Element { ref name, .. } => {
            if state.depth >= MAX_DEPTH {
                #[cfg(feature = "tracing")]
                tracing::warn!(depth = state.depth, "nesting limit reached, flattening subtree");
                out.push(text_content(handle));
                return;
            }
            state.depth += 1;
            dispatch_element(state, handle, ElementKind::from_tag(name.local.as_ref()), out);
            state.depth -= 1;
        }
        _ => {}
    }
}

/// Route an element to its handler.
fn dispatch_element(state: &mut State, handle: &Handle, kind: ElementKind, out: &mut Vec<String>) {
    match kind {
        ElementKind::Ignored => {}
        ElementKind::Block => block(state, handle, out),
        ElementKind::List => list(state, handle, out),
        ElementKind::ListItem => list_item(state, handle, out),
        ElementKind::Break => out.push("\n".to_string()),
        ElementKind::Heading(level) => heading(state, handle, level, out),
        ElementKind::Image => image(handle, out),
        ElementKind::Link => link(state, handle, out),
        // A span reached outside of a sibling run has nothing to merge with.
        ElementKind::Span | ElementKind::Other => all(state, handle, out),
    }
}

/// Render children into a fresh buffer.
fn rendered_children(state: &mut State, handle: &Handle) -> Vec<String> {
    let mut inner = Vec::new();
    all(state, handle, &mut inner);
    inner
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn block(state: &mut State, handle: &Handle, out: &mut Vec<String>) {
    if needs_leading_break(out) {
        out.push("\n".to_string());
    }
    all(state, handle, out);
    out.push("\n\n".to_string());
}

fn list(state: &mut State, handle: &Handle, out: &mut Vec<String>) {
    if needs_leading_break(out) {
        out.push("\n".to_string());
    }
    // `<li>` children pick up their own marker; everything else passes through.
    all(state, handle, out);
}

fn list_item(state: &mut State, handle: &Handle, out: &mut Vec<String>) {
    let content = rendered_children(state, handle).concat();
    if needs_leading_break(out) {
        out.push("\n".to_string());
    }
    out.push(format!("* {}\n", content.trim()));
}

/// Merge a run of spans (and the text between them) onto one line.
///
/// `siblings` starts at the first span. Returns how many siblings were consumed.
fn span_run(state: &mut State, siblings: &[Handle], out: &mut Vec<String>) -> usize {
    let mut consumed = 0;
    for sibling in siblings {
        let piece = match sibling.data {
            NodeData::Text { ref contents } => contents.borrow().to_string(),
            NodeData::Element { .. } if ElementKind::of(sibling) == Some(ElementKind::Span) => {
                state.depth += 1;
                let piece = if state.depth > MAX_DEPTH {
                    text_content(sibling)
                } else {
                    rendered_children(state, sibling).concat()
                };
                state.depth -= 1;
                piece
            }
            _ => break,
        };
        consumed += 1;
        if !piece.is_empty() {
            out.push(collapse_trailing_whitespace(&piece));
        }
    }
    consumed
}

fn heading(state: &mut State, handle: &Handle, level: u8, out: &mut Vec<String>) {
    let content = rendered_children(state, handle).concat();
    let lines: Vec<String> = content
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();
    let Some(width) = lines.iter().map(|line| line.chars().count()).max() else {
        return;
    };

    let (above, below) = match level {
        1 => (Some('*'), '*'),
        2 => (Some('-'), '-'),
        _ => (None, '-'),
    };

    let mut block = String::from("\n\n");
    if let Some(marker) = above {
        block.extend(std::iter::repeat(marker).take(width));
        block.push('\n');
    }
    block.push_str(&lines.join("\n"));
    block.push('\n');
    block.extend(std::iter::repeat(below).take(width));
    block.push_str("\n\n");
    out.push(block);
}

fn image(handle: &Handle, out: &mut Vec<String>) {
    if let Some(alt) = get_attr(handle, "alt") {
        let alt = alt.trim();
        if !alt.is_empty() {
            out.push(alt.to_string());
        }
    }
}

fn link(state: &mut State, handle: &Handle, out: &mut Vec<String>) {
    let mut inner = rendered_children(state, handle);
    let content = inner.concat();
    let text = content.trim();

    let raw_href = get_attr(handle, "href").unwrap_or_default();
    let href = strip_mailto(raw_href.trim()).trim();

    if text.is_empty() && href.is_empty() {
        out.append(&mut inner);
    } else if text == href {
        out.push(href.to_string());
    } else if text.is_empty() {
        if has_descendant(handle, ElementKind::Image) {
            out.push(format!("( {href} )"));
        }
    } else if href.is_empty() {
        out.append(&mut inner);
    } else {
        out.push(format!("{text} ( {href} )"));
    }
}

/// Drop a leading `mailto:` scheme; the address alone reads better in text.
fn strip_mailto(href: &str) -> &str {
    const SCHEME: &str = "mailto:";
    match href.get(..SCHEME.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(SCHEME) => &href[SCHEME.len()..],
        _ => href,
    }
}
