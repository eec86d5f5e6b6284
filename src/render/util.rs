// Shared utilities for the render module.

use markup5ever_rcdom::{Handle, NodeData};

use super::kind::ElementKind;

/// Comment text opening a block that only belongs in the HTML part.
pub(crate) const HIDDEN_START: &str = "start text/html";
/// Comment text closing a hidden block.
pub(crate) const HIDDEN_END: &str = "end text/html";

/// Get the value of an attribute on an element node. First match wins.
pub(crate) fn get_attr(handle: &Handle, name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

/// Whether `handle` is a comment whose trimmed text equals `marker`.
pub(crate) fn is_comment_marker(handle: &Handle, marker: &str) -> bool {
    match handle.data {
        NodeData::Comment { ref contents } => contents.trim().eq_ignore_ascii_case(marker),
        _ => false,
    }
}

/// Whether any descendant of `handle` is an element of the given kind.
pub(crate) fn has_descendant(handle: &Handle, kind: ElementKind) -> bool {
    let mut stack: Vec<Handle> = handle.children.borrow().iter().cloned().collect();
    while let Some(node) = stack.pop() {
        if ElementKind::of(&node) == Some(kind) {
            return true;
        }
        stack.extend(node.children.borrow().iter().cloned());
    }
    false
}

/// Concatenate all text below `handle` in document order, skipping ignored
/// subtrees. Iterative, so it is safe on arbitrarily deep trees.
pub(crate) fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    let mut stack = vec![handle.clone()];
    while let Some(node) = stack.pop() {
        match node.data {
            NodeData::Text { ref contents } => text.push_str(&contents.borrow()),
            NodeData::Comment { .. } => {}
            _ if ElementKind::of(&node) == Some(ElementKind::Ignored) => {}
            _ => stack.extend(node.children.borrow().iter().rev().cloned()),
        }
    }
    text
}

/// Whether a block starting now needs a newline first: the last fragment
/// with content other than spaces and tabs does not end in one.
pub(crate) fn needs_leading_break(out: &[String]) -> bool {
    out.iter()
        .rev()
        .map(|fragment| fragment.trim_end_matches([' ', '\t']))
        .find(|fragment| !fragment.is_empty())
        .is_some_and(|last| !last.ends_with('\n'))
}

/// Replace any trailing whitespace with exactly one space.
pub(crate) fn collapse_trailing_whitespace(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.len() == text.len() {
        text.to_string()
    } else {
        format!("{trimmed} ")
    }
}
