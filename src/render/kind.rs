// Closed set of element kinds the renderer distinguishes.
//
// Every tag maps to exactly one kind; anything not listed renders its
// children with no extra wrapping.

use markup5ever_rcdom::{Handle, NodeData};

/// Rendering strategy for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    /// Skipped together with all descendants.
    Ignored,
    /// Paragraph-like block: blank line after, own line before.
    Block,
    /// `<ul>` / `<ol>`. Ordered lists are not numbered.
    List,
    /// `<li>`, rendered with a `"* "` marker.
    ListItem,
    /// Inline element merged with its span siblings onto one line.
    Span,
    /// `<br>`.
    Break,
    /// `<h1>`–`<h6>`, carrying the level.
    Heading(u8),
    /// `<img>`, replaced by its alt text.
    Image,
    /// `<a>`.
    Link,
    /// Any other element: children only.
    Other,
}

impl ElementKind {
    /// Classify a lowercase tag name.
    pub(crate) fn from_tag(tag: &str) -> Self {
        match tag {
            "script" | "style" => Self::Ignored,
            "p" | "div" => Self::Block,
            "ul" | "ol" => Self::List,
            "li" => Self::ListItem,
            "span" => Self::Span,
            "br" => Self::Break,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "img" => Self::Image,
            "a" => Self::Link,
            _ => Self::Other,
        }
    }

    /// Kind of an element node, or `None` for text, comments and the like.
    pub(crate) fn of(handle: &Handle) -> Option<Self> {
        match handle.data {
            NodeData::Element { ref name, .. } => Some(Self::from_tag(name.local.as_ref())),
            _ => None,
        }
    }
}
