use serde::{Deserialize, Serialize};

use super::StyleFlags;

/// One node of a resolved phrase tree.
///
/// The set of kinds is closed: renderers match on it exhaustively, so adding
/// a kind forces every renderer to handle it.
///
/// # Example
///
/// ```
/// use glossa::{StaticNode, StyleFlags, TextNode};
///
/// let node = StaticNode::Text(
///     TextNode::styled("Hello, ", StyleFlags::bold()).with_children(vec![StaticNode::text("Ada")]),
/// );
/// assert_eq!(node.kind(), "text");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StaticNode {
    #[serde(rename = "text")]
    Text(TextNode),
    #[serde(rename = "link")]
    Link(LinkNode),
    #[serde(rename = "li")]
    ListItem(ListItemNode),
    #[serde(rename = "ul")]
    UnorderedList(ListNode),
    #[serde(rename = "ol")]
    OrderedList(ListNode),
}

impl StaticNode {
    /// Unstyled text with no children.
    pub fn text(content: impl Into<String>) -> Self {
        StaticNode::Text(TextNode::new(content))
    }

    /// Styled text with no children.
    pub fn styled(content: impl Into<String>, styles: StyleFlags) -> Self {
        StaticNode::Text(TextNode::styled(content, styles))
    }

    /// Unstyled link with its visible content.
    pub fn link(href: impl Into<String>, content: impl Into<String>) -> Self {
        StaticNode::Link(LinkNode::new(href, content))
    }

    /// List item wrapping `children`.
    pub fn list_item(children: Vec<StaticNode>) -> Self {
        StaticNode::ListItem(ListItemNode::new(children))
    }

    /// Bulleted list.
    pub fn unordered(items: Vec<ListItemNode>) -> Self {
        StaticNode::UnorderedList(ListNode::new(items))
    }

    /// Numbered list.
    pub fn ordered(items: Vec<ListItemNode>) -> Self {
        StaticNode::OrderedList(ListNode::new(items))
    }

    /// The serialized `type` discriminator for this node.
    pub fn kind(&self) -> &'static str {
        match self {
            StaticNode::Text(_) => "text",
            StaticNode::Link(_) => "link",
            StaticNode::ListItem(_) => "li",
            StaticNode::UnorderedList(_) => "ul",
            StaticNode::OrderedList(_) => "ol",
        }
    }
}

/// Text with optional nested children, rendered content first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub children: Vec<StaticNode>,
    #[serde(default)]
    pub styles: StyleFlags,
}

impl TextNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn styled(content: impl Into<String>, styles: StyleFlags) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
            styles,
        }
    }

    pub fn with_children(mut self, children: Vec<StaticNode>) -> Self {
        self.children = children;
        self
    }
}

/// A hyperlink. `link_name` names the link for hosts that track them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkNode {
    pub href: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub children: Vec<StaticNode>,
    #[serde(default)]
    pub styles: StyleFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_name: Option<String>,
}

impl LinkNode {
    pub fn new(href: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<StaticNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_styles(mut self, styles: StyleFlags) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_name(mut self, link_name: impl Into<String>) -> Self {
        self.link_name = Some(link_name.into());
        self
    }
}

/// A single list entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItemNode {
    #[serde(default)]
    pub children: Vec<StaticNode>,
}

impl ListItemNode {
    pub fn new(children: Vec<StaticNode>) -> Self {
        Self { children }
    }
}

/// Shared shape of `ul` and `ol`; the variant of [`StaticNode`] decides which.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    #[serde(default)]
    pub children: Vec<ListItemNode>,
}

impl ListNode {
    pub fn new(children: Vec<ListItemNode>) -> Self {
        Self { children }
    }
}
