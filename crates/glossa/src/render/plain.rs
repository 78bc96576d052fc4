//! Plain renderer: flattens a tree to a single string.
//!
//! Used where interactive output is invalid, such as search indexing,
//! clipboard copies and plain-text previews. Styles are dropped, links keep
//! only their visible text, list items end with a newline, nested lists start on a new line and
//! list entries
//! are prefixed with a bullet or their 1-based number.

use std::slice;
use std::sync::Arc;

use super::{BULLET, Renderers, dispatch_static_nodes, ordered_label};
use crate::store::Resolved;
use crate::types::{LinkNode, ListItemNode, ListNode, StaticNode, TextNode};

/// The default plain renderer record.
pub fn renderers() -> Renderers<String> {
    Renderers {
        render_static_nodes: Arc::new(dispatch_static_nodes::<String>),
        render_text: Arc::new(render_text),
        render_link_node: Arc::new(render_link_node),
        render_list_node: Arc::new(render_list_node),
        render_unordered_list_node: Arc::new(render_unordered_list_node),
        render_ordered_list_node: Arc::new(render_ordered_list_node),
    }
}

/// Public entry point. Plain output has no debug overlay.
///
/// # Example
///
/// ```
/// use glossa::render::plain;
/// use glossa::{ListItemNode, StaticNode};
///
/// let list = StaticNode::ordered(vec![
///     ListItemNode::new(vec![StaticNode::text("first")]),
///     ListItemNode::new(vec![StaticNode::text("second")]),
/// ]);
/// assert_eq!(plain::render(&[list], &plain::renderers()), "1. first\n2. second\n");
/// ```
pub fn render(nodes: &[StaticNode], renderers: &Renderers<String>) -> String {
    renderers.static_nodes(nodes)
}

pub fn render_resolved(resolved: &Resolved, renderers: &Renderers<String>) -> String {
    render(&resolved.nodes, renderers)
}

pub fn render_text(node: &TextNode, renderers: &Renderers<String>) -> String {
    let mut out = node.content.clone();
    out.push_str(&renderers.static_nodes(&node.children));
    out
}

pub fn render_link_node(node: &LinkNode, renderers: &Renderers<String>) -> String {
    let mut out = node.content.clone();
    out.push_str(&renderers.static_nodes(&node.children));
    out
}

/// Item text ending in a newline. A list directly inside the item starts on
/// its own line.
pub fn render_list_node(node: &ListItemNode, renderers: &Renderers<String>) -> String {
    let mut out = String::new();
    for child in &node.children {
        let is_list = matches!(child, StaticNode::UnorderedList(_) | StaticNode::OrderedList(_));
        if is_list && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&renderers.static_nodes(slice::from_ref(child)));
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub fn render_unordered_list_node(node: &ListNode, renderers: &Renderers<String>) -> String {
    node.children
        .iter()
        .map(|item| format!("{BULLET} {}", renderers.list_item(item)))
        .collect()
}

pub fn render_ordered_list_node(node: &ListNode, renderers: &Renderers<String>) -> String {
    node.children
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{} {}", ordered_label(index), renderers.list_item(item)))
        .collect()
}
