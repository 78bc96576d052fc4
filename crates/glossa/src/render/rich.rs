//! Rich renderer: produces an interactive [`RichNode`] tree.

use std::fmt::Write as _;
use std::slice;
use std::sync::Arc;

use bon::Builder;
use super::debug::{DebugFlag, DebugOverlay};
use super::link::{LinkActivation, LinkBehavior, LinkOpener};
use super::{BULLET, Renderers, dispatch_static_nodes, ordered_label};
use crate::store::Resolved;
use crate::types::{DebugInfo, LinkNode, ListItemNode, ListNode, StaticNode, StyleFlags, StyleMark, TextNode};

/// Rich renderer output.
#[derive(Debug, Clone, PartialEq)]
pub enum RichNode {
    Text(String),
    /// Explicit break for a `\n` in authored content.
    LineBreak,
    Mark {
        mark: StyleMark,
        children: Vec<RichNode>,
    },
    Anchor(Anchor),
    ListItem(Vec<RichNode>),
    List(RichList),
    DebugOverlay(DebugOverlay),
}

/// A rendered link.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub href: String,
    pub link_name: Option<String>,
    pub behavior: LinkBehavior,
    pub children: Vec<RichNode>,
}

impl Anchor {
    /// Activates the link: intercepted links go to `opener`, others return
    /// their navigation target.
    pub fn activate(&self, opener: &dyn LinkOpener) -> LinkActivation {
        match self.behavior {
            LinkBehavior::Intercept => {
                opener.open_link(&self.href);
                LinkActivation::Opened
            }
            LinkBehavior::Navigate => LinkActivation::Navigate(self.href.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// A rendered list with explicit item labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RichList {
    pub kind: ListKind,
    pub items: Vec<RichListItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RichListItem {
    pub label: String,
    pub children: Vec<RichNode>,
}

/// Per-call render settings.
#[derive(Debug, Clone, Default, Builder)]
pub struct RenderContext {
    /// Shared debug switch, read once per [`render`] call.
    #[builder(default)]
    pub debug: DebugFlag,
}

/// The default rich renderer record.
pub fn renderers() -> Renderers<Vec<RichNode>> {
    Renderers {
        render_static_nodes: Arc::new(dispatch_static_nodes::<Vec<RichNode>>),
        render_text: Arc::new(render_text),
        render_link_node: Arc::new(render_link_node),
        render_list_node: Arc::new(render_list_node),
        render_unordered_list_node: Arc::new(render_unordered_list_node),
        render_ordered_list_node: Arc::new(render_ordered_list_node),
    }
}

/// The default record with links whose href satisfies `intercept` marked
/// for the host opener.
///
/// # Example
///
/// ```
/// use glossa::render::rich::{self, RichNode};
/// use glossa::render::LinkBehavior;
/// use glossa::StaticNode;
///
/// let renderers = rich::intercepting(|href| href.starts_with("https://"));
/// let out = renderers.static_nodes(&[StaticNode::link("https://example.com", "site")]);
/// let RichNode::Anchor(anchor) = &out[0] else { panic!() };
/// assert_eq!(anchor.behavior, LinkBehavior::Intercept);
/// ```
pub fn intercepting(
    intercept: impl Fn(&str) -> bool + Send + Sync + 'static,
) -> Renderers<Vec<RichNode>> {
    renderers().with_link_node(move |node, renderers| {
        let mut out = render_link_node(node, renderers);
        if intercept(&node.href) {
            for rendered in &mut out {
                if let RichNode::Anchor(anchor) = rendered {
                    anchor.behavior = LinkBehavior::Intercept;
                }
            }
        }
        out
    })
}

/// Public entry point.
///
/// Equals `render_static_nodes` when the debug flag is off. When it is on,
/// the output is wrapped in one [`RichNode::DebugOverlay`] carrying
/// `debug_info`.
pub fn render(
    nodes: &[StaticNode],
    renderers: &Renderers<Vec<RichNode>>,
    context: &RenderContext,
    debug_info: &DebugInfo,
) -> Vec<RichNode> {
    let rendered = renderers.static_nodes(nodes);
    if !context.debug.is_enabled() {
        return rendered;
    }
    vec![RichNode::DebugOverlay(DebugOverlay::new(debug_info.clone(), rendered))]
}

/// Renders a store resolution with its own debug info.
pub fn render_resolved(
    resolved: &Resolved,
    renderers: &Renderers<Vec<RichNode>>,
    context: &RenderContext,
) -> Vec<RichNode> {
    render(&resolved.nodes, renderers, context, &resolved.debug_info)
}

/// Styled content followed by the children, which carry their own styles.
pub fn render_text(node: &TextNode, renderers: &Renderers<Vec<RichNode>>) -> Vec<RichNode> {
    let mut out = wrap_styles(node.styles, content_nodes(&node.content));
    out.extend(renderers.static_nodes(&node.children));
    out
}

pub fn render_link_node(node: &LinkNode, renderers: &Renderers<Vec<RichNode>>) -> Vec<RichNode> {
    let mut children = wrap_styles(node.styles, content_nodes(&node.content));
    children.extend(renderers.static_nodes(&node.children));
    vec![RichNode::Anchor(Anchor {
        href: node.href.clone(),
        link_name: node.link_name.clone(),
        behavior: LinkBehavior::Navigate,
        children,
    })]
}

pub fn render_list_node(node: &ListItemNode, renderers: &Renderers<Vec<RichNode>>) -> Vec<RichNode> {
    vec![RichNode::ListItem(renderers.static_nodes(&node.children))]
}

pub fn render_unordered_list_node(
    node: &ListNode,
    renderers: &Renderers<Vec<RichNode>>,
) -> Vec<RichNode> {
    render_list(ListKind::Unordered, node, renderers)
}

pub fn render_ordered_list_node(
    node: &ListNode,
    renderers: &Renderers<Vec<RichNode>>,
) -> Vec<RichNode> {
    render_list(ListKind::Ordered, node, renderers)
}

fn render_list(kind: ListKind, node: &ListNode, renderers: &Renderers<Vec<RichNode>>) -> Vec<RichNode> {
    let items = node
        .children
        .iter()
        .enumerate()
        .map(|(index, item)| RichListItem {
            label: match kind {
                ListKind::Unordered => BULLET.to_string(),
                ListKind::Ordered => ordered_label(index),
            },
            children: renderers.list_item(item),
        })
        .collect();
    vec![RichNode::List(RichList { kind, items })]
}

/// Splits content on `\n`, emitting explicit breaks between lines.
fn content_nodes(content: &str) -> Vec<RichNode> {
    let mut out = Vec::new();
    for (index, line) in content.split('\n').enumerate() {
        if index > 0 {
            out.push(RichNode::LineBreak);
        }
        if !line.is_empty() {
            out.push(RichNode::Text(line.to_string()));
        }
    }
    out
}

/// Wraps `inner` in one mark per active flag, bold innermost.
fn wrap_styles(styles: StyleFlags, inner: Vec<RichNode>) -> Vec<RichNode> {
    if inner.is_empty() {
        return inner;
    }
    styles.marks().fold(inner, |children, mark| {
        vec![RichNode::Mark { mark, children }]
    })
}

/// Text a reader sees, with list labels and breaks spelled out.
pub fn visible_text(nodes: &[RichNode]) -> String {
    let mut out = String::new();
    push_visible_text(nodes, &mut out);
    out
}

fn push_visible_text(nodes: &[RichNode], out: &mut String) {
    for node in nodes {
        match node {
            RichNode::Text(text) => out.push_str(text),
            RichNode::LineBreak => out.push('\n'),
            RichNode::Mark { children, .. } => push_visible_text(children, out),
            RichNode::Anchor(anchor) => push_visible_text(&anchor.children, out),
            RichNode::ListItem(children) => push_item_text(children, out),
            RichNode::List(list) => {
                for item in &list.items {
                    out.push_str(&item.label);
                    out.push(' ');
                    push_visible_text(&item.children, out);
                }
            }
            RichNode::DebugOverlay(overlay) => push_visible_text(&overlay.children, out),
        }
    }
}

/// Item text ending in a newline, with nested lists on their own line.
fn push_item_text(children: &[RichNode], out: &mut String) {
    let mut item = String::new();
    for child in children {
        if matches!(child, RichNode::List(_)) && !item.is_empty() && !item.ends_with('\n') {
            item.push('\n');
        }
        push_visible_text(slice::from_ref(child), &mut item);
    }
    if !item.ends_with('\n') {
        item.push('\n');
    }
    out.push_str(&item);
}

/// HTML-like markup for inspection and snapshots.
///
/// # Example
///
/// ```
/// use glossa::render::rich::{self, markup};
/// use glossa::{StaticNode, StyleFlags};
///
/// let out = rich::renderers().static_nodes(&[StaticNode::styled("hi", StyleFlags::bold())]);
/// assert_eq!(markup(&out), "<b>hi</b>");
/// ```
pub fn markup(nodes: &[RichNode]) -> String {
    let mut out = String::new();
    push_markup(nodes, &mut out);
    out
}

fn push_markup(nodes: &[RichNode], out: &mut String) {
    for node in nodes {
        match node {
            RichNode::Text(text) => out.push_str(&escape(text)),
            RichNode::LineBreak => out.push_str("<br>"),
            RichNode::Mark { mark, children } => {
                let _ = write!(out, "<{mark}>");
                push_markup(children, out);
                let _ = write!(out, "</{mark}>");
            }
            RichNode::Anchor(anchor) => {
                let _ = write!(out, "<a href=\"{}\"", escape(&anchor.href));
                if let Some(name) = &anchor.link_name {
                    let _ = write!(out, " name=\"{}\"", escape(name));
                }
                if anchor.behavior == LinkBehavior::Intercept {
                    out.push_str(" data-intercept");
                }
                out.push('>');
                push_markup(&anchor.children, out);
                out.push_str("</a>");
            }
            RichNode::ListItem(children) => {
                out.push_str("<li>");
                push_markup(children, out);
                out.push_str("</li>");
            }
            RichNode::List(list) => {
                let tag = match list.kind {
                    ListKind::Unordered => "ul",
                    ListKind::Ordered => "ol",
                };
                let _ = write!(out, "<{tag}>");
                for item in &list.items {
                    push_markup(&item.children, out);
                }
                let _ = write!(out, "</{tag}>");
            }
            RichNode::DebugOverlay(overlay) => {
                let _ = write!(
                    out,
                    "<debug group=\"{}\" key=\"{}\">",
                    escape(&overlay.info.group_name),
                    escape(&overlay.info.phrase_key)
                );
                push_markup(&overlay.children, out);
                out.push_str("</debug>");
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
