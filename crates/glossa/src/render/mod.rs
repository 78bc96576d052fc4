//! The renderer contract and its two implementations.
//!
//! A renderer is a [`Renderers`] record of six functions, one entry point
//! for node lists and one per node kind. Every function receives the whole
//! record and recurses through it, so a caller can clone a default record,
//! replace one function and keep the rest of the walk intact.

mod debug;
mod link;
pub mod plain;
pub mod rich;

use std::sync::Arc;

pub use debug::{DebugFlag, DebugOverlay, HIGHLIGHT_INSET_PX, OverlayEvent, OverlayState};
pub use link::{LinkActivation, LinkBehavior, LinkOpener};

use crate::types::{LinkNode, ListItemNode, ListNode, StaticNode, TextNode};

/// Output types a renderer can concatenate.
pub trait RenderOutput: Sized {
    /// Joins per-node outputs in order.
    fn concat(parts: Vec<Self>) -> Self;
}

impl RenderOutput for String {
    fn concat(parts: Vec<Self>) -> Self {
        parts.concat()
    }
}

impl<T> RenderOutput for Vec<T> {
    fn concat(parts: Vec<Self>) -> Self {
        parts.into_iter().flatten().collect()
    }
}

/// Renders a node list.
pub type NodesFn<O> = Arc<dyn Fn(&[StaticNode], &Renderers<O>) -> O + Send + Sync>;

/// Renders one node of kind `N`.
pub type NodeFn<N, O> = Arc<dyn Fn(&N, &Renderers<O>) -> O + Send + Sync>;

/// The six-function renderer record.
pub struct Renderers<O> {
    pub render_static_nodes: NodesFn<O>,
    pub render_text: NodeFn<TextNode, O>,
    pub render_link_node: NodeFn<LinkNode, O>,
    pub render_list_node: NodeFn<ListItemNode, O>,
    pub render_unordered_list_node: NodeFn<ListNode, O>,
    pub render_ordered_list_node: NodeFn<ListNode, O>,
}

impl<O> Clone for Renderers<O> {
    fn clone(&self) -> Self {
        Self {
            render_static_nodes: Arc::clone(&self.render_static_nodes),
            render_text: Arc::clone(&self.render_text),
            render_link_node: Arc::clone(&self.render_link_node),
            render_list_node: Arc::clone(&self.render_list_node),
            render_unordered_list_node: Arc::clone(&self.render_unordered_list_node),
            render_ordered_list_node: Arc::clone(&self.render_ordered_list_node),
        }
    }
}

impl<O> Renderers<O> {
    pub fn static_nodes(&self, nodes: &[StaticNode]) -> O {
        (self.render_static_nodes)(nodes, self)
    }

    pub fn text(&self, node: &TextNode) -> O {
        (self.render_text)(node, self)
    }

    pub fn link(&self, node: &LinkNode) -> O {
        (self.render_link_node)(node, self)
    }

    pub fn list_item(&self, node: &ListItemNode) -> O {
        (self.render_list_node)(node, self)
    }

    pub fn unordered_list(&self, node: &ListNode) -> O {
        (self.render_unordered_list_node)(node, self)
    }

    pub fn ordered_list(&self, node: &ListNode) -> O {
        (self.render_ordered_list_node)(node, self)
    }

    /// Returns a copy with `render_text` replaced.
    pub fn with_text(
        mut self,
        f: impl Fn(&TextNode, &Renderers<O>) -> O + Send + Sync + 'static,
    ) -> Self {
        self.render_text = Arc::new(f);
        self
    }

    /// Returns a copy with `render_link_node` replaced.
    pub fn with_link_node(
        mut self,
        f: impl Fn(&LinkNode, &Renderers<O>) -> O + Send + Sync + 'static,
    ) -> Self {
        self.render_link_node = Arc::new(f);
        self
    }

    /// Returns a copy with `render_list_node` replaced.
    pub fn with_list_node(
        mut self,
        f: impl Fn(&ListItemNode, &Renderers<O>) -> O + Send + Sync + 'static,
    ) -> Self {
        self.render_list_node = Arc::new(f);
        self
    }
}

/// Default `render_static_nodes`: dispatches each node by kind and joins
/// the results in tree order.
pub fn dispatch_static_nodes<O: RenderOutput>(nodes: &[StaticNode], renderers: &Renderers<O>) -> O {
    O::concat(
        nodes
            .iter()
            .map(|node| match node {
                StaticNode::Text(text) => renderers.text(text),
                StaticNode::Link(link) => renderers.link(link),
                StaticNode::ListItem(item) => renderers.list_item(item),
                StaticNode::UnorderedList(list) => renderers.unordered_list(list),
                StaticNode::OrderedList(list) => renderers.ordered_list(list),
            })
            .collect(),
    )
}

/// Bullet used for every unordered list item, at any depth.
pub const BULLET: &str = "•";

/// Label of the `index`-th (zero-based) item of an ordered list.
pub fn ordered_label(index: usize) -> String {
    format!("{}.", index + 1)
}
