//! Compiled content templates.
//!
//! A `TemplateNode` tree is what the loader builds from authored JSON. It
//! mirrors [`StaticNode`](crate::StaticNode) but its strings are parsed
//! templates, so instantiating a phrase never re-parses content.

use crate::types::StyleFlags;

/// A parsed template string containing segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// A template with no variables.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::Literal(text)],
        }
    }

    /// Names of the variables referenced, in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text.
    Literal(String),
    /// A variable reference: `{$name}`.
    Variable(String),
}

/// A node of an authored phrase entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateNode {
    Text(TextTemplate),
    Link(LinkTemplate),
    ListItem(Vec<TemplateNode>),
    UnorderedList(Vec<Vec<TemplateNode>>),
    OrderedList(Vec<Vec<TemplateNode>>),
}

impl TemplateNode {
    /// Visits this node and all descendants in tree order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a TemplateNode)) {
        f(self);
        match self {
            TemplateNode::Text(text) => text.children.iter().for_each(|c| c.walk(f)),
            TemplateNode::Link(link) => link.children.iter().for_each(|c| c.walk(f)),
            TemplateNode::ListItem(children) => children.iter().for_each(|c| c.walk(f)),
            TemplateNode::UnorderedList(items) | TemplateNode::OrderedList(items) => {
                items.iter().flatten().for_each(|c| c.walk(f));
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextTemplate {
    pub content: Template,
    pub children: Vec<TemplateNode>,
    pub styles: StyleFlags,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTemplate {
    pub href: Template,
    pub content: Template,
    pub children: Vec<TemplateNode>,
    pub styles: StyleFlags,
    pub link_name: Option<String>,
}
