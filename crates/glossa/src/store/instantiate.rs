//! Builds concrete node trees from compiled template entries.

use crate::parser::ast::{Segment, Template, TemplateNode};
use crate::store::error::ResolveError;
use crate::types::{
    LinkNode, ListItemNode, ListNode, StaticNode, StyleFlags, TextNode, Value, Variables,
};

/// Instantiates `nodes` with `variables`, producing a fresh tree.
pub(crate) fn instantiate(
    key: &str,
    nodes: &[TemplateNode],
    variables: &Variables,
) -> Result<Vec<StaticNode>, ResolveError> {
    nodes
        .iter()
        .map(|node| instantiate_node(key, node, variables))
        .collect()
}

fn instantiate_node(
    key: &str,
    node: &TemplateNode,
    variables: &Variables,
) -> Result<StaticNode, ResolveError> {
    Ok(match node {
        TemplateNode::Text(text) => {
            let (content, mut children) =
                expand_content(key, &text.content, text.styles, variables)?;
            children.extend(instantiate(key, &text.children, variables)?);
            StaticNode::Text(TextNode {
                content,
                children,
                styles: text.styles,
            })
        }
        TemplateNode::Link(link) => {
            let href = expand_attribute(key, &link.href, variables)?;
            let (content, mut children) =
                expand_content(key, &link.content, link.styles, variables)?;
            children.extend(instantiate(key, &link.children, variables)?);
            StaticNode::Link(LinkNode {
                href,
                content,
                children,
                styles: link.styles,
                link_name: link.link_name.clone(),
            })
        }
        TemplateNode::ListItem(children) => {
            StaticNode::ListItem(ListItemNode::new(instantiate(key, children, variables)?))
        }
        TemplateNode::UnorderedList(items) => {
            StaticNode::UnorderedList(instantiate_list(key, items, variables)?)
        }
        TemplateNode::OrderedList(items) => {
            StaticNode::OrderedList(instantiate_list(key, items, variables)?)
        }
    })
}

fn instantiate_list(
    key: &str,
    items: &[Vec<TemplateNode>],
    variables: &Variables,
) -> Result<ListNode, ResolveError> {
    let items = items
        .iter()
        .map(|item| instantiate(key, item, variables).map(ListItemNode::new))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ListNode::new(items))
}

fn lookup<'v>(key: &str, variables: &'v Variables, name: &str) -> Result<&'v Value, ResolveError> {
    variables
        .get(name)
        .ok_or_else(|| ResolveError::MissingVariable {
            key: key.to_string(),
            name: name.to_string(),
        })
}

/// Expands a content template into the node's own content string plus
/// leading children.
///
/// Text before the first fragment stays in `content`. From the first fragment
/// on, fragments are spliced as nodes and the text between them becomes
/// sibling text nodes with the owner's styles, so tree order matches template
/// order.
fn expand_content(
    key: &str,
    template: &Template,
    styles: StyleFlags,
    variables: &Variables,
) -> Result<(String, Vec<StaticNode>), ResolveError> {
    let mut content = String::new();
    let mut spilled: Vec<StaticNode> = Vec::new();
    let mut pending: Option<String> = None;

    for segment in &template.segments {
        let text = match segment {
            Segment::Literal(text) => text.clone(),
            Segment::Variable(name) => match lookup(key, variables, name)? {
                Value::Fragment(nodes) => {
                    if let Some(text) = pending.take() {
                        spilled.push(StaticNode::styled(text, styles));
                    }
                    spilled.extend(nodes.iter().cloned());
                    continue;
                }
                value => value.to_string(),
            },
        };
        if spilled.is_empty() && pending.is_none() {
            content.push_str(&text);
        } else {
            pending.get_or_insert_with(String::new).push_str(&text);
        }
    }

    if let Some(text) = pending {
        spilled.push(StaticNode::styled(text, styles));
    }
    Ok((content, spilled))
}

fn expand_attribute(
    key: &str,
    template: &Template,
    variables: &Variables,
) -> Result<String, ResolveError> {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Variable(name) => {
                let value = lookup(key, variables, name)?;
                if value.is_fragment() {
                    return Err(ResolveError::FragmentInAttribute {
                        key: key.to_string(),
                        name: name.to_string(),
                    });
                }
                out.push_str(&value.to_string());
            }
        }
    }
    Ok(out)
}
