//! Integration tests for the plain renderer.

use glossa::render::plain;
use glossa::{LinkNode, ListItemNode, StaticNode, StyleFlags, TextNode};
use insta::assert_snapshot;

fn render(nodes: &[StaticNode]) -> String {
    plain::render(nodes, &plain::renderers())
}

fn item(text: &str) -> ListItemNode {
    ListItemNode::new(vec![StaticNode::text(text)])
}

#[test]
fn greeting_flattens_to_text() {
    let node = StaticNode::Text(
        TextNode::styled("Hello, ", StyleFlags::bold()).with_children(vec![StaticNode::text("Ada")]),
    );
    assert_snapshot!(render(&[node]), @"Hello, Ada");
}

#[test]
fn styles_are_dropped() {
    assert_eq!(render(&[StaticNode::styled("loud", StyleFlags::all())]), "loud");
}

#[test]
fn line_breaks_are_kept() {
    assert_eq!(render(&[StaticNode::text("a\nb")]), "a\nb");
}

#[test]
fn links_keep_text_and_drop_href() {
    let node = StaticNode::Link(
        LinkNode::new("https://example.com", "Visit ")
            .with_children(vec![StaticNode::styled("us", StyleFlags::bold())]),
    );
    assert_snapshot!(render(&[node]), @"Visit us");
}

#[test]
fn list_item_is_newline_terminated() {
    assert_eq!(render(&[StaticNode::list_item(vec![StaticNode::text("x")])]), "x\n");
}

#[test]
fn unordered_list_prefixes_bullets() {
    let list = StaticNode::unordered(vec![item("milk"), item("eggs")]);
    assert_eq!(render(&[list]), "• milk\n• eggs\n");
}

#[test]
fn ordered_list_numbers_from_one() {
    let list = StaticNode::ordered(vec![item("a"), item("b"), item("c"), item("d")]);
    assert_eq!(render(&[list]), "1. a\n2. b\n3. c\n4. d\n");
}

#[test]
fn nested_list_starts_on_its_own_line() {
    let inner = StaticNode::unordered(vec![item("inner")]);
    let outer = StaticNode::unordered(vec![ListItemNode::new(vec![
        StaticNode::text("outer"),
        inner,
    ])]);
    assert_eq!(render(&[outer]), "• outer\n• inner\n");
}

#[test]
fn item_already_ending_in_newline_is_not_doubled() {
    let list = StaticNode::ordered(vec![item("line\n"), ListItemNode::new(vec![])]);
    assert_eq!(render(&[list]), "1. line\n2. \n");
}

#[test]
fn empty_tree_renders_empty_string() {
    assert_eq!(render(&[]), "");
}
