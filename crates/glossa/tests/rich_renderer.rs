//! Integration tests for the rich renderer.

use std::cell::RefCell;

use glossa::render::rich::{self, Anchor, ListKind, RichList, RichListItem, markup, visible_text};
use glossa::render::{LinkActivation, LinkBehavior};
use glossa::{
    LinkNode, ListItemNode, RichNode, StaticNode, StyleFlags, StyleMark, TextNode,
};
use insta::assert_snapshot;

fn render(nodes: &[StaticNode]) -> Vec<RichNode> {
    rich::renderers().static_nodes(nodes)
}

fn greeting() -> StaticNode {
    StaticNode::Text(
        TextNode::styled("Hello, ", StyleFlags::bold()).with_children(vec![StaticNode::text("Ada")]),
    )
}

// =========================================================================
// Text
// =========================================================================

#[test]
fn greeting_is_bold_then_plain_child() {
    let out = render(&[greeting()]);
    assert_eq!(
        out,
        vec![
            RichNode::Mark {
                mark: StyleMark::Bold,
                children: vec![RichNode::Text("Hello, ".into())],
            },
            RichNode::Text("Ada".into()),
        ]
    );
    assert_snapshot!(markup(&out), @"<b>Hello, </b>Ada");
}

#[test]
fn line_breaks_become_explicit_breaks() {
    let out = render(&[StaticNode::text("one\ntwo\n\nthree")]);
    assert_eq!(
        out,
        vec![
            RichNode::Text("one".into()),
            RichNode::LineBreak,
            RichNode::Text("two".into()),
            RichNode::LineBreak,
            RichNode::LineBreak,
            RichNode::Text("three".into()),
        ]
    );
}

#[test]
fn all_styles_nest_in_fixed_order() {
    let out = render(&[StaticNode::styled("x", StyleFlags::all())]);
    assert_snapshot!(markup(&out), @"<sub><sup><s><u><i><b>x</b></i></u></s></sup></sub>");
}

#[test]
fn nesting_order_ignores_how_flags_were_set() {
    let a = StyleFlags {
        is_subscript: true,
        is_bold: true,
        ..StyleFlags::NONE
    };
    let b = StyleFlags::NONE
        .with(StyleMark::Subscript)
        .with(StyleMark::Bold);
    assert_eq!(
        render(&[StaticNode::styled("x", a)]),
        render(&[StaticNode::styled("x", b)])
    );
    assert_snapshot!(markup(&render(&[StaticNode::styled("x", a)])), @"<sub><b>x</b></sub>");
}

#[test]
fn empty_styled_content_emits_nothing() {
    let node = StaticNode::Text(
        TextNode::styled("", StyleFlags::bold()).with_children(vec![StaticNode::text("child")]),
    );
    assert_eq!(render(&[node]), vec![RichNode::Text("child".into())]);
}

// =========================================================================
// Links
// =========================================================================

#[test]
fn link_renders_anchor_with_href_and_name() {
    let node = StaticNode::Link(
        LinkNode::new("/pricing", "See pricing")
            .with_styles(StyleFlags::italic())
            .with_name("pricing_cta"),
    );
    let out = render(&[node]);
    assert_eq!(
        out,
        vec![RichNode::Anchor(Anchor {
            href: "/pricing".into(),
            link_name: Some("pricing_cta".into()),
            behavior: LinkBehavior::Navigate,
            children: vec![RichNode::Mark {
                mark: StyleMark::Italic,
                children: vec![RichNode::Text("See pricing".into())],
            }],
        })]
    );
    assert_snapshot!(markup(&out), @r#"<a href="/pricing" name="pricing_cta"><i>See pricing</i></a>"#);
}

#[test]
fn intercepting_record_marks_matching_links_only() {
    let renderers = rich::intercepting(|href| href.starts_with("https://"));
    let out = renderers.static_nodes(&[
        StaticNode::link("https://example.com", "external"),
        StaticNode::link("/docs", "internal"),
    ]);
    let behaviors: Vec<LinkBehavior> = out
        .iter()
        .map(|node| match node {
            RichNode::Anchor(anchor) => anchor.behavior,
            other => panic!("expected anchor, got {other:?}"),
        })
        .collect();
    assert_eq!(behaviors, vec![LinkBehavior::Intercept, LinkBehavior::Navigate]);
}

#[test]
fn intercepting_record_applies_to_nested_links() {
    let renderers = rich::intercepting(|_| true);
    let nested = StaticNode::list_item(vec![StaticNode::link("https://x.dev", "x")]);
    assert_snapshot!(
        markup(&renderers.static_nodes(&[nested])),
        @r#"<li><a href="https://x.dev" data-intercept>x</a></li>"#
    );
}

#[test]
fn activating_links_calls_opener_only_when_intercepted() {
    let opened = RefCell::new(Vec::new());
    let opener = |href: &str| opened.borrow_mut().push(href.to_string());

    let intercepted = Anchor {
        href: "https://example.com".into(),
        link_name: None,
        behavior: LinkBehavior::Intercept,
        children: vec![],
    };
    let internal = Anchor {
        behavior: LinkBehavior::Navigate,
        href: "/home".into(),
        ..intercepted.clone()
    };

    assert_eq!(intercepted.activate(&opener), LinkActivation::Opened);
    assert_eq!(
        internal.activate(&opener),
        LinkActivation::Navigate("/home".into())
    );
    assert_eq!(*opened.borrow(), vec!["https://example.com".to_string()]);
}

// =========================================================================
// Lists
// =========================================================================

#[test]
fn ordered_list_labels_items_from_one() {
    let list = StaticNode::ordered(vec![
        ListItemNode::new(vec![StaticNode::text("a")]),
        ListItemNode::new(vec![StaticNode::text("b")]),
        ListItemNode::new(vec![StaticNode::text("c")]),
    ]);
    let out = render(&[list]);
    let [RichNode::List(RichList { kind, items })] = out.as_slice() else {
        panic!("expected one list, got {out:?}");
    };
    assert_eq!(*kind, ListKind::Ordered);
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(labels, vec!["1.", "2.", "3."]);
}

#[test]
fn unordered_list_items_wrap_list_item_output() {
    let list = StaticNode::unordered(vec![ListItemNode::new(vec![StaticNode::text("only")])]);
    assert_eq!(
        render(&[list]),
        vec![RichNode::List(RichList {
            kind: ListKind::Unordered,
            items: vec![RichListItem {
                label: "•".into(),
                children: vec![RichNode::ListItem(vec![RichNode::Text("only".into())])],
            }],
        })]
    );
}

#[test]
fn visible_text_spells_out_lists_and_breaks() {
    let nodes = vec![
        StaticNode::text("Steps:\n"),
        StaticNode::ordered(vec![
            ListItemNode::new(vec![StaticNode::text("Install")]),
            ListItemNode::new(vec![StaticNode::text("Run")]),
        ]),
    ];
    assert_eq!(visible_text(&render(&nodes)), "Steps:\n1. Install\n2. Run\n");
}
