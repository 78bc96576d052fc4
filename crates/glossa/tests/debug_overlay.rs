//! Debug overlay behavior and end-to-end resolution through the store.

use glossa::render::rich::{self, markup, render, render_resolved, visible_text};
use glossa::render::{DebugOverlay, HIGHLIGHT_INSET_PX, OverlayEvent, OverlayState, plain};
use glossa::{
    DebugFlag, DebugInfo, LocaleInfo, LocaleStore, PhraseEntry, PhraseTable, RenderContext,
    RichNode, StaticNode, StyleFlags, TextNode, vars,
};

fn greeting_store() -> LocaleStore {
    let mut table = PhraseTable::new(vec![
        LocaleInfo::new("EN", "English").global_default(),
        LocaleInfo::new("FR", "Français").falls_back_to("EN"),
    ])
    .unwrap();
    table.insert(
        "greeting",
        "EN",
        PhraseEntry::from_fn(|vars| {
            let name = vars.get("name").map(ToString::to_string).unwrap_or_default();
            vec![StaticNode::Text(
                TextNode::styled("Hello, ", StyleFlags::bold()).with_children(vec![StaticNode::text(name)]),
            )]
        }),
    );
    table.insert_debug_info("greeting", DebugInfo::new("onboarding", "greeting"));
    LocaleStore::builder().table(table).build()
}

fn overlay(nodes: &[RichNode]) -> &DebugOverlay {
    match nodes {
        [RichNode::DebugOverlay(overlay)] => overlay,
        other => panic!("expected a single overlay, got {other:?}"),
    }
}

// =========================================================================
// Wrapping
// =========================================================================

#[test]
fn flag_off_renders_exactly_the_static_nodes() {
    let nodes = [StaticNode::text("plain")];
    let renderers = rich::renderers();
    let context = RenderContext::default();
    let info = DebugInfo::new("g", "k");

    assert_eq!(
        render(&nodes, &renderers, &context, &info),
        renderers.static_nodes(&nodes)
    );
}

#[test]
fn flag_on_adds_one_wrapper_around_unchanged_output() {
    let nodes = [StaticNode::text("a"), StaticNode::link("/b", "b")];
    let renderers = rich::renderers();
    let context = RenderContext::builder().debug(DebugFlag::new(true)).build();
    let info = DebugInfo::new("nav", "links");

    let out = render(&nodes, &renderers, &context, &info);
    let wrapper = overlay(&out);

    assert_eq!(wrapper.info, info);
    assert_eq!(wrapper.children, renderers.static_nodes(&nodes));
    assert!(!wrapper.children.iter().any(|n| matches!(n, RichNode::DebugOverlay(_))));
    assert_eq!(wrapper.highlight_inset_px(), HIGHLIGHT_INSET_PX);
}

#[test]
fn phrase_without_debug_info_still_gets_one_overlay() {
    let mut table = PhraseTable::new(vec![LocaleInfo::new("EN", "English").global_default()]).unwrap();
    table.insert("farewell", "EN", PhraseEntry::from_fn(|_| vec![StaticNode::text("Bye")]));
    let store = LocaleStore::builder().table(table).build();
    let context = RenderContext::builder().debug(DebugFlag::new(true)).build();

    let resolved = store.resolve("farewell", &vars! {}).unwrap();
    let out = render_resolved(&resolved, &rich::renderers(), &context);
    let wrapper = overlay(&out);

    assert_eq!(wrapper.info.phrase_key, "farewell");
    assert_eq!(wrapper.info.group_name, "");
    assert_eq!(wrapper.children, vec![RichNode::Text("Bye".into())]);
}

#[test]
fn toggling_the_shared_flag_affects_the_next_render() {
    let flag = DebugFlag::default();
    let context = RenderContext::builder().debug(flag.clone()).build();
    let nodes = [StaticNode::text("x")];
    let info = DebugInfo::new("g", "k");
    let renderers = rich::renderers();

    assert!(!matches!(
        render(&nodes, &renderers, &context, &info)[0],
        RichNode::DebugOverlay(_)
    ));

    assert!(flag.toggle());
    assert!(context.debug.is_enabled());
    assert!(matches!(
        render(&nodes, &renderers, &context, &info)[0],
        RichNode::DebugOverlay(_)
    ));

    assert!(!flag.toggle());
    flag.enable();
    assert!(flag.is_enabled());
    flag.disable();
    assert!(!context.debug.is_enabled());
}

// =========================================================================
// Interaction
// =========================================================================

#[test]
fn panel_opens_on_hover_click_or_touch() {
    for open in [OverlayEvent::PointerEnter, OverlayEvent::Click, OverlayEvent::TouchStart] {
        let mut overlay = DebugOverlay::new(DebugInfo::new("g", "k"), Vec::new());
        assert_eq!(overlay.state, OverlayState::Hidden);
        assert_eq!(overlay.panel(), None);

        assert_eq!(overlay.handle(open), OverlayState::Shown);
        assert_eq!(overlay.panel(), Some(&DebugInfo::new("g", "k")));
    }
}

#[test]
fn panel_closes_on_leave_or_close_control() {
    for close in [OverlayEvent::PointerLeave, OverlayEvent::Close] {
        let mut overlay = DebugOverlay::new(DebugInfo::new("g", "k"), Vec::new());
        overlay.handle(OverlayEvent::Click);
        assert_eq!(overlay.handle(close), OverlayState::Hidden);
        assert_eq!(overlay.panel(), None);
    }
}

#[test]
fn closing_the_panel_leaves_debug_mode_on() {
    let flag = DebugFlag::new(true);
    let context = RenderContext::builder().debug(flag.clone()).build();
    let info = DebugInfo::new("g", "k");
    let mut out = render(&[StaticNode::text("x")], &rich::renderers(), &context, &info);

    let RichNode::DebugOverlay(overlay) = &mut out[0] else {
        panic!("expected overlay");
    };
    overlay.handle(OverlayEvent::Click);
    overlay.handle(OverlayEvent::Close);

    assert!(flag.is_enabled());
}

#[test]
fn every_render_starts_hidden() {
    let context = RenderContext::builder().debug(DebugFlag::new(true)).build();
    let info = DebugInfo::new("g", "k");
    let nodes = [StaticNode::text("x")];

    let mut first = render(&nodes, &rich::renderers(), &context, &info);
    if let RichNode::DebugOverlay(overlay) = &mut first[0] {
        overlay.handle(OverlayEvent::PointerEnter);
    }
    let second = render(&nodes, &rich::renderers(), &context, &info);

    assert_eq!(overlay(&second).state, OverlayState::Hidden);
}

// =========================================================================
// End to end
// =========================================================================

#[test]
fn greeting_renders_in_both_renderers() {
    let store = greeting_store();
    let resolved = store.resolve("greeting", &vars! { "name" => "Ada" }).unwrap();

    assert_eq!(plain::render_resolved(&resolved, &plain::renderers()), "Hello, Ada");

    let rich_out = render_resolved(&resolved, &rich::renderers(), &RenderContext::default());
    insta::assert_snapshot!(markup(&rich_out), @"<b>Hello, </b>Ada");
}

#[test]
fn greeting_in_fallback_locale_uses_default_entry() {
    let store = greeting_store();
    store.select_locale("FR");

    let resolved = store.resolve("greeting", &vars! { "name" => "Ada" }).unwrap();

    assert_eq!(resolved.locale_code, "EN");
    assert_eq!(plain::render_resolved(&resolved, &plain::renderers()), "Hello, Ada");
}

#[test]
fn greeting_in_debug_mode_shows_provenance() {
    let store = greeting_store();
    let resolved = store.resolve("greeting", &vars! { "name" => "Ada" }).unwrap();
    let context = RenderContext::builder().debug(DebugFlag::new(true)).build();

    let out = render_resolved(&resolved, &rich::renderers(), &context);

    insta::assert_snapshot!(
        markup(&out),
        @r#"<debug group="onboarding" key="greeting"><b>Hello, </b>Ada</debug>"#
    );
    assert_eq!(visible_text(&out), "Hello, Ada");
}
