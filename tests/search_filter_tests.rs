//! Search filtering tests
//!
//! Covers query propagation from the root widget down the view tree and the
//! bottom-up visibility aggregation: item match results, group OR-logic,
//! and clear-to-show-all behavior.

use quickpick::entry::parse_entries;
use quickpick::ui::view::EntryView;
use quickpick::ui::{SelectorWidget, Theme};

/// Helper to build a widget from an entry JSON literal
fn create_widget(json: &str) -> SelectorWidget {
    let entries = parse_entries(json).expect("valid entries");
    SelectorWidget::new("Select", &entries, Theme::default_theme().clone())
}

fn item_visible(view: &EntryView) -> bool {
    view.visible()
}

#[test]
fn test_flat_list_filtering() {
    // items = [Apple, Banana]; search("ap") -> Apple visible, Banana hidden
    let mut widget = create_widget(r#"[{"value": "Apple"}, {"value": "Banana"}]"#);

    widget.set_query("ap");

    assert!(widget.children()[0].visible(), "Apple should be visible");
    assert!(!widget.children()[1].visible(), "Banana should be hidden");
}

#[test]
fn test_search_is_case_insensitive() {
    let mut widget = create_widget(r#"[{"value": "Apple"}]"#);

    widget.set_query("APPLE");
    assert!(widget.children()[0].visible());

    widget.set_query("pPl");
    assert!(widget.children()[0].visible());
}

#[test]
fn test_display_value_is_searchable() {
    let mut widget =
        create_widget(r#"[{"value": "opt-1", "displayValue": "Enable logging"}]"#);

    widget.set_query("logging");
    assert!(widget.children()[0].visible());

    widget.set_query("opt-1");
    assert!(widget.children()[0].visible(), "value stays searchable too");

    widget.set_query("tracing");
    assert!(!widget.children()[0].visible());
}

#[test]
fn test_group_hidden_when_no_child_matches() {
    // groups = [{Pets: [Cat, Dog]}]; search("bird") -> everything hidden
    let mut widget =
        create_widget(r#"[{"group": "Pets", "items": [{"value": "Cat"}, {"value": "Dog"}]}]"#);

    widget.set_query("bird");

    let EntryView::Group(group) = &widget.children()[0] else {
        panic!("expected group");
    };
    assert!(!group.visible(), "group should be hidden");
    assert!(group.children().iter().all(|c| !c.visible()));
}

#[test]
fn test_group_shown_when_one_child_matches() {
    // search("dog") -> group visible, Dog visible, Cat hidden
    let mut widget =
        create_widget(r#"[{"group": "Pets", "items": [{"value": "Cat"}, {"value": "Dog"}]}]"#);

    widget.set_query("dog");

    let EntryView::Group(group) = &widget.children()[0] else {
        panic!("expected group");
    };
    assert!(group.visible());
    assert!(!group.children()[0].visible(), "Cat should be hidden");
    assert!(group.children()[1].visible(), "Dog should be visible");
}

#[test]
fn test_group_visibility_aggregates_across_nesting() {
    let mut widget = create_widget(
        r#"[{"group": "Outer", "items": [
              {"value": "shallow"},
              {"group": "Inner", "items": [{"value": "deep-needle"}]}
           ]}]"#,
    );

    // A deep match keeps every ancestor group visible.
    widget.set_query("deep");
    let EntryView::Group(outer) = &widget.children()[0] else {
        panic!("expected group");
    };
    assert!(outer.visible());
    assert!(!outer.children()[0].visible());
    let EntryView::Group(inner) = &outer.children()[1] else {
        panic!("expected nested group");
    };
    assert!(inner.visible());

    // No match at any depth hides the whole subtree.
    widget.set_query("zzz");
    let EntryView::Group(outer) = &widget.children()[0] else {
        panic!("expected group");
    };
    assert!(!outer.visible());
}

#[test]
fn test_mixed_top_level_items_and_groups() {
    let mut widget = create_widget(
        r#"[{"value": "standalone"},
            {"group": "Tools", "items": [{"value": "hammer"}]}]"#,
    );

    widget.set_query("hammer");
    assert!(!widget.children()[0].visible());
    assert!(widget.children()[1].visible());

    widget.set_query("standalone");
    assert!(widget.children()[0].visible());
    assert!(!widget.children()[1].visible());
}

#[test]
fn test_clear_restores_full_visibility() {
    let mut widget = create_widget(
        r#"[{"value": "Apple"},
            {"group": "Pets", "items": [{"value": "Cat"}, {"value": "Dog"}]}]"#,
    );

    widget.set_query("nothing-matches-this");
    assert!(widget.children().iter().all(|c| !c.visible()));

    widget.clear_search();

    assert!(widget.children().iter().all(item_visible));
    let EntryView::Group(group) = &widget.children()[1] else {
        panic!("expected group");
    };
    assert!(group.children().iter().all(item_visible));
}

#[test]
fn test_repeated_filtering_is_a_self_loop() {
    let mut widget = create_widget(r#"[{"value": "Apple"}, {"value": "Banana"}]"#);

    for query in ["a", "ap", "app", "b", "ban", ""] {
        widget.set_query(query);
        assert!(!widget.is_torn_down());
    }
    // Final empty query shows everything again.
    assert!(widget.children().iter().all(item_visible));
}

#[test]
fn test_typed_query_editing_filters_live() {
    let mut widget = create_widget(r#"[{"value": "Apple"}, {"value": "Banana"}]"#);
    widget.after_draw(); // deferred focus lands

    widget.push_query_char('b');
    widget.push_query_char('a');
    widget.push_query_char('n');
    assert_eq!(widget.query(), "ban");
    assert!(!widget.children()[0].visible());
    assert!(widget.children()[1].visible());

    widget.pop_query_char();
    widget.pop_query_char();
    assert_eq!(widget.query(), "b");
    assert!(!widget.children()[0].visible());
    assert!(widget.children()[1].visible());
}
