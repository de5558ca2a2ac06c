//! Widget lifecycle tests
//!
//! Tests for the per-instance state machine
//! (Constructed -> Rendered -> Filtering* -> Selected | Dismissed),
//! the deferred focus/arming actions, and teardown idempotency.

use quickpick::entry::parse_entries;
use quickpick::ui::{SelectorWidget, Theme, WidgetEvent, WidgetState};
use ratatui::{backend::TestBackend, Terminal};

fn create_widget(json: &str) -> SelectorWidget {
    let entries = parse_entries(json).expect("valid entries");
    SelectorWidget::new("Select", &entries, Theme::default_theme().clone())
}

fn create_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 30)).expect("test terminal")
}

#[test]
fn test_construction_builds_tree_eagerly() {
    let widget = create_widget(
        r#"[{"value": "a"}, {"group": "G", "items": [{"value": "b"}, {"value": "c"}]}]"#,
    );

    assert_eq!(widget.state(), WidgetState::Constructed);
    assert_eq!(widget.children().len(), 2);
}

#[test]
fn test_first_draw_transitions_to_rendered() {
    let mut terminal = create_terminal();
    let mut widget = create_widget(r#"[{"value": "a"}]"#);

    terminal.draw(|f| widget.render(f)).expect("draw");
    assert_eq!(widget.state(), WidgetState::Rendered);
    assert!(widget.area().is_some());
}

#[test]
fn test_deferred_actions_run_after_draw_not_before() {
    let mut terminal = create_terminal();
    let mut widget = create_widget(r#"[{"value": "a"}]"#);

    terminal.draw(|f| widget.render(f)).expect("draw");
    assert!(!widget.search_focused(), "focus waits for end of tick");
    assert!(!widget.dismiss_armed(), "arming waits for end of tick");

    widget.after_draw();
    assert!(widget.search_focused());
    assert!(widget.dismiss_armed());
}

#[test]
fn test_filtering_keeps_widget_in_rendered_state() {
    let mut terminal = create_terminal();
    let mut widget = create_widget(r#"[{"value": "a"}, {"value": "b"}]"#);
    terminal.draw(|f| widget.render(f)).expect("draw");
    widget.after_draw();

    widget.set_query("a");
    widget.set_query("b");
    widget.clear_search();
    assert_eq!(widget.state(), WidgetState::Rendered);
}

#[test]
fn test_programmatic_remove_reaches_dismissed() {
    let mut widget = create_widget(r#"[{"value": "a"}]"#);

    assert_eq!(widget.remove(), Some(WidgetEvent::Dismissed));
    assert_eq!(widget.state(), WidgetState::Dismissed);
    assert!(widget.children().is_empty());
}

#[test]
fn test_remove_is_idempotent() {
    let mut widget = create_widget(r#"[{"value": "a"}]"#);

    assert!(widget.remove().is_some());
    assert!(widget.remove().is_none(), "second remove is a no-op");
    assert_eq!(widget.state(), WidgetState::Dismissed);
}

#[test]
fn test_torn_down_widget_renders_nothing() {
    let mut terminal = create_terminal();
    let mut widget = create_widget(r#"[{"value": "NEEDLE"}]"#);

    terminal.draw(|f| widget.render(f)).expect("draw");
    widget.remove();
    terminal.draw(|f| widget.render(f)).expect("draw");

    let buffer = terminal.backend().buffer();
    let all_text: String = (0..buffer.area.height)
        .flat_map(|y| {
            (0..buffer.area.width).map(move |x| {
                buffer
                    .cell(ratatui::layout::Position::new(x, y))
                    .map_or(" ", |cell| cell.symbol())
            })
        })
        .collect();
    assert!(
        !all_text.contains("NEEDLE"),
        "a torn-down widget must not draw its items"
    );
    assert!(widget.area().is_none());
}

#[test]
fn test_teardown_releases_all_listeners() {
    let mut terminal = create_terminal();
    let mut widget = create_widget(r#"[{"value": "a"}]"#);
    terminal.draw(|f| widget.render(f)).expect("draw");
    widget.after_draw();

    widget.remove();

    // No outside-click, search, or selection effect is observable anymore.
    assert!(!widget.dismiss_armed());
    widget.set_query("a");
    assert_eq!(widget.query(), "");
    widget.after_draw();
    assert!(!widget.search_focused());
}

#[test]
fn test_new_widget_needed_after_teardown() {
    // No reuse after teardown: a fresh instance starts the lifecycle over.
    let mut widget = create_widget(r#"[{"value": "a"}]"#);
    widget.remove();

    let fresh = create_widget(r#"[{"value": "a"}]"#);
    assert_eq!(fresh.state(), WidgetState::Constructed);
    assert_eq!(fresh.children().len(), 1);
}
