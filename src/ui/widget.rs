//! # Selector Widget
//!
//! The root of the view tree. Owns the search box and clear control, builds
//! the child views eagerly at construction, routes queries top-down, relays
//! the first bubbled selection as its single public [`WidgetEvent::Selection`],
//! and owns the lifecycle of the whole tree: outside click, item click, or a
//! programmatic [`SelectorWidget::remove`] all end in a full depth-first
//! teardown, after which the widget is inert.

use crate::entry::{Entry, Item};
use crate::ui::defer::{DeferredAction, DeferredActions};
use crate::ui::dismiss::DismissWatcher;
use crate::ui::theme::Theme;
use crate::ui::view::{build_views, EntryView, ViewEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Popup size as a percentage of the host screen.
const POPUP_WIDTH_PCT: u16 = 60;
const POPUP_HEIGHT_PCT: u16 = 70;

/// Width of the `[x]` clear control at the right edge of the search row.
const CLEAR_CONTROL_WIDTH: u16 = 3;

/// Lifecycle of a widget instance. `Selected` and `Dismissed` are terminal
/// and imply the tree has been torn down; filtering is a self-loop on
/// `Rendered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Constructed,
    Rendered,
    Selected,
    Dismissed,
}

/// Externally observable widget output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The chosen item's full data. Emitted at most once per instance; the
    /// widget is torn down immediately after.
    Selection(Item),
    /// Help text surfaced by a help affordance click. The widget stays
    /// open; how the text is shown is the host's concern.
    Help(String),
    /// The widget was dismissed without a selection.
    Dismissed,
}

pub struct SelectorWidget {
    title: String,
    children: Vec<EntryView>,
    query: String,
    search_focused: bool,
    footer: Option<String>,
    state: WidgetState,
    dismiss: DismissWatcher,
    deferred: DeferredActions,
    theme: Theme,
    area: Option<Rect>,
    search_area: Option<Rect>,
    clear_area: Option<Rect>,
}

impl SelectorWidget {
    /// Build the whole view tree eagerly from the entry list. The dismissal
    /// watcher is registered immediately but unarmed; arming it and
    /// focusing the search input are scheduled for the end of the first
    /// tick.
    pub fn new(title: impl Into<String>, entries: &[Entry], theme: Theme) -> Self {
        let mut deferred = DeferredActions::new();
        deferred.schedule(DeferredAction::FocusSearch);
        deferred.schedule(DeferredAction::ArmDismiss);

        Self {
            title: title.into(),
            children: build_views(entries),
            query: String::new(),
            search_focused: false,
            footer: None,
            state: WidgetState::Constructed,
            dismiss: DismissWatcher::register(),
            deferred,
            theme,
            area: None,
            search_area: None,
            clear_area: None,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Whether a terminal state has been reached and the tree released.
    pub fn is_torn_down(&self) -> bool {
        matches!(self.state, WidgetState::Selected | WidgetState::Dismissed)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn children(&self) -> &[EntryView] {
        &self.children
    }

    pub fn dismiss_armed(&self) -> bool {
        self.dismiss.armed()
    }

    /// Popup rect recorded by the last draw.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// Set or clear the footer line (the host's help flash).
    pub fn set_footer(&mut self, footer: Option<String>) {
        self.footer = footer;
    }

    /// Run the pending end-of-tick actions. The host loop calls this once
    /// after each completed draw.
    pub fn after_draw(&mut self) {
        if self.is_torn_down() {
            return;
        }
        for action in self.deferred.drain() {
            match action {
                DeferredAction::FocusSearch => self.search_focused = true,
                DeferredAction::ArmDismiss => self.dismiss.arm(),
            }
        }
    }

    // -- Search routing ----------------------------------------------------

    /// Replace the query and fan it out to every direct child. Propagation
    /// is synchronous: when this returns, the whole subtree's visibility
    /// has settled. The root itself never hides.
    pub fn set_query(&mut self, query: &str) {
        if self.is_torn_down() {
            return;
        }
        self.query = query.to_string();
        self.run_search();
    }

    /// Append a typed character. Inert until the deferred focus has landed.
    pub fn push_query_char(&mut self, c: char) {
        if self.is_torn_down() || !self.search_focused {
            return;
        }
        self.query.push(c);
        self.run_search();
    }

    pub fn pop_query_char(&mut self) {
        if self.is_torn_down() || !self.search_focused {
            return;
        }
        self.query.pop();
        self.run_search();
    }

    /// The clear control: reset the query, re-filter to show-all, refocus.
    pub fn clear_search(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.query.clear();
        self.run_search();
        self.search_focused = true;
    }

    fn run_search(&mut self) {
        for child in &mut self.children {
            child.search(&self.query);
        }
    }

    // -- Rendering ---------------------------------------------------------

    /// Draw the popup and re-record every hit rect. Draws nothing once torn
    /// down.
    pub fn render(&mut self, frame: &mut Frame) {
        if self.is_torn_down() {
            return;
        }

        let popup = centered_rect(POPUP_WIDTH_PCT, POPUP_HEIGHT_PCT, frame.area());
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.bg));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Search row
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Entry list
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        self.render_search_row(frame, chunks[0]);
        self.render_separator(frame, chunks[1]);

        let list_area = chunks[2];
        let mut cursor = 0u16;
        for child in &mut self.children {
            child.render(frame, list_area, &mut cursor, 0, &self.theme);
        }

        self.render_footer(frame, chunks[3]);

        self.area = Some(popup);
        if self.state == WidgetState::Constructed {
            self.state = WidgetState::Rendered;
        }
    }

    fn render_search_row(&mut self, frame: &mut Frame, area: Rect) {
        let cursor_mark = if self.search_focused { "█" } else { "" };
        let prompt = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.accent)),
            Span::styled(
                self.query.clone(),
                Style::default().fg(self.theme.secondary),
            ),
            Span::styled(
                cursor_mark,
                Style::default().fg(self.theme.secondary),
            ),
        ]);
        frame.render_widget(Paragraph::new(prompt), area);
        self.search_area = Some(area);

        if area.width > CLEAR_CONTROL_WIDTH {
            let clear = Rect::new(
                area.right() - CLEAR_CONTROL_WIDTH,
                area.y,
                CLEAR_CONTROL_WIDTH,
                1,
            );
            let control = Paragraph::new(Span::styled(
                "[x]",
                Style::default()
                    .fg(self.theme.fg_dim)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(control, clear);
            self.clear_area = Some(clear);
        } else {
            self.clear_area = None;
        }
    }

    fn render_separator(&self, frame: &mut Frame, area: Rect) {
        let line = "─".repeat(area.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(line, Style::default().fg(self.theme.fg_dim))),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let text = self
            .footer
            .as_deref()
            .unwrap_or("click to select · [?] help · Esc/outside click to close");
        frame.render_widget(
            Paragraph::new(Span::styled(
                text.to_string(),
                Style::default().fg(self.theme.fg_dim),
            )),
            area,
        );
    }

    // -- Click routing -----------------------------------------------------

    /// Route a mouse-down. Clicks inside the popup never dismiss it; a
    /// click outside dismisses only once the watcher has been armed.
    pub fn handle_click(&mut self, pos: Position) -> Option<WidgetEvent> {
        if self.is_torn_down() {
            return None;
        }
        let popup = self.area?;

        if !popup.contains(pos) {
            if self.dismiss.armed() {
                self.teardown(WidgetState::Dismissed);
                return Some(WidgetEvent::Dismissed);
            }
            // Still inside the deferral window: the click that opened the
            // widget must not close it.
            return None;
        }

        if self.clear_area.is_some_and(|r| r.contains(pos)) {
            self.clear_search();
            return None;
        }
        if self.search_area.is_some_and(|r| r.contains(pos)) {
            self.search_focused = true;
            return None;
        }

        let bubbled = self.children.iter().find_map(|child| child.click(pos));
        match bubbled {
            Some(ViewEvent::Selected(item)) => {
                // Exactly one selection per lifetime: teardown makes every
                // later click a no-op.
                self.teardown(WidgetState::Selected);
                Some(WidgetEvent::Selection(item))
            }
            Some(ViewEvent::Help(text)) => Some(WidgetEvent::Help(text)),
            None => None,
        }
    }

    // -- Teardown ----------------------------------------------------------

    /// Programmatic removal (for example Esc in the shipped binary).
    /// Idempotent: a second call is a no-op.
    pub fn remove(&mut self) -> Option<WidgetEvent> {
        if self.is_torn_down() {
            return None;
        }
        self.teardown(WidgetState::Dismissed);
        Some(WidgetEvent::Dismissed)
    }

    /// Depth-first release: children first, then the watcher registration
    /// (exactly once), then our own screen state.
    fn teardown(&mut self, terminal: WidgetState) {
        if self.is_torn_down() {
            return;
        }
        for child in &mut self.children {
            child.remove();
        }
        self.children.clear();
        self.dismiss.release();
        self.deferred.drain();
        self.area = None;
        self.search_area = None;
        self.clear_area = None;
        self.search_focused = false;
        self.footer = None;
        self.state = terminal;
    }
}

/// Center a `percent_x` by `percent_y` rect inside `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
