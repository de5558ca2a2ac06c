//! # Item View
//!
//! The leaf of the view tree: the unit of search matching and selection.
//! Renders one list row (label plus, when help text exists, a trailing
//! `[?]` affordance) and records its on-screen rects for click routing.

use crate::entry::Item;
use crate::ui::theme::Theme;
use crate::ui::view::{row_rect, ViewEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the trailing `[?]` help affordance.
const HELP_BADGE_WIDTH: u16 = 3;

#[derive(Debug)]
pub struct ItemView {
    data: Item,
    visible: bool,
    area: Option<Rect>,
    help_area: Option<Rect>,
}

impl ItemView {
    pub fn new(data: Item) -> Self {
        Self {
            data,
            visible: true,
            area: None,
            help_area: None,
        }
    }

    pub fn data(&self) -> &Item {
        &self.data
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Case-insensitive substring match against `display_value` (when
    /// present) or `value`. Shows or hides the row accordingly and returns
    /// the match result.
    pub fn search(&mut self, query: &str) -> bool {
        let query = query.to_lowercase();

        let mut matched = false;
        if let Some(display) = &self.data.display_value {
            matched = display.to_lowercase().contains(&query);
        }
        matched = matched || self.data.value.to_lowercase().contains(&query);

        if matched {
            self.show();
        } else {
            self.hide();
        }
        matched
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hiding also drops the recorded rects so a stale row cannot catch
    /// clicks between the filter pass and the next draw.
    pub fn hide(&mut self) {
        self.visible = false;
        self.area = None;
        self.help_area = None;
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        list_area: Rect,
        cursor: &mut u16,
        indent: u16,
        theme: &Theme,
    ) {
        if !self.visible {
            return;
        }

        let Some(row) = row_rect(list_area, *cursor, indent) else {
            // Past the bottom of the list area: the row exists logically
            // but is not on screen, so it must not be clickable.
            self.area = None;
            self.help_area = None;
            *cursor += 1;
            return;
        };
        *cursor += 1;

        let label = Paragraph::new(Line::from(Span::styled(
            self.data.label().to_string(),
            Style::default().fg(theme.fg),
        )));
        frame.render_widget(label, row);
        self.area = Some(row);

        if self.data.help.is_some() && row.width > HELP_BADGE_WIDTH {
            let badge = Rect::new(
                row.right() - HELP_BADGE_WIDTH,
                row.y,
                HELP_BADGE_WIDTH,
                1,
            );
            let affordance = Paragraph::new(Span::styled(
                "[?]",
                Style::default()
                    .fg(theme.fg_dim)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(affordance, badge);
            self.help_area = Some(badge);
        } else {
            self.help_area = None;
        }
    }

    /// Route a click. The help affordance swallows its click: it reports
    /// the help text and never selects the item.
    pub fn click(&self, pos: Position) -> Option<ViewEvent> {
        if let (Some(badge), Some(help)) = (self.help_area, &self.data.help) {
            if badge.contains(pos) {
                return Some(ViewEvent::Help(help.value.clone()));
            }
        }
        if self.area.is_some_and(|area| area.contains(pos)) {
            return Some(ViewEvent::Selected(self.data.clone()));
        }
        None
    }

    /// Leaf teardown: nothing cascades, just detach from the screen.
    pub fn remove(&mut self) {
        self.area = None;
        self.help_area = None;
    }
}
