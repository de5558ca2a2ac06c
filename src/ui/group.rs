//! # Group View
//!
//! A labeled subtree of entries. A group never matches a query itself: its
//! visibility is the OR of its children's match results, so a group with no
//! matching descendant disappears along with its label row. On the
//! selection channel it is a pure relay - a child's bubbled event passes
//! through unchanged.

use crate::entry::Group;
use crate::ui::theme::Theme;
use crate::ui::view::{build_views, row_rect, EntryView, ViewEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns of indentation applied to a group's children.
const CHILD_INDENT: u16 = 2;

#[derive(Debug)]
pub struct GroupView {
    label: String,
    children: Vec<EntryView>,
    visible: bool,
    area: Option<Rect>,
}

impl GroupView {
    /// Build one child view per entry, in order, recursing through nested
    /// groups.
    pub fn new(data: &Group) -> Self {
        Self {
            label: data.label.clone(),
            children: build_views(&data.items),
            visible: true,
            area: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[EntryView] {
        &self.children
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Forward the query to every child; own visibility is the OR of their
    /// results. Every child is searched even after a match, so the whole
    /// subtree's visibility settles in this one pass.
    pub fn search(&mut self, query: &str) -> bool {
        let mut matched = false;
        for child in &mut self.children {
            matched |= child.search(query);
        }

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

    /// Hides the group container. Children keep their individual
    /// visibility flags; they are simply not reachable on screen.
    pub fn hide(&mut self) {
        self.visible = false;
        self.area = None;
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

        if let Some(row) = row_rect(list_area, *cursor, indent) {
            let label = Paragraph::new(Line::from(Span::styled(
                self.label.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(label, row);
            self.area = Some(row);
        } else {
            self.area = None;
        }
        *cursor += 1;

        for child in &mut self.children {
            child.render(frame, list_area, cursor, indent + CHILD_INDENT, theme);
        }
    }

    /// Pure relay: the first child that claims the click wins; the group's
    /// own label row claims nothing.
    pub fn click(&self, pos: Position) -> Option<ViewEvent> {
        if !self.visible {
            return None;
        }
        self.children.iter().find_map(|child| child.click(pos))
    }

    /// Tear down all children depth-first, then self.
    pub fn remove(&mut self) {
        for child in &mut self.children {
            child.remove();
        }
        self.children.clear();
        self.area = None;
    }
}
