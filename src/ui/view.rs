//! # View Tree
//!
//! One view node per entry, built eagerly in a single pass and never
//! restructured afterward. [`EntryView`] is the tagged item-vs-group
//! dispatch decided at construction; [`ViewEvent`] is the typed channel a
//! child bubbles click outcomes on - parents own their children and relay
//! events unchanged toward the root.

use crate::entry::{Entry, Item};
use crate::ui::group::GroupView;
use crate::ui::item::ItemView;
use crate::ui::theme::Theme;
use ratatui::layout::{Position, Rect};
use ratatui::Frame;

/// A click outcome bubbling up the view tree, payload untouched by relays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A leaf item was clicked; carries the item's full data.
    Selected(Item),
    /// A help affordance was clicked; carries the help text. Never selects.
    Help(String),
}

/// A node of the view tree: a leaf item view or a group view.
#[derive(Debug)]
pub enum EntryView {
    Item(ItemView),
    Group(GroupView),
}

impl EntryView {
    /// Forward the query; returns whether this subtree matched.
    pub fn search(&mut self, query: &str) -> bool {
        match self {
            EntryView::Item(view) => view.search(query),
            EntryView::Group(view) => view.search(query),
        }
    }

    pub fn visible(&self) -> bool {
        match self {
            EntryView::Item(view) => view.visible(),
            EntryView::Group(view) => view.visible(),
        }
    }

    /// Draw this subtree into `list_area` starting at row `cursor`
    /// (relative to the area top), advancing the cursor past every row it
    /// consumes. Hidden subtrees draw nothing and consume nothing.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        list_area: Rect,
        cursor: &mut u16,
        indent: u16,
        theme: &Theme,
    ) {
        match self {
            EntryView::Item(view) => view.render(frame, list_area, cursor, indent, theme),
            EntryView::Group(view) => view.render(frame, list_area, cursor, indent, theme),
        }
    }

    /// Route a click into this subtree; `None` when nothing here was hit.
    pub fn click(&self, pos: Position) -> Option<ViewEvent> {
        match self {
            EntryView::Item(view) => view.click(pos),
            EntryView::Group(view) => view.click(pos),
        }
    }

    /// Tear down this subtree, children before self.
    pub fn remove(&mut self) {
        match self {
            EntryView::Item(view) => view.remove(),
            EntryView::Group(view) => view.remove(),
        }
    }
}

/// Build the view tree for an entry list, preserving order.
pub fn build_views(entries: &[Entry]) -> Vec<EntryView> {
    entries
        .iter()
        .map(|entry| match entry {
            Entry::Item(item) => EntryView::Item(ItemView::new(item.clone())),
            Entry::Group(group) => EntryView::Group(GroupView::new(group)),
        })
        .collect()
}

/// Slice out the 1-row rect for the current cursor position, or `None` when
/// the cursor has run past the bottom of the list area.
pub(crate) fn row_rect(list_area: Rect, cursor: u16, indent: u16) -> Option<Rect> {
    if cursor >= list_area.height {
        return None;
    }
    Some(Rect::new(
        list_area.x.saturating_add(indent),
        list_area.y + cursor,
        list_area.width.saturating_sub(indent),
        1,
    ))
}
