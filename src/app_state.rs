//! The state machine behind the terminal viewer.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! navigates and filters. The loaded sections never change; only the active tags, the
//! search term and the cursor positions do, and every visible row is recomputed from
//! those through the queries in [`crate::view`].

use crate::input::Load;
use crate::section::{GrammarPoint, Section};
use crate::view::{self, TagSelection};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of loading the artifact, each rendered as its own screen.
pub enum Status {
    /// Sections are available for browsing.
    Ready,
    /// The artifact was read but holds no sections.
    Empty,
    /// The artifact could not be read or decoded.
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Determines which region has focus and how input is interpreted.
pub enum View {
    /// Moving through the point list.
    Browse,
    /// Typing a search term.
    Search,
    /// Moving along the tag bar and toggling filters.
    Tags,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One line of the main list.
pub enum Row {
    /// Coarse category heading.
    Category(String),
    /// Section heading, by index into the loaded sections.
    Section(usize),
    /// Grammar point, by section and point index.
    Point {
        /// Owning section index.
        section: usize,
        /// Point index within the section.
        point: usize,
    },
}

/// Loaded sections plus everything the user can change while browsing.
pub struct AppState {
    /// Sections in document order; never mutated after load.
    pub sections: Vec<Section>,
    /// Load outcome deciding which screen is drawn.
    pub status: Status,
    /// Coarse categories in display order.
    pub categories: Vec<&'static str>,
    /// Tags offered by the filter bar.
    pub tags: Vec<String>,
    /// Active tag filters.
    pub selection: TagSelection,
    /// Current search term.
    pub search: String,
    /// Region with focus.
    pub current_view: View,
    /// Index into the visible points.
    pub current_point: usize,
    /// Cursor position on the tag bar.
    pub tag_cursor: usize,
    /// Maximum width of wrapped description text.
    pub wrap_width: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Initialises the viewer from a load outcome.
    pub fn new(load: Load, categories: &[&'static str], wrap_width: usize) -> Self {
        let (sections, status) = match load {
            Load::Ready(sections) => (sections, Status::Ready),
            Load::Empty => (Vec::new(), Status::Empty),
            Load::Failed(message) => (Vec::new(), Status::Failed(message)),
        };
        let tags = view::tag_bar(&sections, categories);

        Self {
            sections,
            status,
            categories: categories.to_vec(),
            tags,
            selection: TagSelection::default(),
            search: String::new(),
            current_view: View::Browse,
            current_point: 0,
            tag_cursor: 0,
            wrap_width,
            message: None,
        }
    }

    fn point_visible(&self, point: &GrammarPoint) -> bool {
        view::matches_tags(point, self.selection.active())
            && view::matches_search(point, &self.search)
    }

    fn index_of(&self, section: &Section) -> usize {
        self.sections
            .iter()
            .position(|s| std::ptr::eq(s, section))
            .unwrap_or_default()
    }

    #[must_use]
    /// Lines of the main list under the current filters.
    ///
    /// Without active tags points are shown under their category and section headings.
    /// With active tags only the matching points are listed, flat.
    pub fn rows(&self) -> Vec<Row> {
        if !self.selection.is_empty() {
            return self
                .visible_points()
                .into_iter()
                .map(|(section, point)| Row::Point { section, point })
                .collect();
        }

        let mut rows = Vec::new();
        for group in view::group_by_category(&self.sections, &self.categories) {
            let mut group_rows = Vec::new();
            for section in group.sections {
                let index = self.index_of(section);
                let points: Vec<Row> = section
                    .points
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| self.point_visible(p))
                    .map(|(point, _)| Row::Point {
                        section: index,
                        point,
                    })
                    .collect();
                if points.is_empty() {
                    continue;
                }
                if section.title != group.category {
                    group_rows.push(Row::Section(index));
                }
                group_rows.extend(points);
            }
            if !group_rows.is_empty() {
                rows.push(Row::Category(group.category.to_string()));
                rows.extend(group_rows);
            }
        }
        rows
    }

    #[must_use]
    /// Section and point indices of every point on screen, in list order.
    pub fn visible_points(&self) -> Vec<(usize, usize)> {
        if self.selection.is_empty() {
            return self
                .rows()
                .into_iter()
                .filter_map(|row| match row {
                    Row::Point { section, point } => Some((section, point)),
                    _ => None,
                })
                .collect();
        }

        let mut visible = Vec::new();
        for (s, section) in self.sections.iter().enumerate() {
            for (p, point) in section.points.iter().enumerate() {
                if self.point_visible(point) {
                    visible.push((s, p));
                }
            }
        }
        visible
    }

    #[must_use]
    /// Point under the cursor, with its section.
    pub fn selected_point(&self) -> Option<(&Section, &GrammarPoint)> {
        let (s, p) = *self.visible_points().get(self.current_point)?;
        let section = self.sections.get(s)?;
        Some((section, section.points.get(p)?))
    }

    #[must_use]
    /// Sections listed in the sidebar, grouped by category and narrowed by the search.
    pub fn sidebar(&self) -> Vec<(&str, Vec<&Section>)> {
        view::group_by_category(&self.sections, &self.categories)
            .into_iter()
            .map(|group| {
                let sections = group
                    .sections
                    .into_iter()
                    .filter(|s| view::section_matches_search(s, &self.search))
                    .collect::<Vec<_>>();
                (group.category, sections)
            })
            .filter(|(_, sections)| !sections.is_empty())
            .collect()
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_points().len();
        if self.current_point >= count {
            self.current_point = count.saturating_sub(1);
        }
    }

    /// Moves the cursor to the following point.
    pub fn select_next(&mut self) {
        if self.current_point + 1 < self.visible_points().len() {
            self.current_point += 1;
        }
    }

    /// Moves the cursor to the preceding point.
    pub fn select_prev(&mut self) {
        self.current_point = self.current_point.saturating_sub(1);
    }

    /// Jumps to the first visible point.
    pub fn select_first(&mut self) {
        self.current_point = 0;
    }

    /// Jumps to the last visible point.
    pub fn select_last(&mut self) {
        self.current_point = self.visible_points().len().saturating_sub(1);
    }

    /// Moves the tag bar cursor right.
    pub fn next_tag(&mut self) {
        if self.tag_cursor + 1 < self.tags.len() {
            self.tag_cursor += 1;
        }
    }

    /// Moves the tag bar cursor left.
    pub fn prev_tag(&mut self) {
        self.tag_cursor = self.tag_cursor.saturating_sub(1);
    }

    /// Switches the tag under the tag bar cursor on or off.
    pub fn toggle_current_tag(&mut self) {
        if let Some(tag) = self.tags.get(self.tag_cursor).cloned() {
            self.toggle_tag(&tag);
        }
    }

    /// Switches `tag` on or off and keeps the cursor within the visible points.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.selection.toggle(tag);
        self.current_point = 0;
        self.clamp_selection();
        self.message = if self.selection.is_empty() {
            None
        } else {
            Some(format!(
                "Showing grammar points with tags: {}",
                self.selection.active().join(", ")
            ))
        };
    }

    /// Drops every tag filter and the search term.
    pub fn clear_filters(&mut self) {
        self.selection.clear();
        self.search.clear();
        self.current_point = 0;
        self.message = None;
    }

    /// Appends a character to the search term.
    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.current_point = 0;
        self.clamp_selection();
    }

    /// Removes the last character of the search term.
    pub fn pop_search(&mut self) {
        self.search.pop();
        self.clamp_selection();
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
