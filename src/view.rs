//! Read-only queries a viewer performs over a parsed appendix.
//!
//! Tag filtering is conjunctive: a point is shown only when it carries every
//! active tag. Free-text search is case-insensitive over title, description
//! and examples. Sections are grouped under the coarse category their first
//! point is tagged with.

use crate::section::{GrammarPoint, Section};

#[must_use]
/// Every distinct tag across all points, in first-seen order.
pub fn all_tags(sections: &[Section]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in sections
        .iter()
        .flat_map(|s| &s.points)
        .flat_map(|p| &p.tags)
    {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

#[must_use]
/// Tags ordered for a filter bar: present categories first, then the rest.
pub fn tag_bar(sections: &[Section], categories: &[&str]) -> Vec<String> {
    let tags = all_tags(sections);
    let mut bar: Vec<String> = categories
        .iter()
        .filter(|c| tags.iter().any(|t| t.as_str() == **c))
        .map(|c| (*c).to_string())
        .collect();
    bar.extend(
        tags.into_iter()
            .filter(|t| !categories.iter().any(|c| *c == t)),
    );
    bar
}

#[must_use]
/// Whether `point` carries every tag in `active`.
pub fn matches_tags(point: &GrammarPoint, active: &[String]) -> bool {
    active.iter().all(|tag| point.has_tag(tag))
}

#[must_use]
/// Case-insensitive substring search over title, description and examples.
///
/// The term is matched as typed, surrounding whitespace included; only an
/// empty term matches everything.
pub fn matches_search(point: &GrammarPoint, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    point.title.to_lowercase().contains(&term)
        || point.description.to_lowercase().contains(&term)
        || point
            .examples
            .iter()
            .any(|e| e.to_lowercase().contains(&term))
}

#[must_use]
/// Whether the section title or any of its points matches `term`.
pub fn section_matches_search(section: &Section, term: &str) -> bool {
    let needle = term.to_lowercase();
    needle.is_empty()
        || section.title.to_lowercase().contains(&needle)
        || section.points.iter().any(|p| matches_search(p, term))
}

#[must_use]
/// Points passing both the tag filter and the search, with their sections.
pub fn filter_points<'a>(
    sections: &'a [Section],
    active: &[String],
    term: &str,
) -> Vec<(&'a Section, &'a GrammarPoint)> {
    sections
        .iter()
        .flat_map(|s| s.points.iter().map(move |p| (s, p)))
        .filter(|(_, p)| matches_tags(p, active) && matches_search(p, term))
        .collect()
}

#[must_use]
/// Category a section is listed under, if any.
///
/// The first point's tags decide; a section whose own title names a category
/// falls back to that.
pub fn category_of<'c>(section: &Section, categories: &[&'c str]) -> Option<&'c str> {
    section
        .points
        .first()
        .and_then(|p| {
            p.tags
                .iter()
                .find_map(|t| categories.iter().find(|c| **c == t.as_str()))
        })
        .or_else(|| categories.iter().find(|c| **c == section.title))
        .copied()
}

#[derive(Debug, PartialEq, Eq)]
/// Sections filed under one coarse category.
pub struct CategoryGroup<'a> {
    /// Category name.
    pub category: &'a str,
    /// Sections in document order.
    pub sections: Vec<&'a Section>,
}

#[must_use]
/// Groups non-empty sections by category, in category order.
///
/// Sections with no recognised category are left out.
pub fn group_by_category<'a>(
    sections: &'a [Section],
    categories: &[&'a str],
) -> Vec<CategoryGroup<'a>> {
    categories
        .iter()
        .map(|&category| CategoryGroup {
            category,
            sections: sections
                .iter()
                .filter(|s| !s.points.is_empty())
                .filter(|s| category_of(s, categories) == Some(category))
                .collect(),
        })
        .filter(|group| !group.sections.is_empty())
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Set of active filter tags, kept in the order they were switched on.
pub struct TagSelection {
    active: Vec<String>,
}

impl TagSelection {
    /// Switches `tag` on, or off if it was already active.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(index) = self.active.iter().position(|t| t == tag) {
            self.active.remove(index);
        } else {
            self.active.push(tag.to_string());
        }
    }

    /// Deactivates every tag.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[must_use]
    /// Whether `tag` is active.
    pub fn contains(&self, tag: &str) -> bool {
        self.active.iter().any(|t| t == tag)
    }

    #[must_use]
    /// Whether no tag is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    /// Active tags in activation order.
    pub fn active(&self) -> &[String] {
        &self.active
    }
}

#[cfg(test)]
#[path = "tests/view.rs"]
mod tests;
