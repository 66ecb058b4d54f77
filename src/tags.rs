//! Tag derivation from section titles.
//!
//! Classification is data, not control flow: a format supplies an ordered table
//! of [`TagRule`]s and [`derive_tags`] applies the first rule whose matcher
//! accepts the section title. Titles no rule accepts are tagged with themselves.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Predicate over a section title.
pub enum TitleMatch {
    /// Title equals the given string.
    Exact(&'static str),
    /// Title contains the given substring.
    Contains(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a matching rule contributes to the tag list.
pub enum TagOutcome {
    /// The title alone is the tag list.
    Sole,
    /// A coarse category followed by the title.
    Category(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One row of a classification table.
pub struct TagRule {
    /// Which titles the rule applies to.
    pub matcher: TitleMatch,
    /// Tags produced for those titles.
    pub outcome: TagOutcome,
}

impl TitleMatch {
    #[must_use]
    /// Tests the predicate against a section title.
    pub fn accepts(&self, title: &str) -> bool {
        match self {
            Self::Exact(expected) => title == *expected,
            Self::Contains(needle) => title.contains(needle),
        }
    }
}

impl TagRule {
    #[must_use]
    /// Rule producing `[category, title]` for titles equal to `title`.
    pub const fn exact(title: &'static str, category: &'static str) -> Self {
        Self {
            matcher: TitleMatch::Exact(title),
            outcome: TagOutcome::Category(category),
        }
    }

    #[must_use]
    /// Rule producing `[category, title]` for titles containing `needle`.
    pub const fn containing(needle: &'static str, category: &'static str) -> Self {
        Self {
            matcher: TitleMatch::Contains(needle),
            outcome: TagOutcome::Category(category),
        }
    }

    #[must_use]
    /// Rule producing `[title]` for titles equal to `title`.
    pub const fn sole(title: &'static str) -> Self {
        Self {
            matcher: TitleMatch::Exact(title),
            outcome: TagOutcome::Sole,
        }
    }
}

#[must_use]
/// Computes the tag list for points of a section titled `title`.
pub fn derive_tags(title: &str, rules: &[TagRule]) -> Vec<String> {
    match rules.iter().find(|rule| rule.matcher.accepts(title)) {
        Some(TagRule {
            outcome: TagOutcome::Category(category),
            ..
        }) => vec![(*category).to_string(), title.to_string()],
        Some(TagRule {
            outcome: TagOutcome::Sole,
            ..
        })
        | None => vec![title.to_string()],
    }
}

#[cfg(test)]
#[path = "tests/tags.rs"]
mod tests;
