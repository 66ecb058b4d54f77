use super::{
    all_tags, category_of, filter_points, group_by_category, matches_search, matches_tags,
    section_matches_search, tag_bar, TagSelection,
};
use crate::formats::latin::{LatinAppendix, AGREEMENT};
use crate::formats::Format;
use crate::parser::parse_document;
use crate::section::{GrammarPoint, Section};
use proptest::prelude::*;

const SAMPLE: &str = "1. Basic Agreement\n\
                      A verb agrees with its subject.\n\
                      Genitive Case\n\
                      2. Possession\n\
                      Expresses ownership.\n    puella rosae  (the girl of the rose)\n";

fn sample() -> Vec<Section> {
    parse_document(SAMPLE, &LatinAppendix)
}

fn active(tags: &[&str]) -> Vec<String> {
    tags.iter().map(ToString::to_string).collect()
}

fn numbers(sections: &[Section], tags: &[&str], term: &str) -> Vec<String> {
    filter_points(sections, &active(tags), term)
        .into_iter()
        .map(|(_, p)| p.number.clone())
        .collect()
}

#[test]
fn test_tag_filter_is_conjunctive() {
    let sections = sample();

    assert_eq!(numbers(&sections, &["Noun"], ""), ["2"]);
    assert_eq!(numbers(&sections, &["Noun", "Genitive Case"], ""), ["2"]);
    assert!(numbers(&sections, &["Verb"], "").is_empty());
    assert!(numbers(&sections, &["Noun", AGREEMENT], "").is_empty());
    assert_eq!(numbers(&sections, &[], ""), ["1", "2"]);
}

#[test]
fn test_search_covers_title_description_and_examples() {
    let sections = sample();

    assert_eq!(numbers(&sections, &[], "POSSESSION"), ["2"]);
    assert_eq!(numbers(&sections, &[], "agrees"), ["1"]);
    assert_eq!(numbers(&sections, &[], "Rosae"), ["2"]);
    assert!(numbers(&sections, &[], "ablative").is_empty());
    assert!(matches_search(&sections[0].points[0], ""));
}

#[test]
fn test_search_term_whitespace_is_significant() {
    let sections = sample();
    let possession = &sections[1].points[0];

    assert!(matches_search(possession, "possession"));
    assert!(!matches_search(possession, "possession "));
    assert!(matches_search(possession, "rosae  ("));
    assert!(!matches_search(possession, "rosae   "));
    assert!(!matches_search(&sections[0].points[0], "   "));

    assert!(section_matches_search(&sections[1], "genitive"));
    assert!(!section_matches_search(&sections[1], " genitive"));
}

#[test]
fn test_section_search_includes_title() {
    let sections = sample();

    assert!(section_matches_search(&sections[1], "genitive"));
    assert!(section_matches_search(&sections[1], "girl"));
    assert!(!section_matches_search(&sections[0], "girl"));
}

#[test]
fn test_all_tags_in_first_seen_order() {
    assert_eq!(all_tags(&sample()), [AGREEMENT, "Noun", "Genitive Case"]);
}

#[test]
fn test_tag_bar_puts_categories_first() {
    let mut sections = sample();
    sections.insert(
        0,
        Section {
            title: "Voice".to_string(),
            points: vec![GrammarPoint {
                tags: vec!["Voice".to_string(), "Voice".to_string()],
                ..GrammarPoint::new("40", "Passive")
            }],
        },
    );

    assert_eq!(
        tag_bar(&sections, LatinAppendix.categories()),
        [AGREEMENT, "Noun", "Voice", "Genitive Case"]
    );
}

#[test]
fn test_grouping_by_category() {
    let mut sections = sample();
    sections.push(Section::new("Dative Case"));
    sections.push(Section {
        title: "Voice".to_string(),
        points: vec![GrammarPoint::new("40", "Passive")],
    });

    let groups = group_by_category(&sections, LatinAppendix.categories());

    let summary: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|g| (g.category, g.sections.iter().map(|s| s.title.as_str()).collect()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (AGREEMENT, vec![AGREEMENT]),
            ("Noun", vec!["Genitive Case"]),
            ("Voice", vec!["Voice"]),
        ]
    );
}

#[test]
fn test_uncategorised_section_has_no_category() {
    let section = Section {
        title: "Gerunds".to_string(),
        points: vec![GrammarPoint {
            tags: vec!["Gerunds".to_string()],
            ..GrammarPoint::new("60", "Purpose")
        }],
    };

    assert_eq!(category_of(&section, LatinAppendix.categories()), None);
}

#[test]
fn test_tag_selection_toggles() {
    let mut selection = TagSelection::default();
    selection.toggle("Noun");
    selection.toggle("Genitive Case");
    selection.toggle("Noun");

    assert_eq!(selection.active(), ["Genitive Case"]);
    assert!(selection.contains("Genitive Case"));

    selection.clear();
    assert!(selection.is_empty());
}

const TAG_POOL: &[&str] = &["Noun", "Verb", "Voice", "Genitive Case", "Subjunctive Mood"];

fn tag_subset() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(TAG_POOL, 0..=TAG_POOL.len())
        .prop_map(|tags| tags.into_iter().map(ToString::to_string).collect())
}

proptest! {
    #[test]
    fn prop_visible_iff_active_tags_are_a_subset(
        point_tags in tag_subset(),
        active in tag_subset(),
    ) {
        let point = GrammarPoint {
            tags: point_tags.clone(),
            ..GrammarPoint::new("1", "Any")
        };
        let subset = active.iter().all(|t| point_tags.contains(t));

        prop_assert_eq!(matches_tags(&point, &active), subset);
    }
}
