use super::{derive_tags, TagRule, TitleMatch};
use crate::formats::latin::LatinAppendix;
use crate::formats::Format;
use rstest::rstest;

#[rstest]
#[case("Agreement and Basic Constructions", &["Agreement and Basic Constructions"])]
#[case("Genitive Case", &["Noun", "Genitive Case"])]
#[case("Locative Case", &["Noun", "Locative Case"])]
#[case("Subjunctive Mood", &["Verb", "Subjunctive Mood"])]
#[case("Other Verbal Constructions", &["Verb", "Other Verbal Constructions"])]
#[case("Conditions with the Subjunctive", &["Verb", "Conditions with the Subjunctive"])]
#[case("Participles", &["Participles", "Participles"])]
#[case("Voice", &["Voice", "Voice"])]
#[case("Gerunds", &["Gerunds"])]
fn test_latin_classification(#[case] title: &str, #[case] expected: &[&str]) {
    assert_eq!(derive_tags(title, LatinAppendix.tag_rules()), expected);
}

#[test]
fn test_every_case_header_gets_noun_prefix() {
    let format = LatinAppendix;
    for title in format.section_headers().iter().filter(|t| t.contains("Case")) {
        assert_eq!(derive_tags(title, format.tag_rules()), ["Noun", *title]);
    }
}

#[test]
fn test_first_matching_rule_wins() {
    let rules = [
        TagRule::containing("Mood", "Verb"),
        TagRule::exact("Mood Case", "Noun"),
    ];

    assert_eq!(derive_tags("Mood Case", &rules), ["Verb", "Mood Case"]);
}

#[test]
fn test_empty_table_tags_with_title() {
    assert_eq!(derive_tags("Anything", &[]), ["Anything"]);
}

#[test]
fn test_matchers() {
    assert!(TitleMatch::Exact("Voice").accepts("Voice"));
    assert!(!TitleMatch::Exact("Voice").accepts("Active Voice"));
    assert!(TitleMatch::Contains("Case").accepts("Dative Case"));
    assert!(!TitleMatch::Contains("Case").accepts("case"));
}
