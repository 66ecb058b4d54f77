//! Latin grammar appendix conventions.
//!
//! The appendix lists noun cases, verb moods and a handful of standalone verbal
//! chapters, each heading on a line of its own. The first five points (agreement
//! and basic constructions) appear before any heading.

use crate::formats::{CatchAll, Format};
use crate::tags::TagRule;
use once_cell::sync::Lazy;
use regex::Regex;

/// Title of the catch-all section for the leading agreement points.
pub const AGREEMENT: &str = "Agreement and Basic Constructions";
/// Coarse category for case sections.
pub const NOUN: &str = "Noun";
/// Coarse category for moods and verbal constructions.
pub const VERB: &str = "Verb";
/// Participles chapter, its own category.
pub const PARTICIPLES: &str = "Participles";
/// Voice chapter, its own category.
pub const VOICE: &str = "Voice";

const HEADERS: &[&str] = &[
    "Nominative Case",
    "Genitive Case",
    "Dative Case",
    "Accusative Case",
    "Ablative Case",
    "Vocative Case",
    "Locative Case",
    "Indicative Mood",
    "Infinitive Mood",
    "Imperative Mood",
    "Subjunctive Mood",
    "Other Verbal Constructions",
    "Conditions with the Subjunctive",
    PARTICIPLES,
    VOICE,
];

const RULES: &[TagRule] = &[
    TagRule::sole(AGREEMENT),
    TagRule::containing("Case", NOUN),
    TagRule::containing("Mood", VERB),
    TagRule::exact("Other Verbal Constructions", VERB),
    TagRule::exact("Conditions with the Subjunctive", VERB),
    TagRule::exact(PARTICIPLES, PARTICIPLES),
    TagRule::exact(VOICE, VOICE),
];

const CATEGORIES: &[&str] = &[AGREEMENT, NOUN, VERB, PARTICIPLES, VOICE];

static CONTENT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1\. Agreement of Verb").expect("anchor pattern is valid"));

/// The Latin grammar appendix booklet.
pub struct LatinAppendix;

impl Format for LatinAppendix {
    fn section_headers(&self) -> &[&'static str] {
        HEADERS
    }

    fn is_content_start(&self, line: &str) -> bool {
        CONTENT_START.is_match(line)
    }

    fn catch_all(&self) -> CatchAll {
        CatchAll {
            title: AGREEMENT,
            max_number: 5,
        }
    }

    fn tag_rules(&self) -> &[TagRule] {
        RULES
    }

    fn categories(&self) -> &[&'static str] {
        CATEGORIES
    }
}
