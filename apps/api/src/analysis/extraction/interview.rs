use anyhow::{Context, Result};
use regex::Regex;

use crate::analysis::normalizer::NormalizedText;
use crate::models::profile::InterviewStageInfo;

/// Canonical stage names and their trigger phrases, in canonical order.
const STAGES: &[(&str, &[&str])] = &[
    ("phone", &["phone screen", "phone screening", "phone interview", "phone call"]),
    ("recruiter", &["recruiter screen", "recruiter call", "recruiter interview", "recruiter"]),
    (
        "technical",
        &[
            "technical interview",
            "technical interviews",
            "technical screen",
            "technical screening",
            "technical round",
            "technical assessment",
        ],
    ),
    (
        "coding challenge",
        &[
            "coding challenge",
            "coding exercise",
            "coding test",
            "coding assessment",
            "take-home",
            "take home",
            "live coding",
        ],
    ),
    ("system design", &["system design", "systems design"]),
    ("behavioral", &["behavioral", "behavioural", "culture fit"]),
    ("panel", &["panel interview", "panel"]),
    ("hiring manager", &["hiring manager"]),
    (
        "onsite",
        &[
            "onsite interview",
            "on-site interview",
            "onsite round",
            "virtual onsite",
            "final onsite",
            "onsite loop",
        ],
    ),
];

/// Bare stage words, only trusted once the posting talks about its interview process.
const BARE_STAGE_WORDS: &[(&str, &[&str])] = &[
    ("phone", &["phone"]),
    ("technical", &["technical"]),
    ("coding challenge", &["coding", "code"]),
    ("behavioral", &["culture"]),
    ("onsite", &["onsite", "on-site"]),
];

const PROCESS_TERMS: &[&str] = &[
    "interview",
    "interviews",
    "interview process",
    "round",
    "rounds",
    "stage",
    "stages",
    "loop",
];

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

const MAX_ROUNDS: u32 = 20;

pub struct InterviewParser {
    rounds: Regex,
}

impl InterviewParser {
    pub fn new() -> Result<Self> {
        let rounds = Regex::new(
            r"\b(\d{1,2}|one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:[a-z-]+\s+)?(?:rounds?|interviews|stages)\b",
        )
        .context("Failed to compile interview rounds pattern")?;
        Ok(Self { rounds })
    }

    pub fn parse(&self, text: &NormalizedText) -> InterviewStageInfo {
        let in_process = text.contains_any_term(PROCESS_TERMS);
        let stages = STAGES
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| {
                mentions_stage(STAGES, name, text)
                    || (in_process && mentions_stage(BARE_STAGE_WORDS, name, text))
            })
            .map(str::to_string)
            .collect();

        InterviewStageInfo {
            stages,
            estimated_rounds: self.explicit_rounds(text),
        }
    }

    /// Only counts stated outright ("4 rounds", "four interviews"); never guessed from stages.
    fn explicit_rounds(&self, text: &NormalizedText) -> Option<u32> {
        self.rounds
            .captures_iter(text.as_str())
            .filter_map(|caps| parse_count(caps.get(1)?.as_str()))
            .find(|n| (1..=MAX_ROUNDS).contains(n))
    }
}

fn mentions_stage(table: &[(&str, &[&str])], stage: &str, text: &NormalizedText) -> bool {
    table
        .iter()
        .any(|(name, triggers)| *name == stage && text.contains_any_term(triggers))
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.parse().ok().or_else(|| {
        NUMBER_WORDS
            .iter()
            .find(|(word, _)| *word == raw)
            .map(|(_, n)| *n)
    })
}
