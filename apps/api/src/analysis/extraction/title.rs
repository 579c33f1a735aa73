use anyhow::{Context, Result};
use regex::Regex;

use crate::analysis::normalizer::collapse_whitespace;

const MIN_TITLE_LEN: usize = 6;
const MAX_TITLE_LEN: usize = 99;
const MAX_HEADING_WORDS: usize = 10;
const HEADING_SEPARATORS: &[&str] = &[" - ", " \u{2013} ", " \u{2014} ", " | "];

/// One way of spotting a title, tried in declaration order.
enum TitleRule {
    /// `Position: Senior Rust Engineer`
    Labeled(Regex),
    /// `We're hiring a Staff Engineer to ...`
    HiringPhrase(Regex),
    /// First non-empty line when it reads like a heading and is followed by a
    /// line break or a ` - ` style separator.
    LeadingLine,
}

impl TitleRule {
    fn candidate(&self, text: &str) -> Option<String> {
        match self {
            TitleRule::Labeled(re) | TitleRule::HiringPhrase(re) => re
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
            TitleRule::LeadingLine => leading_heading(text),
        }
    }
}

/// Extracts a job title from the original (un-normalized) posting text.
pub struct TitleExtractor {
    rules: Vec<TitleRule>,
}

impl TitleExtractor {
    pub fn new() -> Result<Self> {
        let labeled = Regex::new(
            r"(?im)^[ \t*#-]*(?:job[ \t]+title|position|role|title|job)[ \t]*:[ \t]*([^\n]+)",
        )
        .context("Failed to compile labeled title pattern")?;
        let hiring = Regex::new(
            r"(?i)\b(?:hiring|seeking|looking for)\s+(?:an?\s+)?([^\n,.;:]+?)\s+(?:to|who|with)\b",
        )
        .context("Failed to compile hiring phrase pattern")?;

        Ok(Self {
            rules: vec![
                TitleRule::Labeled(labeled),
                TitleRule::HiringPhrase(hiring),
                TitleRule::LeadingLine,
            ],
        })
    }

    /// First candidate whose collapsed length is 6–99 characters wins.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.candidate(text))
            .map(|candidate| clean_title(&candidate))
            .find(|title| (MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&title.chars().count()))
    }
}

fn clean_title(candidate: &str) -> String {
    collapse_whitespace(candidate)
        .trim_matches(|c: char| c == '*' || c == '#' || c == ':' || c.is_whitespace())
        .to_string()
}

fn leading_heading(text: &str) -> Option<String> {
    let mut lines = text.lines().map(str::trim).skip_while(|l| l.is_empty());
    let line = lines.next()?;
    let has_more_lines = lines.any(|l| !l.is_empty());
    let line = line.trim_start_matches(|c: char| c == '#' || c == '*' || c.is_whitespace());

    let cut = HEADING_SEPARATORS.iter().filter_map(|sep| line.find(sep)).min();
    // a lone line of prose is not a heading
    if cut.is_none() && !has_more_lines {
        return None;
    }
    let head = cut.map_or(line, |cut| &line[..cut]).trim();

    let starts_upper = head.chars().next().is_some_and(char::is_uppercase);
    let sentence_like = head.ends_with(['.', '!', '?', ',']) || head.contains(':');
    let word_count = head.split_whitespace().count();

    (starts_upper && !sentence_like && word_count <= MAX_HEADING_WORDS).then(|| head.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(text: &str) -> Option<String> {
        TitleExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn test_labeled_field_wins() {
        let text = "Acme Corp Careers\nPosition: Senior Data Engineer\nWe build pipelines.";
        assert_eq!(title(text).as_deref(), Some("Senior Data Engineer"));
    }

    #[test]
    fn test_leading_heading_line() {
        let text = "Senior Backend Engineer\n\nWe are a fintech startup building APIs.";
        assert_eq!(title(text).as_deref(), Some("Senior Backend Engineer"));
    }

    #[test]
    fn test_leading_heading_cut_at_separator() {
        let text = "Staff Platform Engineer - Remote (US)\nAbout the role...";
        assert_eq!(title(text).as_deref(), Some("Staff Platform Engineer"));
    }

    #[test]
    fn test_hiring_phrase_fallback() {
        let text = "We are looking for a Machine Learning Engineer to join our team.";
        assert_eq!(title(text).as_deref(), Some("Machine Learning Engineer"));
    }

    #[test]
    fn test_too_short_candidate_is_skipped() {
        assert_eq!(title("Role: Dev\nsome lowercase body text."), None);
    }

    #[test]
    fn test_hiring_phrase_beats_company_header() {
        let text = "Acme Robotics Inc\nWe are seeking a Senior Rust Engineer to build robots.";
        assert_eq!(title(text).as_deref(), Some("Senior Rust Engineer"));
    }

    #[test]
    fn test_single_line_without_separator_is_not_a_heading() {
        assert_eq!(title("Join our amazing team"), None);
        assert_eq!(
            title("Platform Engineer - Payments").as_deref(),
            Some("Platform Engineer")
        );
    }

    #[test]
    fn test_no_title_in_plain_prose() {
        assert_eq!(title("join our amazing team and have fun."), None);
        assert_eq!(title(""), None);
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let text = "Title:   Senior    Rust   Engineer  ";
        assert_eq!(title(text).as_deref(), Some("Senior Rust Engineer"));
    }
}
