use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::analysis::normalizer::{contains_term, NormalizedText};
use crate::models::profile::SalaryRange;

/// Words that make a bare `NNk` figure read as pay rather than, say, a user count.
const SALARY_TERMS: &[&str] = &[
    "salary",
    "compensation",
    "pay",
    "base pay",
    "per year",
    "per annum",
    "annually",
    "annual",
    "ote",
];

/// Phrases that talk about pay without stating numbers.
pub const VAGUE_SALARY_TERMS: &[&str] = &[
    "competitive salary",
    "competitive pay",
    "competitive compensation",
    "salary",
    "compensation",
    "pay range",
    "doe",
    "depending on experience",
];

const AMOUNT: &str = r"(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)";

pub struct SalaryParser {
    range: Regex,
    single_dollar: Regex,
    bare_thousands: Regex,
}

impl SalaryParser {
    pub fn new() -> Result<Self> {
        let range = format!(
            r"(\$)?\s*{AMOUNT}\s*(k)?\s*(?:-|to)\s*(\$)?\s*{AMOUNT}\s*(k)?\b"
        );
        let single = format!(r"\$\s*{AMOUNT}\s*(k)?\b");

        Ok(Self {
            range: Regex::new(&range).context("Failed to compile salary range pattern")?,
            single_dollar: Regex::new(&single)
                .context("Failed to compile single salary pattern")?,
            bare_thousands: Regex::new(r"\b(\d{2,3})k\b")
                .context("Failed to compile bare salary pattern")?,
        })
    }

    /// Tries ranges, then a single `$` figure, then a bare `NNk` when the text talks about pay.
    pub fn parse(&self, text: &NormalizedText) -> Option<SalaryRange> {
        let text = text.as_str();
        self.range
            .captures_iter(text)
            .find_map(|caps| range_from(&caps))
            .or_else(|| {
                self.single_dollar.captures_iter(text).find_map(|caps| {
                    let min = amount(caps.get(1)?.as_str(), caps.get(2).is_some())?;
                    Some(SalaryRange { min, max: None })
                })
            })
            .or_else(|| {
                if !SALARY_TERMS.iter().any(|t| contains_term(text, t)) {
                    return None;
                }
                self.bare_thousands.captures_iter(text).find_map(|caps| {
                    let min = amount(caps.get(1)?.as_str(), true)?;
                    Some(SalaryRange { min, max: None })
                })
            })
    }
}

/// A range only counts as pay when it carries a `$`, a `k`, or comma-grouped figures.
fn range_from(caps: &Captures<'_>) -> Option<SalaryRange> {
    let low_raw = caps.get(2)?.as_str();
    let high_raw = caps.get(5)?.as_str();
    let has_dollar = caps.get(1).is_some() || caps.get(4).is_some();
    let low_k = caps.get(3).is_some();
    let high_k = caps.get(6).is_some();
    let grouped = low_raw.contains(',') && high_raw.contains(',');

    if !(has_dollar || low_k || high_k || grouped) {
        return None;
    }

    // "50-100k": the suffix on one bound applies to both
    let thousands = low_k || high_k;
    let low = amount(low_raw, low_k || (thousands && !low_raw.contains(',')))?;
    let high = amount(high_raw, high_k || (thousands && !high_raw.contains(',')))?;

    let (min, max) = if low <= high { (low, high) } else { (high, low) };
    Some(SalaryRange {
        min,
        max: Some(max),
    })
}

fn amount(raw: &str, thousands: bool) -> Option<u64> {
    let value: f64 = raw.replace(',', "").parse().ok()?;
    let value = if thousands { value * 1000.0 } else { value };
    (value >= 1.0).then(|| value.round() as u64)
}
