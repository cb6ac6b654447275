//! Entry normalizer
//!
//! Turns raw entry records from the CRUD layer into validated
//! `FinancialEntry` values. A malformed date rejects the entry (it is
//! dropped from projection, never a fatal error); a malformed amount is
//! coerced to zero and logged as a data-quality issue so a single bad
//! record cannot blank an entire chart.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use crate::models::{EntryCategory, FinancialEntry, Money, RawEntry, YearMonth};

/// Why an entry was rejected during normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRejection {
    /// The start date is missing entirely
    MissingDate,
    /// The start date could not be split into a valid (year, month)
    UnparseableDate(String),
    /// The end date is present but could not be split into a valid (year, month)
    UnparseableEndDate(String),
}

impl fmt::Display for EntryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryRejection::MissingDate => write!(f, "entry has no date"),
            EntryRejection::UnparseableDate(s) => write!(f, "unparseable date: {}", s),
            EntryRejection::UnparseableEndDate(s) => write!(f, "unparseable end date: {}", s),
        }
    }
}

impl std::error::Error for EntryRejection {}

/// Normalize a single raw entry
///
/// Defaults: missing end date stays open-ended, missing `is_recurring` means
/// one-off, missing category falls back to `Other("uncategorized")`.
/// Dates are decomposed by string split, never by a general date parser.
pub fn normalize(raw: &RawEntry) -> Result<FinancialEntry, EntryRejection> {
    let date = raw.date.as_deref().ok_or(EntryRejection::MissingDate)?;
    let start =
        YearMonth::parse(date).map_err(|_| EntryRejection::UnparseableDate(date.to_string()))?;

    let end = match raw.end_date.as_deref() {
        Some(s) => Some(
            YearMonth::parse(s)
                .map_err(|_| EntryRejection::UnparseableEndDate(s.to_string()))?,
        ),
        None => None,
    };

    let category = raw
        .category
        .clone()
        .map(EntryCategory::from)
        .unwrap_or_else(|| EntryCategory::Other("uncategorized".into()));

    let amount = coerce_amount(&raw.amount).unwrap_or_else(|| {
        warn!(
            category = %category,
            amount = %raw.amount,
            "non-numeric amount coerced to zero"
        );
        Money::zero()
    });

    Ok(FinancialEntry {
        category,
        description: raw.description.clone().unwrap_or_default(),
        amount,
        start,
        end,
        is_recurring: raw.is_recurring.unwrap_or(false),
    })
}

/// Normalize a batch of raw entries
///
/// Valid entries and rejections come back separately; callers typically
/// project the former and log the latter.
pub fn normalize_all(raws: &[RawEntry]) -> (Vec<FinancialEntry>, Vec<EntryRejection>) {
    let mut entries = Vec::with_capacity(raws.len());
    let mut rejections = Vec::new();

    for raw in raws {
        match normalize(raw) {
            Ok(entry) => entries.push(entry),
            Err(rejection) => {
                warn!(%rejection, "entry dropped during normalization");
                rejections.push(rejection);
            }
        }
    }

    (entries, rejections)
}

/// Coerce a raw JSON amount into Money
///
/// Numbers are taken as major currency units; numeric strings are parsed.
/// Anything else is `None` and the caller substitutes zero.
fn coerce_amount(value: &Value) -> Option<Money> {
    match value {
        Value::Number(n) => {
            let units = n.as_f64()?;
            if !units.is_finite() {
                return None;
            }
            Some(Money::from_cents((units * 100.0).round() as i64))
        }
        Value::String(s) => Money::parse(s).ok(),
        _ => None,
    }
}

/// Split of open-ended recurring entries into "current" and "historical"
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringSplit {
    /// The entry considered current for each (category, description) pair
    pub current: Vec<FinancialEntry>,
    /// Entries demoted because a later-starting duplicate exists
    pub historical: Vec<FinancialEntry>,
}

/// Partition open-ended recurring duplicates into current vs historical
///
/// When two or more open-ended recurring entries share category and
/// description, the one with the latest start month is current and the rest
/// are demoted. Entries with an end date, one-offs, and unique entries pass
/// through as current. When start months tie, the first-seen entry wins
/// pending a product decision (see DESIGN.md).
pub fn split_current_historical(entries: Vec<FinancialEntry>) -> RecurringSplit {
    let mut winners: HashMap<(EntryCategory, String), usize> = HashMap::new();
    let mut demoted = vec![false; entries.len()];

    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_recurring || entry.end.is_some() {
            continue;
        }
        let key = (entry.category.clone(), entry.description.clone());
        match winners.get(&key) {
            Some(&winner_idx) => {
                // Strictly-later start takes over; a tie keeps the incumbent.
                if entry.start > entries[winner_idx].start {
                    demoted[winner_idx] = true;
                    winners.insert(key, idx);
                } else {
                    demoted[idx] = true;
                }
            }
            None => {
                winners.insert(key, idx);
            }
        }
    }

    let mut current = Vec::new();
    let mut historical = Vec::new();
    for (idx, entry) in entries.into_iter().enumerate() {
        if demoted[idx] {
            historical.push(entry);
        } else {
            current.push(entry);
        }
    }

    RecurringSplit {
        current,
        historical,
    }
}
