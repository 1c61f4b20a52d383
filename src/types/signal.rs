//! Special-signal structures: declarative rules and the scanner's output

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One declarative scanner rule: feature scope, match predicates, response.
///
/// Empty slices mean "predicate unused". A rule matches when any of its
/// declared predicates is satisfied; the response tags and note are then
/// accumulated into the bundle.
#[derive(Debug, Clone, Copy)]
pub struct SpecialRule {
    /// Feature contexts this rule applies to
    pub features: &'static [&'static str],
    /// Match if any read value is in this set
    pub reads_any: &'static [u32],
    /// Match if any named triple's digit string is in this set
    pub triples_any: &'static [&'static str],
    /// Restrict triple predicates to these triple names (empty = all)
    pub triple_keys: &'static [&'static str],
    /// Match if any scoped triple is a sandwich (first digit == last)
    pub triples_sandwich: bool,
    /// Match if any left-slope digit is in this set
    pub left_digits_any: &'static [u8],
    /// Match if any right-slope digit is in this set
    pub right_digits_any: &'static [u8],
    /// Match if (A,D) and (B,C) are both equal-or-paired
    pub abcd_pairing: bool,
    /// Match if C, D, F, G, K, L are all leader digits
    pub leader_pattern: bool,
    /// Match if a front or back pair contains a 1
    pub betrayal_pattern: bool,
    /// Tags emitted on match
    pub tags: &'static [&'static str],
    /// Fixed note emitted on match
    pub note: &'static str,
    /// Note template with a `{direction}` placeholder (betrayal rules)
    pub note_tpl: &'static str,
}

impl SpecialRule {
    /// Base rule with every predicate unused; rules override what they need
    pub const fn empty() -> Self {
        Self {
            features: &[],
            reads_any: &[],
            triples_any: &[],
            triple_keys: &[],
            triples_sandwich: false,
            left_digits_any: &[],
            right_digits_any: &[],
            abcd_pairing: false,
            leader_pattern: false,
            betrayal_pattern: false,
            tags: &[],
            note: "",
            note_tpl: "",
        }
    }
}

/// One downfall age window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownfallWindow {
    pub upto_age: u32,
}

/// Downfall-window analysis triggered by 18/81 reads (yearly/monthly)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownfallReport {
    /// How many reads equal 18 or 81
    pub occurrences: usize,
    pub windows: Vec<DownfallWindow>,
    /// Set when occurrences reach the escalation count
    pub extra_anytime_after_45: bool,
    pub estimated_total_downfalls: u32,
    pub tags: Vec<String>,
    pub note: String,
}

/// Scanner output: everything that matched for one feature context.
///
/// The scanner returns `None` instead of an empty bundle when no rule
/// matches; callers treat that as "no signal", not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalBundle {
    pub present: bool,
    pub feature: String,
    /// Matched tags, deduplicated in first-seen order
    pub tags: Vec<String>,
    /// Matched notes, deduplicated in first-seen order
    pub notes: Vec<String>,
    /// Sorted distinct compound (10–99) read values seen
    pub reads_used: Vec<u32>,
    /// Named triples and their digit strings (non-empty only)
    pub triples_seen: BTreeMap<String, String>,
    pub left_side_digits: Vec<u8>,
    pub right_side_digits: Vec<u8>,
    /// Downfall-window record, yearly/monthly only
    pub r18: Option<DownfallReport>,
}
