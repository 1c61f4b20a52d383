//! Special-signal scanner: one generic interpreter over the rule table

use std::collections::{BTreeMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::reads::build_reads;
use crate::core::rules::SPECIAL_RULES;
use crate::types::{DownfallReport, DownfallWindow, Reads, SignalBundle, Triangle};
use crate::{
    DOWNFALL_AGE_WINDOWS, DOWNFALL_ESCALATION_COUNT, DOWNFALL_READS, LEADER_DIGITS,
    LEFT_POSITIONS, PAIR_GROUPS, RIGHT_POSITIONS,
};

lazy_static! {
    // Sandwich triple: first digit == last digit, any middle (1x1 .. 9x9)
    static ref RE_SANDWICH: Regex = Regex::new(
        r"^(1\d1|2\d2|3\d3|4\d4|5\d5|6\d6|7\d7|8\d8|9\d9)$"
    ).unwrap();
}

/// The fixed column triples inspected by the scanner
const TRIPLE_COLUMNS: [(&str, [char; 3]); 9] = [
    ("ABC", ['A', 'B', 'C']),
    ("BCD", ['B', 'C', 'D']),
    ("AEG", ['A', 'E', 'G']),
    ("DFG", ['D', 'F', 'G']),
    ("EGN", ['E', 'G', 'N']),
    ("FGO", ['F', 'G', 'O']),
    ("HIJ", ['H', 'I', 'J']),
    ("KLM", ['K', 'L', 'M']),
    ("NOP", ['N', 'O', 'P']),
];

/// Concatenate the digit strings of the nine named column triples
fn scan_triples(t: &Triangle) -> Vec<(&'static str, String)> {
    TRIPLE_COLUMNS
        .iter()
        .map(|(name, cols)| {
            let s: String = cols
                .iter()
                .filter_map(|&c| t.digit(c))
                .map(|d| char::from(b'0' + d))
                .collect();
            (*name, s)
        })
        .collect()
}

/// Triples visible to a rule: all nine, or the rule's named subset
fn scoped_triples<'a>(
    triples: &'a [(&'static str, String)],
    keys: &'static [&'static str],
) -> impl Iterator<Item = &'a (&'static str, String)> {
    triples
        .iter()
        .filter(move |(name, _)| keys.is_empty() || keys.contains(name))
}

/// Digits sitting on one slope, in tier order
fn side_digits(t: &Triangle, positions: &[char]) -> Vec<u8> {
    t.flatten()
        .iter()
        .filter(|(label, _)| positions.contains(label))
        .map(|&(_, v)| v)
        .collect()
}

/// Equal, or together forming one of the fixed pairing groups
fn paired_or_equal(x: u8, y: u8) -> bool {
    if x == y {
        return true;
    }
    PAIR_GROUPS
        .iter()
        .any(|g| (g[0] == x && g[1] == y) || (g[0] == y && g[1] == x))
}

/// C, D, F, G, K, L all inside the leader digit set
fn leader_pattern(t: &Triangle) -> bool {
    [
        t.inputs.c,
        t.inputs.d,
        t.layer1.f,
        t.layer1.g,
        t.second_layer.k,
        t.second_layer.l,
    ]
    .iter()
    .all(|d| LEADER_DIGITS.contains(d))
}

/// Pair contains a 1, both members being valid 1–9 digits
fn pair_has_one(x: u8, y: u8) -> bool {
    (1..=9).contains(&x) && (1..=9).contains(&y) && (x == 1 || y == 1)
}

/// Betrayal markers: front pairs (A,B)(A,E)(B,E), back pairs (C,D)(C,F)(D,F)
fn betrayal_flags(t: &Triangle) -> (bool, bool) {
    let (a, b, c, d) = (t.inputs.a, t.inputs.b, t.inputs.c, t.inputs.d);
    let (e, f) = (t.layer1.e, t.layer1.f);
    let front = pair_has_one(a, b) || pair_has_one(a, e) || pair_has_one(b, e);
    let back = pair_has_one(c, d) || pair_has_one(c, f) || pair_has_one(d, f);
    (front, back)
}

/// Count 18/81 reads and lay out the downfall windows
fn evaluate_downfall_windows(read_values: &[u32]) -> Option<DownfallReport> {
    let occurrences = read_values
        .iter()
        .filter(|v| DOWNFALL_READS.contains(v))
        .count();
    if occurrences == 0 {
        return None;
    }
    Some(DownfallReport {
        occurrences,
        windows: DOWNFALL_AGE_WINDOWS
            .iter()
            .map(|&upto_age| DownfallWindow { upto_age })
            .collect(),
        extra_anytime_after_45: occurrences >= DOWNFALL_ESCALATION_COUNT,
        estimated_total_downfalls: if occurrences == 1 { 3 } else { 4 },
        tags: vec!["downfall_18".to_string()],
        note: "Downfall windows (legal/financial/relationship) based on 18/81 pattern."
            .to_string(),
    })
}

fn dedup_preserving(seq: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    seq.into_iter().filter(|x| seen.insert(x.clone())).collect()
}

/// Scan one triangle for special signals in a feature context.
///
/// Returns `None` when no rule for `feature` matches - an expected
/// outcome, not an error. Unknown feature strings match zero rules.
/// `reads` may be supplied to avoid rederiving; `None` recomputes them.
pub fn scan_special_signals(
    feature: &str,
    triangle: &Triangle,
    reads: Option<&Reads>,
) -> Option<SignalBundle> {
    let triples = scan_triples(triangle);
    let derived;
    let reads = match reads {
        Some(r) => r,
        None => {
            derived = build_reads(triangle);
            &derived
        }
    };
    let all_values = reads.values();
    let compound_values = reads.compound_values();
    let left_digits = side_digits(triangle, &LEFT_POSITIONS);
    let right_digits = side_digits(triangle, &RIGHT_POSITIONS);

    let mut matched = false;
    let mut tags: Vec<String> = Vec::new();
    let mut notes: Vec<String> = Vec::new();

    for rule in SPECIAL_RULES.iter() {
        if !rule.features.contains(&feature) {
            continue;
        }

        let mut ok = false;
        let mut extra_tags: Vec<&'static str> = Vec::new();
        let mut extra_note: Option<String> = None;

        if !rule.reads_any.is_empty() && all_values.iter().any(|v| rule.reads_any.contains(v)) {
            ok = true;
        }

        if !rule.triples_any.is_empty()
            && scoped_triples(&triples, rule.triple_keys)
                .any(|(_, s)| rule.triples_any.contains(&s.as_str()))
        {
            ok = true;
        }

        if rule.triples_sandwich
            && scoped_triples(&triples, rule.triple_keys).any(|(_, s)| RE_SANDWICH.is_match(s))
        {
            ok = true;
        }

        if !rule.left_digits_any.is_empty()
            && left_digits.iter().any(|d| rule.left_digits_any.contains(d))
        {
            ok = true;
        }

        if !rule.right_digits_any.is_empty()
            && right_digits.iter().any(|d| rule.right_digits_any.contains(d))
        {
            ok = true;
        }

        if rule.abcd_pairing
            && paired_or_equal(triangle.inputs.a, triangle.inputs.d)
            && paired_or_equal(triangle.inputs.b, triangle.inputs.c)
        {
            ok = true;
        }

        if rule.leader_pattern && leader_pattern(triangle) {
            ok = true;
        }

        if rule.betrayal_pattern {
            let (front, back) = betrayal_flags(triangle);
            if front || back {
                ok = true;
                let direction = match (front, back) {
                    (true, true) => "front and back",
                    (true, false) => "front/direct",
                    _ => "back",
                };
                if front {
                    extra_tags.push("betrayal_front");
                }
                if back {
                    extra_tags.push("betrayal_back");
                }
                extra_note = Some(if rule.note_tpl.contains("{direction}") {
                    rule.note_tpl.replace("{direction}", direction)
                } else if !rule.note_tpl.is_empty() {
                    rule.note_tpl.to_string()
                } else {
                    "Back-stepping/betrayal marker detected.".to_string()
                });
            }
        }

        if ok {
            matched = true;
            tags.extend(rule.tags.iter().map(|t| t.to_string()));
            tags.extend(extra_tags.iter().map(|t| t.to_string()));
            if let Some(note) = extra_note {
                notes.push(note);
            } else if !rule.note.is_empty() {
                notes.push(rule.note.to_string());
            }
        }
    }

    let r18 = if feature == "yearly" || feature == "monthly" {
        evaluate_downfall_windows(&compound_values)
    } else {
        None
    };
    if let Some(report) = &r18 {
        matched = true;
        tags.extend(report.tags.iter().cloned());
        notes.push(report.note.clone());
    }

    if !matched {
        return None;
    }

    let mut reads_used = compound_values;
    reads_used.sort_unstable();
    reads_used.dedup();

    let triples_seen: BTreeMap<String, String> = triples
        .into_iter()
        .filter(|(_, s)| !s.is_empty())
        .map(|(name, s)| (name.to_string(), s))
        .collect();

    let mut left_side_digits = left_digits;
    left_side_digits.sort_unstable();
    let mut right_side_digits = right_digits;
    right_side_digits.sort_unstable();

    Some(SignalBundle {
        present: true,
        feature: feature.to_string(),
        tags: dedup_preserving(tags),
        notes: dedup_preserving(notes),
        reads_used,
        triples_seen,
        left_side_digits,
        right_side_digits,
        r18,
    })
}

// =============================================================================
// TESTS
// =============================================================================
