//! Integration tests for the special-signal scanner
//!
//! Each scenario drives the full path: seeds → triangle → reads → rule
//! table → bundle.

use pretty_assertions::assert_eq;

use trikona::core::{
    build_reads, scan_special_signals, summarize_polarity, triangle_from_dob,
    triangle_from_seeds, yearly_combined_triangle, SAME_TRIPLES,
};

#[test]
fn test_unknown_feature_matches_nothing() {
    let t = triangle_from_dob("29-10-2001").unwrap();
    assert!(scan_special_signals("galactic", &t, None).is_none());
    assert!(scan_special_signals("", &t, None).is_none());
}

#[test]
fn test_supplied_and_derived_reads_agree() {
    let t = triangle_from_dob("28-01-2005").unwrap();
    let reads = build_reads(&t);
    let with = scan_special_signals("daily", &t, Some(&reads));
    let without = scan_special_signals("daily", &t, None);
    assert_eq!(with, without);
}

#[test]
fn test_betrayal_front_marker_in_daily() {
    // A=1 puts a 1 in every front pair; back side stays clean
    let t = triangle_from_dob("28-01-2005").unwrap();
    assert_eq!(t.inputs.a, 1);

    let bundle = scan_special_signals("daily", &t, None).unwrap();
    assert!(bundle.present);
    assert!(bundle.tags.iter().any(|t| t == "betrayal_risk"));
    assert!(bundle.tags.iter().any(|t| t == "betrayal_front"));
    assert!(!bundle.tags.iter().any(|t| t == "betrayal_back"));
    assert!(bundle
        .notes
        .iter()
        .any(|n| n.contains("front/direct") && n.contains("Daily")));
}

#[test]
fn test_abcd_pairing_flags_dual_personality() {
    // A↔D in group {1,6}, B↔C in group {2,7}
    let t = triangle_from_seeds(1, 2, 7, 6);
    let bundle = scan_special_signals("daily", &t, None).unwrap();
    assert!(bundle.tags.iter().any(|t| t == "dual_personality"));
    assert!(bundle.tags.iter().any(|t| t == "daily_instability"));

    let yearly = scan_special_signals("yearly", &t, None).unwrap();
    assert!(yearly.tags.iter().any(|t| t == "yearly_indecision"));
}

#[test]
fn test_leader_pattern_in_profession_and_person() {
    // Seeds chosen so C,D,F,G,K,L all land in {1,2,3}
    let t = triangle_from_seeds(4, 5, 1, 1);
    assert_eq!(t.layer1.f, 2);
    assert_eq!(t.layer1.g, 2);
    assert_eq!(t.second_layer.k, 3);
    assert_eq!(t.second_layer.l, 3);

    let profession = scan_special_signals("profession", &t, None).unwrap();
    assert!(profession.tags.iter().any(|t| t == "born_leader"));

    let person = scan_special_signals("person", &t, None).unwrap();
    assert!(person.tags.iter().any(|t| t == "leadership"));
    assert!(person.tags.iter().any(|t| t == "initiative"));
}

#[test]
fn test_downfall_windows_from_18_reads() {
    // Seeds 1,8,3,5: AB = 18 and IJ = 18 → two occurrences
    let t = triangle_from_seeds(1, 8, 3, 5);
    let reads = build_reads(&t);
    assert_eq!(reads.ab, 18);
    assert_eq!(reads.ij, 18);

    let bundle = scan_special_signals("yearly", &t, Some(&reads)).unwrap();
    let r18 = bundle.r18.as_ref().expect("18/81 record expected");
    assert_eq!(r18.occurrences, 2);
    assert_eq!(r18.estimated_total_downfalls, 4);
    assert!(!r18.extra_anytime_after_45);
    assert_eq!(
        r18.windows.iter().map(|w| w.upto_age).collect::<Vec<_>>(),
        vec![27, 36, 45]
    );
    assert!(bundle.tags.iter().any(|t| t == "downfall_18"));
}

#[test]
fn test_downfall_windows_only_for_yearly_and_monthly() {
    let t = triangle_from_seeds(1, 8, 3, 5);
    let daily = scan_special_signals("daily", &t, None).unwrap();
    assert!(daily.r18.is_none());
    let monthly = scan_special_signals("monthly", &t, None).unwrap();
    assert!(monthly.r18.is_some());
}

#[test]
fn test_aeg_same_triple_triggers_daily_negative_cycle() {
    // Brute-force an ABCD whose AEG or DFG is a same-number triple,
    // then check the daily response tags.
    let mut found = None;
    'outer: for a in 1..=9u8 {
        for b in 1..=9u8 {
            for c in 1..=9u8 {
                for d in 1..=9u8 {
                    let t = triangle_from_seeds(a, b, c, d);
                    if let Some(bundle) = scan_special_signals("daily", &t, None) {
                        let hit = ["AEG", "DFG"].iter().any(|k| {
                            bundle
                                .triples_seen
                                .get(*k)
                                .is_some_and(|s| SAME_TRIPLES.contains(&s.as_str()))
                        });
                        if hit {
                            found = Some(bundle);
                            break 'outer;
                        }
                    }
                }
            }
        }
    }

    let bundle = found.expect("no ABCD produced an AEG/DFG same-number triple");
    assert!(
        bundle.tags.iter().any(|t| t == "accident_risk")
            || bundle.tags.iter().any(|t| t == "negative_cycle"),
        "expected negative-cycle tags, got {:?}",
        bundle.tags
    );
}

#[test]
fn test_sandwich_triple_treated_like_same_triple() {
    // Find seeds where AEG is a sandwich (first == last) but not all-same
    let mut found = None;
    'outer: for a in 1..=9u8 {
        for b in 1..=9u8 {
            for c in 1..=9u8 {
                for d in 1..=9u8 {
                    let t = triangle_from_seeds(a, b, c, d);
                    if t.inputs.a == t.layer1.g && t.inputs.a != t.layer1.e {
                        found = Some(t);
                        break 'outer;
                    }
                }
            }
        }
    }

    let t = found.expect("no sandwich AEG seeds found");
    let bundle = scan_special_signals("yearly", &t, None).unwrap();
    assert!(bundle.tags.iter().any(|t| t == "negative_cycle"));
    assert!(bundle
        .notes
        .iter()
        .any(|n| n.contains("sandwich") || n.contains("same-number")));
}

#[test]
fn test_bundle_shape() {
    let t = triangle_from_seeds(1, 8, 3, 5);
    let bundle = scan_special_signals("monthly", &t, None).unwrap();

    assert_eq!(bundle.feature, "monthly");
    assert!(bundle.present);

    // reads_used: sorted, distinct, compound only
    let mut sorted = bundle.reads_used.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(bundle.reads_used, sorted);
    assert!(bundle.reads_used.iter().all(|v| (10..=99).contains(v)));

    // all nine triples are populated for a full triangle
    assert_eq!(bundle.triples_seen.len(), 9);
    for s in bundle.triples_seen.values() {
        assert_eq!(s.len(), 3);
    }

    // side digit lists are sorted and cover both slopes
    assert_eq!(bundle.left_side_digits.len(), 7);
    assert_eq!(bundle.right_side_digits.len(), 7);
    assert!(bundle.left_side_digits.windows(2).all(|w| w[0] <= w[1]));
    assert!(bundle.right_side_digits.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_tags_and_notes_deduplicate_in_first_seen_order() {
    // 28-01-2005 trips multiple daily rules sharing tags
    let t = triangle_from_dob("28-01-2005").unwrap();
    let bundle = scan_special_signals("daily", &t, None).unwrap();

    for (i, tag) in bundle.tags.iter().enumerate() {
        assert!(
            !bundle.tags[..i].contains(tag),
            "duplicate tag {:?}",
            tag
        );
    }
    for (i, note) in bundle.notes.iter().enumerate() {
        assert!(!bundle.notes[..i].contains(note));
    }
}

#[test]
fn test_yearly_combined_scan_end_to_end() {
    // Full pipeline: DOB ⊕ year driver, then scan the active pattern
    let combined = yearly_combined_triangle("29-10-2001", 2025).unwrap();
    let result = scan_special_signals("yearly", &combined, None);
    // Whether or not rules fire depends on the combined digits; either
    // outcome must be well-formed.
    if let Some(bundle) = result {
        assert_eq!(bundle.feature, "yearly");
        assert!(!bundle.tags.is_empty());
        assert!(!bundle.notes.is_empty());
    }
}

#[test]
fn test_polarity_totals_match_flattened_cells() {
    let t = triangle_from_dob("29-10-2001").unwrap();
    let pol = summarize_polarity(&t);
    assert_eq!(pol.positive + pol.negative + pol.neutral, t.flatten().len());
    assert_eq!(pol.balance.to_string(), "Mostly positive");
}
