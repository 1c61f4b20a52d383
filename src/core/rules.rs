//! The declarative rule table driving the special-signal scanner
//!
//! Each entry is a pure predicate+response record; the interpreter loop in
//! `scanner` evaluates them in order. Trigger sets, pairing groups and
//! triple scopes are a fixed behavior contract - do not simplify them.

use crate::types::SpecialRule;

/// Same-digit triples (111/222/.../999) for the AEG/DFG rules
pub const SAME_TRIPLES: [&str; 9] = [
    "111", "222", "333", "444", "555", "666", "777", "888", "999",
];

const RULE: SpecialRule = SpecialRule::empty();

pub static SPECIAL_RULES: [SpecialRule; 30] = [
    // === Yearly / Monthly: movement, downfall, influence windows ===
    SpecialRule {
        features: &["yearly", "monthly"],
        reads_any: &[15, 16, 17],
        tags: &["travel_or_relocation"],
        note: "Travel, job change or relocation phase.",
        ..RULE
    },
    SpecialRule {
        features: &["yearly"],
        reads_any: &[39, 93],
        tags: &["major_downfall"],
        note: "Major downfall marker; stay conservative in high-risk bets.",
        ..RULE
    },
    SpecialRule {
        features: &["yearly", "monthly"],
        reads_any: &[57, 75],
        tags: &["influence_circle"],
        note: "Influence of powerful people; networking effects are strong.",
        ..RULE
    },
    // === Relationship-centric patterns ===
    SpecialRule {
        features: &["relationship"],
        reads_any: &[48, 84, 88],
        tags: &["separation"],
        note: "Separation / chronic dissatisfaction tendency.",
        ..RULE
    },
    SpecialRule {
        features: &["relationship"],
        reads_any: &[17, 27, 37, 45, 46, 56, 65, 79, 97, 33, 66],
        tags: &["relationship_issue"],
        note: "Relationship/marriage stress loop may surface.",
        ..RULE
    },
    // === Health patterns ===
    SpecialRule {
        features: &["health"],
        reads_any: &[85, 88],
        tags: &["heart_alert"],
        note: "Heart or stress-load pattern; pace work, manage pressure.",
        ..RULE
    },
    SpecialRule {
        features: &["health"],
        triples_any: &["685", "222", "772"],
        tags: &["mental_health"],
        note: "Mind-mood strain tendency; protect sleep & routine.",
        ..RULE
    },
    SpecialRule {
        features: &["health"],
        reads_any: &[42, 24],
        tags: &["hospital_visit"],
        note: "Hospital/blood-loss signal; consult early if symptomatic.",
        ..RULE
    },
    // === Daily / Monthly: short-term tone ===
    SpecialRule {
        features: &["daily", "monthly"],
        left_digits_any: &[1, 2, 3, 4, 5],
        tags: &["spending_thrift"],
        note: "If these cluster on the left side, watch impulsive spending.",
        ..RULE
    },
    SpecialRule {
        features: &["daily", "monthly"],
        reads_any: &[1, 3, 7, 9],
        tags: &["extrovert_energy"],
        note: "High social/expressive tone; use it for outreach.",
        ..RULE
    },
    SpecialRule {
        features: &["daily", "monthly"],
        reads_any: &[2, 4, 6, 8],
        tags: &["feminine_energy"],
        note: "Receptive, grounded tone; good for consolidation.",
        ..RULE
    },
    // === Dual/split personality rule (A↔D and B↔C pairing) ===
    SpecialRule {
        features: &["daily"],
        abcd_pairing: true,
        tags: &["dual_personality", "confusion", "daily_instability"],
        note: "A↔D and B↔C pairing detected (groups: 1–6, 2–7, 3–8, 4–9 or same). \
               Daily: dual/contradictory personality can rise; avoid impulsive decisions.",
        ..RULE
    },
    SpecialRule {
        features: &["monthly"],
        abcd_pairing: true,
        tags: &["dual_personality", "confusion", "monthly_instability"],
        note: "A↔D and B↔C pairing detected (groups: 1–6, 2–7, 3–8, 4–9 or same). \
               Monthly: inner conflict/mood swings can rise—keep routine stable and avoid extremes.",
        ..RULE
    },
    SpecialRule {
        features: &["yearly"],
        abcd_pairing: true,
        tags: &["dual_personality", "confusion", "yearly_indecision"],
        note: "A↔D and B↔C pairing detected (groups: 1–6, 2–7, 3–8, 4–9 or same). \
               Yearly: confusion/indecision—delay irreversible commitments; seek clarity.",
        ..RULE
    },
    SpecialRule {
        features: &["relationship"],
        abcd_pairing: true,
        tags: &["dual_personality", "relationship_confusion"],
        note: "A↔D and B↔C pairing detected (groups: 1–6, 2–7, 3–8, 4–9 or same). \
               Relationship: mixed signals/inner conflict can affect bonding—communicate clearly.",
        ..RULE
    },
    SpecialRule {
        features: &["person", "personality"],
        abcd_pairing: true,
        tags: &["dual_personality", "split_tendencies", "life_confusion"],
        note: "A↔D and B↔C pairing detected (groups: 1–6, 2–7, 3–8, 4–9 or same). \
               Personality: dual/split tendencies; life direction may feel confusing at times.",
        ..RULE
    },
    // === Leader rule ===
    SpecialRule {
        features: &["yearly"],
        leader_pattern: true,
        tags: &["born_leader", "leadership"],
        note: "Leader pattern detected (C/D, F/G, K/L in 1–2–3). \
               Yearly: born-leader energy—take charge, but avoid ego clashes.",
        ..RULE
    },
    SpecialRule {
        features: &["profession"],
        leader_pattern: true,
        tags: &["born_leader", "career_leadership"],
        note: "Leader pattern detected (C/D, F/G, K/L in 1–2–3). \
               Profession: born-leader profile—best in roles with responsibility and decision power.",
        ..RULE
    },
    SpecialRule {
        features: &["person", "personality"],
        leader_pattern: true,
        tags: &["leadership", "initiative"],
        note: "Leader pattern detected (C/D, F/G, K/L in 1–2–3). \
               Personality: strong leadership and initiative—channel it into clear goals.",
        ..RULE
    },
    // === Betrayal / back-stepping rule ===
    SpecialRule {
        features: &["daily"],
        betrayal_pattern: true,
        tags: &["betrayal_risk", "caution"],
        note_tpl: "Back-stepping/betrayal marker detected ({direction}). \
                   Daily: be careful with trust and confirmations; avoid sharing sensitive plans too quickly.",
        ..RULE
    },
    SpecialRule {
        features: &["monthly"],
        betrayal_pattern: true,
        tags: &["betrayal_risk", "caution"],
        note_tpl: "Back-stepping/betrayal marker detected ({direction}). \
                   Monthly: check agreements, verify intentions, and keep boundaries strong.",
        ..RULE
    },
    SpecialRule {
        features: &["yearly"],
        betrayal_pattern: true,
        tags: &["betrayal_risk", "caution"],
        note_tpl: "Back-stepping/betrayal marker detected ({direction}). \
                   Yearly: be selective with partnerships; document important commitments.",
        ..RULE
    },
    SpecialRule {
        features: &["relationship"],
        betrayal_pattern: true,
        tags: &["betrayal_risk", "relationship_trust"],
        note_tpl: "Back-stepping/betrayal marker detected ({direction}). \
                   Relationship: trust tests can appear—prefer clarity, honesty, and boundaries.",
        ..RULE
    },
    SpecialRule {
        features: &["person", "personality"],
        betrayal_pattern: true,
        tags: &["betrayal_risk", "trust_issues"],
        note_tpl: "Back-stepping/betrayal marker detected ({direction}). \
                   Personality: you may face trust challenges—choose people carefully and protect your energy.",
        ..RULE
    },
    // === AEG/DFG same-number triple rule-set (111/222/.../999) ===
    SpecialRule {
        features: &["daily"],
        triple_keys: &["AEG", "DFG"],
        triples_any: &SAME_TRIPLES,
        tags: &["negative_cycle", "accident_risk", "confusion", "dual_personality"],
        note: "AEG/DFG same-number triple (111/222/.../999) detected. \
               Daily: confusion/dual nature can rise; accident/bad incident risk if careless. \
               Digit mapping: 1→6, 2→7, 3→8, 4→9, and 5 is anytime.",
        ..RULE
    },
    SpecialRule {
        features: &["monthly"],
        triple_keys: &["AEG", "DFG"],
        triples_any: &SAME_TRIPLES,
        tags: &[
            "negative_cycle",
            "serious_illness_risk",
            "high_risk_emotional_phase",
            "confusion",
            "dual_personality",
        ],
        note: "AEG/DFG same-number triple (111/222/.../999) detected. \
               Monthly: serious illness/stress risk; inner conflict can rise—avoid isolation and seek support if overwhelmed. \
               Digit mapping: 1→6, 2→7, 3→8, 4→9, and 5 is anytime.",
        ..RULE
    },
    SpecialRule {
        features: &["yearly"],
        triple_keys: &["AEG", "DFG"],
        triples_any: &SAME_TRIPLES,
        tags: &["negative_cycle", "decision_confusion", "confusion", "dual_personality"],
        note: "AEG/DFG same-number triple (111/222/.../999) detected. \
               Yearly: confusion/indecision—avoid major irreversible decisions without guidance. \
               Digit mapping: 1→6, 2→7, 3→8, 4→9, and 5 is anytime.",
        ..RULE
    },
    // === AEG/DFG sandwich triple rule-set (1x1 / 2x2 / ... / 9x9) ===
    // Different trigger than the same-number set, same response intent.
    SpecialRule {
        features: &["daily"],
        triple_keys: &["AEG", "DFG"],
        triples_sandwich: true,
        tags: &["negative_cycle", "accident_risk", "confusion", "dual_personality"],
        note: "AEG/DFG sandwich triple (1x1/2x2/.../9x9) detected (e.g., 1x1 treated like 111). \
               Daily: confusion/dual nature can rise; accident/bad incident risk if careless. \
               Digit mapping: 1→6, 2→7, 3→8, 4→9, and 5 is anytime.",
        ..RULE
    },
    SpecialRule {
        features: &["monthly"],
        triple_keys: &["AEG", "DFG"],
        triples_sandwich: true,
        tags: &[
            "negative_cycle",
            "serious_illness_risk",
            "high_risk_emotional_phase",
            "confusion",
            "dual_personality",
        ],
        note: "AEG/DFG sandwich triple (1x1/2x2/.../9x9) detected (e.g., 2x2 treated like 222). \
               Monthly: serious illness/stress risk; inner conflict can rise—avoid isolation and seek support if overwhelmed. \
               Digit mapping: 1→6, 2→7, 3→8, 4→9, and 5 is anytime.",
        ..RULE
    },
    SpecialRule {
        features: &["yearly"],
        triple_keys: &["AEG", "DFG"],
        triples_sandwich: true,
        tags: &["negative_cycle", "decision_confusion", "confusion", "dual_personality"],
        note: "AEG/DFG sandwich triple (1x1/2x2/.../9x9) detected (e.g., 9x9 treated like 999). \
               Yearly: confusion/indecision—avoid major irreversible decisions without guidance. \
               Digit mapping: 1→6, 2→7, 3→8, 4→9, and 5 is anytime.",
        ..RULE
    },
];

// =============================================================================
// TESTS
// =============================================================================
