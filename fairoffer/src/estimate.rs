use crate::{AnswerRecord, Condition};

/// Base applied when the stored value label is missing or unrecognized.
const DEFAULT_BASE: f64 = 200_000.0;

/// Multiplier applied when no condition has been recorded.
const DEFAULT_MULTIPLIER: f64 = 0.85;

/// Representative base value for each bucketed range label.
const VALUE_BASES: [(&str, f64); 7] = [
    ("Under $100,000", 75_000.0),
    ("$100,000 - $250,000", 175_000.0),
    ("$250,000 - $500,000", 375_000.0),
    ("$500,000 - $750,000", 625_000.0),
    ("$750,000 - $1,000,000", 875_000.0),
    ("$1,000,000 - $2,000,000", 1_500_000.0),
    ("Over $2,000,000", 2_500_000.0),
];

/// Derive the provisional cash-offer estimate from a record.
///
/// The bucketed `current_value` label maps to a representative base and the
/// recorded condition scales it; the result is rounded to the nearest whole
/// dollar. Lookup misses fall back to fixed defaults on purpose — the
/// function is total over every reachable record, deterministic, and does
/// no I/O. This is a placeholder heuristic, not a pricing model.
pub fn estimate(record: &AnswerRecord) -> u64 {
    let base = VALUE_BASES
        .iter()
        .find(|(label, _)| *label == record.current_value)
        .map_or(DEFAULT_BASE, |(_, base)| *base);
    (base * condition_multiplier(record.condition)).round() as u64
}

fn condition_multiplier(condition: Option<Condition>) -> f64 {
    match condition {
        Some(Condition::Excellent) => 0.95,
        Some(Condition::Good) => 0.90,
        Some(Condition::Fair) => 0.85,
        Some(Condition::Poor) => 0.75,
        None => DEFAULT_MULTIPLIER,
    }
}
