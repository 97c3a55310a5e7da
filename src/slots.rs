use crate::category;
use crate::lexorder;

/// The portion of an effective name that participates in ordering: the text
/// after the category prefix, dashes stripped. APPS always orders by the
/// constant APPS; DEFAULT names order by the whole effective name.
pub fn payload_for_effective(effective: &str) -> String {
    match category::classify(effective) {
        "APPS" => String::from("APPS"),
        "DEFAULT" => effective.replace('-', ""),
        key => effective
            .strip_prefix(key)
            .unwrap_or(effective)
            .replace('-', ""),
    }
}

/// Within-category slot for an effective name. The payload's lexicographic
/// fraction is scaled into the slot budget and saturated at the top so a
/// fraction that lands at or past 1.0 cannot escape the category.
pub fn slot_within_category(effective: &str, slots_per_category: u32) -> i64 {
    let payload = payload_for_effective(effective);
    let budget = i64::from(slots_per_category);
    let mut slot = (lexorder::lex_fraction(&payload) * budget as f64).floor() as i64;
    if slot >= budget {
        slot = budget - 1;
    }
    slot
}

/// Deterministic 0/1 tie-break for same-slot collisions: a 32-bit FNV-1a
/// accumulator over the effective name, folded to its low bit. Two raw names
/// with the same effective name still collide to the same slot and nudge;
/// that is accepted, not worked around.
pub fn stable_nudge(effective: &str) -> i64 {
    let mut hash: u32 = 2_166_136_261;
    for ch in effective.chars() {
        hash ^= ch as u32;
        hash = hash.wrapping_mul(16_777_619);
    }
    i64::from(hash & 1)
}
