use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;

use crate::category;
use crate::config::PlannerConfig;
use crate::error::RestampError;
use crate::naming;
use crate::slots;
use crate::timeline;

/// One planned timestamp. Created once per input name during a planning pass
/// and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanEntry {
    pub name: String,
    pub effective: String,
    pub label: String,
    pub rank: usize,
    pub slot: i64,
    pub offset_seconds: i64,
    pub instant: DateTime<Utc>,
}

/// Plan a single folder name: normalize, classify, assign a slot, project
/// onto the timeline, then apply bias and optional even-second snapping.
pub fn plan_entry(name: &str, config: &PlannerConfig) -> Result<PlanEntry, RestampError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RestampError::Plan("empty folder name".to_string()));
    }

    let effective = naming::effective_name(trimmed, config);
    let key = category::classify(&effective);
    let rank = category::rank(key);
    let slot = slots::slot_within_category(&effective, config.slots_per_category);
    let nudge = if config.stable_nudge {
        slots::stable_nudge(&effective)
    } else {
        0
    };

    let offset_seconds = timeline::offset_seconds(
        rank,
        slot,
        nudge,
        config.seconds_between_items,
        config.slots_per_category,
    );
    let mut instant = timeline::project(offset_seconds, config.strategy)?;
    if config.bias_seconds != 0 {
        instant += Duration::seconds(config.bias_seconds);
    }
    if config.fat_safe {
        instant = timeline::snap_even_second(instant);
    }

    Ok(PlanEntry {
        name: trimmed.to_string(),
        effective,
        label: category::display_label(key),
        rank,
        slot,
        offset_seconds,
        instant,
    })
}

/// Single pass over the input names. A failure for one name is logged and
/// that name skipped; the rest of the plan proceeds. Entries come back in
/// input order, unsorted.
pub fn build_plan(names: &[String], config: &PlannerConfig) -> Vec<PlanEntry> {
    let mut plan = Vec::with_capacity(names.len());
    for name in names {
        match plan_entry(name, config) {
            Ok(entry) => plan.push(entry),
            Err(e) => eprintln!("[WARN] Failed to compute timestamp for {}: {}", name, e),
        }
    }
    plan
}

/// Presentation order for exports and verbose listings: newest first, input
/// order preserved among equal instants.
pub fn sorted_newest_first(plan: &[PlanEntry]) -> Vec<PlanEntry> {
    plan.iter()
        .cloned()
        .sorted_by(|a, b| b.instant.cmp(&a.instant))
        .collect()
}
