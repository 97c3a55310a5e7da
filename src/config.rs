use std::collections::HashMap;

use serde::Deserialize;

use crate::category::CATEGORY_ORDER;
use crate::error::RestampError;
use crate::timeline::TimelineStrategy;

// FAT-safe default spacing: FAT mtime has 2-second granularity.
pub const DEFAULT_SECONDS_BETWEEN_ITEMS: u32 = 2;

// 43,200 slots at 2 seconds fills exactly one day per category, so each
// category lands on its own date in a file browser.
pub const DEFAULT_SLOTS_PER_CATEGORY: u32 = 43_200;

/// Bare (unprefixed) folder names treated as members of a category.
#[derive(Clone, Debug)]
pub struct AliasGroup {
    pub key: &'static str,
    pub names: Vec<String>,
}

/// On-disk shape of a user alias overlay: category key to extra bare names.
#[derive(Debug, Deserialize)]
pub struct AliasOverlay(pub HashMap<String, Vec<String>>);

/// Immutable planner configuration. Built once at startup, validated, then
/// passed by reference into every planning call; there is no process-wide
/// mutable state.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    pub seconds_between_items: u32,
    pub slots_per_category: u32,
    pub strategy: TimelineStrategy,
    pub stable_nudge: bool,
    pub fat_safe: bool,
    pub bias_seconds: i64,
    aliases: Vec<AliasGroup>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            seconds_between_items: DEFAULT_SECONDS_BETWEEN_ITEMS,
            slots_per_category: DEFAULT_SLOTS_PER_CATEGORY,
            strategy: TimelineStrategy::ForwardAnchor,
            stable_nudge: false,
            fat_safe: false,
            bias_seconds: 0,
            aliases: default_alias_groups(),
        }
    }
}

fn default_alias_groups() -> Vec<AliasGroup> {
    let defaults: &[(&str, &[&str])] = &[
        ("APP_", &["OSDXMB", "XEBPLUS"]),
        ("RAA_", &["RESTART", "POWEROFF"]),
        ("RTE_", &["NEUTRINO"]),
        ("SYS_", &["BOOT"]),
        ("ZZY_", &["EXPLOITS"]),
        ("ZZZ_", &["BM", "MATRIXTEAM", "OPL"]),
    ];

    CATEGORY_ORDER
        .iter()
        .map(|&key| AliasGroup {
            key,
            names: defaults
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, names)| names.iter().map(|n| n.to_string()).collect())
                .unwrap_or_default(),
        })
        .collect()
}

impl PlannerConfig {
    /// Category whose alias set contains the given uppercased bare name, if
    /// any. Groups are consulted in the fixed category order, so a name
    /// configured under two categories resolves to the earlier one.
    pub fn alias_category(&self, upper: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|group| group.names.iter().any(|n| n == upper))
            .map(|group| group.key)
    }

    /// Merge a user overlay (JSON text mapping category key to extra bare
    /// names) into the built-in alias groups.
    pub fn merge_alias_overlay(&mut self, json: &str) -> Result<(), RestampError> {
        let AliasOverlay(overlay) = serde_json::from_str(json)?;

        for (key, names) in overlay {
            let key = key.trim().to_ascii_uppercase();
            let group = self
                .aliases
                .iter_mut()
                .find(|group| group.key == key)
                .ok_or_else(|| {
                    RestampError::Config(format!("unknown category key in alias overlay: {key}"))
                })?;
            group.names.extend(names);
        }
        Ok(())
    }

    /// Check spacing and alias entries, normalizing alias names in place.
    /// Must succeed before any planning begins.
    pub fn validate(&mut self) -> Result<(), RestampError> {
        if self.seconds_between_items == 0 {
            return Err(RestampError::Config(
                "seconds-between-items must be positive".to_string(),
            ));
        }
        if self.slots_per_category == 0 {
            return Err(RestampError::Config(
                "slots-per-category must be positive".to_string(),
            ));
        }

        let mut seen: HashMap<String, &'static str> = HashMap::new();
        for group in &mut self.aliases {
            let mut normalized = Vec::with_capacity(group.names.len());
            for name in group.names.drain(..) {
                let upper = name.trim().to_ascii_uppercase();
                if upper.is_empty() {
                    return Err(RestampError::Config(format!(
                        "empty alias entry under category {}",
                        group.key
                    )));
                }
                match seen.get(upper.as_str()) {
                    // Duplicate within the same group: drop silently.
                    Some(owner) if *owner == group.key => {}
                    // Duplicate across groups: first category wins.
                    Some(owner) => {
                        eprintln!(
                            "[WARN] Alias {} appears under both {} and {}; keeping {}",
                            upper, owner, group.key, owner
                        );
                    }
                    None => {
                        seen.insert(upper.clone(), group.key);
                        normalized.push(upper);
                    }
                }
            }
            group.names = normalized;
        }
        Ok(())
    }
}
