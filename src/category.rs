/// Category keys in priority order, newest first. Rank is the index into
/// this sequence; DEFAULT is the catch-all for names with no known prefix.
pub const CATEGORY_ORDER: &[&str] = &[
    "APP_", "APPS", "PS1_", "EMU_", "GME_", "DST_", "DBG_", "RAA_", "RTE_", "DEFAULT", "SYS_",
    "ZZY_", "ZZZ_",
];

/// Returns the category key for an effective name, testing prefixes in
/// priority order. APPS matches exactly, SYS_ matches its prefix or the bare
/// name SYS, everything else is a plain prefix test.
pub fn classify(effective: &str) -> &'static str {
    for &key in CATEGORY_ORDER {
        let matched = match key {
            "DEFAULT" => false,
            "APPS" => effective == "APPS",
            "SYS_" => effective.starts_with("SYS_") || effective == "SYS",
            prefix => effective.starts_with(prefix),
        };
        if matched {
            return key;
        }
    }
    "DEFAULT"
}

/// Index of a key within the fixed category order. Every classification
/// result is a member of CATEGORY_ORDER, so a miss here is a programming
/// error rather than a runtime condition.
pub fn rank(key: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|&candidate| candidate == key)
        .unwrap_or_else(|| panic!("unknown category key: {key}"))
}

/// Cosmetic label used by the dry-run exporter: prefixed categories get a
/// trailing star, APPS and DEFAULT stand alone.
pub fn display_label(key: &str) -> String {
    match key {
        "APPS" | "DEFAULT" => key.to_string(),
        _ => format!("{key}*"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_prefixed_names() {
        assert_eq!(classify("APP_OSDXMB"), "APP_");
        assert_eq!(classify("GME_FINALFANTASY"), "GME_");
        assert_eq!(classify("ZZZ_OPL"), "ZZZ_");
    }

    #[test]
    fn test_apps_matches_exactly() {
        assert_eq!(classify("APPS"), "APPS");
        assert_eq!(classify("APPSTORE"), "DEFAULT");
    }

    #[test]
    fn test_sys_matches_prefix_or_bare_name() {
        assert_eq!(classify("SYS_BOOT"), "SYS_");
        assert_eq!(classify("SYS"), "SYS_");
        assert_eq!(classify("SYSTEM"), "DEFAULT");
    }

    #[test]
    fn test_unknown_names_fall_back_to_default() {
        assert_eq!(classify("RANDOMFOLDER"), "DEFAULT");
        assert_eq!(classify(""), "DEFAULT");
    }

    #[test]
    fn test_rank_is_total_over_the_order() {
        for (idx, key) in CATEGORY_ORDER.iter().enumerate() {
            assert_eq!(rank(key), idx);
        }
        assert_eq!(rank("APP_"), 0);
        assert_eq!(rank("DEFAULT"), 9);
        assert_eq!(rank("SYS_"), 10);
        assert_eq!(rank("ZZZ_"), 12);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(display_label("APP_"), "APP_*");
        assert_eq!(display_label("APPS"), "APPS");
        assert_eq!(display_label("DEFAULT"), "DEFAULT");
    }
}
