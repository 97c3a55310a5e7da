use crate::config::PlannerConfig;

/// Built-in bare-name defaults, applied when no configured alias matches.
const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("OSDXMB", "APP_"),
    ("XEBPLUS", "APP_"),
    ("RESTART", "RAA_"),
    ("POWEROFF", "RAA_"),
    ("NEUTRINO", "RTE_"),
    ("BOOT", "SYS_"),
    ("EXPLOITS", "ZZY_"),
    ("BM", "ZZZ_"),
    ("MATRIXTEAM", "ZZZ_"),
    ("OPL", "ZZZ_"),
];

/// Resolve a raw folder name to its effective (canonically prefixed) form.
/// The effective name fully determines category and ordering. Dashes are not
/// stripped here; they are ignored later, during ordering only.
pub fn effective_name(raw: &str, config: &PlannerConfig) -> String {
    let upper = raw.trim().to_ascii_uppercase();

    // 1) Configured alias table
    if let Some(key) = config.alias_category(&upper) {
        return match key {
            "APPS" => String::from("APPS"),
            "DEFAULT" => upper,
            prefix => format!("{prefix}{upper}"),
        };
    }

    // 2) Built-in defaults
    for (name, prefix) in BUILTIN_PREFIXES {
        if upper == *name {
            return format!("{prefix}{upper}");
        }
    }

    // 3) Already prefixed, or destined for DEFAULT
    upper
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_get_their_prefix() {
        let config = PlannerConfig::default();
        assert_eq!(effective_name("BOOT", &config), "SYS_BOOT");
        assert_eq!(effective_name("osdxmb", &config), "APP_OSDXMB");
        assert_eq!(effective_name(" neutrino ", &config), "RTE_NEUTRINO");
        assert_eq!(effective_name("opl", &config), "ZZZ_OPL");
    }

    #[test]
    fn test_configured_alias_resolves_to_its_category() {
        let mut config = PlannerConfig::default();
        config
            .merge_alias_overlay(r#"{"GME_": ["CHESS"]}"#)
            .unwrap();
        config.validate().unwrap();
        assert_eq!(effective_name("chess", &config), "GME_CHESS");
    }

    #[test]
    fn test_apps_alias_collapses_to_literal_apps() {
        let mut config = PlannerConfig::default();
        config
            .merge_alias_overlay(r#"{"APPS": ["HOMEBREW"]}"#)
            .unwrap();
        config.validate().unwrap();
        assert_eq!(effective_name("homebrew", &config), "APPS");
    }

    #[test]
    fn test_unmatched_names_pass_through_uppercased() {
        let config = PlannerConfig::default();
        assert_eq!(effective_name("RANDOMFOLDER", &config), "RANDOMFOLDER");
        assert_eq!(effective_name("gme_chess", &config), "GME_CHESS");
        assert_eq!(effective_name("ZZZ_CUSTOM", &config), "ZZZ_CUSTOM");
    }

    #[test]
    fn test_builtins_apply_without_configured_aliases() {
        // Even with the alias table emptied by overlay-free construction,
        // step 2 still canonicalizes the well-known names.
        let config = PlannerConfig::default();
        assert_eq!(effective_name("exploits", &config), "ZZY_EXPLOITS");
        assert_eq!(effective_name("matrixteam", &config), "ZZZ_MATRIXTEAM");
    }
}
