//! Library root configuration.
//!
//! The root is resolved once by the host and passed down explicitly, so an
//! unconfigured root is an ordinary value rather than process state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming the Mizar installation.
pub const MIZFILES_VAR: &str = "MIZFILES";

/// Directory below the root holding the library abstracts.
pub const ABSTR_DIR: &str = "abstr";

/// Extension of abstract files.
pub const ABSTRACT_EXT: &str = "abs";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MizarConfig {
    /// Root of the Mizar installation.
    #[serde(default)]
    pub mizfiles: Option<PathBuf>,
}

impl MizarConfig {
    pub fn new(mizfiles: Option<PathBuf>) -> Self {
        Self { mizfiles }
    }

    /// Read `MIZFILES` from the process environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(MIZFILES_VAR).and_then(|v| non_blank(&v.to_string_lossy())))
    }

    /// Read `mizfiles` from LSP initialization options. `mizar.mizfiles`
    /// wins over a top-level `mizfiles`; `None` when neither is set.
    pub fn from_options(options: Option<&serde_json::Value>) -> Option<Self> {
        let options = options?;
        let lookup = |scope: Option<&serde_json::Value>| {
            scope?.get("mizfiles")?.as_str().and_then(non_blank)
        };
        lookup(options.get("mizar"))
            .or_else(|| lookup(Some(options)))
            .map(|root| Self::new(Some(root)))
    }

    /// Path of the abstract file for `file_label`, e.g. `XBOOLE_0` maps to
    /// `<root>/abstr/xboole_0.abs`.
    pub fn abstract_path(&self, file_label: &str) -> Option<PathBuf> {
        let root = self.mizfiles.as_deref()?;
        Some(
            root.join(ABSTR_DIR)
                .join(format!("{}.{ABSTRACT_EXT}", file_label.to_lowercase())),
        )
    }
}

fn non_blank(s: &str) -> Option<PathBuf> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(PathBuf::from(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn abstract_path_lowercases_label() {
        let cfg = MizarConfig::new(Some(PathBuf::from("/opt/mizar")));
        assert_eq!(
            cfg.abstract_path("XBOOLE_0"),
            Some(PathBuf::from("/opt/mizar").join("abstr").join("xboole_0.abs"))
        );
    }

    #[test]
    fn unconfigured_has_no_paths() {
        assert_eq!(MizarConfig::default().abstract_path("TARSKI"), None);
    }

    #[test]
    fn options_name_the_root() {
        let cfg = MizarConfig::from_options(Some(&json!({ "mizfiles": "/mml" })));
        assert_eq!(cfg, Some(MizarConfig::new(Some(PathBuf::from("/mml")))));

        let cfg = MizarConfig::from_options(Some(&json!({
            "mizar": { "mizfiles": " /nested " }
        })));
        assert_eq!(cfg, Some(MizarConfig::new(Some(PathBuf::from("/nested")))));
    }

    #[test]
    fn nested_root_wins_over_top_level() {
        let both = json!({ "mizar": { "mizfiles": "/nested" }, "mizfiles": "/top" });
        assert_eq!(
            MizarConfig::from_options(Some(&both)).and_then(|c| c.mizfiles),
            Some(PathBuf::from("/nested"))
        );
    }

    #[test]
    fn empty_mizar_section_falls_through_to_top_level() {
        let opts = json!({ "mizar": {}, "mizfiles": "/top" });
        assert_eq!(
            MizarConfig::from_options(Some(&opts)).and_then(|c| c.mizfiles),
            Some(PathBuf::from("/top"))
        );

        let opts = json!({ "mizar": { "mizfiles": "  " }, "mizfiles": "/top" });
        assert_eq!(
            MizarConfig::from_options(Some(&opts)).and_then(|c| c.mizfiles),
            Some(PathBuf::from("/top"))
        );
    }

    #[test]
    fn absent_options_leave_root_to_caller() {
        assert_eq!(MizarConfig::from_options(None), None);
        assert_eq!(MizarConfig::from_options(Some(&json!({}))), None);
        assert_eq!(MizarConfig::from_options(Some(&json!({ "mizar": null }))), None);
    }

    #[test]
    fn deserializes_from_json() {
        let cfg: MizarConfig = serde_json::from_value(json!({ "mizfiles": "/m" })).unwrap();
        assert_eq!(cfg.mizfiles, Some(PathBuf::from("/m")));
        let cfg: MizarConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cfg, MizarConfig::default());
    }
}
