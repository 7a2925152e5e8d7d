use std::time::Duration;

pub const DEFAULT_ASSET_TIMEOUT_SECS: u64 = 8;

/// Server settings read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Upper bound for fetching one decorative animation.
    pub asset_timeout: Duration,
    pub user_agent: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let asset_timeout = match lookup("ASSET_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(value = %raw, "invalid ASSET_TIMEOUT_SECS, using default");
                    DEFAULT_ASSET_TIMEOUT_SECS
                }
            },
            None => DEFAULT_ASSET_TIMEOUT_SECS,
        };

        Self {
            asset_timeout: Duration::from_secs(asset_timeout),
            user_agent: lookup("ASSET_USER_AGENT")
                .unwrap_or_else(|| format!("wipe_landing/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> SiteConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = SiteConfig::default();
        assert_eq!(config.asset_timeout, Duration::from_secs(8));
        assert!(config.user_agent.starts_with("wipe_landing/"));
    }

    #[test]
    fn reads_overrides() {
        let config = config_with(&[("ASSET_TIMEOUT_SECS", " 3 "), ("ASSET_USER_AGENT", "landing-bot")]);
        assert_eq!(config.asset_timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "landing-bot");
    }

    #[test]
    fn bad_timeout_falls_back() {
        assert_eq!(config_with(&[("ASSET_TIMEOUT_SECS", "soon")]).asset_timeout, Duration::from_secs(8));
        assert_eq!(config_with(&[("ASSET_TIMEOUT_SECS", "0")]).asset_timeout, Duration::from_secs(8));
    }
}
