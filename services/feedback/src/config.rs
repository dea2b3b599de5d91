use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";
pub const DEFAULT_STATIC_DIR: &str = "dist/public";

// Feedback service configuration sourced from environment variables, with an
// optional YAML file applied on top.
#[derive(Debug, Clone)]
pub struct FeedbackConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub static_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct FeedbackConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    static_dir: Option<String>,
}

impl FeedbackConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("FEEDBACK_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read FEEDBACK_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // `PORT` is honoured when no explicit bind address is given, which is
        // how most hosting platforms hand out the listening port.
        let bind_addr = match (lookup("FEEDBACK_BIND"), lookup("PORT")) {
            (Some(bind), _) => bind.parse().with_context(|| "parse FEEDBACK_BIND")?,
            (None, Some(port)) => {
                let port: u16 = port.parse().with_context(|| "parse PORT")?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            (None, None) => DEFAULT_BIND.parse().with_context(|| "parse default bind")?,
        };
        let metrics_bind = lookup("FEEDBACK_METRICS_BIND")
            .unwrap_or_else(|| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse FEEDBACK_METRICS_BIND")?;
        let static_dir = lookup("FEEDBACK_STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();
        Ok(Self {
            bind_addr,
            metrics_bind,
            static_dir,
        })
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: FeedbackConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse feedback config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.static_dir {
            self.static_dir = value.into();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = FeedbackConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config.bind_addr, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.metrics_bind, DEFAULT_METRICS_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn port_is_used_only_without_explicit_bind() {
        let config = FeedbackConfig::from_lookup(lookup(&[("PORT", "8081")])).expect("config");
        assert_eq!(config.bind_addr, "0.0.0.0:8081".parse::<SocketAddr>().unwrap());

        let config = FeedbackConfig::from_lookup(lookup(&[
            ("PORT", "8081"),
            ("FEEDBACK_BIND", "127.0.0.1:7000"),
        ]))
        .expect("config");
        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn invalid_values_report_the_variable() {
        let err = FeedbackConfig::from_lookup(lookup(&[("FEEDBACK_BIND", "nope")]))
            .expect_err("invalid bind");
        assert!(err.to_string().contains("FEEDBACK_BIND"));

        let err =
            FeedbackConfig::from_lookup(lookup(&[("PORT", "99999")])).expect_err("invalid port");
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn yaml_overrides_environment() {
        let mut config = FeedbackConfig::from_lookup(lookup(&[])).expect("config");
        config
            .apply_yaml("bind_addr: 127.0.0.1:6000\nstatic_dir: /srv/site\n")
            .expect("yaml");
        assert_eq!(config.bind_addr, "127.0.0.1:6000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.metrics_bind, DEFAULT_METRICS_BIND.parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));

        let err = config.apply_yaml("metrics_bind: [1, 2]").expect_err("bad yaml");
        assert!(err.to_string().contains("yaml"));
    }
}
