//! Command-line flags. Anything set here overrides the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SubmitPolicy};

#[derive(Debug, Parser)]
#[command(name = "linkshrink", version, about = "Shorten long URLs from the terminal")]
pub struct Cli {
    /// Shorten this URL, print the result and exit instead of opening the UI.
    pub url: Option<String>,

    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Shortening Service endpoint.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Preferred custom short code.
    #[arg(long, value_name = "CODE")]
    pub custom: Option<String>,

    /// Fail instead of generating a code when the custom one is taken.
    #[arg(long)]
    pub no_fallback: bool,

    /// Behaviour when submitting while a request is still running.
    #[arg(long, value_enum)]
    pub policy: Option<SubmitPolicy>,
}

impl Cli {
    /// Load the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if let Some(custom) = &self.custom {
            config.service.custom = Some(custom.clone());
        }
        if self.no_fallback {
            config.service.use_fallback = false;
        }
        if let Some(policy) = self.policy {
            config.submit.policy = policy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_url_selects_one_shot() {
        let cli = Cli::try_parse_from(["linkshrink", "https://example.com"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn overrides_replace_file_values() {
        let cli = Cli::try_parse_from([
            "linkshrink",
            "--endpoint",
            "http://127.0.0.1:9/api",
            "--custom",
            "mine",
            "--no-fallback",
            "--policy",
            "ignore-while-requesting",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.service.endpoint, "http://127.0.0.1:9/api");
        assert_eq!(config.service.custom.as_deref(), Some("mine"));
        assert!(!config.service.use_fallback);
        assert_eq!(config.submit.policy, SubmitPolicy::IgnoreWhileRequesting);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::try_parse_from(["linkshrink"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["linkshrink", "--policy", "whatever"]).is_err());
    }
}
