use crate::client::{self, Client};
use serde::Deserialize;
use std::{env, fs, io, path::Path};
use thiserror::Error;

/// Environment variable consulted when the config file carries no token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error")]
    Io(#[from] io::Error),
    #[error("toml parsing error")]
    De(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Base URL of the GitHub API, for use with GitHub Enterprise
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub token: Option<String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn token(&self) -> Option<String> {
        self.token.clone().or_else(|| env::var(TOKEN_ENV).ok())
    }

    pub fn client(&self) -> client::Result<Client> {
        let mut builder = Client::builder();

        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        if let Some(token) = self.token() {
            builder = builder.github_api_token(token);
        }

        builder.build()
    }
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError};

    #[test]
    fn full_config() {
        let config = Config::parse(
            r#"
            base_url = "https://github.example.com/api/v3"
            user_agent = "invitation-bot"
            token = "0123456789abcdef"
            "#,
        )
        .unwrap();

        assert_eq!(config.token().as_deref(), Some("0123456789abcdef"));

        let client = config.client().unwrap();
        assert_eq!(client.base_url(), "https://github.example.com/api/v3/");
        assert_eq!(client.user_agent(), "invitation-bot");
        assert!(client.is_authenticated());
    }

    #[test]
    fn empty_config() {
        let config = Config::parse("").unwrap();
        assert!(config.base_url.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn bad_config() {
        assert!(matches!(
            Config::parse("base_url = 3"),
            Err(ConfigError::De(_))
        ));
        assert!(matches!(
            Config::from_file("/nonexistent/invitations.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
