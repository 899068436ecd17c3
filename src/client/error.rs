//! Error type for Github Client

use crate::ConfigError;
use reqwest::StatusCode;
use serde::Deserialize;
use std::{borrow::Cow, io};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Io error")]
    Io(#[from] io::Error),

    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("config error")]
    Config(#[from] ConfigError),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("invalid argument `{0}`")]
    InvalidArgument(&'static str),

    #[error("`{0}` `{1:?}`")]
    GithubClientError(StatusCode, GithubClientError),
}

impl Error {
    /// The HTTP status GitHub answered with, if the error came from an API response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::GithubClientError(status, _) => Some(*status),
            Error::Reqwest(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Github Error Responses
// https://developer.github.com/v3/#client-errors
#[derive(Debug, Default, Deserialize)]
pub struct GithubClientError {
    pub message: Option<String>,
    pub errors: Option<Vec<GithubClientErrorType>>,
    pub documentation_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GithubClientErrorType {
    Code {
        resource: String,
        field: String,
        code: String,
    },
    Message(String),
}
