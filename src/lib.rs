//! Types and client for GitHub's v3 repository invitations API
//! https://developer.github.com/v3/repos/invitations/

pub mod client;
mod common;
mod config;
mod invitation;
mod repo;
mod user;

pub use client::Client;
pub use common::*;
pub use config::{Config, ConfigError, TOKEN_ENV};
pub use invitation::*;
pub use repo::*;
pub use user::*;
