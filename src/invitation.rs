use super::{DateTime, InvitationRepository, NodeId, User};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Permission level granted to the invitee once an invitation is accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationPermission {
    #[serde(alias = "pull")]
    Read,
    Triage,
    #[serde(alias = "push")]
    Write,
    Maintain,
    Admin,
}

impl InvitationPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationPermission::Read => "read",
            InvitationPermission::Triage => "triage",
            InvitationPermission::Write => "write",
            InvitationPermission::Maintain => "maintain",
            InvitationPermission::Admin => "admin",
        }
    }
}

impl fmt::Display for InvitationPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvitationPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let permission = match s {
            "read" | "pull" => InvitationPermission::Read,
            "triage" => InvitationPermission::Triage,
            "write" | "push" => InvitationPermission::Write,
            "maintain" => InvitationPermission::Maintain,
            "admin" => InvitationPermission::Admin,
            _ => return Err(format!("unknown permission '{}'", s)),
        };

        Ok(permission)
    }
}

/// A pending offer to collaborate on a repository
///
/// GitHub API docs: https://developer.github.com/v3/repos/invitations/
#[derive(Clone, Debug, Deserialize)]
pub struct RepositoryInvitation {
    pub id: u64,
    pub node_id: NodeId,
    pub repository: InvitationRepository,
    pub invitee: Option<User>,
    pub inviter: Option<User>,
    pub permissions: InvitationPermission,
    pub created_at: DateTime,
    #[serde(default)]
    pub expired: bool,
    pub url: String,
    pub html_url: String,
}

/// Request payload for updating a pending invitation
#[derive(Clone, Debug, Default, Serialize)]
pub struct InvitationUpdate {
    /// The permissions to grant the invitee. Must be set for the update to be sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<InvitationPermission>,
}

impl InvitationUpdate {
    pub fn new(permissions: InvitationPermission) -> Self {
        Self {
            permissions: Some(permissions),
        }
    }
}
