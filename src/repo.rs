use super::{NodeId, User};
use serde::Deserialize;

/// The abbreviated repository representation embedded in invitations
#[derive(Clone, Debug, Deserialize)]
pub struct InvitationRepository {
    pub id: u64,
    pub node_id: NodeId,
    pub name: String,
    pub full_name: String,
    pub owner: User,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
}
