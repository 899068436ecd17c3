use super::NodeId;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum UserType {
    Bot,
    Organization,
    User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub node_id: NodeId,
    pub avatar_url: String,
    pub url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub site_admin: bool,
}

#[cfg(test)]
mod test {
    use super::{User, UserType};

    #[test]
    fn invitee() {
        const USER_JSON: &str = r#"
            {
                "login": "octocat",
                "id": 1,
                "node_id": "MDQ6VXNlcjE=",
                "avatar_url": "https://github.com/images/error/octocat_happy.gif",
                "gravatar_id": "",
                "url": "https://api.github.com/users/octocat",
                "html_url": "https://github.com/octocat",
                "repos_url": "https://api.github.com/users/octocat/repos",
                "type": "User",
                "site_admin": false
            }
        "#;

        let user: User = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.node_id.id(), "MDQ6VXNlcjE=");
        assert_eq!(user.user_type, UserType::User);
    }

    #[test]
    fn bot() {
        const BOT_JSON: &str = r#"
            {
                "login": "dependabot[bot]",
                "id": 49699333,
                "node_id": "MDM6Qm90NDk2OTkzMzM=",
                "avatar_url": "https://avatars.githubusercontent.com/in/29110?v=4",
                "url": "https://api.github.com/users/dependabot%5Bbot%5D",
                "html_url": "https://github.com/apps/dependabot",
                "type": "Bot",
                "site_admin": false
            }
        "#;

        let user: User = serde_json::from_str(BOT_JSON).unwrap();
        assert_eq!(user.user_type, UserType::Bot);
    }
}
