use crate::{
    client::{
        Client, Error, PaginationOptions, Response, Result,
        MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW,
    },
    InvitationUpdate, RepositoryInvitation,
};
use reqwest::header::ACCEPT;

fn user_invitations() -> String {
    "user/repository_invitations".to_owned()
}

fn user_invitation(invitation_id: u64) -> String {
    format!("user/repository_invitations/{}", invitation_id)
}

fn repo_invitations(repository_id: u64) -> String {
    format!("repositories/{}/invitations", repository_id)
}

fn repo_invitation(repository_id: u64, invitation_id: u64) -> String {
    format!(
        "repositories/{}/invitations/{}",
        repository_id, invitation_id
    )
}

/// `RepositoryInvitationsClient` handles communication with the repository invitation related
/// methods of the GitHub API.
///
/// Every request carries the repository invitations preview media type.
///
/// GitHub API docs: https://developer.github.com/v3/repos/invitations/
pub struct RepositoryInvitationsClient<'a> {
    inner: &'a Client,
}

impl<'a> RepositoryInvitationsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Accept a repository invitation addressed to the authenticated user.
    ///
    /// Returns `false` if no such invitation exists.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/invitations/#accept-a-repository-invitation
    pub async fn accept(&self, invitation_id: u64) -> Result<Response<bool>> {
        let url = user_invitation(invitation_id);
        let response = self
            .inner
            .patch(&url)
            // TODO: remove custom Accept headers when APIs fully launch.
            .header(ACCEPT, MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW)
            .send()
            .await?;

        self.inner.no_content(response).await
    }

    /// Decline a repository invitation addressed to the authenticated user.
    ///
    /// Returns `false` if no such invitation exists.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/invitations/#decline-a-repository-invitation
    pub async fn decline(&self, invitation_id: u64) -> Result<Response<bool>> {
        let url = user_invitation(invitation_id);
        let response = self
            .inner
            .delete(&url)
            .header(ACCEPT, MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW)
            .send()
            .await?;

        self.inner.no_content(response).await
    }

    /// Delete a pending invitation on a repository.
    ///
    /// Returns `false` if the repository or invitation does not exist.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/invitations/#delete-a-repository-invitation
    pub async fn delete(&self, repository_id: u64, invitation_id: u64) -> Result<Response<bool>> {
        let url = repo_invitation(repository_id, invitation_id);
        let response = self
            .inner
            .delete(&url)
            .header(ACCEPT, MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW)
            .send()
            .await?;

        self.inner.no_content(response).await
    }

    /// List a single page of the invitations addressed to the authenticated user.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/invitations/#list-repository-invitations-for-the-authenticated-user
    pub async fn list_for_current_user(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Response<Vec<RepositoryInvitation>>> {
        self.list_invitations(&user_invitations(), options).await
    }

    /// List every invitation addressed to the authenticated user, following pagination until
    /// the last page.
    pub async fn list_all_for_current_user(&self) -> Result<Vec<RepositoryInvitation>> {
        self.inner
            .json_all(&user_invitations(), MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW)
            .await
    }

    /// List a single page of the pending invitations on a repository.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/invitations/#list-repository-invitations
    pub async fn list_for_repo(
        &self,
        repository_id: u64,
        options: Option<PaginationOptions>,
    ) -> Result<Response<Vec<RepositoryInvitation>>> {
        self.list_invitations(&repo_invitations(repository_id), options)
            .await
    }

    /// List every pending invitation on a repository, following pagination until the last
    /// page.
    pub async fn list_all_for_repo(&self, repository_id: u64) -> Result<Vec<RepositoryInvitation>> {
        self.inner
            .json_all(
                &repo_invitations(repository_id),
                MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW,
            )
            .await
    }

    /// Update the permissions granted by a pending repository invitation.
    ///
    /// The update must name a permission; an empty update is rejected without contacting
    /// GitHub.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/invitations/#update-a-repository-invitation
    pub async fn edit(
        &self,
        repository_id: u64,
        invitation_id: u64,
        update: &InvitationUpdate,
    ) -> Result<Response<RepositoryInvitation>> {
        if update.permissions.is_none() {
            return Err(Error::InvalidArgument("update"));
        }

        let url = repo_invitation(repository_id, invitation_id);
        let response = self
            .inner
            .patch(&url)
            .header(ACCEPT, MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW)
            .json(update)
            .send()
            .await?;

        self.inner.json(response).await
    }

    async fn list_invitations(
        &self,
        url: &str,
        options: Option<PaginationOptions>,
    ) -> Result<Response<Vec<RepositoryInvitation>>> {
        let response = self
            .inner
            .get(url)
            .header(ACCEPT, MEDIA_TYPE_REPOSITORY_INVITATIONS_PREVIEW)
            .query(&options)
            .send()
            .await?;

        self.inner.json(response).await
    }
}
