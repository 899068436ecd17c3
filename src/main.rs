use github_invitations::{
    client::{Error, Result},
    Config, InvitationPermission, InvitationUpdate, RepositoryInvitation,
};
use log::{info, warn};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Options {
    #[structopt(short, long, parse(from_os_str))]
    /// config file to use
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "list")]
    /// List invitations addressed to the authenticated user
    List,

    #[structopt(name = "list-repo")]
    /// List pending invitations on a repository
    ListRepo { repository_id: u64 },

    #[structopt(name = "accept")]
    /// Accept an invitation
    Accept { invitation_id: u64 },

    #[structopt(name = "decline")]
    /// Decline an invitation
    Decline { invitation_id: u64 },

    #[structopt(name = "delete")]
    /// Delete a pending invitation on a repository
    Delete {
        repository_id: u64,
        invitation_id: u64,
    },

    #[structopt(name = "edit")]
    /// Change the permissions offered by a pending invitation
    Edit {
        repository_id: u64,
        invitation_id: u64,
        #[structopt(short, long)]
        /// one of read, triage, write, maintain or admin
        permission: InvitationPermission,
    },
}

fn print_invitation(invitation: &RepositoryInvitation) {
    let invitee = invitation
        .invitee
        .as_ref()
        .map(|user| user.login.as_str())
        .unwrap_or("-");

    println!(
        "{}\t{}\t{}\t{}",
        invitation.id, invitation.repository.full_name, invitee, invitation.permissions
    );
}

fn report(action: &str, invitation_id: u64, done: bool) -> Result<()> {
    if done {
        info!("{} invitation {}", action, invitation_id);
        Ok(())
    } else {
        warn!("invitation {} not found", invitation_id);
        Err(format!("invitation {} not found", invitation_id).into())
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let opts = Options::from_args();

    // set up logging, allowing info level logging by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match &opts.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let client = config.client()?;
    info!("using {}", client.base_url());
    if !client.is_authenticated() {
        warn!("no token configured, requests are unauthenticated");
    }

    let invitations = client.repository_invitations();

    match opts.command {
        Command::List => {
            for invitation in invitations.list_all_for_current_user().await? {
                print_invitation(&invitation);
            }
        }
        Command::ListRepo { repository_id } => {
            for invitation in invitations.list_all_for_repo(repository_id).await? {
                print_invitation(&invitation);
            }
        }
        Command::Accept { invitation_id } => {
            let accepted = invitations.accept(invitation_id).await?.into_inner();
            report("accepted", invitation_id, accepted)?;
        }
        Command::Decline { invitation_id } => {
            let declined = invitations.decline(invitation_id).await?.into_inner();
            report("declined", invitation_id, declined)?;
        }
        Command::Delete {
            repository_id,
            invitation_id,
        } => {
            let deleted = invitations
                .delete(repository_id, invitation_id)
                .await?
                .into_inner();
            report("deleted", invitation_id, deleted)?;
        }
        Command::Edit {
            repository_id,
            invitation_id,
            permission,
        } => {
            let update = InvitationUpdate::new(permission);
            let invitation = invitations
                .edit(repository_id, invitation_id, &update)
                .await?
                .into_inner();
            print_invitation(&invitation);
        }
    }

    Ok(())
}
