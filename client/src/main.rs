//! Dash Admin - Main Entry Point
//!
//! Terminal front end for the dating-app admin backend.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dash_client::commands::{self, ListQuery, Rendered};
use dash_client::commands::auth::LoginRequest;
use dash_client::commands::verification::Decision;
use dash_client::{render, AppState, Config};
use dash_common::UserStatus;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "dash-admin", version, about = "Administer the dating-app backend from a terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "DASH_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Check the stored session with the backend
    Validate,
    /// Counters, weekly activity and recent sign-ups
    Dashboard,
    /// List users
    Users {
        #[arg(long)]
        search: Option<String>,
        /// Open one user's detail panel
        #[arg(long, value_name = "ID")]
        show: Option<String>,
    },
    /// Change a user's status
    SetStatus {
        id: String,
        #[arg(value_parser = parse_status)]
        status: UserStatus,
    },
    /// List matches
    Matches {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_name = "ID")]
        show: Option<String>,
    },
    /// List pending verifications
    Verifications {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_name = "USER_ID")]
        show: Option<String>,
    },
    /// Approve or reject a verification
    Review {
        /// User id of the verification
        id: String,
        decision: DecisionArg,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DecisionArg {
    Approve,
    Reject,
}

impl From<DecisionArg> for Decision {
    fn from(arg: DecisionArg) -> Self {
        match arg {
            DecisionArg::Approve => Self::Approve,
            DecisionArg::Reject => Self::Reject,
        }
    }
}

fn parse_status(s: &str) -> Result<UserStatus, String> {
    s.parse().map_err(|e: dash_common::ParseStatusError| e.to_string())
}

async fn run(state: &AppState, command: Command) -> Rendered {
    match command {
        Command::Login { email, password } => {
            commands::auth::login(state, LoginRequest { email, password }).await
        }
        Command::Logout => commands::auth::logout(state),
        Command::Validate => commands::auth::validate(state).await,
        Command::Dashboard => commands::dashboard::dashboard(state).await,
        Command::Users { search, show } => {
            commands::users::list_users(state, ListQuery { search, show }).await
        }
        Command::SetStatus { id, status } => {
            commands::users::set_user_status(state, &id, status).await
        }
        Command::Matches { search, show } => {
            commands::matches::list_matches(state, ListQuery { search, show }).await
        }
        Command::Verifications { search, show } => {
            commands::verification::list_verifications(state, ListQuery { search, show }).await
        }
        Command::Review {
            id,
            decision,
            reason,
        } => commands::verification::review(state, &id, decision.into(), reason).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    dash_client::init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    debug!(base_url = %config.api_base_url, "Configuration loaded");

    let state = AppState::new(config).context("Failed to build API client")?;
    let rendered = run(&state, cli.command).await;

    if !rendered.notifications.is_empty() {
        eprintln!("{}", render::notifications(&rendered.notifications));
    }
    if !rendered.output.is_empty() {
        println!("{}", rendered.output);
    }

    if rendered.failed() {
        std::process::exit(1);
    }
    Ok(())
}
