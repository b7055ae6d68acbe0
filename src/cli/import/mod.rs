//! Import command - registers a batch of users from a JSON file

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{NewUser, UserRepository};
use crate::infrastructure::user::UserService;

/// Arguments for the import command
#[derive(Args, Clone)]
pub struct ImportArgs {
    /// JSON file holding an array of `{login, fullName, password}` objects
    pub file: PathBuf,
}

/// Result of registering one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImportOutcome {
    Created { login: String },
    Rejected { login: String, error: String },
}

impl ImportOutcome {
    pub fn login(&self) -> &str {
        match self {
            Self::Created { login } | Self::Rejected { login, .. } => login,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Parse a JSON array of registration requests
pub fn parse_requests(json: &str) -> anyhow::Result<Vec<NewUser>> {
    serde_json::from_str(json).context("Failed to parse registration requests")
}

/// Register every request in order, one outcome per request
///
/// A rejected entry does not stop the batch. Logins repeated within the
/// batch are rejected after the first successful registration.
pub async fn import_users<R: UserRepository>(
    service: &UserService<R>,
    requests: Vec<NewUser>,
) -> Vec<ImportOutcome> {
    let mut outcomes = Vec::with_capacity(requests.len());

    for request in requests {
        let login = request.login.clone();

        let outcome = match service.create_new_user(request).await {
            Ok(_) => ImportOutcome::Created { login },
            Err(e) => {
                warn!(login = %login, error = %e, "Registration rejected");
                ImportOutcome::Rejected {
                    login,
                    error: e.to_string(),
                }
            }
        };

        outcomes.push(outcome);
    }

    outcomes
}

/// Run the import command
pub async fn run(args: ImportArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let json = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let requests = parse_requests(&json)?;

    let service = crate::create_user_service(&config.password)?;
    let outcomes = import_users(&service, requests).await;

    for outcome in &outcomes {
        println!("{}", serde_json::to_string(outcome)?);
    }

    let created = outcomes.iter().filter(|o| o.is_created()).count();
    info!(
        created,
        rejected = outcomes.len() - created,
        "Import finished"
    );

    let users = service.list_users().await?;
    println!("{}", serde_json::to_string(&users)?);

    Ok(())
}
