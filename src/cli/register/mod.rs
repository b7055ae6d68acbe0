//! Register command - creates one user and prints it as JSON

use clap::Args;
use tracing::info;

use crate::domain::NewUser;

/// Arguments for the register command
#[derive(Args, Clone)]
pub struct RegisterArgs {
    /// Login, unique per user
    #[arg(long)]
    pub login: String,

    /// Full display name
    #[arg(long)]
    pub full_name: String,

    /// Raw password
    #[arg(long)]
    pub password: String,
}

impl From<RegisterArgs> for NewUser {
    fn from(args: RegisterArgs) -> Self {
        NewUser::new(args.login, args.full_name, args.password)
    }
}

/// Run the register command
pub async fn run(args: RegisterArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let service = crate::create_user_service(&config.password)?;
    let user = service.create_new_user(args.into()).await?;

    info!(login = %user.login(), "Registered user");
    println!("{}", serde_json::to_string(&user)?);

    Ok(())
}
