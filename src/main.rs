use clap::{Parser, Subcommand};
use std::process::ExitCode;

use tudo::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_login, cmd_logout, cmd_tui, cmd_whoami,
};

#[derive(Parser)]
#[command(name = "tudo")]
#[command(about = "Terminal client for a remote to-do service")]
#[command(version)]
struct Cli {
    /// Running without a subcommand opens the todo list
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a user id for subsequent runs
    Login {
        /// Numeric user id on the to-do service
        user_id: u64,

        /// API token sent as a bearer Authorization header
        #[arg(long)]
        token: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (api.base_url, auth.token)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api.base_url, auth.token)
        key: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(),

        Some(Commands::Login { user_id, token }) => cmd_login(user_id, token.as_deref()),
        Some(Commands::Logout) => cmd_logout(),
        Some(Commands::Whoami) => cmd_whoami(),

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
