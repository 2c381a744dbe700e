use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mirror-relay",
    about = "Bidirectional Gitea/GitHub repository mirror relay",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from a TOML file instead of the environment
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the relay HTTP listener
    Serve(ServeArgs),
    /// Fire Gitea's mirror-sync endpoint once and report the outcome
    Trigger(TriggerArgs),
    /// Print the effective configuration with secrets redacted
    CheckConfig(CheckConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Override the configured listen address
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Args)]
pub struct TriggerArgs {}

#[derive(Args)]
pub struct CheckConfigArgs {}
