use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use relay_server::{AppState, RelayConfig, RelayServer};
use relay_signature::SignatureScheme;
use relay_sync::{redact_url, HttpMirrorTrigger, RemoteMirror, SyncOutcome};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Serve(args) => block_on(cmd_serve(config, args)),
        Command::Trigger(_) => block_on(cmd_trigger(config)),
        Command::CheckConfig(_) => cmd_check_config(config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RelayConfig> {
    let config = match path {
        Some(path) => RelayConfig::from_toml_file(path)?,
        None => RelayConfig::from_env()?,
    };
    Ok(config)
}

fn block_on<F: Future<Output = anyhow::Result<()>>>(fut: F) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(fut)
}

async fn cmd_serve(mut config: RelayConfig, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    let state = AppState::production(config);
    RelayServer::new(state).serve().await?;
    Ok(())
}

async fn cmd_trigger(config: RelayConfig) -> anyhow::Result<()> {
    let trigger = HttpMirrorTrigger::new(
        &config.gitea.base_url,
        &config.gitea.repo_owner,
        &config.gitea.repo_name,
        config.gitea.admin_token.clone(),
    );
    println!("POST {}", trigger.endpoint().bold());
    match RemoteMirror::new(Arc::new(trigger)).sync().await {
        SyncOutcome::Synced => {
            println!("{} mirror sync triggered", "✓".green().bold());
            Ok(())
        }
        SyncOutcome::Failed { reason } => anyhow::bail!("mirror sync failed: {reason}"),
    }
}

fn cmd_check_config(config: RelayConfig) -> anyhow::Result<()> {
    println!("bind address:  {}", config.bind_addr.to_string().bold());
    println!(
        "gitea repo:    {}/{} via {}",
        config.gitea.repo_owner.bold(),
        config.gitea.repo_name.bold(),
        config.gitea.base_url
    );
    println!(
        "github repo:   {}/{}",
        config.github.repo_owner.bold(),
        config.github.repo_name.bold()
    );
    println!("clone url:     {}", redact_url(&config.gitea_clone_url()));
    println!("push url:      {}", redact_url(&config.github_push_url()));

    match config.secret() {
        Some(secret) => {
            println!("webhook secret: {}", "set".green().bold());
            // Header values a sender would attach to an empty `{}` payload,
            // handy for curl-level smoke tests.
            let probe = b"{}";
            println!(
                "  probe X-Gitea-Signature:   {}",
                relay_signature::compute(probe, secret, SignatureScheme::RawHex)
            );
            println!(
                "  probe X-Hub-Signature-256: {}",
                relay_signature::compute(probe, secret, SignatureScheme::PrefixedHex)
            );
        }
        None => {
            println!(
                "webhook secret: {} — signature verification is disabled",
                "NOT SET".red().bold()
            );
        }
    }
    Ok(())
}
