//! `gitfind` entry point: look up a GitHub profile once, or run an
//! interactive session on standard input.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use gitfind::config::GitfindSettings;
use gitfind::domain::ProfileLookupFlow;
use gitfind::inbound::terminal::{TerminalNotifier, render, run_session};
use gitfind::outbound::github::{GitHubHttpIdentity, GitHubHttpSource};
use ortho_config::OrthoConfig;
use tokio::io::BufReader;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `gitfind` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gitfind",
    about = "Look up a GitHub profile and its public repositories",
    version
)]
struct CliArgs {
    /// Login to look up. Starts an interactive session when omitted.
    #[arg(value_name = "login")]
    login: Option<String>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let settings = GitfindSettings::load_from_iter([OsString::from("gitfind")])
        .map_err(|error| eyre!("load configuration: {error}"))?;
    init_tracing(settings.log_json);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args, &settings))
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn async_main(args: CliArgs, settings: &GitfindSettings) -> Result<ExitCode> {
    let base_url = settings
        .api_base_url()
        .wrap_err("resolve GitHub API base URL")?;
    let source = GitHubHttpSource::with_identity(
        base_url,
        settings.request_timeout(),
        GitHubHttpIdentity {
            user_agent: settings.user_agent().to_owned(),
        },
    )
    .wrap_err("build GitHub HTTP client")?;
    let flow = ProfileLookupFlow::new(
        Arc::new(source),
        Arc::new(TerminalNotifier::new(io::stderr())),
    );

    let mut stdout = io::stdout().lock();
    if let Some(login) = args.login {
        flow.update_identifier(login);
        let outcome = flow.trigger_lookup().await;
        writeln!(stdout, "{}", render(&flow.view())).wrap_err("write view")?;
        return Ok(if outcome.is_committed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    info!("starting interactive session");
    run_session(&flow, BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
        .wrap_err("interactive session")?;
    Ok(ExitCode::SUCCESS)
}
