use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use eduai::cli::{Cli, Command, run_ask_command, run_recommend_command, run_serve_command};

const DEFAULT_LOG_FILTER: &str = "eduai=info,eduai_guidance=info,tower_http=info";

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so `ask`/`recommend` output stays pipeable.
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Serve { host, port } => run_serve_command(host, port).await,
        Command::Ask {
            message,
            profile,
            templates_only,
        } => run_ask_command(&message, profile, templates_only).await,
        Command::Recommend { degree, goals } => run_recommend_command(degree, goals),
    }
}
