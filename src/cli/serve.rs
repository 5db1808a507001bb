//! `eduai serve`

use std::net::IpAddr;
use std::sync::Arc;

use crate::channels::web::{GatewayState, start_server};
use crate::config::Config;
use crate::guidance::GuidanceService;
use crate::llm::create_text_generator;

/// Start the gateway and run until Ctrl-C.
pub async fn run_serve_command(host: Option<IpAddr>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(host) = host {
        config.gateway.host = host;
    }
    if let Some(port) = port {
        config.gateway.port = port;
    }

    let generator = create_text_generator(&config.llm)?;
    let state = Arc::new(GatewayState::demo(&config, GuidanceService::new(generator)));
    let addr = start_server(&config.gateway, state.clone()).await?;

    println!("EduAI listening on http://{addr}");

    tokio::signal::ctrl_c().await?;
    state.shutdown().await;
    Ok(())
}
