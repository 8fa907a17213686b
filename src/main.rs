//! Taskgate server entry point.

use std::sync::Arc;

use anyhow::Context;

use taskgate::config::AppConfig;
use taskgate::gateway::{self, state::AppState};
use taskgate::logging::init_logging;
use taskgate::store::{MemoryTaskStore, MemoryUserStore};
use taskgate::tasks::TaskService;
use taskgate::user_auth::{TokenService, UserService};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }

    let _guard = init_logging(&config);
    tracing::info!("starting taskgate (env: {env})");

    let secret = config
        .jwt_secret()
        .context("no JWT secret: set JWT_SECRET or auth.jwt_secret in config")?;

    let tokens = Arc::new(TokenService::new(&secret));
    let users = Arc::new(UserService::new(
        Arc::new(MemoryUserStore::new()),
        tokens.clone(),
    ));
    let tasks = Arc::new(TaskService::new(Arc::new(MemoryTaskStore::new())));

    let state = Arc::new(AppState::new(users, tasks, tokens));
    gateway::run_server(&config.gateway, state).await
}
