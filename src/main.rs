//! Server binary for the Paycheck Calculation Engine.
//!
//! Serves the form-submission variant on `/` and the JSON API on
//! `/api/calculate`. Pay rules are the built-in fixed constants unless a
//! YAML rules file is passed as the first argument.

use paycheck_engine::api::{AppState, create_router};
use paycheck_engine::calculation::PayCalculator;
use paycheck_engine::config::RulesLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let loader = match std::env::args().nth(1) {
        Some(path) => RulesLoader::load(&path)?,
        None => RulesLoader::builtin(),
    };
    let calculator = PayCalculator::new(loader.rules().clone());
    let state = AppState::new(calculator);

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Paycheck calculator listening on {}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
