// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod runner;

use anyhow::{Context, Result};
use base::{config::DEFAULT_CONFIG_PATH, Config};
use runner::ServiceRunner;
use std::env;

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();
  base::dotenv::load().context("Failed to read .env")?;

  let config_path = env::var("SALARIES_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
  let config =
    Config::load(&config_path).with_context(|| format!("Failed to load {}", config_path))?;

  ServiceRunner::new(config, env::var("SJ_API_TOKEN").ok())
    .run()
    .await;

  Ok(())
}
