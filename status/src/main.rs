//! Lightweight development server: `GET /` answers `{"status":"ok"}`.
use anyhow::Result;

mod app;
mod config;
mod handlers;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
