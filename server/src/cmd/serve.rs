//! Serve command - serve the compiled site

use std::path::Path;

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use super::load_config;
use crate::routes::create_router;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, site_root: &Path) -> Result<()> {
    tracing::info!(?config_path, port, ?site_root, "Starting server");

    let config = load_config(config_path)?;

    if !site_root.join("index.html").exists() {
        tracing::warn!(
            ?site_root,
            "No index.html in site root; build the frontend first"
        );
    }

    let app = create_router(site_root, &config, Utc::now().date_naive());
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Serving {} at http://{addr}", config.site.name);
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
