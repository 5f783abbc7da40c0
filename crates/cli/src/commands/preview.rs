use anyhow::{Context, Result};
use axum::Router;
use promptsite_core::STYLESHEET_FILE;
use std::{net::SocketAddr, path::Path, path::PathBuf};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Serve a generated site from the output directory.
///
/// Requests map straight onto files; `/` serves `index.html` when the
/// structure produced one.
pub async fn run(output: Option<PathBuf>, config: Option<PathBuf>, port: u16) -> Result<()> {
    let output = match output {
        Some(output) => output,
        None => super::load_config(config.as_deref())?.output_dir,
    };

    println!("🌐 Starting preview server...");
    println!("   Site: {}", output.display());

    if !output.is_dir() {
        anyhow::bail!(
            "Output directory does not exist: {}\nRun 'promptsite generate' first",
            output.display()
        );
    }
    if !output.join(STYLESHEET_FILE).exists() {
        eprintln!(
            "   ⚠ Warning: {} not found, pages will render unstyled",
            STYLESHEET_FILE
        );
    }

    let app = router(&output);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(output: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(output).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}
