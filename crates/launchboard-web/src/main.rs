mod handlers;
mod openapi;
mod port;
mod state;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use clap::Parser;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use launchboard_core::api::schema::InstanceInfo;
use launchboard_core::dataset::LaunchTable;

use openapi::ApiDoc;
use state::{SharedState, WebAppInner};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// ============================================================
// CLI
// ============================================================

#[derive(Parser)]
#[command(name = "launchboard-web", about = "launch records dashboard server", version = launchboard_core::VERSION)]
struct Args {
    /// Port to listen on. Without it, 8050 is probed and 8051-8055 tried
    /// as fallbacks.
    port: Option<String>,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "LAUNCHBOARD_HOST")]
    host: String,

    /// Path to the launch records CSV.
    #[arg(long, default_value = "data/launch_records.csv", env = "LAUNCHBOARD_DATA")]
    data: PathBuf,
}

// ============================================================
// Main
// ============================================================

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launchboard_web=info".parse().unwrap()),
        )
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(async_main(args));
}

async fn async_main(args: Args) {
    let table = match LaunchTable::from_path(&args.data) {
        Ok(table) => table,
        Err(e) => {
            error!(path = %args.data.display(), error = %e, "failed to load launch records");
            process::exit(1);
        }
    };
    info!(
        version = launchboard_core::VERSION,
        rows = table.len(),
        path = %args.data.display(),
        "dataset loaded"
    );

    let Some(chosen_port) = port::resolve_port(&args.host, args.port.as_deref()) else {
        error!("no available ports found in range 8050-8055, specify one: launchboard-web <port>");
        process::exit(1);
    };

    let instance = InstanceInfo {
        hostname: get_hostname(),
        source: args
            .data
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.data.display().to_string()),
    };

    let state: SharedState = Arc::new(WebAppInner { table, instance });

    let app = Router::new()
        .route("/api/v1/health", get(handlers::handle_health))
        .route("/api/v1/schema", get(handlers::handle_schema))
        .route(
            "/api/v1/charts/success-pie",
            get(handlers::handle_success_pie),
        )
        .route(
            "/api/v1/charts/payload-scatter",
            get(handlers::handle_payload_scatter),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(get(handlers::serve_frontend))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    info!(host = %args.host, port = chosen_port, "listening");

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), chosen_port))
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server error");
}

/// Machine hostname via the `hostname` command. `None` when unavailable.
fn get_hostname() -> Option<String> {
    process::Command::new("hostname")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
