use anyhow::Result;
use clap::{Parser, Subcommand};
use hostmetrics::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[derive(Parser, Debug)]
#[command(name = "hostmetrics", version, about = "Host CPU, memory, disk and network metrics")]
struct Cli {
    /// Path to config.toml (overrides CONFIG_FILE)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Collect one report, print it and exit
    Report {
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `report --json` output stays parseable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut app_config = config::AppConfig::load(cli.config.as_deref())?;
    let collector = Arc::new(collector::Collector::new(
        Arc::new(sysinfo_repo::SysinfoRepo::new()),
        sampler::SAMPLE_INTERVAL,
        app_config.disk_path(),
    ));

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Report { json } => {
            let report = collector
                .collect()
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to collect report"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", console::render(&report));
            }
            Ok(())
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                app_config.server.host = host;
            }
            if let Some(port) = port {
                app_config.server.port = port;
            }
            serve(collector, &app_config).await
        }
    }
}

async fn serve(
    collector: Arc<collector::Collector>,
    app_config: &config::AppConfig,
) -> Result<()> {
    let app = routes::app(collector.clone());
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(disk_path = collector.disk_path(), "Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
        }
    }

    Ok(())
}
