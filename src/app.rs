//! Command line and server startup.

use clap::Parser;
use color_eyre::eyre::Result;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tonic::transport::Server;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::board::{Board, FileTaskStore, MemoryTaskStore, TaskStore};
use crate::config::{default_config_path, load_config};
use crate::cors::{build_cors_layer, DEFAULT_CORS_ORIGINS};
use crate::grpc_logging::GrpcLoggingLayer;
use crate::logging::{init_logging, parse_rotation, LogConfig};
use crate::server::proto::task_board_server::TaskBoardServer;
use crate::server::{TaskBoardService, FILE_DESCRIPTOR_SET};
use crate::utils::taskboard_home;

pub const DEFAULT_ADDR: &str = "127.0.0.1:50061";

/// Taskboard daemon - task columns with drag-and-drop ordering over gRPC
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "TASKBOARD_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Directory holding the board's task files (default: ~/.taskboard/board)
    #[arg(long, env = "TASKBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: ~/.taskboard/config.toml)
    #[arg(long, env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep tasks in memory only; nothing is written to disk
    #[arg(long, env = "TASKBOARD_IN_MEMORY", default_value = "false")]
    pub in_memory: bool,

    /// Comma-separated list of allowed CORS origin prefixes. "*" allows all.
    #[arg(
        long,
        env = "TASKBOARD_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,

    /// Enable JSON log format
    #[arg(long, env = "TASKBOARD_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Log rotation period: minutely, hourly, daily, or never
    #[arg(long, env = "TASKBOARD_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,

    /// Custom log directory (default: ~/.taskboard/logs)
    #[arg(long, env = "TASKBOARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let defaults = LogConfig::default();
        LogConfig {
            log_dir: self.log_dir.clone().unwrap_or(defaults.log_dir),
            json_format: self.log_json,
            rotation: parse_rotation(&self.log_rotation),
            log_level: defaults.log_level,
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| taskboard_home().join("board"))
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    /// Configured origins with blanks dropped.
    #[must_use]
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

pub fn report_server_error(addr: SocketAddr, log_file: &Path, e: &tonic::transport::Error) {
    eprintln!();
    if format!("{e:?}").contains("AddrInUse") {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another taskboard-daemon may already be running.");
        eprintln!("Use a different address: taskboard-daemon --addr 127.0.0.1:50062");
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

/// Set up logging and config, open the store and serve until Ctrl-C.
pub async fn run(args: &Args) -> Result<()> {
    let log_config = args.log_config();
    let log_file = log_config.log_file();
    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let config_path = args.config_path();
    let config = load_config(&config_path)
        .inspect_err(|e| error!(path = %config_path.display(), error = %e, "Invalid config"))?;
    info!(
        gap = config.board.gap,
        statuses = ?config.board.statuses,
        "Board settings loaded"
    );

    let addr: SocketAddr = args.addr.parse()?;
    let cors_origins = args.cors_origins();
    info!("CORS origins: {}", cors_origins.join(", "));
    let cors = build_cors_layer(cors_origins);

    if args.in_memory {
        warn!("Running with an in-memory store; tasks are lost on exit");
        let board = Board::new(MemoryTaskStore::new(), config.board);
        serve(board, addr, cors, &log_file).await
    } else {
        let store = FileTaskStore::open(&args.data_dir(), &config.board).await?;
        info!(tasks_dir = %store.tasks_dir().display(), "Opened task store");
        let board = Board::new(store, config.board);
        serve(board, addr, cors, &log_file).await
    }
}

async fn serve<S: TaskStore + 'static>(
    board: Board<S>,
    addr: SocketAddr,
    cors: CorsLayer,
    log_file: &Path,
) -> Result<()> {
    let service = TaskBoardService::new(Arc::new(board));
    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    info!("Starting taskboard daemon on {} (gRPC + gRPC-Web)", addr);

    let server_result = Server::builder()
        .accept_http1(true)
        .layer(cors)
        .layer(GrpcLoggingLayer)
        .layer(tonic_web::GrpcWebLayer::new())
        .add_service(reflection_service)
        .add_service(TaskBoardServer::new(service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await;

    if let Err(e) = server_result {
        report_server_error(addr, log_file, &e);
        return Err(e.into());
    }

    info!("Taskboard daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl-C, running until killed: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping server...");
}
