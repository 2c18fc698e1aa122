//! Organizer Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - tree: Pure operations on one category's item tree
//! - merge: Import merge policies, import validation and export
//! - repository: Data access abstractions and implementations
//! - commands: Handlers called by the UI or the CLI
//! - config: Settings file and environment overrides

use std::sync::Arc;
use tokio::sync::Mutex;

pub mod config;
pub mod domain;
pub mod tree;
pub mod merge;
pub mod repository;
pub mod commands;

use config::AppConfig;
use domain::{IdGenerator, UuidIdGenerator};
use repository::{init_db, DocumentRepository, KeyValueStore, PreferenceRepository, SqliteStore};
use rolling_logger::{LoggerError, LoggerOptions};
use tree::DragController;

/// Application state shared across commands
pub struct AppState {
    pub config: AppConfig,
    pub documents: DocumentRepository,
    pub preferences: PreferenceRepository,
    pub ids: Arc<dyn IdGenerator>,
    pub drag: Mutex<DragController>,
}

impl AppState {
    /// Start logging, open the database and load the document
    pub async fn init(config: AppConfig) -> Result<Self, String> {
        let options = LoggerOptions {
            max_files: config.max_log_files,
            ..LoggerOptions::default()
        };
        match rolling_logger::init_logger_with(config.log_dir(), &config.app_name, options) {
            Ok(()) | Err(LoggerError::AlreadyInitialized) => {}
            Err(e) => return Err(format!("failed to init rolling logger: {}", e)),
        }

        let db_path = config.db_path();
        let _ = rolling_logger::info(&format!("{} starting, database {}", config.app_name, db_path.display()));

        let db_state = init_db(&db_path).await.map_err(|e| e.to_string())?;
        let store = Arc::new(SqliteStore::new(db_state.connection()));
        Ok(Self::with_store(config, store, Arc::new(UuidIdGenerator)).await)
    }

    /// State over an arbitrary store, without touching logging or disk
    pub async fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>, ids: Arc<dyn IdGenerator>) -> Self {
        let documents = DocumentRepository::load(store.clone()).await;
        let preferences = PreferenceRepository::new(store);
        Self {
            config,
            documents,
            preferences,
            ids,
            drag: Mutex::new(DragController::new()),
        }
    }
}
