//! Core logic for taskdesk: a JSON-file backed task store and a
//! delimited-text statistics reader.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod table;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};
pub use store::json_store::JsonTaskStore;
pub use store::{PersistenceError, StoreError, StoreResult};
pub use table::chart::{ChartData, ChartError, ChartRequest, ChartResult};
pub use table::reader::{
    detect_delimiter, detect_header, load_dataset, parse_number, Column, Dataset, Delimiter,
    NumberParseError,
};
pub use table::stats::{compute_statistics, render_summary, summarize, ColumnStats};
pub use table::{TableError, TableResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
