//! coachboard-core - Core library for coachboard
//!
//! Domain models, the seeded record store, the list-view engine
//! (filter/selection/stats/bulk actions), the route table, the sidebar
//! navigation tree, branding/preferences config and CSV export.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod nav;
pub mod routes;
pub mod seed;
pub mod store;
pub mod view;

pub use config::{AppConfig, Branding, ColorScheme, Preferences};
pub use error::CoreError;
pub use export::export_records_to_csv;
pub use routes::Page;
pub use store::{DataStore, Domain, RecordSource};
pub use view::{BulkAction, FilterValue, ListView, LogSink, Precision};
