//! # Member Management Service
//!
//! Small CRUD service for a paginated, searchable, sortable member list
//! backed by SQLite.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities, value objects, sort/pagination rules and
//!   repository interfaces
//! - **application**: Use-case orchestration (`MemberService`)
//! - **infrastructure**: Persistence (SeaORM entities, migrations,
//!   repositories, demo seeding)
//! - **interfaces**: REST API with Swagger documentation
//! - **client**: Table-state helpers for consumers of the list endpoint
//! - **shared**: Pagination math and the tri-state `Patch` type

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
