//! # teambot-store
//!
//! Record store layer implementing the `TeamRepository` port with MongoDB.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - Connection setup from [`teambot_common::StoreConfig`]
//! - The BSON document model with serde derives
//! - Entity ↔ document mappers
//! - The `MongoTeamRepository` implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teambot_common::StoreConfig;
//! use teambot_store::{connect, MongoTeamRepository};
//!
//! async fn example(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let database = connect(config).await?;
//!     let teams = MongoTeamRepository::new(&database);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use client::connect;
pub use models::TeamDocument;
pub use repositories::MongoTeamRepository;
