//! Courtside Test Utils
//!
//! Shared testing utilities for the courtside backend. The crate offers a builder for
//! test contexts backed by in-memory SQLite databases with table schemas generated from
//! the SeaORM entities, plus factories for inserting club records with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Court;
//!
//! #[tokio::test]
//! async fn lists_courts() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(Court).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let court = test_utils::factory::create_court(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
