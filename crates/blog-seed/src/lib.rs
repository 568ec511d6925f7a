//! Seed data generation for the blog database.
//!
//! This crate synthesizes blog posts from a fixed set of title templates and
//! vocabularies, and either renders them as a SQL script (one multi-row
//! `INSERT INTO posts` plus an `INSERT INTO post_tags ... SELECT` that lets
//! the database pick random tags) or writes them directly with bound
//! parameters.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use blog_seed::prelude::*;
//!
//! let generator = PostGenerator::new();
//! let posts = generator.generate_batch(capture_now(), &mut rand::thread_rng())?;
//! let script = render_script(&posts, generator.config().tags_per_post)?;
//! print!("{script}");
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod generators;
pub mod sql;

pub use errors::GenerateError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{COVER_IMAGES, POST_TEMPLATES, PostTemplate, Vocabulary};
    pub use crate::config::{AuthorCycle, SeedConfig};
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::errors::GenerateError;
    pub use crate::generators::{GeneratedPost, PostGenerator, author_id, capture_now};
    pub use crate::sql::{quote_literal, render_json, render_script};
}
