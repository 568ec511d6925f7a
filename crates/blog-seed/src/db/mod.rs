//! Database integration for seeding generated posts.
//!
//! The [`Seeder`] writes generated posts with bound parameters instead of
//! interpolated SQL text, and runs the tag assignment in the same
//! transaction.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
