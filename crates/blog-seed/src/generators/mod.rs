//! Entity generators for seed data.
//!
//! - [`PostGenerator`]: Generate posts from templates
//! - [`resolve_title`]: Fill `{placeholder}` slots in a title pattern

pub mod post;
pub mod title;

pub use post::{GeneratedPost, PUBLISHED, PostGenerator, author_id, capture_now, post_content};
pub use title::{Placeholder, placeholders, resolve_title};
