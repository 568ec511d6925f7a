//! SQL text rendering for generated seed data.

mod literal;
mod script;

pub use literal::quote_literal;
pub use script::{
    POST_COLUMNS, POST_TAG_COLUMNS, render_json, render_post_row, render_post_tags_insert,
    render_posts_insert, render_script,
};
