use time::format_description::well_known::Rfc3339;

use super::literal::quote_literal;
use crate::errors::GenerateError;
use crate::generators::GeneratedPost;

/// Column list of the `posts` insert, in tuple order.
pub const POST_COLUMNS: [&str; 10] = [
    "author_id",
    "title",
    "subtitle",
    "content",
    "cover_image",
    "status",
    "reading_time",
    "published_at",
    "created_at",
    "updated_at",
];

/// Column list of the `post_tags` insert.
pub const POST_TAG_COLUMNS: [&str; 2] = ["post_id", "tag_id"];

/// Renders one post as a parenthesized value tuple in [`POST_COLUMNS`] order.
pub fn render_post_row(post: &GeneratedPost) -> Result<String, GenerateError> {
    let published_at = quote_literal(&post.published_at.format(&Rfc3339)?)?;
    let created_at = quote_literal(&post.created_at.format(&Rfc3339)?)?;
    let updated_at = quote_literal(&post.updated_at.format(&Rfc3339)?)?;

    Ok(format!(
        "({}, {}, {}, {}, {}, {}, {}, {published_at}, {created_at}, {updated_at})",
        quote_literal(&post.author_id.to_string())?,
        quote_literal(&post.title)?,
        quote_literal(&post.subtitle)?,
        quote_literal(&post.content)?,
        quote_literal(&post.cover_image)?,
        quote_literal(post.status)?,
        post.reading_time,
    ))
}

/// Renders the multi-row `INSERT INTO posts` statement with its comment line.
pub fn render_posts_insert(posts: &[GeneratedPost]) -> Result<String, GenerateError> {
    if posts.is_empty() {
        return Err(GenerateError::EmptyBatch);
    }

    let rows = posts
        .iter()
        .map(render_post_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!(
        "-- Blog Posts ({} posts)\nINSERT INTO posts ({}) VALUES\n{};\n",
        posts.len(),
        POST_COLUMNS.join(", "),
        rows.join(",\n"),
    ))
}

/// Renders the statement attaching `tags_per_post` random tags to every post.
///
/// The tags are picked by the database when the statement runs.
pub fn render_post_tags_insert(tags_per_post: u32) -> String {
    format!(
        "-- Post-tag relationships\n\
         INSERT INTO post_tags ({})\n\
         SELECT p.id, t.id\n\
         FROM posts p\n\
         CROSS JOIN LATERAL (\n  \
         SELECT id FROM tags ORDER BY RANDOM() LIMIT {tags_per_post}\n\
         ) t;\n",
        POST_TAG_COLUMNS.join(", "),
    )
}

/// Renders the complete seed script.
///
/// The whole script is built in memory so callers can write it in one go or
/// not at all.
pub fn render_script(
    posts: &[GeneratedPost],
    tags_per_post: u32,
) -> Result<String, GenerateError> {
    let posts_sql = render_posts_insert(posts)?;
    Ok(format!(
        "{posts_sql}\n{}",
        render_post_tags_insert(tags_per_post)
    ))
}

/// Renders the posts as a pretty-printed JSON array.
pub fn render_json(posts: &[GeneratedPost]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(posts)
}
