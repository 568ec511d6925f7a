//! Integration tests for writing generated posts to PostgreSQL.
//!
//! To run these tests, you need a PostgreSQL database and the
//! DATABASE_URL environment variable set:
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p blog-seed database`
//!
//! The tests create temporary tables named `posts`, `tags` and `post_tags`
//! on a single connection. They shadow any real tables for that session and
//! disappear when it closes, so a development database is left untouched.

use std::env;

use blog_seed::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::{PgPool, postgres::PgPoolOptions};
use time::macros::datetime;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    // One connection so the temporary tables are visible to every query.
    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

/// Creates session-local copies of the blog tables with `tag_count` tags.
async fn create_temp_schema(pool: &PgPool, tag_count: i32) {
    for statement in [
        r#"
        CREATE TEMP TABLE posts (
            id BIGSERIAL PRIMARY KEY,
            author_id UUID NOT NULL,
            title TEXT NOT NULL,
            subtitle TEXT,
            content TEXT NOT NULL,
            cover_image TEXT,
            status TEXT NOT NULL,
            reading_time INTEGER NOT NULL,
            published_at TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#,
        r#"
        CREATE TEMP TABLE tags (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TEMP TABLE post_tags (
            post_id BIGINT NOT NULL,
            tag_id INTEGER NOT NULL,
            PRIMARY KEY (post_id, tag_id)
        )
        "#,
    ] {
        sqlx::query(statement).execute(pool).await.unwrap();
    }

    sqlx::query("INSERT INTO tags (name) SELECT 'tag-' || n FROM generate_series(1, $1) n")
        .bind(tag_count)
        .execute(pool)
        .await
        .unwrap();
}

fn generate_posts(seed: u64) -> Vec<GeneratedPost> {
    let now = datetime!(2025-06-15 12:00:00 UTC);
    PostGenerator::new()
        .generate_batch(now, &mut StdRng::seed_from_u64(seed))
        .unwrap()
}

#[tokio::test]
async fn test_seed_posts_and_tags() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    create_temp_schema(&pool, 6).await;

    let posts = generate_posts(12345);
    let summary = Seeder::new(pool.clone()).seed(&posts, 2).await.unwrap();

    assert_eq!(summary.posts, 120);
    assert_eq!(summary.post_tags, 240);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 120);

    let (authors,): (i64,) = sqlx::query_as("SELECT COUNT(DISTINCT author_id) FROM posts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(authors, 25);
}

#[tokio::test]
async fn test_bound_values_match_generated_posts() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    create_temp_schema(&pool, 3).await;

    let posts = generate_posts(99);
    Seeder::new(pool.clone())
        .with_batch_size(7)
        .seed(&posts, 1)
        .await
        .unwrap();

    let (author_id, title, reading_time): (uuid::Uuid, String, i32) = sqlx::query_as(
        "SELECT author_id, title, reading_time FROM posts ORDER BY id LIMIT 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(author_id, posts[0].author_id);
    assert_eq!(title, posts[0].title);
    assert_eq!(reading_time, posts[0].reading_time);
}

#[tokio::test]
async fn test_failed_seed_rolls_back() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    create_temp_schema(&pool, 3).await;

    // Reject every tag so assignment fails after the posts insert.
    sqlx::query("ALTER TABLE post_tags ADD CONSTRAINT reject_all CHECK (tag_id < 0)")
        .execute(&pool)
        .await
        .unwrap();

    let posts = generate_posts(1);
    let result = Seeder::new(pool.clone()).seed(&posts, 2).await;
    assert!(matches!(result, Err(SeedError::Database(_))));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
