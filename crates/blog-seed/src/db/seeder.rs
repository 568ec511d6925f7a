//! Database seeding utilities.

use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use thiserror::Error;
use tracing::info;

use crate::generators::GeneratedPost;
use crate::sql::{POST_COLUMNS, POST_TAG_COLUMNS};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("No posts to seed")]
    NoPosts,
}

/// Row counts written by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub posts: u64,
    pub post_tags: u64,
}

/// Database seeder for inserting generated posts.
pub struct Seeder {
    pool: PgPool,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 50,
        }
    }

    /// Sets the number of posts per multi-row insert.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Inserts the posts and assigns tags in a single transaction.
    ///
    /// Nothing is committed if any statement fails.
    pub async fn seed(
        &self,
        posts: &[GeneratedPost],
        tags_per_post: u32,
    ) -> Result<SeedSummary, SeedError> {
        let mut tx = self.pool.begin().await?;

        let posts_written = self.seed_posts(&mut *tx, posts).await?;
        let post_tags = self.assign_tags(&mut *tx, tags_per_post).await?;

        tx.commit().await?;

        Ok(SeedSummary {
            posts: posts_written,
            post_tags,
        })
    }

    /// Seeds posts into the database in batches.
    pub async fn seed_posts(
        &self,
        conn: &mut PgConnection,
        posts: &[GeneratedPost],
    ) -> Result<u64, SeedError> {
        if posts.is_empty() {
            return Err(SeedError::NoPosts);
        }

        info!("Seeding {} posts...", posts.len());

        let mut written = 0;
        for chunk in posts.chunks(self.batch_size) {
            written += self.insert_post_batch(&mut *conn, chunk).await?;
        }

        info!("Seeded {} posts", written);
        Ok(written)
    }

    /// Inserts a batch of posts as one multi-row insert.
    async fn insert_post_batch(
        &self,
        conn: &mut PgConnection,
        posts: &[GeneratedPost],
    ) -> Result<u64, SeedError> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("INSERT INTO posts ({}) ", POST_COLUMNS.join(", ")));

        query.push_values(posts, |mut row, post| {
            row.push_bind(post.author_id)
                .push_bind(&post.title)
                .push_bind(&post.subtitle)
                .push_bind(&post.content)
                .push_bind(&post.cover_image)
                .push_bind(post.status)
                .push_bind(post.reading_time)
                .push_bind(post.published_at)
                .push_bind(post.created_at)
                .push_bind(post.updated_at);
        });

        let result = query.build().execute(conn).await?;
        Ok(result.rows_affected())
    }

    /// Attaches `tags_per_post` random tags to every post.
    ///
    /// Tags are chosen by the database; posts that already have tags get
    /// additional ones.
    pub async fn assign_tags(
        &self,
        conn: &mut PgConnection,
        tags_per_post: u32,
    ) -> Result<u64, SeedError> {
        info!("Assigning {} tags per post...", tags_per_post);

        let sql = format!(
            r#"
            INSERT INTO post_tags ({})
            SELECT p.id, t.id
            FROM posts p
            CROSS JOIN LATERAL (
                SELECT id FROM tags ORDER BY RANDOM() LIMIT $1
            ) t
            "#,
            POST_TAG_COLUMNS.join(", ")
        );

        let result = sqlx::query(&sql)
            .bind(i64::from(tags_per_post))
            .execute(conn)
            .await?;

        info!("Created {} post-tag relationships", result.rows_affected());
        Ok(result.rows_affected())
    }
}
