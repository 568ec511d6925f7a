//! Blog post generation from templates.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use super::title::resolve_title;
use crate::catalog::{COVER_IMAGES, POST_TEMPLATES, PostTemplate, Vocabulary};
use crate::config::SeedConfig;
use crate::errors::GenerateError;

/// Status written for every generated post.
pub const PUBLISHED: &str = "published";

/// Generated post data ready for rendering or database insertion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPost {
    /// 1-based position in the batch.
    pub index: u32,
    /// Position of the chosen template in the generator's template list.
    pub template_index: usize,
    pub author_id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub cover_image: String,
    pub status: &'static str,
    pub reading_time: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Captures the current time once for a whole run, truncated to the
/// microsecond precision PostgreSQL timestamps keep.
pub fn capture_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now - Duration::nanoseconds(i64::from(now.nanosecond() % 1_000))
}

/// Builds the synthetic author id for a 1-based author number.
///
/// The number is written in decimal into the last UUID group, so author 25
/// becomes `00000000-0000-0000-0000-000000000025`. Numbers of up to twelve
/// digits are representable.
pub fn author_id(author_num: u32) -> Uuid {
    let mut value: u128 = 0;
    let mut shift = 0;
    let mut n = author_num;
    while n > 0 {
        value |= u128::from(n % 10) << shift;
        n /= 10;
        shift += 4;
    }
    Uuid::from_u128(value)
}

/// Body text for a post, built around its subtitle.
pub fn post_content(subtitle: &str) -> String {
    format!("{subtitle}. This is a comprehensive article covering all aspects of the topic...")
}

/// Generates blog posts from a fixed set of templates.
pub struct PostGenerator {
    config: SeedConfig,
    templates: Vec<PostTemplate>,
    vocabulary: Vocabulary,
    cover_images: &'static [&'static str],
}

impl PostGenerator {
    /// Creates a new post generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(SeedConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: SeedConfig) -> Self {
        Self {
            config,
            templates: POST_TEMPLATES.to_vec(),
            vocabulary: Vocabulary::builtin(),
            cover_images: COVER_IMAGES,
        }
    }

    /// Replaces the template list.
    pub fn with_templates(mut self, templates: Vec<PostTemplate>) -> Self {
        self.templates = templates;
        self
    }

    /// Replaces the vocabulary used to fill title placeholders.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Replaces the cover image identifiers.
    pub fn with_cover_images(mut self, cover_images: &'static [&'static str]) -> Self {
        self.cover_images = cover_images;
        self
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Generates the post at a 1-based `index`, dated relative to `now`.
    pub fn generate(
        &self,
        index: u32,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<GeneratedPost, GenerateError> {
        if self.templates.is_empty() {
            return Err(GenerateError::NoTemplates);
        }
        let template_index = rng.gen_range(0..self.templates.len());
        let template = self.templates[template_index];

        let title = resolve_title(template.title_pattern, &self.vocabulary, rng)?;
        let subtitle = template.subtitle.to_string();

        let author_num = self
            .config
            .author_cycle
            .author_num(index, self.config.author_count);

        let days_ago = rng.gen_range(self.config.min_days_ago..=self.config.max_days_ago);
        let published_at = now - Duration::days(i64::from(days_ago));

        let image = self
            .cover_images
            .choose(rng)
            .ok_or(GenerateError::NoCoverImages)?;
        let cover_image = format!(
            "{}{image}{}",
            self.config.cover_image_base_url, self.config.cover_image_query
        );

        Ok(GeneratedPost {
            index,
            template_index,
            author_id: author_id(author_num),
            content: post_content(&subtitle),
            title,
            subtitle,
            cover_image,
            status: PUBLISHED,
            reading_time: template.reading_time,
            published_at,
            created_at: published_at,
            updated_at: published_at,
        })
    }

    /// Generates the configured number of posts, numbered from 1.
    pub fn generate_batch(
        &self,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedPost>, GenerateError> {
        self.config.validate()?;

        let posts = (1..=self.config.post_count)
            .map(|index| self.generate(index, now, rng))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Generated {} posts", posts.len());
        Ok(posts)
    }
}

impl Default for PostGenerator {
    fn default() -> Self {
        Self::new()
    }
}
