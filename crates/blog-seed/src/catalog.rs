//! Fixed content tables used to synthesize posts.
//!
//! Templates, vocabulary sets and cover images are plain `const` data; the
//! generators only ever read them.

use serde::Serialize;

/// A title pattern together with the subtitle and reading time it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostTemplate {
    /// Title with `{placeholder}` slots, resolved per post.
    pub title_pattern: &'static str,
    pub subtitle: &'static str,
    /// Estimated reading time in minutes.
    pub reading_time: i32,
}

impl PostTemplate {
    pub const fn new(title_pattern: &'static str, subtitle: &'static str, reading_time: i32) -> Self {
        Self {
            title_pattern,
            subtitle,
            reading_time,
        }
    }
}

/// The ten built-in post templates, in their canonical order.
pub const POST_TEMPLATES: [PostTemplate; 10] = [
    PostTemplate::new(
        "Building Scalable {tech} Applications",
        "A comprehensive guide to production-ready development",
        8,
    ),
    PostTemplate::new(
        "{framework} Performance Optimization Tips",
        "Make your apps blazing fast with these techniques",
        5,
    ),
    PostTemplate::new(
        "Getting Started with {tech}",
        "A beginner-friendly introduction to modern development",
        3,
    ),
    PostTemplate::new(
        "Advanced {topic} Design Patterns",
        "Deep dive into enterprise-grade architectures",
        12,
    ),
    PostTemplate::new(
        "My Journey Learning {skill}",
        "Lessons learned and best practices from real projects",
        6,
    ),
    PostTemplate::new(
        "{tool} Best Practices for 2025",
        "Production-tested strategies from industry leaders",
        7,
    ),
    PostTemplate::new(
        "Why I Switched to {tech}",
        "And why you should consider it too",
        4,
    ),
    PostTemplate::new(
        "10 Common {topic} Mistakes to Avoid",
        "Learn from these critical errors",
        5,
    ),
    PostTemplate::new(
        "The Ultimate {tech} Tutorial Series",
        "From zero to production in 30 days",
        15,
    ),
    PostTemplate::new(
        "5 {tech} Tips That Changed My Career",
        "Game-changing insights for developers",
        4,
    ),
];

pub const TECHNOLOGIES: &[&str] = &[
    "Go",
    "Rust",
    "TypeScript",
    "Python",
    "React",
    "Next.js",
    "Kubernetes",
    "Docker",
    "AWS Lambda",
    "GraphQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "Terraform",
    "gRPC",
];

pub const FRAMEWORKS: &[&str] = &["React", "Vue", "Next.js", "Svelte"];

pub const TOPICS: &[&str] = &[
    "API Design",
    "Testing",
    "Security",
    "DevOps",
    "Architecture",
    "Database",
];

pub const SKILLS: &[&str] = &[
    "Kubernetes",
    "System Design",
    "Code Review",
    "Technical Writing",
];

pub const TOOLS: &[&str] = &["Docker", "Kubernetes", "Terraform", "Git"];

/// Unsplash photo identifiers used for cover images.
pub const COVER_IMAGES: &[&str] = &[
    "photo-1558494949-ef010cbdcc31",
    "photo-1633356122544-f134324a6cee",
    "photo-1499750310107-5fef28a66643",
    "photo-1667372393119-3d4c48d07fc9",
];

/// Values available for each title placeholder.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub technologies: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub topics: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub tools: &'static [&'static str],
}

impl Vocabulary {
    /// The built-in vocabulary.
    pub const fn builtin() -> Self {
        Self {
            technologies: TECHNOLOGIES,
            frameworks: FRAMEWORKS,
            topics: TOPICS,
            skills: SKILLS,
            tools: TOOLS,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Every reading time a built-in template can produce.
pub fn reading_times() -> Vec<i32> {
    let mut times: Vec<i32> = POST_TEMPLATES.iter().map(|t| t.reading_time).collect();
    times.sort_unstable();
    times.dedup();
    times
}
