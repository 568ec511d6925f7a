//! Title pattern resolution.
//!
//! A pattern is plain text with `{name}` slots. Recognized names:
//! - `{tech}` / `{technology}` - a technology name
//! - `{framework}` - a frontend framework
//! - `{topic}` - an engineering topic
//! - `{skill}` - a skill
//! - `{tool}` - a tool
//!
//! Each distinct placeholder is drawn once per title, so a pattern that
//! repeats `{tech}` gets the same technology in both slots.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Vocabulary;
use crate::errors::GenerateError;

/// A named slot in a title pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Technology,
    Framework,
    Topic,
    Skill,
    Tool,
}

impl Placeholder {
    /// Parses a placeholder name as written between braces.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tech" | "technology" => Some(Self::Technology),
            "framework" => Some(Self::Framework),
            "topic" => Some(Self::Topic),
            "skill" => Some(Self::Skill),
            "tool" => Some(Self::Tool),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Technology => "tech",
            Self::Framework => "framework",
            Self::Topic => "topic",
            Self::Skill => "skill",
            Self::Tool => "tool",
        }
    }

    /// The vocabulary set this placeholder draws from.
    pub fn values(self, vocab: &Vocabulary) -> &'static [&'static str] {
        match self {
            Self::Technology => vocab.technologies,
            Self::Framework => vocab.frameworks,
            Self::Topic => vocab.topics,
            Self::Skill => vocab.skills,
            Self::Tool => vocab.tools,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Slot(Placeholder),
}

fn tokenize(pattern: &str) -> Result<Vec<Token<'_>>, GenerateError> {
    let mut tokens = Vec::new();
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
        }
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| GenerateError::UnterminatedPlaceholder(pattern.to_string()))?;
        let name = &after[..end];
        let placeholder =
            Placeholder::from_name(name).ok_or_else(|| GenerateError::UnknownPlaceholder {
                name: name.to_string(),
                pattern: pattern.to_string(),
            })?;
        tokens.push(Token::Slot(placeholder));
        rest = &after[end + 1..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }

    Ok(tokens)
}

/// Returns the distinct placeholders referenced by a pattern, in order of
/// first appearance.
pub fn placeholders(pattern: &str) -> Result<Vec<Placeholder>, GenerateError> {
    let mut found = Vec::new();
    for token in tokenize(pattern)? {
        if let Token::Slot(p) = token {
            if !found.contains(&p) {
                found.push(p);
            }
        }
    }
    Ok(found)
}

/// Resolves a title pattern against a vocabulary.
///
/// Fails on unknown or unterminated placeholders, and when a referenced
/// placeholder has no values to draw from.
pub fn resolve_title(
    pattern: &str,
    vocab: &Vocabulary,
    rng: &mut impl Rng,
) -> Result<String, GenerateError> {
    let tokens = tokenize(pattern)?;

    let mut chosen: Vec<(Placeholder, &'static str)> = Vec::new();
    for token in &tokens {
        let Token::Slot(p) = *token else {
            continue;
        };
        if !chosen.iter().any(|(c, _)| *c == p) {
            let value = p
                .values(vocab)
                .choose(rng)
                .copied()
                .ok_or(GenerateError::EmptyVocabulary(p.name()))?;
            chosen.push((p, value));
        }
    }

    let mut title = String::with_capacity(pattern.len() + 16);
    for token in tokens {
        match token {
            Token::Text(text) => title.push_str(text),
            Token::Slot(p) => {
                // Every slot was drawn above.
                if let Some((_, value)) = chosen.iter().find(|(c, _)| *c == p) {
                    title.push_str(value);
                }
            }
        }
    }

    Ok(title)
}
