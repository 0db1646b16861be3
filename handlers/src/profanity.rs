//! Profanity detection over normalized words.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::normalizer::{LowercaseNormalizer, Normalizer};

/// Built-in denylist of root forms.
pub const DEFAULT_ROOTS: &[&str] = &[
    "бля", "хуй", "нах", "ахуеть", "ахуел", "охуеть", "охуел", "блять", "блядь", "сука", "пидор",
    "пидр", "ебать", "ебан", "еблан", "ублюдок", "сегэ", "кутак", "секмим", "секте", "секмэем",
    "сегелгэн", "сегелде",
];

/// First offending word of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfanityMatch {
    /// Word as it appeared (lowercased, edge punctuation removed).
    pub token: String,
    pub normal_form: String,
    /// Denylisted root found in the normal form.
    pub root: String,
}

/// Denylist of root forms checked against the normal form of every word.
///
/// A word matches when its normal form is a root or contains one.
pub struct ProfanityFilter {
    roots: HashSet<String>,
    normalizer: Arc<dyn Normalizer>,
}

impl ProfanityFilter {
    /// Filter with [`DEFAULT_ROOTS`].
    pub fn new(normalizer: Arc<dyn Normalizer>) -> Self {
        Self::with_roots(DEFAULT_ROOTS.iter().copied(), normalizer)
    }

    pub fn with_roots<I, S>(roots: I, normalizer: Arc<dyn Normalizer>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self {
            roots: HashSet::new(),
            normalizer,
        };
        filter.extend_roots(roots);
        filter
    }

    /// Adds roots; they are case-folded and empty entries skipped.
    pub fn extend_roots<I, S>(&mut self, roots: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roots.extend(
            roots
                .into_iter()
                .map(|root| LowercaseNormalizer.normal_form(root.as_ref().trim()))
                .filter(|root| !root.is_empty()),
        );
    }

    /// Reads one root per line; blank lines and `#` comments are skipped.
    pub fn load_roots(path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("read denylist {}", path.display()))?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }

    pub fn roots_len(&self) -> usize {
        self.roots.len()
    }

    /// Scans whitespace-separated words in order and stops at the first one whose normal form
    /// hits the denylist.
    pub fn find_match(&self, text: &str) -> Option<ProfanityMatch> {
        let lowered = text.to_lowercase();
        for word in lowered.split_whitespace() {
            let token = word.trim_matches(|c: char| !c.is_alphanumeric());
            if token.is_empty() {
                continue;
            }
            let normal_form = self.normalizer.normal_form(token);
            if let Some(root) = self.matching_root(&normal_form) {
                return Some(ProfanityMatch {
                    token: token.to_string(),
                    root: root.to_string(),
                    normal_form,
                });
            }
        }
        None
    }

    pub fn is_profane(&self, text: &str) -> bool {
        self.find_match(text).is_some()
    }

    fn matching_root(&self, normal_form: &str) -> Option<&str> {
        if let Some(root) = self.roots.get(normal_form) {
            return Some(root.as_str());
        }
        // Longest contained root wins so the reported root does not depend on set order.
        self.roots
            .iter()
            .filter(|root| normal_form.contains(root.as_str()))
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
            .map(String::as_str)
    }
}
