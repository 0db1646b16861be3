//! Word normalization for the profanity filter.
//!
//! A [`Normalizer`] maps a word form to the root form the denylist is written in. Morphological
//! analysis proper lives outside this crate; [`DictionaryNormalizer`] reads a prepared
//! `form<TAB>lemma` table, [`LowercaseNormalizer`] only folds case and `ё`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Maps a single word to its normal (dictionary) form.
pub trait Normalizer: Send + Sync {
    fn normal_form(&self, word: &str) -> String;
}

/// Lowercases and folds `ё` into `е`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer;

impl Normalizer for LowercaseNormalizer {
    fn normal_form(&self, word: &str) -> String {
        word.to_lowercase().replace('ё', "е")
    }
}

/// Looks word forms up in a lemma table; unknown words fall back to [`LowercaseNormalizer`].
#[derive(Debug, Clone, Default)]
pub struct DictionaryNormalizer {
    lemmas: HashMap<String, String>,
}

impl DictionaryNormalizer {
    /// Builds the table from `(form, lemma)` pairs. Both sides are case-folded.
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let fold = LowercaseNormalizer;
        let lemmas = pairs
            .into_iter()
            .map(|(form, lemma)| {
                (
                    fold.normal_form(form.as_ref().trim()),
                    fold.normal_form(lemma.as_ref().trim()),
                )
            })
            .filter(|(form, lemma)| !form.is_empty() && !lemma.is_empty())
            .collect();
        Self { lemmas }
    }

    /// Reads `form<TAB>lemma` lines. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut pairs = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("read lemma table line {}", idx + 1))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (form, lemma) = line
                .split_once('\t')
                .with_context(|| format!("lemma table line {} has no tab: {:?}", idx + 1, line))?;
            pairs.push((form.to_string(), lemma.to_string()));
        }
        Ok(Self::from_pairs(pairs))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("open lemma table {}", path.display()))?;
        let normalizer = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), entries = normalizer.len(), "Lemma table loaded");
        Ok(normalizer)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Normalizer for DictionaryNormalizer {
    fn normal_form(&self, word: &str) -> String {
        let folded = LowercaseNormalizer.normal_form(word);
        match self.lemmas.get(&folded) {
            Some(lemma) => lemma.clone(),
            None => folded,
        }
    }
}
