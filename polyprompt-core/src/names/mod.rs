//! Random app name generation.
//!
//! A name is one token drawn uniformly from the language's prefix pool joined with one
//! token drawn uniformly from its suffix pool. Draws are independent and memoryless, so
//! repeated names across calls are expected.

mod pools;

use crate::i18n::Language;
use rand::Rng;
use std::collections::HashSet;

/// How a prefix and suffix are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameJoin {
    /// Direct concatenation (`QuickApp`, `小助手`)
    Concatenate,
    /// Exactly one space between the tokens
    Space,
}

impl NameJoin {
    pub fn separator(self) -> &'static str {
        match self {
            Self::Concatenate => "",
            Self::Space => " ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamePoolError {
    #[error("{language} {pool} pool is empty")]
    Empty {
        language: Language,
        pool: &'static str,
    },
    #[error("{language} {pool} pool contains an empty token at index {index}")]
    EmptyToken {
        language: Language,
        pool: &'static str,
        index: usize,
    },
    #[error("{language} {pool} pool contains duplicate token `{token}`")]
    Duplicate {
        language: Language,
        pool: &'static str,
        token: &'static str,
    },
    #[error("{language} {pool} token `{token}` contains whitespace but the pool is space-joined")]
    Whitespace {
        language: Language,
        pool: &'static str,
        token: &'static str,
    },
}

/// Prefix and suffix pools for one language
#[derive(Debug)]
pub struct NamePool {
    language: Language,
    prefixes: &'static [&'static str],
    suffixes: &'static [&'static str],
    join: NameJoin,
}

static CHINESE: NamePool = NamePool {
    language: Language::Chinese,
    prefixes: pools::CHINESE_PREFIXES,
    suffixes: pools::CHINESE_SUFFIXES,
    join: NameJoin::Concatenate,
};

static ENGLISH: NamePool = NamePool {
    language: Language::English,
    prefixes: pools::ENGLISH_PREFIXES,
    suffixes: pools::ENGLISH_SUFFIXES,
    join: NameJoin::Concatenate,
};

static ARABIC: NamePool = NamePool {
    language: Language::Arabic,
    prefixes: pools::ARABIC_PREFIXES,
    suffixes: pools::ARABIC_SUFFIXES,
    join: NameJoin::Space,
};

impl NamePool {
    pub fn for_language(language: Language) -> &'static NamePool {
        match language {
            Language::Chinese => &CHINESE,
            Language::English => &ENGLISH,
            Language::Arabic => &ARABIC,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn prefixes(&self) -> &'static [&'static str] {
        self.prefixes
    }

    pub fn suffixes(&self) -> &'static [&'static str] {
        self.suffixes
    }

    pub fn join(&self) -> NameJoin {
        self.join
    }

    /// Draw one prefix index and one suffix index, each uniform over its pool
    pub fn draw_indices<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, usize) {
        let prefix = rng.gen_range(0..self.prefixes.len());
        let suffix = rng.gen_range(0..self.suffixes.len());
        (prefix, suffix)
    }

    /// Deterministic composition for a fixed index pair; `None` when out of range
    pub fn compose_at(&self, prefix_index: usize, suffix_index: usize) -> Option<String> {
        let prefix = self.prefixes.get(prefix_index)?;
        let suffix = self.suffixes.get(suffix_index)?;
        Some(format!("{prefix}{}{suffix}", self.join.separator()))
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let (prefix, suffix) = self.draw_indices(rng);
        format!(
            "{}{}{}",
            self.prefixes[prefix],
            self.join.separator(),
            self.suffixes[suffix]
        )
    }

    /// Recover the `(prefix, suffix)` tokens of a name built from this pool.
    ///
    /// Returns `None` if the name does not come from this pool or if it splits in more
    /// than one way.
    pub fn decompose<'n>(&self, name: &'n str) -> Option<(&'n str, &'n str)> {
        let separator = self.join.separator();
        let mut found = None;
        for prefix in self.prefixes {
            let Some(rest) = name.strip_prefix(prefix) else {
                continue;
            };
            let Some(suffix) = rest.strip_prefix(separator) else {
                continue;
            };
            if self.suffixes.iter().any(|candidate| *candidate == suffix) {
                if found.is_some() {
                    return None;
                }
                found = Some((&name[..prefix.len()], suffix));
            }
        }
        found
    }

    /// Check the static pools for defects that would break generation or decomposition
    pub fn validate(&self) -> Result<(), NamePoolError> {
        self.validate_pool("prefix", self.prefixes)?;
        self.validate_pool("suffix", self.suffixes)
    }

    fn validate_pool(
        &self,
        pool: &'static str,
        tokens: &'static [&'static str],
    ) -> Result<(), NamePoolError> {
        let language = self.language;
        if tokens.is_empty() {
            return Err(NamePoolError::Empty { language, pool });
        }

        let mut seen = HashSet::new();
        for (index, token) in tokens.iter().copied().enumerate() {
            if token.trim().is_empty() {
                return Err(NamePoolError::EmptyToken {
                    language,
                    pool,
                    index,
                });
            }
            if self.join == NameJoin::Space && token.chars().any(char::is_whitespace) {
                return Err(NamePoolError::Whitespace {
                    language,
                    pool,
                    token,
                });
            }
            if !seen.insert(token) {
                return Err(NamePoolError::Duplicate {
                    language,
                    pool,
                    token,
                });
            }
        }
        Ok(())
    }
}

/// Validate the pools of every supported language
pub fn validate_all_pools() -> Result<(), NamePoolError> {
    Language::ALL
        .into_iter()
        .try_for_each(|language| NamePool::for_language(language).validate())
}

/// Generate a random name using the thread-local generator
pub fn generate_random_name(language: Language) -> String {
    generate_random_name_with(&mut rand::thread_rng(), language)
}

/// Generate a random name with an injected generator
pub fn generate_random_name_with<R: Rng + ?Sized>(rng: &mut R, language: Language) -> String {
    NamePool::for_language(language).generate(rng)
}
