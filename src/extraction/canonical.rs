//! Canonicalization of raw candidates into skills

use crate::skill_set::SkillSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s+#.]").expect("Invalid cleanup regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

const MIN_SKILL_LEN: usize = 3;
const MAX_SKILL_LEN: usize = 60;

/// Lowercase, replace anything other than word characters, whitespace,
/// `+`, `#` and `.` with a space, and collapse whitespace.
pub fn normalize_candidate(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let replaced = DISALLOWED.replace_all(&lowered, " ");
    WHITESPACE.replace_all(&replaced, " ").trim().to_string()
}

/// Alias table mapping normalized aliases to canonical skill names
#[derive(Debug, Clone, Default)]
pub struct CanonicalMap {
    aliases: HashMap<String, String>,
}

impl CanonicalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from alias/canonical pairs. Aliases are normalized the same way
    /// candidates are so that lookups line up.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let aliases = pairs
            .into_iter()
            .map(|(alias, canonical)| (normalize_candidate(alias.as_ref()), normalize_candidate(canonical.as_ref())))
            .filter(|(alias, _)| !alias.is_empty())
            .collect();
        Self { aliases }
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    map: CanonicalMap,
}

impl Canonicalizer {
    pub fn new(map: CanonicalMap) -> Self {
        Self { map }
    }

    /// Canonical form of one candidate, or `None` when it is filtered out
    pub fn canonicalize_one(&self, raw: &str) -> Option<String> {
        let normalized = normalize_candidate(raw);
        let skill = match self.map.get(&normalized) {
            Some(canonical) => canonical.to_string(),
            None => normalized,
        };

        let len = skill.chars().count();
        (MIN_SKILL_LEN..=MAX_SKILL_LEN).contains(&len).then_some(skill)
    }

    /// Canonicalize candidates in the order given, keeping first occurrences
    pub fn canonicalize<I, S>(&self, candidates: I) -> SkillSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .filter_map(|candidate| self.canonicalize_one(candidate.as_ref()))
            .collect()
    }
}
