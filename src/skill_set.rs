//! Ordered, duplicate-free skill sequences

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Deref;

/// Insertion-ordered set of canonical skills. The first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    skills: Vec<String>,
    seen: HashSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `skill` unless already present. Returns whether it was added.
    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.seen.contains(&skill) {
            return false;
        }
        self.seen.insert(skill.clone());
        self.skills.push(skill);
        true
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.seen.contains(skill)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }
}

impl Deref for SkillSet {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.skills
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for SkillSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for skill in iter {
            self.insert(skill);
        }
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        skills.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.skills
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}
