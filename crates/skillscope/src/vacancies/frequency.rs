use serde::Serialize;
use std::collections::HashMap;

use super::domain::Vacancy;

/// Ranked skills a report includes unless the caller asks otherwise.
pub const DEFAULT_TOP_SKILLS: usize = 20;

/// Occurrence counts per skill label within one category.
///
/// Labels are taken literally: case and whitespace variants count separately,
/// and a label repeated within a single posting counts every occurrence.
/// Built once when a dataset loads and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFrequencies {
    counts: HashMap<String, u32>,
}

impl SkillFrequencies {
    pub fn count(vacancies: &[Vacancy]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for vacancy in vacancies {
            for skill in &vacancy.skills {
                *counts.entry(skill.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct skill labels seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, equal to the total skill mentions across the
    /// records the table was built from.
    pub fn total_mentions(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    pub fn get(&self, skill: &str) -> u32 {
        self.counts.get(skill).copied().unwrap_or(0)
    }

    /// The top `n` skills by count, highest first. Equal counts order
    /// lexicographically by label so repeated runs rank identically.
    pub fn top(&self, n: usize) -> Vec<SkillRank> {
        let mut ranks: Vec<SkillRank> = self
            .counts
            .iter()
            .map(|(skill, &count)| SkillRank {
                skill: skill.clone(),
                count,
            })
            .collect();

        ranks.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
        ranks.truncate(n);
        ranks
    }
}

/// One (skill, count) pair selected by descending-count ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRank {
    pub skill: String,
    pub count: u32,
}
