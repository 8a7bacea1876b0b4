use serde::Serialize;

use super::super::domain::{ChartKind, VacancyCategory};

/// One ranked skill as handed to the renderer: position, count, and the
/// colors the mark and its label should use.
#[derive(Debug, Clone, Serialize)]
pub struct SkillRankEntry {
    pub rank: usize,
    pub skill: String,
    pub count: u32,
    pub color: String,
    pub text_color: &'static str,
}

/// Complete render instruction for one selector state. The renderer owns
/// layout and drawing; everything it needs to stay deterministic is here.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub category: VacancyCategory,
    pub category_label: &'static str,
    pub chart: ChartKind,
    pub chart_label: &'static str,
    pub requested: usize,
    pub total_mentions: u64,
    pub distinct_skills: usize,
    pub entries: Vec<SkillRankEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorOption {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Option lists for the two UI dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct SelectorOptions {
    pub categories: Vec<SelectorOption>,
    pub charts: Vec<SelectorOption>,
}
