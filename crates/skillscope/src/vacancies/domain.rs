use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::DEFAULT_TOP_SKILLS;

/// The fixed set of vacancy classifications partitioning the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacancyCategory {
    DataAnalyst,
    Backend,
    Frontend,
    Fullstack,
}

impl VacancyCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::DataAnalyst,
            Self::Backend,
            Self::Frontend,
            Self::Fullstack,
        ]
    }

    /// Stable identifier used in file names, URLs, and payloads.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::DataAnalyst => "data_analyst",
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DataAnalyst => "Data Analyst",
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::Fullstack => "Fullstack",
        }
    }

    /// Search expression used when harvesting fresh postings for this category.
    pub const fn search_query(self) -> &'static str {
        match self {
            Self::DataAnalyst => r#""Data analyst" OR "Аналитик данных""#,
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::Fullstack => "Fullstack",
        }
    }

    /// Name of the dataset document holding this category's records.
    pub fn dataset_file_name(self) -> String {
        format!("{}_vacancies.json", self.slug())
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.slug() == value)
    }
}

impl fmt::Display for VacancyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Rendering mode requested through the visualization selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bubble,
    Bar,
    #[serde(rename = "wordcloud")]
    WordCloud,
}

impl ChartKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Bubble, Self::Bar, Self::WordCloud]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Bar => "bar",
            Self::WordCloud => "wordcloud",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Chart",
            Self::Bar => "Bar Chart",
            Self::WordCloud => "Word Cloud",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|chart| chart.slug() == value)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One vacancy posting. Only the skill labels drive the analytics; the name
/// is carried through untouched. A record without a skills list is rejected
/// at parse time so a broken dataset fails the load instead of under-counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    #[serde(default)]
    pub name: String,
    pub skills: Vec<String>,
}

/// State of the two UI selectors, carried by a selector-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Selection {
    pub category: VacancyCategory,
    pub chart: ChartKind,
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Selection {
    pub fn new(category: VacancyCategory, chart: ChartKind) -> Self {
        Self {
            category,
            chart,
            top: DEFAULT_TOP_SKILLS,
        }
    }
}

fn default_top() -> usize {
    DEFAULT_TOP_SKILLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_slugs_round_trip() {
        for category in VacancyCategory::ordered() {
            assert_eq!(VacancyCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(VacancyCategory::from_slug("devops"), None);
    }

    #[test]
    fn wordcloud_slug_stays_one_word() {
        assert_eq!(ChartKind::WordCloud.slug(), "wordcloud");
        let parsed: ChartKind =
            serde_json::from_str("\"wordcloud\"").expect("wordcloud deserializes");
        assert_eq!(parsed, ChartKind::WordCloud);
    }

    #[test]
    fn selection_defaults_to_twenty_skills() {
        let selection: Selection =
            serde_json::from_str(r#"{"category": "backend", "chart": "bar"}"#)
                .expect("selection deserializes");
        assert_eq!(selection.category, VacancyCategory::Backend);
        assert_eq!(selection.top, DEFAULT_TOP_SKILLS);
    }

    #[test]
    fn vacancy_without_skills_is_rejected() {
        let result = serde_json::from_str::<Vacancy>(r#"{"name": "Backend developer"}"#);
        assert!(result.is_err(), "missing skills list must not parse");
    }
}
