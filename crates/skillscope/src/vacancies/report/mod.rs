pub mod palette;
mod views;

pub use views::{ChartSpec, SelectorOption, SelectorOptions, SkillRankEntry};

use super::dataset::SkillDataset;
use super::domain::{ChartKind, Selection, VacancyCategory};
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("encoding report as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("writing report as CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl ChartSpec {
    /// Pure mapping from the loaded dataset and one selector state to the
    /// instruction handed to the renderer. A category with no loaded data
    /// yields an empty entry list, never an error.
    pub fn build(dataset: &SkillDataset, selection: Selection) -> Self {
        let Selection {
            category,
            chart,
            top,
        } = selection;

        let (ranks, total_mentions, distinct_skills) = match dataset.frequencies(category) {
            Some(frequencies) => (
                frequencies.top(top),
                frequencies.total_mentions(),
                frequencies.distinct(),
            ),
            None => (Vec::new(), 0, 0),
        };

        let colors = palette::rank_colors(ranks.len());
        let entries = ranks
            .into_iter()
            .zip(colors)
            .enumerate()
            .map(|(index, (rank, color))| SkillRankEntry {
                rank: index + 1,
                skill: rank.skill,
                count: rank.count,
                color: color.hex(),
                text_color: palette::text_color(color),
            })
            .collect();

        Self {
            category,
            category_label: category.label(),
            chart,
            chart_label: chart.label(),
            requested: top,
            total_mentions,
            distinct_skills,
            entries,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// CSV export of the ranked entries.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["rank", "skill", "count", "color"])?;
        for entry in &self.entries {
            csv_writer.write_record([
                entry.rank.to_string(),
                entry.skill.clone(),
                entry.count.to_string(),
                entry.color.clone(),
            ])?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// Option lists for the category and visualization dropdowns, in display order.
pub fn selector_options() -> SelectorOptions {
    SelectorOptions {
        categories: VacancyCategory::ordered()
            .into_iter()
            .map(|category| SelectorOption {
                slug: category.slug(),
                label: category.label(),
            })
            .collect(),
        charts: ChartKind::ordered()
            .into_iter()
            .map(|chart| SelectorOption {
                slug: chart.slug(),
                label: chart.label(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::domain::Vacancy;
    use super::*;

    fn sample_dataset() -> SkillDataset {
        SkillDataset::from_collections([(
            VacancyCategory::Backend,
            vec![
                Vacancy {
                    name: "Backend developer".to_string(),
                    skills: vec!["rust".to_string(), "sql".to_string()],
                },
                Vacancy {
                    name: "Platform engineer".to_string(),
                    skills: vec!["rust".to_string()],
                },
            ],
        )])
    }

    #[test]
    fn build_ranks_and_colors_every_entry() {
        let dataset = sample_dataset();
        let spec = ChartSpec::build(
            &dataset,
            Selection::new(VacancyCategory::Backend, ChartKind::Bubble),
        );

        assert_eq!(spec.total_mentions, 3);
        assert_eq!(spec.distinct_skills, 2);
        assert_eq!(spec.entries.len(), 2);
        assert_eq!(spec.entries[0].rank, 1);
        assert_eq!(spec.entries[0].skill, "rust");
        assert_eq!(spec.entries[0].count, 2);
        assert_eq!(spec.entries[0].color, palette::warm(1.0).hex());
        assert_eq!(spec.entries[1].skill, "sql");
        assert_eq!(spec.entries[1].color, palette::warm(0.0).hex());
    }

    #[test]
    fn unloaded_category_builds_an_empty_spec() {
        let dataset = sample_dataset();
        let spec = ChartSpec::build(
            &dataset,
            Selection::new(VacancyCategory::Frontend, ChartKind::Bar),
        );

        assert!(spec.entries.is_empty());
        assert_eq!(spec.total_mentions, 0);
        assert_eq!(spec.distinct_skills, 0);
        assert_eq!(spec.chart_label, "Bar Chart");
    }

    #[test]
    fn csv_export_lists_one_row_per_entry() {
        let dataset = sample_dataset();
        let spec = ChartSpec::build(
            &dataset,
            Selection::new(VacancyCategory::Backend, ChartKind::Bar),
        );

        let mut out = Vec::new();
        spec.write_csv(&mut out).expect("csv export succeeds");
        let text = String::from_utf8(out).expect("csv output is utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "rank,skill,count,color");
        assert!(lines[1].starts_with("1,rust,2,"));
    }

    #[test]
    fn selector_options_cover_both_dropdowns() {
        let options = selector_options();
        let category_slugs: Vec<&str> =
            options.categories.iter().map(|option| option.slug).collect();
        let chart_slugs: Vec<&str> = options.charts.iter().map(|option| option.slug).collect();
        assert_eq!(
            category_slugs,
            ["data_analyst", "backend", "frontend", "fullstack"]
        );
        assert_eq!(chart_slugs, ["bubble", "bar", "wordcloud"]);
    }
}
