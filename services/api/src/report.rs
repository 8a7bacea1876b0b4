use clap::Args;
use skillscope::error::AppError;
use skillscope::vacancies::{
    ChartKind, ChartSpec, Selection, SkillDataset, VacancyCategory, DEFAULT_TOP_SKILLS,
};
use std::path::PathBuf;

use crate::cli::parse_category;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Vacancy category to rank (data_analyst, backend, frontend, fullstack)
    #[arg(long, value_parser = parse_category)]
    category: VacancyCategory,
    /// Chart the report is destined for (bubble, bar, wordcloud)
    #[arg(long, default_value = "bar", value_parser = parse_chart)]
    chart: ChartKind,
    /// Number of ranked skills to include
    #[arg(long, default_value_t = DEFAULT_TOP_SKILLS)]
    top: usize,
    /// Directory holding the harvested dataset files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Output format (table, json, csv)
    #[arg(long, default_value = "table", value_parser = parse_format)]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Table,
    Json,
    Csv,
}

fn parse_chart(raw: &str) -> Result<ChartKind, String> {
    ChartKind::from_slug(raw.trim())
        .ok_or_else(|| format!("unknown chart kind '{raw}' (expected bubble, bar, or wordcloud)"))
}

fn parse_format(raw: &str) -> Result<ReportFormat, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "table" => Ok(ReportFormat::Table),
        "json" => Ok(ReportFormat::Json),
        "csv" => Ok(ReportFormat::Csv),
        _ => Err(format!(
            "unknown report format '{raw}' (expected table, json, or csv)"
        )),
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let dataset = SkillDataset::from_dir(&args.data_dir)?;
    let selection = Selection {
        category: args.category,
        chart: args.chart,
        top: args.top,
    };
    let spec = ChartSpec::build(&dataset, selection);

    match args.format {
        ReportFormat::Table => render_table(&spec),
        ReportFormat::Json => println!("{}", spec.to_json_pretty()?),
        ReportFormat::Csv => spec.write_csv(std::io::stdout().lock())?,
    }

    Ok(())
}

fn render_table(spec: &ChartSpec) {
    println!("Skill demand report");
    println!(
        "Category: {} | Chart: {} | Requested: {}",
        spec.category_label, spec.chart_label, spec.requested
    );
    println!(
        "{} skill mentions across {} distinct skills",
        spec.total_mentions, spec.distinct_skills
    );

    if spec.entries.is_empty() {
        println!("\nNo skills recorded for this category");
        return;
    }

    println!();
    for entry in &spec.entries {
        println!(
            "{:>3}. {} ({} mentions, {})",
            entry.rank, entry.skill, entry.count, entry.color
        );
    }
}
