use clap::{Args, Parser, Subcommand};
use skillscope::error::AppError;
use skillscope::harvest::{write_datasets, HarvestClient, HarvestOptions};
use skillscope::vacancies::VacancyCategory;
use std::path::PathBuf;
use std::time::Duration;

use crate::report::{run_report, ReportArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Vacancy Skill Explorer",
    about = "Serve and inspect skill-demand analytics over harvested vacancy datasets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the most requested skills in the harvested datasets
    Skills {
        #[command(subcommand)]
        command: SkillsCommand,
    },
    /// Collect fresh vacancy datasets from the public search API
    Harvest(HarvestArgs),
}

#[derive(Subcommand, Debug)]
enum SkillsCommand {
    /// Print the ranked skill report for one category
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct HarvestArgs {
    /// Directory the dataset files are written to
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,
    /// Search results requested per page
    #[arg(long, default_value_t = 100)]
    per_page: u32,
    /// Pages fetched per category before stopping
    #[arg(long, default_value_t = 20)]
    max_pages: u32,
    /// Pause between detail requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pause_ms: u64,
    /// Restrict the harvest to specific categories (defaults to all)
    #[arg(long = "category", value_parser = parse_category)]
    categories: Vec<VacancyCategory>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Skills {
            command: SkillsCommand::Report(args),
        } => run_report(args),
        Command::Harvest(args) => run_harvest(args).await,
    }
}

pub(crate) fn parse_category(raw: &str) -> Result<VacancyCategory, String> {
    VacancyCategory::from_slug(raw.trim()).ok_or_else(|| {
        let known: Vec<&str> = VacancyCategory::ordered()
            .iter()
            .map(|category| category.slug())
            .collect();
        format!(
            "unknown vacancy category '{raw}' (expected one of: {})",
            known.join(", ")
        )
    })
}

async fn run_harvest(args: HarvestArgs) -> Result<(), AppError> {
    let HarvestArgs {
        out_dir,
        per_page,
        max_pages,
        pause_ms,
        categories,
    } = args;

    let options = HarvestOptions {
        per_page,
        max_pages,
        pause: Duration::from_millis(pause_ms),
    };
    let client = HarvestClient::new(options);

    let categories = if categories.is_empty() {
        VacancyCategory::ordered().to_vec()
    } else {
        categories
    };

    let mut collected = Vec::new();
    for category in categories {
        println!("Collecting {} vacancies", category.label());
        let vacancies = client.collect(category).await?;
        println!("- {} records", vacancies.len());
        collected.push((category, vacancies));
    }

    let manifest = write_datasets(&out_dir, &collected)?;
    println!(
        "\nDatasets written to {} ({} categories, generated {})",
        out_dir.display(),
        manifest.categories.len(),
        manifest.generated_at
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_category_accepts_known_slugs() {
        assert_eq!(
            parse_category("backend").expect("backend parses"),
            VacancyCategory::Backend
        );
        assert_eq!(
            parse_category(" data_analyst ").expect("padded slug parses"),
            VacancyCategory::DataAnalyst
        );
    }

    #[test]
    fn parse_category_lists_the_alternatives() {
        let message = parse_category("devops").expect_err("unknown slug rejected");
        assert!(message.contains("data_analyst, backend, frontend, fullstack"));
    }
}
