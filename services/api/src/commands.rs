use clap::{Args, ValueEnum};
use listing_quality::config::AppConfig;
use listing_quality::error::AppError;
use listing_quality::lqm::Category;
use listing_quality::{ListingAnalyzer, ListingData, ListingReport, LqmEngine};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Full report as pretty-printed JSON
    #[default]
    Json,
    /// Human readable summary
    Text,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file with an extracted listing record (`-` reads stdin)
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Listing page to fetch and score
    #[arg(long)]
    pub(crate) url: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = read_input(&args.input)?;
    let data: ListingData = serde_json::from_str(&raw)?;
    let report = ListingReport::build(None, data.clone(), LqmEngine::standard().score_all(&data));
    emit(&report, args.format)
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let analyzer = ListingAnalyzer::new(&config.extraction, config.vision)?;
    let report = analyzer.analyze(&args.url).await?;
    emit(&report, args.format)
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn emit(report: &ListingReport, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => render_report(report),
    }
    Ok(())
}

fn render_report(report: &ListingReport) {
    println!("Listing Quality Report");
    if let Some(url) = &report.url {
        println!("URL: {}", url);
    }
    println!("Total LQM score: {}", report.total_lqm_score);

    println!("\nScored categories");
    for category in Category::ordered().into_iter().filter(|c| !c.is_advisory()) {
        if let Some(summary) = report.category(category) {
            println!(
                "- {:<14} bonus {:>3}  malus {:>4}",
                category.label(),
                summary.bonus,
                summary.malus
            );
            for item in summary.items.iter().filter(|item| item.score() != 0) {
                println!("    {:+} {}: {}", item.score(), item.attribute(), item.reason());
            }
        }
    }

    println!("\nAdvisory categories");
    for category in Category::ordered().into_iter().filter(|c| c.is_advisory()) {
        if let Some(summary) = report.category(category) {
            let status = match summary.all_passed {
                Some(true) => "all passed",
                Some(false) => "needs attention",
                None => "not applicable",
            };
            println!("- {}: {}", category.label(), status);
        }
    }

    let recommendations = report.recommendations();
    if !recommendations.is_empty() {
        println!("\nRecommendations");
        for (attribute, recommendation) in recommendations {
            println!("- {}: {}", attribute, recommendation);
        }
    }
}
