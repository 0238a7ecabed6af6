use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use candidate_screener::llm::FALLBACK_RECOMMENDATION;
use candidate_screener::models::{EvaluationReport, InferenceOutcome};
use candidate_screener::{
    CandidateInput, Config, GithubClient, OllamaRunner, ProfileCache, ScreeningPipeline,
};

#[derive(Parser, Debug)]
#[command(name = "candidate-screener")]
#[command(version = "0.1.0")]
#[command(about = "Score a candidate across resume, GitHub, academics and projects")]
struct Args {
    /// Resume PDF to extract text from
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Resume text supplied directly (overrides --resume)
    #[arg(long)]
    resume_text: Option<String>,

    /// GitHub username or profile URL
    #[arg(short, long, default_value = "")]
    github: String,

    /// 10th grade percentage
    #[arg(long, value_parser = parse_percentage, default_value = "0")]
    tenth: f64,

    /// 12th grade percentage
    #[arg(long, value_parser = parse_percentage, default_value = "0")]
    twelfth: f64,

    /// CGPA on a 10-point scale
    #[arg(long, value_parser = parse_cgpa, default_value = "0")]
    cgpa: f64,

    /// Project description (repeatable)
    #[arg(long = "project")]
    projects: Vec<String>,

    /// File with project descriptions, one per line
    #[arg(long)]
    projects_file: Option<PathBuf>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Ollama model to generate the recommendation with
    #[arg(long)]
    model: Option<String>,

    /// Skip the recommendation step entirely
    #[arg(long)]
    no_llm: bool,

    /// Disable the GitHub profile cache
    #[arg(long)]
    no_cache: bool,

    /// Cache database path
    #[arg(long)]
    database: Option<String>,
}

fn parse_percentage(value: &str) -> Result<f64, String> {
    let parsed: f64 = value.parse().map_err(|_| "not a number".to_string())?;
    if (0.0..=100.0).contains(&parsed) {
        Ok(parsed)
    } else {
        Err("must be between 0 and 100".to_string())
    }
}

fn parse_cgpa(value: &str) -> Result<f64, String> {
    let parsed: f64 = value.parse().map_err(|_| "not a number".to_string())?;
    if (0.0..=10.0).contains(&parsed) {
        Ok(parsed)
    } else {
        Err("must be between 0 and 10".to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("candidate_screener=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(database) = &args.database {
        config.cache_path = database.clone();
    }

    // Resume text: inline beats PDF; extraction failure degrades to empty.
    let resume_text = match (&args.resume_text, &args.resume) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => match candidate_screener::input::resume_text_from_pdf(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Resume extraction failed, continuing without text: {}", e);
                String::new()
            }
        },
        (None, None) => String::new(),
    };

    let mut projects = args.projects.clone();
    if let Some(path) = &args.projects_file {
        projects.extend(candidate_screener::input::projects_from_file(path)?);
    }

    let github = GithubClient::new(&config)?;
    let mut pipeline = ScreeningPipeline::new(github);

    if !args.no_cache {
        match ProfileCache::new(&config.cache_path, config.cache_ttl) {
            Ok(cache) => pipeline = pipeline.with_cache(cache),
            Err(e) => tracing::warn!("Profile cache unavailable, continuing without: {}", e),
        }
    }

    if !args.no_llm {
        pipeline = pipeline
            .with_provider(OllamaRunner::new(&config.model, config.inference_timeout));
    }

    let input = CandidateInput {
        resume_text,
        github_username: args.github.clone(),
        tenth: args.tenth,
        twelfth: args.twelfth,
        cgpa: args.cgpa,
        projects,
    };

    let report = pipeline.evaluate(&input).await;

    output_report(&report, &args)?;

    Ok(())
}

fn output_report(report: &EvaluationReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &EvaluationReport) -> String {
    let mut output = String::new();

    output.push_str("\n=== Candidate Evaluation ===\n\n");
    output.push_str(&format!("Overall Fit Score: {}/100\n\n", report.fit_score));

    output.push_str(&format!("Resume: {}/100\n", report.resume.score));
    output.push_str(&format!("  {}\n", report.resume.summary));

    output.push_str(&format!("GitHub: {}/100\n", report.github.score));
    output.push_str(&format!("  {}\n", report.github.summary));

    output.push_str(&format!("Academics: {}/100\n", report.academics.score));
    output.push_str(&format!("  {}\n", report.academics.summary));

    output.push_str(&format!("Projects: {}/100\n", report.projects.score));
    output.push_str(&format!("  {}\n", report.projects.summary));

    for strength in &report.projects.strengths {
        output.push_str(&format!("  + {}\n", strength));
    }
    for weakness in &report.projects.weaknesses {
        output.push_str(&format!("  - {}\n", weakness));
    }

    output.push_str("\nRecommendation:\n");
    match &report.recommendation {
        InferenceOutcome::Text(text) => output.push_str(&format!("{}\n", text)),
        InferenceOutcome::Degraded(reason) => {
            output.push_str(&format!("[degraded: {}]\n", reason));
            output.push_str(&format!("Fallback: {}\n", FALLBACK_RECOMMENDATION));
        }
    }

    output.push_str(&format!(
        "\nEvaluated on: {}\n",
        report.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &EvaluationReport) -> String {
    let mut output = String::new();

    output.push_str("# Candidate Evaluation\n\n");
    output.push_str(&format!(
        "**Overall Fit Score:** {}/100\n\n",
        report.fit_score
    ));

    output.push_str("| Domain | Score | Summary |\n|--------|-------|---------|\n");
    output.push_str(&format!(
        "| Resume | {} | {} |\n",
        report.resume.score, report.resume.summary
    ));
    output.push_str(&format!(
        "| GitHub | {} | {} |\n",
        report.github.score, report.github.summary
    ));
    output.push_str(&format!(
        "| Academics | {} | {} |\n",
        report.academics.score, report.academics.summary
    ));
    output.push_str(&format!(
        "| Projects | {} | {} |\n",
        report.projects.score, report.projects.summary
    ));

    if !report.projects.strengths.is_empty() {
        output.push_str("\n## Strengths\n\n");
        for strength in &report.projects.strengths {
            output.push_str(&format!("- {}\n", strength));
        }
    }

    if !report.projects.weaknesses.is_empty() {
        output.push_str("\n## Areas for Improvement\n\n");
        for weakness in &report.projects.weaknesses {
            output.push_str(&format!("- {}\n", weakness));
        }
    }

    output.push_str("\n## Recommendation\n\n");
    match &report.recommendation {
        InferenceOutcome::Text(text) => output.push_str(&format!("{}\n", text)),
        InferenceOutcome::Degraded(reason) => {
            output.push_str(&format!("> Recommendation degraded: {}\n\n", reason));
            output.push_str(&format!("{}\n", FALLBACK_RECOMMENDATION));
        }
    }

    output.push_str(&format!(
        "\n---\n*Evaluated on {}*\n",
        report.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
