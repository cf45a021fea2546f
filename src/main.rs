use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use cvmatch::analysis::{clean, ranked_terms};
use cvmatch::config::Config;
use cvmatch::extract::extractor_for;
use cvmatch::output::{json, terminal};
use cvmatch::pipeline::{analyze, AnalysisRequest};

/// How much extracted resume text `--show-text` prints.
const RESUME_PREVIEW_CHARS: usize = 4000;

/// cvmatch: compare a resume against a job description.
///
/// Scores how closely the resume's vocabulary matches the posting and lists
/// the posting's most salient terms that the resume never mentions.
#[derive(Parser)]
#[command(name = "cvmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a resume (PDF or text) against a job description
    Analyze {
        /// Resume file (.pdf, or any plain-text file)
        #[arg(long)]
        resume: PathBuf,

        #[command(flatten)]
        job: JobDescriptionArgs,

        /// Max missing keywords to report (default: CVMATCH_TOP_N or 20)
        #[arg(long)]
        top_n: Option<usize>,

        /// Print the report as JSON instead of colored text
        #[arg(long)]
        json: bool,

        /// Show every missing keyword instead of the first few
        #[arg(long)]
        all: bool,

        /// Also print the text extracted from the resume
        #[arg(long)]
        show_text: bool,
    },

    /// Show the most salient terms of a job description
    Keywords {
        #[command(flatten)]
        job: JobDescriptionArgs,

        /// Number of terms to show (default: CVMATCH_TOP_N or 20)
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// Print the normalized text of a document
    Clean {
        /// Document to normalize (.pdf or plain text)
        path: PathBuf,
    },
}

/// Where the job description comes from: a file or inline text.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct JobDescriptionArgs {
    /// Job description file
    #[arg(long)]
    jd: Option<PathBuf>,

    /// Job description text, pasted inline
    #[arg(long)]
    jd_text: Option<String>,
}

impl JobDescriptionArgs {
    fn load(&self) -> Result<String> {
        if let Some(text) = &self.jd_text {
            return Ok(text.clone());
        }
        let path = self
            .jd
            .as_deref()
            .context("Provide a job description with --jd or --jd-text")?;
        extractor_for(path)
            .extract(path)
            .with_context(|| format!("No text found in job description {}", path.display()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cvmatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            resume,
            job,
            top_n,
            json: as_json,
            all,
            show_text,
        } => {
            let config = Config::load()?;
            let job_description = job.load()?;

            let Some(resume_text) = read_resume(&resume) else {
                terminal::display_extraction_error(&resume);
                std::process::exit(1);
            };

            let request = AnalysisRequest::new(Some(resume_text.clone()), job_description)
                .with_top_n(config.top_n_or(top_n));

            let spinner = if as_json { None } else { Some(analysis_spinner()?) };
            let report = analyze(request, &config.thresholds).await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            let report = report?;

            if as_json {
                println!("{}", json::report_json(&report)?);
            } else {
                if show_text {
                    terminal::display_resume_text(&resume_text, RESUME_PREVIEW_CHARS);
                }
                terminal::display_report(&report, config.display_limit, all);
                println!(
                    "{}",
                    "Tip: for best results use a text-based PDF (not a scanned image) and the complete job description."
                        .dimmed()
                );
            }
        }

        Commands::Keywords { job, top_n } => {
            let config = Config::load()?;
            let job_description = job.load()?;
            let jd_clean = clean(Some(job_description.as_str()));
            let mut terms = ranked_terms(&jd_clean);
            terms.truncate(config.top_n_or(top_n));
            info!(terms = terms.len(), "Ranked job description keywords");
            terminal::display_ranked_terms(&terms);
        }

        Commands::Clean { path } => {
            let Some(text) = read_resume(&path) else {
                terminal::display_extraction_error(&path);
                std::process::exit(1);
            };
            println!("{}", clean(Some(text.as_str())));
        }
    }

    Ok(())
}

fn read_resume(path: &Path) -> Option<String> {
    info!(path = %path.display(), "Extracting document text");
    extractor_for(path).extract(path)
}

fn analysis_spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    pb.set_message("Analyzing your resume...");
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
