use anyhow::Context;
use cartera_core::config::Settings;
use cartera_core::domain::allocation::Universe;
use cartera_core::error::InputError;
use cartera_core::pipeline::{self, BenchmarkOptions};
use cartera_core::portfolio::classifier;
use cartera_core::risk::{benchmark_weights::benchmark_weights, scoring};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod input;

#[derive(Debug, Parser)]
#[command(name = "cartera_worker")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a questionnaire answers file.
    Score {
        #[arg(long)]
        answers: PathBuf,
    },
    /// Benchmark allocation and block weights for a risk score.
    Allocate {
        /// Global risk score (0-100). Omit for an unscored client.
        #[arg(long)]
        score: Option<f64>,
        #[command(flatten)]
        benchmark: BenchmarkArgs,
    },
    /// Classify statement holdings by asset class and region.
    Classify {
        #[arg(long)]
        holdings: PathBuf,
        /// Uninvested cash; overrides the statement's cashBalance.
        #[arg(long)]
        cash: Option<f64>,
    },
    /// Compare model weights against the benchmark and write the commentary.
    Compare {
        #[arg(long)]
        score: Option<f64>,
        /// JSON object of block id -> absolute weight.
        #[arg(long)]
        model: PathBuf,
        #[command(flatten)]
        benchmark: BenchmarkArgs,
    },
    /// Score answers, resolve the benchmark and project retirement for pension goals.
    Profile {
        #[arg(long)]
        answers: PathBuf,
        /// Retirement inputs (sex, currentAge, smoker, health, retirementAge,
        /// desiredMonthlyPension).
        #[arg(long)]
        retirement: Option<PathBuf>,
        #[command(flatten)]
        benchmark: BenchmarkArgs,
    },
}

#[derive(Debug, ClapArgs)]
struct BenchmarkArgs {
    /// Overrides CARTERA_UNIVERSE.
    #[arg(long)]
    universe: Option<Universe>,

    /// Overrides CARTERA_INCLUDE_ALTERNATIVES.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    include_alternatives: Option<bool>,
}

impl BenchmarkArgs {
    fn resolve(&self, settings: &Settings) -> BenchmarkOptions {
        let defaults = BenchmarkOptions::from_settings(settings);
        BenchmarkOptions {
            include_alternatives: self
                .include_alternatives
                .unwrap_or(defaults.include_alternatives),
            universe: self.universe.unwrap_or(defaults.universe),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<T: Serialize> {
    command: &'static str,
    generated_at: chrono::DateTime<chrono::Utc>,
    result: T,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    run(args.command, &settings).inspect_err(|e| {
        if let Some(input) = e.downcast_ref::<InputError>() {
            tracing::error!(stage = input.stage, detail = %input.detail, "rejected input");
        }
    })
}

fn run(command: Command, settings: &Settings) -> anyhow::Result<()> {
    match command {
        Command::Score { answers } => {
            let answers = input::load_answers(&answers)?;
            let report = scoring::score_with_report(&answers);
            if !report.skipped.is_empty() {
                tracing::warn!(skipped = ?report.skipped, "some answers could not be scored");
            }
            emit(settings, "score", report)
        }
        Command::Allocate { score, benchmark } => {
            let options = benchmark.resolve(settings);
            let weights = benchmark_weights(score, options.include_alternatives, options.universe);
            emit(settings, "allocate", weights)
        }
        Command::Classify { holdings, cash } => {
            let statement = input::load_statement(&holdings)?;
            let cash_balance = cash.unwrap_or(statement.cash_balance);
            anyhow::ensure!(cash_balance.is_finite(), "cash must be a finite number");
            let composition = classifier::classify(&statement.holdings, cash_balance);
            emit(settings, "classify", composition)
        }
        Command::Compare {
            score,
            model,
            benchmark,
        } => {
            let model_weights = input::load_model_weights(&model)?;
            let outcome = pipeline::run_comparison(score, benchmark.resolve(settings), &model_weights);
            emit(settings, "compare", outcome)
        }
        Command::Profile {
            answers,
            retirement,
            benchmark,
        } => {
            let answers = input::load_answers(&answers)?;
            let retirement = retirement
                .as_deref()
                .map(input::load_retirement)
                .transpose()?;
            let outcome =
                pipeline::run_profile(&answers, benchmark.resolve(settings), retirement.as_ref());
            emit(settings, "profile", outcome)
        }
    }
}

fn emit<T: Serialize>(settings: &Settings, command: &'static str, result: T) -> anyhow::Result<()> {
    let output = Output {
        command,
        generated_at: chrono::Utc::now(),
        result,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = if settings.output_pretty {
        serde_json::to_writer_pretty(&mut out, &output)
    } else {
        serde_json::to_writer(&mut out, &output)
    };
    written.context("write json output")?;
    writeln!(out).context("write json output")?;

    tracing::debug!(command, "wrote result");
    Ok(())
}
