use std::path::PathBuf;

use clap::{ArgAction, Parser};
use discrete_quiz::config::DEFAULT_TITLE;
use discrete_quiz::logging::{LogConfig, init_logging};
use discrete_quiz::{Quiz, QuizConfig};
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from
    #[arg(short, long)]
    questions: PathBuf,

    /// Heading shown on the welcome screen
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Seed for shuffling, for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace with module paths)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let log_config = LogConfig::from_verbosity(args.verbose)
        .with_log_file(args.log_file)
        .with_target(args.verbose >= 2);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = QuizConfig::default()
        .with_title(args.title)
        .with_seed(args.seed);

    let quiz = match Quiz::from_json(&args.questions, config.clone()) {
        Ok(quiz) => quiz,
        Err(e) => {
            error!(error = %e, path = %args.questions.display(), "failed to load quiz");
            if let Err(run_err) = Quiz::load_failed(&e, config).run() {
                eprintln!("Error running quiz: {}", run_err);
            }
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
