use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use code_quiz::client::DEFAULT_API_URL;
use code_quiz::config::{Config, DEFAULT_QUESTION_COUNT, DEFAULT_TIME_LIMIT_SECS, GameSettings};
use code_quiz::Quiz;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the quiz service
    #[arg(long, env = "QUIZ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Number of random questions to request
    #[arg(short, long, default_value_t = DEFAULT_QUESTION_COUNT)]
    count: usize,

    /// Time limit for a game, in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    time_limit: u32,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            api_url: args.api_url,
            game: GameSettings {
                question_count: args.count,
                time_limit_secs: args.time_limit,
            },
            log_file: args.log_file,
        }
    }
}

// The terminal belongs to the UI, so logs only go to a file.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "code_quiz=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = Config::from(Args::parse());

    if let Some(path) = &config.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let quiz = match Quiz::new(config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error starting quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
