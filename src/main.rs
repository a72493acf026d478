use clap::Parser;
use tickquiz::app::App;
use tickquiz::config::QuizConfig;
use tickquiz::quiz::{default_questions, IntervalTicker, QuizSession};
use tickquiz::{error, logging, Result};
use tracing::{error, info};

/// Timed multiple-choice quiz
#[derive(Debug, Parser)]
#[command(name = "tickquiz", version, about)]
struct Cli {
    /// Seconds allowed per question (overrides the config file)
    #[arg(long, value_name = "SECS")]
    time_limit: Option<u32>,

    /// Write the effective configuration to the config file
    #[arg(long)]
    save_config: bool,

    /// Plain line-based mode instead of the full-screen UI
    #[arg(long)]
    simple: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = QuizConfig::load()?;
    if let Some(secs) = cli.time_limit {
        config = config.with_time_limit(secs);
    }
    config.validate()?;

    if cli.save_config {
        let path = config.save()?;
        info!(path = %path.display(), "configuration saved");
    }

    if cli.simple {
        let mut session = QuizSession::new(
            default_questions(),
            config.time_limit_secs,
            IntervalTicker::new(),
        )?;
        tickquiz::simple::run(&mut session).await?;
        return Ok(());
    }

    let mut app = App::new(&config)?;
    app.init()?;
    app.run()
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match logging::log_file_path().and_then(|path| logging::init(&path, &cli.log_level)) {
        Ok(()) => info!("tickquiz starting"),
        Err(err) => eprintln!("{}", error::user_friendly_message(&err)),
    }

    if let Err(err) = run(cli).await {
        error!(error = %err, "tickquiz failed");
        eprintln!("{}", error::user_friendly_message(&err));
        std::process::exit(1);
    }
}
