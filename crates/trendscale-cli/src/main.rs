use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "trendscale", version, about = "Daily weight-trend tracker")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and manage weigh-ins
    Weigh {
        #[command(subcommand)]
        action: commands::weigh::WeighAction,
    },
    /// Trend analysis and charts
    Trend {
        #[command(subcommand)]
        action: commands::trend::TrendAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Weigh { action } => commands::weigh::run(action),
        Commands::Trend { action } => commands::trend::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
