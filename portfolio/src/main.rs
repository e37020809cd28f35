use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio::commands::{email::EmailCommand, serve::serve};
use portfolio_config::Config;
use portfolio_utils::portfolio_version;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version = portfolio_version(), about = "Contact form relay for the portfolio site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the contact form endpoint
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Check the email provider setup
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Load the configuration and report problems
    CheckConfig {
        /// Also print the loaded configuration (secrets are redacted)
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print shell completions to stdout
    Completion {
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = match Cli::parse().command {
        Command::Completion { shell } => {
            print_completions(shell);
            return Ok(());
        }
        command => command,
    };

    init_tracing();
    let config = portfolio_config::load().context("Failed to load config")?;

    match command {
        Command::Serve => serve(config).await,
        Command::Email { command } => command.invoke(config).await,
        Command::CheckConfig { verbose } => check_config(&config, verbose),
        Command::Completion { .. } => Ok(()),
    }
}

fn check_config(config: &Config, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        println!("{config:#?}");
    }
    portfolio::environment::ConfigProvider::new(config)?;
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    clap_complete::generate(
        shell,
        &mut command,
        env!("CARGO_BIN_NAME"),
        &mut std::io::stdout(),
    );
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env());

    #[cfg(tracing_pretty)]
    let subscriber = subscriber.pretty();

    subscriber.init();
}
