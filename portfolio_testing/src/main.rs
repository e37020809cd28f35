use std::net::IpAddr;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio_testing::resend;

/// Local stand-ins for the external services the portfolio backend talks to
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fake the Resend send email endpoint
    Resend {
        #[command(flatten)]
        listen: Listen,
        /// Bearer token the fake accepts
        #[arg(long, env = "RESEND_API_KEY", default_value = "re_test_key")]
        api_key: String,
    },
    /// Print shell completions to stdout
    Completion {
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
struct Listen {
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, default_value_t = 8001)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Resend {
            listen: Listen { host, port },
            api_key,
        } => resend::start_server(host, port, api_key).await,
        Command::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(
                shell,
                &mut command,
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resend_defaults() {
        let cli = Cli::try_parse_from(["portfolio-testing", "resend", "--api-key", "abc"]).unwrap();
        let Command::Resend { listen, api_key } = cli.command else {
            panic!("expected the resend command");
        };
        assert_eq!(listen.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(listen.port, 8001);
        assert_eq!(api_key, "abc");
    }
}
