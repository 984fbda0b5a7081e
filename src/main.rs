use anyhow::Result;
use clap::Parser;

use glot_cli::cli::commands::{configure, run, session};
use glot_cli::cli::{Args, Command};
use glot_cli::language::print_languages;
use glot_cli::output::{self, OutputConfig};
use glot_cli::prompt::OperationKind;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Session {
            from,
            to,
            model,
            retries,
        }) => {
            let options = session::SessionOptions {
                from,
                to,
                model,
                retries,
            };
            session::run_session(options).await?;
        }
        Some(Command::Proofread {
            file,
            from,
            model,
            retries,
        }) => {
            let options = run::RunOptions {
                operation: OperationKind::Proofread,
                file,
                from,
                to: None,
                model,
                retries,
            };
            run::run_submit(options).await?;
        }
        None => {
            let options = run::RunOptions {
                operation: OperationKind::Translate,
                file: args.file,
                from: args.from,
                to: args.to,
                model: args.model,
                retries: args.retries,
            };
            run::run_submit(options).await?;
        }
    }

    Ok(())
}
