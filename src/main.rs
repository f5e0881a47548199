use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use data_processor::cli::{
    execute_process, execute_show_config, execute_validate, report_failure, Cli, Commands,
};

fn main() -> Result<()> {
    // stdoutは処理結果のJSON用に空けておき、ログはstderrへ出す
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "data_processor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = run(cli.command);
    if let Err(error) = &result {
        report_failure(error);
    }
    result
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Process {
            input,
            config,
            batch_size,
            output,
            quiet,
        } => {
            execute_process(input, config, batch_size, output, quiet)?;
        }
        Commands::Validate { input } => {
            execute_validate(input)?;
        }
        Commands::ShowConfig { config } => {
            execute_show_config(config)?;
        }
    }

    Ok(())
}
