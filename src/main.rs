use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = focusboard::cli::Cli::parse();
    let config = focusboard::config::from_cli(&cli)?;
    focusboard::logging::init_tracing(&config, cli.log_filter.clone())?;

    match cli.command {
        Some(focusboard::cli::CliCommand::Tui) | None => focusboard::tui::run(config)?,
        Some(command) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            focusboard::commands::execute(command, &mut handle)?;
        }
    }

    Ok(())
}
