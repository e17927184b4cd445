use clap::Parser;
use miette::Result;
use bloom::cli::{start_session, Cli, Commands};
use bloom::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render(args) => {
            let (config, mut session) = start_session(config_path, &printer)?;
            bloom::cli::render::run(args, &config, &mut session, &printer)?
        }
        Commands::Palette(args) => {
            let (_, mut session) = start_session(config_path, &printer)?;
            bloom::cli::palette::run(args, &mut session, &printer)?
        }
        Commands::Seed(args) => {
            let (_, mut session) = start_session(config_path, &printer)?;
            bloom::cli::seed::run(args, &mut session)?
        }
        Commands::Completions(args) => bloom::cli::completions::run(args)?,
    }

    Ok(())
}
