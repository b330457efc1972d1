use anyhow::Context;
use clap::Parser;

use herencia_dto::cli::{Cli, Command};
use herencia_dto::{load_personas, logger, save_personas};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level);

    match cli.command {
        Command::Show { input } => {
            let personas =
                load_personas(&input).with_context(|| format!("loading personas from '{}'", input.display()))?;
            for persona in &personas {
                println!("{persona}");
            }
        }
        Command::Convert { input, output } => {
            let personas =
                load_personas(&input).with_context(|| format!("loading personas from '{}'", input.display()))?;
            save_personas(&output, &personas)
                .with_context(|| format!("saving personas to '{}'", output.display()))?;
            log::info!("Converted '{}' into '{}'.", input.display(), output.display());
        }
    }

    Ok(())
}
