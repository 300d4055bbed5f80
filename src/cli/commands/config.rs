use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if !*print_config {
            warning("Nothing to do: use --print to show the configuration.");
            return Ok(());
        }

        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
    }
    Ok(())
}
