use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: create the config directory and write a
/// default configuration file. In test mode nothing touches the home dir.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing caretally…");

    let path = Config::init_all(cli.test)?;
    println!("📄 Config file : {}", path.display());

    success("caretally initialization completed");
    Ok(())
}
