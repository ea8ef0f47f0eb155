use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes the configuration
/// file with default values. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(Path::new);
    let path = Config::init_all(custom, cli.test)?;

    println!("⚙️  Initializing rTimeline…");
    println!("📄 Config file : {}", path.display());

    println!("🎉 rTimeline initialization completed!");
    Ok(())
}
