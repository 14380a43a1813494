use clap::Parser;
use color_eyre::Result;

use swatchgrid::cli::{self, Cli};
use swatchgrid::tui::Terminal;
use swatchgrid::{logging, App};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    logging::init()?;

    // Load configuration
    let config = cli.load_config()?;

    // Catalog problems are fatal before the terminal is touched
    let catalog = cli.load_catalog(&config)?;
    let store = cli.state_store();

    if cli.is_headless() {
        let session = cli::headless_session(catalog, &store, &config);
        if cli.list {
            for line in cli::list_lines(&session) {
                println!("{}", line);
            }
        }
        if let Some(dir) = &cli.export {
            let path = cli::export_to(&session, dir, config.export.file_prefix())?;
            println!("{}", path.display());
        }
        return Ok(());
    }

    let terminal = Terminal::new()?;

    let mut app = App::new(config, catalog, store);
    app.run(terminal).await?;

    // Terminal is restored by now; print the state to resume from
    println!("{}", app.state_string());

    Ok(())
}
