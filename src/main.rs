use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use bashmenu::app::App;
use bashmenu::config::CommandTable;
use bashmenu::runner::ShellRunner;

#[derive(Parser)]
#[command(name = "bashmenu")]
#[command(about = "Interactive menu over named shell commands", long_about = None)]
struct Cli {
    /// Path to the commands file (one name=command per line)
    config: PathBuf,

    /// Shell interpreter to run commands with (default: $SHELL, then sh)
    #[arg(long)]
    shell: Option<String>,

    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table = CommandTable::load(&cli.config)?;
    info!("loaded {} commands from {}", table.len(), cli.config.display());

    let runner = ShellRunner::new(cli.shell);
    if cli.verbose {
        println!(
            "Loaded {} commands, running through {}",
            table.len(),
            runner.shell()
        );
    }

    App::new(table, runner).run()
}
