use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use worktrip::core::config::{self, CliOverrides};
use worktrip::core::state::App;
use worktrip::core::todo::Category;
use worktrip::storage::{self, FileStore, Persister};
use worktrip::tui;

#[derive(Parser)]
#[command(name = "worktrip", about = "Work and travel to-do lists in the terminal")]
struct Args {
    /// Directory holding the saved to-dos and the log file
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// List shown at startup
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().inspect_err(|e| eprintln!("worktrip: {e}"))?;
    let cli = CliOverrides {
        category: args.category,
        data_dir: args.data_dir,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    fs::create_dir_all(&resolved.data_dir)?;

    // Logs go to a file; stdout belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&resolved.log_file)
    {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Worktrip starting up (data dir: {}, category: {})",
        resolved.data_dir.display(),
        resolved.default_category
    );

    let store = FileStore::new(&resolved.data_dir);
    // A blob we cannot read is left alone rather than overwritten
    let todos = storage::load(&store).await.inspect_err(|e| {
        log::error!("Failed to load to-dos: {}", e);
        eprintln!(
            "worktrip: could not read saved to-dos in {}: {e}",
            resolved.data_dir.display()
        );
    })?;

    let app = App::from_config(todos, &resolved);
    let persister = Persister::spawn(Arc::new(store));

    let result = tui::run(app, &persister);
    persister.shutdown().await;
    log::info!("Worktrip shut down");
    result
}
