//! Monster Upload backend CLI
//!
//! ```bash
//! monster-backend serve                # Listen on 127.0.0.1:5000
//! monster-backend serve --port 8080    # Somewhere else
//! monster-backend list                 # Show stored uploads
//! ```

use clap::{Args, Parser, Subcommand};
use monster_backend::config::{
    DEFAULT_INDEX_FILE, DEFAULT_MAX_UPLOAD_MB, DEFAULT_PORT, DEFAULT_UPLOAD_DIR,
};
use monster_backend::{start_server, ServerConfig, ServerResult, UploadStore};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monster-backend")]
#[command(about = "Upload server for the hungry monster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "MONSTER_HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "MONSTER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Largest accepted request body, in megabytes
        #[arg(long, env = "MONSTER_MAX_UPLOAD_MB", default_value_t = DEFAULT_MAX_UPLOAD_MB)]
        max_upload_mb: usize,

        #[command(flatten)]
        storage: StorageArgs,
    },

    /// List stored uploads
    List {
        #[command(flatten)]
        storage: StorageArgs,
    },
}

#[derive(Args)]
struct StorageArgs {
    /// Directory uploaded files are written to
    #[arg(long, env = "MONSTER_UPLOAD_DIR", default_value = DEFAULT_UPLOAD_DIR)]
    upload_dir: PathBuf,

    /// JSON file holding upload records
    #[arg(long, env = "MONSTER_INDEX", default_value = DEFAULT_INDEX_FILE)]
    index: PathBuf,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            max_upload_mb,
            storage,
        } => {
            let config = ServerConfig {
                host,
                port,
                upload_dir: storage.upload_dir,
                index_file: storage.index,
                max_upload_bytes: max_upload_mb * 1024 * 1024,
            };
            start_server(config).await
        }

        Commands::List { storage } => cmd_list(&storage),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_list(storage: &StorageArgs) -> ServerResult<()> {
    let store = UploadStore::open(&storage.upload_dir, &storage.index)?;
    let records = store.list();

    if records.is_empty() {
        println!("The monster has not eaten anything yet.");
        return Ok(());
    }

    println!("🍽️  {} upload(s) in {}", records.len(), store.upload_dir().display());
    println!();
    for record in records {
        println!("  #{:<4} {:<40} {}", record.id, record.filename, record.uploaded_at);
    }

    Ok(())
}
