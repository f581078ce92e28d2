use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sabor::media::read_batch;
use sabor::newsletter::subscribers;
use sabor::server::PreviewServer;
use sabor::session::Session;
use sabor::settings::Settings;
use sabor::storage::FileStore;
use sabor::types::PageData;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sabor", version, about = "Sabor On The Bay event page")]
struct Cli {
    /// Settings file (defaults to <config dir>/sabor/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding persisted page state
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Content JSON replacing the built-in page data
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the page, with persisted edits, to an HTML file
    Render {
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,
    },
    /// Serve the page locally with working forms and dropzones
    Serve {
        #[arg(long)]
        bind: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the persisted newsletter subscribers
    Subscribers,
    /// Inspect or edit the persisted gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },
}

#[derive(Subcommand, Debug)]
enum GalleryAction {
    /// List gallery entries
    List,
    /// Prepend image files; nothing is added unless every file can be read
    Add { files: Vec<PathBuf> },
    /// Restore the default gallery, discarding uploads
    Reset,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sabor=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_settings(cli: &Cli) -> Settings {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    if let Some(dir) = &cli.data_dir {
        settings.data_dir = Some(dir.clone());
    }
    if let Some(path) = &cli.content {
        settings.content_path = Some(path.clone());
    }
    settings
}

fn load_content(settings: &Settings) -> Result<PageData> {
    match &settings.content_path {
        Some(path) => Ok(PageData::from_json_file(path)?),
        None => Ok(PageData::sabor_on_the_bay()),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut settings = load_settings(&cli);

    let content = load_content(&settings)?;
    let storage_path = settings.storage_path();
    let store = Arc::new(
        FileStore::open(&storage_path)
            .with_context(|| format!("opening storage at {}", storage_path.display()))?,
    );

    match cli.command {
        Command::Render { out } => {
            let session = Session::new(content, store);
            std::fs::write(&out, session.render())
                .with_context(|| format!("writing {}", out.display()))?;
            info!("Wrote {}", out.display());
        }
        Command::Serve { bind, port } => {
            if let Some(bind) = bind {
                settings.bind = bind;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            let session = Session::new(content, store);
            let server = PreviewServer::start(&settings.address(), session)?;
            server.wait();
        }
        Command::Subscribers => {
            for email in subscribers(store.as_ref())? {
                println!("{email}");
            }
        }
        Command::Gallery { action } => {
            let mut session = Session::new(content, store);
            if session.gallery().is_none() {
                anyhow::bail!("this page has no gallery section");
            }
            match action {
                GalleryAction::List => {
                    for item in session.gallery().map(|g| g.items()).unwrap_or_default() {
                        let src: String = item.src.chars().take(60).collect();
                        println!("{}\t{}", item.alt, src);
                    }
                }
                GalleryAction::Add { files } => {
                    let files = read_batch(&files)?;
                    let added = session.add_gallery_files(&files);
                    info!("Added {} of {} files to the gallery", added, files.len());
                }
                GalleryAction::Reset => {
                    session.reset_gallery();
                    info!("Gallery reset to defaults");
                }
            }
        }
    }

    Ok(())
}
