use clap::{Parser, Subcommand};
use std::path::PathBuf;

use organizer_lib::commands;
use organizer_lib::config::AppConfig;
use organizer_lib::domain::{Category, Item};
use organizer_lib::merge::MergePolicy;
use organizer_lib::AppState;

#[derive(Parser)]
#[command(name = "organizer")]
#[command(version, about = "Personal categories of groups and options", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Data directory (default: $ORGANIZER_DATA_DIR or ~/.organizer)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories
    List,
    /// Show one category with its groups and options
    Show { id: String },
    /// Create a category
    AddCategory {
        title: String,
        #[arg(long, short)]
        description: Option<String>,
    },
    /// Add a group to a category
    AddGroup { category: String, title: String },
    /// Add an option at root, or into a group with --group
    AddOption {
        category: String,
        title: String,
        #[arg(long, short)]
        group: Option<String>,
    },
    /// Merge a JSON export into the document
    Import {
        file: PathBuf,
        /// title | identity (default: from settings)
        #[arg(long)]
        policy: Option<MergePolicy>,
    },
    /// Write the document as JSON
    Export {
        /// Output file; a dated name in the current directory if omitted
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Search categories
    Search { query: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = AppConfig::load(cli.data_dir);
    let state = AppState::init(config).await?;
    let json = cli.json;

    match cli.command {
        Commands::List => {
            let categories = commands::list_categories(&state).await?;
            print_categories(&categories, json)
        }
        Commands::Show { id } => {
            let category = commands::get_category(&state, &id).await?;
            if json {
                print_json(&category)
            } else {
                print_tree(&category);
                Ok(())
            }
        }
        Commands::AddCategory { title, description } => {
            let category = commands::create_category(&state, title, description).await?;
            println!("{}", category.id);
            Ok(())
        }
        Commands::AddGroup { category, title } => {
            let updated = commands::create_group(&state, &category, title).await?;
            report(updated)
        }
        Commands::AddOption { category, title, group } => {
            let updated = commands::create_option(&state, &category, title, group).await?;
            report(updated)
        }
        Commands::Import { file, policy } => {
            let merged = commands::import_file(&state, &file, policy).await?;
            println!("{} categories after import", merged.len());
            Ok(())
        }
        Commands::Export { out } => {
            let export = commands::export_categories(&state).await?;
            let path = out.unwrap_or_else(|| PathBuf::from(&export.file_name));
            std::fs::write(&path, export.content)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Search { query } => {
            let hits = commands::search(&state, &query).await?;
            print_categories(&hits, json)
        }
    }
}

fn report(updated: Option<Category>) -> Result<(), String> {
    match updated {
        Some(category) => {
            print_tree(&category);
            Ok(())
        }
        None => Err("nothing changed (unknown group?)".to_string()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

fn print_categories(categories: &[Category], json: bool) -> Result<(), String> {
    if json {
        return print_json(&categories);
    }
    for c in categories {
        println!("{}  {} ({} options)", c.id, c.title, c.option_count());
    }
    Ok(())
}

fn print_tree(category: &Category) {
    println!("{}  {}", category.id, category.title);
    if let Some(description) = &category.description {
        println!("    {}", description);
    }
    for item in &category.items {
        match item {
            Item::Group(g) => {
                println!("  [{}] {}", g.id, g.title);
                for o in &g.items {
                    println!("      {}  {}", o.id, o.title);
                }
            }
            Item::Option(o) => println!("  {}  {}", o.id, o.title),
        }
    }
}
