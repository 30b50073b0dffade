mod commands;
mod menu;
mod render;
mod scrape;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use job_scraper::hh::{scraper::DEFAULT_API_URL, HeadHunterApi};
use job_scraper::SearchQuery;
use persistence::store::json::DEFAULT_FILENAME;
use persistence::{JsonFileStore, Vacancy};
use thiserror::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Store(#[from] persistence::Error),
    #[error("Failed to fetch vacancies: {0}")]
    Fetch(Box<dyn std::error::Error + Send + Sync>),
    #[error("Terminal IO failed: '{0}'")]
    Io(#[from] io::Error),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file the vacancies are stored in
    #[arg(long, env = "VACANCIES_FILE", default_value = DEFAULT_FILENAME)]
    file: PathBuf,

    /// Base url of the hh.ru api
    #[arg(long, env = "HH_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Region to search vacancies in
    #[arg(long, env = "HH_AREA", default_value_t = 1)]
    area: u32,

    #[arg(long, env = "HH_PER_PAGE", default_value_t = 10)]
    per_page: u32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu, the default
    Menu,
    /// Fetch vacancies for a keyword and store them
    Search {
        keyword: String,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Best paid stored vacancies
    Top { n: usize },
    /// Stored vacancies mentioning a keyword in their description
    Grep { keyword: String },
    /// Stored vacancies matching every `--where field=value`
    List {
        #[arg(long = "where", value_parser = commands::parse_criterion)]
        criteria: Vec<(String, String)>,
    },
    /// Store a vacancy by hand
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        salary_from: String,
        #[arg(long, default_value = "")]
        salary_to: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove every stored vacancy with the given url
    Delete { url: String },
}

async fn run(args: Cli) -> Result<()> {
    let mut store = JsonFileStore::new(args.file);
    log::info!("using vacancy file: {}", store.path().display());
    let api = HeadHunterApi::with_base_url(args.api_url);
    let search = SearchQuery::new("")
        .area(args.area)
        .per_page(args.per_page);
    let mut out = io::stdout().lock();

    match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut input = io::stdin().lock();
            menu::run(&api, &mut store, &search, &mut input, &mut out).await
        }
        Commands::Search { keyword, page } => {
            let query = SearchQuery {
                keyword,
                ..search.page(page)
            };
            let saved = scrape::search_and_store(&api, &mut store, &query).await?;
            writeln!(out, "{} вакансий сохранено.", saved)?;
            Ok(())
        }
        Commands::Top { n } => commands::top(&store, n, &mut out),
        Commands::Grep { keyword } => commands::grep(&store, &keyword, &mut out),
        Commands::List { criteria } => commands::list(&store, &criteria, &mut out),
        Commands::Add {
            title,
            url,
            salary_from,
            salary_to,
            description,
        } => {
            let vacancy = Vacancy::from_form(&title, &url, &salary_from, &salary_to, &description)?;
            commands::add(&mut store, &vacancy, &mut out)
        }
        Commands::Delete { url } => commands::delete(&mut store, &url, &mut out),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
