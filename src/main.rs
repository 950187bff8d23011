use clap::{Parser as ClapParser, Subcommand};
use jsql::cli::{self, CheckOptions, CheckResult, CliError, RecommendOptions};
use jsql::{to_json, to_json_pretty};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `jsql=debug`).
const LOG_ENV: &str = "JSQL_LOG";

#[derive(ClapParser)]
#[command(name = "jsql")]
#[command(about = "jsql - filter and project JSON records with a minimal SQL-like query language")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and execute a query
    Check {
        /// The query to execute, e.g. "select name where age > 26"
        query: String,

        /// JSON input (reads --file or stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Read JSON input from a file
        #[arg(short, long, conflicts_with = "input")]
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Print the number of matching records to stderr
        #[arg(long)]
        count: bool,

        /// Only validate syntax, don't execute
        #[arg(long)]
        syntax_only: bool,
    },

    /// Suggest example queries for a dataset
    Recommend {
        /// JSON input (reads --file or stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Read JSON input from a file
        #[arg(short, long, conflicts_with = "input")]
        file: Option<PathBuf>,

        /// Seed for reproducible suggestions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'jsql docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            query,
            input,
            file,
            pretty,
            count,
            syntax_only,
        } => run_check(query, input, file, pretty, count, syntax_only),
        Commands::Recommend { input, file, seed } => run_recommend(input, file, seed),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "jsql=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolve JSON input: explicit string, then file, then piped stdin.
fn load_input(input: Option<String>, file: Option<PathBuf>) -> Result<Option<String>, CliError> {
    if input.is_some() {
        return Ok(input);
    }
    if let Some(path) = file {
        return Ok(Some(fs::read_to_string(path)?));
    }
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

fn run_check(
    query: String,
    input: Option<String>,
    file: Option<PathBuf>,
    pretty: bool,
    count: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = if syntax_only {
        None
    } else {
        load_input(input, file)?
    };

    let options = CheckOptions {
        query,
        input,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid(query) => println!("Syntax is valid: {}", query),
        CheckResult::Success(result) => {
            let json = if pretty {
                to_json_pretty(&result.records)
            } else {
                to_json(&result.records)
            };
            println!("{}", json);
            if count {
                eprintln!("{} record(s) matched", result.count);
            }
        }
    }
    Ok(())
}

fn run_recommend(
    input: Option<String>,
    file: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let options = RecommendOptions {
        input: load_input(input, file)?,
        seed,
    };

    for query in cli::execute_recommend(&options)? {
        println!("{}", query);
    }
    Ok(())
}
