use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gstree::config::{get_config_path, AppConfig};
use gstree::export::to_dot;
use gstree::output::{print_matches, print_stats};
use gstree::utils::progress::sequence_progress;
use gstree::utils::{tokenize, InputSource, TokenMode};
use gstree::SuffixTree;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "gstree")]
#[command(about = "Generalized suffix trees over text, built online with Ukkonen's algorithm")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Args)]
struct InputArgs {
    /// Inputs to index, one sequence each
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Treat inputs as file paths
    #[arg(short, long)]
    file: bool,

    /// How text is split into tokens
    #[arg(short, long, value_enum)]
    tokens: Option<TokenMode>,

    /// Lowercase every token
    #[arg(long)]
    fold_case: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tree in Graphviz dot format
    Dot {
        #[command(flatten)]
        input: InputArgs,

        /// Leave suffix links out
        #[arg(long)]
        no_suffix_links: bool,

        /// Add dashed links from every node to its parent
        #[arg(long)]
        incoming_links: bool,
    },
    /// Show tree statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every position where a pattern occurs
    Search {
        /// Pattern, tokenized like the inputs
        pattern: String,

        #[command(flatten)]
        input: InputArgs,

        /// Only print the number of occurrences
        #[arg(short, long)]
        count: bool,
    },
    /// Show the configuration file and its effective values
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    gstree::logging::init(cli.verbose);

    let mut config = AppConfig::load()?;
    if cli.no_color {
        config.color = false;
    }

    match cli.command {
        Commands::Dot {
            input,
            no_suffix_links,
            incoming_links,
        } => {
            apply_input_overrides(&mut config, &input);
            if no_suffix_links {
                config.dot_suffix_links = false;
            }
            if incoming_links {
                config.dot_incoming_edge_links = true;
            }

            let (tree, _) = build_tree(&input, &config)?;
            println!("{}", to_dot(&tree, &config.dot_options()));
        }
        Commands::Stats { input, json } => {
            apply_input_overrides(&mut config, &input);
            let (tree, _) = build_tree(&input, &config)?;
            let stats = tree.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats, config.color)?;
            }
        }
        Commands::Search {
            pattern,
            input,
            count,
        } => {
            apply_input_overrides(&mut config, &input);
            let (tree, names) = build_tree(&input, &config)?;
            let pattern = tokenize(&pattern, config.token_mode, config.fold_case);
            let matches = tree.occurrences(&pattern);

            if count {
                println!("{}", matches.len());
            } else {
                print_matches(&matches, &names, config.color)?;
            }
        }
        Commands::Config => {
            let path = get_config_path()?;
            println!("Config file: {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn apply_input_overrides(config: &mut AppConfig, input: &InputArgs) {
    if let Some(mode) = input.tokens {
        config.token_mode = mode;
    }
    if input.fold_case {
        config.fold_case = true;
    }
}

/// Index every input as its own sub-sequence
fn build_tree(input: &InputArgs, config: &AppConfig) -> Result<(SuffixTree<String>, Vec<String>)> {
    let sources: Vec<InputSource> = input
        .inputs
        .iter()
        .map(|raw| {
            if input.file {
                InputSource::File(PathBuf::from(raw))
            } else {
                InputSource::Literal(raw.clone())
            }
        })
        .collect();

    let pb = sequence_progress(sources.len() as u64);
    let mut tree = SuffixTree::new();
    let mut names = Vec::with_capacity(sources.len());

    for source in &sources {
        let name = source.describe();
        pb.set_message(name.clone());

        let text = source.load()?;
        let tokens = tokenize(&text, config.token_mode, config.fold_case);
        let id = tree
            .add(tokens)
            .with_context(|| format!("Failed to index {}", name))?;
        info!(sequence = %id, input = %name, "indexed");

        names.push(name);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok((tree, names))
}
