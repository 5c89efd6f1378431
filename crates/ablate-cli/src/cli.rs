use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "ablate")]
#[command(about = "Redact named entities from biographies for ablation studies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "ABLATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the category sets and the labels they remove
    Categories,

    /// Redact a single text with the gazetteer recognizer
    Redact {
        /// Text to redact
        #[arg(long)]
        text: String,

        /// Category set to remove (repeatable; default from config)
        #[arg(long)]
        category: Vec<String>,

        /// Also remove every recognized entity
        #[arg(long)]
        all_entities: bool,

        /// Gazetteer file (overrides config)
        #[arg(long)]
        gazetteer: Option<PathBuf>,
    },

    /// Replace a known name in a text with a keyword
    Keyword {
        /// Text to redact
        #[arg(long)]
        text: String,

        /// Full name of the subject
        #[arg(long)]
        name: String,

        /// Replacement keyword
        #[arg(long, default_value = "PERSON")]
        keyword: String,

        /// Only replace whole words
        #[arg(long)]
        whole_word: bool,
    },

    /// Ablate a JSON-lines file of documents
    Run(RunArgs),

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Input file, one JSON document per line
    #[arg(long)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Category set to remove (repeatable; default from config)
    #[arg(long)]
    pub category: Vec<String>,

    /// Also produce `ner_bio` with every entity removed
    #[arg(long)]
    pub all_entities: bool,

    /// Also produce `keyword_bio`, replacing each document's `name`
    #[arg(long)]
    pub keyword: Option<String>,

    /// Keyword replacement only matches whole words
    #[arg(long)]
    pub whole_word: bool,

    /// Input lines carry `tokens` and `spans` instead of `text`
    #[arg(long)]
    pub annotated: bool,

    /// Gazetteer file (overrides config)
    #[arg(long)]
    pub gazetteer: Option<PathBuf>,
}
