use anyhow::{Context, Result};
use clap::Parser;
use kgram_core::tokenizer::Tokenizer;
use kgram_core::{KGramIndex, KGramPosting};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kgram")]
#[command(about = "Build a k-gram index from a text file and look up k-grams or wildcard patterns", long_about = None)]
struct Cli {
    /// Source text file to index
    #[arg(short = 'f', long)]
    file: PathBuf,
    /// File of regular expressions for tokens that must be kept whole
    #[arg(short = 'p', long)]
    patterns_file: Option<PathBuf>,
    /// Length of each k-gram
    #[arg(short = 'k', long, default_value_t = 3, allow_negative_numbers = true)]
    k: i64,
    /// Space-separated k-grams whose postings are intersected
    #[arg(short = 'g', long)]
    kgram: Option<String>,
    /// Wildcard pattern to resolve into matching terms
    #[arg(short = 'w', long)]
    wildcard: Option<String>,
    /// Print results as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    k: usize,
    indexed_terms: usize,
    kgrams: Option<&'a str>,
    postings: Option<Vec<&'a str>>,
    wildcard: Option<&'a str>,
    matches: Option<Vec<&'a str>>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let mut index = KGramIndex::new(cli.k)?;
    let tokenizer = match &cli.patterns_file {
        Some(path) => Tokenizer::default().with_patterns_file(path)?,
        None => Tokenizer::default(),
    };
    let text = fs::read_to_string(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
    for (term, _pos) in tokenizer.tokenize(&text) {
        index.insert(&term);
    }
    tracing::info!(terms = index.len(), kgrams = index.kgram_count(), k = index.k(), "built k-gram index");

    let postings = match &cli.kgram {
        Some(kgrams) => {
            let kgrams: Vec<&str> = kgrams.split(' ').filter(|s| !s.is_empty()).collect();
            Some(index.lookup(kgrams.as_slice())?.unwrap_or_default())
        }
        None => None,
    };
    let matches = cli.wildcard.as_deref().map(|pattern| index.resolve_wildcard(pattern));

    let posting_terms = postings.as_deref().map(|p| terms_of(&index, p));
    let match_terms = matches.as_ref().map(|q| q.terms().map(|t| t.term.as_str()).collect::<Vec<_>>());

    if cli.json {
        let report = Report {
            k: index.k(),
            indexed_terms: index.len(),
            kgrams: cli.kgram.as_deref(),
            postings: posting_terms,
            wildcard: cli.wildcard.as_deref(),
            matches: match_terms,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(terms) = &posting_terms {
        eprintln!("Found {} posting(s)", terms.len());
        for term in terms {
            eprintln!("{term}");
        }
    }
    if let Some(terms) = &match_terms {
        eprintln!("Found {} matching term(s)", terms.len());
        for term in terms {
            eprintln!("{term}");
        }
    }
    Ok(())
}

fn terms_of<'a>(index: &'a KGramIndex, postings: &[KGramPosting]) -> Vec<&'a str> {
    postings.iter().filter_map(|p| index.term_of(p.term_id)).collect()
}
