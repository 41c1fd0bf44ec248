//! HSC Study CLI
//!
//! Thin wrapper around hscstudy-core for inspecting and practising study
//! content from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Dataset statistics, data directory and theme
//! hscstudy --dataset content.json info
//!
//! # Write the enriched dataset
//! hscstudy --dataset content.json enrich -o enriched.json
//!
//! # Print one display mode of an item
//! hscstudy --dataset content.json show poetry 0 keypoints
//!
//! # Answer questions 1 and 2 and print the score
//! hscstudy --dataset content.json quiz poetry 0 --answer 1=0 --answer 2=1
//!
//! # Search titles and summaries
//! hscstudy --dataset content.json search raven
//!
//! # Dark-mode preference
//! hscstudy dark-mode toggle
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hscstudy_core::logging::setup_logging;
use hscstudy_core::{
    enrich, Answer, AppConfig, DisplayMode, MemoryStore, PreferenceStore, Section, Storage,
    StudyApp, ThemePreference, MIN_FLASHCARDS, MIN_MCQS,
};

/// HSC Study - English revision content tools
#[derive(Parser)]
#[command(name = "hscstudy")]
#[command(version = "0.1.0")]
#[command(about = "HSC Study - enrich, inspect and quiz study content")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: ~/.hscstudy/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON dataset (default: four empty sections)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dataset statistics and preferences
    Info,

    /// Write the enriched dataset as JSON
    Enrich {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one display mode of an item
    Show {
        /// Section: prose, poetry, writing or novel
        section: Section,
        /// 0-based item index within the section
        index: usize,
        /// summary, keypoints, mcq, flashcards or mindmap
        mode: DisplayMode,
    },

    /// Answer an item's quiz and print the score
    Quiz {
        section: Section,
        index: usize,
        /// Selection as QUESTION=OPTION (1-based question, 0-based option)
        #[arg(short, long = "answer")]
        answers: Vec<Answer>,
    },

    /// Find items whose title or summary contains the query
    Search { query: String },

    /// Dark-mode preference
    DarkMode {
        #[command(subcommand)]
        action: DarkModeAction,
    },
}

#[derive(Subcommand)]
enum DarkModeAction {
    /// Print the stored preference
    Show,
    /// Flip and persist the preference
    Toggle,
}

fn open_store(config: &AppConfig) -> Box<dyn PreferenceStore> {
    match Storage::new(config.storage_path()) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!("Preferences will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn on_off(dark: bool) -> &'static str {
    if dark {
        "on"
    } else {
        "off"
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = AppConfig::new(cli.data_dir, cli.dataset);

    match cli.command {
        Commands::Info => {
            let raw = config.load_dataset()?;
            let enriched = enrich(&raw);
            let theme = ThemePreference::load(open_store(&config));

            println!("HSC Study v0.1.0");
            println!();
            println!("Dataset:");
            match &config.dataset_path {
                Some(path) => println!("  Source: {}", path.display()),
                None => println!("  Source: (empty default)"),
            }
            for (section, items) in enriched.sections() {
                println!("  {}: {} items", section.label(), items.len());
            }
            let questions: usize = enriched
                .sections()
                .flat_map(|(_, items)| items)
                .map(|item| item.mcqs.len())
                .sum();
            let cards: usize = enriched
                .sections()
                .flat_map(|(_, items)| items)
                .map(|item| item.flashcards.len())
                .sum();
            println!(
                "  Total: {} items, {} questions, {} flashcards",
                enriched.item_count(),
                questions,
                cards
            );
            println!(
                "  Minimums: {} questions, {} flashcards per item",
                MIN_MCQS, MIN_FLASHCARDS
            );
            println!();
            println!("Data directory: {}", config.data_dir.display());
            println!("Dark mode: {}", on_off(theme.is_dark()));
        }

        Commands::Enrich { output } => {
            let enriched = enrich(&config.load_dataset()?);
            let json = enriched.to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json + "\n")
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Enriched dataset written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Show {
            section,
            index,
            mode,
        } => {
            let mut app = StudyApp::init(&config.load_dataset()?, Box::new(MemoryStore::new()));
            match app.open(section, index, mode) {
                Some(open) => print!("{}", open.view),
                None => println!("No content at {}/{}", section, index),
            }
            app.teardown();
        }

        Commands::Quiz {
            section,
            index,
            answers,
        } => {
            let mut app = StudyApp::init(&config.load_dataset()?, Box::new(MemoryStore::new()));
            if app.open(section, index, DisplayMode::Mcq).is_none() {
                println!("No content at {}/{}", section, index);
                return Ok(());
            }
            for answer in &answers {
                if !app.select_option(answer.group, answer.option) {
                    tracing::warn!(
                        "Ignoring answer {}={}: no such question or option",
                        answer.group + 1,
                        answer.option
                    );
                }
            }
            if let Some(score) = app.score_quiz() {
                println!("Score: {}", score);
            }
            app.teardown();
        }

        Commands::Search { query } => {
            let mut app = StudyApp::init(&config.load_dataset()?, Box::new(MemoryStore::new()));
            app.set_search(query.as_str());

            let mut found = 0;
            for section in Section::ALL {
                for card in app.visible_cards(section) {
                    println!("{}/{}: {}", card.section, card.index, card.title);
                    found += 1;
                }
            }
            if found == 0 {
                println!("No matches for \"{}\"", query.trim());
            }
            app.teardown();
        }

        Commands::DarkMode { action } => {
            let mut theme = ThemePreference::load(open_store(&config));
            match action {
                DarkModeAction::Show => println!("Dark mode: {}", on_off(theme.is_dark())),
                DarkModeAction::Toggle => {
                    let dark = theme.toggle();
                    println!("Dark mode: {}", on_off(dark));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_quiz_answers() {
        let cli = Cli::parse_from(["hscstudy", "quiz", "poetry", "0", "--answer", "1=0", "-a", "2=3"]);
        match cli.command {
            Commands::Quiz {
                section,
                index,
                answers,
            } => {
                assert_eq!(section, Section::Poetry);
                assert_eq!(index, 0);
                assert_eq!(answers.len(), 2);
                assert_eq!(answers[1], Answer { group: 1, option: 3 });
            }
            _ => panic!("expected quiz command"),
        }
    }
}
