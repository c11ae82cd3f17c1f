//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: spell new words from the letters of a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use word_scramble::{
    commands::{
        CheckConfig, analyze_root, check_words, print_survey_statistics, run_simple, run_survey,
    },
    game::{ChooserType, Game, RootChooser, select_root_word},
    logging::{LogConfig, init_logging},
    output::{print_analysis_result, print_check_result},
    validator::{DEFAULT_LANGUAGE, WordListDictionary},
    wordlists::{
        WordListSource,
        loader::{load_dictionary, load_start_words},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: 'embedded' (default) or path to a file with one word per line
    #[arg(long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language passed to the dictionary lookup
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Root word for the first round (default: random start word)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Root word for the first round (default: random start word)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Submit words in order against a root word and report each outcome
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,

        /// Show the full message for each rejection
        #[arg(short, long)]
        explain: bool,
    },

    /// List every dictionary word that can be made from a root word
    Analyze {
        /// The root word
        root: String,

        /// Print the answers, not just the counts
        #[arg(long)]
        words: bool,
    },

    /// Analyze every start word
    Survey {
        /// Limit number of start words to analyze
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { root: None });

    // The TUI owns the terminal, so it only logs when a file is given
    let tui_without_log_file = matches!(command, Commands::Play { .. }) && cli.log_file.is_none();
    if !tui_without_log_file {
        init_logging(&LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone()))
            .context("failed to initialize logging")?;
    }

    let start_words = load_start_words(&WordListSource::from_arg(&cli.start_words))
        .context("failed to load start words")?;
    let dictionary = load_dictionary(&WordListSource::from_arg(&cli.dictionary), &cli.language)
        .context("failed to load dictionary")?;
    let mut chooser = ChooserType::from_seed(cli.seed);

    match command {
        Commands::Play { root } => {
            run_play_command(&dictionary, &cli.language, &start_words, root, chooser)
        }
        Commands::Simple { root } => {
            run_simple_command(&dictionary, &cli.language, &start_words, root, &mut chooser)
        }
        Commands::Check {
            root,
            words,
            explain,
        } => {
            let result = check_words(CheckConfig::new(root, words), &dictionary, &cli.language);
            print_check_result(&result, explain);
            Ok(())
        }
        Commands::Analyze { root, words } => {
            let result = analyze_root(&root, dictionary.words(), &dictionary, &cli.language);
            print_analysis_result(&result, words);
            Ok(())
        }
        Commands::Survey { limit } => {
            run_survey_command(&dictionary, &cli.language, &start_words, limit);
            Ok(())
        }
    }
}

/// Root word for the first round: the `--root` flag, or a start word
fn first_root_word<C: RootChooser>(
    root: Option<String>,
    start_words: &[String],
    chooser: &mut C,
) -> String {
    root.unwrap_or_else(|| select_root_word(start_words, chooser).to_string())
}

fn run_play_command(
    dictionary: &WordListDictionary,
    language: &str,
    start_words: &[String],
    root: Option<String>,
    mut chooser: ChooserType,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let root_word = first_root_word(root, start_words, &mut chooser);
    let game = Game::new(dictionary, language, &root_word);
    let app = App::new(game, start_words, chooser);
    run_tui(app)
}

fn run_simple_command(
    dictionary: &WordListDictionary,
    language: &str,
    start_words: &[String],
    root: Option<String>,
    chooser: &mut ChooserType,
) -> Result<()> {
    let root_word = first_root_word(root, start_words, chooser);
    let mut game = Game::new(dictionary, language, &root_word);
    run_simple(&mut game, start_words, chooser).context("simple mode I/O failed")
}

fn run_survey_command(
    dictionary: &WordListDictionary,
    language: &str,
    start_words: &[String],
    limit: Option<usize>,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Start Word Survey ");
    println!("{}", "═".repeat(70));
    println!(
        "\nAnalyzing {} start words against {} dictionary words\n",
        limit.map_or(start_words.len(), |n| n.min(start_words.len())),
        dictionary.len()
    );

    info!(limit = ?limit, "survey started");
    let stats = run_survey(start_words, dictionary.words(), dictionary, language, limit);
    print_survey_statistics(&stats);
}
