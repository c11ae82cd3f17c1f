//! Simple interactive CLI mode
//!
//! Text-based game session without TUI

use crate::core::ValidationOutcome;
use crate::game::{Game, RootChooser, select_root_word};
use crate::output::formatters::length_badge;
use crate::validator::Dictionary;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D, C>(
    game: &mut Game<'_, D>,
    start_words: &[String],
    chooser: &mut C,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    C: RootChooser + ?Sized,
{
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(game, start_words, chooser, stdin.lock(), &mut stdout)
}

/// Run a session reading submissions from `input` and writing to `output`
///
/// Lines starting with `/` are commands: `/new`, `/words`, `/help`, `/quit`.
/// Every other line is submitted as a word. Ends on `/quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<D, C, R, W>(
    game: &mut Game<'_, D>,
    start_words: &[String],
    chooser: &mut C,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    D: Dictionary + ?Sized,
    C: RootChooser + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Word Scramble - Simple Mode                 ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Commands: /new for a new root word, /words to list your words, /quit to exit\n")?;

    print_root_word(game.root_word(), output)?;
    prompt(output)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "/quit" | "/q" | "/exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "/new" | "/n" => {
                let root = select_root_word(start_words, chooser);
                game.start_round(root);
                writeln!(output, "\n🔄 New round started!\n")?;
                print_root_word(game.root_word(), output)?;
            }
            "/words" | "/w" => print_used_words(game.used_words(), output)?,
            "/help" | "/h" => {
                writeln!(output, "  /new    start a new round with another root word")?;
                writeln!(output, "  /words  list the words you found this round")?;
                writeln!(output, "  /quit   exit")?;
            }
            command if command.starts_with('/') => {
                writeln!(output, "❌ Unknown command '{command}'. Try /help")?;
            }
            _ => match game.submit(&line) {
                Some(ValidationOutcome::Accepted(word)) => {
                    writeln!(
                        output,
                        "{} {} {}",
                        "✓".green().bold(),
                        word.as_str().bright_white().bold(),
                        length_badge(word.len())
                    )?;
                }
                Some(ValidationOutcome::Rejected(kind)) => {
                    writeln!(output, "{} {}", "✗".red().bold(), kind.title().red().bold())?;
                    writeln!(output, "  {}", kind.message(game.root_word()))?;
                }
                None => {}
            },
        }

        prompt(output)?;
    }

    writeln!(output)?;
    Ok(())
}

fn print_root_word<W: Write>(root_word: &str, output: &mut W) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        root_word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}

fn print_used_words<W: Write>(used_words: &[String], output: &mut W) -> io::Result<()> {
    if used_words.is_empty() {
        return writeln!(output, "No words yet.");
    }

    writeln!(output, "Your words ({}):", used_words.len())?;
    for word in used_words {
        writeln!(output, "  {} {word}", length_badge(word.chars().count()))?;
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "Word: ")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedChooser;
    use crate::validator::WordListDictionary;

    fn run(input: &str, start_words: &[String]) -> (String, Vec<String>, String) {
        let dictionary = WordListDictionary::new("en", ["tee", "rete", "worm", "silk"]);
        let mut game = Game::new(&dictionary, "en", "tree");
        let mut chooser = FixedChooser::new(0);
        let mut output = Vec::new();

        run_session(
            &mut game,
            start_words,
            &mut chooser,
            input.as_bytes(),
            &mut output,
        )
        .unwrap();

        (
            String::from_utf8(output).unwrap(),
            game.used_words().to_vec(),
            game.root_word().to_string(),
        )
    }

    #[test]
    fn session_accepts_and_rejects() {
        let (output, used, _) = run("tee\ntee\neel\n\n/quit\n", &[]);

        assert_eq!(used, vec!["tee"]);
        assert!(output.contains("Word used already"));
        assert!(output.contains("Word not possible"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let (_, used, _) = run("rete\nTee\n", &[]);
        assert_eq!(used, vec!["tee", "rete"]);
    }

    #[test]
    fn new_round_command() {
        let start_words = vec!["silkworm".to_string()];
        let (output, used, root) = run("tee\n/new\nworm\n/quit\n", &start_words);

        assert_eq!(root, "silkworm");
        assert_eq!(used, vec!["worm"]);
        assert!(output.contains("New round started"));
    }

    #[test]
    fn words_command_lists_used_words() {
        let (output, _, _) = run("/words\ntee\n/words\n", &[]);
        assert!(output.contains("No words yet."));
        assert!(output.contains("Your words (1):"));
    }

    #[test]
    fn unknown_command() {
        let (output, used, _) = run("/dance\n", &[]);
        assert!(output.contains("Unknown command '/dance'"));
        assert!(used.is_empty());
    }
}
