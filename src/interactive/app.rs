//! TUI application state and logic

use crate::core::ValidationOutcome;
use crate::game::{Game, RootChooser, select_root_word};
use crate::validator::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::error;

/// Application state
pub struct App<'a, D: Dictionary + ?Sized, C: RootChooser> {
    pub game: Game<'a, D>,
    pub start_words: &'a [String],
    pub chooser: C,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

/// A rejection shown as a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary + ?Sized, C: RootChooser> App<'a, D, C> {
    /// Create the app around a game whose first round has already started
    ///
    /// `start_words` and `chooser` supply the root words of later rounds.
    pub fn new(game: Game<'a, D>, start_words: &'a [String], chooser: C) -> Self {
        Self {
            game,
            start_words,
            chooser,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Spell words using the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, Ctrl-N starts a new round, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            alert: None,
            rounds_played: 1,
            should_quit: false,
        }
    }

    /// Submit the input buffer as a word
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            Some(ValidationOutcome::Accepted(word)) => {
                self.add_message(
                    &format!("Nice! '{word}' added ({} letters)", word.len()),
                    MessageStyle::Success,
                );
            }
            Some(ValidationOutcome::Rejected(kind)) => {
                self.alert = Some(Alert {
                    title: kind.title().to_string(),
                    message: kind.message(self.game.root_word()),
                });
                self.add_message(
                    &format!("'{}': {}", input.trim(), kind.title()),
                    MessageStyle::Error,
                );
                // Keep the rejected text so the player can fix it
                self.input_buffer = input;
            }
            None => {}
        }
    }

    /// Start a new round with a freshly chosen root word
    pub fn new_round(&mut self) {
        let root = select_root_word(self.start_words, &mut self.chooser);
        self.game.start_round(root);
        self.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.add_message(
            &format!("New round! Root word: {}", self.game.root_word().to_uppercase()),
            MessageStyle::Info,
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        if control && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if control => self.new_round(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !control => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary + ?Sized, C: RootChooser>(app: App<'_, D, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(%err, "TUI stopped with an error");
    }

    res
}

fn run_app<B, D, C>(terminal: &mut Terminal<B>, mut app: App<'_, D, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary + ?Sized,
    C: RootChooser,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectionKind;
    use crate::game::FixedChooser;
    use crate::validator::WordListDictionary;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_word<D: Dictionary + ?Sized, C: RootChooser>(app: &mut App<'_, D, C>, word: &str) {
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));
    }

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new("en", ["tee", "rete", "worm", "silk"])
    }

    fn start_words() -> Vec<String> {
        vec!["tree".to_string(), "silkworm".to_string()]
    }

    #[test]
    fn keeps_first_round_root() {
        let dictionary = dictionary();
        let words = start_words();
        let app = App::new(
            Game::new(&dictionary, "en", "tree"),
            &words,
            FixedChooser::new(1),
        );
        assert_eq!(app.game.root_word(), "tree");
        assert_eq!(app.rounds_played, 1);
    }

    #[test]
    fn accepted_word_clears_input() {
        let dictionary = dictionary();
        let words = start_words();
        let mut app = App::new(Game::new(&dictionary, "en", "tree"), &words, FixedChooser::new(1));

        type_word(&mut app, "tee");

        assert_eq!(app.game.used_words(), &["tee"]);
        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
    }

    #[test]
    fn rejection_opens_alert() {
        let dictionary = dictionary();
        let words = start_words();
        let mut app = App::new(Game::new(&dictionary, "en", "tree"), &words, FixedChooser::new(1));

        type_word(&mut app, "eel");

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, RejectionKind::NotPossible.title());
        assert_eq!(app.input_buffer, "eel");

        // Typing is blocked until the alert is dismissed
        app.handle_key(press(KeyCode::Char('x')));
        assert_eq!(app.input_buffer, "eel");

        app.handle_key(press(KeyCode::Enter));
        assert!(app.alert.is_none());
        assert!(app.game.used_words().is_empty());
    }

    #[test]
    fn empty_submission_is_silent() {
        let dictionary = dictionary();
        let words = start_words();
        let mut app = App::new(Game::new(&dictionary, "en", "tree"), &words, FixedChooser::new(1));
        let before = app.messages.len();

        type_word(&mut app, "   ");

        assert!(app.alert.is_none());
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn ctrl_n_starts_new_round() {
        let dictionary = dictionary();
        let words = start_words();
        let mut app = App::new(Game::new(&dictionary, "en", "tree"), &words, FixedChooser::new(1));
        type_word(&mut app, "tee");

        app.handle_key(ctrl('n'));

        assert_eq!(app.game.root_word(), "silkworm");
        assert_eq!(app.rounds_played, 2);
        assert!(app.game.used_words().is_empty());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn backspace_and_quit() {
        let dictionary = dictionary();
        let words = start_words();
        let mut app = App::new(Game::new(&dictionary, "en", "tree"), &words, FixedChooser::new(1));

        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Char('b')));
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "a");

        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_even_with_alert() {
        let dictionary = dictionary();
        let words = start_words();
        let mut app = App::new(Game::new(&dictionary, "en", "tree"), &words, FixedChooser::new(1));
        type_word(&mut app, "zzz");
        assert!(app.alert.is_some());

        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let dictionary = dictionary();
        let words = start_words();
        let mut app = App::new(Game::new(&dictionary, "en", "tree"), &words, FixedChooser::new(1));

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
