//! Game flow
//!
//! The round controller and the choice of root word for each round.

mod engine;
pub mod selection;

pub use engine::Game;
pub use selection::{ChooserType, FixedChooser, RandomChooser, RootChooser, select_root_word};
