//! Root word selection
//!
//! Picking the root word goes through a [`RootChooser`] so that tests can use
//! a fixed choice instead of a random one.

use crate::core::DEFAULT_ROOT_WORD;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Picks one entry out of a list
pub trait RootChooser {
    /// Choose an index in `0..len`
    ///
    /// Returns `None` if `len` is zero.
    fn choose_index(&mut self, len: usize) -> Option<usize>;
}

/// Uniform random choice
pub struct RandomChooser<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomChooser<ThreadRng> {
    /// Chooser backed by the thread-local generator
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomChooser<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomChooser<StdRng> {
    /// Reproducible chooser: the same seed yields the same sequence of words
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RootChooser for RandomChooser<R> {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Always picks the entry at a fixed index
///
/// Indexes past the end wrap around.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser {
    index: usize,
}

impl FixedChooser {
    /// Chooser that returns `index % len`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RootChooser for FixedChooser {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index % len)
    }
}

/// Enum wrapper for the chooser types
///
/// Allows runtime selection of the chooser while maintaining static dispatch.
pub enum ChooserType {
    /// Thread-local randomness (default)
    Random(RandomChooser),
    /// Reproducible randomness from a seed
    Seeded(RandomChooser<StdRng>),
    /// Fixed index
    Fixed(FixedChooser),
}

impl ChooserType {
    /// Seeded chooser if a seed is given, thread-local randomness otherwise
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(
            || Self::Random(RandomChooser::new()),
            |seed| Self::Seeded(RandomChooser::seeded(seed)),
        )
    }
}

impl RootChooser for ChooserType {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        match self {
            Self::Random(c) => c.choose_index(len),
            Self::Seeded(c) => c.choose_index(len),
            Self::Fixed(c) => c.choose_index(len),
        }
    }
}

/// Select the root word for a new round
///
/// Blank entries are never chosen. Falls back to [`DEFAULT_ROOT_WORD`] when
/// the list has no usable word.
///
/// # Examples
/// ```
/// use word_scramble::game::{FixedChooser, select_root_word};
///
/// let words = vec!["tree".to_string(), "silkworm".to_string()];
/// assert_eq!(select_root_word(&words, &mut FixedChooser::new(1)), "silkworm");
/// assert_eq!(select_root_word(&[], &mut FixedChooser::new(0)), "silkworm");
/// ```
pub fn select_root_word<'a, C: RootChooser + ?Sized>(
    words: &'a [String],
    chooser: &mut C,
) -> &'a str {
    let usable: Vec<&'a str> = words
        .iter()
        .map(String::as_str)
        .filter(|word| !word.trim().is_empty())
        .collect();

    chooser
        .choose_index(usable.len())
        .and_then(|index| usable.get(index).copied())
        .unwrap_or(DEFAULT_ROOT_WORD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn fixed_chooser_picks_index() {
        let list = words(&["tree", "silkworm", "absolute"]);
        assert_eq!(select_root_word(&list, &mut FixedChooser::new(0)), "tree");
        assert_eq!(select_root_word(&list, &mut FixedChooser::new(2)), "absolute");
        assert_eq!(select_root_word(&list, &mut FixedChooser::new(4)), "silkworm");
    }

    #[test]
    fn empty_list_falls_back() {
        assert_eq!(
            select_root_word(&[], &mut FixedChooser::default()),
            DEFAULT_ROOT_WORD
        );
        assert_eq!(
            select_root_word(&[], &mut RandomChooser::seeded(1)),
            DEFAULT_ROOT_WORD
        );
    }

    #[test]
    fn blank_entries_are_skipped() {
        let list = words(&["", "tree", "   ", "silkworm", ""]);
        for index in 0..10 {
            let chosen = select_root_word(&list, &mut FixedChooser::new(index));
            assert!(chosen == "tree" || chosen == "silkworm");
        }
    }

    #[test]
    fn only_blank_entries_falls_back() {
        let list = words(&["", " "]);
        assert_eq!(
            select_root_word(&list, &mut FixedChooser::default()),
            DEFAULT_ROOT_WORD
        );
    }

    #[test]
    fn random_chooser_picks_from_list() {
        let list = words(&["tree", "silkworm", "absolute"]);
        let mut chooser = RandomChooser::new();
        for _ in 0..20 {
            let chosen = select_root_word(&list, &mut chooser);
            assert!(list.iter().any(|w| w == chosen));
        }
    }

    #[test]
    fn chooser_type_from_seed() {
        assert!(matches!(ChooserType::from_seed(None), ChooserType::Random(_)));
        assert!(matches!(
            ChooserType::from_seed(Some(7)),
            ChooserType::Seeded(_)
        ));

        let list = words(&["tree", "silkworm"]);
        let mut fixed = ChooserType::Fixed(FixedChooser::new(1));
        assert_eq!(select_root_word(&list, &mut fixed), "silkworm");
    }

    #[test]
    fn seeded_chooser_is_reproducible() {
        let list = words(&["tree", "silkworm", "absolute", "windmill", "teaspoon"]);
        let mut first = RandomChooser::seeded(42);
        let mut second = RandomChooser::seeded(42);

        for _ in 0..10 {
            assert_eq!(
                select_root_word(&list, &mut first),
                select_root_word(&list, &mut second)
            );
        }
    }
}
