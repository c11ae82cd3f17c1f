//! Letter multiset
//!
//! A `LetterBag` counts how many times each letter occurs so that a candidate
//! can use each letter of the root word at most once per occurrence.

use rustc_hash::FxHashMap;

/// Multiset of characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterBag {
    /// Build a bag from every character of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterBag;
    ///
    /// let bag = LetterBag::from_word("tree");
    /// assert_eq!(bag.count('e'), 2);
    /// assert_eq!(bag.count('x'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut total = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Occurrences of `letter` still in the bag
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the bag untouched) if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&letter);
                }
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from the letters in this bag
    ///
    /// Works on a copy: takes one letter per character of `word` and fails on
    /// the first character that has run out.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterBag;
    ///
    /// let bag = LetterBag::from_word("tree");
    /// assert!(bag.can_spell("rete"));
    /// assert!(!bag.can_spell("eel"));
    /// assert!(!bag.can_spell("teee"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|ch| remaining.take(ch))
    }

    /// Total number of letters in the bag
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// True when no letters are left
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let bag = LetterBag::from_word("silkworm");
        assert_eq!(bag.len(), 8);
        assert_eq!(bag.count('s'), 1);
        assert_eq!(bag.count('w'), 1);
        assert_eq!(bag.count('z'), 0);

        let bag = LetterBag::from_word("aaaa");
        assert_eq!(bag.count('a'), 4);
        assert_eq!(bag.len(), 4);
    }

    #[test]
    fn take_decrements() {
        let mut bag = LetterBag::from_word("tree");
        assert!(bag.take('e'));
        assert_eq!(bag.count('e'), 1);
        assert!(bag.take('e'));
        assert_eq!(bag.count('e'), 0);
        assert!(!bag.take('e'));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn take_missing_letter() {
        let mut bag = LetterBag::from_word("tree");
        assert!(!bag.take('l'));
        assert_eq!(bag.len(), 4);
    }

    #[test]
    fn empty_bag() {
        let bag = LetterBag::from_word("");
        assert!(bag.is_empty());
        assert!(bag.can_spell(""));
        assert!(!bag.can_spell("a"));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let bag = LetterBag::from_word("tree");
        assert!(bag.can_spell("tee"));
        assert!(bag.can_spell("rete"));
        assert!(bag.can_spell("tree"));
        assert!(!bag.can_spell("eel"));
        assert!(!bag.can_spell("terse"));
        assert!(!bag.can_spell("ttree"));
    }

    #[test]
    fn can_spell_leaves_bag_intact() {
        let bag = LetterBag::from_word("tree");
        assert!(bag.can_spell("tree"));
        assert_eq!(bag.count('e'), 2);
        assert_eq!(bag.len(), 4);
    }

    #[test]
    fn can_spell_order_independent() {
        let bag = LetterBag::from_word("silkworm");
        assert!(bag.can_spell("worm"));
        assert!(bag.can_spell("mrow"));
        assert!(bag.can_spell("milk"));
        assert!(!bag.can_spell("mill"));
    }
}
