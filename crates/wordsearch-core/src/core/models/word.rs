use std::cmp::Reverse;
use std::fmt;

/// Index of a word inside its [`WordList`], which is also its original input position.
pub type WordId = usize;

/// A normalized puzzle word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
    mandatory: bool,
}

impl Word {
    /// Builds a word from already-normalized text.
    pub fn new(text: impl Into<String>, mandatory: bool) -> Self {
        let text = text.into();
        let letters = text.chars().collect();
        Self {
            text,
            letters,
            mandatory,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word's letters, cached so placement checks never allocate.
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Length in letters (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub(crate) fn mark_mandatory(&mut self) {
        self.mandatory = true;
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mandatory {
            write!(f, "{} (mandatory)", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// The ordered, deduplicated set of words for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word`, merging it into an existing entry with the same text.
    ///
    /// Returns the id of the existing entry when the word was a duplicate. A duplicate
    /// upgrades the existing entry to mandatory if either copy was mandatory.
    pub fn insert(&mut self, word: Word) -> Result<WordId, WordId> {
        if let Some(existing) = self.words.iter().position(|w| w.text == word.text) {
            if word.mandatory {
                self.words[existing].mark_mandatory();
            }
            return Err(existing);
        }
        self.words.push(word);
        Ok(self.words.len() - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn longest_len(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }

    pub fn total_letters(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }

    pub fn mandatory_count(&self) -> usize {
        self.words.iter().filter(|w| w.mandatory).count()
    }

    /// Word ids in placement priority order: mandatory first, then longest first,
    /// ties broken by input order.
    pub fn priority_order(&self) -> Vec<WordId> {
        let mut order: Vec<WordId> = (0..self.words.len()).collect();
        order.sort_by_key(|&id| {
            let word = &self.words[id];
            (Reverse(word.mandatory), Reverse(word.len()))
        });
        order
    }
}

impl std::ops::Index<WordId> for WordList {
    type Output = Word;

    fn index(&self, id: WordId) -> &Self::Output {
        &self.words[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, bool)]) -> WordList {
        let mut list = WordList::new();
        for &(text, mandatory) in entries {
            let _ = list.insert(Word::new(text, mandatory));
        }
        list
    }

    #[test]
    fn word_length_counts_letters_not_bytes() {
        let word = Word::new("ÉTÉ", false);
        assert_eq!(word.len(), 3);
        assert_eq!(word.letters(), &['É', 'T', 'É']);
    }

    #[test]
    fn insert_rejects_duplicates_and_promotes_mandatory() {
        let mut list = WordList::new();
        assert_eq!(list.insert(Word::new("CAT", false)), Ok(0));
        assert_eq!(list.insert(Word::new("DOG", false)), Ok(1));
        assert_eq!(list.insert(Word::new("CAT", true)), Err(0));

        assert_eq!(list.len(), 2);
        assert!(list[0].is_mandatory());
        assert!(!list[1].is_mandatory());
    }

    #[test]
    fn duplicate_optional_does_not_demote_mandatory() {
        let mut list = WordList::new();
        let _ = list.insert(Word::new("CAT", true));
        let _ = list.insert(Word::new("CAT", false));
        assert!(list[0].is_mandatory());
    }

    #[test]
    fn aggregate_statistics() {
        let list = list(&[("AB", false), ("ABCDE", true), ("XYZ", false)]);
        assert_eq!(list.longest_len(), 5);
        assert_eq!(list.total_letters(), 10);
        assert_eq!(list.mandatory_count(), 1);
    }

    #[test]
    fn priority_order_is_mandatory_then_longest_then_input_order() {
        let list = list(&[
            ("ONE", false),
            ("THREE", false),
            ("TWO", true),
            ("FOUR", true),
            ("SIX", false),
            ("TEN", true),
        ]);
        // FOUR(m,4) TWO(m,3) TEN(m,3) THREE(5) ONE(3) SIX(3)
        assert_eq!(list.priority_order(), vec![3, 2, 5, 1, 0, 4]);
    }

    #[test]
    fn empty_list_statistics_are_zero() {
        let list = WordList::new();
        assert!(list.is_empty());
        assert_eq!(list.longest_len(), 0);
        assert!(list.priority_order().is_empty());
    }
}
