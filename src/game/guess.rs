use std::collections::BTreeSet;

use crate::game::words::Word;

/// Shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Result of a guess that changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// The hidden word and the letters guessed against it.
#[derive(Debug, Clone)]
pub struct GuessState {
    word: Word,
    guessed: BTreeSet<char>,
}

impl GuessState {
    pub fn new(word: Word) -> Self {
        Self {
            word,
            guessed: BTreeSet::new(),
        }
    }

    /// Record a guess. Returns `None` without touching anything when the
    /// input is not an ASCII letter or the letter was already guessed.
    pub fn apply_guess(&mut self, letter: char) -> Option<Outcome> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let letter = letter.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            return None;
        }

        if self.word.contains(letter) {
            Some(Outcome::Correct)
        } else {
            Some(Outcome::Incorrect)
        }
    }

    /// Every letter of the word has been guessed. A repeated letter is
    /// revealed everywhere by a single guess.
    pub fn is_fully_revealed(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    /// The word in order, with `None` for letters still hidden.
    pub fn revealed(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.word
            .chars()
            .map(|c| self.guessed.contains(&c).then_some(c))
    }

    pub fn display_word(&self) -> String {
        self.revealed().map(|c| c.unwrap_or(PLACEHOLDER)).collect()
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    pub fn correct(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|c| self.word.contains(*c))
    }

    pub fn incorrect(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.word.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(word: &str) -> GuessState {
        GuessState::new(Word::new(word).unwrap())
    }

    #[test]
    fn correct_and_incorrect_outcomes() {
        let mut s = state("CAT");
        assert_eq!(s.apply_guess('a'), Some(Outcome::Correct));
        assert_eq!(s.apply_guess('Z'), Some(Outcome::Incorrect));
        assert_eq!(s.correct().collect::<Vec<_>>(), vec!['A']);
        assert_eq!(s.incorrect().collect::<Vec<_>>(), vec!['Z']);
    }

    #[test]
    fn repeat_guess_is_a_no_op() {
        let mut s = state("CAT");
        assert_eq!(s.apply_guess('Q'), Some(Outcome::Incorrect));
        assert_eq!(s.apply_guess('Q'), None);
        assert_eq!(s.apply_guess('q'), None);
        assert_eq!(s.guessed().len(), 1);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut s = state("CAT");
        for c in ['1', ' ', '-', 'é', '\n'] {
            assert_eq!(s.apply_guess(c), None);
        }
        assert!(s.guessed().is_empty());
    }

    #[test]
    fn repeated_letter_revealed_by_one_guess() {
        let mut s = state("CHEESE");
        s.apply_guess('E');
        assert_eq!(s.display_word(), "__EE_E");
        s.apply_guess('C');
        s.apply_guess('H');
        assert!(!s.is_fully_revealed());
        s.apply_guess('S');
        assert!(s.is_fully_revealed());
        assert_eq!(s.display_word(), "CHEESE");
    }

    #[test]
    fn correct_and_incorrect_partition_guesses() {
        let mut s = state("MOUSE");
        for c in "AEIOUXYZ".chars() {
            s.apply_guess(c);
        }
        let correct: BTreeSet<char> = s.correct().collect();
        let incorrect: BTreeSet<char> = s.incorrect().collect();
        assert!(correct.is_disjoint(&incorrect));
        assert_eq!(correct.len() + incorrect.len(), s.guessed().len());
        assert_eq!(correct, ['E', 'O', 'U'].into_iter().collect());
    }

    #[test]
    fn revealed_follows_word_order() {
        let mut s = state("TRAP");
        s.apply_guess('P');
        s.apply_guess('T');
        assert_eq!(
            s.revealed().collect::<Vec<_>>(),
            vec![Some('T'), None, None, Some('P')]
        );
    }
}
