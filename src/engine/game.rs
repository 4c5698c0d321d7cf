//! Game state manager for the adversarial keeper
//!
//! `HangmanGame` owns all mutable state of one session: the candidate words,
//! the displayed pattern, the wrong-guess budget, and the guessed letters.
//! All four are created together at construction and updated together on each
//! recorded guess.

use super::partition::{largest_family, partition};
use crate::core::Pattern;
use std::collections::BTreeSet;
use std::fmt;

/// Error type for game construction and play
///
/// `ZeroLength` and `AlreadyGuessed` are caller-fixable argument errors;
/// `NoCandidates` and `OutOfGuesses` mean the session cannot proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Construction asked for words of length zero.
    ZeroLength,
    /// The letter was already guessed earlier in this session.
    AlreadyGuessed(char),
    /// No candidate words remain; the dictionary had none of the requested length.
    NoCandidates,
    /// No wrong guesses remain.
    OutOfGuesses,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "word length must be at least 1"),
            Self::AlreadyGuessed(letter) => {
                write!(f, "letter '{letter}' was already guessed")
            }
            Self::NoCandidates => write!(f, "no candidate words of the requested length"),
            Self::OutOfGuesses => write!(f, "no wrong guesses remain"),
        }
    }
}

impl std::error::Error for GameError {}

/// Adversarial Hangman game state
///
/// The keeper never commits to an answer. Each recorded guess partitions the
/// surviving candidates by the pattern they would produce and keeps the
/// largest family, so every word still in [`Self::words`] is consistent with
/// everything shown to the player so far.
#[derive(Debug, Clone)]
pub struct HangmanGame {
    candidates: BTreeSet<String>,
    pattern: Pattern,
    guesses_left: usize,
    guessed: BTreeSet<char>,
}

impl HangmanGame {
    /// Start a game over the given dictionary
    ///
    /// Keeps the deduplicated subset of `dictionary` whose character count
    /// equals `length`; words of any other length are ignored. The pattern
    /// starts fully hidden and `max_wrong` wrong guesses are allowed.
    ///
    /// # Errors
    /// Returns [`GameError::ZeroLength`] if `length` is zero.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::HangmanGame;
    ///
    /// let game = HangmanGame::new(["dog", "dot", "cat", "bird"], 3, 5).unwrap();
    /// assert_eq!(game.words().len(), 3);
    /// assert_eq!(game.guesses_left(), 5);
    /// ```
    pub fn new<I, S>(dictionary: I, length: usize, max_wrong: usize) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if length == 0 {
            return Err(GameError::ZeroLength);
        }

        let candidates = dictionary
            .into_iter()
            .map(Into::into)
            .filter(|word| word.chars().count() == length)
            .collect();

        Ok(Self {
            candidates,
            pattern: Pattern::hidden(length),
            guesses_left: max_wrong,
            guessed: BTreeSet::new(),
        })
    }

    /// The words still considered possible answers, sorted
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.candidates
    }

    /// Wrong guesses the player has left
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    /// The letters guessed so far, sorted
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// The pattern to display, letters and dashes joined by single spaces
    ///
    /// # Errors
    /// Returns [`GameError::NoCandidates`] if no candidate words remain,
    /// which can only happen when the game was constructed from a dictionary
    /// with no words of the requested length.
    pub fn pattern(&self) -> Result<String, GameError> {
        if self.candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }
        Ok(self.pattern.to_string())
    }

    /// Record the player's next guess and return how many slots it revealed
    ///
    /// Partitions the candidates by the pattern each would produce with
    /// `guess` revealed, keeps the largest family (ties resolved toward the
    /// pattern that sorts first), and makes that family's pattern the new
    /// display. A guess that reveals nothing costs one wrong guess.
    ///
    /// # Errors
    /// Returns [`GameError::NoCandidates`] or [`GameError::OutOfGuesses`] if
    /// the session cannot accept guesses, and otherwise
    /// [`GameError::AlreadyGuessed`] if `guess` was recorded before.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::HangmanGame;
    ///
    /// let mut game = HangmanGame::new(["dog", "dot", "cat"], 3, 2).unwrap();
    /// assert_eq!(game.record('o').unwrap(), 1);
    /// assert_eq!(game.pattern().unwrap(), "- o -");
    /// assert_eq!(game.words().len(), 2);
    /// ```
    pub fn record(&mut self, guess: char) -> Result<usize, GameError> {
        if self.candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }
        if self.guesses_left < 1 {
            return Err(GameError::OutOfGuesses);
        }
        if !self.guessed.insert(guess) {
            return Err(GameError::AlreadyGuessed(guess));
        }

        let families = partition(&self.candidates, &self.pattern, guess);
        if let Some((pattern, family)) = largest_family(families) {
            self.pattern = pattern;
            self.candidates = family;
        }

        let revealed = self.pattern.count_of(guess);
        if revealed == 0 {
            self.guesses_left -= 1;
        }

        Ok(revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word_set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn small_game(max_wrong: usize) -> HangmanGame {
        HangmanGame::new(["dog", "dot", "cat"], 3, max_wrong).unwrap()
    }

    #[test]
    fn new_filters_by_length_and_dedups() {
        let dictionary = ["dog", "dot", "cat", "dog", "bird", "no", "geese"];
        let game = HangmanGame::new(dictionary, 3, 4).unwrap();

        assert_eq!(game.words(), &word_set(&["cat", "dog", "dot"]));
    }

    #[test]
    fn new_rejects_zero_length() {
        let result = HangmanGame::new(["dog"], 0, 4);
        assert_eq!(result.unwrap_err(), GameError::ZeroLength);
    }

    #[test]
    fn new_allows_zero_budget() {
        let mut game = small_game(0);
        assert_eq!(game.guesses_left(), 0);
        assert_eq!(game.record('a'), Err(GameError::OutOfGuesses));
    }

    #[test]
    fn initial_state() {
        let game = small_game(2);
        assert_eq!(game.pattern().unwrap(), "- - -");
        assert_eq!(game.guesses_left(), 2);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn pattern_fails_without_candidates() {
        let game = HangmanGame::new(["dog"], 5, 3).unwrap();
        assert!(game.words().is_empty());
        assert_eq!(game.pattern(), Err(GameError::NoCandidates));
    }

    #[test]
    fn record_reveals_and_keeps_budget() {
        let mut game = small_game(2);

        assert_eq!(game.record('o').unwrap(), 1);
        assert_eq!(game.pattern().unwrap(), "- o -");
        assert_eq!(game.words(), &word_set(&["dog", "dot"]));
        assert_eq!(game.guesses_left(), 2);
        assert!(game.guesses().contains(&'o'));
    }

    #[test]
    fn record_miss_costs_a_guess() {
        let mut game = small_game(2);

        assert_eq!(game.record('z').unwrap(), 0);
        assert_eq!(game.guesses_left(), 1);
        assert_eq!(game.pattern().unwrap(), "- - -");
        assert_eq!(game.words(), &word_set(&["cat", "dog", "dot"]));
    }

    #[test]
    fn record_rejects_repeated_letter() {
        let mut game = small_game(3);

        game.record('o').unwrap();
        assert_eq!(game.record('o'), Err(GameError::AlreadyGuessed('o')));

        // The failed call left the state untouched.
        assert_eq!(game.guesses_left(), 3);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn record_fails_once_budget_is_exhausted() {
        let mut game = small_game(1);

        assert_eq!(game.record('z').unwrap(), 0);
        assert_eq!(game.guesses_left(), 0);
        assert_eq!(game.record('a'), Err(GameError::OutOfGuesses));
    }

    #[test]
    fn empty_candidates_outrank_an_empty_budget() {
        let mut game = HangmanGame::new(["dog"], 5, 0).unwrap();
        assert_eq!(game.record('a'), Err(GameError::NoCandidates));
    }

    #[test]
    fn keeper_moves_to_the_largest_family() {
        let dictionary = [
            "ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex",
        ];
        let mut game = HangmanGame::new(dictionary, 4, 5).unwrap();

        // 'e' splits the nine words five ways; the all-hidden family
        // {ally, cool, good} is the largest, so the guess reveals nothing.
        assert_eq!(game.record('e').unwrap(), 0);
        assert_eq!(game.pattern().unwrap(), "- - - -");
        assert_eq!(game.words(), &word_set(&["ally", "cool", "good"]));
        assert_eq!(game.guesses_left(), 4);
    }

    #[test]
    fn keeper_dodges_a_guess_when_families_tie() {
        let mut game = small_game(2);
        game.record('o').unwrap();

        // {dog} -> "- o g" and {dot} -> "- o -" tie at one word each;
        // "- o -" sorts first, so 'g' comes up empty.
        assert_eq!(game.record('g').unwrap(), 0);
        assert_eq!(game.pattern().unwrap(), "- o -");
        assert_eq!(game.words(), &word_set(&["dot"]));
        assert_eq!(game.guesses_left(), 1);
    }

    #[test]
    fn adversarial_game_plays_to_a_win() {
        let mut game = small_game(3);

        assert_eq!(game.record('o').unwrap(), 1);
        assert_eq!(game.words(), &word_set(&["dog", "dot"]));

        // 't' ties "- o -" {dog} against "- o t" {dot}; the keeper slips
        // into {dog} and the guess costs a life.
        assert_eq!(game.record('t').unwrap(), 0);
        assert_eq!(game.words(), &word_set(&["dog"]));
        assert_eq!(game.guesses_left(), 2);

        assert_eq!(game.record('d').unwrap(), 1);
        assert_eq!(game.record('g').unwrap(), 1);
        assert_eq!(game.pattern().unwrap(), "d o g");
        assert_eq!(game.guesses_left(), 2);
    }

    #[test]
    fn candidates_only_ever_shrink() {
        let mut game = small_game(5);

        for guess in ['o', 'a', 't', 'd'] {
            let before = game.words().clone();
            game.record(guess).unwrap();
            assert!(game.words().is_subset(&before));
            assert!(!game.words().is_empty());
        }
    }

    #[test]
    fn queries_are_stable_between_records() {
        let mut game = small_game(4);
        game.record('o').unwrap();

        assert_eq!(game.pattern().unwrap(), game.pattern().unwrap());
        assert_eq!(game.words().clone(), game.words().clone());
        assert_eq!(game.guesses_left(), game.guesses_left());
        assert_eq!(game.guesses().clone(), game.guesses().clone());
    }

    #[test]
    fn guessed_letters_are_sorted() {
        let mut game = small_game(5);
        game.record('z').unwrap();
        game.record('a').unwrap();

        let guessed: Vec<char> = game.guesses().iter().copied().collect();
        assert_eq!(guessed, vec!['a', 'z']);
    }

    #[test]
    fn single_word_games_reveal_directly() {
        let mut game = HangmanGame::new(["geese"], 5, 3).unwrap();

        assert_eq!(game.record('e').unwrap(), 3);
        assert_eq!(game.pattern().unwrap(), "- e e - e");
        assert_eq!(game.guesses_left(), 3);
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            GameError::AlreadyGuessed('q').to_string(),
            "letter 'q' was already guessed"
        );
        assert_eq!(GameError::ZeroLength.to_string(), "word length must be at least 1");
    }
}
