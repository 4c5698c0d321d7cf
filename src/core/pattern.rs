//! Displayed-pattern representation and per-word derivation
//!
//! A pattern is the player-visible reveal state: one slot per letter
//! position, each either hidden or showing a revealed letter. It renders as
//! letters and dashes joined by single spaces ("- o -"), and it orders
//! exactly as its rendered string does, which is what makes family selection
//! deterministic.

use std::cmp::Ordering;
use std::fmt;

/// The reveal state of one word slot per position
///
/// Hidden slots render as `-`; revealed slots render as their letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// Create an all-hidden pattern with the given number of positions
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::hidden(3);
    /// assert_eq!(pattern.to_string(), "- - -");
    /// assert_eq!(pattern.len(), 3);
    /// ```
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Number of letter positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the pattern has no positions at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Derive the pattern `word` would produce if `guess` were revealed
    ///
    /// Walks the word's positions: where the word has the guessed character,
    /// the resulting slot shows it; everywhere else the resulting slot keeps
    /// whatever this pattern currently shows (a dash, or a letter revealed by
    /// an earlier guess). Pure; the receiver is unchanged.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::hidden(3).reveal("dot", 'o');
    /// assert_eq!(pattern.to_string(), "- o -");
    ///
    /// // Earlier reveals are kept.
    /// assert_eq!(pattern.reveal("dot", 't').to_string(), "- o t");
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the word's character count differs from the
    /// pattern length.
    #[must_use]
    pub fn reveal(&self, word: &str, guess: char) -> Self {
        debug_assert_eq!(
            word.chars().count(),
            self.slots.len(),
            "word length must match pattern length"
        );

        let slots = word
            .chars()
            .zip(&self.slots)
            .map(|(ch, &slot)| if ch == guess { Some(guess) } else { slot })
            .collect();

        Self { slots }
    }

    /// Count how many slots currently reveal the given letter
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.slots
            .iter()
            .filter(|&&slot| slot == Some(letter))
            .count()
    }

    /// Check whether every slot has been revealed
    ///
    /// A fully revealed pattern is the caller-side win condition; the engine
    /// itself keeps accepting guesses as long as the budget allows.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Parse a pattern from its rendered form, e.g. `"- o -"`
    ///
    /// Accepts whitespace-separated single-character tokens, with `-` meaning
    /// a hidden slot. Returns `None` for empty input or malformed tokens.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::parse("- o -").unwrap();
    /// assert_eq!(pattern, Pattern::hidden(3).reveal("dot", 'o'));
    ///
    /// assert!(Pattern::parse("").is_none());
    /// assert!(Pattern::parse("- ox -").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut slots = Vec::new();

        for token in s.split_whitespace() {
            let mut chars = token.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            slots.push(if ch == '-' { None } else { Some(ch) });
        }

        if slots.is_empty() {
            return None;
        }

        Some(Self { slots })
    }

    /// The characters the pattern renders, one per slot
    fn display_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().map(|slot| slot.unwrap_or('-'))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ch) in self.display_chars().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl Ord for Pattern {
    /// Order patterns exactly as their rendered strings order
    ///
    /// Slot characters are compared left to right with hidden slots reading
    /// as `-`. The raw slots break the degenerate tie where a hidden slot and
    /// a revealed `-` would render identically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.display_chars()
            .cmp(other.display_chars())
            .then_with(|| self.slots.cmp(&other.slots))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid pattern string: {s}"))
    }
}
