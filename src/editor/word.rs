//! Word alphabet and run scanning for word motions.
//!
//! A configurable set of characters is treated as "word" characters; every
//! other character is a separator. The buffer therefore splits into maximal
//! word runs and maximal separator runs:
//!
//! ```text
//! foo bar_baz, qux
//! www_wwwwwww__www      w = word run, _ = separator run
//! ```
//!
//! The two motions built on this are deliberately asymmetric:
//!
//! | Scan | Used by | Lands on |
//! |------|---------|----------|
//! | [`WordAlphabet::separator_run_end`] | `forward_word` | just past the next separator run |
//! | [`WordAlphabet::word_run_start`] | `backward_word` | start of the previous word run |

use std::collections::HashSet;

use ropey::Rope;

/// Character class for word boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Member of the word alphabet.
    Word,
    /// Anything else (spaces, punctuation, symbols).
    Separator,
}

/// The set of characters treated as word characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAlphabet {
    chars: HashSet<char>,
}

impl WordAlphabet {
    /// Characters of the default alphabet: ASCII letters, digits and `_`.
    pub const DEFAULT_CHARS: &'static str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

    /// Build an alphabet from the characters of `chars`.
    ///
    /// Duplicates are ignored. An empty string yields an alphabet where every
    /// character is a separator.
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Whether `ch` is a word character.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of distinct characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the alphabet has no characters at all.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn classify(&self, ch: char) -> CharClass {
        if self.contains(ch) {
            CharClass::Word
        } else {
            CharClass::Separator
        }
    }

    /// Char index just past the first separator run at or after `from`.
    ///
    /// Word characters before the run are skipped. Returns `None` when no
    /// separator occurs in `text[from..]`. `from` is clamped to the text.
    pub fn separator_run_end(&self, text: &Rope, from: usize) -> Option<usize> {
        let mut idx = from.min(text.len_chars());
        let mut chars = text.chars_at(idx);

        // Phase 1: skip word characters up to the run.
        loop {
            let ch = chars.next()?;
            idx += 1;
            if self.classify(ch) == CharClass::Separator {
                break;
            }
        }

        // Phase 2: consume the rest of the separator run.
        for ch in chars {
            if self.classify(ch) == CharClass::Word {
                break;
            }
            idx += 1;
        }

        Some(idx)
    }

    /// Char index of the start of the nearest word run ending at or before
    /// `to`.
    ///
    /// Separators between the run and `to` are skipped. Returns `None` when
    /// `text[..to]` holds no word character. `to` is clamped to the text.
    pub fn word_run_start(&self, text: &Rope, to: usize) -> Option<usize> {
        let mut idx = to.min(text.len_chars());
        let mut chars = text.chars_at(idx);

        // Phase 1: skip separators backward.
        loop {
            let ch = chars.prev()?;
            idx -= 1;
            if self.classify(ch) == CharClass::Word {
                break;
            }
        }

        // Phase 2: walk back to the first char of the word run.
        while let Some(ch) = chars.prev() {
            if self.classify(ch) == CharClass::Separator {
                break;
            }
            idx -= 1;
        }

        Some(idx)
    }
}

impl Default for WordAlphabet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHARS)
    }
}
