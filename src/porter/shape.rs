//! Consonant/vowel classification and the measure of a stem.
//!
//! A letter is a vowel if it is one of `a`, `e`, `i`, `o`, `u`. The letter `y`
//! is a consonant at the start of a word and otherwise takes the opposite
//! class of the letter before it, so `y` after a consonant is a vowel. Every
//! other letter is a consonant.
//!
//! Because the class of `y` depends on its left neighbour, the whole word is
//! classified once in a single left-to-right scan and every predicate indexes
//! into that mask.
//!
//! # Measure
//!
//! Any word can be written as `[C](VC){m}[V]`, where `C` is a run of
//! consonants and `V` a run of vowels. `m` is the measure:
//!
//! ```text
//! m=0: tr, ee, tree, y, by
//! m=1: trouble, oats, trees, ivy
//! m=2: troubles, private, oaten, orrery
//! ```
//!
//! # Examples
//!
//! ```
//! use vanilla_porter::porter::shape::{measure, Shape};
//!
//! assert_eq!(measure("trouble"), 1);
//!
//! let shape = Shape::new("happy");
//! assert!(shape.is_consonant(0));
//! assert!(!shape.is_consonant(4)); // 'y' after 'p'
//! ```

use crate::error::{Result, StemError};

/// Consonant/vowel mask of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    letters: Vec<char>,
    consonant: Vec<bool>,
}

impl Shape {
    /// Classify every letter of `word`.
    pub fn new(word: &str) -> Self {
        let letters: Vec<char> = word.chars().collect();
        let mut consonant: Vec<bool> = Vec::with_capacity(letters.len());

        for (i, &c) in letters.iter().enumerate() {
            let is_consonant = match c {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' if i == 0 => true,
                'y' => !consonant[i - 1],
                _ => true,
            };
            consonant.push(is_consonant);
        }

        Shape { letters, consonant }
    }

    /// Classify a stem the rule pipeline is about to test.
    ///
    /// Fails with [`StemError::UnsupportedCharacter`] if the stem holds
    /// anything but letters. An empty stem is accepted.
    pub fn try_new(stem: &str) -> Result<Self> {
        if !stem.chars().all(char::is_alphabetic) {
            return Err(StemError::unsupported_character(stem));
        }
        Ok(Shape::new(stem))
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the word is empty.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether the letter at `index` is a consonant.
    ///
    /// Positions past the end of the word are reported as not consonants.
    pub fn is_consonant(&self, index: usize) -> bool {
        self.consonant.get(index).copied().unwrap_or(false)
    }

    /// Count of vowel-to-consonant transitions.
    pub fn measure(&self) -> usize {
        self.consonant
            .windows(2)
            .filter(|pair| !pair[0] && pair[1])
            .count()
    }

    /// Whether any letter is a vowel.
    pub fn contains_vowel(&self) -> bool {
        self.consonant.iter().any(|&c| !c)
    }

    /// Whether the word ends with two identical consonants.
    pub fn ends_double_consonant(&self) -> bool {
        let n = self.len();
        n >= 2 && self.letters[n - 1] == self.letters[n - 2] && self.consonant[n - 1]
    }

    /// Whether the word ends consonant-vowel-consonant, the final consonant
    /// not being `w`, `x` or `y`.
    pub fn ends_cvc(&self) -> bool {
        let n = self.len();
        n >= 3
            && self.consonant[n - 3]
            && !self.consonant[n - 2]
            && self.consonant[n - 1]
            && !matches!(self.letters[n - 1], 'w' | 'x' | 'y')
    }

    /// The last letter, if any.
    pub fn last(&self) -> Option<char> {
        self.letters.last().copied()
    }

    /// Render the mask as a string of `c` and `v`.
    pub fn pattern(&self) -> String {
        self.consonant
            .iter()
            .map(|&c| if c { 'c' } else { 'v' })
            .collect()
    }
}

/// Whether the letter at `index` of `word` is a consonant.
pub fn is_consonant(word: &str, index: usize) -> bool {
    Shape::new(word).is_consonant(index)
}

/// The measure `m` of a stem. An empty stem has measure 0.
pub fn measure(stem: &str) -> usize {
    Shape::new(stem).measure()
}

/// Whether the stem contains a vowel.
pub fn contains_vowel(stem: &str) -> bool {
    Shape::new(stem).contains_vowel()
}

/// Whether the stem ends with a double consonant.
pub fn ends_double_consonant(stem: &str) -> bool {
    Shape::new(stem).ends_double_consonant()
}

/// Whether the stem ends consonant-vowel-consonant (final letter not w, x, y).
pub fn ends_cvc(stem: &str) -> bool {
    Shape::new(stem).ends_cvc()
}
