// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ColorSet type for representing sets of colors as bitsets.
//!
//! A ColorSet is a compact representation of a set of colors, where bit i
//! represents the presence of color i. The color space is sized at runtime
//! (an n-vertex graph uses colors `[0, n+1)`), so the bits live in a small
//! vector of u64 words rather than a single fixed-width integer.
//!
//! # Examples
//!
//! ```
//! use vizing_color::graph::{Color, ColorSet};
//!
//! let mut set = ColorSet::empty(6);
//! set.insert(Color::new(0));
//! set.insert(Color::new(4));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.smallest(), Some(Color::new(0)));
//! assert_eq!(format!("{}", set), "{0,4}");
//! ```

use crate::graph::Color;
use std::fmt;

const WORD_BITS: usize = 64;

/// A set of colors drawn from `[0, limit)`, represented as a bitset.
///
/// Bit i (counting from the LSB of word i/64) is set if color i is in the
/// set. Insert, remove, and contains are O(1); iteration is ascending, which
/// is what makes "smallest free color" selections deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    words: Vec<u64>,
    limit: usize,
}

impl ColorSet {
    /// Create an empty set over the color space `[0, limit)`.
    pub fn empty(limit: usize) -> Self {
        Self {
            words: vec![0; limit.div_ceil(WORD_BITS)],
            limit,
        }
    }

    /// Create a set containing every color in `[0, limit)`.
    pub fn full(limit: usize) -> Self {
        let mut set = Self::empty(limit);
        for word in 0..set.words.len() {
            let lo = word * WORD_BITS;
            let in_word = (limit - lo).min(WORD_BITS);
            set.words[word] = if in_word == WORD_BITS {
                u64::MAX
            } else {
                (1u64 << in_word) - 1
            };
        }
        set
    }

    /// The size of the color space this set draws from.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Check if the set contains a specific color.
    ///
    /// Colors at or beyond the limit are never members.
    pub fn contains(&self, color: Color) -> bool {
        let i = color.as_usize();
        i < self.limit && (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 != 0
    }

    /// Insert a color into the set.
    ///
    /// # Panics
    ///
    /// Panics if the color is outside `[0, limit)`.
    pub fn insert(&mut self, color: Color) {
        let i = color.as_usize();
        assert!(i < self.limit, "color {} outside limit {}", color, self.limit);
        self.words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
    }

    /// Remove a color from the set. Removing an absent color is a no-op.
    pub fn remove(&mut self, color: Color) {
        let i = color.as_usize();
        if i < self.limit {
            self.words[i / WORD_BITS] &= !(1 << (i % WORD_BITS));
        }
    }

    /// Get the number of colors in the set (population count).
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// The smallest color in the set, if any.
    ///
    /// This is the selection primitive for the algorithm's "first free
    /// color" choices, so it must agree with [`iter`](Self::iter) order.
    pub fn smallest(&self) -> Option<Color> {
        for (wi, &word) in self.words.iter().enumerate() {
            if word != 0 {
                let bit = word.trailing_zeros() as usize;
                return Some(Color::new((wi * WORD_BITS + bit) as u32));
            }
        }
        None
    }

    /// Iterate over all colors in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        ColorSetIter {
            set: self,
            index: 0,
        }
    }
}

/// Iterator over colors in a ColorSet.
struct ColorSetIter<'a> {
    set: &'a ColorSet,
    index: usize,
}

impl Iterator for ColorSetIter<'_> {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.set.limit {
            let idx = self.index;
            self.index += 1;

            if (self.set.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 != 0 {
                return Some(Color::new(idx as u32));
            }
        }
        None
    }
}

impl fmt::Display for ColorSet {
    /// Format a color set as "{0,2,5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, color) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", color.value())?;
        }
        write!(f, "}}")
    }
}
