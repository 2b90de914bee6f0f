//! Letters of the fixed `a..=z` alphabet and compact sets of them
//!
//! A `LetterSet` is a 26-bit mask, so membership tests and inserts are O(1)
//! and the whole set is `Copy`.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A single lowercase letter `a..=z`, stored as its alphabet index (0-25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Every letter in alphabetical order
    pub const ALL: [Self; ALPHABET_SIZE] = {
        let mut all = [Self(0); ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Build a letter from an ASCII byte, accepting either case
    ///
    /// Returns `None` for anything outside `a..=z` / `A..=Z`.
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'a'..=b'z' => Some(Self(byte - b'a')),
            b'A'..=b'Z' => Some(Self(byte - b'A')),
            _ => None,
        }
    }

    /// Build a letter from a char, accepting either case
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('E'), Letter::from_char('e'));
    /// assert!(Letter::from_char('_').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_byte)
    }

    /// Alphabet index, `a` = 0 through `z` = 25
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Lowercase ASCII byte for this letter
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        b'a' + self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters backed by a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// The very common letters {a, e, i, o, n, t}
    pub const TOP_SIX: Self = Self::from_bytes(b"aeiont");

    /// Build a set from lowercase ASCII bytes; other bytes are ignored
    #[must_use]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < bytes.len() {
            if let Some(letter) = Letter::from_byte(bytes[i]) {
                mask |= letter.bit();
            }
            i += 1;
        }
        Self(mask)
    }

    /// Insert a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: Letter) -> bool {
        let absent = !self.contains(letter);
        self.0 |= letter.bit();
        absent
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::ALL
            .into_iter()
            .filter(move |&letter| self.contains(letter))
    }
}

impl Extend<Letter> for LetterSet {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_round_trips_through_char() {
        for letter in Letter::ALL {
            assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
        }
        assert_eq!(Letter::ALL[0].as_char(), 'a');
        assert_eq!(Letter::ALL[25].as_char(), 'z');
    }

    #[test]
    fn letter_rejects_non_letters() {
        for ch in ['_', '.', ' ', '3', 'é', '-'] {
            assert!(Letter::from_char(ch).is_none(), "{ch:?} accepted");
        }
    }

    #[test]
    fn letters_order_alphabetically() {
        let a = Letter::from_char('a').unwrap();
        let b = Letter::from_char('b').unwrap();
        assert!(a < b);
    }

    #[test]
    fn set_insert_reports_novelty() {
        let mut set = LetterSet::EMPTY;
        let e = Letter::from_char('e').unwrap();
        assert!(set.insert(e));
        assert!(!set.insert(e));
        assert_eq!(set.len(), 1);
        assert!(set.contains(e));
    }

    #[test]
    fn top_six_contents() {
        assert_eq!(LetterSet::TOP_SIX.to_string(), "aeinot");
        assert_eq!(LetterSet::TOP_SIX.len(), 6);
    }

    #[test]
    fn set_iterates_alphabetically() {
        let set = LetterSet::from_bytes(b"zebra");
        let letters: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(letters, "aberz");
    }

    #[test]
    fn set_union_and_collect() {
        let left = LetterSet::from_bytes(b"abc");
        let right: LetterSet = "cde".chars().filter_map(Letter::from_char).collect();
        assert_eq!(left.union(right).to_string(), "abcde");
        assert!(LetterSet::EMPTY.is_empty());
    }
}
