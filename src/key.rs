/// Number of symbols in the lowercase latin alphabet used by [`Lowercase`].
pub const LOWERCASE_ALPHABET_SIZE: usize = 26;

/// The `Key` trait allows a type to be used as a key in a `CountingTrie`.
///
/// A key is a sequence of symbols, each an integer in `[0, A)` where `A` is the trie's
/// alphabet size. Implementations only map; they do not validate. Feeding a symbol outside
/// the alphabet is a contract violation and callers must reject such input beforehand.
pub trait Key {
    /// Yields the symbols of the key in order.
    fn symbols(&self) -> impl Iterator<Item = u8>;

    fn symbols_vec(&self) -> Vec<u8> {
        self.symbols().collect()
    }
}

impl Key for u8 {
    fn symbols(&self) -> impl Iterator<Item = u8> {
        Some(*self).into_iter()
    }
}

impl Key for [u8] {
    fn symbols(&self) -> impl Iterator<Item = u8> {
        self.iter().copied()
    }
}

impl Key for Vec<u8> {
    fn symbols(&self) -> impl Iterator<Item = u8> {
        self.as_slice().iter().copied()
    }
}

impl<const N: usize> Key for [u8; N] {
    fn symbols(&self) -> impl Iterator<Item = u8> {
        self.as_slice().iter().copied()
    }
}

impl<T: Key + ?Sized> Key for &T {
    fn symbols(&self) -> impl Iterator<Item = u8> {
        T::symbols(*self)
    }
}

/// A key over the lowercase letters `a..=z`, mapped to symbols `0..26`.
///
/// # Examples
///
/// ```
/// # use tallytrie::{Key, Lowercase};
/// assert_eq!(Lowercase("cab").symbols_vec(), vec![2, 0, 1]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lowercase<'a>(pub &'a str);

impl Key for Lowercase<'_> {
    fn symbols(&self) -> impl Iterator<Item = u8> {
        self.0.bytes().map(|b| b.wrapping_sub(b'a'))
    }
}
