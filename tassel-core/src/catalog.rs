//! Message catalog
//!
//! The catalog is fixed for the lifetime of the program. Both constructors
//! are `const`, so a catalog built in a `static` initializer is checked at
//! compile time.

use crate::glyph::Glyph;

/// Catalog construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// Catalog has no messages
    EmptyCatalog,
    /// Message has no glyphs
    EmptyMessage,
}

/// An immutable, non-empty sequence of glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message<'a> {
    glyphs: &'a [Glyph],
}

impl<'a> Message<'a> {
    /// Create a message, rejecting an empty glyph slice
    pub const fn new(glyphs: &'a [Glyph]) -> Result<Self, CatalogError> {
        if glyphs.is_empty() {
            Err(CatalogError::EmptyMessage)
        } else {
            Ok(Self { glyphs })
        }
    }

    /// Number of glyphs (always at least 1)
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub const fn glyphs(&self) -> &'a [Glyph] {
        self.glyphs
    }

    /// Glyph at a signed position, `None` outside the message
    pub fn get(&self, index: i32) -> Option<Glyph> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.glyphs.get(i))
            .copied()
    }
}

/// An ordered, non-empty, cyclic list of messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Catalog<'a> {
    messages: &'a [Message<'a>],
}

impl<'a> Catalog<'a> {
    /// Create a catalog, rejecting an empty message list
    pub const fn new(messages: &'a [Message<'a>]) -> Result<Self, CatalogError> {
        if messages.is_empty() {
            Err(CatalogError::EmptyCatalog)
        } else {
            Ok(Self { messages })
        }
    }

    /// Number of messages (always at least 1)
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    /// Message at `index`, wrapping modulo the catalog length
    pub fn get(&self, index: usize) -> Message<'a> {
        self.messages[index % self.messages.len()]
    }

    /// Index of the message after `index`, wrapping to 0
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message<'a>> {
        self.messages.iter()
    }

    /// Length of the longest message
    pub fn longest(&self) -> usize {
        self.messages.iter().map(Message::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: [Glyph; 3] = [Glyph::from_bits(1), Glyph::from_bits(2), Glyph::from_bits(3)];
    const XY: [Glyph; 2] = [Glyph::from_bits(4), Glyph::from_bits(5)];

    #[test]
    fn test_empty_message_rejected() {
        assert_eq!(Message::new(&[]), Err(CatalogError::EmptyMessage));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::new(&[]), Err(CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_const_construction() {
        const MESSAGES: [Message<'static>; 2] = [
            match Message::new(&ABC) {
                Ok(m) => m,
                Err(_) => panic!("empty"),
            },
            match Message::new(&XY) {
                Ok(m) => m,
                Err(_) => panic!("empty"),
            },
        ];
        static CATALOG: Catalog<'static> = match Catalog::new(&MESSAGES) {
            Ok(c) => c,
            Err(_) => panic!("empty"),
        };

        assert_eq!(CATALOG.len(), 2);
        assert_eq!(CATALOG.longest(), 3);
    }

    #[test]
    fn test_message_signed_lookup() {
        let msg = Message::new(&ABC).unwrap();
        assert_eq!(msg.len(), 3);
        assert_eq!(msg.get(-1), None);
        assert_eq!(msg.get(0), Some(ABC[0]));
        assert_eq!(msg.get(2), Some(ABC[2]));
        assert_eq!(msg.get(3), None);
    }

    #[test]
    fn test_index_wraps() {
        let messages = [Message::new(&ABC).unwrap(), Message::new(&XY).unwrap()];
        let catalog = Catalog::new(&messages).unwrap();

        assert_eq!(catalog.get(0), messages[0]);
        assert_eq!(catalog.get(1), messages[1]);
        assert_eq!(catalog.get(2), messages[0]);
        assert_eq!(catalog.next_index(0), 1);
        assert_eq!(catalog.next_index(1), 0);
        assert_eq!(catalog.iter().count(), 2);
    }

    #[test]
    fn test_single_message_catalog_cycles_to_itself() {
        let messages = [Message::new(&XY).unwrap()];
        let catalog = Catalog::new(&messages).unwrap();
        assert_eq!(catalog.next_index(0), 0);
    }
}
