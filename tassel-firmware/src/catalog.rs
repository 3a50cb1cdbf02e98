//! Message catalog and display settings
//!
//! Generated at build time from `display.toml`. The build script rejects
//! empty catalogs and empty messages, and the `const` constructors below
//! check again when the statics are evaluated.

use core::num::NonZeroU32;

use tassel_core::{Catalog, DisplayConfig, Glyph, Message, Polarity};

include!(concat!(env!("OUT_DIR"), "/generated.rs"));

const fn message(glyphs: &'static [Glyph]) -> Message<'static> {
    match Message::new(glyphs) {
        Ok(message) => message,
        Err(_) => panic!("display.toml message has no glyphs"),
    }
}

/// Every message the display cycles through
pub static CATALOG: Catalog<'static> = match Catalog::new(&MESSAGES) {
    Ok(catalog) => catalog,
    Err(_) => panic!("display.toml has no messages"),
};

/// Human-readable name for a catalog entry
pub fn label(index: usize) -> &'static str {
    MESSAGE_LABELS.get(index).copied().unwrap_or("?")
}
