//! Keyboard layout translation for Win32.
//!
//! Builds a dense virtual-key to keysym table for every installed keyboard
//! layout, discovers dead key (diacritic) combinations by probing the
//! platform's stateful character translation, and matches compose sequences
//! against the discovered dead key trees.

pub mod backend;
pub mod error;
pub mod keymap;
pub mod types;

pub use backend::{KeyboardBackend, LayoutHandle, Translation};
pub use error::{Error, Result};
pub use keymap::{
    ComposeMatch, DeadKeyNode, GroupOptions, KeyTranslation, KeyboardLayoutSet, Keymap, KeymapKey,
    ModifierLevel, ModifierState,
};
pub use types::keysym::{self, Keysym};
pub use types::virtual_keys;
