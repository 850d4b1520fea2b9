//! Keysym table construction and lookup.
//!
//! `builder` scans layouts into a [`KeyboardLayoutSet`], `compose` matches
//! dead key sequences against it, and [`Keymap`] ties both to the layout
//! change serial so rebuilds happen lazily and atomically.

mod builder;
mod compose;
#[allow(clippy::module_inception)]
mod keymap;
mod level;
mod special;
mod types;

pub use compose::ComposeMatch;
pub use keymap::Keymap;
pub use level::{ModifierLevel, ModifierState};
pub use types::{DeadKeyNode, GroupOptions, KeyTranslation, KeyboardLayoutSet, KeymapKey};
