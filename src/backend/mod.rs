//! Platform seam for keyboard layout probing.
//!
//! The table builder never talks to the windowing system directly; it drives
//! a [`KeyboardBackend`], which on Windows wraps `GetKeyboardLayoutList`,
//! `MapVirtualKeyEx` and `ToUnicodeEx`. Tests supply a scripted backend.

#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::Win32Backend;

use crate::error::Result;
use crate::keymap::ModifierLevel;

/// Opaque handle for one installed keyboard layout (an `HKL` on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutHandle(pub isize);

/// Outcome of one stateful character translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// No character for this key at this level.
    None,
    /// Exactly one character.
    Char(char),
    /// The key is a dead key producing this spacing character. The
    /// translation state now holds the pending diacritic and must be cleared
    /// with [`KeyboardBackend::reset_dead_state`] before unrelated calls.
    DeadChar(char),
    /// More than one character; the builder ignores these.
    Multiple,
}

/// Native keyboard layout services needed to build a keysym table.
///
/// `translate` is a front for a stateful platform primitive: a
/// [`Translation::DeadChar`] outcome leaves hidden state behind that corrupts
/// subsequent translations for the same layout until `reset_dead_state` runs.
pub trait KeyboardBackend {
    /// All installed layouts, in group-index order.
    fn list_layouts(&mut self) -> Result<Vec<LayoutHandle>>;

    /// The layout that is currently active for input.
    fn active_layout(&mut self) -> LayoutHandle;

    /// Human readable layout identifier, for diagnostics only.
    fn layout_name(&mut self, layout: LayoutHandle) -> Option<String>;

    /// Scancode for a virtual key under the given layout, 0 if there is none.
    fn map_to_scancode(&mut self, vk: u8, layout: LayoutHandle) -> u32;

    /// Translates a pressed virtual key at a modifier level to characters.
    fn translate(
        &mut self,
        vk: u8,
        scancode: u32,
        level: ModifierLevel,
        layout: LayoutHandle,
    ) -> Translation;

    /// Clears any pending dead-key state for the layout.
    fn reset_dead_state(&mut self, layout: LayoutHandle);
}
