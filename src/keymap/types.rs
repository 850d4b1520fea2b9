//! Data structures produced by the layout table builder.

use crate::backend::LayoutHandle;
use crate::keymap::level::{ModifierLevel, ModifierState};
use crate::types::keysym::{self, Keysym};

/// One dead key at a specific (virtual key, level), or one of its recorded
/// combinations. A node with no combinations is a terminal combination.
///
/// Example, dead acute on a Latin layout:
/// keysym = dead_acute, undead_keysym = acute (the spacing accent), and
/// combinations holding one leaf per following key that composes, e.g.
/// (VK A, level none) -> aacute and (VK A, shift) -> Aacute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadKeyNode {
    /// Non-spacing ("undead") version of the key's character.
    pub undead_keysym: Keysym,
    /// Virtual key code that produces it.
    pub vk: u8,
    /// Level at which the virtual key produces it.
    pub level: ModifierLevel,
    /// Resolved keysym (a dead_* keysym for top-level nodes, the composed
    /// character's keysym for combination leaves).
    pub keysym: Keysym,
    /// Keys this dead key combines with, empty for leaves. The per-group
    /// top-level list is sorted by (keysym, level) for binary search.
    pub combinations: Vec<DeadKeyNode>,
}

/// Per-layout metadata gathered while building the table.
#[derive(Debug, Clone, Default)]
pub struct GroupOptions {
    /// Character the numeric keypad decimal key produces, if any.
    pub decimal_mark: Option<char>,
    /// Scancode of the right shift key.
    pub scancode_rshift: u32,
    /// Whether any AltGr level differs from its non-AltGr counterpart.
    pub has_altgr: bool,
    /// Top-level dead keys, sorted by (keysym, level).
    pub dead_keys: Vec<DeadKeyNode>,
}

/// The complete, immutable result of one table build: every installed
/// layout, the dense keysym table and the per-layout options.
#[derive(Debug, Clone, Default)]
pub struct KeyboardLayoutSet {
    pub layouts: Vec<LayoutHandle>,
    /// One keysym per (virtual key, group, level); every cell is either a
    /// real keysym or [`keysym::VOID`], never uninitialized.
    pub keysym_tab: Vec<Keysym>,
    pub options: Vec<GroupOptions>,
}

impl KeyboardLayoutSet {
    pub fn num_groups(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub(crate) fn cell(&self, vk: u8, group: usize, level: ModifierLevel) -> usize {
        (vk as usize * self.num_groups() + group) * ModifierLevel::COUNT + level.index()
    }

    /// Keysym at a table cell, [`keysym::VOID`] when out of range.
    pub fn keysym(&self, vk: u8, group: usize, level: ModifierLevel) -> Keysym {
        if group >= self.num_groups() {
            return keysym::VOID;
        }
        self.keysym_tab[self.cell(vk, group, level)]
    }
}

/// A (keycode, group, level) coordinate in the keysym table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeymapKey {
    pub vk: u8,
    pub group: usize,
    pub level: ModifierLevel,
}

/// Result of translating a hardware key event against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTranslation {
    pub keysym: Keysym,
    pub group: usize,
    pub level: ModifierLevel,
    /// Modifiers that took part in selecting the level and should not be
    /// reinterpreted by accelerator matching.
    pub consumed: ModifierState,
}
