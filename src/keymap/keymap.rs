//! The keymap context: cached layout set, lazy rebuild and table queries.

use log::{debug, warn};

use crate::backend::{KeyboardBackend, LayoutHandle};
use crate::keymap::builder;
use crate::keymap::compose::{self, ComposeMatch};
use crate::keymap::level::{ModifierLevel, ModifierState};
use crate::keymap::types::{DeadKeyNode, KeyTranslation, KeyboardLayoutSet, KeymapKey};
use crate::types::keysym::{self, Keysym};

/// Windows caps the layout list it reports; anything beyond is ignored.
const MAX_LAYOUTS: usize = 255;

/// Owns the keysym table and dead key forest for the installed layout set.
///
/// All table queries take the backend so they can rebuild lazily: callers
/// signal layout changes through [`Keymap::layout_changed`] and the rebuild
/// happens on the next query, replacing the whole layout set at once.
/// Compose matching reads the cached set only.
#[derive(Debug, Default)]
pub struct Keymap {
    set: KeyboardLayoutSet,
    /// Group index of the layout the backend last reported active; cached
    /// so queries do not have to ask the platform every time.
    active_layout: u8,
    serial: u64,
    built_serial: Option<u64>,
    rebuilds: u64,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the installed layout set may have changed. The next
    /// table query re-checks the layout list and rebuilds if it differs.
    pub fn layout_changed(&mut self) {
        self.serial += 1;
    }

    /// Number of completed table rebuilds.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn num_groups(&self) -> usize {
        self.set.num_groups()
    }

    pub fn layouts(&self) -> &[LayoutHandle] {
        &self.set.layouts
    }

    pub fn active_group(&self) -> usize {
        self.active_layout as usize
    }

    /// Marks the given layout as active, if it is part of the current set.
    pub fn set_active_layout(&mut self, layout: LayoutHandle) {
        if let Some(group) = self.set.layouts.iter().position(|&h| h == layout) {
            self.active_layout = group as u8;
        }
    }

    /// Decimal separator of the active layout's keypad decimal key.
    pub fn decimal_mark(&self) -> char {
        self.set
            .options
            .get(self.active_group())
            .and_then(|options| options.decimal_mark)
            .unwrap_or('.')
    }

    /// Scancode of the right shift key under the active layout.
    pub fn rshift_scancode(&self) -> u32 {
        self.set
            .options
            .get(self.active_group())
            .map(|options| options.scancode_rshift)
            .unwrap_or(0)
    }

    /// Whether the active layout distinguishes an AltGr level.
    pub fn has_altgr(&self) -> bool {
        self.set
            .options
            .get(self.active_group())
            .map(|options| options.has_altgr)
            .unwrap_or(false)
    }

    /// Top-level dead keys of a group, sorted by (keysym, level).
    pub fn dead_keys(&self, group: usize) -> &[DeadKeyNode] {
        self.set
            .options
            .get(group)
            .map(|options| options.dead_keys.as_slice())
            .unwrap_or(&[])
    }

    /// Rebuilds the table if the layout serial advanced since the last
    /// build. Queries call this themselves; it is public for callers that
    /// want to control when the (potentially slow) probing happens.
    pub fn refresh<B: KeyboardBackend + ?Sized>(&mut self, backend: &mut B) {
        if self.built_serial == Some(self.serial) && !self.set.is_empty() {
            return;
        }

        // Enumeration failure degrades to the active layout alone.
        let mut layouts = match backend.list_layouts() {
            Ok(list) if !list.is_empty() => list,
            Ok(_) | Err(_) => vec![backend.active_layout()],
        };
        layouts.truncate(MAX_LAYOUTS);

        if layouts == self.set.layouts {
            self.check_active_layout_in_sync(backend);
            self.built_serial = Some(self.serial);
            return;
        }

        debug!("rebuilding keymap for {} layouts: {:?}", layouts.len(), layouts);

        let active = backend.active_layout();
        self.set = builder::build_layout_set(backend, layouts);
        self.active_layout = self
            .set
            .layouts
            .iter()
            .position(|&h| h == active)
            .unwrap_or(0) as u8;
        self.rebuilds += 1;

        self.check_active_layout_in_sync(backend);
        self.built_serial = Some(self.serial);
    }

    /// Diagnostic only: the cache is not corrected when it disagrees.
    fn check_active_layout_in_sync<B: KeyboardBackend + ?Sized>(&mut self, backend: &mut B) {
        if self.set.is_empty() {
            return;
        }

        let actual = backend.active_layout();
        let Some(&cached) = self.set.layouts.get(self.active_group()) else {
            return;
        };

        if actual != cached {
            let name = backend
                .layout_name(actual)
                .unwrap_or_else(|| "(unknown)".to_string());
            warn!(
                "cached active layout #{} ({:#x}) does not match actual layout {} ({:#x})",
                self.active_layout, cached.0, name, actual.0
            );
        }
    }

    /// Translates a hardware key event into a keysym, reporting the level
    /// that was used and the modifiers consumed choosing it.
    ///
    /// Modifiers without a distinct symbol on this key are dropped rather
    /// than failing the lookup, so e.g. Shift+F1 still resolves to F1.
    pub fn translate_key<B: KeyboardBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        keycode: u8,
        state: ModifierState,
        group: usize,
    ) -> Option<KeyTranslation> {
        self.refresh(backend);

        if group >= self.set.num_groups() {
            return None;
        }

        let base = self.set.cell(keycode, group, ModifierLevel::None);
        let keygroup = &self.set.keysym_tab[base..base + ModifierLevel::COUNT];
        let at = |level: ModifierLevel| keygroup[level.index()];

        let mut level = ModifierLevel::from(state);

        if at(level) == keysym::VOID {
            use ModifierLevel::*;

            let fallbacks: &[ModifierLevel] = match level {
                None | Shift | Capslock | Altgr => &[None],
                ShiftCapslock => &[Capslock, Shift, None],
                CapslockAltgr => &[Altgr, Capslock, None],
                ShiftAltgr => &[Altgr, Shift, None],
                ShiftCapslockAltgr => &[
                    CapslockAltgr,
                    ShiftAltgr,
                    Altgr,
                    ShiftCapslock,
                    Capslock,
                    Shift,
                    None,
                ],
            };

            for &fallback in fallbacks {
                if at(fallback) != keysym::VOID {
                    level = fallback;
                    break;
                }
            }
        }

        // A modifier is consumed only if it makes a difference somewhere on
        // this key.
        let differs = |plain: ModifierLevel, modified: ModifierLevel| {
            at(modified) != keysym::VOID && at(plain) != at(modified)
        };

        let consumed = {
            use ModifierLevel::*;

            ModifierState {
                shift: differs(None, Shift)
                    || differs(Altgr, ShiftAltgr)
                    || differs(Capslock, ShiftCapslock),
                capslock: differs(None, Capslock)
                    || differs(Altgr, CapslockAltgr)
                    || differs(Shift, ShiftCapslock),
                altgr: differs(None, Altgr)
                    || differs(Shift, ShiftAltgr)
                    || differs(Capslock, CapslockAltgr),
            }
        };

        let ksym = at(level);
        if ksym == keysym::VOID {
            return None;
        }

        Some(KeyTranslation {
            keysym: ksym,
            group,
            level,
            consumed,
        })
    }

    /// Keysym at one table coordinate, `None` for void or invalid cells.
    pub fn lookup_key<B: KeyboardBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        key: &KeymapKey,
    ) -> Option<Keysym> {
        self.refresh(backend);

        if key.group >= self.set.num_groups() {
            return None;
        }

        let ksym = self.set.keysym(key.vk, key.group, key.level);
        (ksym != keysym::VOID).then_some(ksym)
    }

    /// All (keycode, group, level) entries producing the given keysym, used
    /// by accelerator matching.
    pub fn entries_for_keysym<B: KeyboardBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        target: Keysym,
    ) -> Vec<KeymapKey> {
        let mut entries = Vec::new();

        if target == 0 || target == keysym::VOID {
            return entries;
        }

        self.refresh(backend);

        for vk in 0..=255u8 {
            for group in 0..self.set.num_groups() {
                for level in ModifierLevel::ALL {
                    if self.set.keysym(vk, group, level) == target {
                        entries.push(KeymapKey { vk, group, level });
                    }
                }
            }
        }

        entries
    }

    /// Every (group, level) entry for one keycode, void cells included.
    pub fn entries_for_keycode<B: KeyboardBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        keycode: u8,
    ) -> Vec<(KeymapKey, Keysym)> {
        if keycode == 0 {
            return Vec::new();
        }

        self.refresh(backend);

        let mut entries = Vec::new();

        for group in 0..self.set.num_groups() {
            for level in ModifierLevel::ALL {
                let key = KeymapKey {
                    vk: keycode,
                    group,
                    level,
                };
                entries.push((key, self.set.keysym(keycode, group, level)));
            }
        }

        entries
    }

    /// Classifies a pending compose buffer against the active layout's dead
    /// key tree. Reads the cached table only; no rebuild.
    pub fn check_compose(&self, buffer: &[Keysym]) -> ComposeMatch {
        compose::check_compose(&self.set, self.active_group(), buffer)
    }
}
