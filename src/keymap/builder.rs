//! Layout table and dead key tree construction.
//!
//! One build scans every virtual key of every installed layout at all eight
//! modifier levels, then probes each discovered dead key against the full
//! key space to find its combinations. The result is immutable until the
//! layout set changes.

use crate::backend::{KeyboardBackend, LayoutHandle, Translation};
use crate::keymap::level::ModifierLevel;
use crate::keymap::special::{dead_keysym, special_keysym};
use crate::keymap::types::{DeadKeyNode, GroupOptions, KeyboardLayoutSet};
use crate::types::keysym;
use crate::types::virtual_keys::{VK_DECIMAL, VK_DIVIDE, VK_PAUSE, VK_RSHIFT};

/// Scoped wrapper over the stateful translation primitive. Dropping the
/// scope resets pending dead-key state, so every exit path of a probe
/// leaves the layout clean.
struct TranslationScope<'a, B: KeyboardBackend + ?Sized> {
    backend: &'a mut B,
    layout: LayoutHandle,
}

impl<'a, B: KeyboardBackend + ?Sized> TranslationScope<'a, B> {
    fn new(backend: &'a mut B, layout: LayoutHandle) -> Self {
        Self { backend, layout }
    }

    fn translate(&mut self, vk: u8, scancode: u32, level: ModifierLevel) -> Translation {
        self.backend.translate(vk, scancode, level, self.layout)
    }
}

impl<B: KeyboardBackend + ?Sized> Drop for TranslationScope<'_, B> {
    fn drop(&mut self) {
        self.backend.reset_dead_state(self.layout);
    }
}

/// Builds the complete keysym table and per-layout options for the given
/// layout list. The list order defines the group indices.
pub(crate) fn build_layout_set<B: KeyboardBackend + ?Sized>(
    backend: &mut B,
    layouts: Vec<LayoutHandle>,
) -> KeyboardLayoutSet {
    let num_groups = layouts.len();
    let mut keysym_tab = vec![keysym::VOID; 256 * num_groups * ModifierLevel::COUNT];
    let mut options: Vec<GroupOptions> = (0..num_groups).map(|_| GroupOptions::default()).collect();

    for vk in 0..=255u8 {
        for (group, &layout) in layouts.iter().enumerate() {
            let scancode = backend.map_to_scancode(vk, layout);
            let base = (vk as usize * num_groups + group) * ModifierLevel::COUNT;

            // MapVirtualKeyEx produces no scancode for VK_DIVIDE and
            // VK_PAUSE; those two still get keysyms from the special table.
            if scancode == 0 && vk != VK_DIVIDE && vk != VK_PAUSE {
                continue;
            }

            if vk == VK_RSHIFT {
                options[group].scancode_rshift = scancode;
            }

            for level in ModifierLevel::ALL {
                let mut ksym = special_keysym(vk, level).unwrap_or(0);

                // The keypad decimal key goes through translation at the
                // unshifted level even though the special table already
                // resolved it, so the locale decimal separator is captured.
                let capture_decimal = vk == VK_DECIMAL && level == ModifierLevel::None;

                if ksym == 0 || capture_decimal {
                    match backend.translate(vk, scancode, level, layout) {
                        Translation::Char(c) => {
                            if capture_decimal {
                                options[group].decimal_mark = Some(c);
                            } else {
                                ksym = keysym::from_unicode(c);
                            }
                        }
                        Translation::DeadChar(c) => {
                            // The dead key is now latched inside the layout
                            // state; clear it before the next translation.
                            backend.reset_dead_state(layout);

                            let undead = keysym::from_unicode(c);
                            ksym = dead_keysym(undead);
                            options[group].dead_keys.push(DeadKeyNode {
                                undead_keysym: undead,
                                vk,
                                level,
                                keysym: ksym,
                                combinations: Vec::new(),
                            });
                        }
                        Translation::None => {
                            // Some dead keys need a reset even on a null
                            // result.
                            backend.reset_dead_state(layout);
                        }
                        Translation::Multiple => {}
                    }
                }

                keysym_tab[base + level.index()] = if ksym == 0 { keysym::VOID } else { ksym };
            }

            // AltGr support: some AltGr level maps differently from its
            // non-AltGr counterpart. CapsLock is left out here; it only
            // affects the results of dead key combinations.
            if !options[group].has_altgr {
                let keygroup = &keysym_tab[base..base + ModifierLevel::COUNT];
                let altgr = keygroup[ModifierLevel::Altgr.index()];
                let shift_altgr = keygroup[ModifierLevel::ShiftAltgr.index()];
                if (altgr != keysym::VOID && keygroup[ModifierLevel::None.index()] != altgr)
                    || (shift_altgr != keysym::VOID
                        && keygroup[ModifierLevel::Shift.index()] != shift_altgr)
                {
                    options[group].has_altgr = true;
                }
            }
        }
    }

    for (group, &layout) in layouts.iter().enumerate() {
        for dk in 0..options[group].dead_keys.len() {
            let (dead_vk, dead_level) = {
                let dead_key = &options[group].dead_keys[dk];
                (dead_key.vk, dead_key.level)
            };

            let mut combinations = Vec::new();

            for vk in 0..=255u8 {
                for level in ModifierLevel::ALL {
                    let mut scope = TranslationScope::new(backend, layout);

                    // Prime the layout state with the dead key.
                    match scope.translate(dead_vk, 0, dead_level) {
                        Translation::DeadChar(_) => {}
                        // Expected a dead key, got something else.
                        _ => continue,
                    }

                    // Check how the dead key combines with vk. A chained
                    // dead key (DeadChar again) is not supported and is
                    // skipped; deeper trees would be needed for that.
                    if let Translation::Char(c) = scope.translate(vk, 0, level) {
                        let composed = keysym::from_unicode(c);
                        combinations.push(DeadKeyNode {
                            undead_keysym: composed,
                            vk,
                            level,
                            keysym: composed,
                            combinations: Vec::new(),
                        });
                    }
                }
            }

            options[group].dead_keys[dk].combinations = combinations;
        }

        options[group]
            .dead_keys
            .sort_by(|a, b| (a.keysym, a.level).cmp(&(b.keysym, b.level)));
    }

    KeyboardLayoutSet {
        layouts,
        keysym_tab,
        options,
    }
}
