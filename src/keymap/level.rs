//! Modifier levels and modifier state.

/// One of the eight Shift/CapsLock/AltGr combinations a key can be pressed
/// under. Each (virtual key, group, level) triple resolves to one keysym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum ModifierLevel {
    None = 0,
    Shift,
    Capslock,
    ShiftCapslock,
    Altgr,
    ShiftAltgr,
    CapslockAltgr,
    ShiftCapslockAltgr,
}

impl ModifierLevel {
    pub const COUNT: usize = 8;

    pub const ALL: [ModifierLevel; Self::COUNT] = [
        ModifierLevel::None,
        ModifierLevel::Shift,
        ModifierLevel::Capslock,
        ModifierLevel::ShiftCapslock,
        ModifierLevel::Altgr,
        ModifierLevel::ShiftAltgr,
        ModifierLevel::CapslockAltgr,
        ModifierLevel::ShiftCapslockAltgr,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<ModifierLevel> {
        Self::ALL.get(index).copied()
    }

    pub fn has_shift(self) -> bool {
        self.index() & 0x1 != 0
    }

    pub fn has_capslock(self) -> bool {
        self.index() & 0x2 != 0
    }

    pub fn has_altgr(self) -> bool {
        self.index() & 0x4 != 0
    }
}

impl From<ModifierState> for ModifierLevel {
    fn from(state: ModifierState) -> Self {
        let mut index = 0;
        if state.shift {
            index |= 0x1;
        }
        if state.capslock {
            index |= 0x2;
        }
        if state.altgr {
            index |= 0x4;
        }
        ModifierLevel::ALL[index]
    }
}

/// Modifier keys held (or latched) during a key event. Also used to report
/// which modifiers a translation consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub capslock: bool,
    pub altgr: bool,
}

impl ModifierState {
    pub const NONE: ModifierState = ModifierState {
        shift: false,
        capslock: false,
        altgr: false,
    };

    pub const SHIFT: ModifierState = ModifierState {
        shift: true,
        capslock: false,
        altgr: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_covers_the_modifier_cross_product() {
        for level in ModifierLevel::ALL {
            let state = ModifierState {
                shift: level.has_shift(),
                capslock: level.has_capslock(),
                altgr: level.has_altgr(),
            };
            assert_eq!(ModifierLevel::from(state), level);
        }
    }

    #[test]
    fn shifted_levels_are_the_odd_ones() {
        assert!(ModifierLevel::Shift.has_shift());
        assert!(ModifierLevel::ShiftCapslockAltgr.has_shift());
        assert!(!ModifierLevel::CapslockAltgr.has_shift());
        assert!(ModifierLevel::Altgr.has_altgr());
        assert!(!ModifierLevel::ShiftCapslock.has_altgr());
    }
}
