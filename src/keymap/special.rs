//! Static virtual-key and dead-key mappings.

use crate::keymap::level::ModifierLevel;
use crate::types::keysym::{self, Keysym};
use crate::types::virtual_keys::*;

/// Fixed keysym for virtual keys that never go through character
/// translation: navigation, editing, function, keypad and modifier keys.
/// Returns `None` for keys that should be translated by the layout.
pub(crate) fn special_keysym(vk: u8, level: ModifierLevel) -> Option<Keysym> {
    let ksym = match vk {
        VK_CANCEL => keysym::CANCEL,
        VK_BACK => keysym::BACK_SPACE,
        VK_TAB => {
            if level.has_shift() {
                keysym::ISO_LEFT_TAB
            } else {
                keysym::TAB
            }
        }
        VK_CLEAR => keysym::CLEAR,
        VK_RETURN => keysym::RETURN,
        VK_SHIFT | VK_LSHIFT => keysym::SHIFT_L,
        VK_CONTROL | VK_LCONTROL => keysym::CONTROL_L,
        VK_MENU | VK_LMENU => keysym::ALT_L,
        VK_PAUSE => keysym::PAUSE,
        VK_ESCAPE => keysym::ESCAPE,
        VK_PRIOR => keysym::PRIOR,
        VK_NEXT => keysym::NEXT,
        VK_END => keysym::END,
        VK_HOME => keysym::HOME,
        VK_LEFT => keysym::LEFT,
        VK_UP => keysym::UP,
        VK_RIGHT => keysym::RIGHT,
        VK_DOWN => keysym::DOWN,
        VK_SELECT => keysym::SELECT,
        VK_PRINT | VK_SNAPSHOT => keysym::PRINT,
        VK_EXECUTE => keysym::EXECUTE,
        VK_INSERT => keysym::INSERT,
        VK_DELETE => keysym::DELETE,
        VK_HELP => keysym::HELP,
        VK_LWIN => keysym::META_L,
        VK_RWIN => keysym::META_R,
        VK_APPS => keysym::MENU,
        VK_DECIMAL => keysym::KP_DECIMAL,
        VK_MULTIPLY => keysym::KP_MULTIPLY,
        VK_ADD => keysym::KP_ADD,
        VK_SEPARATOR => keysym::KP_SEPARATOR,
        VK_SUBTRACT => keysym::KP_SUBTRACT,
        VK_DIVIDE => keysym::KP_DIVIDE,
        VK_NUMPAD0 => keysym::KP_0,
        VK_NUMPAD1 => keysym::KP_1,
        VK_NUMPAD2 => keysym::KP_2,
        VK_NUMPAD3 => keysym::KP_3,
        VK_NUMPAD4 => keysym::KP_4,
        VK_NUMPAD5 => keysym::KP_5,
        VK_NUMPAD6 => keysym::KP_6,
        VK_NUMPAD7 => keysym::KP_7,
        VK_NUMPAD8 => keysym::KP_8,
        VK_NUMPAD9 => keysym::KP_9,
        VK_F1 => keysym::F1,
        VK_F2 => keysym::F2,
        VK_F3 => keysym::F3,
        VK_F4 => keysym::F4,
        VK_F5 => keysym::F5,
        VK_F6 => keysym::F6,
        VK_F7 => keysym::F7,
        VK_F8 => keysym::F8,
        VK_F9 => keysym::F9,
        VK_F10 => keysym::F10,
        VK_F11 => keysym::F11,
        VK_F12 => keysym::F12,
        VK_F13 => keysym::F13,
        VK_F14 => keysym::F14,
        VK_F15 => keysym::F15,
        VK_F16 => keysym::F16,
        VK_F17 => keysym::F17,
        VK_F18 => keysym::F18,
        VK_F19 => keysym::F19,
        VK_F20 => keysym::F20,
        VK_F21 => keysym::F21,
        VK_F22 => keysym::F22,
        VK_F23 => keysym::F23,
        VK_F24 => keysym::F24,
        VK_NUMLOCK => keysym::NUM_LOCK,
        VK_SCROLL => keysym::SCROLL_LOCK,
        VK_RSHIFT => keysym::SHIFT_R,
        VK_RCONTROL => keysym::CONTROL_R,
        VK_RMENU => keysym::ALT_R,
        _ => return None,
    };

    Some(ksym)
}

/// Maps the spacing ("undead") character keysym of a dead key to the
/// corresponding dead_* keysym.
///
/// Unrecognized accents keep their own keysym; that covers layouts whose
/// dead keys are not spacing diacritics at all, such as the dead virama on
/// Bengali layouts.
pub(crate) fn dead_keysym(undead: Keysym) -> Keysym {
    match undead {
        keysym::QUOTEDBL => keysym::DEAD_DIAERESIS,
        keysym::APOSTROPHE => keysym::DEAD_ACUTE,
        keysym::ASCIICIRCUM => keysym::DEAD_CIRCUMFLEX,
        keysym::GRAVE => keysym::DEAD_GRAVE,
        keysym::ASCIITILDE => keysym::DEAD_TILDE,
        keysym::DIAERESIS => keysym::DEAD_DIAERESIS,
        keysym::DEGREE => keysym::DEAD_ABOVERING,
        keysym::ACUTE => keysym::DEAD_ACUTE,
        keysym::PERIODCENTERED => keysym::DEAD_ABOVEDOT,
        keysym::CEDILLA => keysym::DEAD_CEDILLA,
        keysym::BREVE => keysym::DEAD_BREVE,
        keysym::OGONEK => keysym::DEAD_OGONEK,
        keysym::CARON => keysym::DEAD_CARON,
        keysym::DOUBLEACUTE => keysym::DEAD_DOUBLEACUTE,
        keysym::ABOVEDOT => keysym::DEAD_ABOVEDOT,
        // Greek tonos
        0x0100_0384 => keysym::DEAD_ACUTE,
        keysym::GREEK_ACCENTDIERESIS => keysym::GREEK_ACCENTDIERESIS,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_tab_becomes_reverse_tab() {
        assert_eq!(special_keysym(VK_TAB, ModifierLevel::None), Some(keysym::TAB));
        assert_eq!(
            special_keysym(VK_TAB, ModifierLevel::Shift),
            Some(keysym::ISO_LEFT_TAB)
        );
        assert_eq!(
            special_keysym(VK_TAB, ModifierLevel::ShiftCapslockAltgr),
            Some(keysym::ISO_LEFT_TAB)
        );
    }

    #[test]
    fn letter_keys_have_no_special_mapping() {
        assert_eq!(special_keysym(0x41, ModifierLevel::None), None);
        assert_eq!(special_keysym(VK_OEM_7, ModifierLevel::Shift), None);
    }

    #[test]
    fn unknown_accents_fall_back_to_their_own_keysym() {
        assert_eq!(dead_keysym(keysym::ACUTE), keysym::DEAD_ACUTE);
        assert_eq!(dead_keysym(0x0100_0384), keysym::DEAD_ACUTE);
        // Bengali virama style dead keys keep their keysym
        assert_eq!(dead_keysym(0x0100_09cd), 0x0100_09cd);
    }
}
