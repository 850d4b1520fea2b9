//! Keysym values and Unicode conversions.
//!
//! Keysyms follow the X11 numbering: Latin-1 characters are their own
//! keysyms, classic non-Latin-1 symbols keep their legacy codes, and
//! everything else is the Unicode code point offset by 0x0100_0000.

/// Platform independent symbolic key identifier.
pub type Keysym = u32;

/// The designated "no keysym" value, distinct from any real keysym.
pub const VOID: Keysym = 0x00ff_ffff;

pub const BACK_SPACE: Keysym = 0xff08;
pub const TAB: Keysym = 0xff09;
pub const CLEAR: Keysym = 0xff0b;
pub const RETURN: Keysym = 0xff0d;
pub const PAUSE: Keysym = 0xff13;
pub const SCROLL_LOCK: Keysym = 0xff14;
pub const ESCAPE: Keysym = 0xff1b;
pub const HOME: Keysym = 0xff50;
pub const LEFT: Keysym = 0xff51;
pub const UP: Keysym = 0xff52;
pub const RIGHT: Keysym = 0xff53;
pub const DOWN: Keysym = 0xff54;
pub const PRIOR: Keysym = 0xff55;
pub const NEXT: Keysym = 0xff56;
pub const END: Keysym = 0xff57;
pub const SELECT: Keysym = 0xff60;
pub const PRINT: Keysym = 0xff61;
pub const EXECUTE: Keysym = 0xff62;
pub const INSERT: Keysym = 0xff63;
pub const MENU: Keysym = 0xff67;
pub const CANCEL: Keysym = 0xff69;
pub const HELP: Keysym = 0xff6a;
pub const NUM_LOCK: Keysym = 0xff7f;

pub const KP_MULTIPLY: Keysym = 0xffaa;
pub const KP_ADD: Keysym = 0xffab;
pub const KP_SEPARATOR: Keysym = 0xffac;
pub const KP_SUBTRACT: Keysym = 0xffad;
pub const KP_DECIMAL: Keysym = 0xffae;
pub const KP_DIVIDE: Keysym = 0xffaf;
pub const KP_0: Keysym = 0xffb0;
pub const KP_1: Keysym = 0xffb1;
pub const KP_2: Keysym = 0xffb2;
pub const KP_3: Keysym = 0xffb3;
pub const KP_4: Keysym = 0xffb4;
pub const KP_5: Keysym = 0xffb5;
pub const KP_6: Keysym = 0xffb6;
pub const KP_7: Keysym = 0xffb7;
pub const KP_8: Keysym = 0xffb8;
pub const KP_9: Keysym = 0xffb9;

pub const F1: Keysym = 0xffbe;
pub const F2: Keysym = 0xffbf;
pub const F3: Keysym = 0xffc0;
pub const F4: Keysym = 0xffc1;
pub const F5: Keysym = 0xffc2;
pub const F6: Keysym = 0xffc3;
pub const F7: Keysym = 0xffc4;
pub const F8: Keysym = 0xffc5;
pub const F9: Keysym = 0xffc6;
pub const F10: Keysym = 0xffc7;
pub const F11: Keysym = 0xffc8;
pub const F12: Keysym = 0xffc9;
pub const F13: Keysym = 0xffca;
pub const F14: Keysym = 0xffcb;
pub const F15: Keysym = 0xffcc;
pub const F16: Keysym = 0xffcd;
pub const F17: Keysym = 0xffce;
pub const F18: Keysym = 0xffcf;
pub const F19: Keysym = 0xffd0;
pub const F20: Keysym = 0xffd1;
pub const F21: Keysym = 0xffd2;
pub const F22: Keysym = 0xffd3;
pub const F23: Keysym = 0xffd4;
pub const F24: Keysym = 0xffd5;

pub const SHIFT_L: Keysym = 0xffe1;
pub const SHIFT_R: Keysym = 0xffe2;
pub const CONTROL_L: Keysym = 0xffe3;
pub const CONTROL_R: Keysym = 0xffe4;
pub const META_L: Keysym = 0xffe7;
pub const META_R: Keysym = 0xffe8;
pub const ALT_L: Keysym = 0xffe9;
pub const ALT_R: Keysym = 0xffea;
pub const DELETE: Keysym = 0xffff;

pub const ISO_LEFT_TAB: Keysym = 0xfe20;

pub const DEAD_GRAVE: Keysym = 0xfe50;
pub const DEAD_ACUTE: Keysym = 0xfe51;
pub const DEAD_CIRCUMFLEX: Keysym = 0xfe52;
pub const DEAD_TILDE: Keysym = 0xfe53;
pub const DEAD_MACRON: Keysym = 0xfe54;
pub const DEAD_BREVE: Keysym = 0xfe55;
pub const DEAD_ABOVEDOT: Keysym = 0xfe56;
pub const DEAD_DIAERESIS: Keysym = 0xfe57;
pub const DEAD_ABOVERING: Keysym = 0xfe58;
pub const DEAD_DOUBLEACUTE: Keysym = 0xfe59;
pub const DEAD_CARON: Keysym = 0xfe5a;
pub const DEAD_CEDILLA: Keysym = 0xfe5b;
pub const DEAD_OGONEK: Keysym = 0xfe5c;

// Latin-1 spacing characters used as "undead" forms of dead keys.
pub const QUOTEDBL: Keysym = 0x022;
pub const APOSTROPHE: Keysym = 0x027;
pub const ASCIICIRCUM: Keysym = 0x05e;
pub const GRAVE: Keysym = 0x060;
pub const ASCIITILDE: Keysym = 0x07e;
pub const DIAERESIS: Keysym = 0x0a8;
pub const DEGREE: Keysym = 0x0b0;
pub const ACUTE: Keysym = 0x0b4;
pub const PERIODCENTERED: Keysym = 0x0b7;
pub const CEDILLA: Keysym = 0x0b8;

// Legacy non-Latin-1 spacing diacritics.
pub const BREVE: Keysym = 0x1a2;
pub const OGONEK: Keysym = 0x1b2;
pub const CARON: Keysym = 0x1b7;
pub const DOUBLEACUTE: Keysym = 0x1bd;
pub const ABOVEDOT: Keysym = 0x1ff;
pub const GREEK_ACCENTDIERESIS: Keysym = 0x7ae;

/// Legacy (pre-Unicode-offset) keysyms, as (code point, keysym) pairs sorted
/// by code point. Covers the Latin-2 letters and the spacing diacritics that
/// dead key probing can produce; everything else goes through the
/// 0x0100_0000 offset rule.
const LEGACY_KEYSYMS: &[(u32, Keysym)] = &[
    (0x0102, 0x1c3), // Abreve
    (0x0103, 0x1e3), // abreve
    (0x0104, 0x1a1), // Aogonek
    (0x0105, 0x1b1), // aogonek
    (0x0106, 0x1c6), // Cacute
    (0x0107, 0x1e6), // cacute
    (0x010c, 0x1c8), // Ccaron
    (0x010d, 0x1e8), // ccaron
    (0x010e, 0x1cf), // Dcaron
    (0x010f, 0x1ef), // dcaron
    (0x0110, 0x1d0), // Dstroke
    (0x0111, 0x1f0), // dstroke
    (0x0118, 0x1ca), // Eogonek
    (0x0119, 0x1ea), // eogonek
    (0x011a, 0x1cc), // Ecaron
    (0x011b, 0x1ec), // ecaron
    (0x0139, 0x1c5), // Lacute
    (0x013a, 0x1e5), // lacute
    (0x013d, 0x1a5), // Lcaron
    (0x013e, 0x1b5), // lcaron
    (0x0141, 0x1a3), // Lstroke
    (0x0142, 0x1b3), // lstroke
    (0x0143, 0x1d1), // Nacute
    (0x0144, 0x1f1), // nacute
    (0x0147, 0x1d2), // Ncaron
    (0x0148, 0x1f2), // ncaron
    (0x0150, 0x1d5), // Odoubleacute
    (0x0151, 0x1f5), // odoubleacute
    (0x0154, 0x1c0), // Racute
    (0x0155, 0x1e0), // racute
    (0x0158, 0x1d8), // Rcaron
    (0x0159, 0x1f8), // rcaron
    (0x015a, 0x1a6), // Sacute
    (0x015b, 0x1b6), // sacute
    (0x015e, 0x1aa), // Scedilla
    (0x015f, 0x1ba), // scedilla
    (0x0160, 0x1a9), // Scaron
    (0x0161, 0x1b9), // scaron
    (0x0162, 0x1de), // Tcedilla
    (0x0163, 0x1fe), // tcedilla
    (0x0164, 0x1ab), // Tcaron
    (0x0165, 0x1bb), // tcaron
    (0x016e, 0x1d9), // Uring
    (0x016f, 0x1f9), // uring
    (0x0170, 0x1db), // Udoubleacute
    (0x0171, 0x1fb), // udoubleacute
    (0x0179, 0x1ac), // Zacute
    (0x017a, 0x1bc), // zacute
    (0x017b, 0x1af), // Zabovedot
    (0x017c, 0x1bf), // zabovedot
    (0x017d, 0x1ae), // Zcaron
    (0x017e, 0x1be), // zcaron
    (0x02c7, 0x1b7), // caron
    (0x02d8, 0x1a2), // breve
    (0x02d9, 0x1ff), // abovedot
    (0x02db, 0x1b2), // ogonek
    (0x02dd, 0x1bd), // doubleacute
    (0x0385, 0x7ae), // Greek_accentdieresis
];

/// Converts a Unicode character to the corresponding keysym.
pub fn from_unicode(c: char) -> Keysym {
    let wc = c as u32;

    if (0x20..=0x7e).contains(&wc) || (0xa0..=0xff).contains(&wc) {
        return wc;
    }

    if let Ok(idx) = LEGACY_KEYSYMS.binary_search_by_key(&wc, |&(u, _)| u) {
        return LEGACY_KEYSYMS[idx].1;
    }

    wc | 0x0100_0000
}

/// Converts a keysym back to a Unicode character, if it has one.
pub fn to_unicode(keysym: Keysym) -> Option<char> {
    if (0x20..=0x7e).contains(&keysym) || (0xa0..=0xff).contains(&keysym) {
        return char::from_u32(keysym);
    }

    if keysym >= 0x0100_0000 {
        return char::from_u32(keysym & 0x00ff_ffff);
    }

    LEGACY_KEYSYMS
        .iter()
        .find(|&&(_, k)| k == keysym)
        .and_then(|&(u, _)| char::from_u32(u))
}
