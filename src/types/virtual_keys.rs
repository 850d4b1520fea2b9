//! Win32 virtual-key codes.
//!
//! Raw `u8` codes rather than an enum: the keysym table is indexed over the
//! full dense 0..=255 space, including codes Windows leaves unassigned.

pub const VK_CANCEL: u8 = 0x03;
pub const VK_BACK: u8 = 0x08;
pub const VK_TAB: u8 = 0x09;
pub const VK_CLEAR: u8 = 0x0c;
pub const VK_RETURN: u8 = 0x0d;
pub const VK_SHIFT: u8 = 0x10;
pub const VK_CONTROL: u8 = 0x11;
pub const VK_MENU: u8 = 0x12;
pub const VK_PAUSE: u8 = 0x13;
pub const VK_CAPITAL: u8 = 0x14;
pub const VK_ESCAPE: u8 = 0x1b;
pub const VK_SPACE: u8 = 0x20;
pub const VK_PRIOR: u8 = 0x21;
pub const VK_NEXT: u8 = 0x22;
pub const VK_END: u8 = 0x23;
pub const VK_HOME: u8 = 0x24;
pub const VK_LEFT: u8 = 0x25;
pub const VK_UP: u8 = 0x26;
pub const VK_RIGHT: u8 = 0x27;
pub const VK_DOWN: u8 = 0x28;
pub const VK_SELECT: u8 = 0x29;
pub const VK_PRINT: u8 = 0x2a;
pub const VK_EXECUTE: u8 = 0x2b;
pub const VK_SNAPSHOT: u8 = 0x2c;
pub const VK_INSERT: u8 = 0x2d;
pub const VK_DELETE: u8 = 0x2e;
pub const VK_HELP: u8 = 0x2f;
pub const VK_LWIN: u8 = 0x5b;
pub const VK_RWIN: u8 = 0x5c;
pub const VK_APPS: u8 = 0x5d;
pub const VK_NUMPAD0: u8 = 0x60;
pub const VK_NUMPAD1: u8 = 0x61;
pub const VK_NUMPAD2: u8 = 0x62;
pub const VK_NUMPAD3: u8 = 0x63;
pub const VK_NUMPAD4: u8 = 0x64;
pub const VK_NUMPAD5: u8 = 0x65;
pub const VK_NUMPAD6: u8 = 0x66;
pub const VK_NUMPAD7: u8 = 0x67;
pub const VK_NUMPAD8: u8 = 0x68;
pub const VK_NUMPAD9: u8 = 0x69;
pub const VK_MULTIPLY: u8 = 0x6a;
pub const VK_ADD: u8 = 0x6b;
pub const VK_SEPARATOR: u8 = 0x6c;
pub const VK_SUBTRACT: u8 = 0x6d;
pub const VK_DECIMAL: u8 = 0x6e;
pub const VK_DIVIDE: u8 = 0x6f;
pub const VK_F1: u8 = 0x70;
pub const VK_F2: u8 = 0x71;
pub const VK_F3: u8 = 0x72;
pub const VK_F4: u8 = 0x73;
pub const VK_F5: u8 = 0x74;
pub const VK_F6: u8 = 0x75;
pub const VK_F7: u8 = 0x76;
pub const VK_F8: u8 = 0x77;
pub const VK_F9: u8 = 0x78;
pub const VK_F10: u8 = 0x79;
pub const VK_F11: u8 = 0x7a;
pub const VK_F12: u8 = 0x7b;
pub const VK_F13: u8 = 0x7c;
pub const VK_F14: u8 = 0x7d;
pub const VK_F15: u8 = 0x7e;
pub const VK_F16: u8 = 0x7f;
pub const VK_F17: u8 = 0x80;
pub const VK_F18: u8 = 0x81;
pub const VK_F19: u8 = 0x82;
pub const VK_F20: u8 = 0x83;
pub const VK_F21: u8 = 0x84;
pub const VK_F22: u8 = 0x85;
pub const VK_F23: u8 = 0x86;
pub const VK_F24: u8 = 0x87;
pub const VK_NUMLOCK: u8 = 0x90;
pub const VK_SCROLL: u8 = 0x91;
pub const VK_LSHIFT: u8 = 0xa0;
pub const VK_RSHIFT: u8 = 0xa1;
pub const VK_LCONTROL: u8 = 0xa2;
pub const VK_RCONTROL: u8 = 0xa3;
pub const VK_LMENU: u8 = 0xa4;
pub const VK_RMENU: u8 = 0xa5;
pub const VK_OEM_1: u8 = 0xba;
pub const VK_OEM_PLUS: u8 = 0xbb;
pub const VK_OEM_COMMA: u8 = 0xbc;
pub const VK_OEM_MINUS: u8 = 0xbd;
pub const VK_OEM_PERIOD: u8 = 0xbe;
pub const VK_OEM_2: u8 = 0xbf;
pub const VK_OEM_3: u8 = 0xc0;
pub const VK_OEM_4: u8 = 0xdb;
pub const VK_OEM_5: u8 = 0xdc;
pub const VK_OEM_6: u8 = 0xdd;
pub const VK_OEM_7: u8 = 0xde;
pub const VK_OEM_8: u8 = 0xdf;
pub const VK_OEM_102: u8 = 0xe2;

/// Number of virtual key codes; also the size of the Win32 key-state array.
pub const KEY_STATE_SIZE: usize = 256;
