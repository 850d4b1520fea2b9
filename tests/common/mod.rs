//! Scripted keyboard backend for table and compose tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use winkeymap::virtual_keys::*;
use winkeymap::{Error, KeyboardBackend, LayoutHandle, ModifierLevel, Result, Translation};

/// What one (virtual key, level) produces on a mock layout.
#[derive(Debug, Clone, Copy)]
pub enum KeyDef {
    Char(char),
    Dead(char),
    /// Dead key that latches state but reports no character, as
    /// `ToUnicodeEx` does for dead keys on some layouts.
    SilentDead(char),
}

#[derive(Debug)]
struct MockLayout {
    handle: LayoutHandle,
    keys: HashMap<(u8, ModifierLevel), KeyDef>,
    no_scancode: HashSet<u8>,
}

/// In-memory [`KeyboardBackend`] with explicit dead-key state, so that a
/// missing reset corrupts later translations exactly like the real API.
#[derive(Debug, Default)]
pub struct MockBackend {
    layouts: Vec<MockLayout>,
    active: Option<LayoutHandle>,
    combos: HashMap<(char, char), char>,
    pending: Option<char>,
    pub fail_enumeration: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layout(&mut self, handle: isize) {
        let handle = LayoutHandle(handle);
        self.layouts.push(MockLayout {
            handle,
            keys: HashMap::new(),
            no_scancode: HashSet::new(),
        });
        if self.active.is_none() {
            self.active = Some(handle);
        }
    }

    pub fn remove_layout(&mut self, handle: isize) {
        self.layouts.retain(|l| l.handle != LayoutHandle(handle));
    }

    pub fn set_active(&mut self, handle: isize) {
        self.active = Some(LayoutHandle(handle));
    }

    fn layout_mut(&mut self, handle: isize) -> &mut MockLayout {
        self.layouts
            .iter_mut()
            .find(|l| l.handle == LayoutHandle(handle))
            .expect("unknown mock layout")
    }

    pub fn set_key(&mut self, layout: isize, vk: u8, level: ModifierLevel, c: char) {
        self.layout_mut(layout).keys.insert((vk, level), KeyDef::Char(c));
    }

    pub fn set_dead_key(&mut self, layout: isize, vk: u8, level: ModifierLevel, accent: char) {
        self.layout_mut(layout).keys.insert((vk, level), KeyDef::Dead(accent));
    }

    pub fn set_silent_dead_key(&mut self, layout: isize, vk: u8, level: ModifierLevel, accent: char) {
        self.layout_mut(layout)
            .keys
            .insert((vk, level), KeyDef::SilentDead(accent));
    }

    pub fn add_combo(&mut self, accent: char, c: char, composed: char) {
        self.combos.insert((accent, c), composed);
    }

    pub fn remove_scancode(&mut self, layout: isize, vk: u8) {
        self.layout_mut(layout).no_scancode.insert(vk);
    }

    pub fn scancode_of(vk: u8) -> u32 {
        vk as u32 + 8
    }
}

impl KeyboardBackend for MockBackend {
    fn list_layouts(&mut self) -> Result<Vec<LayoutHandle>> {
        if self.fail_enumeration {
            return Err(Error::LayoutEnumeration);
        }
        Ok(self.layouts.iter().map(|l| l.handle).collect())
    }

    fn active_layout(&mut self) -> LayoutHandle {
        self.active.expect("mock backend has no layouts")
    }

    fn layout_name(&mut self, layout: LayoutHandle) -> Option<String> {
        Some(format!("mock{:08x}", layout.0))
    }

    fn map_to_scancode(&mut self, vk: u8, layout: LayoutHandle) -> u32 {
        // The real API cannot produce scancodes for these two.
        if vk == VK_DIVIDE || vk == VK_PAUSE {
            return 0;
        }

        let layout = self
            .layouts
            .iter()
            .find(|l| l.handle == layout)
            .expect("unknown mock layout");

        if layout.no_scancode.contains(&vk) {
            0
        } else {
            Self::scancode_of(vk)
        }
    }

    fn translate(
        &mut self,
        vk: u8,
        _scancode: u32,
        level: ModifierLevel,
        layout: LayoutHandle,
    ) -> Translation {
        let def = self
            .layouts
            .iter()
            .find(|l| l.handle == layout)
            .expect("unknown mock layout")
            .keys
            .get(&(vk, level))
            .copied();

        match def {
            Some(KeyDef::Dead(accent)) => {
                // A second dead key replaces the pending one, like chained
                // dead keys do under ToUnicodeEx.
                self.pending = Some(accent);
                Translation::DeadChar(accent)
            }
            Some(KeyDef::SilentDead(accent)) => {
                self.pending = Some(accent);
                Translation::None
            }
            Some(KeyDef::Char(c)) => match self.pending.take() {
                Some(accent) => match self.combos.get(&(accent, c)) {
                    Some(&composed) => Translation::Char(composed),
                    // Accent and base character come out as two characters.
                    None => Translation::Multiple,
                },
                None => Translation::Char(c),
            },
            // A null result leaves any pending dead key latched.
            None => Translation::None,
        }
    }

    fn reset_dead_state(&mut self, _layout: LayoutHandle) {
        self.pending = None;
    }
}

pub const US: isize = 0x0409;
pub const GERMAN: isize = 0x0407;

/// US-like layout with a dead acute on the apostrophe key and a dead
/// diaeresis on its shifted level.
pub fn latin_backend() -> MockBackend {
    let mut backend = MockBackend::new();
    backend.add_layout(US);

    for (i, c) in (b'a'..=b'z').map(char::from).enumerate() {
        let vk = 0x41 + i as u8;
        let upper = c.to_ascii_uppercase();
        backend.set_key(US, vk, ModifierLevel::None, c);
        backend.set_key(US, vk, ModifierLevel::Shift, upper);
        backend.set_key(US, vk, ModifierLevel::Capslock, upper);
        backend.set_key(US, vk, ModifierLevel::ShiftCapslock, c);
    }

    let shifted_digits = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];
    for (i, c) in (b'0'..=b'9').map(char::from).enumerate() {
        let vk = 0x30 + i as u8;
        backend.set_key(US, vk, ModifierLevel::None, c);
        backend.set_key(US, vk, ModifierLevel::Shift, shifted_digits[i]);
    }

    backend.set_key(US, VK_SPACE, ModifierLevel::None, ' ');
    backend.set_key(US, VK_SPACE, ModifierLevel::Shift, ' ');
    backend.set_key(US, VK_OEM_102, ModifierLevel::None, '<');
    backend.set_key(US, VK_DECIMAL, ModifierLevel::None, '.');

    backend.set_dead_key(US, VK_OEM_7, ModifierLevel::None, '\'');
    backend.set_dead_key(US, VK_OEM_7, ModifierLevel::Shift, '"');

    for (base, acute, diaeresis) in [
        ('a', 'á', 'ä'),
        ('e', 'é', 'ë'),
        ('i', 'í', 'ï'),
        ('o', 'ó', 'ö'),
        ('u', 'ú', 'ü'),
    ] {
        backend.add_combo('\'', base, acute);
        backend.add_combo('"', base, diaeresis);
        // `to_ascii_uppercase` is a no-op on the non-ASCII accented chars.
        let upper = |c: char| c.to_uppercase().next().unwrap();
        backend.add_combo('\'', base.to_ascii_uppercase(), upper(acute));
        backend.add_combo('"', base.to_ascii_uppercase(), upper(diaeresis));
    }
    backend.add_combo('\'', 'y', 'ý');
    backend.add_combo('\'', 'Y', 'Ý');
    backend.add_combo('\'', ' ', '\'');
    backend.add_combo('"', ' ', '"');

    backend
}

/// Adds a German-like layout with an AltGr level and a comma decimal mark.
pub fn add_german_layout(backend: &mut MockBackend) {
    backend.add_layout(GERMAN);

    for (i, c) in (b'a'..=b'z').map(char::from).enumerate() {
        let vk = 0x41 + i as u8;
        backend.set_key(GERMAN, vk, ModifierLevel::None, c);
        backend.set_key(GERMAN, vk, ModifierLevel::Shift, c.to_ascii_uppercase());
    }

    backend.set_key(GERMAN, 0x51, ModifierLevel::Altgr, '@');
    backend.set_key(GERMAN, VK_SPACE, ModifierLevel::None, ' ');
    backend.set_key(GERMAN, VK_DECIMAL, ModifierLevel::None, ',');
}
