//! Keyboard backend over the Win32 layout APIs.

use windows::core::PWSTR;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyboardLayout, GetKeyboardLayoutList, GetKeyboardLayoutNameW, MapVirtualKeyExW,
    ToUnicodeEx, MAPVK_VK_TO_VSC,
};
use windows::Win32::UI::TextServices::HKL;

use crate::backend::{KeyboardBackend, LayoutHandle, Translation};
use crate::error::{Error, Result};
use crate::keymap::ModifierLevel;
use crate::types::virtual_keys::{KEY_STATE_SIZE, VK_CAPITAL, VK_CONTROL, VK_MENU, VK_SHIFT, VK_SPACE};

const KL_NAMELENGTH: usize = 9;

/// [`KeyboardBackend`] implementation over `GetKeyboardLayoutList`,
/// `MapVirtualKeyEx` and `ToUnicodeEx`.
#[derive(Debug, Default)]
pub struct Win32Backend;

impl Win32Backend {
    pub fn new() -> Self {
        Self
    }
}

fn hkl(layout: LayoutHandle) -> HKL {
    HKL(layout.0)
}

/// Synthesizes the 256-byte key state array for a pressed key at a level.
fn key_state_for(vk: u8, level: ModifierLevel) -> [u8; KEY_STATE_SIZE] {
    let mut state = [0u8; KEY_STATE_SIZE];

    if level.has_shift() {
        state[VK_SHIFT as usize] = 0x80;
    }
    if level.has_capslock() {
        state[VK_CAPITAL as usize] = 0x01;
    }
    if level.has_altgr() {
        // Ctrl+Alt stands in for AltGr.
        state[VK_CONTROL as usize] = 0x80;
        state[VK_MENU as usize] = 0x80;
    }

    state[vk as usize] |= 0x80;
    state
}

impl KeyboardBackend for Win32Backend {
    fn list_layouts(&mut self) -> Result<Vec<LayoutHandle>> {
        let count = unsafe { GetKeyboardLayoutList(None) };
        if count <= 0 {
            return Err(Error::LayoutEnumeration);
        }

        let mut handles = vec![HKL(0); count as usize];
        let fetched = unsafe { GetKeyboardLayoutList(Some(&mut handles)) };
        if fetched != count {
            return Err(Error::LayoutListChanged);
        }

        Ok(handles.iter().map(|h| LayoutHandle(h.0)).collect())
    }

    fn active_layout(&mut self) -> LayoutHandle {
        LayoutHandle(unsafe { GetKeyboardLayout(0) }.0)
    }

    fn layout_name(&mut self, _layout: LayoutHandle) -> Option<String> {
        // GetKeyboardLayoutNameW only reports the active layout's name;
        // diagnostics ask for exactly that one.
        let mut name = [0u16; KL_NAMELENGTH];
        unsafe { GetKeyboardLayoutNameW(PWSTR::from_raw(name.as_mut_ptr())) }.ok()?;

        let len = name.iter().position(|&c| c == 0).unwrap_or(name.len());
        Some(String::from_utf16_lossy(&name[..len]))
    }

    fn map_to_scancode(&mut self, vk: u8, layout: LayoutHandle) -> u32 {
        unsafe { MapVirtualKeyExW(vk as u32, MAPVK_VK_TO_VSC, hkl(layout)) }
    }

    fn translate(
        &mut self,
        vk: u8,
        scancode: u32,
        level: ModifierLevel,
        layout: LayoutHandle,
    ) -> Translation {
        let state = key_state_for(vk, level);
        let mut wcs = [0u16; 10];

        let produced =
            unsafe { ToUnicodeEx(vk as u32, scancode, &state, &mut wcs, 0, hkl(layout)) };

        match produced {
            0 => Translation::None,
            1 | -1 => match char::from_u32(wcs[0] as u32) {
                Some(c) if produced == 1 => Translation::Char(c),
                Some(c) => Translation::DeadChar(c),
                // Half a surrogate pair; nothing the table can hold.
                None => Translation::Multiple,
            },
            _ => Translation::Multiple,
        }
    }

    fn reset_dead_state(&mut self, layout: LayoutHandle) {
        // Translating the spacebar with no modifiers makes the layout
        // forget a pending dead key.
        let state = [0u8; KEY_STATE_SIZE];
        let scancode = unsafe { MapVirtualKeyExW(VK_SPACE as u32, MAPVK_VK_TO_VSC, hkl(layout)) };
        let mut wcs = [0u16; 2];

        unsafe {
            ToUnicodeEx(VK_SPACE as u32, scancode, &state, &mut wcs, 0, hkl(layout));
        }
    }
}
