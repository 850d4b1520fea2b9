mod common;

use common::*;
use winkeymap::virtual_keys::*;
use winkeymap::{keysym, ComposeMatch, Keymap, LayoutHandle, ModifierLevel};

fn built_keymap(backend: &mut MockBackend) -> Keymap {
    let mut keymap = Keymap::new();
    keymap.refresh(backend);
    keymap
}

#[test]
fn lone_dead_key_is_incomplete() {
    let mut backend = latin_backend();
    let keymap = built_keymap(&mut backend);

    assert_eq!(keymap.check_compose(&[keysym::DEAD_ACUTE]), ComposeMatch::Incomplete);
    assert_eq!(keymap.check_compose(&[keysym::DEAD_DIAERESIS]), ComposeMatch::Incomplete);
}

#[test]
fn non_dead_key_matches_nothing() {
    let mut backend = latin_backend();
    let keymap = built_keymap(&mut backend);

    assert_eq!(keymap.check_compose(&['z' as u32]), ComposeMatch::None);
    assert_eq!(keymap.check_compose(&[]), ComposeMatch::None);
}

#[test]
fn recorded_combination_matches_exactly() {
    let mut backend = latin_backend();
    let keymap = built_keymap(&mut backend);

    assert_eq!(
        keymap.check_compose(&[keysym::DEAD_ACUTE, 'a' as u32]),
        ComposeMatch::Exact('á' as u32)
    );
    assert_eq!(
        keymap.check_compose(&[keysym::DEAD_ACUTE, 'A' as u32]),
        ComposeMatch::Exact('Á' as u32)
    );
    assert_eq!(
        keymap.check_compose(&[keysym::DEAD_DIAERESIS, 'o' as u32]),
        ComposeMatch::Exact('ö' as u32)
    );
}

#[test]
fn unrecorded_second_key_matches_partially() {
    let mut backend = latin_backend();
    let keymap = built_keymap(&mut backend);

    // Acute does not combine with 's': spacing apostrophe, then 's' as is.
    match keymap.check_compose(&[keysym::DEAD_ACUTE, 's' as u32]) {
        ComposeMatch::Partial(output) => {
            assert_eq!(output.as_slice(), &[keysym::APOSTROPHE, 's' as u32])
        }
        other => panic!("expected partial match, got {other:?}"),
    }
}

#[test]
fn dead_key_followed_by_dead_key_resolves_both_spacing_forms() {
    let mut backend = latin_backend();
    let keymap = built_keymap(&mut backend);

    match keymap.check_compose(&[keysym::DEAD_ACUTE, keysym::DEAD_DIAERESIS]) {
        ComposeMatch::Partial(output) => {
            assert_eq!(output.as_slice(), &[keysym::APOSTROPHE, keysym::QUOTEDBL])
        }
        other => panic!("expected partial match, got {other:?}"),
    }
}

#[test]
fn duplicate_dead_keysyms_resolve_to_the_first_entry() {
    let mut backend = latin_backend();
    // A second acute dead key at a different (vk, level); its spacing form
    // is the Latin-1 acute accent rather than the apostrophe.
    backend.set_dead_key(US, VK_OEM_2, ModifierLevel::Shift, '´');
    let keymap = built_keymap(&mut backend);

    let dead_keys = keymap.dead_keys(0);
    let acutes: Vec<_> = dead_keys
        .iter()
        .filter(|node| node.keysym == keysym::DEAD_ACUTE)
        .collect();
    assert_eq!(acutes.len(), 2);

    // Adjacent duplicates: the match must rewind to the first, so the
    // partial output carries the apostrophe, not the acute accent.
    match keymap.check_compose(&[keysym::DEAD_ACUTE, 'z' as u32]) {
        ComposeMatch::Partial(output) => {
            assert_eq!(output.as_slice(), &[keysym::APOSTROPHE, 'z' as u32])
        }
        other => panic!("expected partial match, got {other:?}"),
    }

    // Exact matching still goes through the first entry's combinations.
    assert_eq!(
        keymap.check_compose(&[keysym::DEAD_ACUTE, 'e' as u32]),
        ComposeMatch::Exact('é' as u32)
    );
}

#[test]
fn compose_uses_the_active_group() {
    let mut backend = latin_backend();
    add_german_layout(&mut backend);

    let mut keymap = Keymap::new();
    keymap.refresh(&mut backend);

    assert_eq!(
        keymap.check_compose(&[keysym::DEAD_ACUTE, 'a' as u32]),
        ComposeMatch::Exact('á' as u32)
    );

    // The German mock layout has no dead keys at all.
    keymap.set_active_layout(LayoutHandle(GERMAN));
    assert_eq!(
        keymap.check_compose(&[keysym::DEAD_ACUTE, 'a' as u32]),
        ComposeMatch::None
    );
}

#[test]
fn unbuilt_keymap_never_matches() {
    let keymap = Keymap::new();
    assert_eq!(keymap.check_compose(&[keysym::DEAD_ACUTE]), ComposeMatch::None);
}
