//! Dead key compose sequence matching.

use smallvec::SmallVec;

use crate::keymap::types::{DeadKeyNode, KeyboardLayoutSet};
use crate::types::keysym::Keysym;

/// Classification of a compose buffer against the active dead key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeMatch {
    /// The first keysym is not a known dead key; no match is possible.
    None,
    /// The buffer is a known dead key so far but needs more input.
    Incomplete,
    /// The full sequence matches a recorded combination; the payload is the
    /// composed keysym.
    Exact(Keysym),
    /// The dead key is known but the second key does not combine with it.
    /// The payload is the spacing form of the accent followed by the second
    /// key, itself undeaded when it is a dead key too.
    Partial(SmallVec<[Keysym; 2]>),
}

/// Binary search over a dead key list sorted by (keysym, level).
///
/// Entries differing only by level are adjacent but the search target is
/// keysym-only, so rewind to the first entry with the matching keysym.
pub(crate) fn find_dead_key(dead_keys: &[DeadKeyNode], keysym: Keysym) -> Option<usize> {
    let mut index = dead_keys
        .binary_search_by(|node| node.keysym.cmp(&keysym))
        .ok()?;

    while index > 0 && dead_keys[index - 1].keysym == keysym {
        index -= 1;
    }

    Some(index)
}

/// Matches a 1..=2 element compose buffer against the dead key tree of
/// `active_group`.
pub(crate) fn check_compose(
    set: &KeyboardLayoutSet,
    active_group: usize,
    buffer: &[Keysym],
) -> ComposeMatch {
    if buffer.is_empty() || active_group >= set.num_groups() {
        return ComposeMatch::None;
    }

    let options = &set.options[active_group];

    let Some(index) = find_dead_key(&options.dead_keys, buffer[0]) else {
        return ComposeMatch::None;
    };

    // Hardcoded two-tier tree: dead key + non-dead key = character. Chained
    // dead keys would need arbitrary depth here.
    let dead_key = &options.dead_keys[index];

    if buffer.len() < 2 {
        return ComposeMatch::Incomplete;
    }

    for node in &dead_key.combinations {
        // The candidate keysym is resolved through the live table for the
        // active group rather than read off the node; see DESIGN.md.
        if set.keysym(node.vk, active_group, node.level) == buffer[1] {
            return ComposeMatch::Exact(node.keysym);
        }
    }

    if buffer.len() == 2 {
        let mut output = SmallVec::new();
        output.push(dead_key.undead_keysym);

        // dead key + dead key resolves to both spacing forms; the second
        // one has to be looked up since the buffer holds the dead keysym.
        match find_dead_key(&options.dead_keys, buffer[1]) {
            Some(second) => output.push(options.dead_keys[second].undead_keysym),
            None => output.push(buffer[1]),
        }

        ComposeMatch::Partial(output)
    } else {
        ComposeMatch::Partial(SmallVec::new())
    }
}
