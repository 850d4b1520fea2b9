//! Error types for the keymap engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The platform could not produce a list of installed layouts.
    /// The keymap recovers by treating the active layout as the whole set.
    #[error("keyboard layout enumeration failed")]
    LayoutEnumeration,

    /// The layout list changed between sizing and fetching it.
    #[error("keyboard layout list changed during enumeration")]
    LayoutListChanged,
}

pub type Result<T> = std::result::Result<T, Error>;
