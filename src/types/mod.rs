pub mod keysym;
pub mod virtual_keys;

pub use keysym::Keysym;
