//! Domain modules (vertical slices): types, state, sub-clients.

pub mod asset;
pub mod merchant;
pub mod mint;
pub mod redemption;
