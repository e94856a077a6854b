//! Zone system for card locations.
//!
//! Each seat owns three zones: deck, hand and field. The `ZoneManager`
//! guarantees a card id sits in exactly one of them until it is removed.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, Hand or Field
//! - `Location`: Seat + zone
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::{Location, Zone, ZoneManager};
