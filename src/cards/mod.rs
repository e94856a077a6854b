//! Card system: templates, instances, and deck sources.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Static card data (id, name, image, cost, kind)
//! - `CardKind`: `Follower { attack, defense }` or `Spell`
//! - `CardInstance`: One physical copy, with battle state once on a field
//! - `DeckSource`: Seam for deck content authored outside the engine

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::{DeckSource, FixedDeck, StarterDeck};
pub use definition::{CardKind, CardTemplate};
pub use instance::{CardInstance, FieldState};
