//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` is the single authority on where a card is. Each card id
//! maps to exactly one `Location` (seat + zone), and each zone keeps an
//! ordered list of ids:
//! - Deck: front is the next draw
//! - Hand: insertion order, for stable display
//! - Field: play order
//!
//! A card leaves the manager only through `remove` (destruction or spell
//! discard).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::entity::InstanceId;
use crate::core::player::{Seat, SeatMap};

/// Per-player card zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Deck,
    Hand,
    Field,
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub seat: Seat,
    pub zone: Zone,
}

impl Location {
    #[must_use]
    pub const fn new(seat: Seat, zone: Zone) -> Self {
        Self { seat, zone }
    }
}

#[derive(Clone, Debug, Default)]
struct SeatZones {
    deck: Vector<InstanceId>,
    hand: Vector<InstanceId>,
    field: Vector<InstanceId>,
}

impl SeatZones {
    fn list(&self, zone: Zone) -> &Vector<InstanceId> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Field => &self.field,
        }
    }

    fn list_mut(&mut self, zone: Zone) -> &mut Vector<InstanceId> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Field => &mut self.field,
        }
    }
}

/// Tracks card locations across both seats' zones.
///
/// ## Usage
///
/// ```
/// use duel_engine::core::{GameRng, InstanceId, Seat};
/// use duel_engine::zones::{Location, Zone, ZoneManager};
///
/// let mut rng = GameRng::new(1);
/// let a = InstanceId::generate(&mut rng);
/// let b = InstanceId::generate(&mut rng);
///
/// let mut zones = ZoneManager::new();
/// zones.add_to_zone(a, Location::new(Seat::First, Zone::Deck));
/// zones.add_to_zone(b, Location::new(Seat::First, Zone::Deck));
///
/// // Draw moves the front of the deck to the back of the hand
/// assert_eq!(zones.draw(Seat::First), Some(a));
/// assert_eq!(zones.location(a), Some(Location::new(Seat::First, Zone::Hand)));
/// assert_eq!(zones.zone_size(Seat::First, Zone::Deck), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: instance -> (seat, zone)
    locations: FxHashMap<InstanceId, Location>,

    /// Ordered id lists per seat and zone.
    zones: SeatMap<SeatZones>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the back of a zone.
    ///
    /// Returns false (and changes nothing) if the card is already tracked.
    pub fn add_to_zone(&mut self, instance: InstanceId, location: Location) -> bool {
        if self.locations.contains_key(&instance) {
            return false;
        }

        self.locations.insert(instance, location);
        self.zones[location.seat].list_mut(location.zone).push_back(instance);
        true
    }

    /// Move a card to the back of another zone of the same seat.
    ///
    /// Returns the old location, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, instance: InstanceId, zone: Zone) -> Option<Location> {
        let old = self.remove(instance)?;
        self.add_to_zone(instance, Location::new(old.seat, zone));
        Some(old)
    }

    /// Move the front card of `seat`'s deck to the back of its hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn draw(&mut self, seat: Seat) -> Option<InstanceId> {
        let instance = self.zones[seat].deck.pop_front()?;
        self.zones[seat].hand.push_back(instance);
        self.locations.insert(instance, Location::new(seat, Zone::Hand));
        Some(instance)
    }

    /// Stop tracking a card entirely.
    ///
    /// Returns the location it was in, or `None` if not found.
    pub fn remove(&mut self, instance: InstanceId) -> Option<Location> {
        let location = self.locations.remove(&instance)?;
        let list = self.zones[location.seat].list_mut(location.zone);
        if let Some(pos) = list.index_of(&instance) {
            list.remove(pos);
        }
        Some(location)
    }

    /// Get the location of a card.
    #[must_use]
    pub fn location(&self, instance: InstanceId) -> Option<Location> {
        self.locations.get(&instance).copied()
    }

    /// Check if a card is in a specific seat's zone.
    #[must_use]
    pub fn is_in(&self, instance: InstanceId, seat: Seat, zone: Zone) -> bool {
        self.location(instance) == Some(Location::new(seat, zone))
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards(&self, seat: Seat, zone: Zone) -> &Vector<InstanceId> {
        self.zones[seat].list(zone)
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, seat: Seat, zone: Zone) -> usize {
        self.cards(seat, zone).len()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager contains a card.
    #[must_use]
    pub fn contains(&self, instance: InstanceId) -> bool {
        self.locations.contains_key(&instance)
    }

    /// Verify that the location map and the zone lists agree exactly.
    ///
    /// Every tracked id must appear once, in the list its location names,
    /// and no list may hold an untracked id.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut listed = 0;
        for (seat, zones) in self.zones.iter() {
            for zone in [Zone::Deck, Zone::Hand, Zone::Field] {
                for &instance in zones.list(zone) {
                    listed += 1;
                    if self.location(instance) != Some(Location::new(seat, zone)) {
                        return false;
                    }
                }
            }
        }
        listed == self.locations.len()
    }
}
