//! Seat indexing and per-seat storage.
//!
//! ## Seat
//!
//! A match always has exactly two seats. Participant ids are mapped onto
//! seats once at construction; everything internal is indexed by `Seat`.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Seat of the first identifier passed at construction.
    First,
    /// Seat of the second identifier passed at construction.
    Second,
}

impl Seat {
    /// Both seats, in construction order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Storage index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "Seat 1"),
            Seat::Second => write!(f, "Seat 2"),
        }
    }
}

/// Per-seat data storage.
///
/// ```
/// use duel_engine::core::{Seat, SeatMap};
///
/// let mut life: SeatMap<i64> = SeatMap::new(|_| 20);
/// life[Seat::Second] -= 5;
///
/// assert_eq!(life[Seat::First], 20);
/// assert_eq!(life[Seat::Second], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_other() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(Seat::First.other().other(), Seat::First);
    }

    #[test]
    fn test_seat_display() {
        assert_eq!(format!("{}", Seat::First), "Seat 1");
        assert_eq!(format!("{}", Seat::Second), "Seat 2");
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(|s| s.index() * 10);

        assert_eq!(map[Seat::First], 0);
        assert_eq!(map[Seat::Second], 10);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<Vec<u32>> = SeatMap::default();
        map[Seat::Second].push(3);

        assert!(map[Seat::First].is_empty());
        assert_eq!(map[Seat::Second], vec![3]);
    }

    #[test]
    fn test_seat_map_iter() {
        let map: SeatMap<i32> = SeatMap::new(|s| s.index() as i32 + 1);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Seat::First, &1), (Seat::Second, &2)]);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<i32> = SeatMap::new(|s| s.index() as i32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
