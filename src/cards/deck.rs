//! Deck sources.
//!
//! Deck content is authored outside the engine. A `DeckSource` hands the
//! engine an unshuffled list of templates per seat; the engine allocates
//! instance ids and shuffles.
//!
//! - `StarterDeck`: generated content, alternating follower/spell with random
//!   stats. This is what `MatchEngine::new` uses.
//! - `FixedDeck`: explicit lists, for tests and externally authored decks.

use super::definition::CardTemplate;
use crate::core::config::MatchConfig;
use crate::core::player::{Seat, SeatMap};
use crate::core::rng::GameRng;

/// Supplies the card list for each seat.
pub trait DeckSource {
    /// Build the (unshuffled) deck for `seat`.
    ///
    /// `rng` is a stream dedicated to this seat's deck.
    fn build_deck(
        &self,
        seat: Seat,
        config: &MatchConfig,
        rng: &mut GameRng,
    ) -> Vec<CardTemplate>;
}

/// Generated starter content.
///
/// Card `i` (1-based) gets template id `SD01-00i`. Even positions (0-based)
/// are followers with random attack and defense, odd positions are spells.
/// Cost, attack and defense are drawn from `config.stat_range`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StarterDeck;

impl DeckSource for StarterDeck {
    fn build_deck(
        &self,
        _seat: Seat,
        config: &MatchConfig,
        rng: &mut GameRng,
    ) -> Vec<CardTemplate> {
        let range = config.stat_range;
        let roll = |rng: &mut GameRng| rng.gen_range_inclusive(range.min, range.max);

        (0..config.deck_size)
            .map(|i| {
                let template_id = format!("SD01-{:03}", i + 1);
                let cost = roll(rng);
                if i % 2 == 0 {
                    let attack = roll(rng);
                    let defense = roll(rng);
                    let name = format!("Starter Follower {}", i + 1);
                    CardTemplate::follower(template_id, name, cost, attack, defense)
                } else {
                    CardTemplate::spell(template_id, format!("Starter Spell {}", i + 1), cost)
                }
            })
            .collect()
    }
}

/// Explicit per-seat card lists.
///
/// `config.deck_size` is ignored; the lists are used as given.
#[derive(Clone, Debug, Default)]
pub struct FixedDeck {
    decks: SeatMap<Vec<CardTemplate>>,
}

impl FixedDeck {
    /// Use `first` for the first seat and `second` for the second.
    #[must_use]
    pub fn new(first: Vec<CardTemplate>, second: Vec<CardTemplate>) -> Self {
        let mut decks = SeatMap::default();
        decks[Seat::First] = first;
        decks[Seat::Second] = second;
        Self { decks }
    }

    /// Use the same list for both seats.
    #[must_use]
    pub fn mirrored(cards: Vec<CardTemplate>) -> Self {
        Self::new(cards.clone(), cards)
    }
}

impl DeckSource for FixedDeck {
    fn build_deck(
        &self,
        seat: Seat,
        _config: &MatchConfig,
        _rng: &mut GameRng,
    ) -> Vec<CardTemplate> {
        self.decks[seat].clone()
    }
}
