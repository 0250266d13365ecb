use crate::card::CardCatalog;
use crate::game::zones::{CardArena, CardId, Library};
use crate::rng::SimRng;

/// Expand a catalog's quantities into a fresh arena and a shuffled library
/// for one trial. Every copy gets its own instance; nothing is shared
/// between trials.
pub fn build_library(catalog: &CardCatalog, rng: &mut SimRng) -> (CardArena, Library) {
    let mut arena = CardArena::new();
    let mut ids: Vec<CardId> = Vec::with_capacity(catalog.deck_size() as usize);

    for def in catalog.cards() {
        for _ in 0..def.quantity {
            ids.push(arena.insert(def.clone()));
        }
    }

    rng.shuffle(&mut ids);
    (arena, Library::new(ids))
}

/// Same expansion without the shuffle; trials on an ordered library are the
/// backbone of the deterministic scenario tests.
pub fn build_library_ordered(catalog: &CardCatalog) -> (CardArena, Library) {
    let mut arena = CardArena::new();
    let mut ids: Vec<CardId> = Vec::with_capacity(catalog.deck_size() as usize);

    for def in catalog.cards() {
        for _ in 0..def.quantity {
            ids.push(arena.insert(def.clone()));
        }
    }

    (arena, Library::new(ids))
}
