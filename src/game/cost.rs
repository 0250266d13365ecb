use crate::card::CardDefinition;
use crate::game::state::Boardstate;
use crate::game::zones::MANA_PER_COUNTER_SET;

/// Minimum legal cost of `card` right now: the base cost, the tribal cost if
/// a Wizard is in play, or the spectacle cost once damage has been dealt
/// this turn, whichever is lowest.
pub fn resolved_cost(card: &CardDefinition, state: &Boardstate) -> u32 {
    let mut cost = card.cost;
    if state.has_wizard() {
        cost = cost.min(card.tribal_cost);
    }
    if state.damage_this_turn > 0 {
        cost = cost.min(card.spectacle_cost);
    }
    cost
}

/// Whether `card` is castable from the current mana. Lands have no numeric
/// cost; they are legal while the land drop is unused.
pub fn can_afford(card: &CardDefinition, state: &Boardstate) -> bool {
    if card.is_land() {
        return !state.land_played_this_turn;
    }
    resolved_cost(card, state) <= state.mana
}

/// Whether `card` becomes castable by converting whole counter sets (three
/// mana each) from up to `full_sets` fully charged Steam-Kins. Conversion is
/// simulated greedily, stopping as soon as the cost is covered. Returns
/// whether affordability was reached and the sets that conversion would
/// consume.
pub fn can_afford_with_counters(
    card: &CardDefinition,
    state: &Boardstate,
    full_sets: u32,
) -> (bool, u32) {
    if card.is_land() {
        return (!state.land_played_this_turn, 0);
    }

    let cost = resolved_cost(card, state);
    let mut mana = state.mana;
    let mut used = 0;
    while used < full_sets && cost > mana {
        mana += MANA_PER_COUNTER_SET;
        used += 1;
    }
    if cost <= mana {
        (true, used)
    } else {
        (false, 0)
    }
}
