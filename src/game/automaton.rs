use crate::card::CardType;
use crate::game::cost::{can_afford, can_afford_with_counters};
use crate::game::state::{Boardstate, EngineFault};
use crate::game::zones::CardId;

/// Hard cap on automaton invocations per turn. A safety valve against
/// non-terminating cast/convert cycles, not a game rule; hitting it ends
/// the turn and is reported by the trial driver.
pub const ACTION_CAP: u32 = 100;

/// What one automaton invocation did. `EndTurn` and `Pass` are expected
/// terminal signals, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Top-of-library card cast
    Cast(CardId),
    /// Exiled card cast
    CastFromExile(CardId),
    /// Combat resolved to enable a spectacle cost
    CombatTaken,
    /// Steam-Kin counters converted to mana; the cast follows next step
    CounterPay,
    /// No legal action remains this turn
    EndTurn,
    /// The instant window found nothing castable
    Pass,
}

/// One greedy decision. The rule order is the tie-break policy and is fixed:
/// combat for a spectacle discount, then a direct cast off the top, then a
/// counter-assisted cast, then exile, then counter-assisted exile. First
/// matching rule wins; reordering changes simulated outcomes.
pub fn step(state: &mut Boardstate, verbose: bool) -> Result<Outcome, EngineFault> {
    // Rule 1: nothing left to play off of
    let Some(top) = state.library.peek_top() else {
        return Ok(Outcome::EndTurn);
    };
    let top_def = state.arena.get(top).def.clone();
    let full_sets = state.full_counter_sets();

    // Rule 2: attack first when that cheapens the spectacle spell on top
    if top_def.spectacle_cost < top_def.cost
        && state.damage_this_turn == 0
        && state.potential_combat_damage() > 0
    {
        if verbose {
            println!("[Step] going to combat for {}'s spectacle cost", top_def.name);
        }
        state.resolve_combat(verbose);
        return Ok(Outcome::CombatTaken);
    }

    // Rule 3: direct cast off the top
    if can_afford(&top_def, state) {
        state.library.draw();
        state.cast(top, verbose)?;
        if verbose {
            println!("[Cast] {} (now {} mana)", top_def.name, state.mana);
        }
        return Ok(Outcome::Cast(top));
    }

    // Rule 4: cast off the top with Steam-Kin mana. Attack before tapping
    // the counters so their power still counts in combat.
    let (affordable, sets) = can_afford_with_counters(&top_def, state, full_sets);
    if affordable {
        if !state.combat_done {
            if verbose {
                println!("[Step] going to combat before converting counters");
            }
            state.resolve_combat(verbose);
        }
        state.convert_counters(sets, verbose);
        return Ok(Outcome::CounterPay);
    }

    // Rule 5: direct cast from exile, in insertion order
    let playable = state
        .exile
        .entries()
        .iter()
        .position(|e| can_afford(&state.arena.get(e.id).def, state));
    if let Some(index) = playable {
        let entry = state.exile.remove(index).expect("index from position");
        state.cast(entry.id, verbose)?;
        if verbose {
            println!(
                "[Cast] {} from exile with {} turns left (now {} mana)",
                state.arena.get(entry.id).def.name,
                entry.timer,
                state.mana
            );
        }
        return Ok(Outcome::CastFromExile(entry.id));
    }

    // Rule 6: convert for an exile cast; take the largest requirement any
    // single entry has, and the cast itself happens on a later step
    let max_sets = state
        .exile
        .entries()
        .iter()
        .map(|e| can_afford_with_counters(&state.arena.get(e.id).def, state, full_sets).1)
        .max()
        .unwrap_or(0);
    if max_sets > 0 {
        if !state.combat_done {
            if verbose {
                println!("[Step] going to combat before converting counters");
            }
            state.resolve_combat(verbose);
        }
        state.convert_counters(max_sets, verbose);
        return Ok(Outcome::CounterPay);
    }

    // Rule 7: stuck
    if verbose {
        println!("[Step] {} on top, can't cast (now {} mana)", top_def.name, state.mana);
    }
    Ok(Outcome::EndTurn)
}

/// Restricted instant-speed lookahead against the library card at `index`.
/// Applies only the direct-cast and counter-conversion rules, never combat
/// or exile, and only to instants; anything else passes. Removes at most
/// one card and never repeats.
pub fn instant_window(
    state: &mut Boardstate,
    index: usize,
    verbose: bool,
) -> Result<Outcome, EngineFault> {
    let Some(id) = state.library.nth(index) else {
        return Ok(Outcome::Pass);
    };
    let def = state.arena.get(id).def.clone();
    if def.card_type != CardType::Instant {
        return Ok(Outcome::Pass);
    }

    if can_afford(&def, state) {
        state.library.remove_at(index);
        state.cast(id, verbose)?;
        if verbose {
            println!("[Instant] {} cast (now {} mana)", def.name, state.mana);
        }
        return Ok(Outcome::Cast(id));
    }

    let (affordable, sets) = can_afford_with_counters(&def, state, state.full_counter_sets());
    if affordable {
        state.convert_counters(sets, verbose);
        return Ok(Outcome::CounterPay);
    }

    Ok(Outcome::Pass)
}
