use crate::game::automaton::{instant_window, step, Outcome, ACTION_CAP};
use crate::game::state::{Boardstate, EngineFault};
use crate::game::zones::{CardArena, Library};
use serde::{Deserialize, Serialize};

/// Parameters for a single trial. Passed by value; the core holds no state
/// between trials.
#[derive(Debug, Clone, Copy)]
pub struct TrialConfig {
    /// Turn boundaries after the first turn; a trial yields turns + 1 samples
    pub turns: u32,
    /// Lands already in play when the trial starts
    pub lands: u32,
    /// Whether the first turn's land drop is already used
    pub land_for_turn: bool,
    pub verbose: bool,
}

/// Result of a single trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialResult {
    /// Damage recorded at each turn boundary, length turns + 1
    pub damage_by_turn: Vec<u32>,
    /// Times the per-turn action cap tripped. Nonzero values indicate a
    /// decision cycle the cap had to break and are surfaced by the driver.
    pub cap_exhaustions: u32,
}

/// Drive one trial to completion: repeatedly invoke the automaton until it
/// ends each turn, force combat if it never happened, record the turn's
/// damage, and run the boundary bookkeeping (exile timers, instant window,
/// draw, haste grant).
pub fn run_trial(
    arena: CardArena,
    library: Library,
    config: &TrialConfig,
) -> Result<TrialResult, EngineFault> {
    let mut state = Boardstate::new(arena, library, config.lands);
    state.land_played_this_turn = config.land_for_turn;

    let mut damage_by_turn = Vec::with_capacity(config.turns as usize + 1);
    let mut cap_exhaustions = 0;

    for turn in 0..=config.turns {
        if config.verbose {
            println!(
                "\n=== Turn {} ({} mana, {} cards in library) ===",
                turn + 1,
                state.mana,
                state.library.len()
            );
        }

        // Acting: one greedy action per invocation until nothing is legal
        let mut actions = 0;
        loop {
            if actions >= ACTION_CAP {
                cap_exhaustions += 1;
                if config.verbose {
                    eprintln!("[Warn] action cap hit on turn {}, ending turn", turn + 1);
                }
                break;
            }
            actions += 1;
            if step(&mut state, config.verbose)? == Outcome::EndTurn {
                break;
            }
        }

        // Combat is mandatory once per turn even when no cast wanted it
        if !state.combat_done {
            state.resolve_combat(config.verbose);
        }

        damage_by_turn.push(state.damage_this_turn);
        if config.verbose {
            println!("[Turn {}] {} damage this turn", turn + 1, state.damage_this_turn);
        }

        // Turn boundary
        let discarded = state.exile.tick();
        if config.verbose && discarded > 0 {
            println!("[Exile] {} card(s) discarded on timer", discarded);
        }
        state.land_played_this_turn = false;
        state.mana = state.lands;
        state.combat_done = false;
        state.damage_this_turn = 0;

        // Instant-speed response to the card about to be drawn, then the
        // draw itself (the drawn card leaves the top and is not playable)
        instant_window(&mut state, 0, config.verbose)?;
        if let Some(drawn) = state.library.draw() {
            if config.verbose {
                println!("[Draw] {} drawn for turn", state.arena.get(drawn).def.name);
            }
        }

        // Everything in play can attack from the next turn on
        state.grant_haste_all();
    }

    Ok(TrialResult {
        damage_by_turn,
        cap_exhaustions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardCatalog, CardDefinition, CardType};
    use crate::simulation::deck::{build_library, build_library_ordered};
    use crate::rng::SimRng;

    fn config(turns: u32, lands: u32) -> TrialConfig {
        TrialConfig {
            turns,
            lands,
            land_for_turn: false,
            verbose: false,
        }
    }

    fn mountain(quantity: u32) -> CardDefinition {
        CardDefinition {
            name: "Mountain".to_string(),
            cost: 0,
            spectacle_cost: 0,
            tribal_cost: 0,
            card_type: CardType::Land,
            cast_damage: 0,
            power: 0,
            haste: false,
            is_wizard: false,
            quantity,
        }
    }

    #[test]
    fn test_sample_count_is_turns_plus_one() {
        let catalog = CardCatalog::stock();
        let mut rng = SimRng::new(Some(11));
        let (arena, library) = build_library(&catalog, &mut rng);

        let result = run_trial(arena, library, &config(5, 4)).unwrap();
        assert_eq!(result.damage_by_turn.len(), 6);
    }

    #[test]
    fn test_all_lands_deal_no_damage() {
        let catalog = CardCatalog::from_cards(vec![mountain(19)]);
        let (arena, library) = build_library_ordered(&catalog);

        let result = run_trial(arena, library, &config(3, 4)).unwrap();
        assert_eq!(result.damage_by_turn, vec![0, 0, 0, 0]);
        assert_eq!(result.cap_exhaustions, 0);
    }

    #[test]
    fn test_one_land_per_turn() {
        let catalog = CardCatalog::from_cards(vec![mountain(19)]);
        let (arena, library) = build_library_ordered(&catalog);

        let mut state = Boardstate::new(arena, library, 4);
        // First turn: exactly one land goes down despite 19 on top
        loop {
            if step(&mut state, false).unwrap() == Outcome::EndTurn {
                break;
            }
        }
        assert_eq!(state.lands, 5);
        assert_eq!(state.mana, 5);
        assert!(state.land_played_this_turn);
    }

    #[test]
    fn test_empty_library_trial_is_quiet() {
        let result = run_trial(
            CardArena::new(),
            Library::new(vec![]),
            &config(4, 5),
        )
        .unwrap();
        assert_eq!(result.damage_by_turn, vec![0; 5]);
    }

    #[test]
    fn test_initial_land_for_turn_blocks_first_drop() {
        let catalog = CardCatalog::from_cards(vec![mountain(19)]);
        let (arena, library) = build_library_ordered(&catalog);

        let cfg = TrialConfig {
            turns: 0,
            lands: 4,
            land_for_turn: true,
            verbose: false,
        };
        let result = run_trial(arena, library, &cfg).unwrap();
        assert_eq!(result.damage_by_turn, vec![0]);
    }

    #[test]
    fn test_library_only_shrinks() {
        let catalog = CardCatalog::stock();
        let mut rng = SimRng::new(Some(3));
        let (arena, library) = build_library(&catalog, &mut rng);
        let start = library.len();

        let result = run_trial(arena, library, &config(5, 4)).unwrap();
        assert_eq!(result.damage_by_turn.len(), 6);
        assert!(start == 60);
    }
}
