use crate::game::automaton;
use crate::game::cost::resolved_cost;
use crate::game::zones::{
    Battlefield, CardArena, CardId, Exile, Library, EXILE_TIMER, MANA_PER_COUNTER_SET, MAX_COUNTERS,
};
use thiserror::Error;

/// Genuine faults in the engine. These abort the trial they occur in; they
/// never corrupt other trials.
#[derive(Error, Debug)]
pub enum EngineFault {
    #[error("illegal mana spend: {card} costs {cost} with {available} available")]
    ManaUnderflow {
        card: String,
        cost: u32,
        available: u32,
    },
}

/// Mutable per-trial resource ledger: mana, lands, creatures in play, the
/// exile zone, and the damage tallies the trial reports.
#[derive(Debug, Clone)]
pub struct Boardstate {
    pub arena: CardArena,
    pub library: Library,
    pub battlefield: Battlefield,
    pub exile: Exile,
    pub lands: u32,
    pub mana: u32,
    /// Damage dealt this turn; doubles as the spectacle condition and is
    /// the per-turn sample recorded at the boundary
    pub damage_this_turn: u32,
    /// Cumulative damage over the whole trial
    pub total_damage: u32,
    pub combat_done: bool,
    pub land_played_this_turn: bool,
}

impl Boardstate {
    pub fn new(arena: CardArena, library: Library, lands: u32) -> Self {
        Boardstate {
            arena,
            library,
            battlefield: Battlefield::new(),
            exile: Exile::new(),
            lands,
            mana: lands,
            damage_this_turn: 0,
            total_damage: 0,
            combat_done: false,
            land_played_this_turn: false,
        }
    }

    /// Whether a Wizard is in play (enables tribal costs)
    pub fn has_wizard(&self) -> bool {
        self.battlefield
            .creatures()
            .iter()
            .any(|&id| self.arena.get(id).def.is_wizard)
    }

    /// Steam-Kins currently holding a full set of counters
    pub fn full_counter_sets(&self) -> u32 {
        self.battlefield
            .creatures()
            .iter()
            .filter(|&&id| {
                let c = self.arena.get(id);
                c.def.is_steam_kin() && c.counters == MAX_COUNTERS
            })
            .count() as u32
    }

    /// Damage combat would deal right now: power plus counters over every
    /// hasty creature
    pub fn potential_combat_damage(&self) -> u32 {
        self.battlefield
            .creatures()
            .iter()
            .map(|&id| {
                let c = self.arena.get(id);
                if c.haste {
                    c.def.power + c.counters
                } else {
                    0
                }
            })
            .sum()
    }

    /// Resolve a cast. The card must already have been removed from the
    /// library or exile by the caller; its side effects land here as one
    /// atomic block. The cost is resolved before anything else mutates so a
    /// spell's own cast damage cannot discount it.
    pub fn cast(&mut self, id: CardId, verbose: bool) -> Result<(), EngineFault> {
        let cost = resolved_cost(&self.arena.get(id).def, self);
        let (name, card_type_is_land, is_creature, is_light_up, cast_damage) = {
            let def = &self.arena.get(id).def;
            (
                def.name.clone(),
                def.is_land(),
                def.is_creature(),
                def.is_light_up(),
                def.cast_damage,
            )
        };

        self.damage_this_turn += cast_damage;
        self.total_damage += cast_damage;

        self.mana = self
            .mana
            .checked_sub(cost)
            .ok_or(EngineFault::ManaUnderflow {
                card: name,
                cost,
                available: self.mana,
            })?;

        if card_type_is_land {
            self.land_played_this_turn = true;
            self.lands += 1;
            self.mana += 1;
        } else {
            // One global trigger per non-land cast; the card being cast is
            // not on the battlefield yet, so a Steam-Kin never counts itself
            for &creature in &self.battlefield.creatures().to_vec() {
                let instance = self.arena.get_mut(creature);
                if instance.def.is_steam_kin() && instance.counters < MAX_COUNTERS {
                    instance.counters += 1;
                }
            }
        }

        if is_creature {
            self.battlefield.add(id);
        }

        // Light Up the Stage: only when more than 3 cards remain after its
        // own removal. The next card gets an instant-speed window first,
        // then the front two cards move to exile.
        if is_light_up && self.library.len() > 3 {
            automaton::instant_window(self, 0, verbose)?;
            for _ in 0..2 {
                if let Some(exiled) = self.library.draw() {
                    if verbose {
                        println!("[Exile] {} set aside for {} turns", self.arena.get(exiled).def.name, EXILE_TIMER);
                    }
                    self.exile.add(exiled, EXILE_TIMER);
                }
            }
        }

        Ok(())
    }

    /// All hasty creatures attack. No-op if combat already happened this
    /// turn; at most one combat per turn. Returns the damage dealt.
    pub fn resolve_combat(&mut self, verbose: bool) -> u32 {
        if self.combat_done {
            return 0;
        }

        let mut dealt = 0;
        for &id in self.battlefield.creatures() {
            let c = self.arena.get(id);
            if c.haste {
                if verbose {
                    println!(
                        "[Combat] {} attacks with {} power and {} counters",
                        c.def.name, c.def.power, c.counters
                    );
                }
                dealt += c.def.power + c.counters;
            }
        }

        self.damage_this_turn += dealt;
        self.total_damage += dealt;
        self.combat_done = true;

        if verbose {
            println!("[Combat] {} damage dealt", dealt);
        }
        dealt
    }

    /// Zero the counters on up to `sets` fully charged Steam-Kins, adding
    /// three mana per set. Returns the mana gained.
    pub fn convert_counters(&mut self, sets: u32, verbose: bool) -> u32 {
        let mut converted = 0;
        for &id in &self.battlefield.creatures().to_vec() {
            if converted == sets {
                break;
            }
            let instance = self.arena.get_mut(id);
            if instance.def.is_steam_kin() && instance.counters == MAX_COUNTERS {
                instance.counters = 0;
                self.mana += MANA_PER_COUNTER_SET;
                converted += 1;
                if verbose {
                    println!("[Counters] converted to mana (now {} mana)", self.mana);
                }
            }
        }
        converted * MANA_PER_COUNTER_SET
    }

    /// Turn-boundary haste grant: every creature in play may attack from
    /// the next turn on
    pub fn grant_haste_all(&mut self) {
        for &id in &self.battlefield.creatures().to_vec() {
            self.arena.get_mut(id).haste = true;
        }
    }
}
