use crate::card::CardDefinition;

/// Counters a Steam-Kin can hold before it stops accumulating
pub const MAX_COUNTERS: u32 = 3;

/// Mana produced by converting one full set of counters
pub const MANA_PER_COUNTER_SET: u32 = 3;

/// Turns an exiled card stays playable before it is discarded
pub const EXILE_TIMER: u32 = 2;

/// Stable handle into a trial's card arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(u32);

/// One physical copy of a card within a single trial
#[derive(Debug, Clone)]
pub struct CardInstance {
    pub def: CardDefinition,
    /// +1/+1 counters, Steam-Kin only, in [0, MAX_COUNTERS]
    pub counters: u32,
    /// Starts at the printed value; granted to everything at the turn
    /// boundary so creatures attack from their second turn on
    pub haste: bool,
}

/// Arena owning every card instance for one trial. Zones hold `CardId`s and
/// move them between each other; an instance is never duplicated.
#[derive(Debug, Clone, Default)]
pub struct CardArena {
    instances: Vec<CardInstance>,
}

impl CardArena {
    pub fn new() -> Self {
        CardArena::default()
    }

    pub fn insert(&mut self, def: CardDefinition) -> CardId {
        let haste = def.haste;
        self.instances.push(CardInstance {
            def,
            counters: 0,
            haste,
        });
        CardId(self.instances.len() as u32 - 1)
    }

    pub fn get(&self, id: CardId) -> &CardInstance {
        &self.instances[id.0 as usize]
    }

    pub fn get_mut(&mut self, id: CardId) -> &mut CardInstance {
        &mut self.instances[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Library (deck) - the fixed draw order for one trial. Only ever shrinks:
/// from the front on cast/draw, or at an index for exile and the instant
/// window.
#[derive(Debug, Clone)]
pub struct Library {
    ids: Vec<CardId>,
}

impl Library {
    pub fn new(ids: Vec<CardId>) -> Self {
        Library { ids }
    }

    /// Top card without removing it
    pub fn peek_top(&self) -> Option<CardId> {
        self.ids.first().copied()
    }

    pub fn nth(&self, index: usize) -> Option<CardId> {
        self.ids.get(index).copied()
    }

    /// Remove and return the top card
    pub fn draw(&mut self) -> Option<CardId> {
        if self.ids.is_empty() {
            None
        } else {
            Some(self.ids.remove(0))
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<CardId> {
        if index < self.ids.len() {
            Some(self.ids.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Battlefield - creatures in play, in the order they entered
#[derive(Debug, Clone, Default)]
pub struct Battlefield {
    creatures: Vec<CardId>,
}

impl Battlefield {
    pub fn new() -> Self {
        Battlefield::default()
    }

    pub fn add(&mut self, id: CardId) {
        self.creatures.push(id);
    }

    pub fn creatures(&self) -> &[CardId] {
        &self.creatures
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

/// A card waiting in exile with its remaining play window
#[derive(Debug, Clone, Copy)]
pub struct ExileEntry {
    pub id: CardId,
    /// Turn boundaries left before the card is discarded, in {1, 2}
    pub timer: u32,
}

/// Exile - cards removed from the library by Light Up the Stage, playable
/// until their timer runs out. Insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct Exile {
    entries: Vec<ExileEntry>,
}

impl Exile {
    pub fn new() -> Self {
        Exile::default()
    }

    pub fn add(&mut self, id: CardId, timer: u32) {
        self.entries.push(ExileEntry { id, timer });
    }

    pub fn entries(&self) -> &[ExileEntry] {
        &self.entries
    }

    pub fn remove(&mut self, index: usize) -> Option<ExileEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decrement every timer and discard entries that reach zero; returns
    /// how many were discarded
    pub fn tick(&mut self) -> usize {
        for entry in &mut self.entries {
            entry.timer -= 1;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.timer > 0);
        before - self.entries.len()
    }
}
