use serde::{Deserialize, Serialize};

/// Runaway Steam-Kin: accumulates a +1/+1 counter on every non-land cast,
/// convertible in sets of three for three mana.
pub const RUNAWAY_STEAM_KIN: &str = "Runaway Steam-Kin";

/// Light Up the Stage: exiles the next two library cards with a two-turn
/// play window.
pub const LIGHT_UP_THE_STAGE: &str = "Light Up the Stage";

/// Card types in the simulated deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Land,
    Creature,
    Instant,
    Sorcery,
    Enchantment,
}

/// Immutable card template. One definition is shared by every copy in a
/// deck; per-copy mutable state lives on `game::zones::CardInstance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: String,
    /// Base casting cost
    pub cost: u32,
    /// Reduced cost available once damage has been dealt this turn
    pub spectacle_cost: u32,
    /// Reduced cost available while a Wizard is in play
    pub tribal_cost: u32,
    pub card_type: CardType,
    /// Damage dealt immediately when the card resolves
    #[serde(default)]
    pub cast_damage: u32,
    /// Base power (creatures only)
    #[serde(default)]
    pub power: u32,
    /// Printed haste; creatures without it cannot attack the turn they enter
    #[serde(default)]
    pub haste: bool,
    /// Qualifies other cards for their tribal cost while in play
    #[serde(default)]
    pub is_wizard: bool,
    /// Copies in the stock deck list
    pub quantity: u32,
}

impl CardDefinition {
    pub fn is_land(&self) -> bool {
        self.card_type == CardType::Land
    }

    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }

    /// Whether this card accumulates convertible +1/+1 counters
    pub fn is_steam_kin(&self) -> bool {
        self.name == RUNAWAY_STEAM_KIN
    }

    /// Whether casting this card exiles the next two library cards
    pub fn is_light_up(&self) -> bool {
        self.name == LIGHT_UP_THE_STAGE
    }
}
