use crate::card::types::{CardDefinition, CardType};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Card not found: {0}")]
    CardNotFound(String),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Ordered catalog of card templates. Libraries are built by expanding each
/// definition's `quantity`.
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
}

impl CardCatalog {
    /// Load a catalog from a JSON file (an array of card definitions)
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let cards: Vec<CardDefinition> = serde_json::from_str(&content)?;
        let catalog = CardCatalog { cards };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_cards(cards: Vec<CardDefinition>) -> Self {
        CardCatalog { cards }
    }

    /// The stock mono-red spectacle list
    pub fn stock() -> Self {
        fn def(
            name: &str,
            cost: u32,
            spectacle_cost: u32,
            tribal_cost: u32,
            card_type: CardType,
            cast_damage: u32,
            power: u32,
            haste: bool,
            is_wizard: bool,
            quantity: u32,
        ) -> CardDefinition {
            CardDefinition {
                name: name.to_string(),
                cost,
                spectacle_cost,
                tribal_cost,
                card_type,
                cast_damage,
                power,
                haste,
                is_wizard,
                quantity,
            }
        }

        use CardType::*;
        CardCatalog {
            cards: vec![
                def("Fanatical Firebrand", 1, 1, 1, Creature, 0, 1, true, false, 4),
                def("Ghitu Lavarunner", 1, 1, 1, Creature, 0, 2, true, true, 4),
                def("Viashino Pyromancer", 2, 2, 2, Creature, 2, 2, false, true, 4),
                def("Runaway Steam-Kin", 2, 2, 2, Creature, 0, 1, false, false, 4),
                def("Goblin Chainwhirler", 3, 3, 3, Creature, 1, 3, false, false, 4),
                def("Shock", 1, 1, 3, Instant, 2, 0, false, false, 4),
                def("Lightning Strike", 2, 2, 3, Instant, 3, 0, false, false, 4),
                def("Skewer the Critics", 3, 1, 3, Sorcery, 3, 0, false, false, 2),
                def("Light Up the Stage", 3, 1, 3, Sorcery, 0, 0, false, false, 4),
                def("Wizard's Lightning", 3, 3, 1, Instant, 3, 0, false, false, 4),
                def("Experimental Frenzy", 4, 4, 4, Enchantment, 0, 0, false, false, 3),
                def("Mountain", 0, 0, 0, Land, 0, 0, false, false, 19),
            ],
        }
    }

    /// Get a card by name
    pub fn get(&self, name: &str) -> Result<&CardDefinition, CatalogError> {
        self.cards
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::CardNotFound(name.to_string()))
    }

    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Total copies across all definitions (the library size)
    pub fn deck_size(&self) -> u32 {
        self.cards.iter().map(|c| c.quantity).sum()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.cards.is_empty() {
            return Err(CatalogError::InvalidCatalog("no cards loaded".to_string()));
        }
        for card in &self.cards {
            if card.quantity == 0 {
                return Err(CatalogError::InvalidCatalog(format!(
                    "{} has zero copies",
                    card.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_catalog() {
        let catalog = CardCatalog::stock();
        assert_eq!(catalog.card_count(), 12);
        assert_eq!(catalog.deck_size(), 60);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_get_card() {
        let catalog = CardCatalog::stock();
        let card = catalog.get("Shock").expect("Shock should exist");
        assert_eq!(card.cast_damage, 2);
        assert_eq!(card.card_type, CardType::Instant);
    }

    #[test]
    fn test_card_not_found() {
        let catalog = CardCatalog::stock();
        assert!(matches!(
            catalog.get("Lightning Bolt"),
            Err(CatalogError::CardNotFound(_))
        ));
    }

    #[test]
    fn test_wizards_qualify_for_tribal() {
        let catalog = CardCatalog::stock();
        assert!(catalog.get("Ghitu Lavarunner").unwrap().is_wizard);
        assert!(catalog.get("Viashino Pyromancer").unwrap().is_wizard);
        assert!(!catalog.get("Runaway Steam-Kin").unwrap().is_wizard);
    }

    #[test]
    fn test_empty_catalog_invalid() {
        let catalog = CardCatalog::from_cards(vec![]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_stock_round_trips_through_json() {
        let catalog = CardCatalog::stock();
        let json = serde_json::to_string(catalog.cards()).unwrap();
        let parsed: Vec<CardDefinition> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), catalog.card_count());
        assert_eq!(parsed[0].name, "Fanatical Firebrand");
    }
}
