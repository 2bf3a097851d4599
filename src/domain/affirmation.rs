//! Affirmation pool and uniform random selection

use crate::error::{Result, RoutineError};
use rand::Rng;

/// Affirmations shipped with the app.
pub const DEFAULT_AFFIRMATIONS: [&str; 5] = [
    "Jsem dost dobrý takový, jaký jsem.",
    "Každý malý krok se počítá.",
    "Dělám, co můžu, a to je dost.",
    "Mám právo být nedokonalý.",
    "Nejsem sám – každý občas tápe.",
];

/// Immutable, non-empty set of affirmations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffirmationPool {
    items: Vec<String>,
}

impl AffirmationPool {
    /// Create a pool. Fails if `items` is empty, since picking needs at least one member.
    pub fn new<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(RoutineError::EmptyAffirmationPool);
        }
        Ok(AffirmationPool { items })
    }

    /// Draw a uniformly random index. Consecutive draws may repeat.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.items.len())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|item| item == text)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed pool
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for AffirmationPool {
    fn default() -> Self {
        AffirmationPool {
            items: DEFAULT_AFFIRMATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
