//! Build routines from configuration

use crate::domain::{Checklist, Routine};
use crate::error::Result;
use crate::infrastructure::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Turns a loaded [`Config`] into routine state for the UI and the
/// non-interactive commands.
pub struct RoutineService {
    config: Config,
    seed: Option<u64>,
}

impl RoutineService {
    /// `seed` makes every random pick reproducible; `None` uses OS entropy.
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        RoutineService { config, seed }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Fresh routine: every entry unchecked, one affirmation already picked
    pub fn start(&self) -> Result<Routine<StdRng>> {
        let pool = self.config.affirmation_pool()?;
        let routine = Routine::with_rng(self.config.checklist(), pool, self.rng());
        tracing::info!(
            entries = routine.entries().len(),
            affirmations = routine.pool().len(),
            "Routine initialized"
        );
        Ok(routine)
    }

    /// One affirmation drawn uniformly from the pool
    pub fn affirmation(&self) -> Result<String> {
        Ok(self.start()?.selected_affirmation().to_string())
    }

    pub fn checklist(&self) -> Checklist {
        self.config.checklist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_AFFIRMATIONS;

    #[test]
    fn test_start_default_routine() {
        let service = RoutineService::new(Config::default(), Some(11));
        let routine = service.start().unwrap();
        assert_eq!(routine.entries().len(), 5);
        assert!(routine.entries().iter().all(|e| !e.checked));
        assert!(DEFAULT_AFFIRMATIONS.contains(&routine.selected_affirmation()));
    }

    #[test]
    fn test_seeded_affirmation_is_stable() {
        let a = RoutineService::new(Config::default(), Some(5));
        let b = RoutineService::new(Config::default(), Some(5));
        assert_eq!(a.affirmation().unwrap(), b.affirmation().unwrap());
    }

    #[test]
    fn test_custom_config_flows_through() {
        let config = Config {
            checklist: vec!["Voda".to_string()],
            affirmations: vec!["Zvládnu to.".to_string()],
            ..Config::default()
        };
        let service = RoutineService::new(config, None);
        assert_eq!(service.affirmation().unwrap(), "Zvládnu to.");
        assert_eq!(service.checklist().entries()[0].label, "Voda");
    }
}
