//! Randomized draw with restart on dead ends.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use santa_registry::Registry;
use tracing::{debug, info, warn};

use crate::assignment::Assignment;
use crate::config::EngineConfig;
use crate::error::{Infeasibility, Result};
use crate::feasibility::Constraints;

/// Draws assignments from a registry.
///
/// Generic over the random source so tests can inject a seeded one.
#[derive(Debug)]
pub struct AssignmentEngine<R = StdRng> {
    config: EngineConfig,
    rng: R,
}

impl AssignmentEngine<StdRng> {
    /// Engine with a fixed seed: same registry, same assignment.
    pub fn seeded(seed: u64) -> Self {
        Self::new(EngineConfig::default(), StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(EngineConfig::default(), StdRng::from_entropy())
    }
}

impl<R: Rng> AssignmentEngine<R> {
    /// Create an engine from a configuration and random source.
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Draw a complete assignment.
    ///
    /// Validates the registry, rejects structurally infeasible groups, then
    /// runs up to `max_attempts` randomized attempts. Each attempt shuffles
    /// the assignor order and picks every recipient uniformly from the
    /// remaining pool; a dead end restarts from scratch. The result is
    /// verified against the declared exclusions before it is returned.
    pub fn assign(&mut self, registry: &Registry) -> Result<Assignment> {
        registry.validate()?;

        let constraints = Constraints::from_registry(registry);
        if let Some(reason) = constraints.structural_infeasibility(registry) {
            warn!(%reason, "draw is structurally infeasible");
            return Err(reason.into());
        }

        let max_attempts = self.config.max_attempts;
        for attempt in 1..=max_attempts {
            let Some(recipients) = self.attempt(&constraints) else {
                debug!(attempt, "dead end, restarting draw");
                continue;
            };

            let assignment = Assignment::from_positions(registry, &recipients, attempt);
            assignment.verify(registry)?;
            info!(
                participants = assignment.len(),
                attempts = attempt,
                "draw complete"
            );
            return Ok(assignment);
        }

        warn!(attempts = max_attempts, "retry budget exhausted");
        Err(Infeasibility::RetryBudgetExhausted {
            attempts: max_attempts,
        }
        .into())
    }

    /// One attempt. Returns `recipients[assignor]`, or `None` on a dead end.
    fn attempt(&mut self, constraints: &Constraints) -> Option<Vec<usize>> {
        let count = constraints.len();

        let mut order: Vec<usize> = (0..count).collect();
        order.shuffle(&mut self.rng);

        // Recipients not yet chosen in this attempt
        let mut pool: Vec<usize> = (0..count).collect();
        let mut recipients = vec![usize::MAX; count];

        for assignor in order {
            let candidates: Vec<usize> = pool
                .iter()
                .copied()
                .filter(|&recipient| constraints.allows(assignor, recipient))
                .collect();

            let &chosen = candidates.choose(&mut self.rng)?;
            pool.retain(|&recipient| recipient != chosen);
            recipients[assignor] = chosen;
        }

        Some(recipients)
    }
}
