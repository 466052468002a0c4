use crate::cli::{Config, Result};
use crate::domain::{RuleTable, Tape};

/// Simulation orchestrates one automaton run.
/// This is the application layer that coordinates domain logic: it owns
/// the tape, the immutable rule table, and the generation counter.
pub struct Simulation {
    tape: Tape,
    rule: RuleTable,
    generation: u64,
}

impl Simulation {
    /// Build the rule table and the generation-zero tape from a validated
    /// configuration. Initialization precedence, first match wins: hat
    /// start, explicit pattern (its length overrides the width), random
    /// fill.
    pub fn new(config: &Config) -> Result<Self> {
        let rule = RuleTable::from_code(config.rule_code);

        let tape = if config.hat_start {
            Tape::seeded_middle(config.width)
        } else if let Some(pattern) = &config.pattern {
            Tape::from_pattern(pattern)?
        } else {
            Tape::random(config.width)
        };

        Ok(Self {
            tape,
            rule,
            generation: 0,
        })
    }

    /// The current generation's cells
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// How many generations have been computed so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the simulation by one generation
    pub fn tick(&mut self) {
        self.tape = self.tape.evolve(&self.rule);
        self.generation += 1;
    }
}
