use clap::Parser;
use thiserror::Error;
use tracing::warn;

use crate::domain::{HAT_RULE, PatternError};

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot have a buffer of size 0 or less")]
    NonPositiveWidth,

    #[error("cannot have a rule smaller or equal to 0")]
    NonPositiveRule,

    #[error("cannot have a hat start without a buffer of odd size")]
    HatStartEvenWidth,

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[derive(Debug, Parser)]
#[command(
    name = "elementary_automaton",
    about = "Prints the generations of a one-dimensional elementary cellular automaton",
    version,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Wolfram rule code of the automaton
    #[arg(short = 'r', long, default_value_t = 0)]
    pub rule: i64,

    /// Number of cells in the tape
    #[arg(short = 'w', long, default_value_t = 11)]
    pub width: i64,

    /// Keep previous generations on screen instead of clearing
    #[arg(short = 's', long)]
    pub stacked: bool,

    /// Print this glyph for live cells and a space for dead ones
    #[arg(short = 'S', long, default_value = "")]
    pub symbol: String,

    /// Initial state as a string of '0' and '1' digits (default random)
    #[arg(short = 'c', long, default_value = "")]
    pub pattern: String,

    /// Milliseconds between generations
    #[arg(short = 't', long, default_value_t = 2000)]
    pub interval: i64,

    /// Start from a single live cell in the middle (requires odd width)
    #[arg(short = 'H', long)]
    pub hat_start: bool,

    /// Force rule 18, overriding --rule
    #[arg(short = 'R', long)]
    pub hat_rule: bool,
}

/// Immutable run configuration, built once from the validated flags and
/// passed explicitly to the initializer and the driver loop.
#[derive(Debug, Clone)]
pub struct Config {
    pub rule_code: u32,
    pub width: usize,
    pub stacked: bool,
    pub symbol: Option<String>,
    pub pattern: Option<String>,
    pub interval_ms: i64,
    pub hat_start: bool,
}

impl Cli {
    /// Validate the parsed flags into a run configuration.
    ///
    /// Fatal: non-positive width, non-positive rule (checked after the
    /// hat-rule override), hat start with an even width. Non-fatal, warned
    /// and carried through: rule codes above 255 (truncated later), a
    /// pattern whose length disagrees with the requested width (the
    /// pattern wins), and a non-positive tick interval.
    pub fn into_config(self) -> Result<Config> {
        let rule = if self.hat_rule { i64::from(HAT_RULE) } else { self.rule };

        if self.width <= 0 {
            return Err(ConfigError::NonPositiveWidth);
        }
        if rule <= 0 {
            return Err(ConfigError::NonPositiveRule);
        }
        if self.hat_start && self.width % 2 == 0 {
            return Err(ConfigError::HatStartEvenWidth);
        }

        if rule > 255 {
            warn!(rule, "rule exceeds byte capacity and will be truncated");
        }
        if self.interval <= 0 {
            warn!(
                interval_ms = self.interval,
                "non-positive interval, printing at full speed"
            );
        }

        let pattern = (!self.pattern.is_empty()).then_some(self.pattern);
        if let Some(pattern) = &pattern
            && !self.hat_start
            && pattern.chars().count() != self.width as usize
        {
            warn!(
                requested = self.width,
                pattern_len = pattern.chars().count(),
                "pattern length overrides the requested width"
            );
        }

        Ok(Config {
            rule_code: rule as u32,
            width: self.width as usize,
            stacked: self.stacked,
            symbol: (!self.symbol.is_empty()).then_some(self.symbol),
            pattern,
            interval_ms: self.interval,
            hat_start: self.hat_start,
        })
    }
}
