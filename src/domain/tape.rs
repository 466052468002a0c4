use super::{Cell, RuleTable};
use rand::Rng;
use thiserror::Error;

/// An initial-pattern character that is not a binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pattern may only contain '0' and '1', found {ch:?} at index {index}")]
pub struct PatternError {
    pub ch: char,
    pub index: usize,
}

/// Tape manages the one-dimensional cellular automaton buffer.
/// The buffer is circular: the leftmost and rightmost cells are neighbors
/// of each other, and its length never changes after construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tape {
    cells: Vec<Cell>,
}

impl Tape {
    /// All cells dead except the middle one (the "hat" start).
    /// The caller guarantees an odd, non-zero length so the live cell
    /// sits exactly in the center.
    pub fn seeded_middle(len: usize) -> Self {
        let mut cells = vec![Cell::Dead; len];
        cells[len / 2] = Cell::Alive;
        Self { cells }
    }

    /// Parse an explicit initial state from a string of binary digits.
    /// The tape length is the pattern length.
    pub fn from_pattern(pattern: &str) -> Result<Self, PatternError> {
        let cells = pattern
            .chars()
            .enumerate()
            .map(|(index, ch)| Cell::from_digit(ch).ok_or(PatternError { ch, index }))
            .collect::<Result<_, _>>()?;
        Ok(Self { cells })
    }

    /// Fill every cell with an independent uniform random value
    pub fn random(len: usize) -> Self {
        let mut rng = rand::rng();
        let cells = (0..len)
            .map(|_| if rng.random::<bool>() { Cell::Alive } else { Cell::Dead })
            .collect();
        Self { cells }
    }

    /// Number of cells in the tape
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in order, leftmost first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Pure evolution - returns the next generation as a new tape.
    ///
    /// Every neighborhood is read from `self`, so the result never
    /// depends on partially-updated cells. A length-1 tape is its own
    /// left and right neighbor under the wraparound.
    pub fn evolve(&self, rule: &RuleTable) -> Self {
        let len = self.cells.len();
        let cells = (0..len)
            .map(|i| {
                let left = self.cells[(i + len - 1) % len];
                let center = self.cells[i];
                let right = self.cells[(i + 1) % len];
                rule.next(left, center, right)
            })
            .collect();
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(tape: &Tape) -> Vec<u8> {
        tape.cells().iter().map(|cell| cell.as_bit()).collect()
    }

    #[test]
    fn test_seeded_middle() {
        let tape = Tape::seeded_middle(11);
        assert_eq!(tape.len(), 11);
        for (i, cell) in tape.cells().iter().enumerate() {
            assert_eq!(cell.is_alive(), i == 5, "index {}", i);
        }
    }

    #[test]
    fn test_pattern_sets_length_and_cells() {
        let tape = Tape::from_pattern("0110").unwrap();
        assert_eq!(bits(&tape), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_pattern_rejects_non_binary_digit() {
        let err = Tape::from_pattern("0120").unwrap_err();
        assert_eq!(err, PatternError { ch: '2', index: 2 });
    }

    #[test]
    fn test_random_has_requested_length() {
        assert_eq!(Tape::random(11).len(), 11);
        assert_eq!(Tape::random(1).len(), 1);
    }

    #[test]
    fn test_toroidal_wraparound() {
        // Rule 1 turns only the all-dead neighborhood alive. With [1,0,0]
        // the edge cells wrap: index 0 sees left=0 (last cell) and index 2
        // sees right=1 (first cell), so no neighborhood is all-dead and
        // everything dies. Clamped edges would instead revive index 2.
        let tape = Tape::from_pattern("100").unwrap();
        let next = tape.evolve(&RuleTable::from_code(1));
        assert_eq!(bits(&next), vec![0, 0, 0]);
    }

    #[test]
    fn test_rule_zero_is_a_fixed_point_after_one_step() {
        let rule = RuleTable::from_code(0);
        let tape = Tape::from_pattern("1011101").unwrap();
        let next = tape.evolve(&rule);
        assert_eq!(bits(&next), vec![0; 7]);
        assert_eq!(next.evolve(&rule), next);
    }

    #[test]
    fn test_evolve_is_deterministic() {
        let rule = RuleTable::from_code(110);
        let tape = Tape::from_pattern("01101001110").unwrap();
        assert_eq!(tape.evolve(&rule), tape.clone().evolve(&rule));
    }

    #[test]
    fn test_rule_90_expands_the_hat() {
        // Rule 90 is the XOR of the two neighbors
        let tape = Tape::seeded_middle(7);
        let next = tape.evolve(&RuleTable::from_code(90));
        assert_eq!(bits(&next), vec![0, 0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_single_cell_is_its_own_neighbor() {
        // Only neighborhood 111 maps to alive under rule 128
        let tape = Tape::from_pattern("1").unwrap();
        let next = tape.evolve(&RuleTable::from_code(128));
        assert_eq!(bits(&next), vec![1]);

        let gone = tape.evolve(&RuleTable::from_code(127));
        assert_eq!(bits(&gone), vec![0]);
    }
}
