//! Position permutation of a single pass
//!
//! Since a pass ignores card values, it is fully described by where each
//! position's card comes from. The period of the simulation is the
//! multiplicative order of this permutation: the lcm of its cycle lengths.
//!
//! This gives an answer that does not depend on repeated simulation, which
//! is what the analysis command and the property tests rely on.

use super::{deal, Pickup};

/// `source[i]` is the position (before the pass) of the card that ends up
/// at position `i` after the pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    source: Vec<usize>,
}

impl Permutation {
    /// Extract the permutation one pass applies to a deck of `num_cards`
    ///
    /// # Example
    ///
    /// ```rust
    /// use shuffle_period_core_rs::shuffle::{Permutation, Pickup};
    ///
    /// let pass = Permutation::of_pass(4, Pickup::Stacked);
    /// assert_eq!(pass.source(), &[3, 1, 2, 0]);
    /// assert_eq!(pass.cycles(), vec![vec![0, 3], vec![1], vec![2]]);
    /// assert_eq!(pass.order(), Some(2));
    /// ```
    pub fn of_pass(num_cards: u16, pickup: Pickup) -> Self {
        let positions: Vec<usize> = (0..usize::from(num_cards)).collect();
        Self {
            source: deal(positions, pickup),
        }
    }

    /// The identity on `len` positions
    pub fn identity(len: usize) -> Self {
        Self {
            source: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source(&self) -> &[usize] {
        &self.source
    }

    pub fn is_identity(&self) -> bool {
        self.source.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// Rearrange `items` as one pass would
    ///
    /// # Panics
    /// Panics if `items.len()` differs from the permutation length
    pub fn apply<T: Copy>(&self, items: &[T]) -> Vec<T> {
        assert_eq!(items.len(), self.len(), "length mismatch");
        self.source.iter().map(|&j| items[j]).collect()
    }

    /// The permutation equivalent to applying `self` and then `other`
    pub fn then(&self, other: &Self) -> Self {
        Self {
            source: other.apply(&self.source),
        }
    }

    /// Disjoint cycles, each starting from its smallest position, ordered
    /// by that position. Fixed points appear as one-element cycles.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut cycles = Vec::new();

        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut position = start;
            while !visited[position] {
                visited[position] = true;
                cycle.push(position);
                position = self.source[position];
            }
            cycles.push(cycle);
        }

        cycles
    }

    /// Cycle lengths in the order of [`Permutation::cycles`]
    pub fn cycle_lengths(&self) -> Vec<usize> {
        self.cycles().iter().map(Vec::len).collect()
    }

    /// Multiplicative order: the lcm of all cycle lengths
    ///
    /// Returns `None` if the order does not fit in a `u64`. The empty
    /// permutation has order 1 by convention of the lcm over nothing.
    pub fn order(&self) -> Option<u64> {
        self.cycle_lengths()
            .into_iter()
            .try_fold(1u64, |acc, len| lcm(acc, len as u64))
    }
}

impl std::fmt::Display for Permutation {
    /// Cycle notation on 1-based positions, e.g. `(1 4)(2)(3)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cycle in self.cycles() {
            write!(f, "(")?;
            for (i, position) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", position + 1)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}
