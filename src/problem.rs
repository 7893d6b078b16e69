/// A single item that can be packed into the knapsack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    /// Position of the item in the input sequence. Solutions are indexed by
    /// this position, not by rank.
    pub index: usize,
    /// Weight of the item, in the same units as the problem capacity.
    pub weight: u64,
    /// Value gained by taking all of the item.
    pub value: u64,
}

/// An error encountered while constructing a problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The weight and value sequences have different lengths.
    InvalidInstance { weights: usize, values: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidInstance { weights, values } => write!(
                f,
                "invalid instance: {} weights but {} values",
                weights, values
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A specification of a knapsack problem instance.
///
/// An instance is a capacity together with an ordered list of items and is
/// immutable once constructed. Both solvers read the same instance; neither
/// modifies it.
#[derive(Clone, Debug)]
pub struct Problem {
    capacity: u64,
    items: Vec<Item>,
}

impl Problem {
    /// Create a problem instance from parallel weight and value slices.
    ///
    /// Fails with [`Error::InvalidInstance`] when the slices have different
    /// lengths. Zero weights are accepted: a weightless item is infinitely
    /// valuable per unit weight and the solvers rank it accordingly.
    pub fn new(capacity: u64, weights: &[u64], values: &[u64]) -> Result<Problem, Error> {
        if weights.len() != values.len() {
            return Err(Error::InvalidInstance {
                weights: weights.len(),
                values: values.len(),
            });
        }

        let items = weights
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (&weight, &value))| Item {
                index,
                weight,
                value,
            })
            .collect();

        Ok(Problem { capacity, items })
    }

    /// The weight limit of the knapsack.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// The items of the instance, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items in the instance.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
