use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The default B-tree degree, i.e. the minimum number of children per inner node.
pub const DEFAULT_DEGREE: usize = 5;

/// The branching factor `t` of a B-tree. All node bounds derive from it: a node holds at most
/// `2t - 1` items and `2t` children, and every node except the root holds at least `t - 1`
/// items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Degree(usize);

impl Degree {
    /// Creates a new degree, which must be at least 2.
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 2 {
            return Err(Error::Config(format!("Degree must be at least 2, got {}", degree)));
        }
        Ok(Self(degree))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn max_children(&self) -> usize {
        2 * self.0
    }

    pub fn max_items(&self) -> usize {
        self.max_children() - 1
    }

    pub fn min_items(&self) -> usize {
        self.0 - 1
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self(DEFAULT_DEGREE)
    }
}

impl TryFrom<usize> for Degree {
    type Error = Error;

    fn try_from(degree: usize) -> Result<Self> {
        Self::new(degree)
    }
}

impl From<Degree> for usize {
    fn from(degree: Degree) -> Self {
        degree.0
    }
}

#[cfg(test)]
mod degree_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bounds() -> Result<()> {
        let degree = Degree::new(2)?;
        assert_eq!(4, degree.max_children());
        assert_eq!(3, degree.max_items());
        assert_eq!(1, degree.min_items());

        let degree = Degree::default();
        assert_eq!(DEFAULT_DEGREE, degree.get());
        assert_eq!(9, degree.max_items());
        assert_eq!(4, degree.min_items());
        Ok(())
    }

    #[test]
    fn too_small() {
        assert_eq!(Err(Error::Config("Degree must be at least 2, got 1".into())), Degree::new(1));
        assert_eq!(Err(Error::Config("Degree must be at least 2, got 0".into())), Degree::try_from(0));
    }
}
