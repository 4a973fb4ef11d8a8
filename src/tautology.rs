//! Recursive tautology decision.

use crate::{Cube, CubeList, FunctionProfile};
use log::trace;

impl CubeList {
    /// Decide whether the sum-of-products is the constant-one function.
    ///
    /// A sum containing the universe cube is a tautology by inspection and
    /// the zero function is not; every other single-term sum is not a
    /// tautology either. The remaining cases split on a variable chosen by
    /// [FunctionProfile::choose_split_variable]: `F == 1` iff both Shannon
    /// cofactors are tautologies.
    ///
    /// Each cofactor turns the split position into a don't care in every
    /// surviving term, so the count of enumerated factors shrinks at every
    /// level and the recursion halts.
    pub fn is_tautology(&self) -> bool {
        if self.iter().any(Cube::is_tautology) {
            return true;
        }
        if self.is_zero() {
            return false;
        }
        if self.len() == 1 {
            return false;
        }

        let split = FunctionProfile::new(self)
            .choose_split_variable()
            .expect("a multi-cube sum without zero or universe cubes enumerates a variable");
        trace!("tautology check splits on x{} ({} cubes)", split, self.len());
        self.positive_cofactor(split).is_tautology() && self.negative_cofactor(split).is_tautology()
    }
}
