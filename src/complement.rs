//! Recursive complement of a sum-of-products.

use crate::{Cube, CubeList, FunctionProfile, Literal};
use log::debug;
use std::ops::Not;

impl CubeList {
    /// A sum-of-products for the Boolean complement of this function.
    ///
    /// The singular cases read off directly: the complement of the zero
    /// function is the universe cube, the complement of a tautology is the
    /// empty sum, and a single product term complements by De Morgan
    /// ([Cube::complement]). Everything else expands on a splitting variable
    /// `x`:
    ///
    /// ```text
    /// F' = x * (F_x)' + x' * (F_x')'
    /// ```
    ///
    /// where the two cofactor complements are computed recursively and
    /// recombined with [CubeList::and_literal] and [CubeList::or]. Both
    /// cofactors erase the split position from every term, so the recursion
    /// runs out of enumerated factors and terminates.
    ///
    /// The result is correct but not minimised: it may contain redundant
    /// terms.
    ///
    /// ```
    /// use pcnkit::CubeList;
    ///
    /// // F = x0*x1 + x2
    /// let f: CubeList = "01 01 11 ; 11 11 01".parse()?;
    /// let not_f = f.complement();
    ///
    /// // ¬F = x0*x1'*x2' + x0'*x2'
    /// assert_eq!(not_f.len(), 2);
    /// assert!(not_f.contains(&"01 10 10".parse()?));
    /// assert!(not_f.contains(&"10 11 10".parse()?));
    /// # Ok::<(), pcnkit::PcnError>(())
    /// ```
    pub fn complement(&self) -> CubeList {
        if self.is_empty() {
            return CubeList::from_cubes(self.arity(), vec![Cube::universe(self.arity())]);
        }
        if self.is_tautology() {
            return CubeList::new(self.arity());
        }
        if self.len() == 1 {
            return self[0].complement();
        }

        let split = FunctionProfile::new(self)
            .choose_split_variable()
            .expect("a multi-cube sum without zero or universe cubes enumerates a variable");
        debug!("complement splits on x{} ({} cubes)", split, self.len());

        let positive = self
            .positive_cofactor(split)
            .complement()
            .and_literal(&Literal::positive(split));
        let negative = self
            .negative_cofactor(split)
            .complement()
            .and_literal(&Literal::negative(split));
        positive.or(&negative)
    }
}

impl Not for &CubeList {
    type Output = CubeList;

    fn not(self) -> CubeList {
        self.complement()
    }
}

impl Not for CubeList {
    type Output = CubeList;

    fn not(self) -> CubeList {
        self.complement()
    }
}
