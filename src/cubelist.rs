//! A sum-of-products as an ordered collection of cubes of common arity.

use crate::{Cube, Literal, PcnError};
use bit_set::BitSet;
use delegate::delegate;
use std::collections::HashSet;
use std::fmt;
use std::ops::{BitOr, Index};
use std::slice::Iter;
use std::str::FromStr;
use std::vec::IntoIter;

static CUBE_SEPARATORS: [char; 4] = [',', ';', '|', '\n'];

/// A Boolean function in sum-of-products form: a list of [Cube]s sharing a
/// common arity.
///
/// The empty list denotes the zero function; a list containing the universe
/// cube denotes the one function. The order of the cubes is an artefact of
/// construction, never a carrier of meaning; comparisons should treat the
/// list as a multiset.
///
/// Algorithms append through [CubeList::push_nonzero], so zero cubes do not
/// accumulate as dead terms. The raw [CubeList::push] is available for
/// explicit construction.
///
/// ```
/// use pcnkit::CubeList;
///
/// // F = x0*x1 + x2
/// let f: CubeList = "01 01 11 ; 11 11 01".parse()?;
/// assert_eq!(f.arity(), 3);
/// assert_eq!(f.len(), 2);
/// assert!(f.evaluate(&[false, false, true]));
/// assert!(!f.evaluate(&[true, false, false]));
/// # Ok::<(), pcnkit::PcnError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CubeList {
    arity: usize,
    cubes: Vec<Cube>,
}

impl CubeList {
    /// Create an empty list (the zero function) of the given arity.
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            cubes: Vec::new(),
        }
    }

    /// Import a list of cubes, which must all have the stated arity.
    pub fn from_cubes(arity: usize, cubes: Vec<Cube>) -> Self {
        for cube in &cubes {
            assert_eq!(cube.len(), arity, "cube arity mismatch");
        }
        Self { arity, cubes }
    }

    /// The number of variables of the represented function.
    pub fn arity(&self) -> usize {
        self.arity
    }

    delegate! {
        to self.cubes {
            /// Number of product terms in the sum.
            pub fn len(&self) -> usize;
            /// Whether the sum has no product terms (the zero function).
            pub fn is_empty(&self) -> bool;
        }
    }

    /// Iterate over the product terms.
    pub fn iter(&self) -> Iter<'_, Cube> {
        self.cubes.iter()
    }

    /// The first product term, if any.
    pub fn first(&self) -> Option<&Cube> {
        self.cubes.first()
    }

    /// Append a cube without filtering.
    ///
    /// The cube must have the arity of the list. A zero cube appended here
    /// stays in the list as a dead term; algorithmic paths use
    /// [CubeList::push_nonzero] instead.
    pub fn push(&mut self, cube: Cube) {
        assert_eq!(cube.len(), self.arity, "cube arity mismatch");
        self.cubes.push(cube);
    }

    /// Append a cube unless it is zero.
    pub fn push_nonzero(&mut self, cube: Cube) {
        if !cube.is_zero() {
            self.push(cube);
        }
    }

    /// Membership test by positional factor equality.
    pub fn contains(&self, cube: &Cube) -> bool {
        self.cubes.contains(cube)
    }

    /// The function is identically false: no terms, or only zero terms.
    pub fn is_zero(&self) -> bool {
        self.cubes.iter().all(Cube::is_zero)
    }

    /// Disjunction with another sum of the same arity.
    ///
    /// The result is the union of the two cube collections; cubes of `other`
    /// already present in `self` are suppressed. No further minimisation is
    /// attempted: the union may be redundant or even a tautology.
    pub fn or(&self, other: &CubeList) -> CubeList {
        assert_eq!(self.arity, other.arity, "cube list arity mismatch");
        if std::ptr::eq(self, other) {
            return self.clone();
        }
        let seen: HashSet<&Cube> = self.cubes.iter().collect();
        let mut sum = self.clone();
        for cube in &other.cubes {
            if !seen.contains(cube) {
                sum.push(cube.clone());
            }
        }
        sum
    }

    /// Conjoin a literal with every term, dropping terms that annihilate.
    pub fn and_literal(&self, lit: &Literal) -> CubeList {
        let mut product = CubeList::new(self.arity);
        for cube in &self.cubes {
            product.push_nonzero(cube.and_literal(lit));
        }
        product
    }

    /// The sum after substituting 1 for `x_idx`.
    ///
    /// The cofactor of a sum is the sum of the cofactors of its terms;
    /// terms that die under the substitution are dropped.
    pub fn positive_cofactor(&self, idx: usize) -> CubeList {
        let mut cofactor = CubeList::new(self.arity);
        for cube in &self.cubes {
            cofactor.push_nonzero(cube.positive_cofactor(idx));
        }
        cofactor
    }

    /// The sum after substituting 0 for `x_idx`.
    pub fn negative_cofactor(&self, idx: usize) -> CubeList {
        let mut cofactor = CubeList::new(self.arity);
        for cube in &self.cubes {
            cofactor.push_nonzero(cube.negative_cofactor(idx));
        }
        cofactor
    }

    /// The set of variable indices enumerated anywhere in the sum.
    pub fn support(&self) -> BitSet {
        let mut support = BitSet::with_capacity(self.arity);
        for cube in &self.cubes {
            for (idx, factor) in cube.iter().enumerate() {
                if factor.is_enumerated() {
                    support.insert(idx);
                }
            }
        }
        support
    }

    /// Evaluate the function under a complete truth assignment.
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        assert_eq!(assignment.len(), self.arity, "assignment arity mismatch");
        self.cubes.iter().any(|cube| cube.evaluate(assignment))
    }
}

impl Index<usize> for CubeList {
    type Output = Cube;

    fn index(&self, index: usize) -> &Cube {
        self.cubes.index(index)
    }
}

impl<'a, 'b> BitOr<&'a CubeList> for &'b CubeList {
    type Output = CubeList;

    fn bitor(self, rhs: &'a CubeList) -> CubeList {
        self.or(rhs)
    }
}

impl<'a> IntoIterator for &'a CubeList {
    type Item = &'a Cube;
    type IntoIter = Iter<'a, Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubes.iter()
    }
}

impl IntoIterator for CubeList {
    type Item = Cube;
    type IntoIter = IntoIter<Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubes.into_iter()
    }
}

impl FromStr for CubeList {
    type Err = PcnError;

    /// Parse cubes in the two-bit code notation, separated by `,`, `;`, `|`
    /// or newlines; all cubes must have the same length.
    fn from_str(descr: &str) -> Result<Self, Self::Err> {
        let cubes = descr
            .split(&CUBE_SEPARATORS[..])
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Cube>, PcnError>>()?;
        let arity = cubes.first().map_or(0, Cube::len);
        if cubes.iter().any(|c| c.len() != arity) {
            return Err(PcnError::UnevenCubes);
        }
        Ok(Self { arity, cubes })
    }
}

impl fmt::Display for CubeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "< 0 >");
        }
        write!(f, "< ")?;
        for (pos, cube) in self.cubes.iter().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cube)?;
        }
        write!(f, " >")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Factor;

    fn sorted(list: &CubeList) -> Vec<Cube> {
        let mut cubes: Vec<Cube> = list.iter().cloned().collect();
        cubes.sort();
        cubes
    }

    #[test]
    fn parsing() -> Result<(), PcnError> {
        let f: CubeList = "11 01 10 ; 01 10 01".parse()?;
        assert_eq!(f.arity(), 3);
        assert_eq!(f.len(), 2);
        assert_eq!(f[0], "11 01 10".parse()?);

        assert!("11 01 ; 01".parse::<CubeList>().is_err());
        Ok(())
    }

    #[test]
    fn zero_detection() {
        assert!(CubeList::new(3).is_zero());

        let mut raw = CubeList::new(2);
        raw.push(Cube::from_codes(&[0b00, 0b01]));
        assert!(raw.is_zero());

        let mut filtered = CubeList::new(2);
        filtered.push_nonzero(Cube::from_codes(&[0b00, 0b01]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn union_takes_both_sides() -> Result<(), PcnError> {
        // (p + q) + (s + t) == p + q + s + t
        let porq: CubeList = "11 01 01 ; 11 11 10".parse()?;
        let sort: CubeList = "10 01 01 ; 01 11 10".parse()?;
        let sum = porq.or(&sort);
        assert_eq!(sum.len(), 4);
        for cube in porq.iter().chain(sort.iter()) {
            assert!(sum.contains(cube));
        }
        Ok(())
    }

    #[test]
    fn union_with_itself_is_identity() -> Result<(), PcnError> {
        let porq: CubeList = "11 01 01 ; 11 11 10".parse()?;
        let sum = porq.or(&porq);
        assert_eq!(sorted(&sum), sorted(&porq));

        // also through the operator and for an equal but distinct value
        let copy = porq.clone();
        assert_eq!(sorted(&(&porq | &copy)), sorted(&porq));
        Ok(())
    }

    #[test]
    fn union_suppresses_duplicates() -> Result<(), PcnError> {
        // (p + q) + (s + p) == p + q + s
        let porq: CubeList = "11 01 01 ; 11 11 10".parse()?;
        let sorp: CubeList = "10 01 01 ; 11 01 01".parse()?;
        let sum = porq.or(&sorp);
        assert_eq!(sum.len(), 3);
        assert_eq!(sorted(&sum), sorted(&"11 01 01 ; 11 11 10 ; 10 01 01".parse()?));
        Ok(())
    }

    #[test]
    fn literal_distributes_over_terms() -> Result<(), PcnError> {
        // x0 * (x1*x2 + x2') = x0*x1*x2 + x0*x2'
        let f: CubeList = "11 01 01 ; 11 11 10".parse()?;
        let product = f.and_literal(&Literal::positive(0));
        assert_eq!(sorted(&product), sorted(&"01 01 01 ; 01 11 10".parse()?));

        // annihilated terms are dropped: x0 * (x0' + x1) = x0*x1
        let g: CubeList = "10 11 11 ; 11 01 11".parse()?;
        let product = g.and_literal(&Literal::positive(0));
        assert_eq!(product.len(), 1);
        assert!(product.contains(&"01 01 11".parse()?));
        Ok(())
    }

    #[test]
    fn list_cofactor_drops_dead_terms() -> Result<(), PcnError> {
        let f: CubeList = "11 01 10 ; 01 10 01".parse()?;

        let pos = f.positive_cofactor(1);
        assert_eq!(pos.len(), 1);
        assert!(pos.contains(&"11 11 10".parse()?));

        let neg = f.negative_cofactor(1);
        assert_eq!(neg.len(), 1);
        assert!(neg.contains(&"01 11 01".parse()?));
        Ok(())
    }

    #[test]
    fn support_collects_enumerated_positions() -> Result<(), PcnError> {
        let f: CubeList = "11 01 11 11 ; 10 11 11 11".parse()?;
        let support = f.support();
        assert!(support.contains(0));
        assert!(support.contains(1));
        assert!(!support.contains(2));
        assert!(!support.contains(3));
        Ok(())
    }

    #[test]
    fn display_forms() -> Result<(), PcnError> {
        assert_eq!(format!("{}", CubeList::new(2)), "< 0 >");
        let f: CubeList = "01 10".parse()?;
        assert_eq!(format!("{}", f), "< [ 01 10 ] >");
        Ok(())
    }

    #[test]
    #[should_panic]
    fn push_rejects_arity_mismatch() {
        let mut f = CubeList::new(3);
        f.push(Cube::universe(2));
    }

    #[test]
    fn universe_membership() {
        let mut f = CubeList::new(1);
        f.push(Cube::universe(1));
        assert!(f.contains(&Cube::from_factors(vec![Factor::ONE])));
    }
}
