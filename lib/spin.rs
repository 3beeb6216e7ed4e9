//! Half-integer angular momentum quantum numbers used to label hyperfine
//! sublevels.

use crate::error::{ ZResult, ZeemanError };

/// Round `x` to a whole number of halves, returning `None` if `x` is not
/// within rounding error of a half-integer.
fn to_halves(x: f64) -> Option<i64> {
    let h = (2.0 * x).round();
    ((2.0 * x - h).abs() <= 1e-9 && h.is_finite()).then_some(h as i64)
}

/// A magnetic (projection) quantum number, e.g. m<sub>F</sub>.
///
/// Backed by a single `i32` counting halves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpinProj(i32);

impl SpinProj {
    pub fn new(halves: i32) -> Self { Self(halves) }

    /// Return `self` as a bare number of halves.
    pub fn halves(self) -> i32 { self.0 }

    /// Return the numerical value of the projection.
    pub fn f(self) -> f64 { f64::from(self.0) / 2.0 }

    /// Return the opposite projection.
    pub fn reflected(self) -> Self { Self(-self.0) }
}

impl From<SpinProj> for f64 {
    fn from(m: SpinProj) -> Self { m.f() }
}

/// A total angular momentum quantum number, e.g. F, J, or I.
///
/// Backed by a single `u32` counting halves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpinTotal(u32);

impl SpinTotal {
    pub fn new(halves: u32) -> Self { Self(halves) }

    /// Return `self` as a bare number of halves.
    pub fn halves(self) -> u32 { self.0 }

    /// Return the numerical value of the total.
    pub fn f(self) -> f64 { f64::from(self.0) / 2.0 }

    /// Convert from an `f64`, returning `None` if the value is negative, not
    /// a half-integer, or too large for its projections to fit in a
    /// [`SpinProj`].
    pub fn from_f64(f: f64) -> Option<Self> {
        to_halves(f)
            .filter(|h| *h <= i64::from(i32::MAX))
            .and_then(|h| u32::try_from(h).ok())
            .map(Self)
    }

    /// Number of magnetic sublevels, `2F + 1`.
    pub fn multiplicity(self) -> usize { self.0 as usize + 1 }

    /// Iterate over all `(F, m_F)` pairs by ascending `m_F`.
    pub fn iter(self) -> Projections {
        Projections { total: self, next: -(self.0 as i64), rev: false }
    }

    /// Iterate over all `(F, m_F)` pairs by descending `m_F`.
    pub fn iter_rev(self) -> Projections {
        Projections { total: self, next: self.0 as i64, rev: true }
    }
}

impl IntoIterator for SpinTotal {
    type IntoIter = Projections;
    type Item = Spin;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl From<SpinTotal> for f64 {
    fn from(j: SpinTotal) -> Self { j.f() }
}

/// A `(total, projection)` pair, e.g. `|F, m_F>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Spin(SpinTotal, SpinProj);

impl Spin {
    /// Create a new spin if `m` is a valid projection of `j`, both given as
    /// numbers of halves.
    pub fn new(j: u32, m: i32) -> Option<Self> {
        let j_i64 = i64::from(j);
        let m_i64 = i64::from(m);
        ((-j_i64..=j_i64).contains(&m_i64) && (j_i64 - m_i64) % 2 == 0)
            .then_some(Self(SpinTotal(j), SpinProj(m)))
    }

    /// Create a new spin from numerical values.
    ///
    /// Fails with [`ZeemanError::InvalidProjection`] if either number is not a
    /// half-integer or `m` is not a projection of `f`.
    pub fn from_f64(f: f64, m: f64) -> ZResult<Self> {
        let invalid = || ZeemanError::InvalidProjection { f, m };
        let j = SpinTotal::from_f64(f).ok_or_else(invalid)?;
        let m_halves
            = to_halves(m)
            .and_then(|h| i32::try_from(h).ok())
            .ok_or_else(invalid)?;
        Self::new(j.halves(), m_halves).ok_or_else(invalid)
    }

    pub fn total(self) -> SpinTotal { self.0 }

    pub fn proj(self) -> SpinProj { self.1 }

    /// Return `true` if `|m| = F`.
    pub fn is_stretched(self) -> bool {
        self.1.0.unsigned_abs() == self.0.0
    }

    /// Return the numerical values `(F, m_F)`.
    pub fn f(self) -> (f64, f64) { (self.0.f(), self.1.f()) }
}

impl From<Spin> for (f64, f64) {
    fn from(fm: Spin) -> Self { fm.f() }
}

/// Iterator over the sublevels of a fixed total angular momentum.
#[derive(Copy, Clone, Debug)]
pub struct Projections {
    total: SpinTotal,
    next: i64,
    rev: bool,
}

impl Projections {
    fn remaining(&self) -> usize {
        let j = i64::from(self.total.0);
        let left = if self.rev { self.next + j } else { j - self.next };
        if left < 0 { 0 } else { (left / 2 + 1) as usize }
    }
}

impl Iterator for Projections {
    type Item = Spin;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 { return None; }
        let m = i32::try_from(self.next).ok()?;
        self.next += if self.rev { -2 } else { 2 };
        Some(Spin(self.total, SpinProj(m)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Projections { }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sublevels_ascending() {
        let f2 = SpinTotal::from_f64(2.0).unwrap();
        let m: Vec<f64> = f2.iter().map(|s| s.proj().f()).collect();
        assert_eq!(m, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(f2.iter().len(), f2.multiplicity());
    }

    #[test]
    fn sublevels_descending() {
        let f = SpinTotal::new(3);
        let m: Vec<f64> = f.iter_rev().map(|s| s.proj().f()).collect();
        assert_eq!(m, vec![1.5, 0.5, -0.5, -1.5]);
    }

    #[test]
    fn zero_total_has_one_sublevel() {
        let sublevels: Vec<Spin> = SpinTotal::new(0).into_iter().collect();
        assert_eq!(sublevels, vec![Spin::new(0, 0).unwrap()]);
    }

    #[test]
    fn validity() {
        assert!(Spin::new(2, 1).is_none());
        assert!(Spin::new(2, 4).is_none());
        assert!(Spin::new(3, -3).unwrap().is_stretched());
        assert!(SpinTotal::from_f64(-0.5).is_none());
        assert!(SpinTotal::from_f64(0.3).is_none());
        assert!(Spin::from_f64(1.0, 0.5).is_err());
        assert!(Spin::from_f64(1.0, 2.0).is_err());
        assert_eq!(Spin::from_f64(1.5, -0.5).unwrap().f(), (1.5, -0.5));
        assert_eq!(SpinProj::new(3).reflected().f(), -1.5);
    }

    #[test]
    fn totals_beyond_projection_range() {
        assert!(SpinTotal::from_f64(2.0e9).is_none());
        assert!(matches!(
            Spin::from_f64(2.0e9, 0.0),
            Err(ZeemanError::InvalidProjection { .. })
        ));
        let big = SpinTotal::from_f64(f64::from(i32::MAX) / 2.0).unwrap();
        assert_eq!(big.halves(), i32::MAX as u32);
        let top = big.iter_rev().next().unwrap();
        assert_eq!(top.proj().halves(), i32::MAX);
        assert!(top.is_stretched());
        // projections that cannot be represented end the iteration
        let mut over = SpinTotal::new(u32::MAX).iter();
        assert!(over.next().is_none());
    }
}
