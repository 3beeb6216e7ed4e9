//! Elementwise evaluation over a pair of scalars or arrays, following the usual
//! broadcasting rules.
//!
//! Shapes are aligned at their trailing axes; two axes are compatible if they
//! are equal or either of them has length 1, in which case it is stretched to
//! match the other. Missing leading axes are treated as length 1. Scalars are
//! zero-dimensional arrays.

use itertools::{ EitherOrBoth, Itertools };
use ndarray as nd;
use crate::error::{ ZResult, ZeemanError };

/// A borrowed or owned dynamic-dimensional array of `f64`s.
pub type Operand<'a> = nd::CowArray<'a, f64, nd::IxDyn>;

/// Conversion into an [`Operand`].
///
/// Borrowed `f64` arrays and slices are viewed without copying; integer
/// inputs are converted into owned `f64` arrays.
pub trait IntoOperand<'a> {
    fn into_operand(self) -> Operand<'a>;
}

impl<'a> IntoOperand<'a> for f64 {
    fn into_operand(self) -> Operand<'a> { nd::arr0(self).into_dyn().into() }
}

impl<'a> IntoOperand<'a> for i32 {
    fn into_operand(self) -> Operand<'a> { f64::from(self).into_operand() }
}

impl<'a> IntoOperand<'a> for &'a [f64] {
    fn into_operand(self) -> Operand<'a> { nd::aview1(self).into_dyn().into() }
}

impl<'a> IntoOperand<'a> for &'a Vec<f64> {
    fn into_operand(self) -> Operand<'a> { self.as_slice().into_operand() }
}

impl<'a> IntoOperand<'a> for Vec<f64> {
    fn into_operand(self) -> Operand<'a> {
        nd::Array1::from(self).into_dyn().into()
    }
}

impl<'a, S, D> IntoOperand<'a> for &'a nd::ArrayBase<S, D>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    fn into_operand(self) -> Operand<'a> { self.view().into_dyn().into() }
}

impl<'a, D> IntoOperand<'a> for nd::Array<f64, D>
where D: nd::Dimension
{
    fn into_operand(self) -> Operand<'a> { self.into_dyn().into() }
}

impl<'a> IntoOperand<'a> for &'a [i32] {
    fn into_operand(self) -> Operand<'a> {
        self.iter()
            .map(|m| f64::from(*m))
            .collect::<nd::Array1<f64>>()
            .into_dyn()
            .into()
    }
}

impl<'a> IntoOperand<'a> for &'a Vec<i32> {
    fn into_operand(self) -> Operand<'a> { self.as_slice().into_operand() }
}

impl<'a> IntoOperand<'a> for Vec<i32> {
    fn into_operand(self) -> Operand<'a> {
        self.into_iter()
            .map(f64::from)
            .collect::<nd::Array1<f64>>()
            .into_dyn()
            .into()
    }
}

// borrowed integer arrays are left out: an impl for `&ArrayBase<S, D>` with
// `S: Data<Elem = i32>` would conflict with the `f64` one above
impl<'a, D> IntoOperand<'a> for nd::Array<i32, D>
where D: nd::Dimension
{
    fn into_operand(self) -> Operand<'a> {
        self.mapv(f64::from).into_dyn().into()
    }
}

/// Compute the common shape of two broadcast operands.
pub fn co_broadcast_shape(lhs: &[usize], rhs: &[usize]) -> ZResult<Vec<usize>> {
    let mismatch = || ZeemanError::Broadcast {
        lhs: lhs.to_vec(),
        rhs: rhs.to_vec(),
    };
    let mut shape: Vec<usize>
        = lhs.iter().rev()
        .zip_longest(rhs.iter().rev())
        .map(|axes| match axes {
            EitherOrBoth::Both(&l, &r) if l == r || r == 1 => Ok(l),
            EitherOrBoth::Both(&l, &r) if l == 1 => Ok(r),
            EitherOrBoth::Both(..) => Err(mismatch()),
            EitherOrBoth::Left(&l) => Ok(l),
            EitherOrBoth::Right(&r) => Ok(r),
        })
        .collect::<ZResult<_>>()?;
    shape.reverse();
    Ok(shape)
}

/// Broadcast `lhs` and `rhs` to a common shape and apply `f` elementwise.
///
/// Fails with [`ZeemanError::Broadcast`] if the shapes are incompatible; no
/// elements are evaluated in that case.
pub fn zip_broadcast<'a, 'b, L, R, F>(lhs: L, rhs: R, f: F)
    -> ZResult<nd::ArrayD<f64>>
where
    L: IntoOperand<'a>,
    R: IntoOperand<'b>,
    F: Fn(f64, f64) -> f64,
{
    let lhs = lhs.into_operand();
    let rhs = rhs.into_operand();
    let shape = co_broadcast_shape(lhs.shape(), rhs.shape())?;
    let mismatch = || {
        log::trace!(
            "broadcast failed for shapes {:?} and {:?}",
            lhs.shape(),
            rhs.shape()
        );
        ZeemanError::Broadcast {
            lhs: lhs.shape().to_vec(),
            rhs: rhs.shape().to_vec(),
        }
    };
    let lhs_b = lhs.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    let rhs_b = rhs.broadcast(shape.as_slice()).ok_or_else(mismatch)?;
    Ok(nd::Zip::from(lhs_b).and(rhs_b).map_collect(|&l, &r| f(l, r)))
}
