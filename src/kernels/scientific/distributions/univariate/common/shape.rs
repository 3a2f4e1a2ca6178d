// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Shape Carriers** - *Containers the Kernels Accept and Return*
//!
//! A kernel sees every input as a flat run of elements in logical order (row-major for
//! matrices) plus an optional validity mask. `Shaped` exposes that view; `ShapeCarrier`
//! rebuilds an `f64` result of the same shape from the flat output.
//!
//! | Input | `Shape` | Output |
//! |---|---|---|
//! | `f64`, parameter structs | `Scalar` | `f64` |
//! | `[T]`, `[T; N]`, `Vec<T>` | `Sequence(n)` | `Vec<f64>` |
//! | `ArrayBase<_, Ix1>` | `Sequence(n)` | `Array1<f64>` |
//! | `ArrayBase<_, Ix2>` | `Matrix { rows, cols }` | `Array2<f64>` |
//! | `FloatArray<f64>` | `Sequence(n)` | `FloatArray<f64>` with validity |

use std::borrow::Cow;
use std::fmt;

use minarrow::{Bitmask, FloatArray};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1, Ix2};

use crate::errors::KernelError;

/// Logical shape of a kernel input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Sequence(usize),
    Matrix { rows: usize, cols: usize },
}

impl Shape {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        match *self {
            Shape::Scalar => 1,
            Shape::Sequence(n) => n,
            Shape::Matrix { rows, cols } => rows * cols,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Sequence(n) => write!(f, "sequence of {n}"),
            Shape::Matrix { rows, cols } => write!(f, "matrix {rows}x{cols}"),
        }
    }
}

/// Flat, logically ordered view of a container of `T`.
pub trait Shaped<T: Copy> {
    fn shape(&self) -> Shape;

    /// Elements in logical order. Borrowed whenever the storage is already contiguous
    /// in that order.
    fn elements(&self) -> Cow<'_, [T]>;

    /// Validity mask, where a cleared bit marks a null lane.
    fn validity(&self) -> Option<&Bitmask> {
        None
    }
}

/// A container that can hand back an `f64` result of its own shape.
pub trait ShapeCarrier<T: Copy>: Shaped<T> {
    type Output;

    /// Rebuilds the output from `values` in logical order. `validity` is only kept by
    /// carriers with a null mask.
    fn rebuild(
        &self,
        values: Vec<f64>,
        validity: Option<Bitmask>,
    ) -> Result<Self::Output, KernelError>;
}

/// Implements `Shaped` and `ShapeCarrier` for a scalar type.
#[macro_export]
macro_rules! impl_scalar_shape {
    ($t:ty) => {
        impl $crate::kernels::scientific::distributions::univariate::common::shape::Shaped<$t>
            for $t
        {
            #[inline]
            fn shape(&self) -> $crate::kernels::scientific::distributions::univariate::common::shape::Shape {
                $crate::kernels::scientific::distributions::univariate::common::shape::Shape::Scalar
            }

            #[inline]
            fn elements(&self) -> ::std::borrow::Cow<'_, [$t]> {
                ::std::borrow::Cow::Borrowed(::std::slice::from_ref(self))
            }
        }

        impl $crate::kernels::scientific::distributions::univariate::common::shape::ShapeCarrier<$t>
            for $t
        {
            type Output = f64;

            #[inline]
            fn rebuild(
                &self,
                values: Vec<f64>,
                _validity: Option<::minarrow::Bitmask>,
            ) -> Result<f64, $crate::errors::KernelError> {
                Ok(values.first().copied().unwrap_or(f64::NAN))
            }
        }
    };
}

impl_scalar_shape!(f64);

impl<T: Copy> Shaped<T> for [T] {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }

    #[inline]
    fn elements(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }
}

impl<T: Copy> ShapeCarrier<T> for [T] {
    type Output = Vec<f64>;

    #[inline]
    fn rebuild(
        &self,
        values: Vec<f64>,
        _validity: Option<Bitmask>,
    ) -> Result<Vec<f64>, KernelError> {
        Ok(values)
    }
}

impl<T: Copy, const N: usize> Shaped<T> for [T; N] {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(N)
    }

    #[inline]
    fn elements(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Copy, const N: usize> ShapeCarrier<T> for [T; N] {
    type Output = Vec<f64>;

    #[inline]
    fn rebuild(
        &self,
        values: Vec<f64>,
        _validity: Option<Bitmask>,
    ) -> Result<Vec<f64>, KernelError> {
        Ok(values)
    }
}

impl<T: Copy> Shaped<T> for Vec<T> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }

    #[inline]
    fn elements(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Copy> ShapeCarrier<T> for Vec<T> {
    type Output = Vec<f64>;

    #[inline]
    fn rebuild(
        &self,
        values: Vec<f64>,
        _validity: Option<Bitmask>,
    ) -> Result<Vec<f64>, KernelError> {
        Ok(values)
    }
}

impl<S, T> Shaped<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: Copy,
{
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }

    fn elements(&self) -> Cow<'_, [T]> {
        match self.as_slice() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(self.iter().copied().collect()),
        }
    }
}

impl<S, T> ShapeCarrier<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
    T: Copy,
{
    type Output = Array1<f64>;

    #[inline]
    fn rebuild(
        &self,
        values: Vec<f64>,
        _validity: Option<Bitmask>,
    ) -> Result<Array1<f64>, KernelError> {
        Ok(Array1::from_vec(values))
    }
}

impl<S, T> Shaped<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
    T: Copy,
{
    #[inline]
    fn shape(&self) -> Shape {
        let (rows, cols) = self.dim();
        Shape::Matrix { rows, cols }
    }

    fn elements(&self) -> Cow<'_, [T]> {
        // `as_slice` is only `Some` for standard (row-major) layout
        match self.as_slice() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(self.iter().copied().collect()),
        }
    }
}

impl<S, T> ShapeCarrier<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
    T: Copy,
{
    type Output = Array2<f64>;

    fn rebuild(
        &self,
        values: Vec<f64>,
        _validity: Option<Bitmask>,
    ) -> Result<Array2<f64>, KernelError> {
        let (rows, cols) = self.dim();
        let len = values.len();
        Array2::from_shape_vec((rows, cols), values).map_err(|e| {
            KernelError::ShapeMismatch(format!(
                "rebuild => cannot place {len} values in matrix {rows}x{cols}: {e}"
            ))
        })
    }
}

impl Shaped<f64> for FloatArray<f64> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.data.len())
    }

    #[inline]
    fn elements(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(&self.data[..])
    }

    #[inline]
    fn validity(&self) -> Option<&Bitmask> {
        self.null_mask.as_ref()
    }
}

impl ShapeCarrier<f64> for FloatArray<f64> {
    type Output = FloatArray<f64>;

    fn rebuild(
        &self,
        values: Vec<f64>,
        validity: Option<Bitmask>,
    ) -> Result<FloatArray<f64>, KernelError> {
        let mut out = FloatArray::from_slice(&values);
        out.null_mask = validity;
        Ok(out)
    }
}

/// Per-element view of a parameter container against an input shape.
#[derive(Debug, Clone)]
pub enum Broadcast<'a, P: Copy> {
    /// One parameter set for every element.
    Shared(P),
    /// One parameter set per element, in the input's logical order.
    PerElement(Cow<'a, [P]>),
}

impl<P: Copy> Broadcast<'_, P> {
    /// Parameter set for element `i`.
    #[inline(always)]
    pub fn get(&self, i: usize) -> P {
        match self {
            Broadcast::Shared(p) => *p,
            Broadcast::PerElement(ps) => ps[i],
        }
    }
}

/// Lines up `params` with an input of shape `target`.
///
/// Scalar parameters are shared; anything else must have exactly the input's shape.
pub fn broadcast_params<'a, P, D>(
    params: &'a D,
    target: Shape,
    fname: &str,
) -> Result<Broadcast<'a, P>, KernelError>
where
    P: Copy,
    D: Shaped<P> + ?Sized,
{
    let shape = Shaped::<P>::shape(params);
    if shape == Shape::Scalar {
        return match params.elements().first() {
            Some(&p) => Ok(Broadcast::Shared(p)),
            None => Err(KernelError::ShapeMismatch(format!(
                "{fname} => scalar parameter container is empty"
            ))),
        };
    }
    if shape != target {
        let msg = crate::errors::log_shape_mismatch(fname, target, shape);
        log::debug!("{msg}");
        return Err(KernelError::ShapeMismatch(msg));
    }
    Ok(Broadcast::PerElement(params.elements()))
}
