//! Per-element capabilities used by the broadcast operations.
//!
//! # Responsibility
//! - Declare what an element must support for call and magnitude
//!   broadcasts.
//! - Provide implementations for element types that always qualify.
//!
//! # Invariants
//! - `None` from a capability method means "this element does not support
//!   the operation"; broadcasts translate it into an all-or-nothing error.

/// Capability for elements that may be invoked during a call broadcast.
///
/// Function pointers and boxed closures are always callable. Heterogeneous
/// value types can implement this per variant and return `None` for
/// variants that cannot be invoked. Coherence rules out a blanket impl for
/// every `F: Fn(A) -> R` next to such manual impls, so closure elements
/// take part as `fn` pointers or `Box<dyn Fn>`.
pub trait Callable<A> {
    /// Result type of a successful invocation.
    type Output;

    /// Invokes the element, or returns `None` when it is not callable.
    fn try_call(&self, args: A) -> Option<Self::Output>;
}

impl<A, R> Callable<A> for fn(A) -> R {
    type Output = R;

    fn try_call(&self, args: A) -> Option<R> {
        Some(self(args))
    }
}

impl<A, R> Callable<A> for Box<dyn Fn(A) -> R> {
    type Output = R;

    fn try_call(&self, args: A) -> Option<R> {
        Some(self(args))
    }
}

/// Capability for elements with an absolute-value/magnitude operation.
pub trait Magnitude {
    /// Result type of the magnitude operation.
    type Output;

    /// Returns the magnitude, or `None` when the element has no magnitude.
    fn magnitude(&self) -> Option<Self::Output>;
}

macro_rules! magnitude_for_float {
    ($($ty:ty),*) => {$(
        impl Magnitude for $ty {
            type Output = $ty;

            fn magnitude(&self) -> Option<$ty> {
                Some(self.abs())
            }
        }
    )*};
}

macro_rules! magnitude_for_signed {
    ($($ty:ty),*) => {$(
        impl Magnitude for $ty {
            type Output = $ty;

            /// `MIN` has no representable magnitude and yields `None`.
            fn magnitude(&self) -> Option<$ty> {
                self.checked_abs()
            }
        }
    )*};
}

macro_rules! magnitude_for_unsigned {
    ($($ty:ty),*) => {$(
        impl Magnitude for $ty {
            type Output = $ty;

            fn magnitude(&self) -> Option<$ty> {
                Some(*self)
            }
        }
    )*};
}

magnitude_for_float!(f32, f64);
magnitude_for_signed!(i8, i16, i32, i64, i128, isize);
magnitude_for_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::{Callable, Magnitude};

    #[test]
    fn function_pointers_are_always_callable() {
        fn double(value: i32) -> i32 {
            value * 2
        }
        let element: fn(i32) -> i32 = double;
        assert_eq!(element.try_call(21), Some(42));
    }

    #[test]
    fn boxed_closures_are_always_callable() {
        let offset = 10;
        let element: Box<dyn Fn(i32) -> i32> = Box::new(move |value| value + offset);
        assert_eq!(element.try_call(5), Some(15));
    }

    #[test]
    fn float_magnitude_is_abs() {
        assert_eq!((-2.5_f64).magnitude(), Some(2.5));
        assert_eq!(3.0_f32.magnitude(), Some(3.0));
    }

    #[test]
    fn signed_magnitude_is_checked_abs() {
        assert_eq!((-7_i32).magnitude(), Some(7));
        assert_eq!(i32::MIN.magnitude(), None);
        assert_eq!(i64::MIN.magnitude(), None);
    }

    #[test]
    fn unsigned_magnitude_is_identity() {
        assert_eq!(9_u8.magnitude(), Some(9));
        assert_eq!(0_usize.magnitude(), Some(0));
    }
}
