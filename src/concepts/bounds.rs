//! Foundational predicates over arbitrary types.
//!
//! Every predicate here is a trait with a blanket impl, so any type meeting the
//! underlying bounds satisfies it automatically. A predicate that does not hold
//! is a type-checking failure at the use site; nothing is evaluated at runtime.
//!
//! Each predicate is written only in terms of predicates declared above it.

use num_traits::{PrimInt, Signed};

/// `X` and `Y` denote the identical type.
pub trait Same<Y: ?Sized> {}
impl<T: ?Sized> Same<T> for T {}

/// Copy construction (`clone`) and copy assignment (`clone_from`).
pub trait Copyable: Clone {}
impl<T: Clone> Copyable for T {}

pub trait DefaultConstructible: Default {}
impl<T: Default> DefaultConstructible for T {}

/// Owned values of the type can be dropped.
///
/// Unsized types (`str`, `[T]`, `dyn Trait`) only exist behind a pointer and
/// fail this predicate.
pub trait Destructible: Sized {}
impl<T> Destructible for T {}

/// Destruction cannot report a failure.
///
/// `Drop::drop` has no error channel, so every destructible type qualifies.
pub trait NothrowDestructible: Destructible {}
impl<T> NothrowDestructible for T {}

/// `x == x` and `x != x` are well-formed and yield `bool`.
pub trait EqualityComparable: PartialEq {}
impl<T: PartialEq + ?Sized> EqualityComparable for T {}

/// Cross-type equality in both directions, with each side individually
/// [`EqualityComparable`].
pub trait EqualityComparableWith<Y: ?Sized>: EqualityComparable + PartialEq<Y> {}
impl<X, Y> EqualityComparableWith<Y> for X
where
    X: EqualityComparable + PartialEq<Y> + ?Sized,
    Y: EqualityComparable + PartialEq<X> + ?Sized,
{
}

/// `<`, `>`, `<=`, `>=` are well-formed and yield `bool`.
///
/// `PartialOrd` carries `PartialEq` as a supertrait, so in Rust every weakly
/// ordered type is also equality comparable.
pub trait WeaklyOrdered: PartialOrd {}
impl<T: PartialOrd + ?Sized> WeaklyOrdered for T {}

pub trait TotallyOrdered: WeaklyOrdered + EqualityComparable {}
impl<T: WeaklyOrdered + EqualityComparable + ?Sized> TotallyOrdered for T {}

/// Single values can be boxed and sequences allocated as boxed slices.
pub trait Allocatable: Sized {
    fn allocate(self) -> Box<Self> {
        Box::new(self)
    }

    fn allocate_slice(values: Vec<Self>) -> Box<[Self]> {
        values.into_boxed_slice()
    }
}
impl<T> Allocatable for T {}

pub trait Semiregular: DefaultConstructible + Copyable + Destructible + Allocatable {}
impl<T> Semiregular for T where T: DefaultConstructible + Copyable + Destructible + Allocatable {}

pub trait Regular: Semiregular + EqualityComparable {}
impl<T> Regular for T where T: Semiregular + EqualityComparable {}

/// Primitive integer types.
pub trait Integral: PrimInt {}
impl<T: PrimInt> Integral for T {}

pub trait SignedIntegral: Integral + Signed {}
impl<T: Integral + Signed> SignedIntegral for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    #[derive(Clone, Default)]
    struct Opaque;

    #[derive(Clone)]
    struct NoDefault;

    assert_impl_all!(u8: Same<u8>);
    assert_not_impl_any!(u8: Same<i8>);
    assert_impl_all!(str: Same<str>);

    assert_impl_all!(String: Copyable, DefaultConstructible, Destructible, NothrowDestructible);
    assert_not_impl_any!(str: Destructible, Allocatable, Copyable);
    assert_not_impl_any!(std::sync::Mutex<u8>: Copyable);

    assert_impl_all!(i32: EqualityComparable, WeaklyOrdered, TotallyOrdered);
    assert_impl_all!(f64: TotallyOrdered, Regular);
    assert_impl_all!(str: EqualityComparable, TotallyOrdered);
    assert_not_impl_any!(Opaque: EqualityComparable, WeaklyOrdered, Regular);

    assert_impl_all!(String: EqualityComparableWith<str>, EqualityComparableWith<String>);
    assert_impl_all!(str: EqualityComparableWith<String>);
    assert_not_impl_any!(String: EqualityComparableWith<i32>);

    assert_impl_all!(Opaque: Semiregular);
    assert_not_impl_any!(NoDefault: Semiregular, Regular);
    assert_impl_all!(Vec<u8>: Regular);
    assert_impl_all!(Option<&'static str>: Regular);

    assert_impl_all!(u64: Integral);
    assert_impl_all!(i64: Integral, SignedIntegral);
    assert_impl_all!(isize: SignedIntegral);
    assert_not_impl_any!(u64: SignedIntegral);
    assert_not_impl_any!(f32: Integral, SignedIntegral);

    #[test]
    fn allocatable_boxes_values_and_slices() {
        let b = 7u16.allocate();
        assert_eq!(*b, 7);
        let s = <String as Allocatable>::allocate_slice(vec!["a".into(), "b".into()]);
        assert_eq!(s.len(), 2);
        assert_eq!(s[1], "b");
    }

    #[test]
    fn copy_assignment_goes_through_clone_from() {
        let src = vec![1, 2, 3];
        let mut dst = Vec::new();
        dst.clone_from(&src);
        assert_eq!(dst, src);
    }
}
