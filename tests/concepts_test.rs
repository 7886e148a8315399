#![recursion_limit = "1024"]

use tola_concepts::concepts::*;
use tola_concepts::prelude::*;
use tola_concepts::{Clause, CommonTypeOp, DecayOp, InvokeResult};

#[derive(Object)]
pub struct Base;

#[derive(Object)]
#[object(bases(Base))]
pub struct Derived;

#[derive(Object)]
pub struct NotDerived;

// A(B), A(C), A(D): converting constructors.
#[derive(Object)]
#[object(converts_from(B, C, D), common_type(B => A, C => A, D => A))]
pub struct A;

// B(int)
#[derive(Object)]
#[object(converts_from(i32), common_type(A => A, C => A, D => A))]
pub struct B;

// Only explicit conversions to and from int.
#[derive(Object)]
#[object(common_type(A => A, B => A))]
pub struct C;

// D(B), D(C)
#[derive(Object)]
#[object(converts_from(B, C), common_type(B => A))]
pub struct D;

// Declares a common type with `Base` that `Base` does not declare back.
#[derive(Object)]
#[object(common_type(Base => Base))]
pub struct Lopsided;

// operator== and operator<=> for itself
#[derive(Object)]
#[object(eq(Self), ord(Self))]
pub struct Celsius;

// operator== with itself and with Base, hence with anything derived from Base
#[derive(Object)]
#[object(eq(Self, Base))]
pub struct Tag;

// operator bool()
#[derive(Object)]
#[object(converts_to(bool))]
pub struct Flag;

// bool operator()(int, int)
#[derive(Object)]
#[object(invoke(fn(i32, i32) -> bool))]
pub struct Less;

// int operator()(const Base&), Flag operator()()
#[derive(Object)]
#[object(invoke(fn(ty!(const Base &)) -> i32, fn() -> Flag))]
pub struct Visitor;

// Base operator()()
#[derive(Object)]
#[object(invoke(fn() -> Base))]
pub struct Factory;

fn holds<K: Clause>() -> bool {
    <K::Holds as tola_concepts::Bool>::VALUE
}

#[test]
fn test_same() {
    assert!(same::<Base, Base>());
    assert!(same::<ty!(const Base &), Qual<Base, tola_concepts::Const, tola_concepts::LRef>>());
    assert!(!same::<Base, Derived>());
    assert!(!same::<Base, ty!(Base &)>());
}

#[test]
fn test_derived_from() {
    assert!(derived_from::<Derived, Base>());
    assert!(derived_from::<Base, Base>());
    assert!(!derived_from::<Base, Derived>());
    assert!(!derived_from::<NotDerived, Base>());
    assert!(!derived_from::<i32, i32>());
}

#[test]
fn test_convertible_to() {
    assert!(convertible_to::<Derived, Base>());
    assert!(convertible_to::<ty!(Derived &), ty!(const Base &)>());
    assert!(!convertible_to::<Base, Derived>());
    assert!(!convertible_to::<ty!(const Derived &), ty!(Base &)>());
    assert!(convertible_to::<i32, B>());
    assert!(!convertible_to::<C, i32>());
}

#[test]
fn test_common_reference_with() {
    assert!(common_reference_with::<i32, i32>());
    assert!(common_reference_with::<ty!(i32 &), ty!(i32 &)>());
    assert!(common_reference_with::<ty!(i32 &&), ty!(i32 &&)>());
    assert!(common_reference_with::<ty!(const i32 &), ty!(i32 &)>());
    assert!(common_reference_with::<ty!(i32 &&), ty!(const i32 &)>());
    assert!(common_reference_with::<ty!(const i32 &), ty!(i32 &&)>());
    assert!(!common_reference_with::<i32, Nonesuch>());
    assert!(!common_reference_with::<Base, NotDerived>());
}

#[test]
fn test_common_with() {
    assert!(common_with::<i32, i32>());
    assert!(common_with::<A, A>());
    assert!(common_with::<B, i32>());
    assert!(common_with::<i32, B>());
    assert!(!common_with::<C, i32>());

    assert!(common_with::<A, B>());
    assert!(common_with::<B, A>());
    assert!(common_with::<A, C>());
    assert!(common_with::<C, A>());
    assert!(common_with::<B, C>());
    assert!(common_with::<C, B>());
    assert!(common_with::<B, D>());
}

#[test]
fn test_common_with_needs_both_orders() {
    assert!(!common_with::<Lopsided, Base>());
    assert!(!common_with::<Base, Lopsided>());
    // D(C) is implicit, so no registration is needed
    assert!(common_with::<C, D>());
}

#[test]
fn test_assignable() {
    assert!(assignable::<ty!(Base &), Derived>());
    assert!(assignable::<ty!(Base &), ty!(const Base &)>());
    assert!(assignable::<ty!(i32 &), ty!(i16 &&)>());
    assert!(!assignable::<ty!(Derived &), Base>());
    assert!(!assignable::<ty!(const Base &), Base>());
    // rvalue-reference left-hand sides are never assignable
    assert!(!assignable::<ty!(Base &&), Base>());
    assert!(!assignable::<ty!(i32 &&), i32>());
}

#[test]
fn test_construction() {
    assert!(destructible::<ty!(Base &)>());
    assert!(!destructible::<Nonesuch>());

    assert!(constructible::<Base, ()>());
    assert!(constructible::<Base, (Derived,)>());
    assert!(constructible::<ty!(const Base &), (ty!(Derived &&),)>());
    assert!(!constructible::<ty!(Base &), (ty!(Derived &&),)>());
    assert!(constructible::<B, (i32,)>());

    assert!(move_constructible::<Base>());
    assert!(move_constructible::<ty!(Base &)>());
    assert!(!move_constructible::<ty!(volatile Base)>());

    assert!(copy_constructible::<Base>());
    assert!(copy_constructible::<ty!(const i32)>());
    assert!(copy_constructible::<ty!(Base &)>());
    assert!(!copy_constructible::<ty!(Base &&)>());
}

#[test]
fn test_detection_concepts() {
    assert!(holds::<Detected<CommonTypeOp, (A, B)>>());
    assert!(!holds::<Detected<CommonTypeOp, (C, i32)>>());
    assert!(holds::<DetectedExact<A, CommonTypeOp, (B, C)>>());
    assert!(!holds::<DetectedExact<B, CommonTypeOp, (B, C)>>());
    assert!(holds::<DetectedConvertible<ty!(const Base &), DecayOp, (ty!(Derived &&),)>>());
}

#[test]
fn test_default_constructible() {
    assert!(default_constructible::<Base>());
    assert!(default_constructible::<ty!(const i32)>());
    assert!(!default_constructible::<ty!(Base &)>());
    assert!(!default_constructible::<Nonesuch>());
}

#[test]
fn test_swappable() {
    assert!(swappable::<Base>());
    assert!(swappable::<ty!(i32 &)>());
    assert!(!swappable::<ty!(const Base)>());

    assert!(swappable_with::<ty!(Base &), ty!(Base &)>());
    assert!(!swappable_with::<ty!(Base &), ty!(Derived &)>());
    assert!(!swappable_with::<Base, Base>());
    assert!(!swappable_with::<ty!(const Base &), ty!(const Base &)>());
}

#[test]
fn test_boolean() {
    assert!(boolean::<bool>());
    assert!(boolean::<ty!(const bool &)>());
    assert!(boolean::<i32>());
    assert!(boolean::<Flag>());
    assert!(!boolean::<Base>());
    assert!(!boolean::<Celsius>());
}

#[test]
fn test_equality_comparable() {
    assert!(equality_comparable::<i32>());
    assert!(equality_comparable::<ty!(const f64 &)>());
    assert!(equality_comparable::<Celsius>());
    // through `operator bool()`
    assert!(equality_comparable::<Flag>());
    assert!(!equality_comparable::<Base>());
    assert!(!equality_comparable::<Nonesuch>());
}

#[test]
fn test_registered_equality_reaches_derived_operands() {
    assert!(weakly_equality_comparable_with::<Tag, Base>());
    assert!(weakly_equality_comparable_with::<Tag, ty!(const Derived &)>());
    assert!(weakly_equality_comparable_with::<Derived, Tag>());
    assert!(!weakly_equality_comparable_with::<Tag, NotDerived>());
    assert!(!weakly_equality_comparable_with::<Base, Derived>());
}

#[test]
fn test_equality_comparable_with() {
    assert!(equality_comparable_with::<i32, f64>());
    assert!(equality_comparable_with::<Celsius, ty!(const Celsius &)>());
    assert!(!equality_comparable_with::<Celsius, i32>());
    // Base itself has no `==`
    assert!(!equality_comparable_with::<Tag, Base>());
}

#[test]
fn test_strict_totally_ordered() {
    assert!(strict_totally_ordered::<u64>());
    assert!(strict_totally_ordered::<Celsius>());
    assert!(!strict_totally_ordered::<Tag>());
    assert!(strict_totally_ordered_with::<i32, ty!(const f32 &)>());
    assert!(!strict_totally_ordered_with::<Celsius, f64>());
}

#[test]
fn test_object_concepts() {
    assert!(movable::<Base>());
    assert!(!movable::<ty!(Base &)>());
    assert!(copyable::<Base>());
    assert!(!copyable::<ty!(const Base)>());
    assert!(semiregular::<Base>());
    assert!(!regular::<Base>());
    assert!(regular::<Celsius>());
    assert!(regular::<i64>());
}

#[test]
fn test_invocable() {
    assert!(invocable::<Less, (i32, i32)>());
    assert!(invocable::<Less, (i16, ty!(const i64 &))>());
    assert!(!invocable::<Less, (i32,)>());
    assert!(!invocable::<Less, (Base, i32)>());

    assert!(regular_invocable::<Visitor, (Derived,)>());
    assert!(invocable::<ty!(const Visitor &), ()>());
    assert!(!invocable::<Visitor, (NotDerived,)>());
    assert!(!invocable::<Base, ()>());

    assert_ty!(InvokeResult<Visitor, (ty!(Derived &),)>, i32);
    assert_ty!(InvokeResult<Visitor, ()>, Flag);
}

#[test]
fn test_predicate_and_relation() {
    assert!(predicate::<Less, (u8, u8)>());
    assert!(predicate::<Visitor, ()>());
    assert!(invocable::<Factory, ()>());
    assert!(!predicate::<Factory, ()>());

    assert!(relation::<Less, i32, i16>());
    assert!(strict_weak_order::<Less, u8, ty!(const i64 &)>());
    assert!(!relation::<Less, i32, Base>());
    assert!(!relation::<Visitor, Base, Derived>());
}
