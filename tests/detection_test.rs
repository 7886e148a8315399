#![recursion_limit = "1024"]

use tola_concepts::prelude::*;
use tola_concepts::{
    is_detected_convertible, is_detected_exact, ClrefOp, CommonReferenceOp, CommonTypeOp,
    ConditionalOp, DecayOp, DetectedOr, DetectedT, InvokeResultOp, RemoveCvrefOp, RrefOp, Select,
};
use tola_concepts::model::CvOf;
use tola_concepts::primitives::{And, Not, Peano, S, Z};
use tola_concepts::{AddLref, CvQual};

#[derive(Object)]
pub struct Widget;

#[derive(Object)]
pub struct Gadget;

// Gadget operator()(const Widget&, int)
#[derive(Object)]
#[object(invoke(fn(ty!(const Widget &), i32) -> Gadget))]
pub struct Assembler;

type Arity1<Args> = <<Args as TyList>::Len as Peano>::Eq<S<Z>>;
type NotConst<T> = Not<<CvOf<T> as CvQual>::IsConst>;

/// `T&`, only for one non-const argument.
struct MutableLvalue;

impl<Args: TyList> Operation<Args> for MutableLvalue {
    type Apply =
        Select<And<Arity1<Args>, NotConst<Args::First>>, AddLref<Args::First>, Nonesuch>;
}

#[test]
fn test_detected_t() {
    assert_ty!(DetectedT<CommonTypeOp, (i32, ty!(u8 &))>, i32);
    assert_ty!(DetectedT<CommonReferenceOp, (ty!(i32 &), ty!(const i32 &))>, ty!(const i32 &));
    assert_ty!(DetectedT<ConditionalOp, (ty!(i32 &), ty!(i32 &))>, ty!(i32 &));
    assert_ty!(DetectedT<DecayOp, (ty!(const volatile Widget &),)>, Widget);
    assert_ty!(DetectedT<ClrefOp, (ty!(Widget &&),)>, ty!(const Widget &));
    assert_ty!(DetectedT<RrefOp, (ty!(const Widget &),)>, ty!(const Widget &&));
    assert_ty!(DetectedT<RemoveCvrefOp, (ty!(volatile Gadget &&),)>, Gadget);
}

#[test]
fn test_invoke_result() {
    assert_ty!(DetectedT<InvokeResultOp, (Assembler, ty!(Widget &), u8)>, Gadget);
    assert_ty!(DetectedT<InvokeResultOp, (ty!(Assembler &&), Widget, i64)>, Gadget);
    assert!(!is_detected::<InvokeResultOp, (Assembler, Widget)>());
    assert!(!is_detected::<InvokeResultOp, (Assembler, Gadget, i32)>());
    assert!(!is_detected::<InvokeResultOp, (Widget,)>());
}

#[test]
fn test_is_detected() {
    assert!(is_detected::<CommonTypeOp, (Widget, ty!(Widget &))>());
    assert!(!is_detected::<CommonTypeOp, (Widget, Gadget)>());
    assert!(!is_detected::<ConditionalOp, (Widget, i32)>());
    assert!(!is_detected::<RrefOp, (Widget, Widget)>());
}

#[test]
fn test_user_operation() {
    assert!(is_detected::<MutableLvalue, (Widget,)>());
    assert!(!is_detected::<MutableLvalue, (ty!(const Widget),)>());
    assert!(!is_detected::<MutableLvalue, (Widget, Gadget)>());
    assert!(!is_detected::<MutableLvalue, (Nonesuch,)>());
    assert_ty!(DetectedT<MutableLvalue, (ty!(volatile i32 &&),)>, ty!(volatile i32 &));
}

#[test]
fn test_detected_or() {
    assert_ty!(DetectedOr<Gadget, CommonTypeOp, (Widget, Widget)>, Widget);
    assert_ty!(DetectedOr<Gadget, CommonTypeOp, (Widget, Gadget)>, Gadget);
    // The caller's default is returned, not the sentinel.
    assert!(!is_same::<DetectedOr<Gadget, CommonTypeOp, (Widget, Gadget)>, Nonesuch>());
}

#[test]
fn test_detected_exact() {
    assert!(is_detected_exact::<i64, CommonTypeOp, (i64, i32)>());
    assert!(!is_detected_exact::<i32, CommonTypeOp, (i64, i32)>());
    assert!(!is_detected_exact::<Nonesuch, CommonTypeOp, (Widget, Gadget)>());
    assert!(is_detected_exact::<ty!(const Widget &), ClrefOp, (Widget,)>());
}

#[test]
fn test_detected_convertible() {
    assert!(is_detected_convertible::<f64, CommonTypeOp, (i32, u8)>());
    assert!(is_detected_convertible::<ty!(const Widget &), DecayOp, (ty!(Widget &),)>());
    assert!(!is_detected_convertible::<ty!(Widget &), DecayOp, (ty!(Widget &),)>());
    assert!(!is_detected_convertible::<Widget, CommonTypeOp, (Widget, Gadget)>());
}

#[test]
fn test_sentinel_is_unique_and_shared() {
    type FromCommonType = DetectedT<CommonTypeOp, (Widget, Gadget)>;
    type FromConditional = DetectedT<ConditionalOp, (Widget, Gadget)>;
    type FromArity = DetectedT<DecayOp, ()>;

    assert!(is_same::<FromCommonType, FromConditional>());
    assert!(is_same::<FromConditional, FromArity>());
    assert!(is_same::<FromArity, Nonesuch>());

    assert!(!is_same::<Nonesuch, Widget>());
    assert!(!is_same::<Nonesuch, i32>());
    assert!(!is_same::<Nonesuch, ty!(const bool &)>());
}
