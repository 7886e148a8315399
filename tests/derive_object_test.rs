#![recursion_limit = "1024"]

use tola_concepts::prelude::*;
use tola_concepts::is_base_of;

// Same name, different modules: identity comes from the module path.
mod a {
    use super::*;
    #[derive(Object)]
    pub struct S;
}

mod b {
    use super::*;
    #[derive(Object)]
    pub struct S;
}

mod c {
    use super::*;
    #[derive(Object)]
    #[object(bases(super::a::S))]
    pub struct S;
}

#[derive(Object)]
pub struct Grand;

#[derive(Object)]
#[object(bases(Grand))]
pub struct Parent;

#[derive(Object)]
#[object(bases(Parent))]
pub struct Child;

#[derive(Object)]
pub struct Mixin;

#[derive(Object)]
#[object(bases(Child, Mixin))]
pub struct Leaf;

#[derive(Object)]
#[allow(dead_code)]
pub enum Mode {
    On,
    Off,
}

#[derive(Object)]
#[object(converts_from(Mode, u8), converts_to(Grand))]
pub struct Switch;

// operator int()
#[derive(Object)]
#[object(converts_to(i32))]
pub struct ToInt;

// operator Child()
#[derive(Object)]
#[object(converts_to(Child))]
pub struct ToChild;

#[test]
fn test_module_path_identity() {
    assert!(is_same::<a::S, a::S>());
    assert!(!is_same::<a::S, b::S>());
    assert!(!is_same::<b::S, c::S>());
    assert!(!is_same::<a::S, c::S>());
    assert!(is_base_of::<a::S, c::S>());
    assert!(!is_base_of::<b::S, c::S>());
}

#[test]
fn test_transitive_bases() {
    assert!(is_base_of::<Grand, Parent>());
    assert!(is_base_of::<Grand, Child>());
    assert!(is_base_of::<Grand, Leaf>());
    assert!(is_base_of::<Mixin, Leaf>());
    assert!(!is_base_of::<Leaf, Grand>());
    assert!(!is_base_of::<Mixin, Child>());
    assert!(is_convertible::<ty!(Leaf &), ty!(const Grand &)>());
}

#[test]
fn test_registered_conversions() {
    assert!(is_convertible::<Mode, Switch>());
    assert!(is_convertible::<u8, Switch>());
    assert!(is_convertible::<ty!(const Mode &), Switch>());
    assert!(!is_convertible::<Grand, Switch>());
    assert!(!is_convertible::<Switch, Mode>());

    // a conversion yields a prvalue: only `const T&` and `T&&` bind it
    assert!(is_convertible::<Switch, ty!(const Grand &)>());
    assert!(is_convertible::<Switch, ty!(Grand &&)>());
    assert!(!is_convertible::<Switch, ty!(Grand &)>());
}

#[test]
fn test_standard_conversion_around_user_conversion() {
    // after the conversion operator
    assert!(is_convertible::<ToInt, i64>());
    assert!(is_convertible::<ToInt, f64>());
    assert!(is_convertible::<ToChild, Grand>());
    assert!(is_convertible::<ToChild, ty!(const Grand &)>());
    assert!(!is_convertible::<ToChild, ty!(Grand &)>());

    // before the converting constructor: int -> u8 -> Switch
    assert!(is_convertible::<i32, Switch>());
    assert!(is_convertible::<i16, Switch>());
    assert!(is_convertible::<ty!(const f64 &), Switch>());

    // two user conversions never chain
    assert!(!is_convertible::<ToInt, Switch>());
    assert!(!is_convertible::<ToChild, Switch>());
}

#[test]
fn test_converted_operand_in_common_type() {
    assert_ty!(common_type!(ToInt, i64), i64);
    assert_ty!(common_type!(i64, ToInt), i64);
    assert_ty!(common_type!(ToChild, Grand), Grand);
}

#[test]
fn test_function_local_modules_stay_distinct() {
    mod m {
        #[derive(tola_concepts::Object)]
        pub struct S;
    }
    type First = m::S;

    let distinct = {
        mod m {
            #[derive(tola_concepts::Object)]
            pub struct S;
        }
        !is_same::<First, m::S>() && is_same::<m::S, m::S>()
    };
    assert!(distinct);
    assert!(is_same::<First, First>());
}

#[test]
fn test_conversions_drive_common_type() {
    assert_ty!(common_type!(Mode, Switch), Switch);
    assert_ty!(common_type!(ty!(Switch &), Grand), Grand);
}

#[cfg(feature = "std")]
#[test]
fn test_type_name() {
    use tola_concepts::type_name;

    assert_eq!(type_name::<Grand>().to_string(), "Grand");
    assert_eq!(type_name::<ty!(const Parent &)>().to_string(), "const Parent&");
    assert_eq!(type_name::<ty!(volatile a::S &&)>().to_string(), "volatile S&&");
    assert_eq!(format!("{:?}", type_name::<Mode>()), "Mode");
}
