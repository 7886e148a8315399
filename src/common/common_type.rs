//! Pairwise `common_type`.
//!
//! ```text
//! common_type<T, U>
//!   = common_type<decay T, decay U>           (registration is keyed on objects)
//!   1. T's entry for U                        (user specialization)
//!   2. decay(false ? declval<T>() : declval<U>())
//!   3. decay(false ? clref<T> : clref<U>)
//!   4. Nonesuch
//! ```
//!
//! Each step is a query; a later step is resolved only when the earlier one
//! came out `Nonesuch`.

use core::marker::PhantomData;

use crate::model::{Canon, Nonesuch, ObjOf, Object, Ty, TypeSpecs, ValidOf};
use crate::primitives::{And, Branch, FirstValid, Ready, Resolve};
use crate::relation::conditional::{Conditional, ConditionalOf};
use crate::transform::{AddRref, Clref, Decay};

/// `common_type<T, U>`, or `Nonesuch`.
pub type CommonType2<T, U> = <CommonTypeOf<T, U> as Resolve>::Out;

/// Query for [`CommonType2`].
pub struct CommonTypeOf<T, U>(PhantomData<(T, U)>);

type BothValid<A, B> = And<ValidOf<A>, ValidOf<B>>;

impl<T: Ty, U: Ty> Resolve for CommonTypeOf<T, U>
where
    BothValid<Decay<T>, Decay<U>>: Branch<Decayed<Decay<T>, Decay<U>>, Ready<Nonesuch>>,
{
    type Out =
        <BothValid<Decay<T>, Decay<U>> as Branch<Decayed<Decay<T>, Decay<U>>, Ready<Nonesuch>>>::Out;
}

/// The registered `common_type` for the ordered pair, or `Nonesuch`.
pub type Specialized<A, B> = Canon<<<ObjOf<A> as Object>::CommonTypes as TypeSpecs>::Lookup<ObjOf<B>>>;

/// Two valid decayed operands.
pub struct Decayed<A, B>(PhantomData<(A, B)>);

impl<A: Ty, B: Ty> Resolve for Decayed<A, B>
where
    FirstValid<Specialized<A, B>, ByValue<A, B>>: Resolve,
{
    type Out = <FirstValid<Specialized<A, B>, ByValue<A, B>> as Resolve>::Out;
}

/// `decay(false ? declval<A>() : declval<B>())`, then [`ByConstRef`].
pub struct ByValue<A, B>(PhantomData<(A, B)>);

impl<A: Ty, B: Ty> Resolve for ByValue<A, B>
where
    ConditionalOf<AddRref<A>, AddRref<B>>: Resolve,
    FirstValid<Decay<Conditional<AddRref<A>, AddRref<B>>>, ByConstRef<A, B>>: Resolve,
{
    type Out = <FirstValid<Decay<Conditional<AddRref<A>, AddRref<B>>>, ByConstRef<A, B>> as Resolve>::Out;
}

/// `decay(false ? clref<A> : clref<B>)`.
pub struct ByConstRef<A, B>(PhantomData<(A, B)>);

impl<A: Ty, B: Ty> Resolve for ByConstRef<A, B>
where
    ConditionalOf<Clref<A>, Clref<B>>: Resolve,
{
    type Out = Decay<Conditional<Clref<A>, Clref<B>>>;
}
