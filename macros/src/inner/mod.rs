// Internal macros used by the library itself
//
// - peano: Peano aliases for stream comparison depth and pack arity
// - routing: identity hash streams from type paths
// - identity: exact identity strings compared after the hash

pub mod identity;
pub mod peano;
pub mod routing;
