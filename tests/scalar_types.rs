//! Compile-time guards on the scalar and vector types.
use actor_script::{Angle, Fixed, Momentum, V3Fixed};
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_ne_all};

assert_impl_all!(Fixed: Copy, Send, Sync, Eq, std::hash::Hash);
assert_impl_all!(Angle: Copy, Send, Sync, Eq, std::hash::Hash);
assert_impl_all!(V3Fixed: Copy, Default, Eq);
assert_type_ne_all!(Fixed, Angle, i32, u32);
assert_not_impl_any!(Fixed: From<i64>, From<u32>);
assert_not_impl_any!(Angle: From<i64>, From<i32>);
assert_type_ne_all!(V3Fixed, Momentum);
