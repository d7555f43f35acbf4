// Implements the binary operator "T op T" on top of a `const fn`
// along with "&T op T", "T op &T", "&T op &T", "T op= T" and
// "T op= &T". `T` is expected to be `Copy`able.
macro_rules! binop_impl {
    ($($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident => $const_fn:ident for $t:ty);* $(;)?) => ($(
        impl ::core::ops::$imp for $t {
            type Output = $t;

            #[inline]
            fn $method(self, other: $t) -> $t {
                self.$const_fn(other)
            }
        }

        impl ::core::ops::$imp<$t> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, other: $t) -> $t {
                (*self).$const_fn(other)
            }
        }

        impl ::core::ops::$imp<&$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, other: &$t) -> $t {
                self.$const_fn(*other)
            }
        }

        impl ::core::ops::$imp<&$t> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, other: &$t) -> $t {
                (*self).$const_fn(*other)
            }
        }

        impl ::core::ops::$assign_imp for $t {
            #[inline]
            fn $assign_method(&mut self, other: $t) {
                *self = self.$const_fn(other);
            }
        }

        impl ::core::ops::$assign_imp<&$t> for $t {
            #[inline]
            fn $assign_method(&mut self, other: &$t) {
                *self = self.$const_fn(*other);
            }
        }
    )*)
}
pub(crate) use binop_impl;

// Implements "-T" and "-&T" on top of a `const fn`.
macro_rules! neg_impl {
    ($($const_fn:ident for $t:ty),* $(,)?) => ($(
        impl ::core::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                self.$const_fn()
            }
        }

        impl ::core::ops::Neg for &$t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                (*self).$const_fn()
            }
        }
    )*)
}
pub(crate) use neg_impl;
