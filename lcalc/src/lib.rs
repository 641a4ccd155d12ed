//! An untyped lambda calculus engine: terms as owned trees, single-step
//! reduction under normal order and call-by-name, and alpha-equivalence via a
//! binder-independent canonical encoding.

#[cfg(test)]
macro_rules! var {
    ($n:expr) => {
        $crate::term::Term::Var($n)
    };
}
#[cfg(test)]
macro_rules! lambda {
    ($x:expr, $body: expr) => {
        $crate::term::Term::Abs($x, $body.into())
    };
}
#[cfg(test)]
macro_rules! apply {
    ($lhs:expr, $rhs: expr) => {
        $crate::term::Term::Apply($lhs.into(), $rhs.into())
    };
}

mod alpha;
mod reduce;
mod term;

pub use alpha::{alpha_equivalent, canonicalize, Canonical};
pub use reduce::{
    beta_reduce, call_by_name_step, normal_order_step, substitute, CallByName, NormalOrder,
    ParseStrategyError, ReductionStrategy, Strategy,
};
pub use term::{Id, Term};
