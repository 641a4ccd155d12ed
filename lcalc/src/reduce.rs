use thiserror::Error;
use tracing::{debug, trace};

use crate::term::{Id, Term};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseStrategyError {
    #[error("Unknown reduction strategy `{0}`")]
    UnknownStrategy(String),
}

/// Replaces every free occurrence of `target` in `term` with a copy of `value`.
///
/// Binders are never renamed, so a free variable of `value` is captured if a
/// binder on the way down introduces the same identifier.
pub fn substitute(term: &mut Term, target: Id, value: &Term) {
    match term {
        Term::Var(x) => {
            if *x == target {
                *term = value.clone();
            }
        }
        Term::Abs(x, body) => {
            if *x != target {
                substitute(body, target, value);
            }
        }
        Term::Apply(lhs, rhs) => {
            substitute(lhs, target, value);
            substitute(rhs, target, value);
        }
    }
}

/// Rewrites `(lambda x. t) s` into `t[x := s]` in place. Returns `false` and
/// leaves `term` untouched if it is not a redex.
pub fn beta_reduce(term: &mut Term) -> bool {
    if !term.is_redex() {
        return false;
    }
    let (var, body, arg) = match std::mem::replace(term, Term::Var(0)) {
        Term::Apply(lhs, arg) => match *lhs {
            Term::Abs(var, body) => (var, body, arg),
            _ => unreachable!("Something went wrong: a redex must apply an abstraction."),
        },
        _ => unreachable!("Something went wrong: a redex must be an application."),
    };
    trace!(var, "beta-reducing redex");
    *term = *body;
    substitute(term, var, &arg);
    true
}

/// One leftmost-outermost step. A node that is still an application after
/// trying the root redex has both of its children stepped as well.
pub fn normal_order_step(term: &mut Term) {
    fn rec(term: &mut Term) {
        match term {
            Term::Apply(_, _) => {
                beta_reduce(term);
                if let Term::Apply(lhs, rhs) = term {
                    rec(lhs);
                    rec(rhs);
                }
            }
            Term::Abs(_, body) => rec(body),
            Term::Var(_) => {}
        }
    }
    debug!(%term, "normal order step");
    rec(term)
}

/// One weak-head step: never reduces under a binder.
pub fn call_by_name_step(term: &mut Term) {
    fn rec(term: &mut Term) {
        let lhs = match term {
            Term::Apply(lhs, _) => lhs,
            // Abstractions and variables are already in weak head normal form.
            Term::Abs(_, _) | Term::Var(_) => return,
        };
        rec(lhs);
        if matches!(lhs.as_ref(), Term::Abs(_, _)) {
            beta_reduce(term);
        } else if let Term::Apply(_, rhs) = term {
            rec(rhs);
        }
    }
    debug!(%term, "call-by-name step");
    rec(term)
}

pub trait ReductionStrategy {
    fn step(term: &mut Term);
}

pub enum NormalOrder {}

impl ReductionStrategy for NormalOrder {
    fn step(term: &mut Term) {
        normal_order_step(term)
    }
}

pub enum CallByName {}

impl ReductionStrategy for CallByName {
    fn step(term: &mut Term) {
        call_by_name_step(term)
    }
}

/// A reduction strategy chosen at runtime.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, derive_more::Display, Debug)]
pub enum Strategy {
    #[default]
    #[display(fmt = "normal-order")]
    NormalOrder,
    #[display(fmt = "call-by-name")]
    CallByName,
}

impl Strategy {
    pub fn step(self, term: &mut Term) {
        match self {
            Strategy::NormalOrder => NormalOrder::step(term),
            Strategy::CallByName => CallByName::step(term),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" | "normal-order" => Ok(Strategy::NormalOrder),
            "cbn" | "call-by-name" => Ok(Strategy::CallByName),
            other => Err(ParseStrategyError::UnknownStrategy(other.to_string())),
        }
    }
}
