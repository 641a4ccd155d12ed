use rpds::Stack;

use crate::term::{Id, Term};

/// Binders in scope, innermost on top. Each entry maps the binder's original
/// identifier to its positional index.
#[derive(Default, Clone, Debug)]
struct Scope {
    bindings: Stack<(Id, usize)>,
}
impl Scope {
    fn lookup(&self, id: Id) -> Option<usize> {
        self.bindings
            .iter()
            .find_map(|&(bound, index)| (bound == id).then(|| index))
    }
    fn pushed(&self, id: Id, index: usize) -> Self {
        Self {
            bindings: self.bindings.push((id, index)),
        }
    }
}

/// Encoding of a term that is equal for two terms iff they are
/// alpha-equivalent.
///
/// Binders are numbered in order of appearance across the whole term. A bound
/// occurrence is written `V` followed by its binder's number and a free one `F`
/// followed by its own identifier.
#[derive(PartialEq, Eq, Hash, Clone, derive_more::AsRef, derive_more::Display, Debug)]
pub struct Canonical(String);

pub fn canonicalize(term: &Term) -> Canonical {
    struct Encoder<'a>(&'a Term);
    impl std::fmt::Display for Encoder<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            fn fmt_rec(
                term: &Term,
                scope: &Scope,
                next: &mut usize,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                match term {
                    Term::Var(x) => match scope.lookup(*x) {
                        Some(index) => f.write_fmt(format_args!("V{index}")),
                        None => f.write_fmt(format_args!("F{x}")),
                    },
                    Term::Abs(x, body) => {
                        let index = *next;
                        *next += 1;
                        f.write_fmt(format_args!("L{index}."))?;
                        fmt_rec(body, &scope.pushed(*x, index), next, f)
                    }
                    Term::Apply(lhs, rhs) => {
                        f.write_str("[")?;
                        fmt_rec(lhs, scope, next, f)?;
                        f.write_str(",")?;
                        fmt_rec(rhs, scope, next, f)?;
                        f.write_str("]")
                    }
                }
            }
            fmt_rec(self.0, &Scope::default(), &mut 0, f)
        }
    }
    Canonical(Encoder(term).to_string())
}

pub fn alpha_equivalent(lhs: &Term, rhs: &Term) -> bool {
    canonicalize(lhs) == canonicalize(rhs)
}
