use std::collections::BTreeSet;

/// Identifier of a variable occurrence or of the variable a binder introduces.
pub type Id = u16;

/// A lambda term. Every sub-term is uniquely owned by its parent.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Term {
    /// `x`
    Var(Id),
    /// `lambda x. t`
    Abs(Id, Box<Term>),
    /// `t t`
    Apply(Box<Term>, Box<Term>),
}

impl Term {
    pub fn variable(id: Id) -> Self {
        Term::Var(id)
    }

    pub fn abstraction(bound: Id, body: Term) -> Self {
        Term::Abs(bound, body.into())
    }

    pub fn application(lhs: Term, rhs: Term) -> Self {
        Term::Apply(lhs.into(), rhs.into())
    }

    /// Whether this term is `(lambda x. t) s`.
    pub fn is_redex(&self) -> bool {
        matches!(self, Term::Apply(lhs, _) if matches!(lhs.as_ref(), Term::Abs(_, _)))
    }

    pub fn free_variables(&self) -> BTreeSet<Id> {
        fn rec(term: &Term, bound: &mut Vec<Id>, free: &mut BTreeSet<Id>) {
            match term {
                Term::Var(x) => {
                    if !bound.contains(x) {
                        free.insert(*x);
                    }
                }
                Term::Abs(x, body) => {
                    bound.push(*x);
                    rec(body, bound, free);
                    assert_eq!(Some(*x), bound.pop());
                }
                Term::Apply(lhs, rhs) => {
                    rec(lhs, bound, free);
                    rec(rhs, bound, free);
                }
            }
        }
        let mut free = BTreeSet::new();
        rec(self, &mut vec![], &mut free);
        free
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::Abs(_, body) => 1 + body.size(),
            Term::Apply(lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(x) => f.write_fmt(format_args!("x{x}")),
            Term::Abs(x, body) => f.write_fmt(format_args!("lambda x{x}. {body}")),
            Term::Apply(lhs, rhs) => f.write_fmt(format_args!("({lhs} {rhs})")),
        }
    }
}
