/*!
Statements, aka. the atoms of a formula.

A statement is something which is either true or false, without further (boolean) structure.

- A propositional variable, e.g. `p`.
- A predicate applied to some terms, e.g. `Q.positive(x)` or `Q.eq(f(a), b)`.
- An equality or disequality between two terms, e.g. `Eq(_c0, b)`.

The last two are the only statements understood by the [oracle](crate::oracle) in congruence closure mode, and [preprocessing](crate::euf::preprocess) rewrites a formula so these are the only statements which remain.
*/

use super::{
    predicate::{AppliedPredicate, Predicate},
    term::{Symbol, Term},
};

/// An atom of a formula.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Statement {
    /// A propositional variable.
    Boolean(Symbol),

    /// A predicate applied to some terms.
    Applied(AppliedPredicate),

    /// An equality between two terms.
    Equality(Term, Term),

    /// A disequality between two terms.
    Disequality(Term, Term),
}

impl Statement {
    pub fn boolean(name: &str) -> Self {
        Statement::Boolean(Symbol::new(name))
    }

    /// The application of a named predicate to some terms.
    pub fn predicate(name: &str, arguments: impl IntoIterator<Item = Term>) -> Self {
        Statement::Applied(AppliedPredicate::new(Predicate::named(name), arguments))
    }

    /// The equality predicate applied to two terms.
    pub fn eq(left: Term, right: Term) -> Self {
        Statement::Applied(AppliedPredicate::new(Predicate::Eq, [left, right]))
    }

    /// The disequality predicate applied to two terms.
    pub fn ne(left: Term, right: Term) -> Self {
        Statement::Applied(AppliedPredicate::new(Predicate::Ne, [left, right]))
    }

    /// The terms of an equality or disequality together with whether the statement is an equality, if the statement is either.
    pub fn as_relation(&self) -> Option<(&Term, &Term, bool)> {
        match self {
            Statement::Equality(left, right) => Some((left, right, true)),
            Statement::Disequality(left, right) => Some((left, right, false)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Boolean(symbol) => write!(f, "{symbol}"),
            Statement::Applied(applied) => write!(f, "{applied}"),
            Statement::Equality(left, right) => write!(f, "Eq({left}, {right})"),
            Statement::Disequality(left, right) => write!(f, "Ne({left}, {right})"),
        }
    }
}
