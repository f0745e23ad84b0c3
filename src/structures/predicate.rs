//! Predicates, and the application of a predicate to some terms.
//!
//! Of the predicates, only equality and disequality have a fixed meaning.
//! Any other predicate is named, and uninterpreted.

use super::term::Term;

/// A predicate symbol.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Predicate {
    /// Equality.
    Eq,

    /// Disequality.
    Ne,

    /// Some uninterpreted predicate.
    Named(String),
}

impl Predicate {
    pub fn named(name: &str) -> Self {
        Predicate::Named(name.to_owned())
    }

    /// True if the predicate is equality or disequality.
    pub fn is_equality_family(&self) -> bool {
        matches!(self, Predicate::Eq | Predicate::Ne)
    }
}

/// A predicate applied to some (ordered) arguments.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppliedPredicate {
    pub function: Predicate,
    pub arguments: Vec<Term>,
}

impl AppliedPredicate {
    pub fn new(function: Predicate, arguments: impl IntoIterator<Item = Term>) -> Self {
        AppliedPredicate {
            function,
            arguments: arguments.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Eq => write!(f, "Q.eq"),
            Predicate::Ne => write!(f, "Q.ne"),
            Predicate::Named(name) => write!(f, "Q.{name}"),
        }
    }
}

impl std::fmt::Display for AppliedPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.function)?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}
