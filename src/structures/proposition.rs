/*!
Propositions, aka. boolean combinations of [statements](super::statement).

```rust
# use otter_euf::structures::proposition::Proposition;
# use otter_euf::structures::term::Term;
let a = Term::symbol("a");
let b = Term::symbol("b");

let a_is_b = Proposition::eq(a.clone(), b.clone());
let p_a = Proposition::unary("P", a);

let either = a_is_b.clone() | p_a.clone();
let not_both = !(a_is_b & p_a);

assert!(matches!(either, Proposition::Or(_)));
assert!(matches!(not_both, Proposition::Not(_)));
```

Propositions are trees, and no simplification takes place on construction.
For the conjunctive normal form of a proposition, see [Cnf](crate::cnf::Cnf).
*/

use super::{statement::Statement, term::Term};

/// A boolean combination of statements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Proposition {
    True,
    False,
    Atom(Statement),
    Not(Box<Proposition>),
    And(Vec<Proposition>),
    Or(Vec<Proposition>),
    Implies(Box<Proposition>, Box<Proposition>),
    Equivalent(Box<Proposition>, Box<Proposition>),
}

impl Proposition {
    pub fn atom(statement: Statement) -> Self {
        Proposition::Atom(statement)
    }

    /// A propositional variable.
    pub fn boolean(name: &str) -> Self {
        Proposition::Atom(Statement::boolean(name))
    }

    /// `Q.eq(left, right)`
    pub fn eq(left: Term, right: Term) -> Self {
        Proposition::Atom(Statement::eq(left, right))
    }

    /// `Q.ne(left, right)`
    pub fn ne(left: Term, right: Term) -> Self {
        Proposition::Atom(Statement::ne(left, right))
    }

    /// A named predicate applied to a single term.
    pub fn unary(name: &str, argument: Term) -> Self {
        Proposition::Atom(Statement::predicate(name, [argument]))
    }

    /// A named predicate applied to some terms.
    pub fn predicate(name: &str, arguments: impl IntoIterator<Item = Term>) -> Self {
        Proposition::Atom(Statement::predicate(name, arguments))
    }

    pub fn and(conjuncts: impl IntoIterator<Item = Proposition>) -> Self {
        Proposition::And(conjuncts.into_iter().collect())
    }

    pub fn or(disjuncts: impl IntoIterator<Item = Proposition>) -> Self {
        Proposition::Or(disjuncts.into_iter().collect())
    }

    pub fn implies(antecedent: Proposition, consequent: Proposition) -> Self {
        Proposition::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn equivalent(left: Proposition, right: Proposition) -> Self {
        Proposition::Equivalent(Box::new(left), Box::new(right))
    }
}

impl From<Statement> for Proposition {
    fn from(statement: Statement) -> Self {
        Proposition::Atom(statement)
    }
}

impl From<bool> for Proposition {
    fn from(value: bool) -> Self {
        match value {
            true => Proposition::True,
            false => Proposition::False,
        }
    }
}

impl std::ops::Not for Proposition {
    type Output = Proposition;

    fn not(self) -> Self::Output {
        Proposition::Not(Box::new(self))
    }
}

impl std::ops::BitAnd for Proposition {
    type Output = Proposition;

    fn bitand(self, rhs: Self) -> Self::Output {
        Proposition::And(vec![self, rhs])
    }
}

impl std::ops::BitOr for Proposition {
    type Output = Proposition;

    fn bitor(self, rhs: Self) -> Self::Output {
        Proposition::Or(vec![self, rhs])
    }
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn joined(
            f: &mut std::fmt::Formatter<'_>,
            parts: &[Proposition],
            connective: &str,
        ) -> std::fmt::Result {
            write!(f, "(")?;
            for (index, part) in parts.iter().enumerate() {
                if index > 0 {
                    write!(f, " {connective} ")?;
                }
                write!(f, "{part}")?;
            }
            write!(f, ")")
        }

        match self {
            Proposition::True => write!(f, "True"),
            Proposition::False => write!(f, "False"),
            Proposition::Atom(statement) => write!(f, "{statement}"),
            Proposition::Not(inner) => write!(f, "~{inner}"),
            Proposition::And(conjuncts) => joined(f, conjuncts, "&"),
            Proposition::Or(disjuncts) => joined(f, disjuncts, "|"),
            Proposition::Implies(antecedent, consequent) => {
                write!(f, "({antecedent} >> {consequent})")
            }
            Proposition::Equivalent(left, right) => write!(f, "({left} <-> {right})"),
        }
    }
}
