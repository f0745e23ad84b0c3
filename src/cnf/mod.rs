/*!
Conjunctive normal forms of propositions, and encoded formulas.

# The CNF builder

[Cnf::from_proposition] rewrites a [proposition](crate::structures::proposition) to a conjunction of clauses over [statements](crate::structures::statement).
In rough strokes:
- Negation is pushed to the statements of the proposition (negation normal form), with implications and equivalences rewritten along the way.
- Disjunction is distributed over conjunction.

Along the way constants are simplified:
- A clause with a true literal (or with some statement and its negation) is dropped.
- A false literal is dropped from a clause, and so a clause of false literals is the empty clause.

So, `True` is the empty conjunction, and `False` is the conjunction of the empty clause.

```rust
# use otter_euf::cnf::Cnf;
# use otter_euf::structures::proposition::Proposition;
let p = Proposition::boolean("p");
let q = Proposition::boolean("q");
let r = Proposition::boolean("r");

let cnf = Cnf::from_proposition(&(p | (q & r)));
assert_eq!(cnf.clauses().count(), 2);

assert!(Cnf::from_proposition(&Proposition::True).is_empty());
assert_eq!(Cnf::from_proposition(&Proposition::False).clauses().next().map(|c| c.len()), Some(0));
```

# Encoded formulas

An [EncodedCnf] is a formula in which each statement has been replaced by an [atom](crate::structures::atom), and is the form of formula given to the [oracle](crate::oracle).
*/

mod encoded;
pub use encoded::EncodedCnf;

use std::collections::BTreeSet;

use crate::structures::{proposition::Proposition, statement::Statement};

/// A statement paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CnfLiteral {
    pub statement: Statement,
    pub polarity: bool,
}

impl CnfLiteral {
    pub fn new(statement: Statement, polarity: bool) -> Self {
        CnfLiteral {
            statement,
            polarity,
        }
    }

    pub fn negate(&self) -> Self {
        CnfLiteral {
            statement: self.statement.clone(),
            polarity: !self.polarity,
        }
    }
}

/// A clause of statement literals.
pub type CnfClause = BTreeSet<CnfLiteral>;

/// A conjunction of clauses over statements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    clauses: BTreeSet<CnfClause>,
}

/// Negation normal form, with constants.
enum Nnf {
    Constant(bool),
    Literal(CnfLiteral),
    And(Vec<Nnf>),
    Or(Vec<Nnf>),
}

impl Cnf {
    /// The conjunctive normal form of a proposition.
    pub fn from_proposition(proposition: &Proposition) -> Self {
        let mut cnf = Cnf::default();
        cnf.add_proposition(proposition);
        cnf
    }

    /// Extends the formula with the clauses of the conjunctive normal form of a proposition.
    pub fn add_proposition(&mut self, proposition: &Proposition) {
        let nnf = Cnf::negation_normal_form(proposition, true);
        self.clauses.extend(Cnf::nnf_clauses(nnf));
    }

    /// Extends the formula with the clauses of another formula.
    pub fn extend(&mut self, other: &Cnf) {
        self.clauses.extend(other.clauses.iter().cloned());
    }

    /// An iterator over the clauses of the formula.
    pub fn clauses(&self) -> impl Iterator<Item = &CnfClause> {
        self.clauses.iter()
    }

    /// True if the formula has no clauses, and so is true.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    fn negation_normal_form(proposition: &Proposition, polarity: bool) -> Nnf {
        match proposition {
            Proposition::True => Nnf::Constant(polarity),
            Proposition::False => Nnf::Constant(!polarity),
            Proposition::Atom(statement) => {
                Nnf::Literal(CnfLiteral::new(statement.clone(), polarity))
            }
            Proposition::Not(inner) => Cnf::negation_normal_form(inner, !polarity),

            Proposition::And(parts) | Proposition::Or(parts) => {
                let parts = parts
                    .iter()
                    .map(|part| Cnf::negation_normal_form(part, polarity))
                    .collect();
                let conjunctive = matches!(proposition, Proposition::And(_));
                match conjunctive == polarity {
                    true => Nnf::And(parts),
                    false => Nnf::Or(parts),
                }
            }

            Proposition::Implies(antecedent, consequent) => {
                let rewrite = Proposition::Or(vec![
                    Proposition::Not(antecedent.clone()),
                    consequent.as_ref().clone(),
                ]);
                Cnf::negation_normal_form(&rewrite, polarity)
            }

            Proposition::Equivalent(left, right) => {
                let rewrite = Proposition::And(vec![
                    Proposition::implies(left.as_ref().clone(), right.as_ref().clone()),
                    Proposition::implies(right.as_ref().clone(), left.as_ref().clone()),
                ]);
                Cnf::negation_normal_form(&rewrite, polarity)
            }
        }
    }

    fn nnf_clauses(nnf: Nnf) -> Vec<CnfClause> {
        match nnf {
            Nnf::Constant(true) => Vec::default(),
            Nnf::Constant(false) => vec![CnfClause::default()],
            Nnf::Literal(literal) => vec![CnfClause::from([literal])],
            Nnf::And(parts) => parts.into_iter().flat_map(Cnf::nnf_clauses).collect(),
            Nnf::Or(parts) => {
                let mut product = vec![CnfClause::default()];
                for part in parts {
                    let part_clauses = Cnf::nnf_clauses(part);
                    let mut next = Vec::with_capacity(product.len() * part_clauses.len());
                    for base in &product {
                        for clause in &part_clauses {
                            let mut joined = base.clone();
                            joined.extend(clause.iter().cloned());
                            if !Cnf::is_tautology(&joined) {
                                next.push(joined);
                            }
                        }
                    }
                    product = next;
                    if product.is_empty() {
                        break;
                    }
                }
                product
            }
        }
    }

    fn is_tautology(clause: &CnfClause) -> bool {
        clause
            .iter()
            .any(|literal| literal.polarity && clause.contains(&literal.negate()))
    }
}

#[cfg(test)]
mod cnf_tests {
    use super::*;
    use crate::structures::term::Term;

    fn literal(name: &str, polarity: bool) -> CnfLiteral {
        CnfLiteral::new(Statement::boolean(name), polarity)
    }

    #[test]
    fn distribution() {
        let p = Proposition::boolean("p");
        let q = Proposition::boolean("q");
        let r = Proposition::boolean("r");

        let cnf = Cnf::from_proposition(&(p | (q & r)));
        let expected = BTreeSet::from([
            CnfClause::from([literal("p", true), literal("q", true)]),
            CnfClause::from([literal("p", true), literal("r", true)]),
        ]);
        assert_eq!(cnf.clauses, expected);
    }

    #[test]
    fn de_morgan() {
        let p = Proposition::boolean("p");
        let q = Proposition::boolean("q");

        let cnf = Cnf::from_proposition(&!(p & q));
        let expected = BTreeSet::from([CnfClause::from([
            literal("p", false),
            literal("q", false),
        ])]);
        assert_eq!(cnf.clauses, expected);
    }

    #[test]
    fn implication_and_equivalence() {
        let p = Proposition::boolean("p");
        let q = Proposition::boolean("q");

        let implication = Cnf::from_proposition(&Proposition::implies(p.clone(), q.clone()));
        assert_eq!(implication.clauses().count(), 1);

        let equivalence = Cnf::from_proposition(&Proposition::equivalent(p, q));
        assert_eq!(equivalence.clauses().count(), 2);
    }

    #[test]
    fn tautology_skip() {
        let p = Proposition::boolean("p");
        let cnf = Cnf::from_proposition(&(p.clone() | !p));
        assert!(cnf.is_empty());
    }

    #[test]
    fn constants() {
        let a_is_b = Proposition::eq(Term::symbol("a"), Term::symbol("b"));

        let with_false = Cnf::from_proposition(&(a_is_b.clone() | Proposition::False));
        assert_eq!(with_false.clauses().count(), 1);

        let with_true = Cnf::from_proposition(&(a_is_b | Proposition::True));
        assert!(with_true.is_empty());

        let not_true = Cnf::from_proposition(&!Proposition::True);
        assert_eq!(not_true.clauses().next(), Some(&CnfClause::default()));
    }
}
