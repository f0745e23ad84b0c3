/*!
The satisfiability oracle, aka. a decision procedure for encoded formulas.

The oracle decides whether an [encoded formula](crate::cnf::EncodedCnf) is satisfiable, and if so returns a witness.

# Theory modes

- In [propositional](TheoryMode::Propositional) mode each atom is an independent boolean.
- In [congruence closure](TheoryMode::CongruenceClosure) mode each atom whose statement is an equality or disequality is interpreted, and a valuation is consistent only if the equalities it makes true are consistent with the disequalities it makes true, through [congruence](congruence).
  Other atoms remain independent booleans.

# Overview

The search is a DPLL loop, in the style of a (much simplified) CDCL solve:

```none
          +---------------+
  +-------| make_decision |
  |       +---------------+
  |               ⌃
  |               | if the valuation is consistent and partial
  |               |
  |               |              +-----> satisfiable, if the valuation is full
  ⌄   +--------------------+     |
--+-->| apply_consequences |-----+
  ⌃   +--------------------+     |
  |               |              +-----> unsatisfiable, if there is no decision to revise
  |               |
  |               | if some clause or the theory conflicts with the valuation
  |               ⌄
  |           +----------+
  +-----------| backtrack|
              +----------+
```

- [apply_consequences](search::Oracle::apply_consequences) propagates unit clauses until a fixpoint, and then (optionally, see [theory_propagation](crate::config::Config::theory_propagation)) checks the valuation against the theory.
- [make_decision](search::Oracle::make_decision) values some atom without a value.
- [backtrack](search::Oracle::backtrack) undoes the valuation to the most recent decision not already revised, and revises the decision.

```rust
# use otter_euf::cnf::{Cnf, EncodedCnf};
# use otter_euf::config::Config;
# use otter_euf::oracle::{solve, TheoryMode};
# use otter_euf::euf::preprocess::preprocess;
# use otter_euf::structures::{proposition::Proposition, term::Term};
let a = Term::symbol("a");
let b = Term::symbol("b");
let c = Term::symbol("c");

let p = Proposition::eq(a.clone(), b.clone())
    & Proposition::eq(b, c.clone())
    & Proposition::ne(a, c);
let formula = preprocess(&EncodedCnf::from_cnf(&Cnf::from_proposition(&p))).unwrap();

let config = Config::default();
assert!(solve(&formula, TheoryMode::Propositional, &config).unwrap().is_satisfiable());
assert!(!solve(&formula, TheoryMode::CongruenceClosure, &config).unwrap().is_satisfiable());
```
*/

pub mod congruence;
pub mod search;

use std::collections::BTreeMap;

use crate::{
    cnf::EncodedCnf,
    config::Config,
    structures::statement::Statement,
    types::err::{self},
};

/// How the oracle interprets atoms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoryMode {
    /// Atoms are uninterpreted.
    Propositional,

    /// Equalities and disequalities are interpreted through congruence closure.
    CongruenceClosure,
}

/// A witness to the satisfiability of a formula, aka. the value of each statement of the formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    values: BTreeMap<Statement, bool>,
}

impl Model {
    /// The value of a statement in the witness, if the statement is part of the formula.
    pub fn value_of(&self, statement: &Statement) -> Option<bool> {
        self.values.get(statement).copied()
    }

    /// An iterator over (statement, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Statement, &bool)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The result of a query to the oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// The formula is satisfiable, as witnessed.
    Witness(Model),

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Solution::Witness(_))
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Witness(_) => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// Decides the satisfiability of an encoded formula, in the given mode.
pub fn solve(
    formula: &EncodedCnf,
    mode: TheoryMode,
    config: &Config,
) -> Result<Solution, err::EncodingError> {
    let mut oracle = search::Oracle::new(formula, mode, config)?;
    Ok(oracle.solve())
}
