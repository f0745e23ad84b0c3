//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as an (ordered) set of literals.
//!
//! ```rust
//! # use otter_euf::structures::clause::{Clause, ClauseStatus, CClause};
//! let clause = CClause::from([23, -41, -3]);
//!
//! assert_eq!(clause.size(), 3);
//!
//! let mut some_valuation = vec![Some(true); 42];
//! some_valuation[23] = Some(false);
//! some_valuation[41] = None;
//!
//! assert_eq!(clause.status(&some_valuation), ClauseStatus::Unit(-41));
//! ```
//!
//! - The empty clause is always false (never true).
//! - The false sentinel `0` is false on every valuation, and so the clause containing only `0` is unsatisfiable.

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal, FALSUM},
    valuation::Valuation,
};

/// The canonical implementation of a clause.
pub type CClause = BTreeSet<CLiteral>;

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false.
    Conflict,

    /// Exactly one literal of the clause has no value, and every other literal is false.
    Unit(CLiteral),

    /// At least two literals of the clause have no value, and no literal is true.
    Open,
}

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, excluding the reserved atom.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// True if the clause is the explicit unsatisfiable clause, i.e. contains only the false sentinel.
    fn is_falsum(&self) -> bool;

    /// The status of the clause on the given valuation.
    ///
    /// Literals whose atom is not part of the valuation are taken to have no value.
    fn status(&self, valuation: &impl Valuation) -> ClauseStatus;
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.iter() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .filter(|literal| !literal.is_falsum())
            .map(|literal| literal.atom())
    }

    fn is_falsum(&self) -> bool {
        self.len() == 1 && self.contains(&FALSUM)
    }

    fn status(&self, valuation: &impl Valuation) -> ClauseStatus {
        let mut the_unvalued = None;
        let mut unvalued_count = 0;

        for literal in self.iter() {
            if literal.is_falsum() {
                continue;
            }
            match valuation.value_of(literal.atom()).flatten() {
                Some(value) if value == literal.polarity() => return ClauseStatus::Satisfied,
                Some(_) => {}
                None => {
                    unvalued_count += 1;
                    the_unvalued = Some(*literal);
                }
            }
        }

        match (unvalued_count, the_unvalued) {
            (0, _) => ClauseStatus::Conflict,
            (1, Some(literal)) => ClauseStatus::Unit(literal),
            _ => ClauseStatus::Open,
        }
    }
}
