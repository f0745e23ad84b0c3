/*!
Encoded formulas, aka. clauses of integer literals together with a map from statements to atoms.

The encoding is bijective: each statement is mapped to exactly one atom, and each atom is the image of exactly one statement.
The reserved atom is the image of no statement, and the literal `0` marks a statement already resolved to false.
In particular, the clause `{0}` is an explicit unsatisfiable clause.

```rust
# use otter_euf::cnf::{Cnf, EncodedCnf};
# use otter_euf::structures::{clause::Clause, proposition::Proposition, term::Term};
let a_is_b = Proposition::eq(Term::symbol("a"), Term::symbol("b"));

let mut encoded = EncodedCnf::from_cnf(&Cnf::from_proposition(&a_is_b));
encoded.add_from_cnf(&Cnf::from_proposition(&!a_is_b.clone()));
assert_eq!(encoded.atom_count(), 1);
assert_eq!(encoded.clauses().count(), 2);

encoded.add_from_cnf(&Cnf::from_proposition(&Proposition::False));
assert!(encoded.clauses().any(|clause| clause.is_falsum()));
```
*/

use std::collections::{BTreeMap, HashMap};

use crate::{
    cnf::{Cnf, CnfLiteral},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal, FALSUM},
        statement::Statement,
    },
    types::err::{self},
};

/// A formula of integer clauses, together with the statement of each atom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedCnf {
    clauses: Vec<CClause>,
    encoding: HashMap<Statement, Atom>,
    decoding: BTreeMap<Atom, Statement>,
}

impl EncodedCnf {
    /// The encoding of a formula.
    pub fn from_cnf(cnf: &Cnf) -> Self {
        let mut encoded = EncodedCnf::default();
        encoded.add_from_cnf(cnf);
        encoded
    }

    /// An encoded formula from clauses and an encoding.
    ///
    /// The encoding is assumed to be injective, and every non-zero literal of the clauses is assumed to have an atom in the encoding.
    pub fn from_parts(clauses: Vec<CClause>, encoding: HashMap<Statement, Atom>) -> Self {
        let decoding = encoding
            .iter()
            .map(|(statement, atom)| (*atom, statement.clone()))
            .collect();
        EncodedCnf {
            clauses,
            encoding,
            decoding,
        }
    }

    /// Adds the clauses of a formula, encoding any statement not already encoded.
    ///
    /// The empty clause is added as the explicit unsatisfiable clause `{0}`.
    pub fn add_from_cnf(&mut self, cnf: &Cnf) {
        for clause in cnf.clauses() {
            let encoded_clause = match clause.is_empty() {
                true => CClause::from([FALSUM]),
                false => clause
                    .iter()
                    .map(|literal| self.encode_literal(literal))
                    .collect(),
            };
            self.clauses.push(encoded_clause);
        }
    }

    /// Adds the clauses of another encoded formula, translating the atoms of the other formula to atoms of this formula.
    ///
    /// Fails if some (non-zero) literal of the other formula has an atom which is not the image of any statement of the other formula.
    /// On failure no clause of the other formula is added, though statements of the other formula may have been encoded.
    pub fn add_from_encoded(&mut self, other: &EncodedCnf) -> Result<(), err::EncodingError> {
        let mut translation = HashMap::<Atom, Atom>::default();
        for (atom, statement) in other.statements() {
            translation.insert(atom, self.encode_statement(statement));
        }

        let mut translated_clauses = Vec::with_capacity(other.clause_count());
        for clause in other.clauses() {
            let mut translated = CClause::default();
            for literal in clause.literals() {
                if literal.is_falsum() {
                    translated.insert(FALSUM);
                    continue;
                }
                match translation.get(&literal.atom()) {
                    Some(atom) => translated.insert(CLiteral::new(*atom, literal.polarity())),
                    None => return Err(err::EncodingError::UnknownAtom(literal.atom())),
                };
            }
            translated_clauses.push(translated);
        }

        self.clauses.extend(translated_clauses);
        Ok(())
    }

    /// The atom of a statement, encoding the statement if required.
    pub fn encode_statement(&mut self, statement: &Statement) -> Atom {
        match self.encoding.get(statement) {
            Some(atom) => *atom,
            None => {
                let atom = self.atom_count() + 1;
                self.encoding.insert(statement.clone(), atom);
                self.decoding.insert(atom, statement.clone());
                atom
            }
        }
    }

    /// The literal of a statement literal, encoding the statement if required.
    pub fn encode_literal(&mut self, literal: &CnfLiteral) -> CLiteral {
        let atom = self.encode_statement(&literal.statement);
        CLiteral::new(atom, literal.polarity)
    }

    /// Adds an (already encoded) clause.
    pub fn add_clause(&mut self, clause: CClause) {
        self.clauses.push(clause);
    }

    /// The atom of a statement, if the statement is encoded.
    pub fn atom_of(&self, statement: &Statement) -> Option<Atom> {
        self.encoding.get(statement).copied()
    }

    /// The statement of an atom, if the atom is the image of some statement.
    pub fn statement_of(&self, atom: Atom) -> Option<&Statement> {
        self.decoding.get(&atom)
    }

    /// An iterator over the clauses of the formula.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// An iterator over (atom, statement) pairs, in atom order.
    pub fn statements(&self) -> impl Iterator<Item = (Atom, &Statement)> {
        self.decoding.iter().map(|(atom, statement)| (*atom, statement))
    }

    /// The greatest atom of the encoding, or the reserved atom if nothing is encoded.
    pub fn atom_count(&self) -> Atom {
        self.decoding.keys().next_back().copied().unwrap_or(0)
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The formula in DIMACS form, with the statement of each atom noted in a comment.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = String::new();
        for (atom, statement) in self.statements() {
            the_string.push_str(format!("c {atom} {statement}\n").as_str());
        }
        the_string.push_str(format!("p cnf {} {}\n", self.atom_count(), self.clause_count()).as_str());
        for clause in self.clauses() {
            the_string.push_str(clause.as_dimacs(true).as_str());
            the_string.push('\n');
        }
        the_string
    }
}
