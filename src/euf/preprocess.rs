/*!
Preprocessing of an encoded formula, so the only atoms which remain are equalities and disequalities.

[preprocess] takes an encoded formula and returns a fresh encoded formula:
- A single [definition cache](crate::euf::abstraction::DefinitionCache) and a single encoding are used for every clause, and both are discarded at the end of the call.
  So, the same compound term is represented by the same constant throughout the formula, though not across calls.
- Each literal of each clause is [abstracted](crate::euf::abstraction::abstract_literal), and the clause is then [distributed](crate::euf::distribute::distribute).
- The input formula is not mutated.

```rust
# use otter_euf::cnf::{Cnf, EncodedCnf};
# use otter_euf::euf::preprocess::preprocess;
# use otter_euf::structures::{proposition::Proposition, statement::Statement, term::Term};
let f_a = Term::apply("f", [Term::symbol("a")]);
let b = Term::symbol("b");

let encoded = EncodedCnf::from_cnf(&Cnf::from_proposition(&Proposition::eq(f_a, b)));
let preprocessed = preprocess(&encoded).unwrap();

// Eq(Lambda((a), f(a)), _c0) ∧ Eq(_c0, b)
assert_eq!(preprocessed.clause_count(), 2);
assert!(preprocessed
    .statements()
    .all(|(_, statement)| matches!(statement, Statement::Equality(_, _))));
```
*/

use crate::{
    cnf::EncodedCnf,
    euf::{
        abstraction::{abstract_literal, DefinitionCache},
        distribute::{distribute, Expansion},
    },
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        literal::{Literal, FALSUM},
    },
    types::err::{self},
};

/// Rewrites an encoded formula to an encoded formula whose only atoms are equalities and disequalities.
pub fn preprocess(formula: &EncodedCnf) -> Result<EncodedCnf, err::PreprocessingError> {
    let mut cache = DefinitionCache::default();
    let mut preprocessed = EncodedCnf::default();

    for clause in formula.clauses() {
        let mut expansions = Vec::with_capacity(clause.size());

        for literal in clause.literals() {
            if *literal == FALSUM {
                expansions.push(Expansion::Falsum);
                continue;
            }

            let Some(statement) = formula.statement_of(literal.atom()) else {
                log::error!(target: targets::PREPROCESSING, "Missing statement for {literal}");
                return Err(err::EncodingError::UnknownAtom(literal.atom()).into());
            };

            let expansion = abstract_literal(statement, literal.polarity(), &mut cache)?;
            expansions.push(Expansion::Statements(expansion));
        }

        for distributed in distribute(expansions, &mut preprocessed) {
            preprocessed.add_clause(distributed);
        }
    }

    log::debug!(
        target: targets::PREPROCESSING,
        "Preprocessed {} clauses to {} clauses with {} definitions",
        formula.clause_count(),
        preprocessed.clause_count(),
        cache.len()
    );

    Ok(preprocessed)
}

#[cfg(test)]
mod preprocessing_tests {
    use super::*;
    use crate::{
        cnf::Cnf,
        structures::{
            clause::CClause, proposition::Proposition, statement::Statement, term::Term,
        },
    };

    #[test]
    fn input_untouched() {
        let f_a = Term::apply("f", [Term::symbol("a")]);
        let encoded = EncodedCnf::from_cnf(&Cnf::from_proposition(&Proposition::eq(
            f_a,
            Term::symbol("b"),
        )));
        let copy = encoded.clone();
        let _ = preprocess(&encoded).unwrap();
        assert_eq!(encoded, copy);
    }

    #[test]
    fn falsum_preserved() {
        let mut encoded = EncodedCnf::default();
        encoded.add_clause(CClause::from([FALSUM]));
        let preprocessed = preprocess(&encoded).unwrap();
        assert!(preprocessed.clauses().any(|clause| clause.is_falsum()));
    }

    #[test]
    fn unknown_atom() {
        let mut encoded = EncodedCnf::default();
        encoded.add_clause(CClause::from([3]));
        assert_eq!(
            preprocess(&encoded),
            Err(err::PreprocessingError::Encoding(
                err::EncodingError::UnknownAtom(3)
            ))
        );
    }

    #[test]
    fn sharing_across_clauses() {
        let f_a = Term::apply("f", [Term::symbol("a")]);
        let p = Proposition::eq(f_a.clone(), Term::symbol("b"))
            & Proposition::ne(f_a, Term::symbol("c"));
        let encoded = EncodedCnf::from_cnf(&Cnf::from_proposition(&p));
        let preprocessed = preprocess(&encoded).unwrap();

        let definitions = preprocessed
            .statements()
            .filter(|(_, statement)| {
                matches!(statement, Statement::Equality(Term::Abstraction(_), _))
            })
            .count();
        assert_eq!(definitions, 1);
    }
}
