/*!
Distribution of expanded clauses, aka. restoring conjunctive normal form after abstraction.

After [abstraction](crate::euf::abstraction) each literal of a clause is one of:
- The false sentinel, which contributes nothing to the disjunction.
- A single statement, which remains a literal of the clause (a *base* literal).
- A conjunction of statements (a *conjunctive factor*), which is distributed over the disjunction.

So, `A ∨ (B ∧ C)` is distributed to `(A ∨ B) ∧ (A ∨ C)`, and in general a clause with factors of sizes n₁, …, nₖ is distributed to n₁ × … × nₖ clauses, each the base literals together with one statement from each factor.

A clause whose every literal is the false sentinel is unsatisfiable, and is distributed to the explicit unsatisfiable clause `{0}` rather than to nothing.
As otherwise an unsatisfiable clause would silently vanish from the formula.

```rust
# use otter_euf::cnf::EncodedCnf;
# use otter_euf::euf::distribute::{distribute, Expansion};
# use otter_euf::structures::{clause::CClause, statement::Statement, term::Term};
let eq = |l: &str, r: &str| Statement::Equality(Term::symbol(l), Term::symbol(r));

let mut encoding = EncodedCnf::default();
let clauses = distribute(
    vec![
        Expansion::Statements(vec![eq("a", "b")]),
        Expansion::Statements(vec![eq("c", "d"), eq("e", "f")]),
    ],
    &mut encoding,
);
assert_eq!(clauses.len(), 2);

let falsum = distribute(vec![Expansion::Falsum, Expansion::Falsum], &mut encoding);
assert_eq!(falsum, vec![CClause::from([0])]);
```
*/

use crate::{
    cnf::EncodedCnf,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal, FALSUM},
        statement::Statement,
    },
};

/// The expansion of a single literal of a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// The literal was the false sentinel.
    Falsum,

    /// The literal was abstracted to some statements, a conjunction if more than one.
    Statements(Vec<Statement>),
}

fn encode(statement: &Statement, encoding: &mut EncodedCnf) -> CLiteral {
    CLiteral::new(encoding.encode_statement(statement), true)
}

/// Distributes the expansions of the literals of a clause to clauses of (positive) literals, encoded with the given encoding.
///
/// Statements already encoded reuse their atom, and other statements are given a fresh atom.
pub fn distribute(expansions: Vec<Expansion>, encoding: &mut EncodedCnf) -> Vec<CClause> {
    let mut base = CClause::default();
    let mut factors: Vec<Vec<Statement>> = Vec::default();

    for expansion in expansions {
        match expansion {
            Expansion::Falsum => {}
            Expansion::Statements(mut statements) => match statements.len() {
                0 => {}
                1 => {
                    if let Some(statement) = statements.pop() {
                        base.insert(encode(&statement, encoding));
                    }
                }
                _ => factors.push(statements),
            },
        }
    }

    if factors.is_empty() {
        if base.is_empty() {
            log::trace!(target: targets::DISTRIBUTION, "Clause resolved to falsum");
            return vec![CClause::from([FALSUM])];
        }
        return vec![base];
    }

    let mut partials = vec![base];
    for factor in factors {
        let encoded_factor = factor
            .iter()
            .map(|statement| encode(statement, encoding))
            .collect::<Vec<_>>();

        let mut next = Vec::with_capacity(partials.len() * encoded_factor.len());
        for partial in &partials {
            for literal in &encoded_factor {
                let mut extended = partial.clone();
                extended.insert(*literal);
                next.push(extended);
            }
        }
        partials = next;
    }

    log::trace!(target: targets::DISTRIBUTION, "Distributed to {} clauses", partials.len());
    partials
}
