/*!
Classification of the atoms of a formula.

Each statement is of one (and only one) [shape](AtomShape):
- A unary predicate, any predicate applied to exactly one term.
- A binary equality-family predicate, equality or disequality applied to exactly two terms.
- Invalid, anything else.

Invalid statements include binary predicates other than equality and disequality, predicates with three or more arguments, propositional variables, and the flat equalities produced by preprocessing (as these are not expected in the input to preprocessing).

[validate] checks every atom of an encoded formula is valid, and every argument of a valid atom is neither of matrix kind nor NaN.

```rust
# use otter_euf::euf::classify::{classify, AtomShape};
# use otter_euf::structures::{statement::Statement, term::Term};
let a = Term::symbol("a");
let b = Term::symbol("b");

assert!(matches!(classify(&Statement::eq(a.clone(), b.clone())), AtomShape::BinaryEqualityFamily { .. }));
assert!(matches!(classify(&Statement::predicate("P", [a.clone()])), AtomShape::UnaryPredicate { .. }));
assert!(matches!(classify(&Statement::predicate("lt", [a, b])), AtomShape::Invalid));
```
*/

use crate::{
    cnf::EncodedCnf,
    misc::log::targets::{self},
    structures::{
        predicate::{AppliedPredicate, Predicate},
        statement::Statement,
        term::{Kind, Term},
    },
    types::err::{self},
};

/// The relation of a binary equality-family predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Equal,
    NotEqual,
}

/// The shape of a statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomShape<'s> {
    /// Some predicate applied to a single term.
    UnaryPredicate {
        function: &'s Predicate,
        argument: &'s Term,
    },

    /// Equality or disequality applied to two terms.
    BinaryEqualityFamily {
        relation: Relation,
        left: &'s Term,
        right: &'s Term,
    },

    /// Anything else.
    Invalid,
}

/// The shape of a statement.
pub fn classify(statement: &Statement) -> AtomShape<'_> {
    let Statement::Applied(AppliedPredicate {
        function,
        arguments,
    }) = statement
    else {
        return AtomShape::Invalid;
    };

    match arguments.as_slice() {
        [argument] => AtomShape::UnaryPredicate { function, argument },

        [left, right] if function.is_equality_family() => AtomShape::BinaryEqualityFamily {
            relation: match function {
                Predicate::Eq => Relation::Equal,
                _ => Relation::NotEqual,
            },
            left,
            right,
        },

        _ => AtomShape::Invalid,
    }
}

/// Checks some argument of a valid atom is neither of matrix kind nor NaN.
pub fn validate_argument(term: &Term) -> Result<(), err::UnhandledInput> {
    if term.kind() == Kind::Matrix {
        log::info!(target: targets::CLASSIFY, "Matrix argument {term}");
        return Err(err::UnhandledInput::Matrix(term.clone()));
    }
    if *term == Term::NaN {
        log::info!(target: targets::CLASSIFY, "NaN argument");
        return Err(err::UnhandledInput::NaN);
    }
    Ok(())
}

/// Checks every atom of an encoded formula is valid, and then that every argument of the atoms is valid.
///
/// Atoms are checked in atom order, and so the error returned is for the least invalid atom.
pub fn validate(formula: &EncodedCnf) -> Result<(), err::UnhandledInput> {
    let mut arguments = Vec::default();

    for (atom, statement) in formula.statements() {
        match classify(statement) {
            AtomShape::UnaryPredicate { argument, .. } => arguments.push(argument),

            AtomShape::BinaryEqualityFamily { left, right, .. } => {
                arguments.push(left);
                arguments.push(right);
            }

            AtomShape::Invalid => {
                log::info!(target: targets::CLASSIFY, "Invalid atom {atom}: {statement}");
                return match statement {
                    Statement::Applied(_) => Err(err::UnhandledInput::Predicate(statement.clone())),
                    _ => Err(err::UnhandledInput::Literal(statement.clone())),
                };
            }
        }
    }

    for argument in arguments {
        validate_argument(argument)?;
    }

    log::trace!(target: targets::CLASSIFY, "Validated {} atoms", formula.atom_count());
    Ok(())
}
