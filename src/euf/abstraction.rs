/*!
Abstraction of terms and predicates to flat equalities.

Each literal of a formula is rewritten to a list of [equalities and disequalities](Statement::Equality), where a list of length one is a literal to be used directly and a longer list is a conjunction (to be [distributed](crate::euf::distribute)).

# Unary predicates

A unary predicate `P(t)` is rewritten as an equality between the [definition](Definition) of `P(t)` over the free symbols of `t` and a fresh constant.
So, `P(t)` is treated as an uninterpreted value rather than a truth, and negation is a disequality.

- `P(x)` ↦ `[Eq(Lambda((x), P(x)), _c0)]`
- `¬P(x)` ↦ `[Ne(Lambda((x), P(x)), _c0)]`

# Binary equalities and disequalities

Each side of a binary predicate is given a representative:
- A bare symbol is its own representative.
- Any other term is represented by a fresh constant, together with a supporting equality between the definition of the term and the constant.

The literal is then rewritten to a relation between the representatives, with negation folded into the relation.

- `f(a) = b` ↦ `[Eq(Lambda((a), f(a)), _c0), Eq(_c0, b)]`
- `¬(a ≠ b)` ↦ `[Eq(a, b)]`

# Sharing

Constants are taken from a [DefinitionCache], which maps each definition to a single constant.
As definitions are built over the free symbols of a term in symbol order, each occurrence of the same term (or predicate instance) is mapped to the same constant.
A cache is scoped to a single preprocessing call, and is never shared between calls.

```rust
# use otter_euf::euf::abstraction::{abstract_literal, DefinitionCache};
# use otter_euf::structures::{statement::Statement, term::Term};
let f_a = Term::apply("f", [Term::symbol("a")]);
let mut cache = DefinitionCache::default();

let first = abstract_literal(&Statement::eq(f_a.clone(), Term::symbol("b")), true, &mut cache).unwrap();
let second = abstract_literal(&Statement::eq(f_a, Term::symbol("c")), false, &mut cache).unwrap();

assert_eq!(first.len(), 2);
assert_eq!(first[0], second[0]);
assert_eq!(cache.len(), 1);
```
*/

use std::collections::HashMap;

use crate::{
    euf::classify::{classify, validate_argument, AtomShape, Relation},
    misc::log::targets::{self},
    structures::{
        definition::Definition,
        statement::Statement,
        term::{FreshSymbols, Symbol, Term},
    },
    types::err::{self},
};

/// A map from definitions to (fresh) constants.
#[derive(Debug, Default)]
pub struct DefinitionCache {
    constants: HashMap<Definition, Symbol>,
    fresh: FreshSymbols,
}

impl DefinitionCache {
    /// The constant of a definition, minting a fresh constant if the definition is not already cached.
    pub fn constant_for(&mut self, definition: &Definition) -> Symbol {
        if let Some(constant) = self.constants.get(definition) {
            return constant.clone();
        }
        let constant = self.fresh.fresh();
        log::trace!(target: targets::ABSTRACTION, "{constant} := {definition}");
        self.constants.insert(definition.clone(), constant.clone());
        constant
    }

    /// A count of cached definitions.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

/// The representative of a term, together with the supporting equality of the representative (if any).
fn representative(term: &Term, cache: &mut DefinitionCache) -> (Term, Option<Statement>) {
    if term.is_symbol() {
        return (term.clone(), None);
    }
    let definition = Definition::over_term(term.clone());
    let constant = Term::Symbol(cache.constant_for(&definition));
    let support = Statement::Equality(Term::from(definition), constant.clone());
    (constant, Some(support))
}

/// Rewrites a literal to a list of equalities and disequalities.
///
/// A list of length greater than one is a conjunction.
pub fn abstract_literal(
    statement: &Statement,
    polarity: bool,
    cache: &mut DefinitionCache,
) -> Result<Vec<Statement>, err::UnhandledInput> {
    match classify(statement) {
        AtomShape::UnaryPredicate { function, argument } => {
            validate_argument(argument)?;
            let definition = Definition::over_predicate(function.clone(), argument.clone());
            let constant = Term::Symbol(cache.constant_for(&definition));
            let abstraction = Term::from(definition);
            match polarity {
                true => Ok(vec![Statement::Equality(abstraction, constant)]),
                false => Ok(vec![Statement::Disequality(abstraction, constant)]),
            }
        }

        AtomShape::BinaryEqualityFamily {
            relation,
            left,
            right,
        } => {
            validate_argument(left)?;
            validate_argument(right)?;
            let (left_representative, left_support) = representative(left, cache);
            let (right_representative, right_support) = representative(right, cache);

            let is_equal = (relation == Relation::Equal) ^ !polarity;
            let core = match is_equal {
                true => Statement::Equality(left_representative, right_representative),
                false => Statement::Disequality(left_representative, right_representative),
            };

            let mut expansion = Vec::with_capacity(3);
            expansion.extend(left_support);
            expansion.extend(right_support);
            expansion.push(core);
            Ok(expansion)
        }

        AtomShape::Invalid => {
            log::error!(target: targets::ABSTRACTION, "Unable to abstract {statement}");
            Err(err::UnhandledInput::Predicate(statement.clone()))
        }
    }
}

#[cfg(test)]
mod abstraction_tests {
    use super::*;

    fn a() -> Term {
        Term::symbol("a")
    }

    fn b() -> Term {
        Term::symbol("b")
    }

    #[test]
    fn bare_symbols() {
        let mut cache = DefinitionCache::default();

        let positive = abstract_literal(&Statement::eq(a(), b()), true, &mut cache).unwrap();
        assert_eq!(positive, vec![Statement::Equality(a(), b())]);

        let negative = abstract_literal(&Statement::eq(a(), b()), false, &mut cache).unwrap();
        assert_eq!(negative, vec![Statement::Disequality(a(), b())]);

        let double_negative = abstract_literal(&Statement::ne(a(), b()), false, &mut cache).unwrap();
        assert_eq!(double_negative, vec![Statement::Equality(a(), b())]);

        assert!(cache.is_empty());
    }

    #[test]
    fn unary_predicate() {
        let mut cache = DefinitionCache::default();
        let p_a = Statement::predicate("P", [a()]);

        let positive = abstract_literal(&p_a, true, &mut cache).unwrap();
        let negative = abstract_literal(&p_a, false, &mut cache).unwrap();
        assert_eq!(cache.len(), 1);

        let (Statement::Equality(pl, pr), Statement::Disequality(nl, nr)) = (&positive[0], &negative[0]) else {
            panic!("Unexpected expansion");
        };
        assert_eq!(pl, nl);
        assert_eq!(pr, nr);
        assert!(matches!(pl, Term::Abstraction(_)));
        assert!(pr.is_symbol());
    }

    #[test]
    fn compound_sides() {
        let mut cache = DefinitionCache::default();
        let f_a = Term::apply("f", [a()]);
        let g_b = Term::apply("g", [b()]);

        let expansion = abstract_literal(&Statement::ne(f_a, g_b), true, &mut cache).unwrap();
        assert_eq!(expansion.len(), 3);
        assert!(matches!(expansion[0], Statement::Equality(Term::Abstraction(_), _)));
        assert!(matches!(expansion[1], Statement::Equality(Term::Abstraction(_), _)));
        assert!(matches!(expansion[2], Statement::Disequality(Term::Symbol(_), Term::Symbol(_))));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn distinct_terms_distinct_constants() {
        let mut cache = DefinitionCache::default();
        let f_a = Definition::over_term(Term::apply("f", [a()]));
        let f_b = Definition::over_term(Term::apply("f", [b()]));

        assert_ne!(cache.constant_for(&f_a), cache.constant_for(&f_b));
        assert_eq!(cache.constant_for(&f_a), cache.constant_for(&f_a));
    }

    #[test]
    fn closed_terms_share() {
        let mut cache = DefinitionCache::default();
        let two = Term::integer(2);

        let first = abstract_literal(&Statement::eq(a(), two.clone()), true, &mut cache).unwrap();
        let second = abstract_literal(&Statement::eq(b(), two), true, &mut cache).unwrap();
        assert_eq!(first[0], second[0]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn fresh_constants() {
        let mut cache = DefinitionCache::default();
        let expansion = abstract_literal(&Statement::eq(Term::apply("f", [a()]), b()), true, &mut cache).unwrap();

        let Statement::Equality(_, Term::Symbol(constant)) = &expansion[0] else {
            panic!("Unexpected expansion");
        };
        assert!(constant.is_fresh());
        assert!(!Symbol::new("a").is_fresh());
    }

    #[test]
    fn invalid_arguments() {
        let mut cache = DefinitionCache::default();
        let m = Term::matrix("M");

        assert_eq!(
            abstract_literal(&Statement::eq(a(), m.clone()), false, &mut cache),
            Err(err::UnhandledInput::Matrix(m.clone()))
        );
        assert_eq!(
            abstract_literal(&Statement::predicate("P", [Term::NaN]), true, &mut cache),
            Err(err::UnhandledInput::NaN)
        );
        assert!(matches!(
            abstract_literal(&Statement::eq(Term::apply("f", [m]), b()), true, &mut cache),
            Err(err::UnhandledInput::Matrix(_))
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn invalid() {
        let mut cache = DefinitionCache::default();
        let lt = Statement::predicate("lt", [a(), b()]);
        assert!(matches!(
            abstract_literal(&lt, true, &mut cache),
            Err(err::UnhandledInput::Predicate(_))
        ));
    }
}
