/*!
Definitions, aka. function abstractions over the free symbols of a term.

A definition pairs a list of parameters with a body, where the body is either a term or a predicate applied to a term.
The parameters of a definition built by [over_term](Definition::over_term) or [over_predicate](Definition::over_predicate) are the free symbols of the term, in symbol order.
And, as the order is deterministic, two structurally identical terms always give the same definition.

```rust
# use otter_euf::structures::definition::Definition;
# use otter_euf::structures::term::Term;
let f_ab = Term::apply("f", [Term::symbol("b"), Term::symbol("a")]);

let definition = Definition::over_term(f_ab.clone());
let names = definition.parameters().iter().map(|p| p.name()).collect::<Vec<_>>();
assert_eq!(names, vec!["a", "b"]);

assert_eq!(definition, Definition::over_term(f_ab));
```

Equality of definitions is structural, and is *not* equality up to renaming of parameters.
So, the definitions over `f(a)` and `f(b)` are distinct, and are identified only if `a` and `b` are.

# Currying

When a definition is used as a value, it is read as a curried function of its parameters.
For example, the definition with parameters `(a, b)` and body `f(a, b)` is read as `λa.λb.f(a, b)`.
A definition without parameters is a closed value, and is not wrapped in any binder.
*/

use std::collections::BTreeSet;

use super::{
    predicate::Predicate,
    term::{Symbol, Term},
};

/// The body of a definition.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Body {
    /// Some term.
    Term(Term),

    /// Some predicate applied to a term, taken as a value rather than a truth.
    Predicate(Predicate, Term),
}

impl Body {
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        match self {
            Body::Term(term) | Body::Predicate(_, term) => term.free_symbols(),
        }
    }
}

/// A function abstraction.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Definition {
    parameters: Vec<Symbol>,
    body: Body,
}

impl Definition {
    /// A definition with the given body, whose parameters are the free symbols of the body in symbol order.
    pub fn from_body(body: Body) -> Self {
        let parameters = body.free_symbols().into_iter().collect();
        Definition { parameters, body }
    }

    /// The definition whose body is the given term.
    pub fn over_term(term: Term) -> Self {
        Definition::from_body(Body::Term(term))
    }

    /// The definition whose body is the given predicate applied to the given term.
    pub fn over_predicate(predicate: Predicate, term: Term) -> Self {
        Definition::from_body(Body::Predicate(predicate, term))
    }

    pub fn parameters(&self) -> &[Symbol] {
        &self.parameters
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// True if the definition has no parameters.
    pub fn is_closed(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Term(term) => write!(f, "{term}"),
            Body::Predicate(predicate, term) => write!(f, "{predicate}({term})"),
        }
    }
}

impl std::fmt::Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lambda((")?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, "), {})", self.body)
    }
}
