/*!
Terms, aka. the (symbolic) arguments of predicates.

A term is an immutable tree, compared and hashed by shape.
So, two terms built independently from the same pieces are the same term.

```rust
# use otter_euf::structures::term::{Symbol, Term};
let f_a = Term::apply("f", [Term::symbol("a")]);
let also_f_a = Term::apply("f", [Term::symbol("a")]);

assert_eq!(f_a, also_f_a);
assert!(f_a.free_symbols().contains(&Symbol::new("a")));
```

# Symbols

A symbol is a name together with an optional fresh index.
Symbols with a fresh index are only made by [FreshSymbols], and so are distinct from any symbol written by hand, even one with the same name.

Symbols are ordered by name and then by fresh index.
This order is total and deterministic, and is the order in which the parameters of a [definition](crate::structures::definition) are listed.
*/

use std::collections::BTreeSet;

use super::definition::Definition;

/// A named variable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    name: String,
    fresh: Option<usize>,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            fresh: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the symbol was minted as a fresh constant.
    pub fn is_fresh(&self) -> bool {
        self.fresh.is_some()
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

/// The kind of value a term denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Numbers, and anything else without a more specific kind.
    Number,

    /// Matrices.
    Matrix,

    /// Functions, i.e. abstractions.
    Function,
}

/// A term.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A bare variable symbol.
    Symbol(Symbol),

    /// An integer literal.
    Integer(i64),

    /// The not-a-number singleton.
    NaN,

    /// A matrix valued symbol.
    Matrix(Symbol),

    /// A compound term, some head applied to some arguments.
    Application { head: String, arguments: Vec<Term> },

    /// An abstraction, used as a value.
    Abstraction(Box<Definition>),
}

impl Term {
    pub fn symbol(name: &str) -> Self {
        Term::Symbol(Symbol::new(name))
    }

    pub fn integer(value: i64) -> Self {
        Term::Integer(value)
    }

    pub fn matrix(name: &str) -> Self {
        Term::Matrix(Symbol::new(name))
    }

    pub fn apply(head: &str, arguments: impl IntoIterator<Item = Term>) -> Self {
        Term::Application {
            head: head.to_owned(),
            arguments: arguments.into_iter().collect(),
        }
    }

    /// True if the term is a bare variable symbol (fresh or otherwise).
    pub fn is_symbol(&self) -> bool {
        matches!(self, Term::Symbol(_))
    }

    /// The kind of the term.
    ///
    /// An application is of matrix kind if any of its arguments is.
    pub fn kind(&self) -> Kind {
        match self {
            Term::Symbol(_) | Term::Integer(_) | Term::NaN => Kind::Number,
            Term::Matrix(_) => Kind::Matrix,
            Term::Application { arguments, .. } => {
                match arguments.iter().any(|a| a.kind() == Kind::Matrix) {
                    true => Kind::Matrix,
                    false => Kind::Number,
                }
            }
            Term::Abstraction(_) => Kind::Function,
        }
    }

    /// The symbols which occur free in the term, in symbol order.
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_free_symbols(&mut symbols);
        symbols
    }

    fn collect_free_symbols(&self, symbols: &mut BTreeSet<Symbol>) {
        match self {
            Term::Symbol(symbol) | Term::Matrix(symbol) => {
                symbols.insert(symbol.clone());
            }
            Term::Integer(_) | Term::NaN => {}
            Term::Application { arguments, .. } => {
                for argument in arguments {
                    argument.collect_free_symbols(symbols);
                }
            }
            Term::Abstraction(definition) => {
                let mut body_symbols = definition.body().free_symbols();
                for parameter in definition.parameters() {
                    body_symbols.remove(parameter);
                }
                symbols.append(&mut body_symbols);
            }
        }
    }
}

impl From<Symbol> for Term {
    fn from(symbol: Symbol) -> Self {
        Term::Symbol(symbol)
    }
}

impl From<Definition> for Term {
    fn from(definition: Definition) -> Self {
        Term::Abstraction(Box::new(definition))
    }
}

/// A source of fresh constants.
///
/// Constants are named `_c0`, `_c1`, … and are distinct from any symbol not minted by the same source.
#[derive(Debug, Default)]
pub struct FreshSymbols {
    count: usize,
}

impl FreshSymbols {
    /// A fresh constant.
    pub fn fresh(&mut self) -> Symbol {
        let index = self.count;
        self.count += 1;
        Symbol {
            name: format!("_c{index}"),
            fresh: Some(index),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Symbol(symbol) | Term::Matrix(symbol) => write!(f, "{symbol}"),
            Term::Integer(value) => write!(f, "{value}"),
            Term::NaN => write!(f, "nan"),
            Term::Application { head, arguments } => {
                write!(f, "{head}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            }
            Term::Abstraction(definition) => write!(f, "{definition}"),
        }
    }
}
