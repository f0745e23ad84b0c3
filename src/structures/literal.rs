//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The canonical implementation of the literal trait is as an integer, with the sign of the integer indicating the polarity of the literal.
//!
//! ```rust
//! # use otter_euf::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//! ```
//!
//! The literal `0` is the false sentinel, see [FALSUM].

use crate::structures::atom::{Atom, FALSUM_ATOM};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// True if the literal is the false sentinel.
    fn is_falsum(&self) -> bool;
}

/// The representation of a literal as an integer, with sign indicating polarity.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

/// A literal already resolved to false, which contributes nothing to a clause.
pub const FALSUM: CLiteral = FALSUM_ATOM as CLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn is_falsum(&self) -> bool {
        *self == FALSUM
    }
}
