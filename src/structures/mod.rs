//! Key structures, such as terms, statements, literals, and clauses.
//!
//! # Terms and statements
//!
//! The input to an [ask](crate::procedures::ask) is a [proposition], a boolean combination of [statements](statement).
//! Statements are built from [predicates](predicate) applied to [terms](term), and preprocessing introduces [definitions](definition) of compound terms.
//!
//! # Encoded formulas
//!
//! A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses.
//! Inside an [encoded formula](crate::cnf::EncodedCnf) each statement is mapped to an [atom], and a clause is a set of [literals](literal) over those atoms.
//!
//! A [valuation] is a (partial) function from atoms to truth values.

pub mod atom;
pub mod clause;
pub mod definition;
pub mod literal;
pub mod predicate;
pub mod proposition;
pub mod statement;
pub mod term;
pub mod valuation;
