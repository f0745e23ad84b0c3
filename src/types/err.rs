//! Error types used in the library.
//!
//! - Unhandled input is raised when some atom of a formula has a shape the procedure does not support --- e.g. a ternary predicate, or an argument of matrix kind.
//! - Inconsistent assumptions are raised when the facts given to an ask are unsatisfiable on their own.
//! - Encoding errors are internal, and indicate some corruption of an encoded formula.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, statement::Statement, term::Term};

/// Errors from an [ask](crate::procedures::ask).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AskError {
    /// Some atom or term of the formula is not supported.
    Unhandled(UnhandledInput),

    /// Neither the proposition nor its negation is consistent with the facts.
    InconsistentAssumptions,

    /// Some encoded formula is corrupt.
    Encoding(EncodingError),
}

impl From<UnhandledInput> for AskError {
    fn from(e: UnhandledInput) -> Self {
        AskError::Unhandled(e)
    }
}

impl From<EncodingError> for AskError {
    fn from(e: EncodingError) -> Self {
        AskError::Encoding(e)
    }
}

impl From<PreprocessingError> for AskError {
    fn from(e: PreprocessingError) -> Self {
        match e {
            PreprocessingError::Unhandled(e) => AskError::Unhandled(e),
            PreprocessingError::Encoding(e) => AskError::Encoding(e),
        }
    }
}

/// Errors during [preprocessing](crate::euf::preprocess).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreprocessingError {
    /// Some atom of the formula could not be abstracted.
    Unhandled(UnhandledInput),

    /// Some literal of the formula has no statement.
    Encoding(EncodingError),
}

impl From<UnhandledInput> for PreprocessingError {
    fn from(e: UnhandledInput) -> Self {
        PreprocessingError::Unhandled(e)
    }
}

impl From<EncodingError> for PreprocessingError {
    fn from(e: EncodingError) -> Self {
        PreprocessingError::Encoding(e)
    }
}

/// Atoms or terms which cannot be flattened to equalities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnhandledInput {
    /// A predicate with two arguments which is not an equality or disequality, or a predicate with more than two arguments.
    Predicate(Statement),

    /// An atom which is not the application of a predicate.
    Literal(Statement),

    /// An argument of matrix kind.
    Matrix(Term),

    /// An argument which is NaN.
    NaN,
}

/// Errors from reading an [encoded formula](crate::cnf::EncodedCnf).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingError {
    /// A clause contains a literal whose atom is not in the encoding.
    UnknownAtom(Atom),
}

impl std::fmt::Display for AskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unhandled(e) => write!(f, "{e}"),
            Self::InconsistentAssumptions => write!(f, "Inconsistent assumptions"),
            Self::Encoding(e) => write!(f, "{e}"),
        }
    }
}

impl std::fmt::Display for UnhandledInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Predicate(statement) => {
                write!(f, "EUF: {statement} not allowed binary predicate")
            }
            Self::Literal(statement) => write!(f, "EUF: unsupported literal {statement}"),
            Self::Matrix(term) => write!(f, "EUF: {term} is of matrix kind"),
            Self::NaN => write!(f, "EUF: nan"),
        }
    }
}

impl std::fmt::Display for PreprocessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unhandled(e) => write!(f, "{e}"),
            Self::Encoding(e) => write!(f, "{e}"),
        }
    }
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAtom(atom) => write!(f, "Encoding: atom {atom} has no statement"),
        }
    }
}

impl std::error::Error for AskError {}
impl std::error::Error for UnhandledInput {}
impl std::error::Error for EncodingError {}
impl std::error::Error for PreprocessingError {}
