//! Procedures over formulas.
//!
//! For the most part these are free functions, with method forms given on a [context](crate::context) where relevant.

pub mod ask;
