//! A library for deciding propositions over equalities of uninterpreted terms.
//!
//! otter_euf asks whether a proposition is true, false, or undetermined given some facts, where the atoms of the proposition are unary predicates, equalities, and disequalities over uninterpreted functions (EUF).
//!
//! Roughly, an ask:
//! - Rewrites the facts together with the proposition (and, separately, together with the negation of the proposition) to [conjunctive normal form](crate::cnf).
//! - [Preprocesses](crate::euf::preprocess) each formula, so every compound term and every unary predicate is replaced by a fresh constant together with a defining equality.
//! - Queries a satisfiability [oracle](crate::oracle) on each formula, with equalities interpreted through [congruence closure](crate::oracle::congruence).
//!
//! # Orientation
//!
//! The library is designed around a [context], which holds a configuration and some facts.
//!
//! Useful starting points may be:
//! - The [ask procedure](crate::procedures::ask) to see how an answer is determined.
//! - The [structures] to familiarise yourself with terms, statements, and propositions.
//! - The [abstraction](crate::euf::abstraction) of literals to equalities.
//! - The [configuration](crate::config) to see what may be adjusted.
//!
//! # Examples
//!
//! ```rust
//! # use otter_euf::config::Config;
//! # use otter_euf::context::EufContext;
//! # use otter_euf::procedures::ask::Answer;
//! # use otter_euf::structures::{proposition::Proposition, term::Term};
//! # use otter_euf::types::err::{self};
//! let mut the_context = EufContext::from_config(Config::default());
//!
//! let a = Term::symbol("a");
//! let b = Term::symbol("b");
//!
//! let p_a = Proposition::unary("P", a.clone());
//! assert_eq!(the_context.ask(&p_a, &Proposition::True), Ok(Answer::Undetermined));
//! assert_eq!(the_context.ask(&p_a, &p_a), Ok(Answer::True));
//!
//! the_context.assume(Proposition::eq(a.clone(), b.clone()));
//! assert_eq!(
//!     the_context.ask(&Proposition::ne(a.clone(), b.clone()), &Proposition::True),
//!     Ok(Answer::False)
//! );
//! assert_eq!(
//!     the_context.ask(&Proposition::eq(a.clone(), b.clone()), &Proposition::ne(a, b)),
//!     Err(err::AskError::InconsistentAssumptions)
//! );
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the oracle can be filtered with `RUST_LOG=oracle …` or,
//! - The definitions introduced by abstraction can be found with `RUST_LOG=abstraction=trace …`
//!

#![allow(clippy::single_match)]
#![allow(clippy::len_without_is_empty)]

pub mod procedures;

pub mod cnf;
pub mod config;
pub mod context;
pub mod euf;
pub mod structures;
pub mod types;

pub mod generic;

pub mod oracle;

pub mod misc;
