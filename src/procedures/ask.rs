/*!
Determines whether a proposition is true, false, or undetermined given some facts.

# Overview

An ask is decided by two queries to the [oracle](crate::oracle):
- Whether the facts together with the proposition are satisfiable (*can be true*).
- Whether the facts together with the negation of the proposition are satisfiable (*can be false*).

And, the answer is read off from the pair:

| can be true | can be false | answer |
|-------------|--------------|--------|
| yes         | yes          | [Undetermined](Answer::Undetermined) |
| yes         | no           | [True](Answer::True) |
| no          | yes          | [False](Answer::False) |
| no          | no           | [InconsistentAssumptions](err::AskError::InconsistentAssumptions) |

Before either query:
- The facts are the assumptions of the ask followed by the facts of the context, encoded together once.
- The formula of facts and proposition is [validated](crate::euf::classify::validate), and so is the formula of facts and negated proposition if [validate_negation](crate::config::Config::validate_negation) is set.
- Each formula is [preprocessed](crate::euf::preprocess) independently, with its own definitions and constants.

```rust
# use otter_euf::config::Config;
# use otter_euf::context::Facts;
# use otter_euf::procedures::ask::{ask, Answer};
# use otter_euf::structures::{proposition::Proposition, term::Term};
let a = Term::symbol("a");
let b = Term::symbol("b");
let f = |t: Term| Term::apply("f", [t]);

let answer = ask(
    &Proposition::eq(f(a.clone()), f(b.clone())),
    &Proposition::eq(a, b),
    &Facts::default(),
    &Config::default(),
);
assert_eq!(answer, Ok(Answer::True));
```
*/

use crate::{
    cnf::{Cnf, EncodedCnf},
    config::Config,
    context::Facts,
    euf::{classify::validate, preprocess::preprocess},
    misc::log::targets::{self},
    oracle::{self, TheoryMode},
    structures::proposition::Proposition,
    types::err::{self},
};

/// The answer to an ask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    /// The proposition follows from the facts.
    True,

    /// The negation of the proposition follows from the facts.
    False,

    /// Neither the proposition nor its negation follows from the facts.
    Undetermined,
}

impl Answer {
    /// The answer as an optional boolean, with nothing for an undetermined answer.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Answer::True => Some(true),
            Answer::False => Some(false),
            Answer::Undetermined => None,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// Asks whether a proposition follows from some assumptions together with some facts.
///
/// For an ask without assumptions, use [Proposition::True].
pub fn ask(
    proposition: &Proposition,
    assumptions: &Proposition,
    facts: &Facts,
    config: &Config,
) -> Result<Answer, err::AskError> {
    log::debug!(target: targets::ASK, "Ask {proposition} given {assumptions}");

    let mut factbase = EncodedCnf::from_cnf(&Cnf::from_proposition(assumptions));
    factbase.add_from_cnf(&facts.as_cnf());

    let mut sat_true = factbase.clone();
    sat_true.add_from_cnf(&Cnf::from_proposition(proposition));

    let mut sat_false = factbase;
    sat_false.add_from_cnf(&Cnf::from_proposition(&!proposition.clone()));

    validate(&sat_true)?;
    if config.validate_negation.value {
        validate(&sat_false)?;
    }

    let sat_true = preprocess(&sat_true)?;
    let sat_false = preprocess(&sat_false)?;

    let can_be_true = oracle::solve(&sat_true, TheoryMode::CongruenceClosure, config)?.is_satisfiable();
    let can_be_false = oracle::solve(&sat_false, TheoryMode::CongruenceClosure, config)?.is_satisfiable();
    log::trace!(target: targets::ASK, "Can be true: {can_be_true}, can be false: {can_be_false}");

    let answer = match (can_be_true, can_be_false) {
        (true, true) => Answer::Undetermined,
        (true, false) => Answer::True,
        (false, true) => Answer::False,
        (false, false) => {
            log::info!(target: targets::ASK, "Inconsistent assumptions");
            return Err(err::AskError::InconsistentAssumptions);
        }
    };

    log::debug!(target: targets::ASK, "{proposition} is {answer}");
    Ok(answer)
}

#[cfg(test)]
mod ask_tests {
    use super::*;
    use crate::structures::term::Term;

    fn a() -> Term {
        Term::symbol("a")
    }

    fn b() -> Term {
        Term::symbol("b")
    }

    fn bare_ask(proposition: &Proposition) -> Result<Answer, err::AskError> {
        ask(proposition, &Proposition::True, &Facts::default(), &Config::default())
    }

    #[test]
    fn constants() {
        assert_eq!(bare_ask(&Proposition::True), Ok(Answer::True));
        assert_eq!(bare_ask(&Proposition::False), Ok(Answer::False));
    }

    #[test]
    fn false_assumptions() {
        let answer = ask(
            &Proposition::eq(a(), b()),
            &Proposition::False,
            &Facts::default(),
            &Config::default(),
        );
        assert_eq!(answer, Err(err::AskError::InconsistentAssumptions));
    }

    #[test]
    fn facts_and_assumptions_combine() {
        let c = Term::symbol("c");
        let mut facts = Facts::default();
        facts.assume(Proposition::eq(b(), c.clone()));

        let answer = ask(
            &Proposition::eq(a(), c),
            &Proposition::eq(a(), b()),
            &facts,
            &Config::default(),
        );
        assert_eq!(answer, Ok(Answer::True));
    }

    #[test]
    fn negated_facts() {
        let answer = ask(
            &Proposition::eq(a(), b()),
            &Proposition::ne(b(), a()),
            &Facts::default(),
            &Config::default(),
        );
        assert_eq!(answer, Ok(Answer::False));
    }

    #[test]
    fn answer_as_bool() {
        assert_eq!(Answer::True.as_bool(), Some(true));
        assert_eq!(Answer::Undetermined.as_bool(), None);
    }
}
