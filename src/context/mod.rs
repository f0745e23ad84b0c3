/*!
The context --- within which facts are held and asks are made.

A context owns a [Config] and a store of [Facts].
Facts persist across asks, while the assumptions of an ask are used for that ask only.

# Example
```rust
# use otter_euf::config::Config;
# use otter_euf::context::EufContext;
# use otter_euf::procedures::ask::Answer;
# use otter_euf::structures::{proposition::Proposition, term::Term};
let mut the_context = EufContext::from_config(Config::default());

let a = Term::symbol("a");
let b = Term::symbol("b");
let c = Term::symbol("c");

the_context.assume(Proposition::eq(a.clone(), b.clone()));

let a_is_c = Proposition::eq(a, c.clone());
assert_eq!(the_context.ask(&a_is_c, &Proposition::True), Ok(Answer::Undetermined));
assert_eq!(
    the_context.ask(&a_is_c, &Proposition::eq(b, c)),
    Ok(Answer::True)
);

the_context.facts_mut().clear();
assert!(the_context.facts().is_empty());
```
*/

use crate::{
    cnf::Cnf,
    config::Config,
    procedures::ask::{self, Answer},
    structures::proposition::Proposition,
    types::err::{self},
};

/// An ordered store of propositions, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facts {
    propositions: Vec<Proposition>,
}

impl Facts {
    /// Adds a proposition to the store, returning true if the proposition was not already stored.
    pub fn assume(&mut self, proposition: Proposition) -> bool {
        if self.propositions.contains(&proposition) {
            return false;
        }
        self.propositions.push(proposition);
        true
    }

    /// Removes a proposition from the store, returning true if the proposition was stored.
    pub fn forget(&mut self, proposition: &Proposition) -> bool {
        match self.propositions.iter().position(|p| p == proposition) {
            Some(index) => {
                self.propositions.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.propositions.clear();
    }

    /// An iterator over the stored propositions, in the order stored.
    pub fn iter(&self) -> impl Iterator<Item = &Proposition> {
        self.propositions.iter()
    }

    pub fn len(&self) -> usize {
        self.propositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.propositions.is_empty()
    }

    /// The conjunctive normal form of the conjunction of the stored propositions.
    pub fn as_cnf(&self) -> Cnf {
        let mut cnf = Cnf::default();
        for proposition in &self.propositions {
            cnf.add_proposition(proposition);
        }
        cnf
    }
}

impl FromIterator<Proposition> for Facts {
    fn from_iter<I: IntoIterator<Item = Proposition>>(iter: I) -> Self {
        let mut facts = Facts::default();
        for proposition in iter {
            facts.assume(proposition);
        }
        facts
    }
}

/// A context, aka. a configuration together with some facts.
pub struct EufContext {
    /// The configuration of the context.
    pub config: Config,

    facts: Facts,
}

impl EufContext {
    /// A context with the given configuration and no facts.
    pub fn from_config(config: Config) -> Self {
        EufContext {
            config,
            facts: Facts::default(),
        }
    }

    /// Adds a fact to the context, returning true if the fact was not already present.
    pub fn assume(&mut self, proposition: Proposition) -> bool {
        self.facts.assume(proposition)
    }

    pub fn facts(&self) -> &Facts {
        &self.facts
    }

    pub fn facts_mut(&mut self) -> &mut Facts {
        &mut self.facts
    }

    /// Asks whether a proposition follows from the assumptions together with the facts of the context.
    ///
    /// See [procedures::ask](crate::procedures::ask) for details.
    pub fn ask(
        &self,
        proposition: &Proposition,
        assumptions: &Proposition,
    ) -> Result<Answer, err::AskError> {
        ask::ask(proposition, assumptions, &self.facts, &self.config)
    }
}

impl Default for EufContext {
    fn default() -> Self {
        EufContext::from_config(Config::default())
    }
}

#[cfg(test)]
mod facts_tests {
    use super::*;

    #[test]
    fn no_duplicates() {
        let mut facts = Facts::default();
        assert!(facts.assume(Proposition::boolean("p")));
        assert!(!facts.assume(Proposition::boolean("p")));
        assert!(facts.assume(Proposition::boolean("q")));
        assert_eq!(facts.len(), 2);
    }

    #[test]
    fn forget() {
        let mut facts: Facts = [Proposition::boolean("p"), Proposition::boolean("q")]
            .into_iter()
            .collect();
        assert!(facts.forget(&Proposition::boolean("p")));
        assert!(!facts.forget(&Proposition::boolean("p")));
        assert_eq!(facts.iter().collect::<Vec<_>>(), vec![&Proposition::boolean("q")]);
    }

    #[test]
    fn as_cnf() {
        let facts: Facts = [Proposition::boolean("p"), Proposition::True]
            .into_iter()
            .collect();
        assert_eq!(facts.as_cnf().clauses().count(), 1);
        assert!(Facts::default().as_cnf().is_empty());
    }
}
