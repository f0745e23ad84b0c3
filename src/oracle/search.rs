/*!
The search procedure of the oracle.

An [Oracle] holds a borrow of an encoded formula, a valuation of the atoms of the formula, and a trail of the steps taken to reach the valuation.

Each step on the trail is one of:
- A decision, which may later be revised.
- A revised decision, aka. a decision whose value has been flipped, which will not be revised again.
- A propagation, forced by some clause given the steps before it.

Backtracking pops steps from the trail until some decision which has not been revised, and flips the value of the decision.
If there is no such decision, each valuation has been (implicitly) explored and the formula is unsatisfiable.

The search is complete, but not clever: there is no clause learning and propagation revisits every clause.
Formulas queried by an [ask](crate::procedures::ask) are small, and so this is (mostly) fine.
*/

use rand::{Rng, SeedableRng};

use crate::{
    cnf::EncodedCnf,
    config::{Config, PolarityLean},
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    oracle::{congruence::CongruenceClosure, Model, Solution, TheoryMode},
    structures::{
        atom::{Atom, FALSUM_ATOM},
        clause::{Clause, ClauseStatus},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self},
};

/// A step taken to reach a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Decision(CLiteral),
    Flipped(CLiteral),
    Propagated(CLiteral),
}

impl Step {
    pub fn literal(&self) -> CLiteral {
        match self {
            Step::Decision(literal) | Step::Flipped(literal) | Step::Propagated(literal) => *literal,
        }
    }
}

/// Ok results of [apply_consequences](Oracle::apply_consequences).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyConsequencesOk {
    /// Some clause, or the theory, conflicts with the valuation.
    Conflict,

    /// There were no (further) consequences to apply.
    Exhausted,
}

/// Ok results of [make_decision](Oracle::make_decision).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Counts of things which happened during a search.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    pub iterations: usize,
    pub decisions: usize,
    pub propagations: usize,
    pub conflicts: usize,
    pub theory_checks: usize,
}

/// The state of a search for a witness.
pub struct Oracle<'f> {
    formula: &'f EncodedCnf,

    mode: TheoryMode,

    polarity_lean: PolarityLean,

    theory_propagation: bool,

    valuation: CValuation,

    trail: Vec<Step>,

    rng: MinimalPCG32,

    pub counters: Counters,
}

impl<'f> Oracle<'f> {
    /// A fresh search over the given formula.
    ///
    /// Fails if some (non-zero) literal of the formula has an atom which is not the image of any statement.
    pub fn new(
        formula: &'f EncodedCnf,
        mode: TheoryMode,
        config: &Config,
    ) -> Result<Self, err::EncodingError> {
        for clause in formula.clauses() {
            for atom in clause.atoms() {
                if formula.statement_of(atom).is_none() {
                    log::error!(target: targets::ORACLE, "Atom {atom} has no statement");
                    return Err(err::EncodingError::UnknownAtom(atom));
                }
            }
        }

        let mut valuation = vec![None; formula.atom_count() as usize + 1];
        valuation[FALSUM_ATOM as usize] = Some(false);

        Ok(Oracle {
            formula,
            mode,
            polarity_lean: config.polarity_lean.value,
            theory_propagation: config.theory_propagation.value,
            valuation,
            trail: Vec::default(),
            rng: MinimalPCG32::seed_from_u64(config.seed.value),
            counters: Counters::default(),
        })
    }

    /// Searches for a witness to the formula.
    pub fn solve(&mut self) -> Solution {
        if self.formula.clauses().any(|clause| clause.is_falsum()) {
            log::debug!(target: targets::ORACLE, "Formula contains falsum");
            return Solution::Unsatisfiable;
        }

        let solution = 'solve_loop: loop {
            self.counters.iterations += 1;

            match self.apply_consequences() {
                ApplyConsequencesOk::Conflict => {
                    if self.backtrack().is_none() {
                        break 'solve_loop Solution::Unsatisfiable;
                    }
                }

                ApplyConsequencesOk::Exhausted => match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        self.record(Step::Decision(decision));
                    }
                    DecisionOk::Exhausted => break 'solve_loop Solution::Witness(self.model()),
                },
            }
        };

        log::debug!(
            target: targets::ORACLE,
            "{solution} after {} decisions, {} conflicts, {} theory checks",
            self.counters.decisions,
            self.counters.conflicts,
            self.counters.theory_checks
        );

        solution
    }

    /// Propagates unit clauses until a fixpoint, and then checks the valuation against the theory.
    ///
    /// The theory is checked on every valuation if [theory propagation](crate::config::Config::theory_propagation) is set, and otherwise only on full valuations.
    pub fn apply_consequences(&mut self) -> ApplyConsequencesOk {
        let formula = self.formula;

        'propagation: loop {
            let mut progress = false;

            for clause in formula.clauses() {
                match clause.status(&self.valuation) {
                    ClauseStatus::Conflict => {
                        log::trace!(target: targets::ORACLE, "Conflict on {}", clause.as_dimacs(false));
                        self.counters.conflicts += 1;
                        return ApplyConsequencesOk::Conflict;
                    }

                    ClauseStatus::Unit(literal) => {
                        self.counters.propagations += 1;
                        self.record(Step::Propagated(literal));
                        progress = true;
                    }

                    ClauseStatus::Satisfied | ClauseStatus::Open => {}
                }
            }

            if !progress {
                break 'propagation;
            }
        }

        let full = self.valuation.unvalued_atoms().next().is_none();
        if (self.theory_propagation || full) && !self.theory_consistent() {
            log::trace!(target: targets::ORACLE, "Theory conflict");
            self.counters.conflicts += 1;
            return ApplyConsequencesOk::Conflict;
        }

        ApplyConsequencesOk::Exhausted
    }

    /// Chooses a value for the first atom without a value, if any.
    pub fn make_decision(&mut self) -> DecisionOk {
        let Some(atom) = self.valuation.unvalued_atoms().next() else {
            return DecisionOk::Exhausted;
        };

        self.counters.decisions += 1;
        let value = self.rng.random_bool(self.polarity_lean);
        let decision = CLiteral::new(atom, value);
        log::trace!(target: targets::ORACLE, "Decision {decision}");
        DecisionOk::Literal(decision)
    }

    /// Undoes the valuation to the most recent decision which has not been revised, and revises the decision.
    ///
    /// Returns the revised decision, or nothing if there was no decision to revise.
    pub fn backtrack(&mut self) -> Option<CLiteral> {
        while let Some(step) = self.trail.pop() {
            self.valuation[step.literal().atom() as usize] = None;

            if let Step::Decision(decision) = step {
                let revised = decision.negate();
                log::trace!(target: targets::ORACLE, "Revised {decision} to {revised}");
                self.record(Step::Flipped(revised));
                return Some(revised);
            }
        }
        None
    }

    /// True if the valued equalities and disequalities of the formula are consistent.
    ///
    /// Always true in propositional mode.
    pub fn theory_consistent(&mut self) -> bool {
        if self.mode == TheoryMode::Propositional {
            return true;
        }
        self.counters.theory_checks += 1;

        let mut closure = CongruenceClosure::default();
        for (atom, value) in self.valuation.atom_value_pairs() {
            let Some(value) = value else {
                continue;
            };
            let Some((left, right, is_equality)) = self
                .formula
                .statement_of(atom)
                .and_then(|statement| statement.as_relation())
            else {
                continue;
            };

            let left = closure.add_term(left);
            let right = closure.add_term(right);
            match is_equality == value {
                true => closure.merge(left, right),
                false => closure.assert_distinct(left, right),
            }
        }

        closure.consistent()
    }

    /// The current value of an atom, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom).flatten()
    }

    /// The steps taken to reach the current valuation, in order.
    pub fn trail(&self) -> &[Step] {
        &self.trail
    }

    fn record(&mut self, step: Step) {
        let literal = step.literal();
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.trail.push(step);
    }

    fn model(&self) -> Model {
        let values = self
            .formula
            .statements()
            .filter_map(|(atom, statement)| {
                self.value_of(atom).map(|value| (statement.clone(), value))
            })
            .collect();
        Model { values }
    }
}
