/*!
Flattening of formulas to equalities, aka. preprocessing for the congruence closure [oracle](crate::oracle).

The oracle understands equalities and disequalities between terms, and (through congruence) the structure of those terms.
It does not understand predicates.
So, before a formula is given to the oracle, each atom of the formula is rewritten to equalities and disequalities over fresh constants and [definitions](crate::structures::definition).

The rewrite is made of a handful of steps:
- [classify] determines the shape of each atom, and [validate](classify::validate) rejects formulas with atoms of an unsupported shape.
- [abstraction] rewrites each literal to a list of equalities, introducing (and caching) fresh constants for compound terms and predicate instances.
- [distribute] restores conjunctive normal form when a literal is rewritten to a conjunction.
- [preprocess] sequences abstraction and distribution over each clause of a formula.
*/

pub mod abstraction;
pub mod classify;
pub mod distribute;
pub mod preprocess;
