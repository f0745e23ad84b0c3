/*!
(The internal representation of) an atom.

Each statement of an [encoded formula](crate::cnf::EncodedCnf) is identified with an atom, and each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

Atoms are assigned in order of first appearance, starting from 1.

The atom `0` is reserved, and does not stand for any statement.
Instead, the [literal](crate::structures::literal) `0` marks some statement already resolved to false.
And, a clause containing only `0` is unsatisfiable.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The reserved atom, which stands for no statement.
pub const FALSUM_ATOM: Atom = 0;
