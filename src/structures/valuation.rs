/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation as a vector of optional booleans, where:
- The zero index (first) element is false, as the reserved atom stands for a statement resolved to false.
- Each non-zero index of the vector is interpreted as an atom, though most interaction is through the valuation trait.

```rust
# use otter_euf::structures::valuation::Valuation;
let valuation = vec![Some(false), None, Some(true), None];

assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.unvalued_atoms().count(), 2);
```
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator through all (Atom, Value) pairs (excluding the reserved atom).
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation (excluding the reserved atom).
    fn atom_count(&self) -> usize;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| (atom as Atom, *value))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                _ => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
