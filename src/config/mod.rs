/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
The configuration is cloned into each [ask](crate::procedures::ask), and the relevant parts passed on to the [oracle](crate::oracle).

Each option is a [ConfigOption], which records the name of the option alongside the bounds of the option.

```rust
# use otter_euf::config::Config;
let mut config = Config::default();
assert!(!config.validate_negation.value);

config.polarity_lean.set(0.25);
assert_eq!(config.polarity_lean.value, 0.25);

config.polarity_lean.set(3.0);
assert_eq!(config.polarity_lean.value, 1.0);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The probability of valuing an atom true when deciding on the value of the atom.
pub type PolarityLean = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Validate the atoms of the facts with the negation of the proposition, in addition to the atoms of the facts with the proposition.
    pub validate_negation: ConfigOption<bool>,

    /// The probability of assigning positive polarity to a atom when freely choosing a atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// Check the consistency of equalities on each partial valuation reached by propagation, rather than only on full valuations.
    pub theory_propagation: ConfigOption<bool>,

    /// The seed for the source of randomness used when making decisions.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default context is configured to provide quick, deterministic, results.
    fn default() -> Self {
        Config {
            validate_negation: ConfigOption {
                name: "validate_negation",
                min: false,
                max: true,
                value: false,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            theory_propagation: ConfigOption {
                name: "theory_propagation",
                min: false,
                max: true,
                value: true,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn set_clamps() {
        let mut config = Config::default();
        config.polarity_lean.set(-0.5);
        assert_eq!(config.polarity_lean.value, 0.0);
        config.polarity_lean.set(0.25);
        assert_eq!(config.polarity_lean.value, 0.25);
        config.polarity_lean.set(2.0);
        assert_eq!(config.polarity_lean.value, 1.0);
    }

    #[test]
    fn set_nan_is_min() {
        let mut config = Config::default();
        config.polarity_lean.set(0.75);
        config.polarity_lean.set(f64::NAN);
        assert_eq!(config.polarity_lean.value, 0.0);
    }
}
