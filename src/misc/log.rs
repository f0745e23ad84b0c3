/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [classification](crate::euf::classify) of atoms.
    pub const CLASSIFY: &str = "classify";

    /// Logs related to [abstraction](crate::euf::abstraction) of terms and predicates.
    pub const ABSTRACTION: &str = "abstraction";

    /// Logs related to [distribution](crate::euf::distribute) of expanded clauses.
    pub const DISTRIBUTION: &str = "distribution";

    /// Logs related to [preprocessing](crate::euf::preprocess) of an encoded formula.
    pub const PREPROCESSING: &str = "preprocessing";

    /// Logs related to the [oracle](crate::oracle).
    pub const ORACLE: &str = "oracle";

    /// Logs related to [congruence closure](crate::oracle::congruence).
    pub const CONGRUENCE: &str = "congruence";

    /// Logs related to the [ask procedure](crate::procedures::ask).
    pub const ASK: &str = "ask";
}
