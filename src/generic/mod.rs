//! Generic structures, not specific to the library.
pub mod minimal_pcg;
