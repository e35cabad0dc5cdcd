//! Parsing layout descriptions given on the command line or in config.
//!
//! See [`dsl`] for the grammar and the actual [`std::str::FromStr`] impl on
//! [`crate::relative::Layout`].

pub mod dsl;
