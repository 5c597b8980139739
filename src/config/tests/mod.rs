//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `validation`: Settings validation and derived values
//! - `repositories`: Repository directory parsing and lookup
//! - `verbosity`: Counted `-v` flags on the command line

mod helpers;
mod verbosity;
