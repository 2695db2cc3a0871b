//! Parser tests.
//!
//! - `parser`: statement forms, precedence, and canonical rendering
//! - `errors`: error messages, locations, and recovery
