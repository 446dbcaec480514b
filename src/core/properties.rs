//! Property-based tests for the ranking core's invariants (see the
//! testable-properties list this crate is built against).
