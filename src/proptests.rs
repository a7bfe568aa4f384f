//! Property-based tests for the reduction and inversion engine.
