//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering happy paths, error
//! cases, and edge cases for all public APIs.

mod decorator_tests;
mod domain_tests;
