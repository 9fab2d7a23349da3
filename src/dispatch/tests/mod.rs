//! Unit tests for the dispatch module.

mod subhandler_tests;
mod support;
