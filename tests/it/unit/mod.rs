//! Unit tests for topodraw.

mod settings_tests;
mod topology_tests;
