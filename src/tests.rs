// Shared fixtures and test doubles
pub mod common;

// Include client tests
#[path = "client_test.rs"]
mod client_tests;

// Include integration tests
#[path = "integration_tests.rs"]
mod integration_tests;
