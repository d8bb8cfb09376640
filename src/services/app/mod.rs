pub mod log_service;
pub mod report_service;
pub mod run_service;

#[cfg(test)]
#[path = "tests/log_service_tests.rs"]
mod log_service_tests;
