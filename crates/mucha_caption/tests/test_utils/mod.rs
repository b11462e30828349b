//! Shared test utilities.

mod mock_driver;

pub use mock_driver::{MockDriver, MockResponse};
