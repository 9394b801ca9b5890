//! Shared helpers for unit and integration tests.  Only compiled for tests, or when the
//! `enable-test-utils` feature is active.

pub mod msg_utilities;
pub mod test_constants;
pub mod test_utilities;
