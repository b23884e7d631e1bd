pub mod mocks;
pub mod requests;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::{CountingStore, UnavailableStore};
#[allow(unused_imports)]
pub use requests::{get, post_session, ApiCall};
pub use setup::TestSetupBuilder;
