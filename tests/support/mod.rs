// tests/support/mod.rs
// Shared in-memory repositories and test doubles used by several
// integration test binaries. Individual test crates use different
// subsets, so silence the resulting dead_code noise here.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
