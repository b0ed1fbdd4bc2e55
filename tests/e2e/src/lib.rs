//! Browser and HTTP helpers for end-to-end tests against a locally started `web` server.
//! The tests need a Rust toolchain, Chrome, and network access, so they are `#[ignore]`d;
//! run them with `cargo test -p e2e -- --ignored`.

pub mod browser;
pub mod test_server;
