// Shared test utilities

pub mod helpers;
pub mod stub_server;
