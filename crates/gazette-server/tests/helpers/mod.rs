//! Test helpers para gazette-server.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod fake_source;

pub use client::{TestClient, TestResponse, client, client_with};
pub use fake_source::{FakeSource, article};
