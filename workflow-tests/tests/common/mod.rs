//! Common test utilities for workflow integration tests.

#![allow(dead_code)]

use rust_decimal::Decimal;
use workflow_tests::TestHarness;

/// Spawn a fresh pair of servers for one test.
pub async fn setup() -> TestHarness {
    TestHarness::spawn()
        .await
        .expect("Failed to spawn test harness")
}

/// Minimal bytes that pass for a PDF upload in the harness.
pub fn pdf_bytes() -> Vec<u8> {
    b"%PDF-1.4 harness fixture".to_vec()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}
