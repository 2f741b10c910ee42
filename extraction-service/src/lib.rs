//! extraction-service: the mock Document Intelligence API.
//!
//! Accepts invoice and purchase order PDF uploads and answers with canned
//! extraction payloads; no real document parsing happens here.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod mock_data;
pub mod services;
pub mod startup;
