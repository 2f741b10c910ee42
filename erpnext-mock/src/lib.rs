//! erpnext-mock: a typed in-memory stub of the ERPNext REST surface.
//!
//! Documents are created as drafts with series-generated names, submitted
//! via PUT or `frappe.client.submit`, and looked up by doctype and name.
//! Routes are explicit method+path templates; there is no path-substring
//! matching.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
