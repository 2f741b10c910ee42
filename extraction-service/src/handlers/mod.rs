mod health;
mod upload;

pub use health::{health_check, service_index};
pub use upload::{upload_invoice, upload_po};
