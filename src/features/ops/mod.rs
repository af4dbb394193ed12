pub mod dto;
pub mod handler;
mod helpers;
pub mod service;

pub use dto::{Operation, OpsResponse};
pub use handler::handle_ops;
pub use service::{AnswerProvider, OpsService};
