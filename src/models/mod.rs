pub mod activities;
pub mod api_models;

pub use activities::{Activity, ActivityTable};
pub use api_models::{EmailQuery, ErrorResponse, MessageResponse};
