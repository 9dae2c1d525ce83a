pub mod error;
pub mod api_client;
pub mod auth_service;
pub mod property_service;
pub mod schedule_service;
pub mod support_service;

pub use error::ApiError;
pub use api_client::{auth_headers, ApiClient, Auth};
pub use auth_service::AuthApi;
pub use property_service::{AdminApi, PropertyApi};
pub use schedule_service::ScheduleApi;
pub use support_service::SupportApi;
