pub mod auth;
pub mod session;
pub mod property;
pub mod schedule;
pub mod client;
pub mod stats;

pub use auth::{normalize_user_type, Credentials, LoginRequest, LoginResponse, UserType};
pub use session::{PersistedSession, SessionSnapshot};
pub use property::{NewProperty, Property, TipoImovel};
pub use schedule::{Agendamento, ConfirmRequest, Pessoa, VisitRequest};
pub use client::Cliente;
pub use stats::{AdminAgendamentos, BairroCount};
