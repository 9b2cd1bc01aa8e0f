//! mercato-core: tipi condivisi tra client e server del catalogo (modelli, DTO HTTP, busta di risposta).
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod models;
pub mod protocol;
pub mod utils;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use models::{product::Product, user::User};
pub use protocol::http::{CreateProductRequest, CreateUserRequest, Envelope, HealthStatus};
pub use utils::now_timestamp;
