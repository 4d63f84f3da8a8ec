//! Customer Directory HTTP API.

pub mod handlers;
pub mod routes;

pub use handlers::DirectoryState;
pub use routes::create_router;
