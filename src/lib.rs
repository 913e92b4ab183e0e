pub mod config;
pub mod error;
pub mod server;
pub mod translate;

pub use config::ServiceConfig;
pub use error::{Result, ServiceError, TranslateError, TransportError};
pub use server::{build_router, AppState};
pub use translate::{HttpTransport, Transport, Translation, TranslationRequest, Translator};
