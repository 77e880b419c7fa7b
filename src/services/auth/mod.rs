pub mod pkce;
pub mod oidc_client;
pub mod auth_flow;
pub mod claims_decoder;
pub mod claims_verifier;
pub mod session_builder;
pub mod session_token_service;

pub use oidc_client::*;
pub use auth_flow::*;
pub use claims_decoder::*;
pub use claims_verifier::*;
pub use session_builder::*;
pub use session_token_service::*;
