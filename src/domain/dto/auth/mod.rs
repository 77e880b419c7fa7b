pub mod callback_query;
pub mod oidc_response;

pub use callback_query::*;
pub use oidc_response::*;
