pub mod authorization_state;
pub mod token_bundle;
pub mod claims;
pub mod session;

pub use authorization_state::*;
pub use token_bundle::*;
pub use claims::*;
pub use session::*;
