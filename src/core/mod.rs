pub mod diagnostics;
pub mod app_state;

pub use diagnostics::{AuthDiagnostics, LogDiagnostics, NoopDiagnostics};
pub use app_state::AppState;
