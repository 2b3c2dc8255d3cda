/// Server services
pub mod session;

pub use session::{Claims, SessionService, MAX_SESSION_MINUTES};
