mod session;

pub use session::PENDING_LOGIN_TTL;
pub use session::Session;
pub use session::SessionManager;
