mod gracefullshutdown;
mod logs;
mod response;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::response::{send_error, send_response};
