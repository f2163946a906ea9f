//! HTTP 中间件

pub mod logging;
pub mod panic;

pub use logging::logging_middleware;
pub use panic::handle_panic;
