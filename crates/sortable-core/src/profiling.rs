//! Profiling utilities based on the `puffin` crate.

use std::sync::OnceLock;

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Default address for the puffin HTTP server.
pub const DEFAULT_PROFILING_ADDR: &str = "0.0.0.0:8585";

/// Global profiling server instance.
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Enable puffin scopes and serve them over HTTP on `addr`.
///
/// # Example
/// ```no_run
/// use sortable_core::profiling::{init_profiling, DEFAULT_PROFILING_ADDR};
///
/// init_profiling(DEFAULT_PROFILING_ADDR);
/// ```
pub fn init_profiling(addr: &str) {
    puffin::set_scopes_on(true);

    match puffin_http::Server::new(addr) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", addr);
            // Keep the server alive for the rest of the process
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per frame in the host's main loop.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
