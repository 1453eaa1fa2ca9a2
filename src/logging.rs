//! Installs the global `tracing` subscriber.

use tracing::Level;

/// Routes `tracing` events to the browser console on `wasm32`, or to
/// stdout everywhere else.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init(max_level: Level) {
    #[cfg(target_arch = "wasm32")]
    {
        use tracing_subscriber_wasm::MakeConsoleWriter;

        _ = tracing_subscriber::fmt()
            .with_writer(
                // keeps the JS backtrace off of every trace-level event
                MakeConsoleWriter::default().map_trace_level_to(Level::DEBUG),
            )
            .with_max_level(max_level)
            // the browser has no usable clock for the fmt timer
            .without_time()
            .try_init();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        _ = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .try_init();
    }
}
