pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! Queue sizes, HTTP timeouts and UI timing, grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying API completions back to the shell.
    /// A view never has more than one request in flight, so this only needs
    /// to absorb a burst of tab switches.
    pub const COMPLETION_QUEUE_SIZE: usize = 32;

    /// Buffer size of the channel carrying log records into the activity log.
    /// Records are dropped when it is full.
    pub const LOG_QUEUE_SIZE: usize = 256;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client timeouts. Expiry surfaces as a request error; nothing retries.
    pub mod http {
        use std::time::Duration;

        /// Time allowed to establish a TCP connection (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 5;

        /// Time allowed for a whole request/response exchange (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 15;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// Redraw interval when nothing else happens, drives the loading spinner (milliseconds)
        pub const TICK_RATE_MS: u64 = 120;

        pub const fn tick_rate() -> Duration {
            Duration::from_millis(TICK_RATE_MS)
        }
    }
}
