pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! All tunables for the dashboard, organized by functional area.

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Base URL of the signal analytics backend.
    pub const API_BASE: &str = "http://localhost:5000";

    /// Path of the aggregated dashboard statistics endpoint.
    pub const STATS_PATH: &str = "/api/dashboard/stats";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying load results back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 32;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        /// Time allowed for establishing a TCP connection to the backend.
        /// The request itself is not bounded.
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// Key polling interval, which is also the redraw cadence.
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Characters kept from each end of a contract address.
        pub const ADDRESS_EDGE_CHARS: usize = 8;

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
