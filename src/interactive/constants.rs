//! Constants for the interactive skip picker
//!
//! Timing values and layout dimensions shared by the event loop and the
//! components.

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the header with the checkout breadcrumb
pub const HEADER_HEIGHT: u16 = 5;

/// Height of the selection summary bar
pub const SUMMARY_BAR_HEIGHT: u16 = 4;

/// Height of the shortcuts/status line
pub const FOOTER_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 5;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 64;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Checkout flow position
pub const CHECKOUT_STEP: usize = 3;
pub const CHECKOUT_STEP_COUNT: usize = 6;

// Page copy
pub const PAGE_TITLE: &str = "Choose Your Perfect Skip";

/// Selling points shown under the page title
pub const SERVICE_FEATURES: [&str; 4] = [
    "Free Delivery",
    "14-Day Hire",
    "Fully Insured",
    "Licensed Operator",
];

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
