//! Application-wide constants.
//!
//! Centralizes storage keys, outbound links and user-facing messages so the
//! renderers and stores agree on them.

// ============================================================================
// Persisted Storage Keys
// ============================================================================

/// Key holding the serialized gallery list
pub const GALLERY_STORAGE_KEY: &str = "sabor-gallery-items";

/// Key holding the serialized subscriber email list
pub const SUBSCRIBERS_STORAGE_KEY: &str = "newsletterSubscribers";

/// File name of the file-backed store inside the data directory
pub const STORAGE_FILE: &str = "storage.json";

// ============================================================================
// External Navigation Targets
// ============================================================================

/// Ticket purchase page
pub const TICKET_URL: &str =
    "https://www.saboronthebay.com/sabor-on-the-bay-events/sd-dia-de-los-muertos-cruise/";

/// VIP table reservation line
pub const RESERVATION_PHONE_URI: &str = "tel:3106297904";

/// Embedded map of the boarding location
pub const BOARDING_MAP_URL: &str = "https://maps.google.com/maps?q=1800%20N.%20Harbor%20Drive%20San%20Diego,%20CA%2092101&t=&z=15&ie=UTF8&iwloc=&output=embed";

// ============================================================================
// Newsletter Messages
// ============================================================================

/// Shown when the submitted address fails validation
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Shown when the subscriber list cannot be read or written
pub const STORAGE_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

// ============================================================================
// Preview Server
// ============================================================================

/// Default bind address for `sabor serve`
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default port for `sabor serve`
pub const DEFAULT_PORT: u16 = 8080;

/// Largest accepted upload body (25MB)
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// How long the server loop blocks before checking for shutdown
pub const SERVER_POLL_MS: u64 = 100;

/// Content type of a multi-file gallery upload
pub const BATCH_CONTENT_TYPE: &str = "application/json";

/// MIME type used when an upload or file carries none we recognize
pub const FALLBACK_MIME: &str = "application/octet-stream";
