//! Application configuration.
//!
//! Centralized constants for the Tepno Tech front-end. Everything here is
//! compiled in; the site reads no environment and persists nothing.

/// Vertical scroll offset (in CSS pixels) above which the navbar turns opaque.
///
/// The comparison is strict: an offset of exactly 50 keeps the transparent bar.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// First half of the wordmark, rendered in the accent colour.
pub const BRAND_PRIMARY: &str = "TEPNO";

/// Second half of the wordmark.
pub const BRAND_SECONDARY: &str = "TECH";

/// Logo shown next to the wordmark.
pub const LOGO_SRC: &str = "/assets/tt.png";

/// Alt text for the logo.
pub const LOGO_ALT: &str = "SARC Technology Logo";

/// Hero banner background image.
pub const HERO_BACKGROUND: &str = "/assets/inner-header.webp";

/// Header title used when the page supplies none.
pub const DEFAULT_TITLE: &str = "About Us";

/// Breadcrumb text used when the page supplies none.
pub const DEFAULT_BREADCRUMB: &str = "About Us";

/// Appended to the document title.
pub const SITE_NAME: &str = "Tepno Tech";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
