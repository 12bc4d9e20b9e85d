//! Tuning constants shared by the controllers.

/// Viewport width (px) at and above which the collapsible menu force-closes.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Quiet period for the resize debounce, in milliseconds.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Gap kept between the open menu panel and the bottom of the viewport, in px.
pub const MENU_BOTTOM_MARGIN: i32 = 20;

/// Scroll offset fallback when no `<header>` element is present, in px.
pub const HEADER_OFFSET_FALLBACK: f64 = 80.0;

/// Total duration of a counter animation, in milliseconds.
pub const COUNT_UP_DURATION_MS: u32 = 2000;

/// Tick interval of a counter animation, in milliseconds.
pub const COUNT_UP_TICK_MS: u32 = 16;

/// Delay between a successful submit and the confirmation redirect.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// How long a banner notification stays on screen before auto-dismissal.
pub const NOTIFICATION_LIFETIME_MS: u32 = 5_000;

/// Lifetime of a ripple span before it is removed from the DOM.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Destination of the post-submit redirect.
pub const CONFIRMATION_URL: &str = "thank_you.html";

/// Inline SVG shown in place of images that failed to load.
pub const IMAGE_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"300\"%3E%3Crect fill=\"%23f8f9fa\" width=\"400\" height=\"300\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" fill=\"%236c757d\"%3EBild nicht verf%C3%BCgbar%3C/text%3E%3C/svg%3E";
