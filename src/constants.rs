//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Drawer Geometry
// ============================================================================

/// Width of the sidebar drawer in layout pixels.
///
/// The drawer offset lives in `[-DRAWER_WIDTH, 0.0]`: fully closed at
/// `-DRAWER_WIDTH` (off-screen to the left), fully open at `0.0`.
pub const DRAWER_WIDTH: f32 = 280.0;

// ============================================================================
// Gesture Thresholds
// ============================================================================
// Values are in logical pixels, close to common platform conventions
// (Android touch slop is ~8dp, mobile drawer edge bands are ~40-60dp).

/// Minimum horizontal displacement before a move is claimed as a drawer
/// gesture. Below this the underlying list keeps the gesture.
pub const GESTURE_CLAIM_THRESHOLD: f32 = 10.0;

/// Width of the left-edge band from which a closed drawer can be
/// swiped open.
pub const EDGE_BAND_WIDTH: f32 = 50.0;

/// Release velocity (px/ms) above which the fling direction alone decides
/// the drawer target, regardless of distance traveled.
pub const FLING_VELOCITY: f32 = 0.3;

/// Slow partial drags beyond this distance flip the drawer even when the
/// W/3 distance rule did not fire.
pub const INTENT_DISTANCE: f32 = 80.0;

/// Smoothing factor for the exponential moving average over per-move
/// velocity samples.
pub const VELOCITY_SMOOTHING: f32 = 0.2;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Drawer open/close animation duration in milliseconds
pub const DRAWER_ANIMATION_MS: u64 = 300;

/// Maximum backdrop opacity (reached when the drawer is fully open)
pub const BACKDROP_MAX_OPACITY: f32 = 0.5;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the navigation bar in pixels
pub const NAV_BAR_HEIGHT: f32 = 60.0;

/// Height of the chart placeholder card
pub const CHART_PLACEHOLDER_HEIGHT: f32 = 200.0;

/// Default window size (portrait, phone-like)
pub const WINDOW_SIZE: (f32, f32) = (420.0, 860.0);

// ============================================================================
// UI Spacing Constants (for visual consistency)
// ============================================================================

/// Border radius - Medium (transaction rows)
pub const BORDER_RADIUS_MD: f32 = 12.0;
/// Border radius - Large (cards)
pub const BORDER_RADIUS_LG: f32 = 16.0;

/// Padding - Small
pub const PADDING_SM: f32 = 8.0;
/// Padding - Medium
pub const PADDING_MD: f32 = 16.0;
/// Padding - Large
pub const PADDING_LG: f32 = 20.0;

// ============================================================================
// Perf
// ============================================================================

/// Frame time above which a slow-frame warning is logged (ms).
/// 16.6ms is one frame at 60fps; 32ms means we dropped at least one.
pub const SLOW_FRAME_THRESHOLD_MS: f64 = 32.0;
