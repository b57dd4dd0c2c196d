// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: REST endpoint base URL
//! - **Notifications**: Toast display and exit timings
//! - **Login**: Phrase rotation and intro timings
//! - **Particles**: Background animation constants

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base URL of the BIBLIOSENA REST service when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays visible before auto-dismiss (milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3500;

/// Minimum configurable toast duration (milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 1000;

/// Maximum configurable toast duration (milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

/// Length of the toast exit transition before removal (milliseconds).
pub const TOAST_EXIT_MS: u64 = 260;

// ==========================================================================
// Login Screen Defaults
// ==========================================================================

/// Period between two phrase rotations (milliseconds).
pub const PHRASE_ROTATION_MS: u64 = 3200;

/// Duration of the phrase fade-out before the text changes (milliseconds).
pub const PHRASE_FADE_MS: u64 = 600;

/// Time after startup before the intro marker is cleared (milliseconds).
pub const INTRO_DURATION_MS: u64 = 1200;

// ==========================================================================
// Particle Defaults
// ==========================================================================

/// Number of particles in the login background.
pub const PARTICLE_COUNT: usize = 60;

/// Pointer influence radius in logical pixels.
pub const POINTER_INFLUENCE_RADIUS: f32 = 160.0;

/// Scale applied to the pointer push per frame.
pub const POINTER_FORCE_SCALE: f32 = 1.4;

/// Vertical position recycled particles restart from.
pub const PARTICLE_RESPAWN_Y: f32 = -10.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MAX_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(TOAST_EXIT_MS < MIN_TOAST_DURATION_MS);

    assert!(PHRASE_FADE_MS < PHRASE_ROTATION_MS);

    assert!(PARTICLE_COUNT > 0);
    assert!(POINTER_INFLUENCE_RADIUS > 0.0);
    assert!(PARTICLE_RESPAWN_Y < 0.0);
};
