// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn probabilities_are_valid() {
    for p in [
        PARTICLE_SPAWN_PROBABILITY,
        GLITCH_PROBABILITY,
        STATUS_FLICKER_PROBABILITY,
    ] {
        assert!((0.0..=1.0).contains(&p));
    }
    assert!(RING_EASE > 0.0 && RING_EASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn random_ranges_are_ordered() {
    assert!(PARTICLE_SIZE_MIN > 0.0 && PARTICLE_SIZE_MAX > PARTICLE_SIZE_MIN);
    assert!(PARTICLE_SPEED_MIN > 0.0 && PARTICLE_SPEED_MAX > PARTICLE_SPEED_MIN);
    assert!(PARTICLE_LIFE_MIN > 0.0 && PARTICLE_LIFE_MAX > PARTICLE_LIFE_MIN);
    assert!(TYPING_DELAY_MAX_MS > TYPING_DELAY_MIN_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_pool_outlasts_a_lifetime_of_spawns() {
    // one spawn per frame at most for a full lifetime still fits
    assert!(PARTICLE_POOL_CAPACITY as f32 >= PARTICLE_LIFE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_timings_match_page_contract() {
    assert_eq!(COPY_CONFIRM_MS, 1000);
    assert_eq!(GLITCH_MS, 100);
    assert_eq!(CLICK_PULSE_MS, 200);
    assert_eq!(PROCESSING_MS, 500);
    assert_eq!(STATUS_FLICKER_INTERVAL_MS, 5000);
    assert_eq!(TYPING_SETTLE_MS, 700);
    // a flicker always reverts before the next roll
    assert!(STATUS_FLICKER_MS < STATUS_FLICKER_INTERVAL_MS);
}

#[test]
fn overlay_threshold_and_scan_period() {
    assert_eq!(OVERLAY_MIN_VIEWPORT_WIDTH, 768.0);
    assert_eq!(SCAN_PERIOD_FRAMES, 50);
    assert_eq!(HUD_OFFSET, glam::Vec2::new(20.0, 20.0));
}
