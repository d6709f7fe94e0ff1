//! Configuration and Constants Tests
//!
//! Tests to verify configuration values and board profiles are valid and
//! consistent.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --test config_tests

use ranging_game::config::*;
use ranging_game::game::event::GameEvent;
use ranging_game::game::profile::{HardwareProfile, RedLightHold, ACTIVE_PROFILE, REV_A, REV_B};
use ranging_game::protocol::report::Report;
use ranging_game::types::{Polarity, Threshold};

// =============================================================================
// Serial Link Tests
// =============================================================================

#[test]
fn serial_baud_matches_host() {
    assert_eq!(SERIAL_BAUD, 9_600);
}

#[test]
fn command_buffer_fits_longest_token() {
    assert!(COMMAND_BUFFER_SIZE >= "RESTART\r\n".len());
    assert_eq!(COMMAND_BUFFER_SIZE, 20);
}

#[test]
fn rx_ring_holds_several_commands() {
    assert!(UART_RX_RING_SIZE >= COMMAND_BUFFER_SIZE * 2);
}

#[test]
fn tx_ring_holds_a_full_report() {
    assert!(UART_TX_RING_SIZE >= REPORT_BUFFER_SIZE);
}

#[test]
fn report_buffer_fits_largest_event() {
    let mut report = Report::new();
    let event = GameEvent::TooClose {
        threshold: Threshold::from_cm(THRESHOLD_MAX_CM).unwrap(),
        distance_cm: i32::MIN,
        score: u32::MAX,
        lives: u8::MAX,
    };
    assert!(report.format(&event).is_ok());
}

// =============================================================================
// Timing Tests
// =============================================================================

#[test]
fn tick_interval_is_short() {
    assert_eq!(TICK_INTERVAL_MS, 10);
    assert!(GAME_OVER_IDLE_MS > TICK_INTERVAL_MS);
}

#[test]
fn trigger_pulse_width() {
    // HC-SR04 needs at least 10 us
    assert!(TRIGGER_PULSE_US >= 10);
}

// =============================================================================
// Game Limit Tests
// =============================================================================

#[test]
fn threshold_range_is_valid() {
    assert!(THRESHOLD_MIN_CM < THRESHOLD_MAX_CM);
    assert_eq!(Threshold::span(), 41);
    assert!(Threshold::from_cm(THRESHOLD_MIN_CM - 1).is_none());
    assert!(Threshold::from_cm(THRESHOLD_MAX_CM + 1).is_none());
}

#[test]
fn perfect_match_worth_max_points() {
    assert_eq!(MAX_ROUND_POINTS, 100);
    assert_eq!(POINTS_PER_CM_ERROR, 2);
    // Scoring cutoff sits on the largest target
    assert!((MAX_SCORING_DISTANCE_CM - f32::from(THRESHOLD_MAX_CM)).abs() < f32::EPSILON);
}

#[test]
fn session_starts_with_lives() {
    assert_eq!(STARTING_LIVES, 3);
}

// =============================================================================
// Pin Map Tests
// =============================================================================

#[test]
fn pins_are_distinct() {
    let all = [
        pins::TRIGGER,
        pins::ECHO,
        pins::PROXIMITY,
        pins::HOST_TX,
        pins::HOST_RX,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================================
// Profile Tests
// =============================================================================

#[test]
fn rev_a_profile() {
    assert_eq!(REV_A.proximity_polarity, Polarity::ActiveHigh);
    assert!((REV_A.red_light_percent() - 10.0).abs() < 0.001);
    assert_eq!(REV_A.red_light_hold, RedLightHold::Fixed { hold_ms: 2_000 });
    assert!(!REV_A.reset_on_mode_select);
    assert!(!REV_A.extended_reports);
}

#[test]
fn rev_b_profile() {
    assert_eq!(REV_B.proximity_polarity, Polarity::ActiveLow);
    assert!((REV_B.red_light_percent() - 2.5).abs() < 0.001);
    assert_eq!(
        REV_B.red_light_hold,
        RedLightHold::Polling {
            period_ms: 100,
            polls: 20
        }
    );
    assert_eq!(REV_B.hit_penalty_ms, 3_000);
    assert!(REV_B.reset_on_mode_select);
    assert!(REV_B.extended_reports);
}

#[test]
fn red_light_windows_last_two_seconds() {
    assert_eq!(REV_A.red_light_hold.duration_ms(), 2_000);
    assert_eq!(REV_B.red_light_hold.duration_ms(), 2_000);
}

#[test]
fn profiles_share_round_pacing() {
    for profile in [REV_A, REV_B] {
        assert_eq!(profile.round_intro_ms, 2_000);
        assert_eq!(profile.measure_settle_ms, 100);
        assert_eq!(profile.miss_pause_ms, 500);
        assert_eq!(profile.cooldown_ms, 3_000);
    }
}

#[test]
fn default_profile_is_active_profile() {
    assert_eq!(HardwareProfile::default(), ACTIVE_PROFILE);
    #[cfg(feature = "rev-b")]
    assert_eq!(ACTIVE_PROFILE, REV_B);
    #[cfg(not(feature = "rev-b"))]
    assert_eq!(ACTIVE_PROFILE, REV_A);
}
