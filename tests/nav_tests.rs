// Host-side tests for console nav state and randomized status effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
}

use crate::core::nav::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn labels_render_bracketed() {
    assert_eq!(LinkStatus::Active.label(), "[ACTIVE]");
    assert_eq!(LinkStatus::Standby.label(), "[STANDBY]");
    let labels: Vec<_> = SystemStatus::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["[ONLINE]", "[SYNCING]", "[SCANNING]", "[ACTIVE]"]);
}

#[test]
fn hover_activates_and_leave_reverts() {
    let mut nav = NavState::new(3);
    assert_eq!(nav.enter(1), LinkStatus::Active);
    assert_eq!(nav.status(1), LinkStatus::Active);
    assert_eq!(nav.leave(1), LinkStatus::Standby);
    assert_eq!(nav.status(1), LinkStatus::Standby);
}

#[test]
fn selected_link_stays_active_on_leave() {
    let mut nav = NavState::new(3);
    nav.enter(2);
    nav.click(2);
    assert_eq!(nav.leave(2), LinkStatus::Active);
    assert!(nav.is_selected(2));
}

#[test]
fn click_resets_other_links() {
    let mut nav = NavState::new(4);
    nav.enter(0);
    nav.enter(3);
    nav.click(1);
    assert_eq!(nav.selected(), Some(1));
    for i in [0, 2, 3] {
        assert_eq!(nav.status(i), LinkStatus::Standby, "link {i}");
        assert!(!nav.is_selected(i));
    }
    assert_eq!(nav.status(1), LinkStatus::Active);
}

#[test]
fn at_most_one_link_selected_for_any_click_sequence() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut nav = NavState::new(5);
    for _ in 0..1000 {
        let i = rng.gen_range(0..5);
        match rng.gen_range(0..3) {
            0 => {
                nav.enter(i);
            }
            1 => {
                nav.leave(i);
            }
            _ => nav.click(i),
        }
        let selected = (0..nav.len()).filter(|&j| nav.is_selected(j)).count();
        assert!(selected <= 1);
        if let Some(s) = nav.selected() {
            assert_eq!(nav.status(s), LinkStatus::Active);
        }
    }
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut nav = NavState::new(2);
    nav.click(1);
    nav.click(7);
    assert_eq!(nav.selected(), Some(1));
    assert_eq!(nav.enter(9), LinkStatus::Standby);
    assert!(!nav.begin_processing(9));
}

#[test]
fn processing_is_not_reentrant() {
    let mut nav = NavState::new(2);
    assert!(nav.begin_processing(0));
    assert!(!nav.begin_processing(0));
    assert!(nav.begin_processing(1));
    nav.finish_processing(0);
    assert!(!nav.is_processing(0));
    assert!(nav.begin_processing(0));
}

#[test]
fn glitch_fires_about_three_in_ten() {
    let mut rng = StdRng::seed_from_u64(12);
    let n = 20_000;
    let hits = (0..n).filter(|_| roll_glitch(&mut rng)).count();
    let rate = hits as f64 / n as f64;
    assert!((0.27..0.33).contains(&rate), "glitch rate {rate}");
}

#[test]
fn status_flicker_rate_and_spread() {
    let mut rng = StdRng::seed_from_u64(13);
    let n = 40_000;
    let mut counts = [0usize; 4];
    let mut fired = 0;
    for _ in 0..n {
        if let Some(s) = roll_status_flicker(&mut rng) {
            fired += 1;
            let idx = SystemStatus::ALL.iter().position(|x| *x == s).unwrap();
            counts[idx] += 1;
        }
    }
    let rate = fired as f64 / n as f64;
    assert!((0.18..0.22).contains(&rate), "flicker rate {rate}");
    for c in counts {
        let share = c as f64 / fired as f64;
        assert!((0.2..0.3).contains(&share), "status share {share}");
    }
}

#[test]
fn reclick_while_processing_keeps_selection_and_flag() {
    let mut nav = NavState::new(3);
    assert!(!nav.is_empty());
    assert_eq!(nav.len(), 3);
    nav.click(0);
    assert!(nav.begin_processing(0));
    nav.click(0);
    assert!(nav.is_processing(0));
    assert_eq!(nav.selected(), Some(0));
    nav.click(2);
    assert!(nav.is_processing(0));
    assert!(!nav.is_processing(2));
    assert_eq!(nav.status(0), LinkStatus::Standby);
}

#[test]
fn empty_nav_has_no_links() {
    let mut nav = NavState::new(0);
    assert!(nav.is_empty());
    nav.click(0);
    assert_eq!(nav.selected(), None);
}
