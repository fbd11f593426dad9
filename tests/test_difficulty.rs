use dodge_hurdles::difficulty::{level_for_elapsed, recompute};
use dodge_hurdles::entities::Difficulty;

#[test]
fn initial_parameters() {
    let d = Difficulty::initial();
    assert_eq!(d.level, 1);
    assert_eq!(d.star_velocity, 3);
    assert_eq!(d.spawn_interval_ms, 2000);
}

#[test]
fn for_level_scales_velocity_and_interval() {
    let d = Difficulty::for_level(1);
    assert_eq!((d.star_velocity, d.spawn_interval_ms), (3, 1900));

    let d = Difficulty::for_level(4);
    assert_eq!((d.star_velocity, d.spawn_interval_ms), (6, 1600));
}

#[test]
fn spawn_interval_floors_at_500() {
    assert_eq!(Difficulty::for_level(15).spawn_interval_ms, 500);
    assert_eq!(Difficulty::for_level(16).spawn_interval_ms, 500);
    assert_eq!(Difficulty::for_level(1000).spawn_interval_ms, 500);
    assert_eq!(Difficulty::for_level(14).spawn_interval_ms, 600);
}

#[test]
fn level_steps_every_ten_seconds() {
    assert_eq!(level_for_elapsed(0), 1);
    assert_eq!(level_for_elapsed(9_999), 1);
    assert_eq!(level_for_elapsed(10_000), 2);
    assert_eq!(level_for_elapsed(25_000), 3);
}

#[test]
fn recompute_ignores_time_zero() {
    let d = Difficulty::initial();
    assert_eq!(recompute(d, 0), d);
}

#[test]
fn recompute_samples_first_second() {
    // Whole seconds = 0 is a multiple of ten, so level 1's own table applies
    let d = recompute(Difficulty::initial(), 16);
    assert_eq!(d.level, 1);
    assert_eq!(d.spawn_interval_ms, 1900);
}

#[test]
fn recompute_holds_between_boundaries() {
    let d = Difficulty::for_level(1);
    assert_eq!(recompute(d, 1_000), d);
    assert_eq!(recompute(d, 9_999), d);
}

#[test]
fn recompute_advances_on_boundary() {
    let d = recompute(Difficulty::for_level(1), 10_016);
    assert_eq!(d, Difficulty::for_level(2));
    assert_eq!(d.star_velocity, 4);
}

#[test]
fn recompute_skipped_boundary_is_caught_at_next_multiple() {
    // A frame that jumps from 9.9 s to 11.1 s misses the sample...
    let d = recompute(Difficulty::for_level(1), 11_100);
    assert_eq!(d.level, 1);
    // ...and the level catches up at 20 s
    let d = recompute(d, 20_000);
    assert_eq!(d.level, 3);
}

#[test]
fn recompute_never_lowers_level() {
    let ahead = Difficulty::for_level(5);
    assert_eq!(recompute(ahead, 10_000), ahead);
}
