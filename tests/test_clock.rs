use std::time::Duration;

use arena_shooter::clock::FrameClock;

#[test]
fn budget_matches_target_fps() {
    let clock = FrameClock::new(50);
    assert_eq!(clock.frame_budget(), Duration::from_millis(20));
}

#[test]
fn tick_never_returns_faster_than_budget() {
    let mut clock = FrameClock::new(60);
    for _ in 0..3 {
        let dt = clock.tick();
        assert!(dt >= 1.0 / 60.0 - 1e-4, "dt = {dt}");
    }
}

#[test]
fn tick_reports_real_elapsed_time_when_frame_overruns() {
    let mut clock = FrameClock::new(60);
    clock.tick();
    std::thread::sleep(Duration::from_millis(50));
    let dt = clock.tick();
    assert!(dt >= 0.05, "dt = {dt}");
}
