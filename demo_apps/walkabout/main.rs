//! Walkabout: a headless tour of the viewer core.
//!
//! Registers the stock six-clip repertoire, spawns the dummy character, and
//! scripts the same interactions the on-screen UI offers (gesture buttons
//! and click-to-move) while logging what an attached renderer would see.
//! Run with `RUST_LOG=debug` for the per-transition detail.

use std::thread;
use std::time::Duration;

use glam::Vec3;
use mannequin::{AnimationClip, PointerButton, Timer, Viewer};

/// Frame pacing for the console loop.
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let mut viewer = Viewer::new();
    viewer.resize(1280, 720);

    let clips = viewer.clips_mut();
    clips.insert(AnimationClip::looping("idle", 4.3));
    clips.insert(AnimationClip::one_shot("waving", 3.2));
    clips.insert(AnimationClip::one_shot("salute", 2.8));
    clips.insert(AnimationClip::looping("walking", 1.1));
    clips.insert(AnimationClip::looping("slow-run", 0.8));
    clips.insert(AnimationClip::looping("fast-run", 0.6));

    viewer
        .spawn_character(
            "dummy",
            &["idle", "waving", "salute", "walking", "slow-run", "fast-run"],
        )
        .expect("every clip in the repertoire was registered above");

    log::info!("spawned 'dummy' with {} clips", viewer.clips().len());

    let mut timer = Timer::new();

    // A friendly wave before setting off
    viewer.request_animation("waving");
    run_until(&mut viewer, &mut timer, |v| {
        v.player().is_some_and(|p| p.current_action_name() == Some("idle"))
    });

    // Walk a small patrol route via simulated right-clicks on the floor
    for target in [
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(-1.5, 0.0, 0.5),
        Vec3::ZERO,
    ] {
        viewer.on_ground_click(target);
        run_until(&mut viewer, &mut timer, |v| {
            v.player().is_some_and(|p| p.move_command().is_none())
        });
        report(&viewer);
    }

    // One pointer-mapped click: lower half of the screen hits the floor
    viewer.handle_pointer_click(PointerButton::Secondary, glam::Vec2::new(640.0, 600.0));
    run_until(&mut viewer, &mut timer, |v| {
        v.player().is_some_and(|p| p.move_command().is_none())
    });
    report(&viewer);

    // Sign off
    viewer.request_animation("salute");
    run_until(&mut viewer, &mut timer, |v| {
        v.player().is_some_and(|p| p.current_action_name() == Some("idle"))
    });

    log::info!(
        "tour finished after {} frames ({:.1}s simulated, {:.1}s wall clock)",
        viewer.frame_count(),
        viewer.time(),
        timer.elapsed.as_secs_f32()
    );
}

/// Drives the viewer from a host-owned loop until `done` reports true.
fn run_until(viewer: &mut Viewer, timer: &mut Timer, done: impl Fn(&Viewer) -> bool) {
    // Give queued input one frame to drain before polling the predicate
    thread::sleep(FRAME);
    timer.tick();
    viewer.update(timer.dt_seconds());

    while !done(viewer) {
        thread::sleep(FRAME);
        timer.tick();
        viewer.update(timer.dt_seconds());
    }
}

fn report(viewer: &Viewer) {
    let Some(player) = viewer.player() else {
        return;
    };
    let position = player.transform.position;
    log::info!(
        "'{}' at ({:.2}, {:.2}, {:.2}), playing {}",
        player.name,
        position.x,
        position.y,
        position.z,
        player.current_action_name().unwrap_or("nothing")
    );
    for sample in player.active_actions() {
        log::debug!(
            "  action {} t={:.2} w={:.2}",
            sample.clip,
            sample.time,
            sample.weight
        );
    }
}
