//! End-to-end match scenarios driven through the headless runner

use bevy::prelude::*;

use crate::ball::Ball;
use crate::celebration::Celebration;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::input::ControlState;
use crate::player::{Player, PlayerSide, Velocity};
use crate::scenario::{Cue, HeadlessAppBuilder, InputScript};
use crate::scoring::{MatchScore, Scoreboard};

/// Build an app and run the first update (Startup + one fixed tick)
fn stepped_app(fps: f64, script: InputScript) -> App {
    let mut app = HeadlessAppBuilder::new()
        .with_fps(fps)
        .with_script(script)
        .build();
    app.finish();
    app.cleanup();
    app.update();
    app
}

fn run_ticks(app: &mut App, ticks: u64) {
    for _ in 0..ticks {
        app.update();
    }
}

fn set_ball(app: &mut App, pos: Vec2, vel: Vec2) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(&mut Transform, &mut Velocity), With<Ball>>();
    for (mut transform, mut velocity) in query.iter_mut(world) {
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
        velocity.0 = vel;
    }
}

fn set_score(app: &mut App, left: u32, right: u32) {
    let mut score = app.world_mut().resource_mut::<MatchScore>();
    score.left = left;
    score.right = right;
}

fn ball_position(app: &mut App) -> Vec2 {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<Ball>>();
    query
        .iter(world)
        .next()
        .expect("no ball spawned")
        .translation
        .truncate()
}

fn label(app: &App) -> String {
    app.world().resource::<Scoreboard>().label.clone()
}

fn celebrating(app: &App) -> bool {
    app.world().resource::<Celebration>().is_active()
}

fn count_events(app: &App, pred: impl Fn(&GameEvent) -> bool) -> usize {
    app.world()
        .resource::<EventBus>()
        .peek()
        .iter()
        .filter(|bus_event| pred(&bus_event.event))
        .count()
}

#[test]
fn exhibition_script_scores_for_the_left_player() {
    let mut app = stepped_app(60.0, InputScript::exhibition(600));
    run_ticks(&mut app, 599);

    let score = *app.world().resource::<MatchScore>();
    assert!(score.left >= 1, "left never scored: {:?}", score);
    assert!(score.left < WIN_SCORE);
    assert_eq!(score.right, 0);

    assert!(
        count_events(&app, |e| matches!(
            e,
            GameEvent::Strike {
                side: PlayerSide::Left,
                ..
            }
        )) >= 1
    );
    assert!(
        count_events(&app, |e| matches!(
            e,
            GameEvent::Goal {
                side: PlayerSide::Left,
                ..
            }
        )) >= 1
    );

    assert_eq!(label(&app), format!("Left vs Right {}:0", score.left));
}

#[test]
fn confirmed_goal_updates_score_label_and_resets_objects() {
    let mut app = stepped_app(60.0, InputScript::default());
    set_score(&mut app, 6, 3);

    // Ball crossing the left gate below the goal line scores for the right side
    set_ball(&mut app, Vec2::new(20.0, 500.0), Vec2::ZERO);
    app.update();

    let score = *app.world().resource::<MatchScore>();
    assert_eq!(score, MatchScore { left: 6, right: 4 });
    assert_eq!(label(&app), "Left vs Right 6:4");
    assert!(!celebrating(&app));
    assert_eq!(
        count_events(&app, |e| matches!(e, GameEvent::MatchWon { .. })),
        0
    );

    // Everything back at kickoff, with the reset applied before this frame ended
    assert_eq!(ball_position(&mut app), BALL_KICKOFF);
    let world = app.world_mut();
    let mut players = world.query_filtered::<(&PlayerSide, &Transform), With<Player>>();
    for (side, transform) in players.iter(world) {
        assert_eq!(transform.translation.truncate(), side.kickoff());
    }
}

#[test]
fn ball_contact_above_the_goal_line_does_not_score() {
    let mut app = stepped_app(60.0, InputScript::default());

    // Overlapping the left gate structure, but above the crossing line
    set_ball(&mut app, Vec2::new(20.0, 468.0), Vec2::ZERO);
    app.update();

    let score = *app.world().resource::<MatchScore>();
    assert_eq!(score, MatchScore::default());
    assert_eq!(count_events(&app, |e| matches!(e, GameEvent::Goal { .. })), 0);
}

#[test]
fn winning_goal_zeroes_scores_and_resets_the_label_after_the_delay() {
    // 100 Hz makes the 2000 ms window an exact number of ticks
    let mut app = stepped_app(100.0, InputScript::default());
    set_score(&mut app, 6, 0);

    set_ball(&mut app, Vec2::new(780.0, 590.0), Vec2::ZERO);
    app.update();

    let score = *app.world().resource::<MatchScore>();
    assert_eq!(score, MatchScore { left: 0, right: 0 });
    assert_eq!(label(&app), "Left won!");
    assert!(celebrating(&app));
    assert_eq!(
        count_events(&app, |e| matches!(
            e,
            GameEvent::MatchWon {
                side: PlayerSide::Left,
                score_left: 7,
                score_right: 0,
            }
        )),
        1
    );

    // 1990 ms into the window the winner label is still up
    run_ticks(&mut app, 199);
    assert_eq!(label(&app), "Left won!");

    // At exactly 2000 ms the display returns to the kickoff form
    app.update();
    assert_eq!(label(&app), "Left vs Right 0 : 0");
    assert!(!celebrating(&app));
    assert_eq!(
        count_events(&app, |e| matches!(e, GameEvent::MatchRestart)),
        1
    );
}

#[test]
fn goal_during_celebration_cancels_the_pending_label_reset() {
    let mut app = stepped_app(100.0, InputScript::default());
    set_score(&mut app, 6, 0);
    set_ball(&mut app, Vec2::new(780.0, 590.0), Vec2::ZERO);
    app.update();
    assert!(celebrating(&app));

    // Halfway through the celebration window the next match's first goal lands
    run_ticks(&mut app, 50);
    set_ball(&mut app, Vec2::new(780.0, 590.0), Vec2::ZERO);
    app.update();

    assert_eq!(
        *app.world().resource::<MatchScore>(),
        MatchScore { left: 1, right: 0 }
    );
    assert_eq!(label(&app), "Left vs Right 1:0");
    assert!(!celebrating(&app));

    // The stale reset never fires; the fresh score stays on the board
    run_ticks(&mut app, 400);
    assert_eq!(label(&app), "Left vs Right 1:0");
    assert_eq!(
        count_events(&app, |e| matches!(e, GameEvent::MatchRestart)),
        0
    );
}

#[test]
fn respawn_ball_action_recentres_the_ball() {
    let script = InputScript {
        cues: vec![Cue {
            side: PlayerSide::Left,
            start_tick: 0,
            end_tick: 50,
            controls: ControlState {
                respawn_ball: true,
                ..Default::default()
            },
        }],
        tick: 0,
    };
    let mut app = stepped_app(60.0, script);

    set_ball(&mut app, Vec2::new(200.0, 100.0), Vec2::ZERO);
    run_ticks(&mut app, 2);

    // Back at the kickoff spot, modulo the gravity applied later that tick
    let drift = ball_position(&mut app) - BALL_KICKOFF;
    assert!(drift.length() < 1.0, "ball drifted to {:?}", drift);
}
