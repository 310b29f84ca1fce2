//! Headless match runner
//!
//! Builds a minimal Bevy app stepped with a fixed manual timestep, so every
//! run of the same script is tick-for-tick identical.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::ball;
use crate::celebration::{self, Celebration};
use crate::events::{self, EventBus, EventLogConfig, EventLogger, GameEvent};
use crate::player;
use crate::scoring::{self, MatchScore, Scoreboard};
use crate::striking;
use crate::world;

use super::config::ScenarioConfig;
use super::script::{InputScript, apply_script};

/// Builder for headless match apps
pub struct HeadlessAppBuilder {
    fps: f64,
    script: InputScript,
    log_plugin: bool,
}

impl HeadlessAppBuilder {
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            script: InputScript::default(),
            log_plugin: false,
        }
    }

    /// Set the simulation rate (ticks per second)
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    /// Set the scripted control feed
    pub fn with_script(mut self, script: InputScript) -> Self {
        self.script = script;
        self
    }

    /// Install the tracing log plugin (binary only; tests leave it out)
    pub fn with_log_plugin(mut self) -> Self {
        self.log_plugin = true;
        self
    }

    /// Build the app with minimal plugins, manual fixed-step time, match
    /// resources, pitch setup and the full system chain. Each `app.update()`
    /// advances the simulation by exactly one fixed tick.
    pub fn build(self) -> App {
        let step = Duration::from_secs_f64(1.0 / self.fps);

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if self.log_plugin {
            app.add_plugins(bevy::log::LogPlugin::default());
        }
        app.add_plugins(bevy::transform::TransformPlugin);

        app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
        app.insert_resource(Time::<Fixed>::from_duration(step));

        app.init_resource::<MatchScore>();
        app.init_resource::<Scoreboard>();
        app.init_resource::<Celebration>();
        app.insert_resource(EventBus::new());
        app.insert_resource(self.script);

        app.add_systems(Startup, setup_pitch);
        app.add_systems(
            FixedUpdate,
            (
                celebration::update_celebration,
                player::apply_controls,
                player::apply_gravity,
                player::integrate_players,
                player::manual_respawn,
                ball::ball_gravity,
                ball::integrate_ball,
                striking::strike_on_contact,
                scoring::check_goals,
            )
                .chain(),
        );
        app.add_systems(
            Update,
            (apply_script, events::update_event_bus_time, events::log_events).chain(),
        );

        app
    }
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Startup system spawning players, ball and gates
fn setup_pitch(mut commands: Commands) {
    world::spawn_players(&mut commands);
    world::spawn_ball(&mut commands);
    world::spawn_gates(&mut commands);
}

/// Final state of a completed run
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub ticks: u64,
    pub score_left: u32,
    pub score_right: u32,
    pub label: String,
    pub session_id: Option<String>,
}

/// Run the built-in exhibition match for the configured number of ticks
pub fn run_match(config: &ScenarioConfig) -> MatchReport {
    let mut builder = HeadlessAppBuilder::new()
        .with_fps(config.fps)
        .with_script(InputScript::exhibition(config.ticks));
    if !config.quiet {
        builder = builder.with_log_plugin();
    }
    let mut app = builder.build();

    let mut session_id = None;
    if config.log_enabled {
        let mut logger = EventLogger::new(EventLogConfig {
            log_dir: config.log_dir.clone().into(),
            enabled: true,
        });
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        logger.start_session(&timestamp);
        if logger.is_active() {
            session_id = Some(logger.session_id().to_string());
        }
        app.insert_resource(logger);
    }

    app.finish();
    app.cleanup();

    app.world_mut()
        .resource_mut::<EventBus>()
        .emit(GameEvent::MatchStart {
            ticks: config.ticks,
        });

    for _ in 0..config.ticks {
        app.update();
    }

    let score = *app.world().resource::<MatchScore>();
    let label = app.world().resource::<Scoreboard>().label.clone();
    let elapsed_ms = app.world().resource::<EventBus>().elapsed_ms();

    if let Some(mut logger) = app.world_mut().remove_resource::<EventLogger>() {
        logger.log(
            elapsed_ms,
            &GameEvent::MatchEnd {
                score_left: score.left,
                score_right: score.right,
                duration: config.ticks as f32 / config.fps as f32,
            },
        );
        logger.end_session();
    }

    MatchReport {
        ticks: config.ticks,
        score_left: score.left,
        score_right: score.right,
        label,
        session_id,
    }
}
