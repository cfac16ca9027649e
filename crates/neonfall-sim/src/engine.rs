//! The simulation engine: owns the world, drains commands, runs the
//! per-tick system pipeline, and emits snapshots.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use neonfall_behavior::templates::{self, EnemyTemplate, ResourceTemplate};
use neonfall_core::commands::PlayerCommand;
use neonfall_core::constants::MAX_DELTA;
use neonfall_core::enums::{GamePhase, ItemKind, Mode, RogueDifficulty};
use neonfall_core::events::GameEvent;
use neonfall_core::state::GameSnapshot;
use neonfall_core::table::WeightedTable;
use neonfall_core::types::SimTime;

use crate::effects::Effects;
use crate::particles::{BurstSpec, ParticlePool};
use crate::player::{InputState, PlayerState, RunState};
use crate::systems::spawner::SpawnState;
use crate::systems::{
    behavior, combat, hazards, movement, pickup, progression, snapshot, spawner, status, weapons,
};

/// Engine construction parameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimConfig {
    /// RNG seed; two engines with the same seed and command stream
    /// produce identical snapshots.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    mode: Option<Mode>,
    difficulty: RogueDifficulty,
    seed: u64,
    rng: ChaCha8Rng,
    player: PlayerState,
    input: InputState,
    run: RunState,
    spawn: SpawnState,
    enemy_table: WeightedTable<EnemyTemplate>,
    resource_table: WeightedTable<ResourceTemplate>,
    item_table: WeightedTable<ItemKind>,
    particles: ParticlePool,
    fx: Effects,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    game_over_emitted: bool,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::Menu,
            mode: None,
            difficulty: RogueDifficulty::default(),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: PlayerState::new(Mode::Endless),
            input: InputState::default(),
            run: RunState::new(),
            spawn: SpawnState::default(),
            enemy_table: templates::enemy_table(Mode::Endless),
            resource_table: templates::resource_table(),
            item_table: templates::item_table(),
            particles: ParticlePool::default(),
            fx: Effects::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            game_over_emitted: false,
        }
    }

    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advances the simulation by `delta` reference ticks (1.0 = one
    /// 60 fps frame) and returns the resulting snapshot. Non-finite or
    /// non-positive deltas advance nothing; large ones are capped.
    pub fn tick(&mut self, delta: f32) -> GameSnapshot {
        let delta = if delta.is_finite() && delta > 0.0 {
            delta.min(MAX_DELTA)
        } else {
            0.0
        };

        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }

        match self.phase {
            GamePhase::Playing => {
                if delta > 0.0 {
                    self.run_systems(delta);
                    self.time.advance(delta);
                }
            }
            GamePhase::GameOver => {
                // The field stops; lingering particles still fade out.
                self.particles.update(delta);
                self.fx.tick(delta);
            }
            GamePhase::Menu | GamePhase::Paused => {}
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build(
            &mut self.world,
            self.time,
            self.phase,
            self.mode,
            self.difficulty,
            &self.player,
            &self.run,
            &self.particles,
            &self.fx,
            events,
        )
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame { mode, difficulty } => self.start(mode, difficulty),
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    if let Some(mode) = self.mode {
                        self.start(mode, self.difficulty);
                    }
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Blink => self.blink(),
            PlayerCommand::SetMoveIntent { x, y } => {
                self.input.move_intent.x = sanitize_axis(x);
                self.input.move_intent.y = sanitize_axis(y);
            }
            PlayerCommand::SetAimTarget { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.input.aim.x = x;
                    self.input.aim.y = y;
                }
            }
            PlayerCommand::SetFireHeld { held } => self.input.fire_held = held,
        }
    }

    fn start(&mut self, mode: Mode, difficulty: RogueDifficulty) {
        self.world = World::new();
        self.time = SimTime::default();
        self.phase = GamePhase::Playing;
        self.mode = Some(mode);
        self.difficulty = difficulty;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.player = PlayerState::new(mode);
        self.input = InputState::default();
        self.run = RunState::new();
        self.spawn = SpawnState::default();
        self.enemy_table = templates::enemy_table(mode);
        self.particles.clear();
        self.fx.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.game_over_emitted = false;

        if mode == Mode::Endless {
            for _ in 0..4 {
                spawner::spawn_resource(&mut self.world, &mut self.rng, &self.resource_table, true);
            }
        }
    }

    /// Teleports to the aim point, spending a charge (rogue only).
    fn blink(&mut self) {
        if self.mode != Some(Mode::Rogue)
            || self.phase != GamePhase::Playing
            || self.player.blink_charges == 0
        {
            return;
        }
        self.player.blink_charges -= 1;
        self.player.pos = self.input.aim.clamped(self.player.radius());
        self.particles
            .burst(&mut self.rng, self.player.pos, &BurstSpec::blink());
    }

    fn run_systems(&mut self, delta: f32) {
        let Some(mode) = self.mode else { return };
        let frozen = mode == Mode::Rogue && self.player.time_stop > 0.0;

        weapons::run(
            &mut self.world,
            &mut self.player,
            &self.input,
            mode,
            self.run.level,
            &mut self.particles,
            &mut self.events,
            &mut self.rng,
        );
        movement::run_player(&mut self.player, &self.input, delta);
        if !frozen {
            behavior::run(
                &mut self.world,
                self.player.pos,
                mode,
                self.difficulty,
                &mut self.rng,
                delta,
            );
        }
        self.player.update_orbitals(delta);
        movement::run_bullets(&mut self.world, &mut self.despawn_buffer, delta);
        movement::run_enemy_shots(&mut self.world, &mut self.despawn_buffer, frozen, delta);
        hazards::run(
            &mut self.world,
            &mut self.player,
            mode,
            self.difficulty,
            &mut self.rng,
            &mut self.despawn_buffer,
            delta,
        );
        spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn,
            &self.enemy_table,
            &self.resource_table,
            &self.item_table,
            mode,
            self.difficulty,
            &self.run,
            &self.time,
            &mut self.fx,
            &mut self.events,
            delta,
        );
        pickup::run(
            &mut self.world,
            &mut self.player,
            &mut self.run,
            &mut self.rng,
            &mut self.particles,
            &mut self.fx,
            &mut self.despawn_buffer,
        );
        combat::run(
            &mut self.world,
            &mut self.player,
            &mut self.run,
            &mut self.spawn,
            mode,
            self.difficulty,
            &mut self.rng,
            &mut self.particles,
            &mut self.fx,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        status::run(
            &mut self.world,
            &mut self.player,
            &mut self.run,
            mode,
            &mut self.rng,
            &mut self.particles,
            &mut self.fx,
            &mut self.despawn_buffer,
            delta,
        );
        if mode == Mode::Endless {
            progression::run(&mut self.player, &mut self.run, &mut self.fx);
        }
        self.particles.update(delta);

        if self.player.lives <= 0 {
            self.phase = GamePhase::GameOver;
            if !self.game_over_emitted {
                self.game_over_emitted = true;
                self.events.push(GameEvent::GameOver {
                    score: self.run.score,
                    mode,
                    elapsed_ticks: self.time.tick,
                });
            }
        }

        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }
}

/// Clamps a movement axis to [-1, 1]; non-finite input means no intent.
fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
impl SimulationEngine {
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub(crate) fn player(&self) -> &PlayerState {
        &self.player
    }

    pub(crate) fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub(crate) fn spawn_state(&self) -> &SpawnState {
        &self.spawn
    }

    pub(crate) fn run_mut(&mut self) -> &mut RunState {
        &mut self.run
    }
}
