//! The sandbox: one world, its camera and input, and the per-frame pipeline.
//!
//! Per update: control keys, then selection and navigation commands, then the
//! camera. These run even while paused. When running, the systems follow in
//! a fixed order and expired entities are compacted away at the end.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::config::SandboxConfig;
use crate::api::scenario::Scenario;
use crate::api::types::{EntityId, SandboxEvent};
use crate::components::entity::ComponentKind;
use crate::core::persist::{self, LoadError};
use crate::core::world::World;
use crate::input::keys::{Key, MouseButton};
use crate::input::queue::InputQueue;
use crate::input::state::{InputState, PressTracker};
use crate::math::{vector, Rng};
use crate::renderer::camera::Camera;
use crate::renderer::draw::{DrawList, ViewDraw};
use crate::renderer::instance::InstanceBuffer;
use crate::renderer::traits::{DrawTiming, FrameData, Renderer};
use crate::scenarios;
use crate::systems;

pub struct Sandbox {
    pub world: World,
    pub camera: Camera,
    config: SandboxConfig,
    world_size: Vec2,
    input: InputState,
    presses: PressTracker,
    rng: Rng,
    running: bool,
    show_debug: bool,
    /// Simulated time, drives press durations.
    clock_ms: f64,
    select_point: Vec2,
    navigate_point: Vec2,
    events: Vec<SandboxEvent>,
    draw_list: DrawList,
    instances: InstanceBuffer,
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Self {
        let camera = Camera::new(config.viewport_size)
            .with_zoom_limits(config.min_zoom, config.max_zoom)
            .with_pan_speed(config.camera_pan_speed)
            .with_follow_factor(config.camera_follow_factor);
        Self {
            world: World::new(),
            camera,
            world_size: config.world_size,
            input: InputState::new(),
            presses: PressTracker::new(config.press_duration_ms),
            rng: Rng::new(config.seed),
            running: true,
            show_debug: false,
            clock_ms: 0.0,
            select_point: Vec2::ZERO,
            navigate_point: Vec2::ZERO,
            events: Vec::new(),
            draw_list: DrawList::new(),
            instances: InstanceBuffer::new(),
            config,
        }
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            self.running = running;
            log::info!("simulation {}", if running { "resumed" } else { "paused" });
            self.events.push(SandboxEvent::RunningChanged(running));
        }
    }

    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.camera.resize(viewport);
    }

    /// Fold queued host input into the sandbox's input state.
    pub fn handle_input(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.input.apply(event);
        }
    }

    /// Forget held controls and half-finished presses, e.g. when the host
    /// window loses focus and the matching key-up events never arrive.
    pub fn release_input(&mut self) {
        self.input.reset();
        self.presses.clear();
    }

    /// One fixed update of `dt` milliseconds.
    pub fn update(&mut self, dt: f32) {
        self.clock_ms += dt as f64;

        self.handle_controls();
        self.handle_selection();
        self.camera.update(&self.input, &self.world);

        if self.running {
            self.simulate(dt);
        }
        self.input.end_update();
    }

    /// The running-only part of an update: every system in order, then compaction.
    pub fn simulate(&mut self, dt: f32) {
        let world = &mut self.world;
        systems::tick_expiration(world, dt);
        systems::steer_navigation(world);
        systems::tick_movement(world, self.world_size, dt);
        systems::detect_collisions(world);
        systems::handle_collisions(world);
        systems::apply_force_fields(world);
        systems::record_traces(world);
        systems::emit_particles(world, &mut self.rng, dt);
        systems::tick_animations(world, dt);
        let removed = world.compact();
        if removed > 0 {
            log::trace!("compacted {} entities", removed);
        }
    }

    fn key_pressed(&mut self, key: Key) -> bool {
        self.presses.pressed(key, &self.input, self.clock_ms)
    }

    fn handle_controls(&mut self) {
        if self.key_pressed(Key::KeyC) {
            self.events.push(SandboxEvent::SaveRequested);
        }
        if self.key_pressed(Key::KeyV) {
            self.events.push(SandboxEvent::LoadRequested);
        }
        if self.key_pressed(Key::NumpadDivide) {
            self.scramble_accelerations();
        }
        if self.key_pressed(Key::Space) {
            self.set_running(!self.running);
        }
        if self.key_pressed(Key::KeyQ) {
            self.show_debug = !self.show_debug;
            self.events.push(SandboxEvent::DebugToggled(self.show_debug));
        }
        if self.key_pressed(Key::Digit1) {
            self.load_builtin(1);
        }
        if self.key_pressed(Key::Digit2) {
            self.load_builtin(2);
        }
    }

    fn handle_selection(&mut self) {
        let pointer = self.camera.screen_to_world(self.input.pointer());

        if self.presses.started(MouseButton::Right, &self.input, self.clock_ms) {
            self.navigate_point = pointer;
        }
        if self.presses.ended(MouseButton::Right, &self.input, self.clock_ms) {
            let commanded = systems::command_navigation(&mut self.world, self.navigate_point);
            log::debug!("navigating {} entities to {}", commanded, self.navigate_point);
        }

        if self.presses.started(MouseButton::Left, &self.input, self.clock_ms) {
            self.select_point = pointer;
        }
        if self.presses.ended(MouseButton::Left, &self.input, self.clock_ms) {
            match self.select_at(self.select_point) {
                Some(id) => self.camera.follow(id),
                None => self.camera.look_at(self.select_point),
            }
        }
    }

    /// Highlight the selectable entity under a world point.
    pub fn select_at(&mut self, point: Vec2) -> Option<EntityId> {
        systems::select_at(&mut self.world, point, self.config.pick_radius)
    }

    /// Rotate every acceleration by its own random angle.
    pub fn scramble_accelerations(&mut self) {
        let rng = &mut self.rng;
        self.world.for_each_with(&[ComponentKind::Motion], |entity| {
            if let Some(motion) = entity.motion.as_mut() {
                motion.acceleration = vector::rotate(motion.acceleration, rng.range(0.0, TAU));
            }
        });
    }

    /// Clear the world and populate it from a scenario.
    pub fn load_scenario(&mut self, scenario: &dyn Scenario) {
        self.world.clear();
        self.camera.following = None;
        self.world_size = scenario.world_size();
        scenario.populate(&mut self.world, &mut self.rng);
        log::info!("loaded scenario '{}' with {} entities", scenario.name(), self.world.len());
    }

    /// Load a built-in scenario by slot. Returns false for an unknown slot.
    pub fn load_builtin(&mut self, slot: u8) -> bool {
        let Some(scenario) = scenarios::builtin(slot) else {
            log::warn!("no built-in scenario in slot {}", slot);
            return false;
        };
        self.load_scenario(scenario.as_ref());
        self.events.push(SandboxEvent::ScenarioLoaded(slot));
        true
    }

    /// Snapshot of every live entity.
    pub fn save(&self) -> Result<String, serde_json::Error> {
        let json = persist::save(&self.world)?;
        log::info!("saved {} entities ({} bytes)", self.world.live().count(), json.len());
        Ok(json)
    }

    /// Replace the world with a snapshot. The world is untouched on error.
    pub fn load(&mut self, json: &str) -> Result<usize, LoadError> {
        match persist::load_into(&mut self.world, json) {
            Ok(count) => {
                self.camera.following = None;
                log::info!("loaded {} entities", count);
                Ok(count)
            }
            Err(err) => {
                log::warn!("snapshot rejected: {}", err);
                Err(err)
            }
        }
    }

    pub fn drain_events(&mut self) -> Vec<SandboxEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build this frame's draw list and instance buffer.
    pub fn draw(&mut self, interpolation: f32) -> &DrawList {
        systems::build_draw_list(&self.world, &mut self.draw_list);
        self.draw_list.view = ViewDraw {
            position: self.camera.position,
            zoom: self.camera.zoom,
            viewport: self.camera.viewport,
        };
        self.draw_list.world_size = self.world_size;
        self.draw_list.interpolation = interpolation;
        self.draw_list.show_debug = self.show_debug;
        self.instances.fill(&self.draw_list.shapes);
        &self.draw_list
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    /// Draw the frame through a native renderer.
    pub fn render_to(&mut self, renderer: &mut dyn Renderer, interpolation: f32) -> DrawTiming {
        self.draw(interpolation);
        renderer.draw(&FrameData {
            draw_list: &self.draw_list,
            instances: &self.instances.instances,
            camera: self.camera.uniform(),
        })
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new(SandboxConfig::default())
    }
}
