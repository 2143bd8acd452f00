use drift_engine::{
    InputEvent, InputQueue, LoadError, MainLoop, Sandbox, SandboxConfig, SandboxEvent,
};

/// Drives a `Sandbox` from host animation-frame timestamps.
///
/// The browser side owns a single `SandboxRunner` in a `thread_local!`
/// and exports free functions via `#[wasm_bindgen]`.
pub struct SandboxRunner {
    sandbox: Sandbox,
    main_loop: MainLoop,
    input: InputQueue,
    /// Flat `(code, payload)` pairs for the events of the last frame.
    event_buffer: Vec<u32>,
    panic: bool,
}

impl SandboxRunner {
    pub fn new(config: SandboxConfig) -> Self {
        let main_loop = config.main_loop();
        Self {
            sandbox: Sandbox::new(config),
            main_loop,
            input: InputQueue::new(),
            event_buffer: Vec::new(),
            panic: false,
        }
    }

    /// Load the first built-in scenario and start the loop.
    pub fn init(&mut self, timestamp: f64) {
        self.sandbox.load_builtin(1);
        self.sandbox.drain_events();
        self.main_loop.start(timestamp);
    }

    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    pub fn sandbox_mut(&mut self) -> &mut Sandbox {
        &mut self.sandbox
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// The host lost focus: queued input is stale and held controls will
    /// never see their release.
    pub fn focus_lost(&mut self) {
        self.input.drain();
        self.sandbox.release_input();
    }

    pub fn start(&mut self, timestamp: f64) {
        self.main_loop.start(timestamp);
    }

    pub fn stop(&mut self) {
        self.main_loop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.main_loop.is_running()
    }

    /// Run one host frame: fixed updates, then the draw.
    /// Returns false when the loop is stopped or the frame was throttled.
    pub fn frame(&mut self, timestamp: f64) -> bool {
        let Some(steps) = self.main_loop.frame(timestamp) else {
            return false;
        };

        self.sandbox.handle_input(&mut self.input);
        let dt = self.main_loop.timestep() as f32;
        for _ in 0..steps.steps {
            self.sandbox.update(dt);
        }
        self.sandbox.draw(steps.interpolation);
        self.panic = steps.panic;

        self.event_buffer.clear();
        for event in self.sandbox.drain_events() {
            let payload = match event {
                SandboxEvent::ScenarioLoaded(slot) => slot as u32,
                SandboxEvent::RunningChanged(on) | SandboxEvent::DebugToggled(on) => on as u32,
                SandboxEvent::SaveRequested | SandboxEvent::LoadRequested => 0,
            };
            self.event_buffer.push(event.code());
            self.event_buffer.push(payload);
        }
        true
    }

    pub fn save(&self) -> Result<String, serde_json::Error> {
        self.sandbox.save()
    }

    pub fn load(&mut self, json: &str) -> Result<usize, LoadError> {
        self.sandbox.load(json)
    }

    pub fn frame_json(&self) -> Result<String, serde_json::Error> {
        self.sandbox.draw_list().to_json()
    }

    // ---- Pointer accessors for zero-copy reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.sandbox.instances().instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.sandbox.instances().instance_count()
    }

    pub fn events_ptr(&self) -> *const u32 {
        self.event_buffer.as_ptr()
    }

    /// Number of events, not words.
    pub fn events_len(&self) -> u32 {
        (self.event_buffer.len() / 2) as u32
    }

    pub fn events(&self) -> &[u32] {
        &self.event_buffer
    }

    pub fn fps(&self) -> f64 {
        self.main_loop.fps()
    }

    pub fn panicked(&self) -> bool {
        self.panic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_engine::Key;

    fn runner() -> SandboxRunner {
        let mut runner = SandboxRunner::new(SandboxConfig::default());
        runner.init(0.0);
        runner
    }

    #[test]
    fn init_loads_the_swarm() {
        let runner = runner();
        assert!(runner.sandbox().world.len() > 500);
        assert!(runner.is_running());
        assert_eq!(runner.events_len(), 0);
    }

    #[test]
    fn frames_fill_the_instance_buffer() {
        let mut runner = runner();
        assert!(runner.frame(17.0));
        assert!(runner.instance_count() >= 500);
        assert!(!runner.panicked());
        assert!(runner.frame_json().unwrap().contains("\"shapes\""));
    }

    #[test]
    fn stopped_loop_skips_frames() {
        let mut runner = runner();
        runner.stop();
        assert!(!runner.frame(17.0));
    }

    #[test]
    fn key_presses_become_event_pairs() {
        let mut runner = runner();
        runner.push_input(InputEvent::KeyDown { key: Key::Space });
        runner.push_input(InputEvent::KeyUp { key: Key::Space });
        runner.frame(17.0);
        assert_eq!(runner.events(), &[SandboxEvent::RunningChanged(false).code(), 0]);
        assert!(!runner.sandbox().is_running());

        runner.frame(34.0);
        assert_eq!(runner.events_len(), 0);
    }

    #[test]
    fn focus_loss_forgets_held_and_queued_keys() {
        let mut runner = runner();
        runner.push_input(InputEvent::KeyDown { key: Key::Space });
        runner.frame(17.0);
        runner.push_input(InputEvent::KeyDown { key: Key::KeyC });
        runner.focus_lost();
        runner.push_input(InputEvent::KeyUp { key: Key::Space });
        runner.frame(34.0);
        assert_eq!(runner.events_len(), 0);
        assert!(runner.sandbox().is_running());
    }

    #[test]
    fn snapshot_round_trip_through_runner() {
        let mut runner = runner();
        runner.frame(17.0);
        let json = runner.save().unwrap();
        let count = runner.sandbox().world.len();
        runner.sandbox_mut().world.clear();
        assert_eq!(runner.load(&json).unwrap(), count);
        assert!(runner.load("[]").is_err());
    }
}
