//! Headless frame driver
//!
//! Turns a stream of absolute frame timestamps (milliseconds, as a display
//! refresh callback would hand them out) into capped per-tick delta times and
//! runs one physics tick per frame. No sub-stepping: a long stall is simply
//! truncated to `max_delta_time`.

use crate::clamp_delta_time;
use crate::consts::FPS_WINDOW_MS;
use crate::error::Result;
use crate::settings::SimConfig;
use crate::sim::{Particle, ParticleGenerator, RandomGenerator, World};

/// Converts frame timestamps into capped delta times
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time_ms: Option<f64>,
    max_delta_time: f64,
}

impl FrameClock {
    pub fn new(max_delta_time: f64) -> Self {
        Self {
            last_time_ms: None,
            max_delta_time,
        }
    }

    /// Forget the previous frame; the next `advance` yields 0
    pub fn restart(&mut self) {
        self.last_time_ms = None;
    }

    /// Delta seconds since the previous frame, clamped to `[0, max_delta_time]`
    ///
    /// See [`clamp_delta_time`] for how a NaN or negative cap behaves.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let raw = match self.last_time_ms {
            Some(last) => (now_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);
        clamp_delta_time(raw, self.max_delta_time)
    }
}

/// Frames-per-second over rolling one-second windows
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frame_count: u32,
    window_start_ms: f64,
    fps: u32,
}

impl FpsCounter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frame_count: 0,
            window_start_ms: now_ms,
            fps: 0,
        }
    }

    pub fn restart(&mut self, now_ms: f64) {
        self.frame_count = 0;
        self.window_start_ms = now_ms;
    }

    /// Count a frame; returns the new FPS value when a window closes
    pub fn record(&mut self, now_ms: f64) -> Option<u32> {
        self.frame_count += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed >= FPS_WINDOW_MS {
            self.fps = (f64::from(self.frame_count) * 1000.0 / elapsed).round() as u32;
            self.frame_count = 0;
            self.window_start_ms = now_ms;
            Some(self.fps)
        } else {
            None
        }
    }

    /// Most recently published FPS (0 before the first full window)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// A running simulation: world, generator and frame timing
pub struct Simulation {
    world: World,
    generator: Box<dyn ParticleGenerator>,
    clock: FrameClock,
    fps: FpsCounter,
    running: bool,
}

impl Simulation {
    /// Validate `config` and populate a world with the seeded random generator
    pub fn new(config: &SimConfig) -> Result<Self> {
        let generator = match config.seed {
            Some(seed) => RandomGenerator::new(seed),
            None => RandomGenerator::from_entropy(),
        }
        .with_radius_range(config.min_radius, config.max_radius);
        Self::with_generator(config, Box::new(generator))
    }

    /// Same as `new`, with a caller-supplied generator
    pub fn with_generator(
        config: &SimConfig,
        mut generator: Box<dyn ParticleGenerator>,
    ) -> Result<Self> {
        config.validate()?;
        let mut world = World::new(config.bounds());
        world.populate(config.particle_count, generator.as_mut());
        Ok(Self {
            world,
            generator,
            clock: FrameClock::new(config.max_delta_time),
            fps: FpsCounter::default(),
            running: false,
        })
    }

    /// Begin accepting frames. No-op while already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.running {
            return;
        }
        self.clock.restart();
        self.fps.restart(now_ms);
        self.running = true;
        log::info!("Simulation started with {} particles", self.world.len());
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Simulation stopped after {} ticks", self.world.time_ticks);
        }
    }

    /// Stop, throw away every particle, regenerate `count` new ones and restart
    pub fn reset(&mut self, count: usize, now_ms: f64) {
        self.stop();
        self.world.populate(count, self.generator.as_mut());
        self.start(now_ms);
    }

    /// Run one frame at timestamp `now_ms`
    ///
    /// Returns the delta time used, or `None` when stopped.
    pub fn frame(&mut self, now_ms: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        let dt = self.clock.advance(now_ms);
        if let Some(fps) = self.fps.record(now_ms) {
            log::debug!(
                "fps={} particles={} energy={:.1}",
                fps,
                self.world.len(),
                self.world.total_kinetic_energy()
            );
        }
        self.world.step(dt);
        Some(dt)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.world.particles
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
