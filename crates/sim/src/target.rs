use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg64;

use pursuit_shared::*;

/// Scripted wander behavior for the target: every `redirect_interval` seconds
/// it draws a new random horizontal direction and speed, and it snaps back to
/// its start position whenever it leaves the rectangular plane bound.
///
/// The core only ever reads `position()`; the wander cadence is independent
/// of the reward loop.
pub struct WanderTarget {
    config: TargetConfig,
    position: Vec3,
    direction: Vec3,
    speed: f32,
    until_redirect: f32,
}

impl WanderTarget {
    pub fn new(config: TargetConfig, rng: &mut Pcg64) -> Result<Self, SimError> {
        config.validate()?;
        let mut target = Self {
            config,
            position: config.start_position,
            direction: Vec3::X,
            speed: config.base_speed,
            until_redirect: config.redirect_interval,
        };
        target.redirect(rng);
        Ok(target)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move for one tick, redirecting on the interval and resetting to the
    /// start position on leaving the bound.
    pub fn advance(&mut self, rng: &mut Pcg64, dt: f32) {
        self.until_redirect -= dt;
        if self.until_redirect <= 0.0 {
            self.redirect(rng);
        }

        self.position += self.direction * self.speed * dt;

        let off = self.position - self.config.start_position;
        if off.x.abs() > self.config.half_width || off.z.abs() > self.config.half_length {
            self.position = self.config.start_position;
            self.redirect(rng);
        }
    }

    fn redirect(&mut self, rng: &mut Pcg64) {
        let x = rng.gen_range(-1.0f32..1.0);
        let z = rng.gen_range(-1.0f32..1.0);
        let dir = Vec3::new(x, 0.0, z).normalize_or_zero();
        // A zero draw (both components ~0) falls back to +X.
        self.direction = if dir == Vec3::ZERO { Vec3::X } else { dir };

        self.speed = if self.config.speed_variation > 0.0 {
            rng.gen_range(
                self.config.base_speed - self.config.speed_variation
                    ..self.config.base_speed + self.config.speed_variation,
            )
        } else {
            self.config.base_speed
        };
        self.until_redirect = self.config.redirect_interval;
    }
}
