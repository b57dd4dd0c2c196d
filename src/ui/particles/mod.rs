// SPDX-License-Identifier: MPL-2.0
//! Decorative particle field drifting behind the auth screen.
//!
//! Particles fall slowly with a sinusoidal sideways drift, wrap around the
//! horizontal edges and are recycled above the top edge once they leave the
//! bottom. A pointer inside the field pushes nearby particles away.
//!
//! Until the field has a non-empty surface every operation is a no-op.

mod canvas;

pub use canvas::{Message as ParticleMessage, ParticleCanvas};

use crate::config::{
    PARTICLE_COUNT, PARTICLE_RESPAWN_Y, POINTER_FORCE_SCALE, POINTER_INFLUENCE_RADIUS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

const DRIFT_FREQUENCY: f64 = 0.0005;
const DRIFT_AMPLITUDE: f32 = 0.3;
/// Pointer distances below this are ignored to avoid dividing by zero.
const MIN_POINTER_DISTANCE: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub base_speed_y: f32,
    pub alpha: f32,
    pub drift_offset: f32,
}

impl Particle {
    fn seeded<R: Rng>(rng: &mut R, width: f32, y: f32) -> Self {
        let base_speed_y = rng.gen::<f32>() * 0.5 + 0.2;
        Self {
            x: rng.gen::<f32>() * width,
            y,
            size: rng.gen::<f32>() * 3.0 + 1.0,
            speed_x: (rng.gen::<f32>() - 0.5) * 0.35,
            speed_y: base_speed_y,
            base_speed_y,
            alpha: rng.gen::<f32>() * 0.5 + 0.2,
            drift_offset: rng.gen::<f32>() * TAU,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    pointer: Option<(f32, f32)>,
    rng: StdRng,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    /// Creates an unsized field seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an unsized field with a deterministic seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            pointer: None,
            rng,
        }
    }

    fn has_surface(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Sizes the field and re-seeds every particle across the new area.
    pub fn resize(&mut self, width: f32, height: f32) {
        if (width, height) == (self.width, self.height) && !self.particles.is_empty() {
            return;
        }
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles.clear();
        if !self.has_surface() {
            return;
        }
        let (w, h) = (self.width, self.height);
        for _ in 0..PARTICLE_COUNT {
            let y = self.rng.gen::<f32>() * h;
            self.particles.push(Particle::seeded(&mut self.rng, w, y));
        }
        tracing::trace!(width = w, height = h, "particle field seeded");
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.has_surface() {
            self.pointer = Some((x, y));
        }
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Applies a change reported by the canvas.
    pub fn handle_message(&mut self, message: ParticleMessage) {
        match message {
            ParticleMessage::Resized(size) => self.resize(size.width, size.height),
            ParticleMessage::PointerMoved(point) => self.pointer_moved(point.x, point.y),
            ParticleMessage::PointerLeft => self.pointer_left(),
        }
    }

    /// Advances one frame; `time_ms` is the elapsed animation time.
    pub fn update(&mut self, time_ms: f64) {
        if !self.has_surface() {
            return;
        }
        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;

        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            let drift = ((time_ms * DRIFT_FREQUENCY + f64::from(p.drift_offset)).sin() as f32)
                * DRIFT_AMPLITUDE;
            p.x += p.speed_x + drift;
            p.y += p.speed_y;

            if let Some((px, py)) = pointer {
                let dx = px - p.x;
                let dy = py - p.y;
                let dist = dx.hypot(dy);
                if dist > MIN_POINTER_DISTANCE && dist < POINTER_INFLUENCE_RADIUS {
                    let force = (POINTER_INFLUENCE_RADIUS - dist) / POINTER_INFLUENCE_RADIUS;
                    p.x -= dx / dist * force * POINTER_FORCE_SCALE;
                    p.y -= dy / dist * force * POINTER_FORCE_SCALE;
                }
            }

            if p.y - p.size > h {
                self.particles[i] = Particle::seeded(&mut self.rng, w, PARTICLE_RESPAWN_Y);
                continue;
            }

            if p.x - p.size > w {
                p.x = -p.size;
            } else if p.x + p.size < 0.0 {
                p.x = w + p.size;
            }
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn pointer_active(&self) -> bool {
        self.pointer.is_some()
    }

    #[cfg(test)]
    fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn still(field: &mut ParticleField) {
        for p in field.particles_mut() {
            p.speed_x = 0.0;
            p.speed_y = 0.0;
            // sin(0 + PI) is ~0, so no drift at time 0.
            p.drift_offset = std::f32::consts::PI;
        }
    }

    #[test]
    fn canvas_messages_drive_the_field() {
        let mut field = ParticleField::seeded(2);
        field.handle_message(ParticleMessage::Resized(iced::Size::new(320.0, 240.0)));
        assert_eq!(field.size(), (320.0, 240.0));
        assert_eq!(field.particles().len(), PARTICLE_COUNT);

        field.handle_message(ParticleMessage::PointerMoved(iced::Point::new(5.0, 5.0)));
        assert!(field.pointer_active());
        field.handle_message(ParticleMessage::PointerLeft);
        assert!(!field.pointer_active());
    }

    #[test]
    fn unsized_field_is_inert() {
        let mut field = ParticleField::seeded(1);
        field.update(16.0);
        field.pointer_moved(10.0, 10.0);
        assert!(field.particles().is_empty());
        assert!(!field.pointer_active());

        field.resize(0.0, 300.0);
        field.update(16.0);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn resize_seeds_within_ranges() {
        let mut field = ParticleField::seeded(7);
        field.resize(800.0, 600.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!((-0.175..0.175).contains(&p.speed_x));
            assert!((0.2..0.7).contains(&p.base_speed_y));
            assert!((0.2..0.7).contains(&p.alpha));
            assert!((0.0..TAU).contains(&p.drift_offset));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = ParticleField::seeded(42);
        let mut b = ParticleField::seeded(42);
        a.resize(640.0, 480.0);
        b.resize(640.0, 480.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn wraps_off_right_edge() {
        let mut field = ParticleField::seeded(3);
        field.resize(100.0, 100.0);
        still(&mut field);
        let p = &mut field.particles_mut()[0];
        p.x = 110.0;
        p.y = 50.0;
        p.size = 2.0;

        field.update(0.0);

        assert_relative_eq!(field.particles()[0].x, -2.0, epsilon = 1e-4);
    }

    #[test]
    fn wraps_off_left_edge() {
        let mut field = ParticleField::seeded(3);
        field.resize(100.0, 100.0);
        still(&mut field);
        let p = &mut field.particles_mut()[0];
        p.x = -5.0;
        p.y = 50.0;
        p.size = 2.0;

        field.update(0.0);

        assert_relative_eq!(field.particles()[0].x, 102.0, epsilon = 1e-4);
    }

    #[test]
    fn recycles_below_bottom_at_top() {
        let mut field = ParticleField::seeded(5);
        field.resize(100.0, 100.0);
        still(&mut field);
        let p = &mut field.particles_mut()[0];
        p.y = 105.0;
        p.size = 1.0;

        field.update(0.0);

        let recycled = field.particles()[0];
        assert_relative_eq!(recycled.y, PARTICLE_RESPAWN_Y);
        assert!((0.0..100.0).contains(&recycled.x));
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn pointer_pushes_particles_away() {
        let mut field = ParticleField::seeded(9);
        field.resize(400.0, 400.0);
        still(&mut field);
        let p = &mut field.particles_mut()[0];
        p.x = 200.0;
        p.y = 200.0;

        field.pointer_moved(120.0, 200.0);
        field.update(0.0);

        // dist 80, force 0.5, pushed +x by 0.7
        assert_relative_eq!(field.particles()[0].x, 200.7, epsilon = 1e-3);
        assert_relative_eq!(field.particles()[0].y, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn pointer_out_of_range_or_left_has_no_effect() {
        let mut field = ParticleField::seeded(9);
        field.resize(400.0, 400.0);
        still(&mut field);
        let p = &mut field.particles_mut()[0];
        p.x = 300.0;
        p.y = 200.0;

        field.pointer_moved(100.0, 200.0);
        field.update(0.0);
        assert_relative_eq!(field.particles()[0].x, 300.0, epsilon = 1e-3);

        field.pointer_moved(290.0, 200.0);
        field.pointer_left();
        field.update(0.0);
        assert_relative_eq!(field.particles()[0].x, 300.0, epsilon = 1e-3);
    }
}
