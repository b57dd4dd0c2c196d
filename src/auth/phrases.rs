// SPDX-License-Identifier: MPL-2.0
//! Rotating welcome phrases shown above the auth forms.
//!
//! Every [`PHRASE_ROTATION_MS`] the current phrase fades out over
//! [`PHRASE_FADE_MS`], the index advances (wrapping), and the next phrase
//! fades back in over the same duration. The rotation period is measured
//! from the last restart, not from the end of each fade.

use super::state::AuthView;
use crate::config::{PHRASE_FADE_MS, PHRASE_ROTATION_MS};
use std::time::{Duration, Instant};

pub const PHRASES_LOGIN: [&str; 3] = [
    "Bienvenido a BIBLIOSENA 📚",
    "Tu conocimiento comienza aquí 💡",
    "Explora, aprende y comparte 🤝",
];

pub const PHRASES_REGISTER: [&str; 3] = [
    "Conéctate con el aprendizaje del SENA 🚀",
    "Activa tu cuenta y aprende sin límites ✨",
    "Construye hoy tu futuro académico 📖",
];

const ROTATION: Duration = Duration::from_millis(PHRASE_ROTATION_MS);
const FADE: Duration = Duration::from_millis(PHRASE_FADE_MS);

/// Returns the phrase set shown for `view`.
#[must_use]
pub fn phrases_for(view: AuthView) -> &'static [&'static str] {
    match view {
        AuthView::Login => &PHRASES_LOGIN,
        AuthView::Register => &PHRASES_REGISTER,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Fade {
    None,
    Out { since: Instant },
    In { since: Instant },
}

/// Phrase index plus its timers.
#[derive(Debug, Clone)]
pub struct PhraseRotator {
    phrases: &'static [&'static str],
    index: usize,
    next_rotation: Instant,
    fade: Fade,
}

impl PhraseRotator {
    pub fn new(view: AuthView, now: Instant) -> Self {
        Self {
            phrases: phrases_for(view),
            index: 0,
            next_rotation: now + ROTATION,
            fade: Fade::None,
        }
    }

    /// Switches to the phrase set for `view`, resets the index and restarts
    /// the rotation timer. Any fade in progress is abandoned.
    pub fn set_view(&mut self, view: AuthView, now: Instant) {
        *self = Self::new(view, now);
    }

    /// Advances timers to `now`.
    pub fn tick(&mut self, now: Instant) {
        // A late tick may cover several rotations.
        loop {
            if let Fade::Out { since } = self.fade {
                if now.saturating_duration_since(since) >= FADE {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.fade = Fade::In { since: since + FADE };
                }
            }
            if let Fade::In { since } = self.fade {
                if now.saturating_duration_since(since) >= FADE {
                    self.fade = Fade::None;
                }
            }
            if now < self.next_rotation || matches!(self.fade, Fade::Out { .. }) {
                break;
            }
            self.fade = Fade::Out {
                since: self.next_rotation,
            };
            self.next_rotation += ROTATION;
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &'static str {
        self.phrases[self.index]
    }

    /// Opacity of the current phrase in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let progress = |since: Instant| {
            (now.saturating_duration_since(since).as_secs_f32() / FADE.as_secs_f32()).min(1.0)
        };
        match self.fade {
            Fade::None => 1.0,
            Fade::Out { since } => 1.0 - progress(since),
            Fade::In { since } => progress(since),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn starts_on_first_login_phrase() {
        let rotator = PhraseRotator::new(AuthView::Login, Instant::now());
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), PHRASES_LOGIN[0]);
    }

    #[test]
    fn advances_after_rotation_and_fade() {
        let start = Instant::now();
        let mut rotator = PhraseRotator::new(AuthView::Login, start);

        rotator.tick(start + ms(3199));
        assert_eq!(rotator.index(), 0);

        rotator.tick(start + ms(3200));
        assert_eq!(rotator.index(), 0);
        assert_relative_eq!(rotator.opacity(start + ms(3500)), 0.5, epsilon = 1e-3);

        rotator.tick(start + ms(3800));
        assert_eq!(rotator.index(), 1);
        assert_eq!(rotator.current(), PHRASES_LOGIN[1]);
    }

    #[test]
    fn rotation_has_period_three() {
        let start = Instant::now();
        let mut rotator = PhraseRotator::new(AuthView::Register, start);
        let mut seen = Vec::new();
        for step in 1..=3u64 {
            rotator.tick(start + ms(step * PHRASE_ROTATION_MS + PHRASE_FADE_MS));
            seen.push(rotator.index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn login_phrases_cycle_back_after_three_periods() {
        let start = Instant::now();
        let mut rotator = PhraseRotator::new(AuthView::Login, start);
        for step in 1..=3u64 {
            rotator.tick(start + ms(step * PHRASE_ROTATION_MS + PHRASE_FADE_MS));
        }
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), PHRASES_LOGIN[0]);
    }

    #[test]
    fn late_tick_catches_up_in_one_call() {
        let start = Instant::now();
        let mut rotator = PhraseRotator::new(AuthView::Login, start);
        rotator.tick(start + ms(5000));
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn set_view_resets_index_and_timer() {
        let start = Instant::now();
        let mut rotator = PhraseRotator::new(AuthView::Login, start);
        rotator.tick(start + ms(3800));
        assert_eq!(rotator.index(), 1);

        let switched = start + ms(4000);
        rotator.set_view(AuthView::Register, switched);
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), PHRASES_REGISTER[0]);

        // Old deadline (6400 ms) no longer applies.
        rotator.tick(start + ms(7000));
        assert_eq!(rotator.index(), 0);
        rotator.tick(switched + ms(3800));
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn opacity_is_full_when_idle() {
        let start = Instant::now();
        let rotator = PhraseRotator::new(AuthView::Login, start);
        assert_relative_eq!(rotator.opacity(start + ms(100)), 1.0);
    }
}
