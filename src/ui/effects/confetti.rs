//! Confetti burst for the celebration overlay
//!
//! A burst is a fixed batch of particles generated once per overlay opening.
//! Each particle falls from above the top edge to below the bottom edge,
//! spinning and fading as it goes, after its own start delay.

use std::time::{Duration, Instant};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Color, Element, Fill, Point, Renderer, Size, Theme, Vector, mouse};
use rand::Rng;

use crate::ui::theme::CONFETTI_PALETTE;

/// Particles per burst
pub const PARTICLE_COUNT: usize = 60;

/// Upper bound of the random start delay (seconds)
const MAX_DELAY_SECS: f32 = 0.5;
/// Fall duration range (seconds)
const MIN_DURATION_SECS: f32 = 2.0;
const MAX_DURATION_SECS: f32 = 4.0;

const PIECE_SIZE: Size = Size::new(10.0, 14.0);
/// Full turns over one fall
const SPIN_TURNS: f32 = 2.0;

/// One confetti piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal start position as a fraction of the width, in `[0, 1)`
    pub x: f32,
    /// Delay before the piece starts falling
    pub delay: Duration,
    /// Time to fall through the whole height
    pub duration: Duration,
    /// Index into `CONFETTI_PALETTE`
    pub color_index: usize,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            delay: Duration::from_secs_f32(rng.random_range(0.0..MAX_DELAY_SECS)),
            duration: Duration::from_secs_f32(
                rng.random_range(MIN_DURATION_SECS..MAX_DURATION_SECS),
            ),
            color_index: rng.random_range(0..CONFETTI_PALETTE.len()),
        }
    }

    pub fn color(&self) -> Color {
        CONFETTI_PALETTE[self.color_index]
    }

    /// Fall progress at `elapsed` since the burst started.
    ///
    /// `None` before the delay has passed and after the piece has landed.
    pub fn progress(&self, elapsed: Duration) -> Option<f32> {
        let fall = elapsed.checked_sub(self.delay)?;
        let progress = fall.as_secs_f32() / self.duration.as_secs_f32();
        (progress < 1.0).then_some(progress)
    }
}

/// A batch of particles generated for one overlay opening
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    started_at: Instant,
    particles: Vec<Particle>,
}

impl ConfettiBurst {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, started_at: Instant) -> Self {
        Self {
            started_at,
            particles: (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// When the last particle lands
    pub fn finishes_at(&self) -> Instant {
        let longest = self
            .particles
            .iter()
            .map(|p| p.delay + p.duration)
            .max()
            .unwrap_or_default();
        self.started_at + longest
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        now < self.finishes_at()
    }
}

/// Canvas program drawing a burst at a point in time
pub struct ConfettiCanvas<'a> {
    burst: &'a ConfettiBurst,
    now: Instant,
}

impl<'a, Message> Program<Message> for ConfettiCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let elapsed = self.now.saturating_duration_since(self.burst.started_at);
        let travel = bounds.height + PIECE_SIZE.height * 4.0;

        for particle in self.burst.particles() {
            let Some(progress) = particle.progress(elapsed) else {
                continue;
            };

            let x = particle.x * bounds.width;
            let y = -PIECE_SIZE.height * 2.0 + progress * travel;
            let color = Color {
                a: 1.0 - progress * progress,
                ..particle.color()
            };

            frame.with_save(|frame| {
                frame.translate(Vector::new(x, y));
                frame.rotate(progress * SPIN_TURNS * std::f32::consts::TAU);
                frame.fill_rectangle(
                    Point::new(-PIECE_SIZE.width / 2.0, -PIECE_SIZE.height / 2.0),
                    PIECE_SIZE,
                    color,
                );
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size confetti layer
pub fn view<'a, Message: 'a>(burst: &'a ConfettiBurst, now: Instant) -> Element<'a, Message> {
    Canvas::new(ConfettiCanvas { burst, now })
        .width(Fill)
        .height(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_has_fixed_size_and_bounded_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let burst = ConfettiBurst::generate(&mut rng, Instant::now());

        assert_eq!(burst.particles().len(), PARTICLE_COUNT);
        for p in burst.particles() {
            assert!((0.0..1.0).contains(&p.x));
            assert!(p.delay < Duration::from_millis(500));
            assert!(p.duration >= Duration::from_secs(2));
            assert!(p.duration < Duration::from_secs(4));
            assert!(p.color_index < CONFETTI_PALETTE.len());
            assert!(CONFETTI_PALETTE.contains(&p.color()));
        }
    }

    #[test]
    fn two_bursts_are_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Instant::now();
        let first = ConfettiBurst::generate(&mut rng, now);
        let second = ConfettiBurst::generate(&mut rng, now);

        assert_eq!(first.particles().len(), second.particles().len());
        assert_ne!(first.particles(), second.particles());
    }

    #[test]
    fn palette_is_covered_over_many_bursts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 8];
        for _ in 0..10 {
            let burst = ConfettiBurst::generate(&mut rng, Instant::now());
            for p in burst.particles() {
                seen[p.color_index] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn particle_progress_respects_delay_and_landing() {
        let particle = Particle {
            x: 0.5,
            delay: Duration::from_millis(200),
            duration: Duration::from_secs(2),
            color_index: 0,
        };

        assert_eq!(particle.progress(Duration::from_millis(100)), None);
        assert_eq!(particle.progress(Duration::from_millis(200)), Some(0.0));
        let mid = particle.progress(Duration::from_millis(1200)).unwrap();
        assert!((mid - 0.5).abs() < 1e-4);
        assert_eq!(particle.progress(Duration::from_millis(2200)), None);
    }

    #[test]
    fn burst_stops_animating_after_last_landing() {
        let mut rng = StdRng::seed_from_u64(11);
        let start = Instant::now();
        let burst = ConfettiBurst::generate(&mut rng, start);

        assert!(burst.is_animating(start));
        assert!(burst.finishes_at() <= start + Duration::from_millis(4500));
        assert!(!burst.is_animating(start + Duration::from_millis(4500)));
    }
}
