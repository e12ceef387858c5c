/*
 * Spawner Module
 *
 * Fills (or refills) a Flock with randomized boids. Each boid gets a random
 * position inside the visible area, a random velocity (clamped later by the
 * integrator), a random opaque color and the triangle derived from them.
 */

use nannou::color::srgba;
use rand::Rng;
use tracing::{debug, warn};

use crate::boid::{Boid, Color, Flock};
use crate::error::FlockError;
use crate::math;
use crate::params::FlockParams;

pub const MIN_FLOCK_SIZE: usize = 1;

// Fully random opaque color
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    srgba(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>(), 1.0)
}

pub fn random_boid<R: Rng + ?Sized>(rng: &mut R, params: &FlockParams) -> Boid {
    let position = math::scale(math::random_unit_square(rng), params.spawn_position_spread);
    let velocity = math::scale(math::random_unit_square(rng), params.spawn_velocity_spread);
    let color = random_color(rng);
    Boid::new(position, velocity, color, &params.triangle)
}

/// Replace every boid in `flock` with `count` freshly randomized ones.
///
/// Safe to call repeatedly on the same flock. On error the flock is left as it was.
pub fn spawn_flock<R: Rng + ?Sized>(
    flock: &mut Flock,
    count: usize,
    params: &FlockParams,
    rng: &mut R,
) -> Result<(), FlockError> {
    if count < MIN_FLOCK_SIZE {
        warn!(count, "rejecting flock spawn below the minimum size");
        return Err(FlockError::InvalidCount {
            count,
            min: MIN_FLOCK_SIZE,
        });
    }

    flock.replace_with((0..count).map(|_| random_boid(rng, params)));
    debug!(count, "spawned flock");
    Ok(())
}
