//! Случайные решения locomotion: roam точки и avoidance повороты.
//!
//! Roam точка — равномерно в КВАДРАТЕ `[-range, range]²` вокруг origin
//! (независимые draw'ы по X и Z, не диск). Y всегда = origin.y.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

/// Новая roam точка вокруг origin
pub fn pick_roam_target(origin: Vec3, range: f32, rng: &mut impl Rng) -> Vec3 {
    let range = range.max(0.0);
    let offset = Vec3::new(
        rng.gen_range(-range..=range),
        0.0,
        rng.gen_range(-range..=range),
    );
    origin + offset
}

/// Случайный avoidance поворот: 90..=180 градусов вокруг Y (radians)
pub fn pick_avoidance_turn(rng: &mut impl Rng) -> f32 {
    rng.gen_range(FRAC_PI_2..=PI)
}
