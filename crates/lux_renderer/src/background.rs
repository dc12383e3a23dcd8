//! Background colour for rays that escape the scene, with optional clouds.

use lux_core::Color;
use lux_math::{Ray, Vec3};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const PERLIN_NUM_POINTS: usize = 256;

/// Fixed seed so the sky looks the same from run to run.
const CLOUD_SEED: u64 = 0x6c75_785f_736b_79;

/// How far along an escaping ray the sky is sampled.
const SKY_DISTANCE: f32 = 1000.0;

/// Gradient lattice noise (Perlin), with random unit vectors on the lattice.
#[derive(Clone, Debug)]
pub struct Perlin {
    rand_vec: Vec<Vec3>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    /// Build a noise lattice from a seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rand_vec = (0..PERLIN_NUM_POINTS)
            .map(|_| random_unit_vector(&mut rng))
            .collect();

        Self {
            rand_vec,
            perm_x: random_permutation(&mut rng),
            perm_y: random_permutation(&mut rng),
            perm_z: random_permutation(&mut rng),
        }
    }

    /// Noise value in [-1, 1].
    pub fn noise(&self, p: Vec3) -> f32 {
        let floor = p.floor();
        let (i, j, k) = (floor.x as i32, floor.y as i32, floor.z as i32);
        let frac = p - floor;

        // Hermite smoothing of the interpolation weights
        let smooth = frac * frac * (Vec3::splat(3.0) - 2.0 * frac);

        let mut accum = 0.0;
        for di in 0..2 {
            for dj in 0..2 {
                for dk in 0..2 {
                    let index = self.perm_x[((i + di) & 255) as usize]
                        ^ self.perm_y[((j + dj) & 255) as usize]
                        ^ self.perm_z[((k + dk) & 255) as usize];
                    let gradient = self.rand_vec[index];

                    let corner = Vec3::new(di as f32, dj as f32, dk as f32);
                    let weight = corner * smooth + (Vec3::ONE - corner) * (Vec3::ONE - smooth);
                    accum += weight.x * weight.y * weight.z * gradient.dot(frac - corner);
                }
            }
        }

        accum.clamp(-1.0, 1.0)
    }

    /// Noise at the integer lattice cell containing `position`, scaled and
    /// remapped to [0, 1].
    pub fn sample(&self, position: Vec3, scale: f32) -> f32 {
        let cell = position.trunc();
        (self.noise(cell * scale) + 1.0) * 0.5
    }
}

fn random_unit_vector(rng: &mut StdRng) -> Vec3 {
    // Uniform on the sphere from a random height and azimuth
    let z: f32 = rng.gen_range(-1.0..1.0);
    let phi: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

fn random_permutation(rng: &mut StdRng) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..PERLIN_NUM_POINTS).collect();
    perm.shuffle(rng);
    perm
}

/// What a ray sees when it misses every shape.
#[derive(Clone, Debug)]
pub struct Background {
    color: Color,
    clouds: Option<Perlin>,
}

impl Background {
    /// Solid background, optionally blended with procedural clouds.
    pub fn new(color: Color, clouds: bool) -> Self {
        Self {
            color,
            clouds: clouds.then(|| Perlin::new(CLOUD_SEED)),
        }
    }

    /// Colour seen along an escaping ray.
    pub fn sample(&self, ray: &Ray) -> Color {
        let Some(perlin) = &self.clouds else {
            return self.color;
        };

        let position = ray.at(SKY_DISTANCE);
        let value = 1.0 * perlin.sample(position, 0.005) + 0.4 * perlin.sample(position, 0.01);
        let value = ((value + 1.4) / 2.8).powi(5);

        self.color.lerp(Color::ONE, value)
    }
}
