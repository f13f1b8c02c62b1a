// Closed-form spectrum samplers used by the Maxwell and Watt distributions

use rand::Rng;
use std::f64::consts::FRAC_PI_2;

/// Sample a Maxwellian energy spectrum, f(E) ∝ sqrt(E) exp(-E/theta).
///
/// Uses the three-draw rule from the OpenMC theory manual (LA-UR-14-27694):
/// E = -theta * (ln ξ1 + ln ξ2 * cos²(π ξ3 / 2)).
/// Draws are taken as 1 - ξ so the logarithms stay finite.
pub fn maxwell_spectrum<R: Rng + ?Sized>(theta: f64, rng: &mut R) -> f64 {
    let r1 = 1.0 - rng.gen::<f64>();
    let r2 = 1.0 - rng.gen::<f64>();
    let r3: f64 = rng.gen();

    let c = (FRAC_PI_2 * r3).cos();
    -theta * (r1.ln() + r2.ln() * c * c)
}

/// Sample the Watt fission spectrum, f(E) ∝ exp(-E/a) sinh(sqrt(b E)).
///
/// A Maxwellian variate w with temperature `a` is shifted by a²b/4 and
/// smeared by a uniform cosine: E = w + a²b/4 + (2ξ - 1) sqrt(a² b w).
pub fn watt_spectrum<R: Rng + ?Sized>(a: f64, b: f64, rng: &mut R) -> f64 {
    let w = maxwell_spectrum(a, rng);
    let mu = 2.0 * rng.gen::<f64>() - 1.0;
    w + 0.25 * a * a * b + mu * (a * a * b * w).sqrt()
}
