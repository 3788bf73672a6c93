use std::f64::consts::{PI, TAU};

use glam::{dvec2, DVec2};

use crate::error::{Error, Result};

/// Wraps an angle into (-pi, pi].
pub fn normalize_angle(theta: f64) -> f64 {
    // rem_euclid keeps the remainder non-negative for negative angles too
    let wrapped = (theta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// A single rigid pendulum: fixed configuration plus the angle and angular velocity.
///
/// The mass position is never stored, it is always derived from the pivot, the length and theta.
#[derive(Clone, Debug, PartialEq)]
pub struct PendulumState {
    length: f64,
    gravity: f64,
    damping: f64,
    pivot: DVec2,
    // radians from straight down, kept in (-pi, pi]
    theta: f64,
    // radians per second
    omega: f64,
}

impl PendulumState {
    pub fn new(
        length: f64,
        gravity: f64,
        damping: f64,
        pivot: DVec2,
        theta: f64,
        omega: f64,
    ) -> Result<Self> {
        // written negated so that NaN is rejected as well
        if !(length > 0.) {
            return Err(Error::InvalidConfiguration(format!(
                "length must be positive, got {}",
                length
            )));
        }
        if !(damping >= 0.) {
            return Err(Error::InvalidConfiguration(format!(
                "damping must be non-negative, got {}",
                damping
            )));
        }
        Ok(Self {
            length,
            gravity,
            damping,
            pivot,
            theta: normalize_angle(theta),
            omega,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Only the angle changes, the pivot and the length stay where they are.
    pub fn set_theta(&mut self, theta: f64) {
        self.theta = normalize_angle(theta);
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn set_omega(&mut self, omega: f64) {
        self.omega = omega;
    }

    pub fn pivot(&self) -> DVec2 {
        self.pivot
    }

    /// Moves the suspension point between runs. The mass follows since its position is derived.
    pub fn set_pivot(&mut self, pivot: DVec2) {
        self.pivot = pivot;
    }

    pub fn mass_position(&self) -> DVec2 {
        let (sin, cos) = self.theta.sin_cos();
        self.pivot + self.length * dvec2(sin, -cos)
    }

    /// Mechanical energy per unit mass and length squared, `0.5 * omega^2 - g / l * cos(theta)`.
    pub fn energy(&self) -> f64 {
        0.5 * self.omega.powi(2) - self.gravity / self.length * self.theta.cos()
    }
}

#[cfg(test)]
mod test {
    use super::{normalize_angle, PendulumState};
    use crate::error::Error;
    use glam::{dvec2, DVec2};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    fn pendulum(theta: f64) -> PendulumState {
        PendulumState::new(3., 9.8, 0., dvec2(0., 2.), theta, -2.).unwrap()
    }

    #[test]
    fn rejects_bad_length() {
        for length in [0., -1., f64::NAN] {
            let result = PendulumState::new(length, 9.8, 0., DVec2::ZERO, 0., 0.);
            assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn rejects_negative_damping() {
        for damping in [-0.1, f64::NAN] {
            let result = PendulumState::new(1., 9.8, damping, DVec2::ZERO, 0., 0.);
            assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
        }
        assert!(PendulumState::new(1., 9.8, 0., DVec2::ZERO, 0., 0.).is_ok());
    }

    #[test]
    fn normalization_stays_in_range() {
        let mut p = pendulum(0.);
        let inputs = [
            0., PI, -PI, TAU, -TAU, 3. * PI, -3. * PI, 1e-300, -1e-300, 7.5, -7.5, 1234.5678,
            -98765.4321, 1e12, -1e12, f64::EPSILON, -f64::EPSILON,
        ];
        for value in inputs {
            p.set_theta(value);
            let theta = p.theta();
            assert!(theta > -PI && theta <= PI, "{} -> {}", value, theta);
        }
        for i in -2000..2000 {
            let value = i as f64 * 0.0137 * PI;
            let theta = normalize_angle(value);
            assert!(theta > -PI && theta <= PI, "{} -> {}", value, theta);
        }
    }

    #[test]
    fn normalization_keeps_direction() {
        assert!((normalize_angle(FRAC_PI_4) - FRAC_PI_4).abs() < 1e-15);
        assert!((normalize_angle(-FRAC_PI_4) + FRAC_PI_4).abs() < 1e-15);
        assert!((normalize_angle(TAU + FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(-TAU - FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(normalize_angle(-PI), PI);
        assert_eq!(normalize_angle(0.), 0.);
    }

    #[test]
    fn set_theta_only_moves_the_mass() {
        let mut p = pendulum(0.);
        assert!((p.mass_position() - dvec2(0., -1.)).length() < 1e-12);
        p.set_theta(FRAC_PI_2);
        assert_eq!(p.pivot(), dvec2(0., 2.));
        assert_eq!(p.length(), 3.);
        assert!((p.mass_position() - dvec2(3., 2.)).length() < 1e-12);
        p.set_theta(-FRAC_PI_2);
        assert!((p.mass_position() - dvec2(-3., 2.)).length() < 1e-12);
        assert_eq!(p.omega(), -2.);
    }

    #[test]
    fn mass_position_is_derived() {
        let mut p = pendulum(0.);
        for i in 0..100 {
            let theta = -PI + i as f64 * TAU / 100.;
            p.set_theta(theta);
            let theta = p.theta();
            let expected = p.pivot() + p.length() * dvec2(theta.sin(), -theta.cos());
            assert!((p.mass_position() - expected).length() <= 4. * f64::EPSILON);
            // rod length is preserved
            assert!(((p.mass_position() - p.pivot()).length() - 3.).abs() < 1e-12);
        }
    }

    #[test]
    fn relocating_pivot_carries_the_mass() {
        let mut p = pendulum(FRAC_PI_4);
        let offset = p.mass_position() - p.pivot();
        p.set_pivot(dvec2(4., 0.));
        assert_eq!(p.theta(), normalize_angle(FRAC_PI_4));
        assert!((p.mass_position() - dvec2(4., 0.) - offset).length() < 1e-12);
    }

    #[test]
    fn omega_is_not_normalized() {
        let mut p = pendulum(0.);
        p.set_omega(100.);
        assert_eq!(p.omega(), 100.);
        p.set_omega(-7. * PI);
        assert_eq!(p.omega(), -7. * PI);
    }

    #[test]
    fn energy_at_rest() {
        let p = PendulumState::new(2., 9.8, 0., DVec2::ZERO, 0., 0.).unwrap();
        assert!((p.energy() + 4.9).abs() < 1e-12);
    }
}
