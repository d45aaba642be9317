use crate::{ColorMatch, NearestMatch};
use approx::AbsDiffEq;

impl AbsDiffEq for ColorMatch {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.rgb == other.rgb
            && self.distance.abs_diff_eq(&other.distance, epsilon)
    }
}

impl AbsDiffEq for NearestMatch {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (NearestMatch::Named(m1), NearestMatch::Named(m2)) => m1.abs_diff_eq(m2, epsilon),
            _ => self == other,
        }
    }
}
