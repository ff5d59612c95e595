use std::fmt::{Debug, Display, Formatter};

use crate::quantity::cost::Gbp;

/// Sterling amount rendered for humans, unlike the [`Display`] of [`Gbp`]
/// which keeps the unit suffix.
pub struct Money(pub Gbp);

impl Debug for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.0 < 0.0 {
            write!(f, "-£{:.2}", -self.0.0)
        } else {
            write!(f, "£{:.2}", self.0.0)
        }
    }
}

/// A percentage already scaled to `[0, 100]`.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
