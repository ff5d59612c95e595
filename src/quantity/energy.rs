use std::ops::Mul;

use crate::quantity::{cost::Gbp, rate::KilowattHourRate};

quantity!(KilowattHours, "kWh");

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Gbp;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Gbp(self.0 * rhs.0)
    }
}
