/// Battery capacity retention for the given simulation year.
///
/// Linear fade to 70% of nameplate capacity at year 10, then a second linear
/// segment down to 0% at year 15. Beyond the horizon the battery contributes
/// nothing.
pub fn degradation(year: u32) -> f64 {
    match year {
        0 => 1.0,
        1..=10 => 1.0 - 0.3 * f64::from(year) / 10.0,
        11..=15 => 0.70 - 0.70 * f64::from(year - 10) / 5.0,
        _ => 0.0,
    }
}
