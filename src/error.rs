use thiserror::Error as ThisError;

/// Domain errors of the calculation engine. Invalid input and broken
/// configuration are kept apart from I/O failures, which stay [`anyhow`].
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{name} must be between {min} and {max}, got {value}")]
    InvalidParameter { name: &'static str, value: f64, min: f64, max: f64 },

    #[error("the self-consumption reference table is empty")]
    EmptyTable,

    #[error(
        "no reference entry covers {consumption} kWh consumption and {generation} kWh generation"
    )]
    NoMatch { consumption: f64, generation: f64 },

    #[error("no tariff configured for a household with EV = {ev_required}")]
    NoTariffConfigured { ev_required: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_values() {
        let error = Error::InvalidParameter {
            name: "battery size",
            value: 60.0,
            min: 0.0,
            max: 50.0,
        };
        assert_eq!(error.to_string(), "battery size must be between 0 and 50, got 60");
    }
}
