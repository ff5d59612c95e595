//! Self-consumption reference data, named after the MCS (Microgeneration
//! Certification Scheme) dataset the percentages come from.

pub mod entry;
pub mod occupancy;
pub mod resolver;
pub mod snapshot;
pub mod source;
pub mod table;
