//! Campaign-layer logic for Turf: wave composition, the between-wave shop
//! economy, and the Visitor's heat-for-resources negotiation.

pub mod economy;
pub mod offers;
pub mod visitor;
pub mod wave_composer;
