//! Pocket Universe - planet nurturing simulation
//!
//! Tend a world from a lifeless rock to a galactic empire: environmental
//! processes and random disasters move its resources, life climbs a fixed
//! ladder of stages, and the player spends divine energy to intervene.

pub mod account;
pub mod catalog;
pub mod core;
pub mod planet;
pub mod progression;
pub mod session;
