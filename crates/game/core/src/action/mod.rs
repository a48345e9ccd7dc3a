//! Action domain - what participants and the umpire produce each turn.
//!
//! # Module Structure
//!
//! - `types`: [`ActionResponse`] (the structured action every producer returns)
//!   and [`ActionShape`] (the statically declared response contract)
//! - `resource`: [`ResourceChange`] and [`Modifier`], the optional resource
//!   adjustments an action may declare

pub mod resource;
pub mod types;

pub use resource::{Modifier, ResourceChange};
pub use types::{ActionResponse, ActionShape};
