extern crate nalgebra as na;

pub mod geodetic;
pub mod location;
pub mod observation;
pub mod observer;
pub mod pass;
pub mod prelude;
pub mod state;
pub mod time;
pub mod tle;
