#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_flight_state_valid, assert_render_vec_eq};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
