//! Testing utilities and harness for swipestack

pub mod robot;
pub mod robot_assertions;

pub use robot::*;
pub use robot_assertions::assert_approx_eq;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
