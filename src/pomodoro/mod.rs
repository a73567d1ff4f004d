pub mod clock_face;
pub mod cycle;
pub mod messages;
pub mod phase;
