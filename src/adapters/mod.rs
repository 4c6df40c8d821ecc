//! Adapters implementing the port traits.

pub mod fixed;
pub mod live;
