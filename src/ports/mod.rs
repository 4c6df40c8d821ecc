//! Port traits defining external boundaries.
//!
//! Run metadata (time and run identifiers) comes from outside the process.
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod id_gen;

pub use clock::Clock;
pub use id_gen::IdGenerator;
