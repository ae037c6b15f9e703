//! Board logic (deterministic apart from round bookkeeping).
//!
//! - `board`    - peg map generation and canonical hashing
//! - `path`     - left/right decisions
//! - `simulate` - seed to outcome
//! - `round`    - Created / Simulated / Revealed lifecycle

pub mod board;
pub mod path;
pub mod round;
pub mod simulate;

pub use board::PegMap;
pub use path::{Direction, Path};
pub use round::{Round, RoundError, RoundPlay, RoundStatus, RoundView};
pub use simulate::{simulate, RoundOutcome, SimulationParams};
