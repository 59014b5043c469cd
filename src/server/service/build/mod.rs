//! Build queue engine.
//!
//! [`queue::BuildQueueService`] orchestrates validation, persistence,
//! cancellation, and acceleration of build requests as atomic operations;
//! [`validator`] decides whether a new request is admissible; [`progress`]
//! holds the progress and acceleration-cost arithmetic.

pub mod progress;
pub mod queue;
pub mod validator;
