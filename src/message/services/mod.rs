//! Application services for the message subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports,
//! implementing the batch-processing workflow.

mod counter;
mod pipeline;

pub use counter::OrdinalCounter;
pub use pipeline::{Doubling, MessagePipeline, Order, ProcessOptions};
