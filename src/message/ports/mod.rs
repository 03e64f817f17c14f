//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that the domain requires from
//! collaborators. Adapters implement these ports to connect the domain
//! to storage and to caller-supplied decoration strategies.

pub mod decorator;
pub mod repository;
pub mod validator;

pub use decorator::MessageDecorator;
pub use repository::MessageRepository;
pub use validator::BatchValidator;
