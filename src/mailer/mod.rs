//! Email sending simulator

pub mod address;
pub mod config;
pub mod email;
pub mod error;
pub mod sampler;
pub mod service;
pub mod sink;

pub use address::is_valid_address;
pub use config::{DefaultRates, ServiceConfig};
pub use email::{Email, EmailIdentifier};
pub use error::{ConfigError, FailureKind, Outcome, SendError};
pub use sampler::{FixedSampler, Sampler, SeededSampler, ThreadSampler};
pub use service::EmailService;
pub use sink::{DiscardSink, LogSink, MemorySink, StdoutSink, TracingSink, WriterSink};
