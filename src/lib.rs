//! # fakemail
//!
//! fakemail is a stand-in for a real mail-delivery backend in tests and demos.
//!
//! It lets code exercise success, invalid-address, bounce and block paths
//! without a network, and returns a stable content-derived identifier for
//! every attempt so requests can be correlated with outcomes.
//!
//! ## Quick Start
//!
//! ```rust
//! use fakemail::{Email, EmailService, MemorySink, SendError, ServiceConfig};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = ServiceConfig::new(0.0, 0.0).with_sink(sink.clone());
//! let service = EmailService::new(config).unwrap();
//!
//! let email = Email::new("user@example.com", "Hi", "Body");
//! let (id, result) = service.send(&email);
//!
//! assert_eq!(id, email.id());
//! assert!(result.is_ok());
//! assert_eq!(sink.lines()[0], "Sending email to: user@example.com");
//!
//! let (_, result) = service.send_parts("not-an-address", "Hi", "Body");
//! assert!(matches!(result, Err(SendError::InvalidAddress { .. })));
//! ```
//!
//! ## Send pipeline
//!
//! 1. The identifier is computed (always returned)
//! 2. The address is checked against a simple pattern
//! 3. A bounce is rolled with probability `bounce_rate`
//! 4. A block is rolled with probability `block_rate`
//! 5. The email is "delivered" by logging its destination, subject and body
//!
//! The first failing stage logs one line and ends the attempt.
//!
//! ## Log lines
//!
//! - `Invalid email address: <address>`
//! - `Simulating email bounce: <address>`
//! - `Simulating email block: <address>`
//! - `Sending email to: <address>`, `Subject: <subject>`, `Body: <body>`
//!
//! ## Identifiers
//!
//! An [`EmailIdentifier`] is the 32-bit FNV-1 hash of the destination
//! address, subject and body bytes, in that order, with no separators.
//!
//! ## Notes
//!
//! - Nothing is transmitted or persisted.
//! - Address validation is a pattern check, not RFC 5322.
//! - Rates of 0 and 1 are hard guarantees.
//! - Inject a [`SeededSampler`] or [`FixedSampler`] for reproducible tests.

mod mailer;

pub use mailer::{
    ConfigError, DefaultRates, DiscardSink, Email, EmailIdentifier, EmailService, FailureKind,
    FixedSampler, LogSink, MemorySink, Outcome, Sampler, SeededSampler, SendError, ServiceConfig,
    StdoutSink, ThreadSampler, TracingSink, WriterSink, is_valid_address,
};
