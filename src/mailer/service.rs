//! Simulated email service

use crate::mailer::address::is_valid_address;
use crate::mailer::config::ServiceConfig;
use crate::mailer::email::{Email, EmailIdentifier};
use crate::mailer::error::{ConfigError, Outcome, SendError};
use crate::mailer::sampler::{Sampler, ThreadSampler};

use std::sync::Arc;

/// Email service that validates, randomly fails, and logs instead of sending
///
/// Every call to [`EmailService::send`] is independent; the service keeps no
/// history between calls.
#[derive(Clone)]
pub struct EmailService {
    config: ServiceConfig,
    sampler: Arc<dyn Sampler>,
}

impl EmailService {
    /// Create a service drawing from the thread-local generator
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        Self::with_sampler(config, Arc::new(ThreadSampler))
    }

    /// Create a service with an explicit random source
    pub fn with_sampler(
        config: ServiceConfig,
        sampler: Arc<dyn Sampler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn bounce_rate(&self) -> f64 {
        self.config.bounce_rate
    }

    pub fn block_rate(&self) -> f64 {
        self.config.block_rate
    }

    /// Attempt to send an email
    ///
    /// The identifier is returned whatever the outcome. The address is
    /// validated first, then the bounce roll, then the block roll; the first
    /// stage that fails logs one line and ends the attempt. A delivered email
    /// logs its destination, subject and body.
    pub fn send(&self, email: &Email) -> (EmailIdentifier, Result<(), SendError>) {
        let id = email.id();
        let result = self.run_pipeline(email);

        tracing::debug!(
            id = id.as_u32(),
            address = %email.destination_address,
            outcome = Outcome::from_result(&result).as_str(),
            "send attempt finished"
        );

        (id, result)
    }

    /// Attempt to send an email given as separate fields
    pub fn send_parts(
        &self,
        destination_address: &str,
        subject: &str,
        body: &str,
    ) -> (EmailIdentifier, Result<(), SendError>) {
        self.send(&Email::new(destination_address, subject, body))
    }

    fn run_pipeline(&self, email: &Email) -> Result<(), SendError> {
        let address = &email.destination_address;
        let sink = &self.config.sink;

        if !is_valid_address(address) {
            sink.write_line(&format!("Invalid email address: {address}"));
            return Err(SendError::InvalidAddress {
                address: address.clone(),
            });
        }

        if self.roll(self.config.bounce_rate) {
            sink.write_line(&format!("Simulating email bounce: {address}"));
            return Err(SendError::Bounced {
                address: address.clone(),
            });
        }

        if self.roll(self.config.block_rate) {
            sink.write_line(&format!("Simulating email block: {address}"));
            return Err(SendError::Blocked {
                address: address.clone(),
            });
        }

        sink.write_lines(&[
            format!("Sending email to: {address}"),
            format!("Subject: {}", email.subject),
            format!("Body: {}", email.body),
        ]);
        Ok(())
    }

    /// A draw in `[0, 1)` triggers when strictly below `rate`, so a rate of 0
    /// never triggers and a rate of 1 always does
    fn roll(&self, rate: f64) -> bool {
        self.sampler.sample() < rate
    }
}

impl Default for EmailService {
    fn default() -> Self {
        Self {
            config: ServiceConfig::default(),
            sampler: Arc::new(ThreadSampler),
        }
    }
}

impl std::fmt::Debug for EmailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::sampler::{FixedSampler, SeededSampler};
    use crate::mailer::sink::MemorySink;

    fn service_with(
        bounce_rate: f64,
        block_rate: f64,
        sampler: Arc<dyn Sampler>,
    ) -> (EmailService, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let config = ServiceConfig::new(bounce_rate, block_rate).with_sink(sink.clone());
        let service = EmailService::with_sampler(config, sampler).unwrap();
        (service, sink)
    }

    fn test_email() -> Email {
        Email::new("user@example.com", "Hi", "Body")
    }

    #[test]
    fn test_send_delivers_and_logs_three_lines() {
        let (service, sink) = service_with(0.0, 0.0, Arc::new(ThreadSampler));
        let email = test_email();

        let (id, result) = service.send(&email);

        assert_eq!(id, email.id());
        assert_eq!(result, Ok(()));
        assert_eq!(
            sink.lines(),
            vec![
                "Sending email to: user@example.com",
                "Subject: Hi",
                "Body: Body"
            ]
        );
    }

    #[test]
    fn test_invalid_address_preempts_rolls() {
        let (service, sink) = service_with(1.0, 1.0, Arc::new(ThreadSampler));
        let email = Email::new("not-an-address", "Hi", "Body");

        let (id, result) = service.send(&email);

        assert_eq!(id, email.id());
        assert_eq!(
            result,
            Err(SendError::InvalidAddress {
                address: "not-an-address".to_string()
            })
        );
        assert_eq!(sink.lines(), vec!["Invalid email address: not-an-address"]);
    }

    #[test]
    fn test_bounce_checked_before_block() {
        let (service, sink) = service_with(1.0, 1.0, Arc::new(ThreadSampler));

        let (_, result) = service.send(&test_email());

        assert!(matches!(result, Err(SendError::Bounced { .. })));
        assert_eq!(sink.lines(), vec!["Simulating email bounce: user@example.com"]);
    }

    #[test]
    fn test_block_when_bounce_disabled() {
        let (service, sink) = service_with(0.0, 1.0, Arc::new(ThreadSampler));

        let (_, result) = service.send(&test_email());

        assert_eq!(
            result,
            Err(SendError::Blocked {
                address: "user@example.com".to_string()
            })
        );
        assert_eq!(sink.lines(), vec!["Simulating email block: user@example.com"]);
    }

    #[test]
    fn test_zero_rate_never_triggers_on_zero_draw() {
        let (service, sink) = service_with(0.0, 0.0, Arc::new(FixedSampler::new(0.0)));

        let (_, result) = service.send(&test_email());

        assert_eq!(result, Ok(()));
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_full_rate_triggers_on_highest_draw() {
        let (service, _sink) = service_with(1.0, 0.0, Arc::new(FixedSampler::new(1.0)));

        let (_, result) = service.send(&test_email());

        assert!(matches!(result, Err(SendError::Bounced { .. })));
    }

    #[test]
    fn test_draw_equal_to_rate_does_not_trigger() {
        let (service, _sink) = service_with(0.5, 0.5, Arc::new(FixedSampler::new(0.5)));

        let (_, result) = service.send(&test_email());

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_draw_below_rate_triggers() {
        let (service, _sink) = service_with(0.0, 0.5, Arc::new(FixedSampler::new(0.25)));

        let (_, result) = service.send(&test_email());

        assert!(matches!(result, Err(SendError::Blocked { .. })));
    }

    #[test]
    fn test_send_parts_matches_send() {
        let (service, sink) = service_with(0.0, 0.0, Arc::new(ThreadSampler));
        let email = test_email();

        let (structured_id, structured) = service.send(&email);
        let (positional_id, positional) = service.send_parts("user@example.com", "Hi", "Body");

        assert_eq!(structured_id, positional_id);
        assert_eq!(structured, positional);
        assert_eq!(sink.len(), 6);
    }

    #[test]
    fn test_seeded_services_agree() {
        let (first, _) = service_with(0.5, 0.5, Arc::new(SeededSampler::new(7)));
        let (second, _) = service_with(0.5, 0.5, Arc::new(SeededSampler::new(7)));

        for _ in 0..32 {
            let (_, a) = first.send(&test_email());
            let (_, b) = second.send(&test_email());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_construction_rejects_bad_rates() {
        let err = EmailService::new(ServiceConfig::new(2.0, 0.0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBounceRate(2.0));

        let err = EmailService::new(ServiceConfig::new(0.0, 1.5)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBlockRate(1.5));
    }

    #[test]
    fn test_default_service_uses_library_preset() {
        let service = EmailService::default();
        assert_eq!(service.bounce_rate(), 0.25);
        assert_eq!(service.block_rate(), 0.1);
        assert!(service.config().validate().is_ok());
    }
}
