//! Basic usage example for fakemail
//!
//! This example demonstrates how calling code holds an `EmailService` and
//! reacts to each kind of outcome.

use fakemail::{
    Email, EmailService, FailureKind, MemorySink, SeededSampler, SendError, ServiceConfig,
};
use std::sync::Arc;

fn main() {
    println!("fakemail Basic Usage Example");
    println!("============================");

    // Service with the default preset, logging to stdout
    let service = EmailService::default();
    println!(
        "Created service with bounce rate {} and block rate {}",
        service.bounce_rate(),
        service.block_rate()
    );

    println!("\nSending test email...");
    let email = Email::new("recipient@example.com", "Hello", "This is a test email.");
    let (id, result) = service.send(&email);
    report(id.as_u32(), &result);

    println!("\nSending to an invalid address...");
    let (id, result) = service.send_parts("invalid_email", "Hello", "Nobody will read this.");
    report(id.as_u32(), &result);

    // Seeded service recording lines in memory
    println!("\nRunning ten seeded attempts...");
    let sink = Arc::new(MemorySink::new());
    let config = ServiceConfig::new(0.3, 0.2).with_sink(sink.clone());
    let service = match EmailService::with_sampler(config, Arc::new(SeededSampler::new(2024))) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Failed to create service: {e}");
            return;
        }
    };

    let mut retryable = 0;
    for n in 0..10 {
        let email = Email::new(format!("user{n}@example.com"), "Newsletter", "Issue #1");
        let (_, result) = service.send(&email);
        if let Err(e) = result {
            if e.is_retryable() {
                retryable += 1;
            }
        }
    }
    println!("{retryable} attempts could be retried");
    println!("Recorded log lines:");
    for line in sink.lines() {
        println!("  {line}");
    }

    println!("\nRejecting an invalid configuration...");
    match EmailService::new(ServiceConfig::new(2.0, 0.0)) {
        Ok(_) => println!("Unexpectedly accepted"),
        Err(e) => println!("Rejected: {e}"),
    }
}

fn report(id: u32, result: &Result<(), SendError>) {
    println!("Email ID: {id}");
    match result {
        Ok(()) => println!("Delivered"),
        Err(e) => match e.kind() {
            FailureKind::InvalidAddress => println!("Error: Invalid email address"),
            FailureKind::Bounced => println!("Error: Email bounced (may retry)"),
            FailureKind::Blocked => println!("Error: Email blocked ({})", e.to_response_code()),
        },
    }
}
