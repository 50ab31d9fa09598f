use clap::Parser;
use fakemail::{
    DiscardSink, EmailService, LogSink, Sampler, SeededSampler, SendError, ServiceConfig,
    StdoutSink, ThreadSampler,
};
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fakemail")]
#[command(about = "Simulate sending an email with random bounces and blocks")]
struct Args {
    /// Destination address
    #[arg(default_value = "recipient@example.com")]
    to: String,

    /// Subject line
    #[arg(default_value = "Hello")]
    subject: String,

    /// Message body
    #[arg(default_value = "This is a test email.")]
    body: String,

    /// Probability that a valid email bounces
    #[arg(long, default_value_t = fakemail::DefaultRates::CLI_BOUNCE)]
    bounce_rate: f64,

    /// Probability that a valid, unbounced email is blocked
    #[arg(long, default_value_t = fakemail::DefaultRates::CLI_BLOCK)]
    block_rate: f64,

    /// Seed the random source for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of send attempts
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Discard simulator log lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sink: Arc<dyn LogSink> = if args.quiet {
        Arc::new(DiscardSink)
    } else {
        Arc::new(StdoutSink)
    };
    let sampler: Arc<dyn Sampler> = match args.seed {
        Some(seed) => Arc::new(SeededSampler::new(seed)),
        None => Arc::new(ThreadSampler),
    };

    let config = ServiceConfig::new(args.bounce_rate, args.block_rate).with_sink(sink);
    let service = match EmailService::with_sampler(config, sampler) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Failed to create email service: {e}");
            process::exit(1);
        }
    };

    tracing::info!(
        bounce_rate = service.bounce_rate(),
        block_rate = service.block_rate(),
        count = args.count,
        "starting simulated sends"
    );

    for _ in 0..args.count {
        let (id, result) = service.send_parts(&args.to, &args.subject, &args.body);
        println!("Email ID: {id}");
        match result {
            Ok(()) => {}
            Err(SendError::InvalidAddress { .. }) => println!("Error: Invalid email address"),
            Err(SendError::Bounced { .. }) => println!("Error: Email bounced"),
            Err(SendError::Blocked { .. }) => println!("Error: Email blocked"),
        }
    }
}
