use fakemail::{EmailService, MemorySink, ServiceConfig, is_valid_address};
use lettre::Address;
use lettre::message::Mailbox;
use std::error::Error;
use std::sync::Arc;

const ADDRESSES: [&str; 5] = [
    "hanako@example.com",
    "tarou@example.jp",
    "first.last+tag@mail.example.co.uk",
    "a_b%c-d@my-domain.org",
    "X1@Y2.IO",
];

#[test]
fn accepted_addresses_parse_with_lettre() -> Result<(), Box<dyn Error>> {
    for address in ADDRESSES {
        assert!(is_valid_address(address), "{address} should be accepted");
        let parsed: Address = address.parse()?;
        assert_eq!(parsed.to_string(), address);
    }
    Ok(())
}

#[test]
fn mailbox_address_can_be_sent() -> Result<(), Box<dyn Error>> {
    let mailbox = "花子 <hanako@example.com>".parse::<Mailbox>()?;
    let sink = Arc::new(MemorySink::new());
    let service = EmailService::new(ServiceConfig::new(0.0, 0.0).with_sink(sink.clone()))?;

    let (_, result) = service.send_parts(&mailbox.email.to_string(), "件名", "本文");

    result?;
    assert_eq!(
        sink.lines(),
        vec![
            "Sending email to: hanako@example.com",
            "Subject: 件名",
            "Body: 本文"
        ]
    );
    Ok(())
}
