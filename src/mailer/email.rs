//! Email data structures and content-derived identifiers

use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// An email handed to the simulator for a single send attempt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    /// The recipient's email address
    pub destination_address: String,

    /// The subject line
    pub subject: String,

    /// The message body
    pub body: String,
}

impl Email {
    /// Create a new email
    pub fn new(
        destination_address: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            destination_address: destination_address.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Get the identifier for this email without sending it
    ///
    /// The identifier is the 32-bit FNV-1 hash of the destination address,
    /// subject and body, fed in that order as raw UTF-8 bytes with nothing
    /// between them. Identical content always yields the same identifier.
    pub fn id(&self) -> EmailIdentifier {
        let mut hash = Fnv1::new();
        hash.write(self.destination_address.as_bytes());
        hash.write(self.subject.as_bytes());
        hash.write(self.body.as_bytes());
        EmailIdentifier(hash.finish())
    }
}

/// A 32-bit identifier derived from an email's content
///
/// Distinct content may collide. Callers correlating attempts should treat
/// the identifier as a content fingerprint, not a unique key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailIdentifier(u32);

impl EmailIdentifier {
    /// The raw identifier value
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for EmailIdentifier {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<EmailIdentifier> for u32 {
    fn from(id: EmailIdentifier) -> Self {
        id.0
    }
}

impl fmt::Display for EmailIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for EmailIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Running FNV-1 (multiply, then xor) accumulator
struct Fnv1(u32);

impl Fnv1 {
    fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = self.0.wrapping_mul(FNV_PRIME);
            self.0 ^= u32::from(byte);
        }
    }

    fn finish(&self) -> u32 {
        self.0
    }
}
