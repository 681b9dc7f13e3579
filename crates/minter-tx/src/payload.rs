use serde::{Deserialize, Serialize};

/// A payload or service-data field.
///
/// On the wire this is an opaque byte string. Decoding keeps it as text when
/// the bytes are valid UTF-8 and falls back to raw bytes otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    Text(String),
    Binary(Vec<u8>),
}

impl Payload {
    pub fn empty() -> Self {
        Payload::Text(String::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Binary(bytes) => bytes,
        }
    }

    /// UTF-8 byte length, which is what the fee formula charges for.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Wire bytes become text when they are valid UTF-8, raw bytes otherwise.
    pub fn from_wire(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Payload::Text(text),
            Err(e) => Payload::Binary(e.into_bytes()),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::empty()
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Binary(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_length_is_utf8_bytes() {
        let payload = Payload::from("\u{1f533}"); // one symbol, four bytes
        assert_eq!(payload.len(), 4);
    }

    #[test]
    fn wire_utf8_becomes_text() {
        assert_eq!(
            Payload::from_wire(b"fff".to_vec()),
            Payload::Text("fff".into())
        );
    }

    #[test]
    fn wire_non_utf8_stays_binary() {
        assert_eq!(
            Payload::from_wire(vec![0xff, 0xff, 0xff]),
            Payload::Binary(vec![0xff, 0xff, 0xff])
        );
    }

    #[test]
    fn empty_default() {
        assert!(Payload::default().is_empty());
        assert_eq!(Payload::default().len(), 0);
    }

    #[test]
    fn binary_round_trips_through_wire() {
        let payload = Payload::from(vec![0xde, 0xad, 0xbe]);
        let wire = payload.as_bytes().to_vec();
        // 0xde 0xad 0xbe is not valid UTF-8, so the variant survives.
        assert_eq!(Payload::from_wire(wire), payload);
    }
}
