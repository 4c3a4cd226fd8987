use chrono::NaiveDateTime;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Radio endpoint identifier as it appears in the log (uppercase hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HexAddress(pub String);

impl HexAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for HexAddress {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HexAddress {
    fn from(s: &str) -> Self {
        HexAddress(s.to_string())
    }
}

/// One side of a transmission: who, and in what role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    pub hex: HexAddress,
    pub kind: String,
}

/// Receiver metadata taken from the record header line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Acquisition {
    pub timestamp: NaiveDateTime,
    pub frequency: f64,
    pub signal_level: f64,
}

/// A single decoded transmission.
///
/// Built once by [`parse_message`](crate::message::parse_message) and never
/// mutated afterwards; every field is read through an accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    acquisition: Option<Acquisition>,
    from: Option<Endpoint>,
    to: Option<Endpoint>,
    raw: Vec<String>,
}

impl Message {
    pub(crate) fn new(
        acquisition: Option<Acquisition>,
        from: Option<Endpoint>,
        to: Option<Endpoint>,
        raw: Vec<String>,
    ) -> Self {
        Self {
            acquisition,
            from,
            to,
            raw,
        }
    }

    pub fn acquisition(&self) -> Option<&Acquisition> {
        self.acquisition.as_ref()
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.acquisition.map(|a| a.timestamp)
    }

    pub fn frequency(&self) -> Option<f64> {
        self.acquisition.map(|a| a.frequency)
    }

    pub fn signal_level(&self) -> Option<f64> {
        self.acquisition.map(|a| a.signal_level)
    }

    pub fn sender(&self) -> Option<&Endpoint> {
        self.from.as_ref()
    }

    pub fn receiver(&self) -> Option<&Endpoint> {
        self.to.as_ref()
    }

    pub fn from_hex(&self) -> Option<&HexAddress> {
        self.from.as_ref().map(|e| &e.hex)
    }

    pub fn from_type(&self) -> Option<&str> {
        self.from.as_ref().map(|e| e.kind.as_str())
    }

    pub fn to_hex(&self) -> Option<&HexAddress> {
        self.to.as_ref().map(|e| &e.hex)
    }

    pub fn to_type(&self) -> Option<&str> {
        self.to.as_ref().map(|e| e.kind.as_str())
    }

    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// True when at least one endpoint was recognised.
    pub fn has_endpoint(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// `FROM (type) -> TO (type)`, with `None` for a missing side.
    pub fn summary(&self) -> String {
        fn side(e: Option<&Endpoint>) -> String {
            match e {
                Some(e) => format!("{} ({})", e.hex, e.kind),
                None => "None (None)".to_string(),
            }
        }

        format!("{} -> {}", side(self.sender()), side(self.receiver()))
    }
}
