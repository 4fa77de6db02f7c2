/// A single probe target, classified by its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// `http://` or `https://` URL, probed with a GET request.
    Http(String),
    /// Anything else containing a colon, treated as `host:port`.
    Tcp(String),
    /// Neither of the above; never reaches the network.
    Invalid(String),
}

impl Destination {
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Destination::Http(raw.to_string())
        } else if raw.contains(':') {
            Destination::Tcp(raw.to_string())
        } else {
            Destination::Invalid(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Destination::Http(s) | Destination::Tcp(s) | Destination::Invalid(s) => s,
        }
    }
}

/// Split a comma-separated list, trimming each entry and dropping empties.
pub fn parse_destinations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
