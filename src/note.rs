use std::sync::LazyLock;

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use regex::Regex;
use thiserror::Error;

static DATA_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:audio/(?P<format>.+);base64,(?P<payload>.+)$")
        .expect("valid data uri regex")
});

// standard alphabet with required padding, but tolerant of non-zero trailing bits
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Data uri of note {name} is not a base64 audio uri")]
    MalformedUri { name: String },
    #[error("Error decoding base64 for note {name}: {source}")]
    Base64 {
        name: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// A single decoded sample of a soundfont
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub name: String,
    /// file extension taken from the mime type, e.g. `mp3` or `ogg`
    pub format: String,
    pub data: Vec<u8>,
}

/// splits `data:audio/<format>;base64,<payload>` into format and payload
pub fn parse_data_uri(data_uri: &str) -> Option<(&str, &str)> {
    let captures = DATA_URI_RE.captures(data_uri)?;
    Some((
        captures.name("format")?.as_str(),
        captures.name("payload")?.as_str(),
    ))
}

impl Note {
    pub fn decode(name: &str, data_uri: &str) -> Result<Self, NoteError> {
        let (format, payload) = parse_data_uri(data_uri).ok_or_else(|| NoteError::MalformedUri {
            name: name.to_string(),
        })?;
        // wrapped payloads can keep the indentation of their continuation lines
        let payload: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let data = PAYLOAD_ENGINE
            .decode(payload)
            .map_err(|source| NoteError::Base64 {
                name: name.to_string(),
                source,
            })?;
        Ok(Note {
            name: name.to_string(),
            format: format.to_string(),
            data,
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format)
    }
}
