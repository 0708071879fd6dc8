use std::sync::LazyLock;

use regex::Regex;

static SOUNDFONT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"MIDI\.Soundfont\.(?P<font_name>.+?) = \{(?P<body>.*)\}")
        .expect("valid soundfont regex")
});

static NOTE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-G]b?[0-8]$").expect("valid note name regex"));

static DATA_URI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:audio").expect("valid data uri regex"));

/// the `MIDI.Soundfont.<name> = {...}` assignment inside a soundfont file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundfontBlock<'a> {
    pub font_name: &'a str,
    // everything between the opening brace and the last closing brace
    pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePair<'a> {
    pub name: &'a str,
    pub data_uri: &'a str,
}

/// expects text without line endings, see [`crate::normalize::remove_line_endings`]
pub fn locate_block(text: &str) -> Option<SoundfontBlock<'_>> {
    let captures = SOUNDFONT_RE.captures(text)?;
    Some(SoundfontBlock {
        font_name: captures.name("font_name")?.as_str(),
        body: captures.name("body")?.as_str(),
    })
}

pub fn is_note_name(token: &str) -> bool {
    NOTE_NAME_RE.is_match(token)
}

pub fn is_data_uri(token: &str) -> bool {
    DATA_URI_RE.is_match(token)
}

impl<'a> SoundfontBlock<'a> {
    /// Pairs every note name with the data uri directly following it.
    ///
    /// The body is split on `"` and walked in order. A note name is held until a
    /// data uri consumes it; a newer name replaces an unconsumed one, and a data
    /// uri without a pending name is ignored.
    pub fn note_pairs(&self) -> Vec<NotePair<'a>> {
        let mut pairs = Vec::new();
        let mut pending_name = None;
        for token in self.body.split('"') {
            if is_note_name(token) {
                pending_name = Some(token);
            } else if is_data_uri(token) {
                if let Some(name) = pending_name.take() {
                    pairs.push(NotePair {
                        name,
                        data_uri: token,
                    });
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod test {
    use super::{is_data_uri, is_note_name, locate_block, NotePair};

    #[test]
    pub fn locates_block() {
        let text = r#"if (typeof(MIDI) === 'undefined') var MIDI = {};MIDI.Soundfont.Acoustic_Grand_Piano = {"A0":"data:audio/mp3;base64,AAAA"}"#;
        let block = locate_block(text).unwrap();
        assert_eq!(block.font_name, "Acoustic_Grand_Piano");
        assert_eq!(block.body, r#""A0":"data:audio/mp3;base64,AAAA""#);
    }

    #[test]
    pub fn body_ends_at_last_brace() {
        let block = locate_block(r#"MIDI.Soundfont.x = {"A0":{"B1":"y"}};"#).unwrap();
        assert_eq!(block.font_name, "x");
        assert_eq!(block.body, r#""A0":{"B1":"y"}"#);
    }

    #[test]
    pub fn missing_block() {
        assert!(locate_block(r#"var notes = {"A0":"data:audio/mp3;base64,AAAA"}"#).is_none());
        // the separator needs to be exactly ` = {`
        assert!(locate_block(r#"MIDI.Soundfont.x={"A0":"data:audio/mp3;base64,AAAA"}"#).is_none());
    }

    #[test]
    pub fn note_names() {
        for name in ["A0", "Bb3", "C8", "Gb0", "Eb7"] {
            assert!(is_note_name(name), "{name}");
        }
        for name in ["H1", "A9", "A#1", "a1", "Ab", "A10", " A1", ""] {
            assert!(!is_note_name(name), "{name}");
        }
        assert!(is_data_uri("data:audio/ogg;base64,AAAA"));
        assert!(is_data_uri("data:audio"));
        assert!(!is_data_uri("data:image/png;base64,AAAA"));
        assert!(!is_data_uri(" data:audio/mp3;base64,AAAA"));
    }

    #[test]
    pub fn pairs_in_order() {
        let block = locate_block(
            r#"MIDI.Soundfont.f = {"A0":"data:audio/mp3;base64,AAAA", "C1":"data:audio/ogg;base64,AQID"}"#,
        )
        .unwrap();
        assert_eq!(
            block.note_pairs(),
            vec![
                NotePair {
                    name: "A0",
                    data_uri: "data:audio/mp3;base64,AAAA"
                },
                NotePair {
                    name: "C1",
                    data_uri: "data:audio/ogg;base64,AQID"
                },
            ]
        );
    }

    #[test]
    pub fn last_name_wins() {
        let block = locate_block(
            r#"MIDI.Soundfont.f = {"A0":"unrelated", "Bb1":"data:audio/mp3;base64,AAAA"}"#,
        )
        .unwrap();
        let pairs = block.note_pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, "Bb1");
    }

    #[test]
    pub fn name_is_consumed_once() {
        let block = locate_block(
            r#"MIDI.Soundfont.f = {"A0":"data:audio/mp3;base64,AAAA", "x":"data:audio/mp3;base64,AQID"}"#,
        )
        .unwrap();
        let pairs = block.note_pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].data_uri, "data:audio/mp3;base64,AAAA");
    }

    #[test]
    pub fn no_pairs() {
        let block = locate_block(r#"MIDI.Soundfont.f = {"A0":"A1"}"#).unwrap();
        assert!(block.note_pairs().is_empty());
        let block = locate_block("MIDI.Soundfont.f = {}").unwrap();
        assert!(block.note_pairs().is_empty());
    }
}
