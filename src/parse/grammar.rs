//! Chord body grammar
//!
//! A chord token is a parenthesised chord body embedded in lyric text:
//!
//! ```text
//! token   = "(" body ")"
//! body    = root accidental? quality? digits* ("/" root accidental?)?
//! root    = "A" .. "G"
//! quality = "m" | "maj" | "min" | "dim" | "aug" | "sus" | "add"
//! ```
//!
//! Quality and extension digits are independently optional, and the slash
//! bass is a full second root + accidental pair. The alternation order of the
//! quality group is significant: `m` is tried first and the regex engine
//! falls back to the longer spellings when the rest of the body fails.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Chord body pattern, unanchored (no parentheses)
pub const CHORD_BODY_PATTERN: &str =
    r"[A-G][#b]?(?:m|maj|min|dim|aug|sus|add)?\d*(?:/[A-G][#b]?)?";

/// Full chord token pattern as it appears in a document
pub const CHORD_TOKEN_PATTERN: &str =
    r"\(([A-G][#b]?(?:m|maj|min|dim|aug|sus|add)?\d*(?:/[A-G][#b]?)?)\)";

pub(crate) static CHORD_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CHORD_TOKEN_PATTERN).expect("chord token pattern compiles"));

static CHORD_BODY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\A(?P<root>[A-G])(?P<acc>[#b])?(?P<quality>m|maj|min|dim|aug|sus|add)?(?P<ext>\d*)(?:/(?P<bass>[A-G])(?P<bass_acc>[#b])?)?\z",
    )
    .expect("chord body pattern compiles")
});

/// Check that `body` is a complete chord body
///
/// The whole string must match; a valid prefix followed by anything else
/// (`"Cma7x"`, `"C "`, `"C\n"`) is rejected.
pub fn validate(body: &str) -> bool {
    CHORD_BODY_RE.is_match(body)
}

/// Wrap a chord body in parentheses to form its token
pub fn token_for(body: &str) -> String {
    format!("({})", body)
}

// ============================================================================
// Structural view of a chord body
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "#" => Some(Accidental::Sharp),
            "b" => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A note letter with optional accidental (root or bass)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub letter: char,
    pub accidental: Option<Accidental>,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(acc) = self.accidental {
            f.write_str(acc.as_str())?;
        }
        Ok(())
    }
}

/// Chord quality, kept in the spelling the author used
///
/// `m` and `min` are both minor but stay distinct so the body text
/// round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    M,
    Maj,
    Min,
    Dim,
    Aug,
    Sus,
    Add,
}

impl Quality {
    fn from_spelling(s: &str) -> Option<Self> {
        match s {
            "m" => Some(Quality::M),
            "maj" => Some(Quality::Maj),
            "min" => Some(Quality::Min),
            "dim" => Some(Quality::Dim),
            "aug" => Some(Quality::Aug),
            "sus" => Some(Quality::Sus),
            "add" => Some(Quality::Add),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::M => "m",
            Quality::Maj => "maj",
            Quality::Min => "min",
            Quality::Dim => "dim",
            Quality::Aug => "aug",
            Quality::Sus => "sus",
            Quality::Add => "add",
        }
    }
}

/// Parsed chord body
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordBody {
    pub root: Note,
    pub quality: Option<Quality>,
    /// Extension digits as written (`"7"`, `"13"`), `None` when absent
    pub extension: Option<String>,
    pub bass: Option<Note>,
}

impl ChordBody {
    /// Parse a chord body, returning `None` unless the whole input matches
    pub fn parse(body: &str) -> Option<Self> {
        let caps = CHORD_BODY_RE.captures(body)?;

        let root = Note {
            letter: caps.name("root")?.as_str().chars().next()?,
            accidental: caps.name("acc").and_then(|m| Accidental::from_symbol(m.as_str())),
        };
        let quality = caps.name("quality").and_then(|m| Quality::from_spelling(m.as_str()));
        let extension = caps
            .name("ext")
            .map(|m| m.as_str())
            .filter(|digits| !digits.is_empty())
            .map(str::to_string);
        let bass = match caps.name("bass") {
            Some(m) => Some(Note {
                letter: m.as_str().chars().next()?,
                accidental: caps.name("bass_acc").and_then(|a| Accidental::from_symbol(a.as_str())),
            }),
            None => None,
        };

        Some(ChordBody {
            root,
            quality,
            extension,
            bass,
        })
    }

    pub fn is_slash_chord(&self) -> bool {
        self.bass.is_some()
    }
}

impl fmt::Display for ChordBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if let Some(quality) = self.quality {
            f.write_str(quality.as_str())?;
        }
        if let Some(ext) = &self.extension {
            f.write_str(ext)?;
        }
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}
