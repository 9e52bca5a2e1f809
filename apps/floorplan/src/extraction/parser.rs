//! Parsers for room lists: LLM reply lines (`Name: WxH`) and comma-separated input.

use serde::Serialize;
use thiserror::Error;

use crate::layout::{RoomSize, RoomSpec};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineParseError {
    #[error("expected 'Name: WxH', no ':' found")]
    MissingSeparator,

    #[error("room name is empty")]
    EmptyName,

    #[error("dimensions must look like WxH, got '{0}'")]
    BadDimensions(String),

    #[error("dimensions must be positive, got '{0}'")]
    NonPositive(String),
}

/// A line dropped during parsing, kept so the caller can warn about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    pub line: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRooms {
    pub rooms: Vec<RoomSpec>,
    pub skipped: Vec<SkippedLine>,
}

impl ParsedRooms {
    fn skip(&mut self, line: &str, err: LineParseError) {
        self.skipped.push(SkippedLine {
            line: line.trim().to_string(),
            reason: err.to_string(),
        });
    }

    /// One user-facing warning per skipped line.
    pub fn warnings(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|s| format!("Could not draw '{}': {}", s.line, s.reason))
            .collect()
    }
}

/// Parses `"Living Room: 6x5"`, `"Kitchen: 4 x 3m"`, `"- Bedroom 1: 4X4 meters"`.
pub fn parse_room_line(line: &str) -> Result<RoomSpec, LineParseError> {
    let line = strip_list_marker(line.trim());
    let (name, dims) = line
        .split_once(':')
        .ok_or(LineParseError::MissingSeparator)?;

    let name = name.trim().trim_matches('*').trim();
    if name.is_empty() {
        return Err(LineParseError::EmptyName);
    }

    let size = parse_dimensions(dims)?;
    Ok(RoomSpec::sized(name, size.width, size.height))
}

/// Parses a multi-line reply. Blank lines are ignored; malformed lines are
/// recorded in `skipped` and do not stop the rest.
pub fn parse_room_lines(text: &str) -> ParsedRooms {
    let mut parsed = ParsedRooms::default();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match parse_room_line(line) {
            Ok(room) => parsed.rooms.push(room),
            Err(e) => parsed.skip(line, e),
        }
    }
    parsed
}

/// Parses `"living_room, bedroom, kitchen: 4x3"`. Entries with a `:` must
/// carry valid dimensions; bare entries are room names sized by the catalog.
pub fn parse_room_list(input: &str) -> ParsedRooms {
    let mut parsed = ParsedRooms::default();
    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        if entry.contains(':') {
            match parse_room_line(entry) {
                Ok(room) => parsed.rooms.push(room),
                Err(e) => parsed.skip(entry, e),
            }
        } else {
            parsed.rooms.push(RoomSpec::new(entry.to_lowercase()));
        }
    }
    parsed
}

fn parse_dimensions(raw: &str) -> Result<RoomSize, LineParseError> {
    let bad = || LineParseError::BadDimensions(raw.trim().to_string());

    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| if c == '×' { 'x' } else { c })
        .collect();
    let cleaned = ["meters", "metres", "m"]
        .iter()
        .find_map(|unit| cleaned.strip_suffix(unit))
        .unwrap_or(&cleaned);

    let (w, h) = cleaned.split_once('x').ok_or_else(bad)?;
    let w = w.strip_suffix('m').unwrap_or(w);
    let width: f64 = w.parse().map_err(|_| bad())?;
    let height: f64 = h.parse().map_err(|_| bad())?;

    let size = RoomSize::new(width, height);
    if !size.is_valid() {
        return Err(LineParseError::NonPositive(raw.trim().to_string()));
    }
    Ok(size)
}

/// Drops a leading `-`, `*`, `•` or `1.` / `1)` list marker.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start_matches(['-', '•']).trim_start();
    if let Some((head, rest)) = line.split_once(['.', ')']) {
        if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) {
            return rest.trim_start();
        }
    }
    // a lone '*' bullet, but not '**bold**' names
    match line.strip_prefix("* ") {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_line() {
        let room = parse_room_line("Living Room: 6x5").unwrap();
        assert_eq!(room, RoomSpec::sized("Living Room", 6.0, 5.0));
    }

    #[test]
    fn test_parse_meter_suffix_and_case() {
        assert_eq!(
            parse_room_line("Kitchen: 4X3m").unwrap(),
            RoomSpec::sized("Kitchen", 4.0, 3.0)
        );
        assert_eq!(
            parse_room_line("Bathroom: 2.5 x 2 meters").unwrap(),
            RoomSpec::sized("Bathroom", 2.5, 2.0)
        );
        assert_eq!(
            parse_room_line("Study: 3m x 3.5m").unwrap(),
            RoomSpec::sized("Study", 3.0, 3.5)
        );
    }

    #[test]
    fn test_parse_tolerates_list_markers() {
        assert_eq!(
            parse_room_line("- Bedroom 1: 4x4").unwrap().name,
            "Bedroom 1"
        );
        assert_eq!(parse_room_line("2. Garage: 6x6").unwrap().name, "Garage");
        assert_eq!(parse_room_line("* Study: 3x3").unwrap().name, "Study");
        assert_eq!(parse_room_line("**Kitchen**: 4x3").unwrap().name, "Kitchen");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!(
            parse_room_line("Here is your floor plan"),
            Err(LineParseError::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_rejects_bad_dimensions() {
        assert!(matches!(
            parse_room_line("Kitchen: large"),
            Err(LineParseError::BadDimensions(_))
        ));
        assert!(matches!(
            parse_room_line("Kitchen: 4x"),
            Err(LineParseError::BadDimensions(_))
        ));
        assert!(matches!(
            parse_room_line("Kitchen: 4x3x2"),
            Err(LineParseError::BadDimensions(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(matches!(
            parse_room_line("Closet: 0x2"),
            Err(LineParseError::NonPositive(_))
        ));
        assert!(matches!(
            parse_room_line("Closet: -1x2"),
            Err(LineParseError::NonPositive(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert_eq!(parse_room_line(": 3x3"), Err(LineParseError::EmptyName));
    }

    #[test]
    fn test_parse_lines_skips_bad_lines_keeps_rest() {
        let text = "Living Room: 6x5\n\nSure! Here you go\nKitchen: 4x3\nToilet: tiny\n";
        let parsed = parse_room_lines(text);
        assert_eq!(
            parsed.rooms,
            vec![
                RoomSpec::sized("Living Room", 6.0, 5.0),
                RoomSpec::sized("Kitchen", 4.0, 3.0)
            ]
        );
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.skipped[0].line, "Sure! Here you go");
        assert_eq!(parsed.warnings().len(), 2);
        assert!(parsed.warnings()[1].starts_with("Could not draw 'Toilet: tiny'"));
    }

    #[test]
    fn test_parse_list_mixes_bare_and_sized_entries() {
        let parsed = parse_room_list("Living_Room, bedroom , , kitchen: 4x3, garage: big");
        assert_eq!(
            parsed.rooms,
            vec![
                RoomSpec::new("living_room"),
                RoomSpec::new("bedroom"),
                RoomSpec::sized("kitchen", 4.0, 3.0),
            ]
        );
        assert_eq!(parsed.skipped.len(), 1);
    }

    #[test]
    fn test_parse_list_blank_is_empty() {
        let parsed = parse_room_list(" ,  , ");
        assert!(parsed.rooms.is_empty());
        assert!(parsed.skipped.is_empty());
    }
}
