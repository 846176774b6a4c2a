//! Voice transcript interpretation.
//!
//! Speech recognition itself lives outside the core; it hands over plain
//! transcript strings. This module turns a transcript into a discrete
//! [`Command`] by keyword spotting. Mode words win over color words, so
//! "golden heart" forms a heart rather than turning gold.

use crate::shape::Mode;
use glam::Vec3;

/// A discrete command decoded from a voice transcript.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Switch the active formation.
    SetMode(Mode),
    /// Set the base/target display color.
    SetColor(Vec3),
}

/// Keyword-spot a transcript. Returns `None` when nothing matches.
///
/// Matching is case-insensitive and substring-based, mirroring how loose
/// recognizer output tends to be ("a heart please" still works).
pub fn parse_transcript(transcript: &str) -> Option<Command> {
    let text = transcript.to_lowercase();
    let has = |keyword: &str| text.contains(keyword);

    if has("heart") || has("love") {
        return Some(Command::SetMode(Mode::Heart));
    }
    if has("galaxy") || has("spiral") {
        return Some(Command::SetMode(Mode::Galaxy));
    }
    if has("solar") || has("system") || has("planet") {
        return Some(Command::SetMode(Mode::Solar));
    }
    if has("dna") || has("genetic") {
        return Some(Command::SetMode(Mode::Dna));
    }

    if has("red") || has("crimson") {
        return Some(Command::SetColor(Vec3::new(1.0, 0.0, 0.0)));
    }
    if has("blue") || has("cyan") || has("azure") {
        return Some(Command::SetColor(Vec3::new(0.0, 1.0, 1.0)));
    }
    if has("green") || has("emerald") {
        return Some(Command::SetColor(Vec3::new(0.0, 1.0, 0.0)));
    }
    if has("yellow") || has("gold") {
        return Some(Command::SetColor(Vec3::new(1.0, 1.0, 0.0)));
    }
    if has("white") || has("bright") {
        return Some(Command::SetColor(Vec3::ONE));
    }
    if has("purple") || has("violet") {
        return Some(Command::SetColor(Vec3::new(0.6, 0.0, 1.0)));
    }
    if has("orange") {
        return Some(Command::SetColor(Vec3::new(1.0, 0.533, 0.0)));
    }
    if has("pink") {
        return Some(Command::SetColor(Vec3::new(1.0, 0.0, 0.533)));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keywords() {
        assert_eq!(
            parse_transcript("show me a heart"),
            Some(Command::SetMode(Mode::Heart))
        );
        assert_eq!(
            parse_transcript("SPIRAL"),
            Some(Command::SetMode(Mode::Galaxy))
        );
        assert_eq!(
            parse_transcript("the solar system"),
            Some(Command::SetMode(Mode::Solar))
        );
        assert_eq!(
            parse_transcript("genetic code"),
            Some(Command::SetMode(Mode::Dna))
        );
    }

    #[test]
    fn test_color_keywords() {
        assert_eq!(
            parse_transcript("make it crimson"),
            Some(Command::SetColor(Vec3::new(1.0, 0.0, 0.0)))
        );
        assert_eq!(
            parse_transcript("azure"),
            Some(Command::SetColor(Vec3::new(0.0, 1.0, 1.0)))
        );
        assert_eq!(parse_transcript("bright"), Some(Command::SetColor(Vec3::ONE)));
    }

    #[test]
    fn test_mode_wins_over_color() {
        assert_eq!(
            parse_transcript("golden heart"),
            Some(Command::SetMode(Mode::Heart))
        );
    }

    #[test]
    fn test_unrecognized_is_none() {
        assert_eq!(parse_transcript("hello there"), None);
        assert_eq!(parse_transcript(""), None);
    }
}
