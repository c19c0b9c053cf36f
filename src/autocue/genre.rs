//! Genre hint and BPM-based inference

use std::fmt;
use std::str::FromStr;

/// Genres the auto-cue heuristic knows placement rules for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Dnb,
    House,
    Techno,
    HipHop,
    Other,
}

impl Genre {
    /// Infer a genre from tempo alone.
    ///
    /// Tempo ranges overlap in reality; these are the ranges that matter
    /// for phrase and drop placement.
    pub fn infer_from_bpm(bpm: u32) -> Genre {
        match bpm {
            165..=180 => Genre::Dnb,
            120..=130 => Genre::House,
            138..=155 => Genre::Techno,
            85..=115 => Genre::HipHop,
            _ => Genre::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Genre::Dnb => "dnb",
            Genre::House => "house",
            Genre::Techno => "techno",
            Genre::HipHop => "hiphop",
            Genre::Other => "other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Either a fixed genre or a request to infer one from BPM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreHint {
    #[default]
    Auto,
    Fixed(Genre),
}

impl GenreHint {
    /// Resolve the hint against the track's tempo.
    pub fn resolve(&self, bpm: u32) -> Genre {
        match self {
            GenreHint::Auto => Genre::infer_from_bpm(bpm),
            GenreHint::Fixed(genre) => *genre,
        }
    }
}

impl FromStr for GenreHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(GenreHint::Auto),
            "dnb" => Ok(GenreHint::Fixed(Genre::Dnb)),
            "house" => Ok(GenreHint::Fixed(Genre::House)),
            "techno" => Ok(GenreHint::Fixed(Genre::Techno)),
            "hiphop" => Ok(GenreHint::Fixed(Genre::HipHop)),
            "other" => Ok(GenreHint::Fixed(Genre::Other)),
            other => Err(format!(
                "unknown genre '{}' (expected auto, dnb, house, techno, hiphop or other)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpm_ranges() {
        assert_eq!(Genre::infer_from_bpm(174), Genre::Dnb);
        assert_eq!(Genre::infer_from_bpm(165), Genre::Dnb);
        assert_eq!(Genre::infer_from_bpm(180), Genre::Dnb);
        assert_eq!(Genre::infer_from_bpm(128), Genre::House);
        assert_eq!(Genre::infer_from_bpm(140), Genre::Techno);
        assert_eq!(Genre::infer_from_bpm(90), Genre::HipHop);
        assert_eq!(Genre::infer_from_bpm(200), Genre::Other);
        assert_eq!(Genre::infer_from_bpm(0), Genre::Other);
        // Gap between house and techno
        assert_eq!(Genre::infer_from_bpm(134), Genre::Other);
    }

    #[test]
    fn test_hint_resolution() {
        assert_eq!(GenreHint::Auto.resolve(174), Genre::Dnb);
        assert_eq!(GenreHint::Fixed(Genre::House).resolve(174), Genre::House);
    }

    #[test]
    fn test_parse() {
        assert_eq!("auto".parse::<GenreHint>().unwrap(), GenreHint::Auto);
        assert_eq!("DnB".parse::<GenreHint>().unwrap(), GenreHint::Fixed(Genre::Dnb));
        assert!("polka".parse::<GenreHint>().is_err());
    }
}
