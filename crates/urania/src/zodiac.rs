//! Zodiac sign enumeration and metadata.
//!
//! The ecliptic is divided into twelve 30-degree segments starting at the
//! vernal point; a longitude's sign is `floor(longitude / 30)`.

use serde::{Deserialize, Serialize};

pub const SIGN_SPAN_DEGREES: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Sign {
    /// All twelve signs in zodiac order.
    pub const ORDER: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign containing the given ecliptic longitude.
    pub fn from_longitude(longitude: f64) -> Sign {
        let normalized = ((longitude % 360.0) + 360.0) % 360.0;
        let index = ((normalized / SIGN_SPAN_DEGREES) as usize) % 12;
        Sign::ORDER[index]
    }

    /// Zero-based position in the zodiac order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Ecliptic longitude where this sign begins.
    pub fn start_degree(self) -> f64 {
        self.index() as f64 * SIGN_SPAN_DEGREES
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
        }
    }

    /// Traditional ruling body of the sign.
    pub fn ruler(self) -> &'static str {
        match self {
            Sign::Aries | Sign::Scorpio => "mars",
            Sign::Taurus | Sign::Libra => "venus",
            Sign::Gemini | Sign::Virgo => "mercury",
            Sign::Cancer => "moon",
            Sign::Leo => "sun",
            Sign::Sagittarius | Sign::Pisces => "jupiter",
            Sign::Capricorn | Sign::Aquarius => "saturn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_longitude_boundaries() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(280.4), Sign::Capricorn);
        assert_eq!(Sign::from_longitude(359.999), Sign::Pisces);
        assert_eq!(Sign::from_longitude(360.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(-10.0), Sign::Pisces);
    }

    #[test]
    fn test_order_and_start_degrees() {
        for (i, sign) in Sign::ORDER.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(sign.start_degree(), i as f64 * 30.0);
        }
    }

    #[test]
    fn test_ruler_table() {
        assert_eq!(Sign::Leo.ruler(), "sun");
        assert_eq!(Sign::Cancer.ruler(), "moon");
        assert_eq!(Sign::Capricorn.ruler(), "saturn");
        assert_eq!(Sign::Capricorn.element(), Element::Earth);
    }
}
