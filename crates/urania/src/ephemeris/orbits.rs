//! Mean orbital elements for the major planets.
//!
//! J2000 Keplerian elements with per-century secular rates, from the JPL
//! approximate-positions set. Stated validity window 1800-2050; outside it
//! the resolver keeps computing and flags the result instead.

use crate::ephemeris::bodies::Body;
use crate::temporal::julian::JD_J2000;

/// Validity window of the element tables, calendar years.
pub const VALIDITY_WINDOW_YEARS: (f64, f64) = (1800.0, 2050.0);

/// One planet's J2000 elements and their per-century rates.
/// Distances in au, angles in degrees.
#[derive(Debug, Clone, Copy)]
pub struct PlanetElements {
    pub semi_major_axis: f64,
    pub semi_major_axis_rate: f64,
    pub eccentricity: f64,
    pub eccentricity_rate: f64,
    pub inclination: f64,
    pub inclination_rate: f64,
    pub mean_longitude: f64,
    pub mean_longitude_rate: f64,
    pub perihelion_longitude: f64,
    pub perihelion_longitude_rate: f64,
    pub node_longitude: f64,
    pub node_longitude_rate: f64,
}

/// Elements propagated to a specific epoch.
#[derive(Debug, Clone, Copy)]
pub struct ElementsAtEpoch {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub perihelion_longitude: f64,
    pub node_longitude: f64,
}

impl PlanetElements {
    /// Propagate to `t` Julian centuries TT since J2000.
    pub fn at(&self, t: f64) -> ElementsAtEpoch {
        ElementsAtEpoch {
            semi_major_axis: self.semi_major_axis + self.semi_major_axis_rate * t,
            eccentricity: self.eccentricity + self.eccentricity_rate * t,
            inclination: self.inclination + self.inclination_rate * t,
            mean_longitude: self.mean_longitude + self.mean_longitude_rate * t,
            perihelion_longitude: self.perihelion_longitude + self.perihelion_longitude_rate * t,
            node_longitude: self.node_longitude + self.node_longitude_rate * t,
        }
    }
}

/// Earth-Moon barycenter; the geocentric reference every planet is reduced
/// against.
pub const EARTH_MOON_BARYCENTER: PlanetElements = PlanetElements {
    semi_major_axis: 1.000_002_61,
    semi_major_axis_rate: 0.000_005_62,
    eccentricity: 0.016_711_23,
    eccentricity_rate: -0.000_043_92,
    inclination: -0.000_015_31,
    inclination_rate: -0.012_946_68,
    mean_longitude: 100.464_571_66,
    mean_longitude_rate: 35_999.372_449_81,
    perihelion_longitude: 102.937_681_93,
    perihelion_longitude_rate: 0.323_273_64,
    node_longitude: 0.0,
    node_longitude_rate: 0.0,
};

pub const PLANETS: &[(Body, PlanetElements)] = &[
    (Body::Mercury, PlanetElements {
        semi_major_axis: 0.387_099_27,
        semi_major_axis_rate: 0.000_000_37,
        eccentricity: 0.205_635_93,
        eccentricity_rate: 0.000_019_06,
        inclination: 7.004_979_02,
        inclination_rate: -0.005_947_49,
        mean_longitude: 252.250_323_50,
        mean_longitude_rate: 149_472.674_111_75,
        perihelion_longitude: 77.457_796_28,
        perihelion_longitude_rate: 0.160_476_89,
        node_longitude: 48.330_765_93,
        node_longitude_rate: -0.125_340_81,
    }),
    (Body::Venus, PlanetElements {
        semi_major_axis: 0.723_335_66,
        semi_major_axis_rate: 0.000_003_90,
        eccentricity: 0.006_776_72,
        eccentricity_rate: -0.000_041_07,
        inclination: 3.394_676_05,
        inclination_rate: -0.000_788_90,
        mean_longitude: 181.979_099_50,
        mean_longitude_rate: 58_517.815_387_29,
        perihelion_longitude: 131.602_467_18,
        perihelion_longitude_rate: 0.002_683_29,
        node_longitude: 76.679_842_55,
        node_longitude_rate: -0.277_694_18,
    }),
    (Body::Mars, PlanetElements {
        semi_major_axis: 1.523_710_34,
        semi_major_axis_rate: 0.000_018_47,
        eccentricity: 0.093_394_10,
        eccentricity_rate: 0.000_078_82,
        inclination: 1.849_691_42,
        inclination_rate: -0.008_131_31,
        mean_longitude: -4.553_432_05,
        mean_longitude_rate: 19_140.302_684_99,
        perihelion_longitude: -23.943_629_59,
        perihelion_longitude_rate: 0.444_410_88,
        node_longitude: 49.559_538_91,
        node_longitude_rate: -0.292_573_43,
    }),
    (Body::Jupiter, PlanetElements {
        semi_major_axis: 5.202_887_00,
        semi_major_axis_rate: -0.000_116_07,
        eccentricity: 0.048_386_24,
        eccentricity_rate: -0.000_132_53,
        inclination: 1.304_396_95,
        inclination_rate: -0.001_837_14,
        mean_longitude: 34.396_440_51,
        mean_longitude_rate: 3_034.746_127_75,
        perihelion_longitude: 14.728_479_83,
        perihelion_longitude_rate: 0.212_526_68,
        node_longitude: 100.473_909_09,
        node_longitude_rate: 0.204_691_06,
    }),
    (Body::Saturn, PlanetElements {
        semi_major_axis: 9.536_675_94,
        semi_major_axis_rate: -0.001_250_60,
        eccentricity: 0.053_861_79,
        eccentricity_rate: -0.000_509_91,
        inclination: 2.485_991_87,
        inclination_rate: 0.001_936_09,
        mean_longitude: 49.954_244_23,
        mean_longitude_rate: 1_222.493_622_01,
        perihelion_longitude: 92.598_878_31,
        perihelion_longitude_rate: -0.418_972_16,
        node_longitude: 113.662_424_48,
        node_longitude_rate: -0.288_677_94,
    }),
    (Body::Uranus, PlanetElements {
        semi_major_axis: 19.189_164_64,
        semi_major_axis_rate: -0.001_961_76,
        eccentricity: 0.047_257_44,
        eccentricity_rate: -0.000_043_97,
        inclination: 0.772_637_83,
        inclination_rate: -0.002_429_39,
        mean_longitude: 313.238_104_51,
        mean_longitude_rate: 428.482_027_85,
        perihelion_longitude: 170.954_276_30,
        perihelion_longitude_rate: 0.408_052_81,
        node_longitude: 74.016_925_03,
        node_longitude_rate: 0.042_405_89,
    }),
    (Body::Neptune, PlanetElements {
        semi_major_axis: 30.069_922_76,
        semi_major_axis_rate: 0.000_262_91,
        eccentricity: 0.008_590_48,
        eccentricity_rate: 0.000_051_05,
        inclination: 1.770_043_47,
        inclination_rate: 0.000_353_72,
        mean_longitude: -55.120_029_69,
        mean_longitude_rate: 218.459_453_25,
        perihelion_longitude: 44.964_762_27,
        perihelion_longitude_rate: -0.322_414_64,
        node_longitude: 131.784_225_74,
        node_longitude_rate: -0.005_086_64,
    }),
    (Body::Pluto, PlanetElements {
        semi_major_axis: 39.482_116_75,
        semi_major_axis_rate: -0.000_315_96,
        eccentricity: 0.248_827_30,
        eccentricity_rate: 0.000_051_70,
        inclination: 17.140_012_06,
        inclination_rate: 0.000_048_18,
        mean_longitude: 238.929_038_33,
        mean_longitude_rate: 145.207_805_15,
        perihelion_longitude: 224.068_916_29,
        perihelion_longitude_rate: -0.040_629_42,
        node_longitude: 110.303_936_84,
        node_longitude_rate: -0.011_834_82,
    }),
];

/// Look up a planet's elements. Sun and Moon have no entry; their longitudes
/// come from dedicated series in the resolver.
pub fn elements_for(body: Body) -> Option<&'static PlanetElements> {
    PLANETS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, elements)| elements)
}

/// Whether a Julian day falls inside the tables' stated validity window.
pub fn within_validity_window(jd: f64) -> bool {
    let year = 2000.0 + (jd - JD_J2000) / 365.25;
    year >= VALIDITY_WINDOW_YEARS.0 && year <= VALIDITY_WINDOW_YEARS.1
}
