//! Canned per-body interpretation texts.
//!
//! A static lookup, not text generation; the UI renders these verbatim next
//! to the chart.

use crate::api::ChartResponse;
use urania::Body;

const INTERPRETATIONS: &[(Body, &str)] = &[
    (Body::Sun, "Your sun sign represents your core identity."),
    (Body::Moon, "Your moon sign reflects your emotional self."),
    (Body::Mercury, "Your mercury sign governs communication."),
    (Body::Venus, "Your venus sign dictates love and relationships."),
    (Body::Mars, "Your mars sign drives your energy and ambition."),
    (Body::Jupiter, "Your jupiter sign shapes growth and fortune."),
    (Body::Saturn, "Your saturn sign teaches discipline and structure."),
    (Body::Uranus, "Your uranus sign sparks change and invention."),
    (Body::Neptune, "Your neptune sign colors dreams and intuition."),
    (Body::Pluto, "Your pluto sign marks transformation and power."),
];

pub fn interpretation_for(body: Body) -> Option<&'static str> {
    INTERPRETATIONS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, text)| *text)
}

/// Interpretation text for every body present in a response, response order.
pub fn interpretations_for(response: &ChartResponse) -> Vec<(Body, &'static str)> {
    response
        .positions
        .iter()
        .filter_map(|p| interpretation_for(p.body).map(|text| (p.body, text)))
        .collect()
}
