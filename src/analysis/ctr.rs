//! Fixed position-to-CTR curve used for traffic modeling.

/// Assumed organic click-through rates for positions 1 through 20.
const CTR_BY_POSITION: [f64; 20] = [
    0.30, 0.15, 0.10, 0.06, 0.04, 0.03, 0.025, 0.02, 0.015, 0.01, 0.009, 0.008, 0.007, 0.006,
    0.005, 0.004, 0.003, 0.002, 0.001, 0.001,
];

/// CTR for a 1-based SERP position.
///
/// Positions outside 1-20 yield 0.0: deeper results contribute no modeled
/// traffic but are still retained in the detail export.
pub fn ctr_for_position(position: u32) -> f64 {
    match position {
        1..=20 => CTR_BY_POSITION[(position - 1) as usize],
        _ => 0.0,
    }
}
