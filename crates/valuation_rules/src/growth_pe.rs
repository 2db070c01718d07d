/// A growth rate (percent per year) and the P/E it justifies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPePoint {
    pub growth_rate: f64,
    pub pe: f64,
}

/// Justified P/E by expected annual EPS growth, 0% to 50%.
///
/// Generated from Graham's revised formula `8.5 + 2g`. Both columns are
/// strictly increasing.
#[rustfmt::skip]
pub static GROWTH_RATE_PE_TABLE: [GrowthPePoint; 51] = [
    GrowthPePoint { growth_rate: 0.0, pe: 8.5 },
    GrowthPePoint { growth_rate: 1.0, pe: 10.5 },
    GrowthPePoint { growth_rate: 2.0, pe: 12.5 },
    GrowthPePoint { growth_rate: 3.0, pe: 14.5 },
    GrowthPePoint { growth_rate: 4.0, pe: 16.5 },
    GrowthPePoint { growth_rate: 5.0, pe: 18.5 },
    GrowthPePoint { growth_rate: 6.0, pe: 20.5 },
    GrowthPePoint { growth_rate: 7.0, pe: 22.5 },
    GrowthPePoint { growth_rate: 8.0, pe: 24.5 },
    GrowthPePoint { growth_rate: 9.0, pe: 26.5 },
    GrowthPePoint { growth_rate: 10.0, pe: 28.5 },
    GrowthPePoint { growth_rate: 11.0, pe: 30.5 },
    GrowthPePoint { growth_rate: 12.0, pe: 32.5 },
    GrowthPePoint { growth_rate: 13.0, pe: 34.5 },
    GrowthPePoint { growth_rate: 14.0, pe: 36.5 },
    GrowthPePoint { growth_rate: 15.0, pe: 38.5 },
    GrowthPePoint { growth_rate: 16.0, pe: 40.5 },
    GrowthPePoint { growth_rate: 17.0, pe: 42.5 },
    GrowthPePoint { growth_rate: 18.0, pe: 44.5 },
    GrowthPePoint { growth_rate: 19.0, pe: 46.5 },
    GrowthPePoint { growth_rate: 20.0, pe: 48.5 },
    GrowthPePoint { growth_rate: 21.0, pe: 50.5 },
    GrowthPePoint { growth_rate: 22.0, pe: 52.5 },
    GrowthPePoint { growth_rate: 23.0, pe: 54.5 },
    GrowthPePoint { growth_rate: 24.0, pe: 56.5 },
    GrowthPePoint { growth_rate: 25.0, pe: 58.5 },
    GrowthPePoint { growth_rate: 26.0, pe: 60.5 },
    GrowthPePoint { growth_rate: 27.0, pe: 62.5 },
    GrowthPePoint { growth_rate: 28.0, pe: 64.5 },
    GrowthPePoint { growth_rate: 29.0, pe: 66.5 },
    GrowthPePoint { growth_rate: 30.0, pe: 68.5 },
    GrowthPePoint { growth_rate: 31.0, pe: 70.5 },
    GrowthPePoint { growth_rate: 32.0, pe: 72.5 },
    GrowthPePoint { growth_rate: 33.0, pe: 74.5 },
    GrowthPePoint { growth_rate: 34.0, pe: 76.5 },
    GrowthPePoint { growth_rate: 35.0, pe: 78.5 },
    GrowthPePoint { growth_rate: 36.0, pe: 80.5 },
    GrowthPePoint { growth_rate: 37.0, pe: 82.5 },
    GrowthPePoint { growth_rate: 38.0, pe: 84.5 },
    GrowthPePoint { growth_rate: 39.0, pe: 86.5 },
    GrowthPePoint { growth_rate: 40.0, pe: 88.5 },
    GrowthPePoint { growth_rate: 41.0, pe: 90.5 },
    GrowthPePoint { growth_rate: 42.0, pe: 92.5 },
    GrowthPePoint { growth_rate: 43.0, pe: 94.5 },
    GrowthPePoint { growth_rate: 44.0, pe: 96.5 },
    GrowthPePoint { growth_rate: 45.0, pe: 98.5 },
    GrowthPePoint { growth_rate: 46.0, pe: 100.5 },
    GrowthPePoint { growth_rate: 47.0, pe: 102.5 },
    GrowthPePoint { growth_rate: 48.0, pe: 104.5 },
    GrowthPePoint { growth_rate: 49.0, pe: 106.5 },
    GrowthPePoint { growth_rate: 50.0, pe: 108.5 },
];

/// Justified P/E for a growth rate, taken from the nearest table entry.
///
/// Rates outside 0%..=50% clamp to the boundary entries.
pub fn pe_for_growth_rate(rate: f64) -> f64 {
    nearest(rate, |point| point.growth_rate).pe
}

/// Growth rate whose justified P/E is closest to `pe`.
pub fn growth_rate_for_pe(pe: f64) -> f64 {
    nearest(pe, |point| point.pe).growth_rate
}

pub fn justified_pe_tooltip(rate: f64) -> String {
    format!("Justified P/E: {}", pe_for_growth_rate(rate))
}

pub fn implied_growth_tooltip(pe: f64) -> String {
    format!("Implied growth: {}%", growth_rate_for_pe(pe))
}

// ties go to the later entry
fn nearest(target: f64, key: impl Fn(&GrowthPePoint) -> f64) -> &'static GrowthPePoint {
    let first = &GROWTH_RATE_PE_TABLE[0];
    let last = &GROWTH_RATE_PE_TABLE[GROWTH_RATE_PE_TABLE.len() - 1];
    if target.is_nan() {
        return first;
    }
    let target = target.clamp(key(first), key(last));

    let mut best = first;
    let mut best_distance = (key(first) - target).abs();
    for point in &GROWTH_RATE_PE_TABLE[1..] {
        let distance = (key(point) - target).abs();
        if distance <= best_distance {
            best = point;
            best_distance = distance;
        }
    }
    best
}
