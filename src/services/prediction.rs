//! Price-outlook provider for the goods screen.
//!
//! The only implementation today is a random-walk stub: it produces plausible
//! but non-authoritative numbers and is clearly labeled as such. Rendering
//! code depends on the trait alone, so a real engine can replace the stub
//! without touching any view.

use rand::seq::SliceRandom;
use rand::Rng;

/// Horizons the outlook always covers, in days.
pub const HORIZONS_DAYS: [u16; 3] = [30, 50, 60];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryRating {
    Good,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityRating {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    High,
}

impl DeliveryRating {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryRating::Good => "Good",
            DeliveryRating::Poor => "Poor",
        }
    }
}

impl QualityRating {
    pub fn label(&self) -> &'static str {
        match self {
            QualityRating::High => "High",
            QualityRating::Low => "Low",
        }
    }
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub horizon_days: u16,
    pub direction: Direction,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplierScorecard {
    pub on_time_delivery: DeliveryRating,
    pub quality: QualityRating,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outlook {
    pub points: Vec<PricePoint>,
    pub scorecard: SupplierScorecard,
}

pub trait PredictionProvider {
    /// Projects a price outlook over [`HORIZONS_DAYS`] from the current price.
    fn outlook(&self, current_price: f64) -> Outlook;
}

/// Placeholder provider: draws a direction and a percentage from a fixed
/// discrete set per horizon, and random categorical supplier labels.
/// Not a model; exists so the screen has something to render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalkProvider;

fn percentage_set(horizon_days: u16) -> &'static [f64] {
    match horizon_days {
        30 => &[0.03, 0.07],
        50 => &[0.02, 0.08, 0.09],
        _ => &[0.01, 0.04],
    }
}

impl PredictionProvider for RandomWalkProvider {
    fn outlook(&self, current_price: f64) -> Outlook {
        let mut rng = rand::thread_rng();

        let points = HORIZONS_DAYS
            .iter()
            .map(|&horizon_days| {
                let direction = if rng.gen_bool(0.5) { Direction::Up } else { Direction::Down };
                let pct = *percentage_set(horizon_days)
                    .choose(&mut rng)
                    .unwrap_or(&0.0);
                let price = match direction {
                    Direction::Up => current_price * (1.0 + pct),
                    Direction::Down => current_price * (1.0 - pct),
                };
                PricePoint { horizon_days, direction, price }
            })
            .collect();

        let scorecard = SupplierScorecard {
            on_time_delivery: if rng.gen_bool(0.7) {
                DeliveryRating::Good
            } else {
                DeliveryRating::Poor
            },
            quality: if rng.gen_bool(0.8) { QualityRating::High } else { QualityRating::Low },
            risk: if rng.gen_bool(0.6) { RiskLevel::Low } else { RiskLevel::High },
        };

        Outlook { points, scorecard }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlook_covers_every_horizon_in_order() {
        let outlook = RandomWalkProvider.outlook(100.0);
        let horizons: Vec<u16> = outlook.points.iter().map(|p| p.horizon_days).collect();
        assert_eq!(horizons, HORIZONS_DAYS);
    }

    #[test]
    fn prices_come_from_the_fixed_percentage_sets() {
        for _ in 0..50 {
            let outlook = RandomWalkProvider.outlook(100.0);
            for point in &outlook.points {
                let pcts = percentage_set(point.horizon_days);
                let matches_a_step = pcts.iter().any(|pct| {
                    let up = 100.0 * (1.0 + pct);
                    let down = 100.0 * (1.0 - pct);
                    (point.price - up).abs() < 1e-9 || (point.price - down).abs() < 1e-9
                });
                assert!(matches_a_step, "price {} not on any step", point.price);
            }
        }
    }

    #[test]
    fn direction_agrees_with_the_price_move() {
        for _ in 0..50 {
            let outlook = RandomWalkProvider.outlook(100.0);
            for point in &outlook.points {
                match point.direction {
                    Direction::Up => assert!(point.price >= 100.0),
                    Direction::Down => assert!(point.price <= 100.0),
                }
            }
        }
    }
}
