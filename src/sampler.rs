use rand::Rng;

use crate::types::{Band, Bands};

/// Closed interval `(min, max)` a value is drawn from.
pub type Bounds = (f64, f64);

/// One interval per band, in `Band::ALL` order.
pub type BandBounds = [Bounds; 5];

pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

fn band_index(band: Band) -> usize {
    match band {
        Band::Sharp => 0,
        Band::Peak => 1,
        Band::Flat => 2,
        Band::Valley => 3,
        Band::DeepValley => 4,
    }
}

/// Bounded random draws used by every report generator.
pub struct Sampler<R> {
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn draw(&mut self, (min, max): Bounds, digits: i32) -> f64 {
        round_to(self.rng.gen_range(min..=max), digits)
    }

    /// Quantity or amount, 2 decimals.
    pub fn amount(&mut self, bounds: Bounds) -> f64 {
        self.draw(bounds, 2)
    }

    /// Amount multiplied by the period scale, 2 decimals.
    pub fn scaled(&mut self, bounds: Bounds, scale: f64) -> f64 {
        round2(self.amount(bounds) * scale)
    }

    /// Unit price multiplier, 4 decimals.
    pub fn price(&mut self, bounds: Bounds) -> f64 {
        self.draw(bounds, 4)
    }

    /// Unrounded multiplier.
    pub fn factor(&mut self, (min, max): Bounds) -> f64 {
        self.rng.gen_range(min..=max)
    }

    pub fn bands(&mut self, bounds: &BandBounds, scale: f64) -> Bands {
        Bands::from_fn(|band| self.scaled(bounds[band_index(band)], scale))
    }

    /// Each band of `quantities` times its own random price.
    pub fn priced(&mut self, quantities: &Bands, prices: &BandBounds) -> Bands {
        Bands::from_fn(|band| round2(quantities.get(band) * self.price(prices[band_index(band)])))
    }

    /// Each band of `base` times its own random factor.
    pub fn vary(&mut self, base: &Bands, factor: Bounds) -> Bands {
        Bands::from_fn(|band| round2(base.get(band) * self.factor(factor)))
    }
}
