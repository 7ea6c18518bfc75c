use serde::{Deserialize, Serialize};

use crate::pricing::price_with_vat;

/// Size (in yards) that gets the "Most popular" badge.
pub const POPULAR_SIZE: u32 = 8;

/// A skip offered for hire at a location, as returned by the pricing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipOption {
    pub id: u64,
    pub size: u32,
    pub price_before_vat: f64,
    pub vat: f64,
    pub hire_period_days: u32,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl SkipOption {
    /// Tax-inclusive total in whole pounds.
    pub fn final_price(&self) -> i64 {
        price_with_vat(self.price_before_vat, self.vat)
    }

    pub fn is_popular(&self) -> bool {
        self.size == POPULAR_SIZE
    }

    pub fn title(&self) -> String {
        format!("{} Yard Skip", self.size)
    }
}

/// Serialized form of a skip with the computed total attached, used by `list --format json`.
#[derive(Debug, Serialize)]
pub struct PricedSkip<'a> {
    #[serde(flatten)]
    pub skip: &'a SkipOption,
    pub price_with_vat: i64,
}

impl<'a> From<&'a SkipOption> for PricedSkip<'a> {
    fn from(skip: &'a SkipOption) -> Self {
        Self {
            skip,
            price_with_vat: skip.final_price(),
        }
    }
}
