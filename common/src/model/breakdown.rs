//! # Emission Breakdown
//!
//! Per-category annual emission totals. The category order is fixed and is
//! the order every output surface (text and chart) renders in.

/// An emission source category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electricity,
    Travel,
    AirTravel,
    Lpg,
}

impl Category {
    /// Display order, shared by the textual breakdown and the chart x-axis.
    pub const ALL: [Category; 4] = [
        Category::Electricity,
        Category::Travel,
        Category::AirTravel,
        Category::Lpg,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Travel => "Travel",
            Category::AirTravel => "Air Travel",
            Category::Lpg => "LPG",
        }
    }
}

/// Annual kg CO₂ per category. Immutable once computed; a new interaction
/// produces a new breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionBreakdown {
    electricity: f64,
    travel: f64,
    air_travel: f64,
    lpg: f64,
}

impl EmissionBreakdown {
    pub fn new(electricity: f64, travel: f64, air_travel: f64, lpg: f64) -> Self {
        Self {
            electricity,
            travel,
            air_travel,
            lpg,
        }
    }

    pub fn value(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.electricity,
            Category::Travel => self.travel,
            Category::AirTravel => self.air_travel,
            Category::Lpg => self.lpg,
        }
    }

    /// Categories and values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .iter()
            .map(move |&category| (category, self.value(category)))
    }

    pub fn total(&self) -> f64 {
        self.electricity + self.travel + self.air_travel + self.lpg
    }

    /// Largest single category value; used to scale the chart's y-axis.
    pub fn max_value(&self) -> f64 {
        self.iter().map(|(_, v)| v).fold(0.0, f64::max)
    }
}
