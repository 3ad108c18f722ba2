//! Business observations and the datasets built from them
//!
//! A `Dataset` is an ordered, owned collection of `Observation` rows. Every
//! scenario transformation produces a fresh `Dataset`; the input is never
//! touched, so callers can keep comparing against their original copy.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One row of sales data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: Date,
    pub region: String,
    pub product_category: String,
    pub revenue: f64,
    pub costs: f64,
    /// Conventionally `revenue - costs`. May arrive independently from upstream
    /// loading but is always recomputed by transformers.
    pub profit: f64,
    /// Fractional after elasticity or volume scaling, hence `f64`
    pub units_sold: f64,
    pub customer_satisfaction: f64,
}

impl Observation {
    /// Restore `profit = revenue - costs`
    pub fn recompute_profit(&mut self) {
        self.profit = self.revenue - self.costs;
    }
}

/// Margin as `profit / revenue`, defined as 0 when revenue is not positive
#[inline]
pub fn margin(profit: f64, revenue: f64) -> f64 {
    if revenue > 0.0 { profit / revenue } else { 0.0 }
}

/// Aggregate sums over a set of observations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub units_sold: f64,
    pub observations: usize,
}

impl Totals {
    fn add(&mut self, obs: &Observation) {
        self.revenue += obs.revenue;
        self.costs += obs.costs;
        self.profit += obs.profit;
        self.units_sold += obs.units_sold;
        self.observations += 1;
    }

    /// Aggregate margin (0 when revenue <= 0)
    pub fn margin(&self) -> f64 {
        margin(self.profit, self.revenue)
    }

    /// Profit implied by revenue and costs, ignoring any supplied profit column
    pub fn actual_profit(&self) -> f64 {
        self.revenue - self.costs
    }
}

/// Totals for a single region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotals {
    pub region: String,
    pub totals: Totals,
}

/// Ordered collection of observations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn into_observations(self) -> Vec<Observation> {
        self.observations
    }

    /// Build a modified copy by applying `f` to every row, then recomputing profit.
    ///
    /// This is the only way transformers produce new datasets, which keeps the
    /// `profit = revenue - costs` invariant in one place.
    pub fn map_rows<F>(&self, mut f: F) -> Dataset
    where
        F: FnMut(&mut Observation),
    {
        let observations = self
            .observations
            .iter()
            .map(|obs| {
                let mut obs = obs.clone();
                f(&mut obs);
                obs.recompute_profit();
                obs
            })
            .collect();
        Dataset { observations }
    }

    pub fn total_revenue(&self) -> f64 {
        self.observations.iter().map(|o| o.revenue).sum()
    }

    pub fn total_costs(&self) -> f64 {
        self.observations.iter().map(|o| o.costs).sum()
    }

    pub fn total_profit(&self) -> f64 {
        self.observations.iter().map(|o| o.profit).sum()
    }

    /// Aggregate sums over every observation
    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for obs in &self.observations {
            totals.add(obs);
        }
        totals
    }

    /// Per-region totals, ordered by first appearance of each region
    pub fn totals_by_region(&self) -> Vec<RegionTotals> {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut out: Vec<RegionTotals> = Vec::new();

        for obs in &self.observations {
            let slot = *index.entry(obs.region.as_str()).or_insert_with(|| {
                out.push(RegionTotals {
                    region: obs.region.clone(),
                    totals: Totals::default(),
                });
                out.len() - 1
            });
            out[slot].totals.add(obs);
        }

        out
    }
}

impl From<Vec<Observation>> for Dataset {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
