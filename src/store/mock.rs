//! Configurable test double for [`VehicleRepository`]
//!
//! Each operation delegates to an optional closure and bumps a call counter
//! in [`RepositorySpy`]. An operation without a configured closure fails with
//! [`StoreError::Internal`].

use std::sync::atomic::{AtomicUsize, Ordering};

use super::errors::{StoreError, StoreResult};
use super::repository::VehicleRepository;
use crate::vehicle::VehicleMap;

type FindAllFn = Box<dyn Fn() -> StoreResult<VehicleMap> + Send + Sync>;
type FindByColorAndYearFn = Box<dyn Fn(&str, i32) -> StoreResult<VehicleMap> + Send + Sync>;
type FindByBrandAndYearRangeFn =
    Box<dyn Fn(&str, i32, i32) -> StoreResult<VehicleMap> + Send + Sync>;
type FindByBrandFn = Box<dyn Fn(&str) -> StoreResult<VehicleMap> + Send + Sync>;
type FindByWeightRangeFn = Box<dyn Fn(f64, f64) -> StoreResult<VehicleMap> + Send + Sync>;

/// Per-operation call counters
#[derive(Debug, Default)]
pub struct RepositorySpy {
    find_all: AtomicUsize,
    find_by_color_and_year: AtomicUsize,
    find_by_brand_and_year_range: AtomicUsize,
    find_by_brand: AtomicUsize,
    find_by_weight_range: AtomicUsize,
}

impl RepositorySpy {
    pub fn find_all(&self) -> usize {
        self.find_all.load(Ordering::SeqCst)
    }

    pub fn find_by_color_and_year(&self) -> usize {
        self.find_by_color_and_year.load(Ordering::SeqCst)
    }

    pub fn find_by_brand_and_year_range(&self) -> usize {
        self.find_by_brand_and_year_range.load(Ordering::SeqCst)
    }

    pub fn find_by_brand(&self) -> usize {
        self.find_by_brand.load(Ordering::SeqCst)
    }

    pub fn find_by_weight_range(&self) -> usize {
        self.find_by_weight_range.load(Ordering::SeqCst)
    }
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

fn unconfigured(op: &str) -> StoreError {
    StoreError::internal(format!("mock: {} not configured", op))
}

/// Repository double with swappable behaviour
#[derive(Default)]
pub struct VehicleRepositoryMock {
    find_all_fn: Option<FindAllFn>,
    find_by_color_and_year_fn: Option<FindByColorAndYearFn>,
    find_by_brand_and_year_range_fn: Option<FindByBrandAndYearRangeFn>,
    find_by_brand_fn: Option<FindByBrandFn>,
    find_by_weight_range_fn: Option<FindByWeightRangeFn>,
    pub spy: RepositorySpy,
}

impl VehicleRepositoryMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_find_all<F>(mut self, f: F) -> Self
    where
        F: Fn() -> StoreResult<VehicleMap> + Send + Sync + 'static,
    {
        self.find_all_fn = Some(Box::new(f));
        self
    }

    pub fn on_find_by_color_and_year<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, i32) -> StoreResult<VehicleMap> + Send + Sync + 'static,
    {
        self.find_by_color_and_year_fn = Some(Box::new(f));
        self
    }

    pub fn on_find_by_brand_and_year_range<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, i32, i32) -> StoreResult<VehicleMap> + Send + Sync + 'static,
    {
        self.find_by_brand_and_year_range_fn = Some(Box::new(f));
        self
    }

    pub fn on_find_by_brand<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> StoreResult<VehicleMap> + Send + Sync + 'static,
    {
        self.find_by_brand_fn = Some(Box::new(f));
        self
    }

    pub fn on_find_by_weight_range<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64) -> StoreResult<VehicleMap> + Send + Sync + 'static,
    {
        self.find_by_weight_range_fn = Some(Box::new(f));
        self
    }
}

impl VehicleRepository for VehicleRepositoryMock {
    fn find_all(&self) -> StoreResult<VehicleMap> {
        bump(&self.spy.find_all);
        match &self.find_all_fn {
            Some(f) => f(),
            None => Err(unconfigured("find_all")),
        }
    }

    fn find_by_color_and_year(
        &self,
        color: &str,
        fabrication_year: i32,
    ) -> StoreResult<VehicleMap> {
        bump(&self.spy.find_by_color_and_year);
        match &self.find_by_color_and_year_fn {
            Some(f) => f(color, fabrication_year),
            None => Err(unconfigured("find_by_color_and_year")),
        }
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> StoreResult<VehicleMap> {
        bump(&self.spy.find_by_brand_and_year_range);
        match &self.find_by_brand_and_year_range_fn {
            Some(f) => f(brand, start_year, end_year),
            None => Err(unconfigured("find_by_brand_and_year_range")),
        }
    }

    fn find_by_brand(&self, brand: &str) -> StoreResult<VehicleMap> {
        bump(&self.spy.find_by_brand);
        match &self.find_by_brand_fn {
            Some(f) => f(brand),
            None => Err(unconfigured("find_by_brand")),
        }
    }

    fn find_by_weight_range(&self, from_weight: f64, to_weight: f64) -> StoreResult<VehicleMap> {
        bump(&self.spy.find_by_weight_range);
        match &self.find_by_weight_range_fn {
            Some(f) => f(from_weight, to_weight),
            None => Err(unconfigured("find_by_weight_range")),
        }
    }
}
