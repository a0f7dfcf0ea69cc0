//! Configurable test double for [`VehicleService`]
//!
//! Used to drive the HTTP handlers without a store. Unconfigured operations
//! fail with an opaque store error, which the handlers render as a 500.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::errors::{ServiceError, ServiceResult};
use super::vehicle::VehicleService;
use crate::store::StoreError;
use crate::vehicle::{SearchQuery, VehicleMap};

type ColorYearFn = Box<dyn Fn(&str, i32) -> ServiceResult<VehicleMap> + Send + Sync>;
type BrandRangeFn = Box<dyn Fn(&str, i32, i32) -> ServiceResult<VehicleMap> + Send + Sync>;
type SpeedFn = Box<dyn Fn(&str) -> ServiceResult<f64> + Send + Sync>;
type CapacityFn = Box<dyn Fn(&str) -> ServiceResult<i32> + Send + Sync>;
type SearchFn = Box<dyn Fn(SearchQuery, bool) -> ServiceResult<VehicleMap> + Send + Sync>;

/// Per-operation call counters
#[derive(Debug, Default)]
pub struct ServiceSpy {
    find_by_color_and_year: AtomicUsize,
    find_by_brand_and_year_range: AtomicUsize,
    average_max_speed_by_brand: AtomicUsize,
    average_capacity_by_brand: AtomicUsize,
    search_by_weight_range: AtomicUsize,
}

impl ServiceSpy {
    pub fn find_by_color_and_year(&self) -> usize {
        self.find_by_color_and_year.load(Ordering::SeqCst)
    }

    pub fn find_by_brand_and_year_range(&self) -> usize {
        self.find_by_brand_and_year_range.load(Ordering::SeqCst)
    }

    pub fn average_max_speed_by_brand(&self) -> usize {
        self.average_max_speed_by_brand.load(Ordering::SeqCst)
    }

    pub fn average_capacity_by_brand(&self) -> usize {
        self.average_capacity_by_brand.load(Ordering::SeqCst)
    }

    pub fn search_by_weight_range(&self) -> usize {
        self.search_by_weight_range.load(Ordering::SeqCst)
    }
}

fn unconfigured(op: &str) -> ServiceError {
    ServiceError::Store(StoreError::internal(format!("mock: {} not configured", op)))
}

/// Service double with swappable behaviour
#[derive(Default)]
pub struct VehicleServiceMock {
    color_year: Option<ColorYearFn>,
    brand_range: Option<BrandRangeFn>,
    speed: Option<SpeedFn>,
    capacity: Option<CapacityFn>,
    search: Option<SearchFn>,
    pub spy: ServiceSpy,
}

impl VehicleServiceMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_find_by_color_and_year<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, i32) -> ServiceResult<VehicleMap> + Send + Sync + 'static,
    {
        self.color_year = Some(Box::new(f));
        self
    }

    pub fn on_find_by_brand_and_year_range<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, i32, i32) -> ServiceResult<VehicleMap> + Send + Sync + 'static,
    {
        self.brand_range = Some(Box::new(f));
        self
    }

    pub fn on_average_max_speed_by_brand<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> ServiceResult<f64> + Send + Sync + 'static,
    {
        self.speed = Some(Box::new(f));
        self
    }

    pub fn on_average_capacity_by_brand<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> ServiceResult<i32> + Send + Sync + 'static,
    {
        self.capacity = Some(Box::new(f));
        self
    }

    pub fn on_search_by_weight_range<F>(mut self, f: F) -> Self
    where
        F: Fn(SearchQuery, bool) -> ServiceResult<VehicleMap> + Send + Sync + 'static,
    {
        self.search = Some(Box::new(f));
        self
    }
}

impl VehicleService for VehicleServiceMock {
    fn find_by_color_and_year(
        &self,
        color: &str,
        fabrication_year: i32,
    ) -> ServiceResult<VehicleMap> {
        self.spy.find_by_color_and_year.fetch_add(1, Ordering::SeqCst);
        match &self.color_year {
            Some(f) => f(color, fabrication_year),
            None => Err(unconfigured("find_by_color_and_year")),
        }
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> ServiceResult<VehicleMap> {
        self.spy
            .find_by_brand_and_year_range
            .fetch_add(1, Ordering::SeqCst);
        match &self.brand_range {
            Some(f) => f(brand, start_year, end_year),
            None => Err(unconfigured("find_by_brand_and_year_range")),
        }
    }

    fn average_max_speed_by_brand(&self, brand: &str) -> ServiceResult<f64> {
        self.spy
            .average_max_speed_by_brand
            .fetch_add(1, Ordering::SeqCst);
        match &self.speed {
            Some(f) => f(brand),
            None => Err(unconfigured("average_max_speed_by_brand")),
        }
    }

    fn average_capacity_by_brand(&self, brand: &str) -> ServiceResult<i32> {
        self.spy
            .average_capacity_by_brand
            .fetch_add(1, Ordering::SeqCst);
        match &self.capacity {
            Some(f) => f(brand),
            None => Err(unconfigured("average_capacity_by_brand")),
        }
    }

    fn search_by_weight_range(
        &self,
        query: SearchQuery,
        has_query: bool,
    ) -> ServiceResult<VehicleMap> {
        self.spy.search_by_weight_range.fetch_add(1, Ordering::SeqCst);
        match &self.search {
            Some(f) => f(query, has_query),
            None => Err(unconfigured("search_by_weight_range")),
        }
    }
}
