//! Query Invariant Tests
//!
//! Filter and aggregate behaviour of the in-memory store and the default
//! service:
//! - Filters return exactly the reference-scan subset
//! - Range bounds are inclusive on both ends
//! - Zero matches is an empty map, never an error
//! - Averages over zero records fail with the no-data error
//! - Repeated queries are idempotent

use std::collections::HashMap;
use std::sync::Arc;

use vehicledb::service::{DefaultVehicleService, ServiceError, VehicleService};
use vehicledb::store::mock::VehicleRepositoryMock;
use vehicledb::store::{VehicleMapStore, VehicleRepository};
use vehicledb::vehicle::{SearchQuery, Vehicle, VehicleAttributes, VehicleMap};

// =============================================================================
// Helper Functions
// =============================================================================

fn vehicle(id: i64, brand: &str, color: &str, year: i32, weight: f64) -> Vehicle {
    Vehicle::new(
        id,
        VehicleAttributes {
            brand: brand.to_string(),
            color: color.to_string(),
            fabrication_year: year,
            weight,
            max_speed: 100.0 + id as f64,
            capacity: (id % 7) as i32 + 1,
            ..Default::default()
        },
    )
}

fn fleet() -> HashMap<i64, Vehicle> {
    let brands = ["Ford", "Fiat", "Toyota"];
    let colors = ["Red", "Blue", "White", "red"];

    (1..=60)
        .map(|id| {
            let brand = brands[(id as usize) % brands.len()];
            let color = colors[(id as usize) % colors.len()];
            let year = 2000 + (id % 10) as i32;
            let weight = 500.0 + (id % 12) as f64 * 100.0;
            (id, vehicle(id, brand, color, year, weight))
        })
        .collect()
}

fn setup_store() -> (HashMap<i64, Vehicle>, VehicleMapStore) {
    let db = fleet();
    (db.clone(), VehicleMapStore::new(db))
}

fn reference_scan<F: Fn(&Vehicle) -> bool>(db: &HashMap<i64, Vehicle>, f: F) -> VehicleMap {
    db.iter()
        .filter(|(_, v)| f(v))
        .map(|(k, v)| (*k, v.clone()))
        .collect()
}

// =============================================================================
// Filter Tests
// =============================================================================

/// Every color/year pair matches the reference scan exactly.
#[test]
fn test_color_and_year_matches_reference() {
    let (db, store) = setup_store();

    for color in ["Red", "Blue", "White", "red", "Green"] {
        for year in 1999..=2011 {
            let result = store.find_by_color_and_year(color, year).unwrap();
            let expected = reference_scan(&db, |v| {
                v.attributes.color == color && v.attributes.fabrication_year == year
            });
            assert_eq!(result, expected, "color={} year={}", color, year);
        }
    }
}

/// Boundary years are included in the brand/year range.
#[test]
fn test_brand_year_range_includes_boundaries() {
    let (db, store) = setup_store();

    let result = store.find_by_brand_and_year_range("Ford", 2003, 2005).unwrap();
    let expected = reference_scan(&db, |v| {
        v.attributes.brand == "Ford"
            && (2003..=2005).contains(&v.attributes.fabrication_year)
    });

    assert_eq!(result, expected);
    assert!(result.values().any(|v| v.attributes.fabrication_year == 2003));
    assert!(result.values().any(|v| v.attributes.fabrication_year == 2005));
}

/// A single-year range behaves like an exact year match.
#[test]
fn test_brand_year_range_single_year() {
    let (db, store) = setup_store();

    let result = store.find_by_brand_and_year_range("Fiat", 2004, 2004).unwrap();
    let expected = reference_scan(&db, |v| {
        v.attributes.brand == "Fiat" && v.attributes.fabrication_year == 2004
    });
    assert_eq!(result, expected);
}

/// An inverted range is not validated; it just matches nothing.
#[test]
fn test_inverted_year_range_is_empty() {
    let (_db, store) = setup_store();

    let result = store.find_by_brand_and_year_range("Ford", 2009, 2001).unwrap();
    assert!(result.is_empty());
}

/// Weight bounds are inclusive at both ends.
#[test]
fn test_weight_range_inclusive() {
    let (db, store) = setup_store();

    let result = store.find_by_weight_range(700.0, 900.0).unwrap();
    let expected = reference_scan(&db, |v| {
        v.attributes.weight >= 700.0 && v.attributes.weight <= 900.0
    });

    assert_eq!(result, expected);
    assert!(result.values().any(|v| v.attributes.weight == 700.0));
    assert!(result.values().any(|v| v.attributes.weight == 900.0));
}

/// Brand matching is exact and case-sensitive.
#[test]
fn test_brand_is_case_sensitive() {
    let (db, store) = setup_store();

    assert!(store.find_by_brand("ford").unwrap().is_empty());
    assert_eq!(
        store.find_by_brand("Ford").unwrap(),
        reference_scan(&db, |v| v.attributes.brand == "Ford")
    );
}

/// Zero matches is an empty map, not an error.
#[test]
fn test_no_match_is_empty_not_error() {
    let (_db, store) = setup_store();

    assert!(store.find_by_color_and_year("Purple", 2004).unwrap().is_empty());
    assert!(store.find_by_brand("Lada").unwrap().is_empty());
    assert!(store.find_by_weight_range(10_000.0, 20_000.0).unwrap().is_empty());
}

/// Result keys always equal the record ids.
#[test]
fn test_result_keys_match_ids() {
    let (_db, store) = setup_store();

    for (key, v) in store.find_all().unwrap() {
        assert_eq!(key, v.id);
    }
}

/// Identical queries on an unchanged store return equal maps.
#[test]
fn test_filters_are_idempotent() {
    let (_db, store) = setup_store();

    assert_eq!(
        store.find_by_brand_and_year_range("Toyota", 2000, 2009).unwrap(),
        store.find_by_brand_and_year_range("Toyota", 2000, 2009).unwrap()
    );
    assert_eq!(
        store.find_by_weight_range(0.0, 1000.0).unwrap(),
        store.find_by_weight_range(0.0, 1000.0).unwrap()
    );
    assert_eq!(store.find_all().unwrap(), store.find_all().unwrap());
}

// =============================================================================
// Aggregation Tests
// =============================================================================

fn service_over(vehicles: Vec<Vehicle>) -> DefaultVehicleService {
    let db = vehicles.into_iter().map(|v| (v.id, v)).collect();
    DefaultVehicleService::new(Arc::new(VehicleMapStore::new(db)))
}

/// Max speeds {1, 5} average to 3.0.
#[test]
fn test_average_max_speed_over_store() {
    let mut a = vehicle(1, "A", "Red", 2000, 1.0);
    a.attributes.max_speed = 1.0;
    let mut b = vehicle(2, "A", "Red", 2000, 1.0);
    b.attributes.max_speed = 5.0;
    let other = vehicle(3, "B", "Red", 2000, 1.0);

    let service = service_over(vec![a, b, other]);

    assert_eq!(service.average_max_speed_by_brand("A").unwrap(), 3.0);
}

/// Capacities {5, 5} average to 5.
#[test]
fn test_average_capacity_over_store() {
    let mut a = vehicle(1, "A", "Red", 2000, 1.0);
    a.attributes.capacity = 5;
    let mut b = vehicle(2, "A", "Red", 2000, 1.0);
    b.attributes.capacity = 5;

    let service = service_over(vec![a, b]);

    assert_eq!(service.average_capacity_by_brand("A").unwrap(), 5);
}

/// Unknown brands fail both averages with the no-data error.
#[test]
fn test_averages_unknown_brand() {
    let service = service_over(fleet().into_values().collect());

    assert_eq!(
        service.average_max_speed_by_brand("Lada"),
        Err(ServiceError::NoVehicles)
    );
    assert_eq!(
        service.average_capacity_by_brand("Lada"),
        Err(ServiceError::NoVehicles)
    );
}

// =============================================================================
// Composite Search Tests
// =============================================================================

/// Without a query the bounds are ignored and the whole store comes back.
#[test]
fn test_search_without_query_returns_everything() {
    let (db, store) = setup_store();
    let service = DefaultVehicleService::new(Arc::new(store));

    let result = service
        .search_by_weight_range(SearchQuery::new(-1.0, -2.0), false)
        .unwrap();
    assert_eq!(result, db);
}

/// With a query only records in [0, 2] come back, and `find_all` is never
/// touched.
#[test]
fn test_search_with_query_skips_find_all() {
    let db: HashMap<i64, Vehicle> = vec![
        vehicle(1, "A", "Red", 2000, 0.0),
        vehicle(2, "A", "Red", 2000, 2.0),
        vehicle(3, "A", "Red", 2000, 2.5),
    ]
    .into_iter()
    .map(|v| (v.id, v))
    .collect();
    let store = VehicleMapStore::new(db);

    let mock = Arc::new(
        VehicleRepositoryMock::new()
            .on_find_by_weight_range(move |from, to| store.find_by_weight_range(from, to)),
    );
    let service = DefaultVehicleService::new(mock.clone());

    let result = service
        .search_by_weight_range(SearchQuery::new(0.0, 2.0), true)
        .unwrap();

    let mut ids: Vec<_> = result.keys().copied().collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(mock.spy.find_all(), 0);
    assert_eq!(mock.spy.find_by_weight_range(), 1);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// The service can be queried from many threads at once.
#[test]
fn test_concurrent_readers_agree() {
    let (db, store) = setup_store();
    let service: Arc<dyn VehicleService> = Arc::new(DefaultVehicleService::new(Arc::new(store)));
    let expected = reference_scan(&db, |v| {
        v.attributes.brand == "Fiat" && (2001..=2008).contains(&v.attributes.fabrication_year)
    });

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                service
                    .find_by_brand_and_year_range("Fiat", 2001, 2008)
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
