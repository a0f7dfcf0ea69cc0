//! Vehicle data loader
//!
//! Reads the JSON data file that seeds the store at start-up. The file is an
//! array of flat records:
//!
//! ```json
//! [{"id":1,"brand":"Ford","model":"Fiesta","registration":"ABC-123",
//!   "color":"Red","year":2010,"passengers":5,"max_speed":180.0,
//!   "fuel_type":"gas","transmission":"manual","weight":1100.5,
//!   "height":1.5,"length":4.0,"width":1.7}]
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::errors::{LoadError, LoadResult};
use crate::vehicle::{Dimensions, Vehicle, VehicleAttributes};

/// On-disk record layout
#[derive(Debug, Deserialize)]
struct VehicleRecord {
    id: i64,
    brand: String,
    model: String,
    registration: String,
    color: String,
    #[serde(rename = "year")]
    fabrication_year: i32,
    #[serde(rename = "passengers")]
    capacity: i32,
    max_speed: f64,
    fuel_type: String,
    transmission: String,
    weight: f64,
    height: f64,
    length: f64,
    width: f64,
}

impl From<VehicleRecord> for Vehicle {
    fn from(r: VehicleRecord) -> Self {
        Vehicle::new(
            r.id,
            VehicleAttributes {
                brand: r.brand,
                model: r.model,
                registration: r.registration,
                color: r.color,
                fabrication_year: r.fabrication_year,
                capacity: r.capacity,
                max_speed: r.max_speed,
                fuel_type: r.fuel_type,
                transmission: r.transmission,
                weight: r.weight,
                dimensions: Dimensions {
                    height: r.height,
                    length: r.length,
                    width: r.width,
                },
            },
        )
    }
}

/// Loads vehicle records into an identifier-keyed map.
pub struct VehicleLoader;

impl VehicleLoader {
    /// Loads the data file at `path`.
    pub fn load(path: &Path) -> LoadResult<HashMap<i64, Vehicle>> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads records from any JSON source.
    ///
    /// Identifiers must be unique; a repeated id aborts the load rather than
    /// silently replacing the earlier record.
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<HashMap<i64, Vehicle>> {
        let records: Vec<VehicleRecord> = serde_json::from_reader(reader)?;

        let mut db = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id;
            if db.insert(id, Vehicle::from(record)).is_some() {
                return Err(LoadError::DuplicateId(id));
            }
        }

        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECORDS: &str = r#"[
        {"id":1,"brand":"Ford","model":"Fiesta","registration":"ABC-123",
         "color":"Red","year":2010,"passengers":5,"max_speed":180.0,
         "fuel_type":"gas","transmission":"manual","weight":1100.5,
         "height":1.5,"length":4.0,"width":1.7},
        {"id":7,"brand":"Fiat","model":"Uno","registration":"XYZ-999",
         "color":"Blue","year":1995,"passengers":4,"max_speed":150,
         "fuel_type":"diesel","transmission":"manual","weight":900,
         "height":1.4,"length":3.6,"width":1.5}
    ]"#;

    #[test]
    fn test_from_reader_maps_fields() {
        let db = VehicleLoader::from_reader(TWO_RECORDS.as_bytes()).unwrap();

        assert_eq!(db.len(), 2);
        let ford = &db[&1];
        assert_eq!(ford.id, 1);
        assert_eq!(ford.attributes.brand, "Ford");
        assert_eq!(ford.attributes.fabrication_year, 2010);
        assert_eq!(ford.attributes.capacity, 5);
        assert_eq!(ford.attributes.max_speed, 180.0);
        assert_eq!(ford.attributes.weight, 1100.5);
        assert_eq!(ford.attributes.dimensions.width, 1.7);
    }

    #[test]
    fn test_keys_match_record_ids() {
        let db = VehicleLoader::from_reader(TWO_RECORDS.as_bytes()).unwrap();

        for (key, vehicle) in &db {
            assert_eq!(*key, vehicle.id);
        }
    }

    #[test]
    fn test_integer_numbers_accepted_for_float_fields() {
        let db = VehicleLoader::from_reader(TWO_RECORDS.as_bytes()).unwrap();
        assert_eq!(db[&7].attributes.weight, 900.0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let data = r#"[
            {"id":1,"brand":"A","model":"B","registration":"C","color":"D",
             "year":1,"passengers":1,"max_speed":1,"fuel_type":"E",
             "transmission":"F","weight":1,"height":1,"length":1,"width":1},
            {"id":1,"brand":"A","model":"B","registration":"C","color":"D",
             "year":1,"passengers":1,"max_speed":1,"fuel_type":"E",
             "transmission":"F","weight":1,"height":1,"length":1,"width":1}
        ]"#;

        let err = VehicleLoader::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(1)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = VehicleLoader::from_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = VehicleLoader::load(Path::new("/nonexistent/vehicles.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_empty_array_loads_empty_store() {
        let db = VehicleLoader::from_reader("[]".as_bytes()).unwrap();
        assert!(db.is_empty());
    }
}
