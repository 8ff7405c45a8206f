// src/encoder/one_hot.rs

use crate::encoder::{Dataset, SchemaError};
use crate::model::artifact::{read_artifact, ArtifactError};
use crate::schema::NOMINAL_COLUMNS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Sorted categories observed for one column during fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedColumn {
    pub name: String,
    pub categories: Vec<String>,
}

impl EncodedColumn {
    /// Lookup is on the trimmed value, for encoding and membership alike.
    fn position(&self, value: &str) -> Option<usize> {
        let value = value.trim();
        self.categories
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }
}

/// Multi-column one-hot encoder. Values not seen during fitting, and blank
/// cells, encode to all zeros for their column group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    pub columns: Vec<EncodedColumn>,
}

impl OneHotEncoder {
    /// Fits over the five nominal listing columns.
    pub fn fit(data: &Dataset) -> Result<Self, SchemaError> {
        Self::fit_columns(data, &NOMINAL_COLUMNS)
    }

    pub fn fit_columns(data: &Dataset, columns: &[&str]) -> Result<Self, SchemaError> {
        let indices = data.select(columns)?;
        if data.is_empty() {
            return Err(SchemaError::Empty);
        }

        let columns = columns
            .iter()
            .zip(indices)
            .map(|(name, idx)| {
                let categories: BTreeSet<&str> = data
                    .rows()
                    .iter()
                    .map(|row| row[idx].as_str())
                    // Blank cells get no category of their own (a pandas-fed
                    // sklearn encoder would learn a `nan` one); they encode as
                    // all zeros like any unseen value.
                    .filter(|v| !v.is_empty())
                    .collect();

                EncodedColumn {
                    name: name.to_string(),
                    categories: categories.into_iter().map(str::to_string).collect(),
                }
            })
            .collect();

        Ok(Self { columns })
    }

    /// Total number of indicator columns produced per row.
    pub fn width(&self) -> usize {
        self.columns.iter().map(|c| c.categories.len()).sum()
    }

    /// Output column names, `<column>_<category>`.
    pub fn feature_names_out(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(|c| {
                c.categories
                    .iter()
                    .map(move |cat| format!("{}_{}", c.name, cat))
            })
            .collect()
    }

    pub fn is_known(&self, column: &str, value: &str) -> bool {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .and_then(|c| c.position(value))
            .is_some()
    }

    /// Encodes one row whose values are given in encoder column order.
    pub fn encode_values(&self, values: &[&str]) -> Result<Vec<f64>, SchemaError> {
        if values.len() != self.columns.len() {
            return Err(SchemaError::Width {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        let mut out = vec![0.0; self.width()];
        let mut offset = 0;
        for (column, value) in self.columns.iter().zip(values) {
            if let Some(pos) = column.position(value) {
                out[offset + pos] = 1.0;
            }
            offset += column.categories.len();
        }
        Ok(out)
    }

    pub fn transform(&self, data: &Dataset) -> Result<Vec<Vec<f64>>, SchemaError> {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let indices = data.select(&names)?;

        data.rows()
            .iter()
            .map(|row| {
                let values: Vec<&str> = indices.iter().map(|&i| row[i].as_str()).collect();
                self.encode_values(&values)
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, ArtifactError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            msg: e.to_string(),
        })
    }

    /// Reads an encoder artifact, returning it with its SHA-256.
    pub fn load(path: &Path) -> Result<(Self, String), ArtifactError> {
        let artifact = read_artifact(path)?;
        let encoder: OneHotEncoder = serde_json::from_slice(&artifact.bytes)?;
        encoder.validate()?;
        Ok((encoder, artifact.sha256))
    }

    /// The artifact must cover the nominal columns, in order, with sorted
    /// unique categories.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        if names != NOMINAL_COLUMNS {
            return Err(ArtifactError::Contract(format!(
                "encoder columns {names:?} do not match expected {NOMINAL_COLUMNS:?}"
            )));
        }
        for column in &self.columns {
            if column.categories.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ArtifactError::Contract(format!(
                    "categories of '{}' are not sorted and unique",
                    column.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TRAINING: &str = "\
id,property_type,room_type,bed_type,cancellation_policy,city,log_price
1,Apartment,Entire home/apt,Real Bed,strict,NYC,5.0
2,House,Private room,Futon,flexible,SF,4.2
3,Apartment,Private room,Real Bed,moderate,NYC,4.5
4,Loft,Shared room,,strict,LA,3.9
";

    fn fitted() -> OneHotEncoder {
        let data = Dataset::from_csv_reader(TRAINING.as_bytes()).unwrap();
        OneHotEncoder::fit(&data).unwrap()
    }

    #[test]
    fn fit_collects_sorted_categories_per_column() {
        let enc = fitted();
        assert_eq!(enc.columns.len(), 5);
        assert_eq!(enc.columns[0].categories, ["Apartment", "House", "Loft"]);
        assert_eq!(enc.columns[2].categories, ["Futon", "Real Bed"]);
        assert_eq!(enc.columns[4].categories, ["LA", "NYC", "SF"]);
        assert_eq!(enc.width(), 3 + 3 + 2 + 3 + 3);
    }

    #[test]
    fn feature_names_follow_column_then_category() {
        let names = fitted().feature_names_out();
        assert_eq!(names[0], "property_type_Apartment");
        assert_eq!(names.last().unwrap(), "city_SF");
        assert_eq!(names.len(), fitted().width());
    }

    #[test]
    fn known_values_set_one_indicator_per_group() {
        let row = fitted()
            .encode_values(&["House", "Private room", "Futon", "flexible", "SF"])
            .unwrap();
        assert_eq!(row.iter().sum::<f64>(), 5.0);
        assert_eq!(row[1], 1.0); // property_type_House
    }

    #[test]
    fn unknown_city_maps_to_zero_group_without_error() {
        let enc = fitted();
        let row = enc
            .encode_values(&["Apartment", "Entire home/apt", "Real Bed", "strict", "Boston"])
            .unwrap();

        let city_start = enc.width() - enc.columns[4].categories.len();
        assert!(row[city_start..].iter().all(|v| *v == 0.0));
        assert_eq!(row[..city_start].iter().sum::<f64>(), 4.0);
        assert!(!enc.is_known("city", "Boston"));
        assert!(enc.is_known("city", "NYC"));
    }

    #[test]
    fn transform_encodes_every_row() {
        let data = Dataset::from_csv_reader(TRAINING.as_bytes()).unwrap();
        let matrix = fitted().transform(&data).unwrap();
        assert_eq!(matrix.len(), 4);
        // blank bed_type on the last row leaves that group empty
        assert_eq!(matrix[3].iter().sum::<f64>(), 4.0);
    }

    #[test]
    fn missing_nominal_columns_are_a_schema_error() {
        let data = Dataset::from_csv_reader("id,city\n1,NYC\n".as_bytes()).unwrap();
        let err = OneHotEncoder::fit(&data).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingColumns(vec![
                "property_type".into(),
                "room_type".into(),
                "bed_type".into(),
                "cancellation_policy".into(),
            ])
        );
    }

    #[test]
    fn header_only_dataset_is_empty_error() {
        let header = "property_type,room_type,bed_type,cancellation_policy,city\n";
        let data = Dataset::from_csv_reader(header.as_bytes()).unwrap();
        assert_eq!(OneHotEncoder::fit(&data).unwrap_err(), SchemaError::Empty);
    }

    #[test]
    fn wrong_value_count_is_rejected() {
        let err = fitted().encode_values(&["Apartment"]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Width {
                expected: 5,
                actual: 1
            }
        );
    }

    #[test]
    fn saved_artifact_loads_back_identically() {
        let enc = fitted();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoder.json");

        enc.save(&path).unwrap();
        let (loaded, sha) = OneHotEncoder::load(&path).unwrap();

        assert_eq!(loaded, enc);
        assert_eq!(sha.len(), 64);
    }

    #[test]
    fn load_rejects_foreign_column_sets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoder.json");
        let mut enc = fitted();
        enc.columns.swap(0, 1);
        enc.save(&path).unwrap();

        assert!(matches!(
            OneHotEncoder::load(&path),
            Err(ArtifactError::Contract(_))
        ));
    }

    #[test]
    fn padded_values_are_known_exactly_when_they_encode() {
        let data =
            Dataset::from_csv_reader(include_str!("../../data/sample_listings.csv").as_bytes())
                .unwrap();
        let enc = OneHotEncoder::fit(&data).unwrap();
        let city_start = enc.width() - enc.columns[4].categories.len();

        for city in [" NYC ", "NYC\t", "  Boston", " New York "] {
            let row = enc
                .encode_values(&["Apartment", "Private room", "Real Bed", "strict", city])
                .unwrap();
            let hot = row[city_start..].iter().sum::<f64>() == 1.0;
            assert_eq!(enc.is_known("city", city), hot, "city {city:?}");
        }
        assert!(enc.is_known("city", " NYC "));
        assert!(!enc.is_known("city", " New York "));
    }

    #[test]
    fn fits_bundled_sample_snapshot() {
        let data =
            Dataset::from_csv_reader(include_str!("../../data/sample_listings.csv").as_bytes())
                .unwrap();
        let enc = OneHotEncoder::fit(&data).unwrap();

        assert!(enc.is_known("city", "NYC"));
        // the form offers "New York" but the snapshot spells it "NYC"
        assert!(!enc.is_known("city", "New York"));
        assert_eq!(enc.columns[3].categories.len(), 4);
        enc.validate().unwrap();
    }
}
