//! Dashboard schema — metadata describing the dataset and controls.
//!
//! Clients use this to render the control row (site dropdown, payload
//! slider) with the right options, marks, and defaults.

use serde::Serialize;
use utoipa::ToSchema;

use crate::dataset::{ALL_SITES, LaunchTable};

/// Top-level schema returned by `GET /api/v1/schema`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSchema {
    /// Server version including git SHA (e.g. "0.1.0-abc1234").
    pub version: String,
    /// Summary of the loaded dataset.
    pub dataset: DatasetInfo,
    /// Control descriptors for the dashboard page.
    pub controls: ControlsSchema,
    /// Server instance metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<InstanceInfo>,
}

/// Summary of the loaded dataset.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DatasetInfo {
    /// Number of launch records loaded.
    pub rows: usize,
    /// Distinct launch sites in first-appearance order.
    pub sites: Vec<String>,
    /// Smallest payload mass in the dataset (kg). Absent for an empty table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_min_kg: Option<f64>,
    /// Largest payload mass in the dataset (kg). Absent for an empty table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_max_kg: Option<f64>,
}

/// Server instance metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InstanceInfo {
    /// Machine hostname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Name of the data file backing the table.
    pub source: String,
}

/// Control descriptors.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ControlsSchema {
    pub site_dropdown: DropdownSchema,
    pub payload_slider: SliderSchema,
}

/// Site dropdown: the `ALL` entry followed by each site.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DropdownSchema {
    pub options: Vec<DropdownOption>,
    /// Initially selected value.
    pub default: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Payload range slider: fixed scale with marks, default spanning the data.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SliderSchema {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial [lo, hi] selection — the dataset payload bounds.
    pub default: [f64; 2],
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

// Slider scale: 0–10000 kg in 1000 kg steps, marks every 2500 kg.
const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 10_000.0;
const SLIDER_STEP: f64 = 1_000.0;
const SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10_000.0];

impl DashboardSchema {
    /// Generate the schema for a loaded table.
    pub fn generate(table: &LaunchTable, instance: Option<InstanceInfo>) -> Self {
        let sites: Vec<String> = table.sites().into_iter().map(String::from).collect();
        let bounds = table.payload_bounds();

        let mut options = vec![DropdownOption {
            label: "All Sites".into(),
            value: ALL_SITES.into(),
        }];
        options.extend(sites.iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            version: crate::VERSION.to_string(),
            dataset: DatasetInfo {
                rows: table.len(),
                sites,
                payload_min_kg: bounds.map(|b| b.0),
                payload_max_kg: bounds.map(|b| b.1),
            },
            controls: ControlsSchema {
                site_dropdown: DropdownSchema {
                    options,
                    default: ALL_SITES.into(),
                    placeholder: "Select a Launch Site here".into(),
                },
                payload_slider: SliderSchema {
                    min: SLIDER_MIN,
                    max: SLIDER_MAX,
                    step: SLIDER_STEP,
                    marks: SLIDER_MARKS
                        .iter()
                        .map(|&value| SliderMark {
                            value,
                            label: format!("{value:.0}"),
                        })
                        .collect(),
                    default: bounds.map_or([SLIDER_MIN, SLIDER_MAX], |b| [b.0, b.1]),
                },
            },
            instance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchTable;

    fn table() -> LaunchTable {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,1,2500,FT\n\
                   KSC LC-39A,0,700,v1.1\n\
                   CCAFS LC-40,1,6000,B5\n";
        LaunchTable::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn dropdown_is_all_then_sites_in_order() {
        let schema = DashboardSchema::generate(&table(), None);
        let values: Vec<&str> = schema
            .controls
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(schema.controls.site_dropdown.default, "ALL");
    }

    #[test]
    fn slider_defaults_to_dataset_bounds() {
        let schema = DashboardSchema::generate(&table(), None);
        let slider = &schema.controls.payload_slider;
        assert_eq!(slider.default, [700.0, 6000.0]);
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 10_000.0);
        assert_eq!(slider.step, 1_000.0);
        let marks: Vec<f64> = slider.marks.iter().map(|m| m.value).collect();
        assert_eq!(marks, vec![0.0, 2500.0, 5000.0, 7500.0, 10_000.0]);
    }

    #[test]
    fn empty_table_slider_falls_back_to_full_scale() {
        let empty = LaunchTable::from_reader(
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n".as_bytes(),
        )
        .unwrap();
        let schema = DashboardSchema::generate(&empty, None);
        assert_eq!(schema.controls.payload_slider.default, [0.0, 10_000.0]);
        assert!(schema.dataset.payload_min_kg.is_none());
    }

    #[test]
    fn instance_info_is_omitted_from_json_when_absent() {
        let schema = DashboardSchema::generate(&table(), None);
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("instance").is_none());
        assert_eq!(json["dataset"]["rows"], 3);
    }
}
