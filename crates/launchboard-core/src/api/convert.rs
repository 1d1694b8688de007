//! Conversion from the dataset to figure payloads.
//!
//! These are the two reactive callbacks of the dashboard: each takes the
//! immutable table plus the current control values and produces one figure.

use crate::dataset::{LaunchTable, PayloadRange, SiteSelection};

use super::figures::{PieFigure, PieSlice, ScatterFigure, ScatterPoint, ScatterSeries};

/// Build the success pie figure for the selected site.
///
/// `ALL`: one slice per site with at least one success, ordered by
/// descending success count (ties keep first-appearance order). A specific
/// site yields a Success/Failed breakdown of that site's rows; an unknown
/// site yields the same shape with zero counts.
pub fn success_pie(table: &LaunchTable, selection: &SiteSelection) -> PieFigure {
    match selection {
        SiteSelection::All => {
            let mut counts: Vec<(String, u64)> = Vec::new();
            for record in table.records().iter().filter(|r| r.is_success()) {
                match counts.iter_mut().find(|(site, _)| *site == record.site) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((record.site.clone(), 1)),
                }
            }
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            PieFigure {
                title: "Total Success Launches by Site".into(),
                slices: counts
                    .into_iter()
                    .map(|(site, n)| PieSlice {
                        label: site,
                        value: n,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let mut success = 0u64;
            let mut failed = 0u64;
            for record in table.filter_by_site(selection) {
                if record.is_success() {
                    success += 1;
                } else {
                    failed += 1;
                }
            }
            PieFigure {
                title: format!("Success vs Failed Launches for {site}"),
                slices: vec![
                    PieSlice {
                        label: "Success".into(),
                        value: success,
                    },
                    PieSlice {
                        label: "Failed".into(),
                        value: failed,
                    },
                ],
            }
        }
    }
}

/// Build the payload scatter figure: payload-range filter, then site filter,
/// grouped into one series per booster category in first-appearance order.
pub fn payload_scatter(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterFigure {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in table.filter(selection, range) {
        let point = ScatterPoint {
            payload_kg: record.payload_mass_kg,
            outcome: record.outcome,
        };
        match series
            .iter_mut()
            .find(|s| s.booster_category == record.booster_category)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                booster_category: record.booster_category.clone(),
                points: vec![point],
            }),
        }
    }
    ScatterFigure {
        title: "Correlation between Payload Mass and Launch Success".into(),
        x_label: "Payload Mass (kg)".into(),
        y_label: "Launch Outcome (1=Success, 0=Failed)".into(),
        series,
    }
}
