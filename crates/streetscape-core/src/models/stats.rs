use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ImageMetadata;

/// Summary over a set of images. Computed per request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Distinct tags, sorted
    pub tags: Vec<String>,

    /// Distinct segmentation run names, sorted
    pub model_run_names: Vec<String>,

    /// Distinct image sources, sorted
    pub image_sources: Vec<String>,

    /// Earliest and latest creation date, `None` when no image has one
    pub date_range: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl AggregateStats {
    /// Aggregate over the given images
    pub fn from_images<'a, I>(images: I) -> Self
    where
        I: IntoIterator<Item = &'a ImageMetadata>,
    {
        let mut tags = BTreeSet::new();
        let mut run_names = BTreeSet::new();
        let mut sources = BTreeSet::new();
        let mut date_range: Option<(NaiveDateTime, NaiveDateTime)> = None;

        for image in images {
            tags.extend(image.tags.iter().cloned());
            run_names.extend(image.segmentation.iter().map(|s| s.name.clone()));
            sources.extend(image.source.iter().cloned());

            if let Some(date) = image.creation_date {
                date_range = Some(match date_range {
                    Some((min, max)) => (min.min(date), max.max(date)),
                    None => (date, date),
                });
            }
        }

        Self {
            tags: tags.into_iter().collect(),
            model_run_names: run_names.into_iter().collect(),
            image_sources: sources.into_iter().collect(),
            date_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Image, Segmentation};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn image(id: i64) -> ImageMetadata {
        ImageMetadata::new(Image::new(id, "u", 0.0, 0.0), 1, 1)
    }

    #[test]
    fn test_empty_input() {
        let stats = AggregateStats::from_images(&Vec::<ImageMetadata>::new());
        assert_eq!(stats, AggregateStats::default());

        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["date_range"].is_null());
    }

    #[test]
    fn test_distinct_values_and_date_range() {
        let images = vec![
            image(0).with_tags(["b", "a", "b"]).with_source("s1").with_creation_date(day(20)),
            image(1)
                .with_tags(["a"])
                .with_source("s1")
                .with_creation_date(day(3))
                .with_segmentation(Segmentation::new("run-x", "--fast")),
            image(2).with_source("s2").with_creation_date(day(11)),
            image(3).with_segmentation(Segmentation::new("run-x", "--slow")),
        ];

        let stats = AggregateStats::from_images(&images);

        assert_eq!(stats.tags, vec!["a", "b"]);
        assert_eq!(stats.model_run_names, vec!["run-x"]);
        assert_eq!(stats.image_sources, vec!["s1", "s2"]);
        assert_eq!(stats.date_range, Some((day(3), day(20))));
    }

    #[test]
    fn test_date_range_serializes_as_pair() {
        let stats = AggregateStats::from_images(&[image(0).with_creation_date(day(19))]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json["date_range"],
            serde_json::json!(["2026-01-19T00:00:00", "2026-01-19T00:00:00"])
        );
    }
}
