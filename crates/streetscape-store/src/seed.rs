//! Sample records the in-memory store starts with.

use chrono::{NaiveDate, NaiveDateTime};
use streetscape_core::models::{Image, ImageMetadata};

const WIKIMEDIA_COMMONS: &str = "wikimedia-commons";

/// The two sample images, both in central Amsterdam
pub fn sample_images() -> Vec<ImageMetadata> {
    vec![
        ImageMetadata::new(
            Image::new(
                0,
                "https://upload.wikimedia.org/wikipedia/commons/0/00/Zaden_van_een_Gele_lis_%28Iris_pseudacorus%29._06-03-2024._%28d.j.b.%29.jpg",
                52.3751914,
                4.8954506,
            ),
            3454,
            5182,
        )
        .with_altitude(0.0)
        .with_creation_date(midnight(2026, 1, 20))
        .with_source(WIKIMEDIA_COMMONS)
        .with_notes("Gele Iris"),
        ImageMetadata::new(
            Image::new(
                1,
                "https://upload.wikimedia.org/wikipedia/commons/b/b8/Chestnut-naped_antpitta_%28Grallaria_nuchalis_ruficeps%29_Las_Tangaras.jpg",
                52.3727217,
                4.9003963,
            ),
            3092,
            4000,
        )
        .with_altitude(0.0)
        .with_creation_date(midnight(2026, 1, 19))
        .with_source(WIKIMEDIA_COMMONS)
        .with_tags(["birb"])
        .with_notes("is cute"),
    ]
}

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
