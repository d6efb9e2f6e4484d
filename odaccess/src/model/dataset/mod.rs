mod csv_feature_source;

pub use csv_feature_source::{CsvFeatureSource, DEFAULT_ID_FIELD};
