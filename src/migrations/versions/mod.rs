pub mod m0001_integration_classify_index;
pub mod m0002_integration_updated_at_index;
