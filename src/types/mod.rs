pub mod climate_parameter;
pub mod climatology_record;
pub mod location;
pub mod month;
