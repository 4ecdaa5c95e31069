pub mod coordinate_value_ext;
pub mod float_ext;
