pub mod binarizer;
pub mod classification_executor;
pub mod color_rule;
pub mod region_kind;
