pub mod batch_purify_use_case;
pub mod pipeline_logger;
pub mod purify_image_use_case;
