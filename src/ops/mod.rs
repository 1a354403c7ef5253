pub mod batch;

pub use self::batch::{
    bound_to_free_batch, bound_to_free_jacobian_batch, checked_free_to_bound_jacobian_batch,
    checked_free_to_path_correction_batch, free_to_bound_batch, free_to_bound_jacobian_batch,
    free_to_path_correction_batch,
};
