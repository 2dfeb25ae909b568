//! # Models Module
//!
//! State owned by the request controller. Renderers only ever read it.

pub mod input_model;
pub mod submission_model;

pub use input_model::InputModel;
pub use submission_model::{Phase, SubmissionModel, SubmissionTiming};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_models_should_create_with_defaults() {
        let input = InputModel::new();
        let submission = SubmissionModel::new();

        assert!(input.is_empty());
        assert_eq!(submission.phase(), Phase::Idle);
    }
}
