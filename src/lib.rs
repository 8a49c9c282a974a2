pub mod charset;
pub mod common;
pub mod evaluator;
pub mod generator;

pub use common::is_common_password;
pub use evaluator::{evaluate_password, Evaluation, Suggestion, Verdict};
pub use generator::{generate_password, generate_password_with, DEFAULT_PASSWORD_LENGTH};
