pub mod argument_builder;
pub mod case_algebra;
pub mod dnf;
pub mod open_questions;
pub mod semantics;
pub mod stringify;

pub use argument_builder::{arguments, explanation, pro_contra};
pub use case_algebra::{combine, consistent_cases, negate};
pub use dnf::{cases, decompose, impossible};
pub use open_questions::{open_arguments, questions};
pub use semantics::{is_defeated, is_rebutted, winners_losers};
pub use stringify::{argument as argument_string, proposition as proposition_string};
