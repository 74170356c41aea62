// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Every enabled check becomes a [`Rule`]; the [`RuleEngine`] runs them all
//! against a commit message and collects a [`ValidationResult`].

mod builtin;
mod engine;
pub mod guidance;
mod validator;

pub use builtin::*;
pub use engine::RuleEngine;
pub use guidance::Guidance;
pub use validator::{ValidationIssue, ValidationResult};
