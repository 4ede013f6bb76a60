// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]
// #![cfg_attr(not(debug_assertions), deny(clippy::unwrap_used))]
// #![cfg_attr(not(debug_assertions), deny(clippy::expect_used))]

pub use common::CommitVersion;
pub use error::{
	Error,
	diagnostic::{Diagnostic, IntoDiagnostic},
};
pub use value::Value;

pub mod common;
pub mod error;
pub mod event;
pub mod interface;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
