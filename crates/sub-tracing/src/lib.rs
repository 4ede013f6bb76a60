// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use builder::{OutputFormat, TracingBuilder};
pub use error::SubsystemError;
pub use subsystem::TracingSubsystem;

mod builder;
mod error;
mod subsystem;
