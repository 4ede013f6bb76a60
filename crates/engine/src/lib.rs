// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use builder::TriggerEngineBuilder;
pub use config::EngineConfig;
pub use dispatch::{BeforeOutcome, Dispatcher, ResolvedTrigger, TriggerOrigin};
pub use engine::{Execution, StatementTriggers, TriggerEngine};
pub use scope::{ScopeGuard, ScopePolicy, TriggerScope};

mod builder;
mod config;
pub mod dispatch;
mod engine;
pub mod scope;

pub type Result<T> = cmdtrigger_core::Result<T>;
