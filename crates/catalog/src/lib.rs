// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use cache::{CacheInvalidationListener, CacheKey, TriggerCache, TriggerEntry};
pub use error::CatalogError;
pub use store::{TriggerIdent, TriggerStore, TriggerToCreate};

pub mod cache;
pub mod error;
pub mod store;
