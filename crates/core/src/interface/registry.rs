// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	CommitVersion,
	interface::{OperationKind, TriggerRow},
};

/// Read-only query interface over the durable trigger registry.
///
/// Every scan sees exactly the rows committed at or before `version`.
pub trait RegistryAccessor: Send + Sync {
	/// Rows that may target `kind`, ordered by registration name ascending, then id.
	fn scan_by_kind(&self, kind: &OperationKind, version: CommitVersion) -> crate::Result<Vec<TriggerRow>>;

	/// Every row, ordered by registration name ascending, then id.
	///
	/// Rows are not grouped by kind: one row may carry several tags, so
	/// callers that need a per-kind order sort each kind's list themselves.
	fn scan_all(&self, version: CommitVersion) -> crate::Result<Vec<TriggerRow>>;

	/// Latest committed version.
	fn version(&self) -> CommitVersion;
}
