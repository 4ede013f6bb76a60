// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{CommitVersion, impl_event, interface::TriggerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerChange {
	Created,
	Dropped,
	Altered,
	Renamed,
}

/// Emitted once per committed trigger registry mutation.
#[derive(Debug, Clone)]
pub struct TriggerChangedEvent {
	pub version: CommitVersion,
	pub trigger: TriggerId,
	pub name: String,
	pub change: TriggerChange,
}

impl_event!(TriggerChangedEvent);
