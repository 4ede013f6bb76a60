// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Role this process plays in replication. Decides which enabled states fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicationRole {
	#[default]
	Origin,
	Replica,
	Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnabledState {
	Disabled,
	#[default]
	FiresOnOrigin,
	FiresOnReplica,
	FiresAlways,
}

impl EnabledState {
	/// Binary fire/skip decision under `role`. `Local` behaves like `Origin`.
	pub fn fires_under(&self, role: ReplicationRole) -> bool {
		match self {
			EnabledState::Disabled => false,
			EnabledState::FiresOnOrigin => role != ReplicationRole::Replica,
			EnabledState::FiresOnReplica => role == ReplicationRole::Replica,
			EnabledState::FiresAlways => true,
		}
	}
}

impl Display for EnabledState {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			EnabledState::Disabled => f.write_str("DISABLED"),
			EnabledState::FiresOnOrigin => f.write_str("ENABLED"),
			EnabledState::FiresOnReplica => f.write_str("ENABLED REPLICA"),
			EnabledState::FiresAlways => f.write_str("ENABLED ALWAYS"),
		}
	}
}

impl Display for ReplicationRole {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ReplicationRole::Origin => f.write_str("origin"),
			ReplicationRole::Replica => f.write_str("replica"),
			ReplicationRole::Local => f.write_str("local"),
		}
	}
}
