// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::{
	event::catalog::TriggerChange,
	interface::{RegistryAccessor, TriggerId},
};
use tracing::{debug, instrument};

use crate::{
	TriggerIdent, TriggerStore,
	store::{RowChange, find::trigger_not_found},
};

impl TriggerStore {
	/// Drops the trigger named by `ident`. With `if_exists`, a missing trigger
	/// is reported as `None` instead of an error.
	#[instrument(name = "trigger::catalog::drop", level = "debug", skip(self))]
	pub fn drop_trigger(&self, ident: &TriggerIdent, if_exists: bool) -> cmdtrigger_core::Result<Option<TriggerId>> {
		let guard = self.lock_writer();

		let def = match self.find_trigger_at(ident, self.version())? {
			Some(def) => def,
			None if if_exists => {
				debug!(trigger = %ident, "trigger does not exist, skipping");
				return Ok(None);
			}
			None => return Err(trigger_not_found(ident)),
		};

		let version = self.commit(RowChange {
			id: def.id,
			name: def.name.clone(),
			row: None,
			change: TriggerChange::Dropped,
		});
		drop(guard);

		self.notify(version, def.id, def.name, TriggerChange::Dropped);
		Ok(Some(def.id))
	}
}
