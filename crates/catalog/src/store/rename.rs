// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::{
	event::catalog::TriggerChange,
	interface::{RegistryAccessor, TriggerDef},
};
use tracing::instrument;

use crate::{
	CatalogError, TriggerIdent, TriggerStore,
	store::{RowChange, create::ensure_name_available},
};

impl TriggerStore {
	/// Renames a trigger. Handlers fire in name order, so this may change
	/// where the trigger fires relative to others on the same command.
	#[instrument(name = "trigger::catalog::rename", level = "debug", skip(self))]
	pub fn rename_trigger(&self, ident: &TriggerIdent, new_name: &str) -> cmdtrigger_core::Result<TriggerDef> {
		if new_name.is_empty() {
			return Err(CatalogError::EmptyTriggerName.into());
		}

		let guard = self.lock_writer();
		let version = self.version();

		let mut def = self.get_trigger_at(ident, version)?;
		let existing = self.live_defs(version)?;
		ensure_name_available(&existing, new_name, &def.target, Some(&def))?;

		def.name = new_name.to_string();

		let version = self.commit(RowChange {
			id: def.id,
			name: def.name.clone(),
			row: Some(def.to_row()?),
			change: TriggerChange::Renamed,
		});
		drop(guard);

		self.notify(version, def.id, def.name.clone(), TriggerChange::Renamed);
		Ok(def)
	}
}
