// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::{
	event::catalog::TriggerChange,
	interface::{EnabledState, RegistryAccessor, TriggerDef},
};
use tracing::instrument;

use crate::{TriggerIdent, TriggerStore, store::RowChange};

impl TriggerStore {
	/// Changes when the trigger fires. Setting the current state again still
	/// commits, so listeners observe the statement.
	#[instrument(name = "trigger::catalog::alter", level = "debug", skip(self))]
	pub fn alter_trigger_enabled(
		&self,
		ident: &TriggerIdent,
		enabled: EnabledState,
	) -> cmdtrigger_core::Result<TriggerDef> {
		let guard = self.lock_writer();

		let mut def = self.get_trigger_at(ident, self.version())?;
		def.enabled = enabled;

		let version = self.commit(RowChange {
			id: def.id,
			name: def.name.clone(),
			row: Some(def.to_row()?),
			change: TriggerChange::Altered,
		});
		drop(guard);

		self.notify(version, def.id, def.name.clone(), TriggerChange::Altered);
		Ok(def)
	}
}

#[cfg(test)]
mod tests {
	use cmdtrigger_core::interface::{EnabledState, Phase, RegistryAccessor};

	use crate::{
		TriggerIdent,
		store::tests::{create, test_store},
	};

	#[test]
	fn test_alter_enabled() {
		let store = test_store();
		create(&store, "audit", None, Phase::Before);
		let before = store.version();

		let def = store.alter_trigger_enabled(&TriggerIdent::new("audit"), EnabledState::Disabled).unwrap();
		assert_eq!(def.enabled, EnabledState::Disabled);

		let rows = store.scan_all(store.version()).unwrap();
		assert_eq!(rows[0].enabled, EnabledState::Disabled);

		let rows = store.scan_all(before).unwrap();
		assert_eq!(rows[0].enabled, EnabledState::FiresOnOrigin);
	}

	#[test]
	fn test_alter_missing() {
		let store = test_store();
		let err = store.alter_trigger_enabled(&TriggerIdent::new("audit"), EnabledState::FiresAlways).unwrap_err();
		assert_eq!(err.code, "TRIGGER_002");
	}
}
