// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::interface::{RegistryAccessor, TriggerDef};
use tracing::instrument;

use crate::TriggerStore;

impl TriggerStore {
	/// Every live trigger, ordered by name.
	#[instrument(name = "trigger::catalog::list", level = "trace", skip(self))]
	pub fn list_triggers(&self) -> cmdtrigger_core::Result<Vec<TriggerDef>> {
		self.live_defs(self.version())
	}
}

#[cfg(test)]
mod tests {
	use cmdtrigger_core::interface::Phase;

	use crate::store::tests::{create, test_store};

	#[test]
	fn test_empty() {
		let store = test_store();
		assert!(store.list_triggers().unwrap().is_empty());
	}

	#[test]
	fn test_ordered_by_name() {
		let store = test_store();
		create(&store, "zeta", None, Phase::Before);
		create(&store, "Alpha", None, Phase::After);
		create(&store, "alpha", Some(&["CREATE TABLE"]), Phase::After);

		let names: Vec<_> = store.list_triggers().unwrap().into_iter().map(|def| def.name).collect();
		assert_eq!(names, vec!["Alpha", "alpha", "zeta"]);
	}
}
