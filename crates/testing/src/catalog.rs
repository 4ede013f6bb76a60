// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use cmdtrigger_catalog::{TriggerIdent, TriggerStore, TriggerToCreate};
use cmdtrigger_core::{
	event::EventBus,
	interface::{EnabledState, Phase, RegistryAccessor, TriggerId},
};

use crate::StaticHandlerCatalog;

/// A trigger store wired to its own event bus and handler catalog.
pub struct TestCatalog {
	store: TriggerStore,
	event_bus: EventBus,
	handlers: Arc<StaticHandlerCatalog>,
}

impl TestCatalog {
	/// Store whose handler catalog accepts any plain handler name.
	pub fn new() -> Self {
		Self::with_handlers(StaticHandlerCatalog::permissive())
	}

	pub fn with_handlers(handlers: StaticHandlerCatalog) -> Self {
		let handlers = Arc::new(handlers);
		let event_bus = EventBus::new();
		let store = TriggerStore::new(handlers.clone(), event_bus.clone());
		Self {
			store,
			event_bus,
			handlers,
		}
	}

	pub fn store(&self) -> &TriggerStore {
		&self.store
	}

	pub fn event_bus(&self) -> EventBus {
		self.event_bus.clone()
	}

	pub fn handlers(&self) -> &StaticHandlerCatalog {
		&self.handlers
	}

	pub fn registry(&self) -> Arc<dyn RegistryAccessor> {
		Arc::new(self.store.clone())
	}

	/// Registers a trigger; `tags` of `None` targets every command.
	pub fn create(
		&self,
		name: &str,
		tags: Option<&[&str]>,
		phase: Phase,
		handler: &str,
	) -> cmdtrigger_core::Result<TriggerId> {
		let def = self.store.create_trigger(TriggerToCreate {
			name: name.to_string(),
			tags: tags.map(|tags| tags.iter().map(|tag| tag.to_string()).collect()),
			phase,
			handler: handler.to_string(),
		})?;
		Ok(def.id)
	}

	pub fn set_enabled(&self, name: &str, enabled: EnabledState) -> cmdtrigger_core::Result<()> {
		self.store.alter_trigger_enabled(&TriggerIdent::new(name), enabled)?;
		Ok(())
	}

	pub fn drop_trigger(&self, name: &str) -> cmdtrigger_core::Result<()> {
		self.store.drop_trigger(&TriggerIdent::new(name), false)?;
		Ok(())
	}

	pub fn rename_trigger(&self, name: &str, new_name: &str) -> cmdtrigger_core::Result<()> {
		self.store.rename_trigger(&TriggerIdent::new(name), new_name)?;
		Ok(())
	}
}

impl Default for TestCatalog {
	fn default() -> Self {
		Self::new()
	}
}
