// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use cmdtrigger_catalog::{CacheInvalidationListener, TriggerCache};
use cmdtrigger_core::{
	event::{EventBus, catalog::TriggerChangedEvent},
	interface::{HandlerInvoker, RegistryAccessor, ReplicationRole},
};

use crate::{EngineConfig, TriggerEngine, dispatch::Dispatcher};

/// Assembles a [`TriggerEngine`] from its collaborators.
pub struct TriggerEngineBuilder {
	registry: Arc<dyn RegistryAccessor>,
	invoker: Arc<dyn HandlerInvoker>,
	event_bus: Option<EventBus>,
	config: EngineConfig,
}

impl TriggerEngineBuilder {
	pub fn new(registry: Arc<dyn RegistryAccessor>, invoker: Arc<dyn HandlerInvoker>) -> Self {
		Self {
			registry,
			invoker,
			event_bus: None,
			config: EngineConfig::default(),
		}
	}

	/// Registry changes emitted on `event_bus` invalidate the engine's cache.
	pub fn event_bus(mut self, event_bus: EventBus) -> Self {
		self.event_bus = Some(event_bus);
		self
	}

	pub fn config(mut self, config: EngineConfig) -> Self {
		self.config = config;
		self
	}

	pub fn replication_role(mut self, role: ReplicationRole) -> Self {
		self.config.replication_role = role;
		self
	}

	pub fn report_wildcard_kind(mut self, enabled: bool) -> Self {
		self.config.report_wildcard_kind = enabled;
		self
	}

	pub fn scope_capacity(mut self, capacity: usize) -> Self {
		self.config.scope_capacity = capacity;
		self
	}

	pub fn build(self) -> TriggerEngine {
		let cache = TriggerCache::new(self.registry, self.config.replication_role);
		if let Some(event_bus) = &self.event_bus {
			event_bus.register::<TriggerChangedEvent, _>(CacheInvalidationListener::new(cache.clone()));
		}

		let dispatcher = Dispatcher::new(cache, self.invoker, self.config.report_wildcard_kind);
		TriggerEngine::new(dispatcher, self.config)
	}
}
