// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use cmdtrigger_core::interface::{CommandTag, OperationDescriptor, OperationKind, Phase, ReplicationRole};
use tracing::{debug, warn};

use crate::{
	EngineConfig,
	dispatch::{BeforeOutcome, Dispatcher, ResolvedTrigger},
	scope::TriggerScope,
};

/// Trigger entry points for the host's operation pipeline.
#[derive(Clone)]
pub struct TriggerEngine(Arc<TriggerEngineInner>);

pub struct TriggerEngineInner {
	dispatcher: Dispatcher,
	config: EngineConfig,
}

impl Deref for TriggerEngine {
	type Target = TriggerEngineInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// How an operation run through [`TriggerEngine::execute`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution<T> {
	/// The body ran and AFTER triggers fired.
	Completed(T),
	/// INSTEAD OF triggers ran in place of the body.
	Replaced {
		fired: usize,
	},
	/// A BEFORE trigger returned `false`.
	Cancelled {
		by: String,
	},
}

impl<T> Execution<T> {
	pub fn is_completed(&self) -> bool {
		matches!(self, Execution::Completed(_))
	}

	pub fn into_completed(self) -> Option<T> {
		match self {
			Execution::Completed(value) => Some(value),
			_ => None,
		}
	}
}

impl TriggerEngine {
	pub(crate) fn new(dispatcher: Dispatcher, config: EngineConfig) -> Self {
		Self(Arc::new(TriggerEngineInner {
			dispatcher,
			config,
		}))
	}

	pub fn dispatcher(&self) -> &Dispatcher {
		&self.dispatcher
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn on_before_operation(&self, descriptor: &OperationDescriptor) -> crate::Result<BeforeOutcome> {
		let mut scope = TriggerScope::reusable(self.config.scope_capacity);
		self.before(descriptor, &mut scope)
	}

	pub fn on_instead_of_operation(&self, descriptor: &OperationDescriptor) -> crate::Result<usize> {
		let mut scope = TriggerScope::reusable(self.config.scope_capacity);
		self.dispatcher.fire_instead_of(descriptor, &mut scope)
	}

	pub fn on_after_operation(&self, descriptor: &OperationDescriptor) -> crate::Result<()> {
		let mut scope = TriggerScope::fresh(self.config.scope_capacity);
		self.dispatcher.fire_after(descriptor, &mut scope)
	}

	/// Called by the host once it observes a committed registry change.
	pub fn invalidate_cache(&self) {
		self.dispatcher.cache().invalidate();
	}

	pub fn replication_role(&self) -> ReplicationRole {
		self.dispatcher.cache().role()
	}

	pub fn set_replication_role(&self, role: ReplicationRole) {
		debug!(role = ?role, "replication role changed");
		self.dispatcher.cache().set_role(role);
	}

	/// Whether any trigger fires for `tag` in any phase.
	pub fn fires_triggers(&self, tag: &CommandTag) -> crate::Result<bool> {
		let kind = OperationKind::from(tag.clone());
		for phase in Phase::ALL {
			if self.dispatcher.has_triggers(&kind, phase)? {
				return Ok(true);
			}
		}
		Ok(false)
	}

	pub fn fires_triggers_for(&self, tag: &CommandTag, phase: Phase) -> crate::Result<bool> {
		self.dispatcher.has_triggers(&OperationKind::from(tag.clone()), phase)
	}

	pub fn resolve(&self, kind: &OperationKind, phase: Phase) -> crate::Result<Vec<ResolvedTrigger>> {
		self.dispatcher.resolve(kind, phase)
	}

	pub fn begin_statement(&self) -> StatementTriggers {
		StatementTriggers {
			engine: self.clone(),
			call_scope: TriggerScope::reusable(self.config.scope_capacity),
			statement_scope: TriggerScope::fresh(self.config.scope_capacity),
		}
	}

	/// Runs `body` between the operation's triggers: BEFORE may cancel it,
	/// INSTEAD OF may replace it and AFTER fires once it succeeded.
	pub fn execute<T>(
		&self,
		descriptor: &OperationDescriptor,
		body: impl FnOnce() -> crate::Result<T>,
	) -> crate::Result<Execution<T>> {
		self.begin_statement().execute(descriptor, body)
	}

	fn before(&self, descriptor: &OperationDescriptor, scope: &mut TriggerScope) -> crate::Result<BeforeOutcome> {
		let outcome = self.dispatcher.fire_before(descriptor, scope)?;
		if let BeforeOutcome::CancelledBy(trigger) = &outcome {
			warn!(
				trigger = %trigger,
				tag = %descriptor.kind,
				object = %descriptor.display_target(),
				"operation cancelled by BEFORE trigger"
			);
		}
		Ok(outcome)
	}
}

/// Trigger scopes for the operations of one statement.
///
/// BEFORE and INSTEAD OF share an arena that is reset after every call.
/// AFTER gets a fresh arena per call, torn down when the call returns.
pub struct StatementTriggers {
	engine: TriggerEngine,
	call_scope: TriggerScope,
	statement_scope: TriggerScope,
}

impl StatementTriggers {
	pub fn before(&mut self, descriptor: &OperationDescriptor) -> crate::Result<BeforeOutcome> {
		self.engine.before(descriptor, &mut self.call_scope)
	}

	pub fn instead_of(&mut self, descriptor: &OperationDescriptor) -> crate::Result<usize> {
		self.engine.dispatcher.fire_instead_of(descriptor, &mut self.call_scope)
	}

	pub fn after(&mut self, descriptor: &OperationDescriptor) -> crate::Result<()> {
		self.engine.dispatcher.fire_after(descriptor, &mut self.statement_scope)
	}

	pub fn execute<T>(
		&mut self,
		descriptor: &OperationDescriptor,
		body: impl FnOnce() -> crate::Result<T>,
	) -> crate::Result<Execution<T>> {
		if let BeforeOutcome::CancelledBy(by) = self.before(descriptor)? {
			return Ok(Execution::Cancelled {
				by,
			});
		}

		let fired = self.instead_of(descriptor)?;
		if fired > 0 {
			return Ok(Execution::Replaced {
				fired,
			});
		}

		let value = body()?;
		self.after(descriptor)?;
		Ok(Execution::Completed(value))
	}

	pub fn call_scope(&self) -> &TriggerScope {
		&self.call_scope
	}

	pub fn statement_scope(&self) -> &TriggerScope {
		&self.statement_scope
	}
}
