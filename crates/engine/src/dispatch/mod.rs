// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use cmdtrigger_catalog::TriggerCache;
use cmdtrigger_core::{
	Value,
	interface::{HandlerInvoker, OperationDescriptor, OperationKind, Phase},
};
use tracing::{instrument, trace};

use crate::scope::{ScopeGuard, TriggerScope};

mod args;
mod outcome;
mod resolve;

pub use outcome::BeforeOutcome;
pub use resolve::{ResolvedTrigger, TriggerOrigin};

/// Resolves and fires the triggers of one operation phase.
///
/// Handlers run strictly in resolved order on the calling thread. A handler
/// may dispatch nested operations through the same dispatcher.
#[derive(Clone)]
pub struct Dispatcher {
	cache: TriggerCache,
	invoker: Arc<dyn HandlerInvoker>,
	report_wildcard_kind: bool,
}

impl Dispatcher {
	pub fn new(cache: TriggerCache, invoker: Arc<dyn HandlerInvoker>, report_wildcard_kind: bool) -> Self {
		Self {
			cache,
			invoker,
			report_wildcard_kind,
		}
	}

	pub fn cache(&self) -> &TriggerCache {
		&self.cache
	}

	/// Triggers registered for any operation followed by those registered
	/// for `kind`, read from a single cache build.
	pub fn resolve(&self, kind: &OperationKind, phase: Phase) -> crate::Result<Vec<ResolvedTrigger>> {
		let state = self.cache.state()?;
		Ok(resolve::merge(&state, kind, phase))
	}

	pub fn has_triggers(&self, kind: &OperationKind, phase: Phase) -> crate::Result<bool> {
		let state = self.cache.state()?;
		Ok(!state.get(&OperationKind::Any, phase).is_empty() || !state.get(kind, phase).is_empty())
	}

	/// Fires BEFORE triggers until one returns `false`.
	#[instrument(name = "trigger::dispatch::before", level = "debug", skip_all, fields(tag = %descriptor.kind))]
	pub fn fire_before(
		&self,
		descriptor: &OperationDescriptor,
		scope: &mut TriggerScope,
	) -> crate::Result<BeforeOutcome> {
		let triggers = self.resolve(&OperationKind::from(descriptor.kind.clone()), Phase::Before)?;
		if triggers.is_empty() {
			return Ok(BeforeOutcome::Proceed);
		}

		let guard = scope.enter();
		for trigger in &triggers {
			let result = self.invoke(&guard, trigger, Phase::Before, descriptor)?;
			if result.as_ref().is_some_and(Value::is_veto) {
				return Ok(BeforeOutcome::CancelledBy(trigger.entry.name.clone()));
			}
		}
		Ok(BeforeOutcome::Proceed)
	}

	/// Fires every INSTEAD OF trigger and returns how many ran. A non-zero
	/// count means the operation's own execution is replaced.
	#[instrument(name = "trigger::dispatch::instead_of", level = "debug", skip_all, fields(tag = %descriptor.kind))]
	pub fn fire_instead_of(
		&self,
		descriptor: &OperationDescriptor,
		scope: &mut TriggerScope,
	) -> crate::Result<usize> {
		self.fire_all(descriptor, Phase::InsteadOf, scope)
	}

	#[instrument(name = "trigger::dispatch::after", level = "debug", skip_all, fields(tag = %descriptor.kind))]
	pub fn fire_after(&self, descriptor: &OperationDescriptor, scope: &mut TriggerScope) -> crate::Result<()> {
		self.fire_all(descriptor, Phase::After, scope)?;
		Ok(())
	}

	fn fire_all(
		&self,
		descriptor: &OperationDescriptor,
		phase: Phase,
		scope: &mut TriggerScope,
	) -> crate::Result<usize> {
		let triggers = self.resolve(&OperationKind::from(descriptor.kind.clone()), phase)?;
		if triggers.is_empty() {
			return Ok(0);
		}

		let guard = scope.enter();
		for trigger in &triggers {
			self.invoke(&guard, trigger, phase, descriptor)?;
		}
		Ok(triggers.len())
	}

	fn invoke(
		&self,
		guard: &ScopeGuard<'_>,
		trigger: &ResolvedTrigger,
		phase: Phase,
		descriptor: &OperationDescriptor,
	) -> crate::Result<Option<Value>> {
		trace!(
			trigger = %trigger.entry.name,
			handler = %trigger.entry.handler,
			when = phase.as_str(),
			origin = ?trigger.origin,
			"invoking trigger handler"
		);
		let args = args::materialize(guard, trigger, phase, descriptor, self.report_wildcard_kind);
		self.invoker.invoke(&trigger.entry.handler, &args)
	}
}
