// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::interface::{ANY_KIND_MARKER, HandlerArgs, HandlerShape, OperationDescriptor, Phase};

use crate::{
	dispatch::{ResolvedTrigger, TriggerOrigin},
	scope::ScopeGuard,
};

/// Materializes the arguments of one handler call into the scope's arena.
pub(crate) fn materialize<'a>(
	guard: &'a ScopeGuard<'_>,
	trigger: &ResolvedTrigger,
	phase: Phase,
	descriptor: &'a OperationDescriptor,
	report_wildcard_kind: bool,
) -> HandlerArgs<'a> {
	let tag = match trigger.origin {
		TriggerOrigin::Wildcard if report_wildcard_kind => ANY_KIND_MARKER,
		_ => descriptor.kind.as_str(),
	};

	let context = match phase {
		Phase::Before => None,
		Phase::InsteadOf | Phase::After => descriptor.context.as_deref().map(|context| guard.alloc_str(context)),
	};

	let descriptor_arg = match trigger.entry.handler.shape {
		HandlerShape::Extended => Some(descriptor),
		HandlerShape::Plain => None,
	};

	HandlerArgs {
		when: guard.alloc_str(phase.as_str()),
		tag: Some(guard.alloc_str(tag)),
		object_id: descriptor.object_id,
		schema: descriptor.schema.as_deref().map(|schema| guard.alloc_str(schema)),
		object_name: descriptor.object_name.as_deref().map(|name| guard.alloc_str(name)),
		context,
		descriptor: descriptor_arg,
	}
}
