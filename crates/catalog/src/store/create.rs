// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::{
	event::catalog::TriggerChange,
	interface::{
		CommandTag, EnabledState, HandlerRef, HandlerShape, Phase, RegistryAccessor, TriggerDef, TriggerTarget,
	},
};
use tracing::{instrument, warn};

use crate::{
	CatalogError, TriggerStore,
	store::{RowChange, find::describe},
};

const NO_AFTER_TRIGGERS: [&str; 2] = ["VACUUM", "CLUSTER"];

#[derive(Debug, Clone)]
pub struct TriggerToCreate {
	pub name: String,
	/// `None` registers the trigger for every command.
	pub tags: Option<Vec<String>>,
	pub phase: Phase,
	pub handler: String,
}

impl TriggerStore {
	#[instrument(name = "trigger::catalog::create", level = "debug", skip(self, to_create), fields(trigger = %to_create.name, phase = %to_create.phase))]
	pub fn create_trigger(&self, to_create: TriggerToCreate) -> cmdtrigger_core::Result<TriggerDef> {
		if to_create.name.is_empty() {
			return Err(CatalogError::EmptyTriggerName.into());
		}

		let target = normalize_tags(&to_create.name, to_create.tags)?;
		reject_unsupported(&target, to_create.phase)?;
		let handler = self.resolve_handler(&to_create.handler)?;

		let guard = self.lock_writer();
		let existing = self.live_defs(self.version())?;

		ensure_name_available(&existing, &to_create.name, &target, None)?;
		ensure_phase_class(&existing, &to_create.name, &target, to_create.phase)?;

		for warning in registration_warnings(&target, to_create.phase) {
			warn!(trigger = %to_create.name, "{}", warning);
		}

		let def = TriggerDef {
			id: self.allocate_id(),
			name: to_create.name,
			target,
			phase: to_create.phase,
			handler,
			enabled: EnabledState::FiresOnOrigin,
		};

		let version = self.commit(RowChange {
			id: def.id,
			name: def.name.clone(),
			row: Some(def.to_row()?),
			change: TriggerChange::Created,
		});
		drop(guard);

		self.notify(version, def.id, def.name.clone(), TriggerChange::Created);
		Ok(def)
	}

	/// The extended shape is preferred over the plain one.
	fn resolve_handler(&self, name: &str) -> cmdtrigger_core::Result<HandlerRef> {
		let signature = self
			.handlers
			.find_handler(name, HandlerShape::Extended)
			.or_else(|| self.handlers.find_handler(name, HandlerShape::Plain));

		let Some(signature) = signature else {
			return Err(CatalogError::HandlerNotFound {
				handler: name.to_string(),
			}
			.into());
		};

		if !signature.returns.is_trigger_compatible() {
			return Err(CatalogError::InvalidHandlerReturn {
				handler: name.to_string(),
				returns: signature.returns,
			}
			.into());
		}

		Ok(signature.handler_ref())
	}
}

/// Parses, sorts and de-duplicates a requested tag list.
fn normalize_tags(name: &str, tags: Option<Vec<String>>) -> cmdtrigger_core::Result<TriggerTarget> {
	let Some(tags) = tags else {
		return Ok(TriggerTarget::Any);
	};

	if tags.is_empty() {
		return Err(CatalogError::EmptyTagList {
			name: name.to_string(),
		}
		.into());
	}

	let mut parsed = tags.into_iter().map(CommandTag::parse).collect::<cmdtrigger_core::Result<Vec<_>>>()?;
	parsed.sort();
	parsed.dedup();
	Ok(TriggerTarget::Commands(parsed))
}

fn reject_unsupported(target: &TriggerTarget, phase: Phase) -> cmdtrigger_core::Result<()> {
	if phase != Phase::After {
		return Ok(());
	}
	if let TriggerTarget::Commands(tags) = target {
		for tag in tags {
			if NO_AFTER_TRIGGERS.contains(&tag.as_str()) {
				return Err(CatalogError::AfterTriggerNotSupported {
					tag: tag.to_string(),
				}
				.into());
			}
		}
	}
	Ok(())
}

/// Registrations that succeed but will not fire in every situation the
/// caller might expect.
pub fn registration_warnings(target: &TriggerTarget, phase: Phase) -> Vec<String> {
	let mut warnings = Vec::new();
	let TriggerTarget::Commands(tags) = target else {
		return warnings;
	};

	for tag in tags {
		match tag.as_str() {
			"CREATE INDEX" if phase == Phase::After => warnings.push(
				"AFTER CREATE INDEX CONCURRENTLY triggers are not supported; the trigger will not fire on concurrently created indexes"
					.to_string(),
			),
			"REINDEX" => warnings.push(
				"REINDEX DATABASE triggers are not supported; the trigger will not fire on REINDEX DATABASE"
					.to_string(),
			),
			_ => {}
		}
	}
	warnings
}

/// Two registrations share a name scope when either targets every command or
/// their tag lists intersect.
pub(crate) fn scopes_overlap(l: &TriggerTarget, r: &TriggerTarget) -> bool {
	match (l, r) {
		(TriggerTarget::Any, _) | (_, TriggerTarget::Any) => true,
		(TriggerTarget::Commands(l), TriggerTarget::Commands(r)) => l.iter().any(|tag| r.contains(tag)),
	}
}

pub(crate) fn ensure_name_available(
	existing: &[TriggerDef],
	name: &str,
	target: &TriggerTarget,
	ignore: Option<&TriggerDef>,
) -> cmdtrigger_core::Result<()> {
	for def in existing {
		if ignore.is_some_and(|ignored| ignored.id == def.id) {
			continue;
		}
		if def.name == name && scopes_overlap(&def.target, target) {
			return Err(CatalogError::TriggerAlreadyExists {
				name: name.to_string(),
				kind: describe(def),
			}
			.into());
		}
	}
	Ok(())
}

/// BEFORE/AFTER and INSTEAD OF triggers may not share a cache key. The
/// wildcard key is checked on its own.
fn ensure_phase_class(
	existing: &[TriggerDef],
	name: &str,
	target: &TriggerTarget,
	phase: Phase,
) -> cmdtrigger_core::Result<()> {
	for kind in target.kinds() {
		for def in existing {
			if def.phase.class() == phase.class() {
				continue;
			}
			if def.target.kinds().contains(&kind) {
				return Err(CatalogError::PhaseClassConflict {
					name: name.to_string(),
					kind: kind.to_string(),
					requested: phase,
					existing: def.name.clone(),
					existing_phase: def.phase,
				}
				.into());
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use cmdtrigger_core::{
		event::{
			EventListener,
			catalog::{TriggerChange, TriggerChangedEvent},
		},
		interface::{CommandTag, EnabledState, HandlerShape, Phase, RegistryAccessor, TriggerTarget},
	};
	use std::sync::{Arc, Mutex};

	use super::registration_warnings;
	use crate::store::tests::{create, test_store, to_create};

	#[test]
	fn test_create_defaults() {
		let store = test_store();
		let def = store.create_trigger(to_create("audit", Some(&["CREATE TABLE"]), Phase::Before)).unwrap();

		assert_eq!(def.name, "audit");
		assert_eq!(def.enabled, EnabledState::FiresOnOrigin);
		assert_eq!(def.handler.shape, HandlerShape::Plain);
		assert_eq!(def.handler.name, "audit_fn");
	}

	#[test]
	fn test_prefers_extended_handler() {
		let store = test_store();
		let def = store.create_trigger(to_create("both_audit", None, Phase::Before)).unwrap();
		assert_eq!(def.handler.shape, HandlerShape::Extended);
		assert_eq!(def.handler.arity(), 6);

		let def = store.create_trigger(to_create("ext_log", None, Phase::After)).unwrap();
		assert_eq!(def.handler.shape, HandlerShape::Extended);
	}

	#[test]
	fn test_empty_name() {
		let store = test_store();
		let err = store.create_trigger(to_create("", None, Phase::Before)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_009");
	}

	#[test]
	fn test_missing_handler() {
		let store = test_store();
		let mut request = to_create("audit", None, Phase::Before);
		request.handler = "missing".to_string();

		let err = store.create_trigger(request).unwrap_err();
		assert_eq!(err.code, "TRIGGER_006");
	}

	#[test]
	fn test_handler_must_return_void_or_boolean() {
		let store = test_store();
		let mut request = to_create("audit", None, Phase::Before);
		request.handler = "count_int".to_string();

		let err = store.create_trigger(request).unwrap_err();
		assert_eq!(err.code, "TRIGGER_007");
		assert_eq!(store.version(), cmdtrigger_core::CommitVersion(0));
	}

	#[test]
	fn test_tags_are_normalized() {
		let store = test_store();
		let def = store
			.create_trigger(to_create("audit", Some(&["DROP TABLE", "CREATE TABLE", "DROP TABLE"]), Phase::Before))
			.unwrap();

		let kinds: Vec<_> = def.target.kinds().iter().map(|k| k.to_string()).collect();
		assert_eq!(kinds, vec!["CREATE TABLE", "DROP TABLE"]);
	}

	#[test]
	fn test_rejects_empty_tag_list_and_marker() {
		let store = test_store();
		assert_eq!(store.create_trigger(to_create("a", Some(&[]), Phase::Before)).unwrap_err().code, "TRIGGER_010");
		assert_eq!(
			store.create_trigger(to_create("a", Some(&["ANY"]), Phase::Before)).unwrap_err().code,
			"COMMAND_002"
		);
		assert_eq!(store.create_trigger(to_create("a", Some(&[""]), Phase::Before)).unwrap_err().code, "COMMAND_001");
	}

	#[test]
	fn test_duplicate_name_in_same_scope() {
		let store = test_store();
		create(&store, "audit", Some(&["CREATE TABLE"]), Phase::Before);

		let err = store.create_trigger(to_create("audit", Some(&["CREATE TABLE"]), Phase::After)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_001");
		assert!(err.message.contains("already exists"));
	}

	#[test]
	fn test_same_name_in_disjoint_scopes() {
		let store = test_store();
		create(&store, "audit", Some(&["CREATE TABLE"]), Phase::Before);
		assert!(store.create_trigger(to_create("audit", Some(&["DROP TABLE"]), Phase::Before)).is_ok());
	}

	#[test]
	fn test_wildcard_name_is_global() {
		let store = test_store();
		create(&store, "audit", Some(&["CREATE TABLE"]), Phase::Before);
		let err = store.create_trigger(to_create("audit", None, Phase::Before)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_001");

		let store = test_store();
		create(&store, "audit", None, Phase::Before);
		let err = store.create_trigger(to_create("audit", Some(&["VACUUM"]), Phase::Before)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_001");
	}

	#[test]
	fn test_instead_of_conflicts_with_before() {
		let store = test_store();
		create(&store, "check", Some(&["CREATE TABLE"]), Phase::Before);

		let err = store.create_trigger(to_create("replace", Some(&["CREATE TABLE"]), Phase::InsteadOf)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_004");
		assert!(err.label.as_ref().unwrap().contains("check"));
	}

	#[test]
	fn test_after_conflicts_with_instead_of() {
		let store = test_store();
		create(&store, "replace", Some(&["ALTER TABLE", "CREATE TABLE"]), Phase::InsteadOf);

		let err = store.create_trigger(to_create("log", Some(&["CREATE TABLE"]), Phase::After)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_004");

		// a different kind is unaffected
		assert!(store.create_trigger(to_create("log", Some(&["DROP TABLE"]), Phase::After)).is_ok());
	}

	#[test]
	fn test_wildcard_is_its_own_phase_key() {
		let store = test_store();
		create(&store, "everything", None, Phase::Before);
		assert!(store.create_trigger(to_create("replace", Some(&["CREATE TABLE"]), Phase::InsteadOf)).is_ok());

		let err = store.create_trigger(to_create("replace_all", None, Phase::InsteadOf)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_004");
	}

	#[test]
	fn test_wildcard_instead_of_allows_specific_before() {
		let store = test_store();
		create(&store, "replace_all", None, Phase::InsteadOf);
		assert!(store.create_trigger(to_create("check", Some(&["CREATE TABLE"]), Phase::Before)).is_ok());

		let err = store.create_trigger(to_create("check_all", None, Phase::Before)).unwrap_err();
		assert_eq!(err.code, "TRIGGER_004");
		assert!(err.label.as_ref().unwrap().contains("replace_all"));
	}

	#[test]
	fn test_after_vacuum_and_cluster_rejected() {
		let store = test_store();
		for tag in ["VACUUM", "CLUSTER"] {
			let err = store.create_trigger(to_create("a", Some(&[tag]), Phase::After)).unwrap_err();
			assert_eq!(err.code, "TRIGGER_005");
		}
		assert!(store.create_trigger(to_create("b", Some(&["VACUUM"]), Phase::Before)).is_ok());
	}

	#[test]
	fn test_registration_warnings() {
		let index = TriggerTarget::Commands(vec![CommandTag::parse("CREATE INDEX").unwrap()]);
		assert_eq!(registration_warnings(&index, Phase::After).len(), 1);
		assert!(registration_warnings(&index, Phase::Before).is_empty());

		let reindex = TriggerTarget::Commands(vec![CommandTag::parse("REINDEX").unwrap()]);
		assert_eq!(registration_warnings(&reindex, Phase::Before).len(), 1);
		assert!(registration_warnings(&TriggerTarget::Any, Phase::After).is_empty());

		let store = test_store();
		assert!(store.create_trigger(to_create("idx", Some(&["CREATE INDEX"]), Phase::After)).is_ok());
	}

	#[derive(Clone, Default)]
	struct Recorder(Arc<Mutex<Vec<TriggerChangedEvent>>>);

	impl EventListener<TriggerChangedEvent> for Recorder {
		fn on(&self, event: &TriggerChangedEvent) {
			self.0.lock().unwrap().push(event.clone());
		}
	}

	#[test]
	fn test_create_emits_event() {
		let store = test_store();
		let recorder = Recorder::default();
		store.event_bus().register::<TriggerChangedEvent, Recorder>(recorder.clone());

		let id = create(&store, "audit", None, Phase::Before);

		let events = recorder.0.lock().unwrap();
		assert_eq!(events.len(), 1);
		assert_eq!(events[0].trigger, id);
		assert_eq!(events[0].change, TriggerChange::Created);
		assert_eq!(events[0].version, store.version());
	}

	#[test]
	fn test_failed_create_does_not_emit() {
		let store = test_store();
		let recorder = Recorder::default();
		store.event_bus().register::<TriggerChangedEvent, Recorder>(recorder.clone());

		assert!(store.create_trigger(to_create("", None, Phase::Before)).is_err());
		assert!(recorder.0.lock().unwrap().is_empty());
		assert!(store.scan_all(store.version()).unwrap().is_empty());
	}
}
