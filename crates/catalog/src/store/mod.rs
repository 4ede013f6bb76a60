// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	ops::Deref,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use cmdtrigger_core::{
	CommitVersion,
	event::{
		EventBus,
		catalog::{TriggerChange, TriggerChangedEvent},
	},
	interface::{HandlerCatalog, OperationKind, RegistryAccessor, TriggerDef, TriggerId, TriggerRow},
};
use crossbeam_skiplist::SkipMap;
use parking_lot::Mutex;
use tracing::debug;

mod alter;
mod create;
mod decode;
mod drop;
mod find;
mod ident;
mod list;
mod rename;

pub use create::{TriggerToCreate, registration_warnings};
pub use decode::{decode_row, decode_tags};
pub use ident::TriggerIdent;

/// Every committed state of one trigger row. `None` marks a drop.
pub struct MultiVersionTriggerRow(SkipMap<CommitVersion, Option<TriggerRow>>);

impl MultiVersionTriggerRow {
	pub fn new() -> Self {
		Self(SkipMap::new())
	}

	pub fn insert(&self, version: CommitVersion, row: Option<TriggerRow>) {
		self.0.insert(version, row);
	}

	/// The row as visible at `version`.
	pub fn get(&self, version: CommitVersion) -> Option<TriggerRow> {
		self.0.range(..=version).next_back().and_then(|entry| entry.value().clone())
	}
}

impl Default for MultiVersionTriggerRow {
	fn default() -> Self {
		Self::new()
	}
}

/// In-memory, multi-version trigger registry.
///
/// Mutations are serialized by a writer lock, each one committed at the next
/// [`CommitVersion`]. Readers never block writers: a scan at version `V`
/// sees exactly the rows committed at or before `V`.
#[derive(Clone)]
pub struct TriggerStore(Arc<TriggerStoreInner>);

pub struct TriggerStoreInner {
	pub(crate) triggers: SkipMap<TriggerId, MultiVersionTriggerRow>,
	pub(crate) handlers: Arc<dyn HandlerCatalog>,
	pub(crate) event_bus: EventBus,
	writer: Mutex<()>,
	version: AtomicU64,
	next_id: AtomicU64,
}

impl Deref for TriggerStore {
	type Target = TriggerStoreInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Pending change to one row, applied by [`TriggerStore::commit`].
pub(crate) struct RowChange {
	pub(crate) id: TriggerId,
	pub(crate) name: String,
	pub(crate) row: Option<TriggerRow>,
	pub(crate) change: TriggerChange,
}

impl TriggerStore {
	pub fn new(handlers: Arc<dyn HandlerCatalog>, event_bus: EventBus) -> Self {
		Self(Arc::new(TriggerStoreInner {
			triggers: SkipMap::new(),
			handlers,
			event_bus,
			writer: Mutex::new(()),
			version: AtomicU64::new(CommitVersion::INITIAL.0),
			next_id: AtomicU64::new(1),
		}))
	}

	pub fn event_bus(&self) -> &EventBus {
		&self.event_bus
	}

	pub(crate) fn lock_writer(&self) -> parking_lot::MutexGuard<'_, ()> {
		self.writer.lock()
	}

	pub(crate) fn allocate_id(&self) -> TriggerId {
		TriggerId(self.next_id.fetch_add(1, Ordering::Relaxed))
	}

	/// Live rows at `version`, each decoded.
	pub(crate) fn live_defs(&self, version: CommitVersion) -> cmdtrigger_core::Result<Vec<TriggerDef>> {
		self.live_rows(version).iter().map(decode_row).collect()
	}

	/// Live rows at `version`, ordered by name then id.
	pub(crate) fn live_rows(&self, version: CommitVersion) -> Vec<TriggerRow> {
		let mut rows: Vec<TriggerRow> =
			self.triggers.iter().filter_map(|entry| entry.value().get(version)).collect();
		rows.sort_by(|l, r| l.name.cmp(&r.name).then(l.id.cmp(&r.id)));
		rows
	}

	/// Applies `change` at the next version, publishes the version, then
	/// notifies listeners. Must be called with the writer lock held; the
	/// notification happens after the caller releases it.
	pub(crate) fn commit(&self, change: RowChange) -> CommitVersion {
		let version = self.version().next();

		let multi = self.triggers.get_or_insert_with(change.id, MultiVersionTriggerRow::new);
		multi.value().insert(version, change.row);

		self.version.store(version.0, Ordering::Release);

		debug!(trigger = %change.name, version = %version, change = ?change.change, "trigger registry committed");
		version
	}

	pub(crate) fn notify(&self, version: CommitVersion, trigger: TriggerId, name: String, change: TriggerChange) {
		self.event_bus.emit(TriggerChangedEvent {
			version,
			trigger,
			name,
			change,
		});
	}
}

impl RegistryAccessor for TriggerStore {
	fn scan_by_kind(&self, kind: &OperationKind, version: CommitVersion) -> cmdtrigger_core::Result<Vec<TriggerRow>> {
		Ok(self.live_rows(version).into_iter().filter(|row| row.may_target(kind)).collect())
	}

	fn scan_all(&self, version: CommitVersion) -> cmdtrigger_core::Result<Vec<TriggerRow>> {
		Ok(self.live_rows(version))
	}

	fn version(&self) -> CommitVersion {
		CommitVersion(self.version.load(Ordering::Acquire))
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::sync::Arc;

	use cmdtrigger_core::{
		CommitVersion,
		event::EventBus,
		interface::{
			EnabledState, HandlerCatalog, HandlerRef, HandlerReturn, HandlerShape, HandlerSignature,
			OperationKind, Phase, RegistryAccessor, TriggerId, TriggerRow,
		},
	};

	use super::{MultiVersionTriggerRow, TriggerStore, TriggerToCreate};

	/// Handlers named `ext_*` take the descriptor, `both_*` exist in both
	/// shapes, `*_int` return an integer and `missing` does not exist.
	pub(crate) struct AnyHandler;

	impl HandlerCatalog for AnyHandler {
		fn find_handler(&self, name: &str, shape: HandlerShape) -> Option<HandlerSignature> {
			if name == "missing" {
				return None;
			}
			let offers_extended = name.starts_with("ext_") || name.starts_with("both_");
			let offers_plain = !name.starts_with("ext_");
			match shape {
				HandlerShape::Extended if !offers_extended => return None,
				HandlerShape::Plain if !offers_plain => return None,
				_ => {}
			}
			Some(HandlerSignature {
				name: name.to_string(),
				shape,
				returns: if name.ends_with("_int") {
					HandlerReturn::Other("int8".to_string())
				} else {
					HandlerReturn::Boolean
				},
			})
		}
	}

	pub(crate) fn test_store() -> TriggerStore {
		TriggerStore::new(Arc::new(AnyHandler), EventBus::new())
	}

	pub(crate) fn create(store: &TriggerStore, name: &str, tags: Option<&[&str]>, phase: Phase) -> TriggerId {
		store.create_trigger(to_create(name, tags, phase)).unwrap().id
	}

	pub(crate) fn to_create(name: &str, tags: Option<&[&str]>, phase: Phase) -> TriggerToCreate {
		TriggerToCreate {
			name: name.to_string(),
			tags: tags.map(|tags| tags.iter().map(|t| t.to_string()).collect()),
			phase,
			handler: format!("{}_fn", name),
		}
	}

	fn row(id: u64, name: &str) -> TriggerRow {
		TriggerRow {
			id: TriggerId(id),
			name: name.to_string(),
			phase: Phase::Before,
			handler: HandlerRef::plain("h"),
			enabled: EnabledState::FiresAlways,
			tags: None,
		}
	}

	#[test]
	fn test_multi_version_visibility() {
		let multi = MultiVersionTriggerRow::new();
		multi.insert(CommitVersion(2), Some(row(1, "a")));
		multi.insert(CommitVersion(5), None);

		assert_eq!(multi.get(CommitVersion(1)), None);
		assert_eq!(multi.get(CommitVersion(2)).map(|r| r.name), Some("a".to_string()));
		assert_eq!(multi.get(CommitVersion(4)).map(|r| r.name), Some("a".to_string()));
		assert_eq!(multi.get(CommitVersion(5)), None);
		assert_eq!(multi.get(CommitVersion(9)), None);
	}

	#[test]
	fn test_every_mutation_advances_version() {
		let store = test_store();
		assert_eq!(store.version(), CommitVersion::INITIAL);

		create(&store, "a", None, Phase::Before);
		assert_eq!(store.version(), CommitVersion(1));

		create(&store, "b", Some(&["CREATE TABLE"]), Phase::After);
		assert_eq!(store.version(), CommitVersion(2));
	}

	#[test]
	fn test_scan_honours_version() {
		let store = test_store();
		create(&store, "b", None, Phase::Before);
		create(&store, "a", None, Phase::Before);

		assert!(store.scan_all(CommitVersion(0)).unwrap().is_empty());
		let names: Vec<_> = store.scan_all(CommitVersion(1)).unwrap().into_iter().map(|r| r.name).collect();
		assert_eq!(names, vec!["b"]);
		let names: Vec<_> = store.scan_all(CommitVersion(2)).unwrap().into_iter().map(|r| r.name).collect();
		assert_eq!(names, vec!["a", "b"]);
	}

	#[test]
	fn test_scan_by_kind() {
		let store = test_store();
		create(&store, "any", None, Phase::Before);
		create(&store, "create", Some(&["CREATE TABLE"]), Phase::Before);
		create(&store, "drop", Some(&["DROP TABLE"]), Phase::Before);

		let kind = OperationKind::parse("CREATE TABLE").unwrap();
		let names: Vec<_> =
			store.scan_by_kind(&kind, store.version()).unwrap().into_iter().map(|r| r.name).collect();
		assert_eq!(names, vec!["any", "create"]);
	}
}
