// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
	ops::Deref,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use cmdtrigger_core::{
	CommitVersion,
	interface::{HandlerRef, OperationKind, Phase, RegistryAccessor, ReplicationRole, TriggerId},
};
use parking_lot::RwLock;
use tracing::debug;

mod build;
mod listener;

pub use listener::CacheInvalidationListener;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
	pub kind: OperationKind,
	pub phase: Phase,
}

impl Display for CacheKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.phase, self.kind)
	}
}

/// One handler to fire, in the order it appears in its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEntry {
	pub id: TriggerId,
	pub name: String,
	pub handler: HandlerRef,
}

/// A complete build. Never updated in place.
#[derive(Debug)]
pub struct CacheState {
	pub epoch: u64,
	pub version: CommitVersion,
	pub role: ReplicationRole,
	pub(crate) entries: HashMap<CacheKey, Arc<[TriggerEntry]>>,
}

impl CacheState {
	pub fn get(&self, kind: &OperationKind, phase: Phase) -> Arc<[TriggerEntry]> {
		self.entries
			.get(&CacheKey {
				kind: kind.clone(),
				phase,
			})
			.cloned()
			.unwrap_or_else(|| Arc::from(Vec::new()))
	}

	pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
		self.entries.keys()
	}
}

/// Process-local map from (operation kind, phase) to the ordered handlers
/// registered for it.
///
/// Built lazily on the first lookup and rebuilt wholesale after
/// [`TriggerCache::invalidate`]. A build is published only if no
/// invalidation happened while it ran; otherwise it is discarded and redone,
/// so a lookup never returns data computed before an invalidation it could
/// have observed.
#[derive(Clone)]
pub struct TriggerCache(Arc<TriggerCacheInner>);

pub struct TriggerCacheInner {
	registry: Arc<dyn RegistryAccessor>,
	role: RwLock<ReplicationRole>,
	state: RwLock<Option<Arc<CacheState>>>,
	epoch: AtomicU64,
	builds: AtomicU64,
}

impl Deref for TriggerCache {
	type Target = TriggerCacheInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl TriggerCache {
	pub fn new(registry: Arc<dyn RegistryAccessor>, role: ReplicationRole) -> Self {
		Self(Arc::new(TriggerCacheInner {
			registry,
			role: RwLock::new(role),
			state: RwLock::new(None),
			epoch: AtomicU64::new(0),
			builds: AtomicU64::new(0),
		}))
	}

	/// Handlers registered for exactly `kind` in `phase`, building the cache
	/// first if needed. Wildcard registrations are stored under
	/// [`OperationKind::Any`] and are not merged in here.
	pub fn lookup(&self, kind: &OperationKind, phase: Phase) -> cmdtrigger_core::Result<Arc<[TriggerEntry]>> {
		Ok(self.state()?.get(kind, phase))
	}

	/// The current build, performing one if the cache is empty.
	pub fn state(&self) -> cmdtrigger_core::Result<Arc<CacheState>> {
		loop {
			let epoch = self.epoch.load(Ordering::Acquire);

			if let Some(state) = self.state.read().as_ref() {
				if state.epoch == epoch {
					return Ok(state.clone());
				}
			}

			let role = *self.role.read();
			let version = self.registry.version();
			let built = Arc::new(build::build(self.registry.as_ref(), version, role, epoch)?);
			self.builds.fetch_add(1, Ordering::Relaxed);

			let mut state = self.state.write();
			if self.epoch.load(Ordering::Acquire) != epoch {
				debug!(epoch, "trigger cache invalidated during build, rebuilding");
				continue;
			}
			*state = Some(built.clone());
			return Ok(built);
		}
	}

	/// Discards the whole cache. Safe to call at any time.
	pub fn invalidate(&self) {
		let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
		*self.state.write() = None;
		debug!(epoch, "trigger cache invalidated");
	}

	pub fn role(&self) -> ReplicationRole {
		*self.role.read()
	}

	/// Changes the role enabled states are resolved against and invalidates
	/// the cache, which only reflects the role it was built under.
	pub fn set_role(&self, role: ReplicationRole) {
		*self.role.write() = role;
		self.invalidate();
	}

	pub fn is_built(&self) -> bool {
		let epoch = self.epoch.load(Ordering::Acquire);
		self.state.read().as_ref().is_some_and(|state| state.epoch == epoch)
	}

	/// Number of builds performed since creation, including discarded ones.
	pub fn build_count(&self) -> u64 {
		self.builds.load(Ordering::Relaxed)
	}
}
