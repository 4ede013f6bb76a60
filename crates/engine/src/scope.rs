// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bounded-lifetime memory for one dispatch call.
//!
//! Handler arguments are materialized into a bump arena owned by a
//! [`TriggerScope`]. Entering the scope hands out a [`ScopeGuard`]; dropping
//! the guard releases everything allocated through it, on every exit path
//! including cancellation and handler failure.

use bumpalo::Bump;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopePolicy {
	/// The arena is reset on release and its capacity kept for the next call.
	Reuse,
	/// A new arena is created on entry and torn down on release.
	Fresh,
}

pub struct TriggerScope {
	arena: Bump,
	policy: ScopePolicy,
	capacity: usize,
	releases: u64,
}

impl TriggerScope {
	pub fn new(policy: ScopePolicy, capacity: usize) -> Self {
		let arena = match policy {
			ScopePolicy::Reuse => Bump::with_capacity(capacity),
			ScopePolicy::Fresh => Bump::new(),
		};
		Self {
			arena,
			policy,
			capacity,
			releases: 0,
		}
	}

	pub fn reusable(capacity: usize) -> Self {
		Self::new(ScopePolicy::Reuse, capacity)
	}

	pub fn fresh(capacity: usize) -> Self {
		Self::new(ScopePolicy::Fresh, capacity)
	}

	pub fn policy(&self) -> ScopePolicy {
		self.policy
	}

	pub fn enter(&mut self) -> ScopeGuard<'_> {
		if self.policy == ScopePolicy::Fresh {
			self.arena = Bump::with_capacity(self.capacity);
		}
		ScopeGuard {
			scope: self,
		}
	}

	/// Number of times the scope has been released.
	pub fn releases(&self) -> u64 {
		self.releases
	}

	/// Bytes currently held by the arena, including retained capacity.
	pub fn allocated_bytes(&self) -> usize {
		self.arena.allocated_bytes()
	}

	fn release(&mut self) {
		match self.policy {
			ScopePolicy::Reuse => self.arena.reset(),
			ScopePolicy::Fresh => self.arena = Bump::new(),
		}
		self.releases += 1;
	}
}

pub struct ScopeGuard<'s> {
	scope: &'s mut TriggerScope,
}

impl<'s> ScopeGuard<'s> {
	pub fn arena(&self) -> &Bump {
		&self.scope.arena
	}

	pub fn alloc_str(&self, value: &str) -> &str {
		self.scope.arena.alloc_str(value)
	}
}

impl Drop for ScopeGuard<'_> {
	fn drop(&mut self) {
		self.scope.release();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_guard_drop_releases() {
		let mut scope = TriggerScope::reusable(64);
		{
			let guard = scope.enter();
			assert_eq!(guard.alloc_str("BEFORE"), "BEFORE");
		}
		assert_eq!(scope.releases(), 1);

		{
			let _guard = scope.enter();
		}
		assert_eq!(scope.releases(), 2);
	}

	#[test]
	fn test_release_on_early_return() {
		fn fails(scope: &mut TriggerScope) -> Result<(), &'static str> {
			let guard = scope.enter();
			guard.alloc_str("CREATE TABLE users (id int)");
			Err("handler failed")
		}

		let mut scope = TriggerScope::fresh(64);
		assert!(fails(&mut scope).is_err());
		assert_eq!(scope.releases(), 1);
	}

	#[test]
	fn test_fresh_scope_tears_down_arena() {
		let mut scope = TriggerScope::fresh(4096);
		{
			let guard = scope.enter();
			guard.alloc_str(&"x".repeat(1024));
			assert!(guard.arena().allocated_bytes() >= 1024);
		}
		assert_eq!(scope.allocated_bytes(), 0);
	}

	#[test]
	fn test_reuse_scope_keeps_capacity() {
		let mut scope = TriggerScope::reusable(4096);
		{
			let guard = scope.enter();
			guard.alloc_str(&"x".repeat(1024));
		}
		let retained = scope.allocated_bytes();
		assert!(retained > 0);

		{
			let guard = scope.enter();
			guard.alloc_str(&"y".repeat(1024));
		}
		assert_eq!(scope.allocated_bytes(), retained);
	}
}
