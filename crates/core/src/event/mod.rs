// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::{Any, TypeId},
	collections::HashMap,
	sync::Arc,
};

use parking_lot::RwLock;

pub mod catalog;

pub trait Event: Any + Send + Sync + Clone + 'static {
	fn as_any(&self) -> &dyn Any;
	fn into_any(self) -> Box<dyn Any + Send>;
}

pub trait EventListener<E>: Send + Sync + 'static
where
	E: Event,
{
	fn on(&self, event: &E);
}

#[macro_export]
macro_rules! impl_event {
	($ty:ty) => {
		impl $crate::event::Event for $ty {
			fn as_any(&self) -> &dyn std::any::Any {
				self
			}

			fn into_any(self) -> Box<dyn std::any::Any + Send> {
				Box::new(self)
			}
		}
	};
}

type Listeners<E> = Vec<Arc<dyn EventListener<E>>>;

/// Synchronous event bus.
///
/// `emit()` delivers the event to every listener of its type on the calling
/// thread, in registration order, before returning. Listeners observe a
/// registry change before the mutating call returns to its caller.
#[derive(Clone, Default)]
pub struct EventBus {
	listeners: Arc<RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>>,
}

impl EventBus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a listener for an event type.
	pub fn register<E, L>(&self, listener: L)
	where
		E: Event,
		L: EventListener<E>,
	{
		let listener: Arc<dyn EventListener<E>> = Arc::new(listener);
		let mut listeners = self.listeners.write();
		let entry = listeners.entry(TypeId::of::<E>()).or_insert_with(|| Box::new(Listeners::<E>::new()));
		if let Some(list) = entry.downcast_mut::<Listeners<E>>() {
			list.push(listener);
		}
	}

	/// Emit an event to all registered listeners.
	pub fn emit<E: Event>(&self, event: E) {
		// listeners may register or emit while handling; do not hold the lock
		let snapshot: Listeners<E> = {
			let listeners = self.listeners.read();
			match listeners.get(&TypeId::of::<E>()).and_then(|entry| entry.downcast_ref::<Listeners<E>>()) {
				Some(list) => list.clone(),
				None => return,
			}
		};

		for listener in snapshot {
			listener.on(&event);
		}
	}

	pub fn listener_count<E: Event>(&self) -> usize {
		self.listeners
			.read()
			.get(&TypeId::of::<E>())
			.and_then(|entry| entry.downcast_ref::<Listeners<E>>())
			.map(|list| list.len())
			.unwrap_or(0)
	}
}
