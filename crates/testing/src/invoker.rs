// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use cmdtrigger_core::{
	Value, error,
	error::diagnostic::handler::handler_failed,
	interface::{HandlerArgs, HandlerInvoker, HandlerRef, HandlerShape, ObjectId},
};
use parking_lot::Mutex;

pub type HandlerCallback = Arc<dyn Fn(&HandlerArgs<'_>) -> cmdtrigger_core::Result<Option<Value>> + Send + Sync>;

/// What a scripted handler does when invoked.
#[derive(Clone)]
pub enum HandlerBehavior {
	ReturnBool(bool),
	Return(Value),
	Void,
	Fail(String),
	/// Runs arbitrary logic, which may dispatch nested operations.
	Callback(HandlerCallback),
}

impl HandlerBehavior {
	pub fn callback<F>(f: F) -> Self
	where
		F: Fn(&HandlerArgs<'_>) -> cmdtrigger_core::Result<Option<Value>> + Send + Sync + 'static,
	{
		HandlerBehavior::Callback(Arc::new(f))
	}
}

/// One recorded handler call, with its arguments copied out of the
/// dispatcher's scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
	pub handler: String,
	pub shape: HandlerShape,
	pub when: String,
	pub tag: Option<String>,
	pub object_id: Option<ObjectId>,
	pub schema: Option<String>,
	pub object_name: Option<String>,
	pub context: Option<String>,
	pub had_descriptor: bool,
	/// Number of positional arguments the handler was called with.
	pub arity: usize,
}

/// Handler invoker that plays back scripted behaviours and records every
/// call. Handlers without a script return nothing.
#[derive(Clone, Default)]
pub struct RecordingInvoker(Arc<RecordingInvokerInner>);

#[derive(Default)]
struct RecordingInvokerInner {
	behaviors: Mutex<HashMap<String, HandlerBehavior>>,
	invocations: Mutex<Vec<Invocation>>,
}

impl RecordingInvoker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(self, handler: &str, behavior: HandlerBehavior) -> Self {
		self.set(handler, behavior);
		self
	}

	pub fn set(&self, handler: &str, behavior: HandlerBehavior) {
		self.0.behaviors.lock().insert(handler.to_string(), behavior);
	}

	pub fn shared(&self) -> Arc<dyn HandlerInvoker> {
		Arc::new(self.clone())
	}

	pub fn invocations(&self) -> Vec<Invocation> {
		self.0.invocations.lock().clone()
	}

	/// Invoked handler names in call order.
	pub fn handler_names(&self) -> Vec<String> {
		self.0.invocations.lock().iter().map(|call| call.handler.clone()).collect()
	}

	pub fn calls_to(&self, handler: &str) -> usize {
		self.0.invocations.lock().iter().filter(|call| call.handler == handler).count()
	}

	pub fn clear(&self) {
		self.0.invocations.lock().clear();
	}
}

impl HandlerInvoker for RecordingInvoker {
	fn invoke(&self, handler: &HandlerRef, args: &HandlerArgs<'_>) -> cmdtrigger_core::Result<Option<Value>> {
		self.0.invocations.lock().push(Invocation {
			handler: handler.name.clone(),
			shape: handler.shape,
			when: args.when.to_string(),
			tag: args.tag.map(str::to_string),
			object_id: args.object_id,
			schema: args.schema.map(str::to_string),
			object_name: args.object_name.map(str::to_string),
			context: args.context.map(str::to_string),
			had_descriptor: args.descriptor.is_some(),
			arity: args.positional().len(),
		});

		// released before running the behaviour so callbacks can re-enter
		let behavior = self.0.behaviors.lock().get(&handler.name).cloned();
		match behavior {
			None | Some(HandlerBehavior::Void) => Ok(None),
			Some(HandlerBehavior::ReturnBool(value)) => Ok(Some(Value::Boolean(value))),
			Some(HandlerBehavior::Return(value)) => Ok(Some(value)),
			Some(HandlerBehavior::Fail(reason)) => Err(error!(handler_failed(&handler.name, reason))),
			Some(HandlerBehavior::Callback(callback)) => callback(args),
		}
	}
}

#[cfg(test)]
mod tests {
	use cmdtrigger_core::interface::{HandlerArgs, HandlerInvoker, HandlerRef};

	use super::*;

	fn args() -> HandlerArgs<'static> {
		HandlerArgs {
			when: "BEFORE",
			tag: Some("CREATE TABLE"),
			object_id: None,
			schema: None,
			object_name: Some("users"),
			context: None,
			descriptor: None,
		}
	}

	#[test]
	fn test_records_and_plays_back() {
		let invoker = RecordingInvoker::new()
			.with("veto", HandlerBehavior::ReturnBool(false))
			.with("boom", HandlerBehavior::Fail("out of memory".to_string()));

		assert_eq!(invoker.invoke(&HandlerRef::plain("veto"), &args()).unwrap(), Some(Value::Boolean(false)));
		assert_eq!(invoker.invoke(&HandlerRef::plain("unscripted"), &args()).unwrap(), None);

		let err = invoker.invoke(&HandlerRef::plain("boom"), &args()).unwrap_err();
		assert_eq!(err.code, "HANDLER_001");

		assert_eq!(invoker.handler_names(), vec!["veto", "unscripted", "boom"]);
		assert_eq!(invoker.invocations()[0].object_name.as_deref(), Some("users"));
	}

	#[test]
	fn test_callback_sees_arguments() {
		let invoker = RecordingInvoker::new().with(
			"echo",
			HandlerBehavior::callback(|args| Ok(args.tag.map(Value::from))),
		);

		assert_eq!(
			invoker.invoke(&HandlerRef::plain("echo"), &args()).unwrap(),
			Some(Value::Utf8("CREATE TABLE".to_string()))
		);
	}
}
