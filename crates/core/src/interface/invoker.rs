// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use smallvec::SmallVec;

use crate::{
	Value,
	interface::{HandlerRef, HandlerShape, HandlerSignature, ObjectId, OperationDescriptor},
};

/// Arguments for one handler call. Text borrows from the dispatch call's
/// scoped arena.
#[derive(Debug, Clone, Copy)]
pub struct HandlerArgs<'a> {
	pub when: &'a str,
	pub tag: Option<&'a str>,
	pub object_id: Option<ObjectId>,
	pub schema: Option<&'a str>,
	pub object_name: Option<&'a str>,
	/// Only populated for INSTEAD OF and AFTER.
	pub context: Option<&'a str>,
	/// Only populated for [`HandlerShape::Extended`] handlers.
	pub descriptor: Option<&'a OperationDescriptor>,
}

#[derive(Debug, Clone, Copy)]
pub enum Argument<'a> {
	Text(&'a str),
	Oid(ObjectId),
	Null,
	Internal(&'a OperationDescriptor),
}

impl<'a> HandlerArgs<'a> {
	/// Positional argument list in calling-convention order.
	pub fn positional(&self) -> SmallVec<[Argument<'a>; 6]> {
		let mut args = SmallVec::new();
		args.push(Argument::Text(self.when));
		args.push(self.tag.map(Argument::Text).unwrap_or(Argument::Null));
		args.push(self.object_id.map(Argument::Oid).unwrap_or(Argument::Null));
		args.push(self.schema.map(Argument::Text).unwrap_or(Argument::Null));
		args.push(self.object_name.map(Argument::Text).unwrap_or(Argument::Null));
		if let Some(descriptor) = self.descriptor {
			args.push(Argument::Internal(descriptor));
		}
		args
	}
}

/// Executes handler logic. Failures are returned unmodified to whoever fired
/// the trigger.
pub trait HandlerInvoker: Send + Sync {
	fn invoke(&self, handler: &HandlerRef, args: &HandlerArgs<'_>) -> crate::Result<Option<Value>>;
}

/// Looks up handler overloads when a trigger is registered.
pub trait HandlerCatalog: Send + Sync {
	fn find_handler(&self, name: &str, shape: HandlerShape) -> Option<HandlerSignature>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::interface::CommandTag;

	#[test]
	fn test_plain_positional() {
		let args = HandlerArgs {
			when: "BEFORE",
			tag: Some("CREATE TABLE"),
			object_id: None,
			schema: Some("public"),
			object_name: None,
			context: None,
			descriptor: None,
		};

		let positional = args.positional();
		assert_eq!(positional.len(), HandlerShape::Plain.arity());
		assert!(matches!(positional[0], Argument::Text("BEFORE")));
		assert!(matches!(positional[2], Argument::Null));
		assert!(matches!(positional[3], Argument::Text("public")));
		assert!(matches!(positional[4], Argument::Null));
	}

	#[test]
	fn test_extended_positional() {
		let descriptor = OperationDescriptor::new(CommandTag::parse("CREATE TABLE").unwrap());
		let args = HandlerArgs {
			when: "AFTER",
			tag: Some("CREATE TABLE"),
			object_id: Some(ObjectId(16384)),
			schema: None,
			object_name: Some("users"),
			context: Some("CREATE TABLE users ()"),
			descriptor: Some(&descriptor),
		};

		let positional = args.positional();
		assert_eq!(positional.len(), HandlerShape::Extended.arity());
		assert!(matches!(positional[2], Argument::Oid(ObjectId(16384))));
		assert!(matches!(positional[5], Argument::Internal(_)));
	}
}
