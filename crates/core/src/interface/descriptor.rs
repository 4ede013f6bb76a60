// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, fmt, sync::Arc};

use crate::interface::{CommandTag, ObjectId};

/// Describes one operation about to be executed by the host. Lives for the
/// duration of a single dispatch call.
#[derive(Clone)]
pub struct OperationDescriptor {
	pub kind: CommandTag,
	pub object_id: Option<ObjectId>,
	pub schema: Option<String>,
	pub object_name: Option<String>,
	/// Serialized operation context, visible to INSTEAD OF and AFTER handlers.
	pub context: Option<String>,
	/// Host-specific representation of the operation, handed to extended
	/// handlers as an opaque value.
	pub parsetree: Option<Arc<dyn Any + Send + Sync>>,
}

impl OperationDescriptor {
	pub fn new(kind: CommandTag) -> Self {
		Self {
			kind,
			object_id: None,
			schema: None,
			object_name: None,
			context: None,
			parsetree: None,
		}
	}

	pub fn object_id(mut self, id: impl Into<ObjectId>) -> Self {
		self.object_id = Some(id.into());
		self
	}

	pub fn schema(mut self, schema: impl Into<String>) -> Self {
		self.schema = Some(schema.into());
		self
	}

	pub fn object_name(mut self, name: impl Into<String>) -> Self {
		self.object_name = Some(name.into());
		self
	}

	pub fn context(mut self, context: impl Into<String>) -> Self {
		self.context = Some(context.into());
		self
	}

	pub fn parsetree<T: Any + Send + Sync>(mut self, parsetree: T) -> Self {
		self.parsetree = Some(Arc::new(parsetree));
		self
	}

	pub fn parsetree_as<T: Any>(&self) -> Option<&T> {
		self.parsetree.as_ref().and_then(|tree| tree.downcast_ref::<T>())
	}

	/// `schema.name`, `name`, or the command tag when no object is named.
	pub fn display_target(&self) -> String {
		match (&self.schema, &self.object_name) {
			(Some(schema), Some(name)) => format!("{}.{}", schema, name),
			(None, Some(name)) => name.clone(),
			_ => self.kind.to_string(),
		}
	}
}

impl fmt::Debug for OperationDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OperationDescriptor")
			.field("kind", &self.kind)
			.field("object_id", &self.object_id)
			.field("schema", &self.schema)
			.field("object_name", &self.object_name)
			.field("context", &self.context)
			.field("parsetree", &self.parsetree.is_some())
			.finish()
	}
}
