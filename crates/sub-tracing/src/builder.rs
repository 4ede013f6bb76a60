// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::TracingSubsystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
	/// Human readable, one line per event.
	Text,
	/// One JSON object per event.
	Json,
}

/// Builder for configuring the tracing subsystem
pub struct TracingBuilder {
	filter: String,
	env_override: bool,
	format: OutputFormat,
	with_target: bool,
	with_thread_names: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: "info".to_string(),
			env_override: true,
			format: OutputFormat::Text,
			with_target: true,
			with_thread_names: false,
		}
	}

	/// Filter directive, e.g. `warn,cmdtrigger_engine=trace`.
	pub fn filter(mut self, directive: impl Into<String>) -> Self {
		self.filter = directive.into();
		self
	}

	/// Let `RUST_LOG` replace the configured filter when it is set.
	pub fn env_override(mut self, enabled: bool) -> Self {
		self.env_override = enabled;
		self
	}

	pub fn format(mut self, format: OutputFormat) -> Self {
		self.format = format;
		self
	}

	pub fn json(self) -> Self {
		self.format(OutputFormat::Json)
	}

	pub fn with_target(mut self, enabled: bool) -> Self {
		self.with_target = enabled;
		self
	}

	pub fn with_thread_names(mut self, enabled: bool) -> Self {
		self.with_thread_names = enabled;
		self
	}

	pub fn build(self) -> TracingSubsystem {
		TracingSubsystem {
			filter: self.filter,
			env_override: self.env_override,
			format: self.format,
			with_target: self.with_target,
			with_thread_names: self.with_thread_names,
		}
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
