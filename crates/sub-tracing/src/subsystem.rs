// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{OutputFormat, SubsystemError};

/// Process-wide tracing subscriber, installed by [`TracingSubsystem::init`].
#[derive(Debug, Clone)]
pub struct TracingSubsystem {
	pub(crate) filter: String,
	pub(crate) env_override: bool,
	pub(crate) format: OutputFormat,
	pub(crate) with_target: bool,
	pub(crate) with_thread_names: bool,
}

impl TracingSubsystem {
	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn format(&self) -> OutputFormat {
		self.format
	}

	/// Installs the global subscriber. Fails if one is already installed.
	pub fn init(&self) -> cmdtrigger_core::Result<()> {
		let filter = self.env_filter()?;
		let registry = tracing_subscriber::registry().with(filter);

		let installed = match self.format {
			OutputFormat::Text => registry
				.with(fmt::layer().with_target(self.with_target).with_thread_names(self.with_thread_names))
				.try_init(),
			OutputFormat::Json => registry
				.with(fmt::layer().json().with_target(self.with_target).with_thread_names(self.with_thread_names))
				.try_init(),
		};
		installed.map_err(|err| SubsystemError::AlreadyInstalled {
			reason: err.to_string(),
		})?;

		debug!(filter = %self.filter, format = ?self.format, "tracing subsystem installed");
		Ok(())
	}

	pub(crate) fn env_filter(&self) -> cmdtrigger_core::Result<EnvFilter> {
		if self.env_override {
			if let Ok(filter) = EnvFilter::try_from_default_env() {
				return Ok(filter);
			}
		}

		EnvFilter::try_new(&self.filter).map_err(|err| {
			SubsystemError::InvalidFilter {
				directive: self.filter.clone(),
				reason: err.to_string(),
			}
			.into()
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::{OutputFormat, TracingBuilder};

	#[test]
	fn test_builder_defaults() {
		let subsystem = TracingBuilder::default().build();
		assert_eq!(subsystem.filter(), "info");
		assert_eq!(subsystem.format(), OutputFormat::Text);
	}

	#[test]
	fn test_builder_overrides() {
		let subsystem = TracingBuilder::new().filter("cmdtrigger_engine=trace").json().build();
		assert_eq!(subsystem.filter(), "cmdtrigger_engine=trace");
		assert_eq!(subsystem.format(), OutputFormat::Json);
	}

	#[test]
	fn test_invalid_filter() {
		let subsystem = TracingBuilder::new().env_override(false).filter("cmdtrigger=loud").build();

		let err = subsystem.env_filter().unwrap_err();
		assert_eq!(err.code, "SUBSYSTEM_002");
		assert_eq!(err.statement.as_deref(), Some("cmdtrigger=loud"));
	}

	#[test]
	fn test_second_install_fails() {
		let subsystem = TracingBuilder::new().env_override(false).filter("warn").json().build();
		// another subscriber may already be installed in this process
		let _ = subsystem.init();

		let err = subsystem.init().unwrap_err();
		assert_eq!(err.code, "SUBSYSTEM_001");
	}
}
