// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use cmdtrigger_core::{
	CommitVersion,
	interface::{RegistryAccessor, TriggerDef},
};
use tracing::instrument;

use crate::{CatalogError, TriggerIdent, TriggerStore, store::decode::decode_row};

impl TriggerStore {
	#[instrument(name = "trigger::catalog::find", level = "trace", skip(self))]
	pub fn find_trigger(&self, ident: &TriggerIdent) -> cmdtrigger_core::Result<Option<TriggerDef>> {
		self.find_trigger_at(ident, self.version())
	}

	/// Resolves `ident` against the rows visible at `version`. A bare name
	/// matching more than one trigger is ambiguous.
	pub fn find_trigger_at(
		&self,
		ident: &TriggerIdent,
		version: CommitVersion,
	) -> cmdtrigger_core::Result<Option<TriggerDef>> {
		let mut matches: Vec<TriggerDef> = Vec::new();
		for row in self.live_rows(version) {
			if row.name != ident.name {
				continue;
			}
			let def = decode_row(&row)?;
			if ident.matches(&def) {
				matches.push(def);
			}
		}

		if matches.len() > 1 {
			return Err(CatalogError::AmbiguousTriggerName {
				name: ident.name.clone(),
				candidates: matches.iter().map(|def| format!("{} ON {}", def.name, describe(def))).collect(),
			}
			.into());
		}

		Ok(matches.pop())
	}

	/// Like [`TriggerStore::find_trigger_at`], but a missing trigger is an
	/// error.
	pub fn get_trigger_at(&self, ident: &TriggerIdent, version: CommitVersion) -> cmdtrigger_core::Result<TriggerDef> {
		self.find_trigger_at(ident, version)?.ok_or_else(|| trigger_not_found(ident))
	}
}

pub(crate) fn trigger_not_found(ident: &TriggerIdent) -> cmdtrigger_core::Error {
	CatalogError::TriggerNotFound {
		name: ident.name.clone(),
		kind: ident.kind.as_ref().map(|kind| kind.to_string()),
	}
	.into()
}

pub(crate) fn describe(def: &TriggerDef) -> String {
	def.target.kinds().iter().map(|kind| kind.to_string()).collect::<Vec<_>>().join(", ")
}
