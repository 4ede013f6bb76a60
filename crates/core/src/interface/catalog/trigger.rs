// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::interface::{CommandTag, EnabledState, HandlerRef, OperationKind, Phase, TriggerId};

/// The command tags a trigger is restricted to, or every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerTarget {
	Any,
	Commands(Vec<CommandTag>),
}

impl TriggerTarget {
	/// Cache keys this target populates.
	pub fn kinds(&self) -> Vec<OperationKind> {
		match self {
			TriggerTarget::Any => vec![OperationKind::Any],
			TriggerTarget::Commands(tags) => tags.iter().cloned().map(OperationKind::Command).collect(),
		}
	}

	pub fn is_any(&self) -> bool {
		matches!(self, TriggerTarget::Any)
	}

	pub fn contains(&self, tag: &CommandTag) -> bool {
		match self {
			TriggerTarget::Any => false,
			TriggerTarget::Commands(tags) => tags.contains(tag),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerDef {
	pub id: TriggerId,
	pub name: String,
	pub target: TriggerTarget,
	pub phase: Phase,
	pub handler: HandlerRef,
	pub enabled: EnabledState,
}

impl TriggerDef {
	pub fn to_row(&self) -> crate::Result<TriggerRow> {
		let tags = match &self.target {
			TriggerTarget::Any => None,
			TriggerTarget::Commands(tags) => Some(EncodedTags::encode(tags)?),
		};

		Ok(TriggerRow {
			id: self.id,
			name: self.name.clone(),
			phase: self.phase,
			handler: self.handler.clone(),
			enabled: self.enabled,
			tags,
		})
	}
}

/// Postcard encoded list of command tag strings. Absent on rows that target
/// every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedTags(pub Vec<u8>);

impl EncodedTags {
	pub fn encode(tags: &[CommandTag]) -> crate::Result<Self> {
		let raw: Vec<&str> = tags.iter().map(|tag| tag.as_str()).collect();
		Ok(Self(postcard::to_allocvec(&raw)?))
	}

	/// Decodes the raw strings without validating them.
	pub fn decode_raw(&self) -> crate::Result<Vec<String>> {
		Ok(postcard::from_bytes(&self.0)?)
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}
}

/// A trigger registration as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerRow {
	pub id: TriggerId,
	pub name: String,
	pub phase: Phase,
	pub handler: HandlerRef,
	pub enabled: EnabledState,
	pub tags: Option<EncodedTags>,
}

impl TriggerRow {
	/// Whether this row could target `kind`. A tag list that does not decode
	/// counts as a match so the caller sees the corruption.
	pub fn may_target(&self, kind: &OperationKind) -> bool {
		match (&self.tags, kind) {
			(None, _) => true,
			(Some(_), OperationKind::Any) => false,
			(Some(tags), OperationKind::Command(tag)) => match tags.decode_raw() {
				Ok(raw) => raw.iter().any(|t| t == tag.as_str()),
				Err(_) => true,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tag(s: &str) -> CommandTag {
		CommandTag::parse(s).unwrap()
	}

	fn def(target: TriggerTarget) -> TriggerDef {
		TriggerDef {
			id: TriggerId(1),
			name: "audit".to_string(),
			target,
			phase: Phase::Before,
			handler: HandlerRef::plain("audit_fn"),
			enabled: EnabledState::FiresOnOrigin,
		}
	}

	#[test]
	fn test_any_target_has_no_tags() {
		let row = def(TriggerTarget::Any).to_row().unwrap();
		assert!(row.tags.is_none());
		assert!(row.may_target(&OperationKind::Any));
		assert!(row.may_target(&OperationKind::Command(tag("DROP TABLE"))));
	}

	#[test]
	fn test_command_target_encodes_tags() {
		let row = def(TriggerTarget::Commands(vec![tag("CREATE TABLE"), tag("DROP TABLE")])).to_row().unwrap();
		let raw = row.tags.as_ref().unwrap().decode_raw().unwrap();
		assert_eq!(raw, vec!["CREATE TABLE".to_string(), "DROP TABLE".to_string()]);

		assert!(row.may_target(&OperationKind::Command(tag("DROP TABLE"))));
		assert!(!row.may_target(&OperationKind::Command(tag("ALTER TABLE"))));
		assert!(!row.may_target(&OperationKind::Any));
	}

	#[test]
	fn test_undecodable_tags_may_target_anything() {
		let mut row = def(TriggerTarget::Any).to_row().unwrap();
		row.tags = Some(EncodedTags(vec![0xff, 0xff, 0xff]));
		assert!(row.tags.as_ref().unwrap().decode_raw().is_err());
		assert!(row.may_target(&OperationKind::Command(tag("VACUUM"))));
	}

	#[test]
	fn test_target_kinds() {
		assert_eq!(TriggerTarget::Any.kinds(), vec![OperationKind::Any]);
		let target = TriggerTarget::Commands(vec![tag("CREATE INDEX")]);
		assert_eq!(target.kinds(), vec![OperationKind::Command(tag("CREATE INDEX"))]);
		assert!(target.contains(&tag("CREATE INDEX")));
	}
}
