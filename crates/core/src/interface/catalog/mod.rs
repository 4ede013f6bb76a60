// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod enabled;
mod handler;
mod id;
mod kind;
mod phase;
mod trigger;

pub use enabled::{EnabledState, ReplicationRole};
pub use handler::{HandlerRef, HandlerReturn, HandlerShape, HandlerSignature};
pub use id::{ObjectId, TriggerId};
pub use kind::{ANY_KIND_MARKER, CommandTag, OperationKind};
pub use phase::{Phase, PhaseClass};
pub use trigger::{EncodedTags, TriggerDef, TriggerRow, TriggerTarget};
