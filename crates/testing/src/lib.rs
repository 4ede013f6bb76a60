// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use catalog::TestCatalog;
pub use handlers::StaticHandlerCatalog;
pub use invoker::{HandlerBehavior, HandlerCallback, Invocation, RecordingInvoker};

mod catalog;
mod handlers;
mod invoker;
