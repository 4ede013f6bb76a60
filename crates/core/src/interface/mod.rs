// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod catalog;
mod descriptor;
mod invoker;
mod registry;

pub use catalog::*;
pub use descriptor::OperationDescriptor;
pub use invoker::{Argument, HandlerArgs, HandlerCatalog, HandlerInvoker};
pub use registry::RegistryAccessor;
