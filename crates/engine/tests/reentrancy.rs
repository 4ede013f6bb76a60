// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::{Arc, OnceLock};

use cmdtrigger_catalog::TriggerToCreate;
use cmdtrigger_core::{
	Value,
	interface::{CommandTag, OperationDescriptor, OperationKind, Phase},
};
use cmdtrigger_engine::{Execution, TriggerEngine, TriggerEngineBuilder};
use cmdtrigger_testing::{HandlerBehavior, RecordingInvoker, TestCatalog};

fn tag(tag: &str) -> CommandTag {
	CommandTag::parse(tag).unwrap()
}

#[test]
fn test_handler_dispatches_nested_operation() {
	let catalog = TestCatalog::new();
	catalog.create("outer", Some(&["CREATE TABLE"]), Phase::Before, "outer").unwrap();
	catalog.create("inner_before", Some(&["CREATE INDEX"]), Phase::Before, "inner_before").unwrap();
	catalog.create("inner_after", Some(&["CREATE INDEX"]), Phase::After, "inner_after").unwrap();
	catalog.create("audit", Some(&["CREATE TABLE"]), Phase::After, "audit").unwrap();

	let slot: Arc<OnceLock<TriggerEngine>> = Arc::new(OnceLock::new());
	let nested = slot.clone();
	let invoker = RecordingInvoker::new().with(
		"outer",
		HandlerBehavior::callback(move |args| {
			let engine = nested.get().unwrap();
			let index = OperationDescriptor::new(CommandTag::parse("CREATE INDEX")?)
				.object_name(format!("{}_pkey", args.object_name.unwrap_or("anon")));
			let result = engine.execute(&index, || Ok(()))?;
			Ok(Some(Value::Boolean(result.is_completed())))
		}),
	);

	let engine = TriggerEngineBuilder::new(catalog.registry(), invoker.shared()).event_bus(catalog.event_bus()).build();
	assert!(slot.set(engine.clone()).is_ok());

	let result = engine.execute(&OperationDescriptor::new(tag("CREATE TABLE")).object_name("users"), || Ok(1)).unwrap();

	assert_eq!(result, Execution::Completed(1));
	assert_eq!(invoker.handler_names(), vec!["outer", "inner_before", "inner_after", "audit"]);
	assert_eq!(invoker.invocations()[1].object_name.as_deref(), Some("users_pkey"));
}

#[test]
fn test_nested_cancellation_propagates_as_outcome() {
	let catalog = TestCatalog::new();
	catalog.create("outer", Some(&["CREATE TABLE"]), Phase::Before, "outer").unwrap();
	catalog.create("veto", Some(&["CREATE INDEX"]), Phase::Before, "veto").unwrap();

	let slot: Arc<OnceLock<TriggerEngine>> = Arc::new(OnceLock::new());
	let nested = slot.clone();
	let invoker = RecordingInvoker::new().with("veto", HandlerBehavior::ReturnBool(false)).with(
		"outer",
		HandlerBehavior::callback(move |_| {
			let engine = nested.get().unwrap();
			let outcome = engine.on_before_operation(&OperationDescriptor::new(CommandTag::parse("CREATE INDEX")?))?;
			Ok(Some(Value::Boolean(!outcome.is_cancelled())))
		}),
	);

	let engine = TriggerEngineBuilder::new(catalog.registry(), invoker.shared()).build();
	assert!(slot.set(engine.clone()).is_ok());

	let result = engine.execute(&OperationDescriptor::new(tag("CREATE TABLE")), || Ok(())).unwrap();
	assert_eq!(
		result,
		Execution::Cancelled {
			by: "outer".to_string()
		}
	);
}

#[test]
fn test_handler_registering_trigger_mid_dispatch() {
	let catalog = TestCatalog::new();
	catalog.create("installer", Some(&["CREATE EXTENSION"]), Phase::Before, "installer").unwrap();

	let store = catalog.store().clone();
	let invoker = RecordingInvoker::new().with(
		"installer",
		HandlerBehavior::callback(move |_| {
			if store.find_trigger(&"installed".into())?.is_none() {
				store.create_trigger(TriggerToCreate {
					name: "installed".to_string(),
					tags: None,
					phase: Phase::Before,
					handler: "installed".to_string(),
				})?;
			}
			Ok(None)
		}),
	);

	let engine = TriggerEngineBuilder::new(catalog.registry(), invoker.shared()).event_bus(catalog.event_bus()).build();
	let descriptor = OperationDescriptor::new(tag("CREATE EXTENSION"));

	engine.on_before_operation(&descriptor).unwrap();
	assert_eq!(invoker.handler_names(), vec!["installer"]);
	assert!(!engine.dispatcher().cache().is_built());

	invoker.clear();
	engine.on_before_operation(&descriptor).unwrap();
	assert_eq!(invoker.handler_names(), vec!["installed", "installer"]);

	let resolved = engine.resolve(&OperationKind::Any, Phase::Before).unwrap();
	assert_eq!(resolved.len(), 1);
}
