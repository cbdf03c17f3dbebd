//! Contract tests verifying the memory_manager API.
//! These tests ensure all exported constructors exist with the expected signatures.

use std::rc::Rc;

use class_loader::{ClassLoader, LoaderConfig, TypeRegistry};
use core_types::{ref_count, ExecutionState, ImportsTable, ObjectKind, ObjectRef, TypeInfo};
use interpreter::NullInterpreter;
use memory_manager::ObjectFactory;

fn factory(dir: &std::path::Path) -> ObjectFactory {
    let loader = ClassLoader::new(LoaderConfig::with_class_path(dir));
    ObjectFactory::new(Rc::new(TypeRegistry::new(loader)))
}

/// Test ObjectFactory contract: new_ordinary(Some(name), imports, interp) -> RuntimeResult<ObjectRef>
#[test]
fn contract_factory_new_ordinary_with_imports() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("shapes.Circle.zcl"), [0u8, 1]).unwrap();
    let factory = factory(dir.path());

    let mut imports = ImportsTable::new();
    imports.insert("Circle", "shapes.Circle");

    let obj: ObjectRef = factory
        .new_ordinary(Some("Circle"), Some(&imports), &mut NullInterpreter::new())
        .unwrap();

    assert_eq!(
        obj.borrow().type_info().unwrap().class_name(),
        "shapes.Circle"
    );
    assert!(factory.registry().is_loaded("shapes.Circle"));
}

/// Test ObjectFactory contract: new_ordinary(None, ..) builds a generic object
#[test]
fn contract_factory_new_ordinary_none() {
    let dir = tempfile::tempdir().unwrap();
    let obj = factory(dir.path())
        .new_ordinary(None, None, &mut NullInterpreter::new())
        .unwrap();

    let obj = obj.borrow();
    assert!(matches!(
        obj.kind,
        ObjectKind::Ordinary {
            type_info: None,
            saved_state: None
        }
    ));
    assert_eq!(obj.properties.all_keys().collect::<Vec<_>>(), vec!["size", "keys"]);
}

/// Test ObjectFactory contract: new_string(value) -> ObjectRef
#[test]
fn contract_factory_new_string() {
    let dir = tempfile::tempdir().unwrap();
    let s = factory(dir.path()).new_string("héllo");

    assert_eq!(s.borrow().to_string(), "héllo");
    assert_eq!(s.borrow().properties.all_keys().collect::<Vec<_>>(), vec!["length"]);
    assert_eq!(s.borrow().properties.len(), 0);
}

/// Test ObjectFactory contract: new_context() -> ObjectRef
#[test]
fn contract_factory_new_context() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = factory(dir.path()).new_context();
    assert!(ctx.borrow().as_context().is_some());
}

/// Test ObjectFactory contract: new_function_ref(addr, parent, state) -> ObjectRef
#[test]
fn contract_factory_new_function_ref() {
    let dir = tempfile::tempdir().unwrap();
    let factory = factory(dir.path());
    let state = Rc::new(ExecutionState::new(Rc::new(TypeInfo::new("F", Vec::new()))));

    let func = factory.new_function_ref(7, None, Some(state));
    assert_eq!(func.borrow().kind.name(), "function");
}

/// Test ObjectFactory contract: new_class_ref(name) -> ObjectRef
#[test]
fn contract_factory_new_class_ref() {
    let dir = tempfile::tempdir().unwrap();
    let class = factory(dir.path()).new_class_ref("A");

    assert_eq!(class.borrow().kind.name(), "class");
    assert_eq!(ref_count(&class), 0);
}
