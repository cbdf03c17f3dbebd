//! End-to-End Tests
//!
//! Drives class loading, static construction, and instance construction
//! through a small interpreter whose class bytecode is a symbol table of
//! static slot names.

use std::cell::RefCell;
use std::rc::Rc;

use builtins::{ObjectPrototype, StringPrototype};
use bytecode_system::{decode_symbol_table, encode_symbol_table};
use class_loader::{ClassLoader, LoaderConfig, TypeRegistry};
use core_types::{ExecutionState, Register, RuntimeResult, TypeInfo};
use interpreter::Interpreter;
use memory_manager::ObjectFactory;
use runtime_cli::Runtime;
use tempfile::TempDir;

/// Interpreter whose static constructor sets each declared static slot to
/// its slot number and appends to a shared log.
#[derive(Default)]
struct SlotInterpreter {
    log: Rc<RefCell<Vec<String>>>,
}

impl Interpreter for SlotInterpreter {
    fn run(&mut self, mut state: ExecutionState) -> RuntimeResult<ExecutionState> {
        self.log
            .borrow_mut()
            .push(format!("run {}", state.class_name()));
        state.finish();
        Ok(state)
    }

    fn run_static_constructor(&mut self, type_info: &Rc<TypeInfo>) -> RuntimeResult<()> {
        let statics = decode_symbol_table(type_info.bytecode())?;
        for (name, slot) in statics.iter() {
            type_info.set_static_variable(name, Register::Integer(i64::from(slot)));
        }
        self.log
            .borrow_mut()
            .push(format!("static {}", type_info.class_name()));
        Ok(())
    }
}

fn class_path(classes: &[(&str, &[&str])]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, statics) in classes {
        let bytes = encode_symbol_table(statics.iter().copied()).unwrap();
        std::fs::write(dir.path().join(format!("{}.zcl", name)), bytes).unwrap();
    }
    dir
}

/// Test: static constructor runs once and its slot is visible to every instance
#[test]
fn test_static_constructor_runs_once_across_instances() {
    let dir = class_path(&[("Counter", &["count"])]);
    let registry = Rc::new(TypeRegistry::new(ClassLoader::new(
        LoaderConfig::with_class_path(dir.path()),
    )));
    let factory = ObjectFactory::new(registry.clone());
    let mut interp = SlotInterpreter::default();
    let log = interp.log.clone();

    let first = factory
        .new_ordinary(Some("Counter"), None, &mut interp)
        .unwrap();
    let info = first.borrow().type_info().cloned().unwrap();
    assert_eq!(info.static_variable("count"), Some(Register::Integer(1)));

    let second = factory
        .new_ordinary(Some("Counter"), None, &mut interp)
        .unwrap();
    let second_info = second.borrow().type_info().cloned().unwrap();

    assert!(Rc::ptr_eq(&info, &second_info));
    assert_eq!(second_info.static_variable("count"), Some(Register::Integer(1)));
    assert_eq!(
        *log.borrow(),
        vec!["static Counter", "run Counter", "run Counter"]
    );
    assert_eq!(registry.loaded_classes(), vec!["Counter"]);
}

/// Test: the runtime root wires registry, factory, and interpreter together
#[test]
fn test_runtime_root_with_attached_interpreter() {
    let dir = class_path(&[("app.Config", &["host", "port"])]);
    let interp = SlotInterpreter::default();
    let log = interp.log.clone();
    let mut runtime =
        Runtime::new(LoaderConfig::with_class_path(dir.path())).with_interpreter(interp);

    let info = runtime.load_class("app.Config", None).unwrap();
    assert_eq!(info.static_variable_names(), vec!["host", "port"]);
    assert_eq!(info.static_variable("port"), Some(Register::Integer(2)));

    let obj = runtime.new_object("app.Config", None).unwrap();
    assert!(Rc::ptr_eq(obj.borrow().type_info().unwrap(), &info));
    assert_eq!(*log.borrow(), vec!["static app.Config", "run app.Config"]);
}

/// Test: builtin accessors never show up as enumerable keys
#[test]
fn test_builtin_property_visibility() {
    let dir = TempDir::new().unwrap();
    let factory = ObjectFactory::new(Rc::new(TypeRegistry::new(ClassLoader::new(
        LoaderConfig::with_class_path(dir.path()),
    ))));

    let generic = factory.new_generic();
    assert!(generic.borrow().properties.keys().next().is_none());

    generic
        .borrow_mut()
        .properties
        .insert("name", Register::Object(factory.new_string("widget")));

    let keys = ObjectPrototype::keys(&generic, &[]).unwrap();
    let keys = keys.as_object().unwrap().borrow();
    assert_eq!(keys.properties.keys().collect::<Vec<_>>(), vec!["0"]);
    assert_eq!(keys.properties.get("0").unwrap().to_string(), "name");
    assert_eq!(
        ObjectPrototype::size(&generic, &[]).unwrap(),
        Register::Integer(1)
    );

    let s = factory.new_string("ünï");
    assert!(s.borrow().properties.keys().next().is_none());
    assert_eq!(
        StringPrototype::length(&s, &[]).unwrap(),
        Register::Integer(3)
    );
}

/// Test: a failing class stays unregistered and is never reloaded from disk
#[test]
fn test_failed_static_constructor_is_not_cached() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Broken.zcl"), [9u8, 0, 0, 0]).unwrap();
    let registry = Rc::new(TypeRegistry::new(ClassLoader::new(
        LoaderConfig::with_class_path(dir.path()),
    )));
    let factory = ObjectFactory::new(registry.clone());
    let mut interp = SlotInterpreter::default();
    let log = interp.log.clone();

    assert!(factory
        .new_ordinary(Some("Broken"), None, &mut interp)
        .is_err());
    assert!(!registry.is_loaded("Broken"));

    // Descriptors are never reloaded, so fixing the artifact does not help.
    std::fs::write(
        dir.path().join("Broken.zcl"),
        encode_symbol_table(["fixed"]).unwrap(),
    )
    .unwrap();
    assert!(factory
        .new_ordinary(Some("Broken"), None, &mut interp)
        .is_err());
    assert!(!registry.is_loaded("Broken"));
    assert!(log.borrow().is_empty());
}
