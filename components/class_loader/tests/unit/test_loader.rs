//! Tests for class path lookup

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use class_loader::{ArtifactKind, ClassLoader, Compiler, LoaderConfig};
use core_types::RuntimeError;

/// Compiler double that records every source path it was given
struct RecordingCompiler {
    output: Vec<u8>,
    calls: Rc<RefCell<Vec<PathBuf>>>,
}

impl Compiler for RecordingCompiler {
    fn compile(&self, source_path: &Path) -> Result<Vec<u8>, String> {
        self.calls.borrow_mut().push(source_path.to_path_buf());
        Ok(self.output.clone())
    }
}

struct RejectingCompiler;

impl Compiler for RejectingCompiler {
    fn compile(&self, _source_path: &Path) -> Result<Vec<u8>, String> {
        Err("line 1: unexpected '}'".to_string())
    }
}

#[test]
fn test_compiled_load_is_byte_exact() {
    let dir = tempfile::tempdir().unwrap();
    let bytes: Vec<u8> = (0..=255u8).chain([0, 0, 7]).collect();
    std::fs::write(dir.path().join("Big.zcl"), &bytes).unwrap();

    let loader = ClassLoader::new(LoaderConfig::with_class_path(dir.path()));
    let artifact = loader.load("Big").unwrap();

    assert_eq!(artifact.size(), bytes.len());
    assert_eq!(artifact.bytecode, bytes);
}

#[test]
fn test_empty_compiled_artifact() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Empty.zcl"), b"").unwrap();

    let loader = ClassLoader::new(LoaderConfig::with_class_path(dir.path()));
    let artifact = loader.load("Empty").unwrap();

    assert_eq!(artifact.size(), 0);
}

#[test]
fn test_compiled_artifact_wins_over_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Main.zcl"), [1u8]).unwrap();
    std::fs::write(dir.path().join("Main.zs"), "class Main {}").unwrap();

    let calls = Rc::new(RefCell::new(Vec::new()));
    let loader = ClassLoader::new(LoaderConfig::with_class_path(dir.path())).with_compiler(
        RecordingCompiler {
            output: vec![2],
            calls: calls.clone(),
        },
    );

    let artifact = loader.load("Main").unwrap();
    assert_eq!(artifact.bytecode, vec![1]);
    assert_eq!(artifact.kind, ArtifactKind::Compiled);
    assert!(calls.borrow().is_empty());
}

#[cfg(feature = "dynamic-compilation")]
#[test]
fn test_source_fallback_returns_compiler_output_exactly() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Main.zs"), "class Main {}").unwrap();

    let calls = Rc::new(RefCell::new(Vec::new()));
    let loader = ClassLoader::new(LoaderConfig::with_class_path(dir.path())).with_compiler(
        RecordingCompiler {
            output: vec![0xCA, 0xFE],
            calls: calls.clone(),
        },
    );

    let artifact = loader.load("Main").unwrap();
    assert_eq!(artifact.bytecode, vec![0xCA, 0xFE]);
    assert_eq!(artifact.size(), 2);
    assert_eq!(artifact.kind, ArtifactKind::Source);
    assert_eq!(*calls.borrow(), vec![dir.path().join("Main.zs")]);
}

#[cfg(feature = "dynamic-compilation")]
#[test]
fn test_compile_failure_carries_cause() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Bad.zs"), "class Bad {").unwrap();

    let loader =
        ClassLoader::new(LoaderConfig::with_class_path(dir.path())).with_compiler(RejectingCompiler);

    match loader.load("Bad").unwrap_err() {
        RuntimeError::CompileFailure { name, cause } => {
            assert_eq!(name, "Bad");
            assert!(cause.contains("unexpected"));
        }
        other => panic!("expected compile failure, got {other:?}"),
    }
}

#[cfg(not(feature = "dynamic-compilation"))]
#[test]
fn test_source_is_ignored_without_dynamic_compilation() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Main.zs"), "class Main {}").unwrap();

    let loader = ClassLoader::new(LoaderConfig::with_class_path(dir.path()));
    assert!(matches!(
        loader.load("Main").unwrap_err(),
        RuntimeError::ClassNotFound { .. }
    ));
}

#[test]
fn test_neither_artifact_is_class_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let loader = ClassLoader::new(LoaderConfig::with_class_path(dir.path())).with_compiler(
        RecordingCompiler {
            output: vec![1],
            calls: calls.clone(),
        },
    );

    let err = loader.load("Nowhere").unwrap_err();
    assert!(matches!(err, RuntimeError::ClassNotFound { ref name } if name == "Nowhere"));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_custom_extensions() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Main.bin"), [5u8, 6]).unwrap();

    let config = LoaderConfig {
        compiled_extension: "bin".to_string(),
        ..LoaderConfig::with_class_path(dir.path())
    };
    let artifact = ClassLoader::new(config).load("Main").unwrap();
    assert_eq!(artifact.bytecode, vec![5, 6]);
}
