//! Runtime objects.
//!
//! Every heap value is a [`RuntimeObject`]: an id, a property map, and one of
//! five structurally different kinds. Objects are shared through
//! [`ObjectRef`] handles; storing a handle in a property map, a captured
//! context, or a static slot is what keeps an object alive.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::property::PropertyMap;
use crate::state::ExecutionState;
use crate::symbol::SymbolTable;
use crate::type_info::TypeInfo;

/// Shared handle to a runtime object.
pub type ObjectRef = Rc<RefCell<RuntimeObject>>;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Allocate the next id.
    pub fn next() -> Self {
        ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An installed exception handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchHandler {
    /// Bytecode offset of the handler
    pub address: u32,
}

/// State of a call or lexical scope.
#[derive(Debug, Clone, Default)]
pub struct ContextObject {
    /// Names visible in this scope
    pub symbol_table: SymbolTable,
    /// Active handlers, innermost last
    pub catches: Vec<CatchHandler>,
}

impl ContextObject {
    /// Install a handler.
    pub fn push_catch(&mut self, handler: CatchHandler) {
        self.catches.push(handler);
    }

    /// Remove the innermost handler.
    pub fn pop_catch(&mut self) -> Option<CatchHandler> {
        self.catches.pop()
    }

    /// Replace the scope's symbol bindings.
    pub fn bind_symbols(&mut self, table: SymbolTable) {
        self.symbol_table = table;
    }
}

/// The five object kinds.
pub enum ObjectKind {
    /// Instance of a user class, or a bare generic object when `type_info` is `None`.
    Ordinary {
        /// Backing class descriptor
        type_info: Option<Rc<TypeInfo>>,
        /// State left behind by running the class initializer
        saved_state: Option<ExecutionState>,
    },
    /// Immutable character data
    String {
        /// The characters
        value: String,
    },
    /// A call or lexical scope
    Context(ContextObject),
    /// A closure: code offset plus captured scope
    FunctionRef {
        /// Bytecode offset where the function body starts
        start_address: u32,
        /// Captured enclosing scope
        parent_context: Option<ObjectRef>,
        /// Execution state that created the closure
        state: Option<Rc<ExecutionState>>,
    },
    /// A first-class reference to a class, by name
    ClassRef {
        /// Class name as written
        name: String,
    },
}

impl ObjectKind {
    /// Short name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Ordinary { .. } => "ordinary",
            ObjectKind::String { .. } => "string",
            ObjectKind::Context(_) => "context",
            ObjectKind::FunctionRef { .. } => "function",
            ObjectKind::ClassRef { .. } => "class",
        }
    }
}

impl fmt::Debug for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Ordinary { type_info, .. } => f
                .debug_struct("Ordinary")
                .field("class", &type_info.as_ref().map(|t| t.class_name()))
                .finish(),
            ObjectKind::String { value } => f.debug_struct("String").field("value", value).finish(),
            ObjectKind::Context(ctx) => f.debug_tuple("Context").field(ctx).finish(),
            ObjectKind::FunctionRef {
                start_address,
                parent_context,
                ..
            } => f
                .debug_struct("FunctionRef")
                .field("start_address", start_address)
                .field(
                    "parent_context",
                    &parent_context
                        .as_ref()
                        .and_then(|p| p.try_borrow().ok().map(|p| p.id())),
                )
                .finish(),
            ObjectKind::ClassRef { name } => f.debug_struct("ClassRef").field("name", name).finish(),
        }
    }
}

/// A heap value.
#[derive(Debug)]
pub struct RuntimeObject {
    id: ObjectId,
    /// Own properties
    pub properties: PropertyMap,
    /// Variant-specific state
    pub kind: ObjectKind,
}

impl RuntimeObject {
    /// Allocate an object of the given kind with an empty property map.
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            id: ObjectId::next(),
            properties: PropertyMap::new(),
            kind,
        }
    }

    /// Wrap the object in a shared handle.
    pub fn into_ref(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    /// Identity of this object.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Character data if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ObjectKind::String { value } => Some(value),
            _ => None,
        }
    }

    /// Scope state if this is a context.
    pub fn as_context(&self) -> Option<&ContextObject> {
        match &self.kind {
            ObjectKind::Context(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Mutable scope state if this is a context.
    pub fn as_context_mut(&mut self) -> Option<&mut ContextObject> {
        match &mut self.kind {
            ObjectKind::Context(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Class descriptor backing an ordinary object.
    pub fn type_info(&self) -> Option<&Rc<TypeInfo>> {
        match &self.kind {
            ObjectKind::Ordinary { type_info, .. } => type_info.as_ref(),
            _ => None,
        }
    }
}

/// String conversion, selected by variant.
impl fmt::Display for RuntimeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ObjectKind::String { value } => write!(f, "{}", value),
            _ => write!(f, "obj@{}", self.id),
        }
    }
}

/// Number of holders of `obj` besides the handle its creator received.
///
/// Zero right after construction.
pub fn ref_count(obj: &ObjectRef) -> usize {
    Rc::strong_count(obj) - 1
}
