//! Lexical environments.
//!
//! An `Environment` is a handle to one scope: a table of bindings plus an
//! optional parent. Handles are shared, so a closure and the call frame that
//! created it see the same scope. Bindings only ever go into the scope the
//! handle points at; lookups walk outward through parents.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use monkey_ir::Name;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::value::Value;

/// One table of bindings and the scope it is nested in.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Environment>,
}

/// Shared handle to a scope in the environment chain.
///
/// Single threaded: handles are `Rc` clones and the scope sits in a
/// `RefCell`, borrowed only for the length of one lookup or insert.
#[derive(Clone, Default)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

impl Environment {
    /// Create an environment with no bindings.
    pub fn new(parent: Option<Environment>) -> Self {
        Environment {
            scope: Rc::new(RefCell::new(Scope {
                bindings: FxHashMap::default(),
                parent,
            })),
        }
    }

    /// Create an empty child scope of `self`, as used for a function call.
    #[must_use]
    pub fn enclosed(&self) -> Self {
        Environment::new(Some(self.clone()))
    }

    /// Resolve `name`, innermost scope first.
    ///
    /// Returns `None` when no scope in the chain binds it; the caller decides
    /// what error that is.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.scope.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }

    /// Bind `name` in this scope, shadowing any binding in a parent.
    ///
    /// Never touches an ancestor scope.
    pub fn set(&self, name: Name, value: Value) {
        trace!(%name, value = %value.type_name(), "bind");
        self.scope.borrow_mut().bindings.insert(name, value);
    }

    /// The enclosing environment, if this is not the outermost one.
    pub fn parent(&self) -> Option<Environment> {
        self.scope.borrow().parent.clone()
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }
}

impl fmt::Debug for Environment {
    // Values can hold closures over this scope; only names are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(Name::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("enclosed", &scope.parent.is_some())
            .finish()
    }
}
