//! src/registry.rs

/********************************************************************************
 *                               REGISTRY MODULE
 *-------------------------------------------------------------------------------*
 * The process-wide catalog of recognized unary functions and named constants.
 * The lexer consults it to decide whether an identifier lexes as a Function,
 * a Constant, or a plain Variable; the parser consults it to resolve Constant
 * values and Function dispatch entries at node-construction time.
 *
 * Concurrent reads are cheap (a `parking_lot::RwLock` read guard); mutation
 * (`AddFunction`, `AddConstant`, `Init`, `Shutdown`) takes the write lock.
 * Callers that need to serialize registration across threads still have to
 * do so themselves -- the lock only protects the map, not call ordering.
 ********************************************************************************/

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::functions::{standard_functions, FunctionEntry};

/// Standard named constants and their IEEE-754 double values.
fn standard_constants() -> Vec<(&'static str, f64)> {
    vec![("e", std::f64::consts::E), ("pi", std::f64::consts::PI)]
}

#[derive(Default)]
struct Inner {
    functions: HashMap<String, FunctionEntry>,
    constants: HashMap<String, f64>,
    initialized: bool,
}

/// A process-wide mapping from function identifier to dispatch entry, and
/// from constant name to value. Cheap to clone: clones share the same
/// underlying lock, so a `Registry` handle is really a reference to shared
/// state, the way the spec describes it.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RwLock<Inner>>,
}

impl Registry {
    /// Creates an empty, uninitialized registry. Call `init()` to seed it
    /// with the standard function and constant sets.
    pub fn new() -> Self {
        Registry {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Creates a registry already seeded with the standard set -- the
    /// dependency-injection-friendly shape recommended for ports of this
    /// spec: construct one explicitly rather than reaching for `global()`.
    pub fn standard() -> Self {
        let registry = Registry::new();
        registry.init();
        registry
    }

    /// The process-wide singleton, lazily constructed and already
    /// initialized the first time it is observed. Mirrors the spec's
    /// "Init()/Shutdown() on the Registry" interface for callers who want
    /// global, ambient state rather than an explicitly threaded handle.
    pub fn global() -> Registry {
        static GLOBAL: Lazy<Registry> = Lazy::new(Registry::standard);
        GLOBAL.clone()
    }

    /// Idempotent. Seeds the standard function and constant sets if this
    /// registry has not already been initialized. Because `add_function`
    /// and `add_constant` both honor first-registration-wins, calling
    /// `init()` again after custom registrations leaves those custom
    /// entries untouched.
    pub fn init(&self) {
        let mut inner = self.inner.write();
        if inner.initialized {
            return;
        }
        log::trace!("initializing registry with standard function/constant set");
        inner.initialized = true;
        drop(inner);
        for entry in standard_functions() {
            self.add_function(entry);
        }
        for (name, value) in standard_constants() {
            self.add_constant(name, value);
        }
    }

    /// Clears all entries. A subsequent `init()` restores the standard set.
    pub fn shutdown(&self) {
        log::trace!("shutting down registry");
        let mut inner = self.inner.write();
        inner.functions.clear();
        inner.constants.clear();
        inner.initialized = false;
    }

    /// Registers a function entry. First registration for a given id wins;
    /// later calls with the same id are silently ignored. Returns whether
    /// the entry was actually inserted.
    pub fn add_function(&self, entry: FunctionEntry) -> bool {
        let mut inner = self.inner.write();
        if inner.functions.contains_key(&entry.id) {
            return false;
        }
        inner.functions.insert(entry.id.clone(), entry);
        true
    }

    /// Registers a named constant. First registration for a given name
    /// wins. Returns whether the value was actually inserted.
    pub fn add_constant(&self, name: impl Into<String>, value: f64) -> bool {
        let name = name.into();
        let mut inner = self.inner.write();
        if inner.constants.contains_key(&name) {
            return false;
        }
        inner.constants.insert(name, value);
        true
    }

    /// Looks up a function's dispatch entry by identifier.
    pub fn get_function(&self, id: &str) -> Option<FunctionEntry> {
        self.inner.read().functions.get(id).cloned()
    }

    /// Looks up a constant's value. Unknown names yield a quiet NaN, never
    /// a panic -- consistent with the rest of this crate's "no out-of-band
    /// errors" policy.
    pub fn get_constant_value(&self, name: &str) -> f64 {
        self.inner
            .read()
            .constants
            .get(name)
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// Checks whether `name` is a registered constant.
    pub fn has_constant(&self, name: &str) -> bool {
        self.inner.read().constants.contains_key(name)
    }

    /// The current function identifiers, longest first so the lexer's
    /// dynamically-assembled alternation never lets a short id shadow a
    /// longer one that shares a prefix.
    pub fn function_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.read().functions.keys().cloned().collect();
        ids.sort_by_key(|b| std::cmp::Reverse(b.len()));
        ids
    }

    /// The current constant names, longest first (see `function_ids`).
    pub fn constant_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.read().constants.keys().cloned().collect();
        names.sort_by_key(|b| std::cmp::Reverse(b.len()));
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

/// Free-function mirror of the spec's `Init()`/`Shutdown()` Registry
/// operations, operating on the process-wide singleton.
pub fn init() {
    Registry::global().init();
}

/// See `init`.
pub fn shutdown() {
    Registry::global().shutdown();
}
