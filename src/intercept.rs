//! Reload interception
//!
//! Keeps the overlay in sync with content changes without the call site
//! asking for it. Every participating widget type routes its public reload
//! entry points through [`dispatch`]. The first time any instance of a type
//! binds a data source, [`install`] records the type's original reload
//! implementation in a process-wide registry keyed by
//! `(TypeId, ReloadOp)`. From then on every reload of every instance of
//! that type runs the empty data set update first and the original second.
//!
//! Instances that never bind a data source pay one registry lookup and a
//! no-op check, then behave exactly as before.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

use crate::binding;
use crate::error::InterceptError;
use crate::host::HostWidget;

/// Reload entry points a host widget may expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReloadOp {
    /// Full content reload
    ReloadData,
    /// End of a batch of row updates
    EndUpdates,
}

impl ReloadOp {
    pub fn name(self) -> &'static str {
        match self {
            ReloadOp::ReloadData => "reload_data",
            ReloadOp::EndUpdates => "end_updates",
        }
    }
}

impl fmt::Display for ReloadOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Native (pre-interception) implementation of a reload operation
pub type NativeReload<W> = fn(&mut W);

/// A host widget type whose reload operations can be intercepted
///
/// Implementors list the operations they expose and hand out the native
/// implementation of each. Their public reload methods must call
/// [`dispatch`] instead of running the native implementation directly.
pub trait Reloadable: HostWidget + Sized {
    /// Operations this type exposes
    const RELOAD_OPERATIONS: &'static [ReloadOp];

    /// Native implementation of `op`, if this type has one
    fn native_reload(op: ReloadOp) -> Option<NativeReload<Self>>;
}

/// Outcome of [`install`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation {
    /// Interception was installed by this call
    Installed,
    /// Already installed for this type and operation; nothing changed
    AlreadyInstalled,
    /// The type does not expose the operation; skipped
    Unsupported,
}

type Original = Arc<dyn Fn(&mut dyn Any) + Send + Sync>;

struct Interception {
    widget: &'static str,
    original: Original,
}

type Registry = HashMap<(TypeId, ReloadOp), Interception>;

static REGISTRY: LazyLock<Mutex<Registry>> = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Install interception of `op` for every instance of `W`.
///
/// Idempotent per `(W, op)`. Returns [`InterceptError::MissingOriginal`]
/// when `W` claims to expose `op` but cannot provide its original
/// implementation, since installing would leave the widget without any
/// reload behavior.
pub fn install<W: Reloadable>(op: ReloadOp) -> Result<Installation, InterceptError> {
    let widget = type_name::<W>();
    if !W::RELOAD_OPERATIONS.contains(&op) {
        tracing::trace!(widget, %op, "reload operation not exposed, skipping interception");
        return Ok(Installation::Unsupported);
    }

    let key = (TypeId::of::<W>(), op);
    let mut registry = REGISTRY.lock();
    if registry.contains_key(&key) {
        return Ok(Installation::AlreadyInstalled);
    }

    let native = W::native_reload(op).ok_or(InterceptError::MissingOriginal { widget, op })?;
    let original: Original = Arc::new(move |target: &mut dyn Any| {
        if let Some(target) = target.downcast_mut::<W>() {
            native(target);
        }
    });
    registry.insert(key, Interception { widget, original });
    tracing::debug!(widget, %op, "installed reload interception");

    Ok(Installation::Installed)
}

/// Install interception for every operation `W` exposes.
pub fn install_all<W: Reloadable>() -> Result<(), InterceptError> {
    for &op in W::RELOAD_OPERATIONS {
        install::<W>(op)?;
    }
    Ok(())
}

/// Run reload operation `op` on `widget`.
///
/// With interception installed for `W`, the empty data set update runs
/// before the preserved original so visibility is current by the time the
/// original logic observes the widget. Otherwise only the native
/// implementation runs.
pub fn dispatch<W: Reloadable>(widget: &mut W, op: ReloadOp) {
    // Copy the original out so the lock is not held across provider callbacks.
    let original = REGISTRY
        .lock()
        .get(&(TypeId::of::<W>(), op))
        .map(|interception| Arc::clone(&interception.original));

    match original {
        Some(original) => {
            binding::reload_empty_data_set(&mut *widget);
            original(&mut *widget as &mut dyn Any);
        }
        None => match W::native_reload(op) {
            Some(native) => native(widget),
            None => tracing::trace!(widget = type_name::<W>(), %op, "no native reload"),
        },
    }
}

/// Whether interception of `op` is installed for `W`
pub fn is_installed<W: Reloadable>(op: ReloadOp) -> bool {
    REGISTRY.lock().contains_key(&(TypeId::of::<W>(), op))
}

/// Type names and operations currently intercepted, sorted
pub fn installed() -> Vec<(&'static str, ReloadOp)> {
    let mut entries: Vec<_> = REGISTRY
        .lock()
        .iter()
        .map(|((_, op), interception)| (interception.widget, *op))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.name().cmp(b.1.name())));
    entries
}
