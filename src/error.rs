//! Error types

use thiserror::Error;

use crate::intercept::ReloadOp;

/// Errors raised while installing reload interception
///
/// These indicate a host widget that does not honor the [`Reloadable`]
/// contract; they never come from data conditions.
///
/// [`Reloadable`]: crate::intercept::Reloadable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterceptError {
    #[error("{widget} exposes `{op}` but no native reload is registered for it")]
    MissingOriginal { widget: &'static str, op: ReloadOp },
}
