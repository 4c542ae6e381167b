//! 响应式状态单元
//!
//! 把 `RwSignal` 适配为 `StateCell`，让 `lostfound_client::actions`
//! 的异步流程直接读写组件共享的状态。

use leptos::prelude::*;
use lostfound_client::StateCell;

/// `RwSignal` 的薄包装
///
/// 视图通过 `with` 订阅；异步流程通过 `StateCell` 读（不订阅）写（通知订阅者）。
pub struct Reactive<T: Send + Sync + 'static>(RwSignal<T>);

impl<T: Send + Sync + 'static> Clone for Reactive<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Reactive<T> {}

impl<T: Send + Sync + 'static> Reactive<T> {
    pub fn new(value: T) -> Self {
        Self(RwSignal::new(value))
    }

    /// 订阅式读取，用于视图与 `Memo`
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with(f)
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for Reactive<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.0.write();
        f(&mut *guard)
    }
}
