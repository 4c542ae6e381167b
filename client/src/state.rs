use std::cell::RefCell;
use std::rc::Rc;

/// 可共享的状态单元
///
/// 异步流程通过它读写控制器与会话，而不关心状态实际存放在哪里：
/// 测试中是 `Rc<RefCell<_>>`，浏览器中是响应式信号。
pub trait StateCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for RefCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for Rc<C> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        (**self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        (**self).write(f)
    }
}
