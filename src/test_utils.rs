use std::cell::Cell;
use std::rc::Rc;

/// 持有资源的源，被丢弃（即资源被释放）时计数加一。
pub(crate) struct Guarded<T> {
    iter: Box<dyn Iterator<Item = T>>,
    released: Rc<Cell<usize>>,
}

impl<T: 'static> Guarded<T> {
    pub(crate) fn new(items: Vec<T>) -> (Guarded<T>, Rc<Cell<usize>>) {
        Self::wrap(items.into_iter())
    }

    pub(crate) fn repeat(value: T) -> (Guarded<T>, Rc<Cell<usize>>)
    where
        T: Clone,
    {
        Self::wrap(std::iter::repeat(value))
    }

    fn wrap(iter: impl Iterator<Item = T> + 'static) -> (Guarded<T>, Rc<Cell<usize>>) {
        let released = Rc::new(Cell::new(0));
        (Guarded { iter: Box::new(iter), released: released.clone() }, released)
    }
}

impl<T> Iterator for Guarded<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }
}

impl<T> Drop for Guarded<T> {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}
