//! Poison-tolerant lock access.
//!
//! A panicking reducer or listener poisons whatever lock it held. The store
//! only replaces state after the reducer returns, so the protected data is
//! always consistent and the guard can be recovered.

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn poisoned_mutex_is_recovered() {
        let mutex = Arc::new(Mutex::new(5));
        let poisoner = Arc::clone(&mutex);
        let _ = std::panic::catch_unwind(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison");
        });

        assert!(mutex.is_poisoned());
        assert_eq!(*lock(&mutex), 5);
    }

    #[test]
    fn poisoned_rwlock_is_recovered() {
        let rw = Arc::new(RwLock::new(vec![1, 2]));
        let poisoner = Arc::clone(&rw);
        let _ = std::panic::catch_unwind(move || {
            let _guard = poisoner.write().unwrap();
            panic!("poison");
        });

        assert!(rw.is_poisoned());
        write(&rw).push(3);
        assert_eq!(*read(&rw), vec![1, 2, 3]);
    }
}
