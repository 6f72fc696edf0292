//! Reusable byte scratch buffers.
//!
//! Each censoring call encodes its numeral into one of these buffers and
//! mutates it in place, so a warm pool removes every per-call allocation.
//! Release happens in `Drop`, which covers all exit paths: success,
//! validation failure, sink errors, and a caller dropping the future
//! mid-write.

use core::ops::{Deref, DerefMut};

use parking_lot::Mutex;

/// Idle buffers kept per pool; excess buffers are freed on release.
const MAX_IDLE: usize = 8;

/// Largest buffer the pool will retain. A one-off huge numeral gets
/// serviced and its buffer freed instead of pinning memory.
const MAX_RETAINED_CAPACITY: usize = 1 << 20;

pub(crate) struct BufferPool {
    idle: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    pub(crate) const fn new() -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Hands out an empty buffer with at least `min_capacity` bytes of
    /// capacity. The buffer goes back to the pool when the guard drops.
    pub(crate) fn acquire(&self, min_capacity: usize) -> PooledBuf<'_> {
        let mut buf = self.idle.lock().pop().unwrap_or_default();
        buf.reserve(min_capacity);
        PooledBuf { pool: self, buf }
    }

    fn release(&self, mut buf: Vec<u8>) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buf.clear();
        let mut idle = self.idle.lock();
        if idle.len() < MAX_IDLE {
            idle.push(buf);
        }
    }

    #[cfg(test)]
    fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }
}

/// Process-wide pool shared by all censoring calls, one exclusive buffer
/// per in-flight call.
pub(crate) fn shared() -> &'static BufferPool {
    static SHARED: BufferPool = BufferPool::new();
    &SHARED
}

/// Exclusive handle on a pooled buffer.
pub(crate) struct PooledBuf<'pool> {
    pool: &'pool BufferPool,
    buf: Vec<u8>,
}

impl Deref for PooledBuf<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuf<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuf<'_> {
    fn drop(&mut self) {
        self.pool.release(core::mem::take(&mut self.buf));
    }
}
