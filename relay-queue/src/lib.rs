//! A bounded blocking FIFO queue with an explicit open/close lifecycle.
//!
//! [`BlockingQueue`] hands discrete units of work (byte frames, messages,
//! jobs) from producer threads to consumer threads. Producers block once the
//! buffer is full, consumers block while it is empty, and a coordinator can
//! start and stop the whole flow with [`open`](BlockingQueue::open) and
//! [`close`](BlockingQueue::close) without tearing the queue down.
//!
//! # Design
//!
//! One mutex guards the buffer and the lifecycle flag. Two condition
//! variables split the wake-up conditions by direction, so a state change
//! only ever wakes threads that can make progress from it:
//!
//! ```text
//!            push()                          pop()
//!              │                               │
//!              ▼                               ▼
//!       ┌────────────── Mutex<Shared<T>> ──────────────┐
//!       │   buffer: VecDeque<T>        open: bool      │
//!       └─────────────────────────────────────────────-┘
//!          ▲ wait on `space`            ▲ wait on `items`
//!          │ while full and open        │ while empty and open
//!          │                            │
//!    signaled by pop/drain         signaled by push
//!          and close()                and close()
//! ```
//!
//! Every wait sits in a predicate loop, so spurious wakeups and competing
//! waiters are harmless. The mutex is released for the whole time a thread
//! is parked; a parked pusher never impedes a popper and vice versa.
//!
//! # Lifecycle
//!
//! A queue is constructed with a fixed capacity and starts closed unless
//! [`with_config`](BlockingQueue::with_config) says otherwise. While closed,
//! `push` and `pop` return immediately with an error instead of blocking.
//! `open()` starts the flow; `close()` stops it again and wakes every parked
//! thread in both directions. Open and close can alternate for the lifetime
//! of the queue.
//!
//! ```
//! use relay_queue::BlockingQueue;
//!
//! let q = BlockingQueue::new(3);
//! q.open();
//!
//! q.push("frame-a").unwrap();
//! q.push("frame-b").unwrap();
//!
//! assert_eq!(q.pop(), Ok("frame-a"));
//! assert_eq!(q.pop(), Ok("frame-b"));
//!
//! q.close();
//! assert!(q.pop().is_err());
//! ```
//!
//! # Close Semantics
//!
//! `close()` stops the flow in both directions at once:
//!
//! - Parked pushers wake and get their value back in an error.
//! - Parked poppers wake and get [`PopError`].
//! - Items already buffered stay in place. They are withheld from `pop`
//!   while the queue is closed, become available again after `open()`, and
//!   can be reclaimed at any point with [`drain`](BlockingQueue::drain).
//!
//! A stopped pipeline neither loses buffered work nor keeps feeding a
//! consumer that was told to stop.
//!
//! # Sharing
//!
//! All operations take `&self`, so any number of producer and consumer
//! threads may share one queue through an [`Arc`](std::sync::Arc) (or a
//! scoped borrow). `T: Send` is the only requirement for cross-thread use;
//! the crate contains no `unsafe` code.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use relay_queue::BlockingQueue;
//!
//! let q = Arc::new(BlockingQueue::with_config(8, "jobs", true));
//!
//! let consumer = {
//!     let q = Arc::clone(&q);
//!     thread::spawn(move || {
//!         let mut total = 0u64;
//!         while let Ok(job) = q.pop() {
//!             total += job;
//!         }
//!         total
//!     })
//! };
//!
//! for i in 1..=100 {
//!     q.push(i).unwrap();
//! }
//!
//! // close() strands whatever is still buffered, so wait for the consumer
//! // to catch up before stopping the flow.
//! while !q.is_empty() {
//!     thread::yield_now();
//! }
//! q.close();
//!
//! assert_eq!(consumer.join().unwrap(), 5050);
//! ```
//!
//! # Timeouts
//!
//! [`push_timeout`](BlockingQueue::push_timeout) and
//! [`pop_timeout`](BlockingQueue::pop_timeout) bound the wait with a
//! deadline computed once at entry. Expiry is reported separately from the
//! queue being closed, so callers can tell "nothing happened in time" apart
//! from "the flow was stopped".
//!
//! # When to Use This
//!
//! Use `relay_queue` when:
//!
//! - Producers must feel backpressure once the buffer is full
//! - Consumers should block until work arrives, without spinning
//! - A coordinator needs to start and stop the flow, repeatedly, without
//!   dropping the queue or losing buffered work
//!
//! Consider alternatives when:
//!
//! - Buffered items should still be delivered after shutdown → use
//!   `crossbeam-channel`, whose disconnect drains before erroring
//! - You need `select!` over several queues → use `crossbeam-channel`
//! - Nanosecond latency matters more than blocking semantics → use a
//!   lock-free ring buffer and spin

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

use core::fmt;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Diagnostic name used by [`BlockingQueue::new`].
const DEFAULT_NAME: &str = "queue";

/// State guarded by the queue's mutex.
///
/// The buffer and the lifecycle flag always change together under the same
/// lock; every blocking operation re-checks both after each wakeup.
struct Shared<T> {
    buffer: VecDeque<T>,
    open: bool,
}

/// A bounded, thread-safe FIFO queue with blocking operations and an
/// explicit open/close lifecycle.
///
/// Producers call [`push`](Self::push) and block while the queue is full;
/// consumers call [`pop`](Self::pop) and block while it is empty. The queue
/// holds at most `capacity` items at any instant. [`close`](Self::close)
/// stops the flow and wakes every parked thread; [`open`](Self::open)
/// starts it again.
///
/// Items are delivered in the order their pushes completed. No fairness is
/// promised among threads contending for the same slot or item; a freed
/// slot goes to an arbitrary parked pusher.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use relay_queue::BlockingQueue;
///
/// let q = Arc::new(BlockingQueue::with_config(4, "frames", true));
///
/// let consumer = {
///     let q = Arc::clone(&q);
///     thread::spawn(move || q.pop().unwrap())
/// };
///
/// q.push(vec![0x01, 0x02]).unwrap();
/// assert_eq!(consumer.join().unwrap(), vec![0x01, 0x02]);
/// ```
pub struct BlockingQueue<T> {
    name: Box<str>,
    capacity: usize,
    shared: Mutex<Shared<T>>,
    /// Signaled when a slot frees up or the queue closes.
    space: Condvar,
    /// Signaled when an item arrives or the queue closes.
    items: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates a queue holding at most `capacity` items.
    ///
    /// The queue starts closed: `push` and `pop` return errors until
    /// [`open`](Self::open) is called. Use [`with_config`](Self::with_config)
    /// to start open or to set a diagnostic name.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BlockingQueue;
    ///
    /// let q = BlockingQueue::<u32>::new(16);
    /// assert!(!q.is_open());
    /// assert_eq!(q.capacity(), 16);
    ///
    /// q.open();
    /// q.push(1).unwrap();
    /// assert_eq!(q.pop(), Ok(1));
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_config(capacity, DEFAULT_NAME, false)
    }

    /// Creates a queue with a diagnostic name and a chosen initial state.
    ///
    /// The name only shows up in `Debug` output and caller-side logging; it
    /// has no effect on behavior. `initially_open` skips the separate
    /// [`open`](Self::open) call for queues that should accept work from the
    /// start.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BlockingQueue;
    ///
    /// let q = BlockingQueue::<u8>::with_config(16, "rx-frames", true);
    /// assert!(q.is_open());
    /// assert_eq!(q.name(), "rx-frames");
    /// ```
    pub fn with_config(capacity: usize, name: &str, initially_open: bool) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");

        Self {
            name: name.into(),
            capacity,
            shared: Mutex::new(Shared {
                buffer: VecDeque::with_capacity(capacity),
                open: initially_open,
            }),
            space: Condvar::new(),
            items: Condvar::new(),
        }
    }

    /// Opens the queue so that `push` and `pop` operate normally.
    ///
    /// Idempotent. Items buffered while the queue was closed become
    /// available to poppers again. No thread ever parks waiting for the
    /// queue to open (closed-queue operations return immediately), so this
    /// wakes nobody.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BlockingQueue;
    ///
    /// let q = BlockingQueue::<u32>::new(4);
    /// assert!(q.push(1).is_err());
    ///
    /// q.open();
    /// q.push(1).unwrap();
    /// assert_eq!(q.pop(), Ok(1));
    /// ```
    pub fn open(&self) {
        let mut shared = self.shared.lock().unwrap();
        shared.open = true;
    }

    /// Closes the queue, stopping the flow in both directions.
    ///
    /// Every parked thread is woken: pushers get their value back in
    /// [`PushError`], poppers get [`PopError`]. Buffered items stay in
    /// place; they are withheld from `pop` while closed and can be
    /// reclaimed with [`drain`](Self::drain) or released again by a later
    /// [`open`](Self::open). Idempotent.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BlockingQueue;
    ///
    /// let q = BlockingQueue::with_config(4, "q", true);
    /// q.push(1).unwrap();
    ///
    /// q.close();
    ///
    /// // Buffered items are withheld, not destroyed.
    /// assert!(q.pop().is_err());
    /// assert_eq!(q.drain(), vec![1]);
    /// ```
    pub fn close(&self) {
        let mut shared = self.shared.lock().unwrap();
        shared.open = false;
        drop(shared);

        // Both directions: a parked pusher is as stuck as a parked popper.
        self.space.notify_all();
        self.items.notify_all();
    }

    /// Pushes a value, blocking while the queue is full.
    ///
    /// Returns `Err(PushError(value))` without blocking if the queue is
    /// closed, whether it was already closed on entry or closed while this
    /// thread was waiting for space.
    ///
    /// # Errors
    ///
    /// Returns [`PushError`] carrying `value` back if the queue is closed.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BlockingQueue;
    ///
    /// let q = BlockingQueue::with_config(2, "q", true);
    ///
    /// q.push(1).unwrap();
    /// q.push(2).unwrap();
    /// // q.push(3) would block here until a pop frees a slot
    ///
    /// q.close();
    /// assert_eq!(q.push(3).unwrap_err().into_inner(), 3);
    /// ```
    pub fn push(&self, value: T) -> Result<(), PushError<T>> {
        let mut shared = self.shared.lock().unwrap();

        loop {
            if !shared.open {
                return Err(PushError(value));
            }

            if shared.buffer.len() < self.capacity {
                shared.buffer.push_back(value);
                drop(shared);
                self.items.notify_one();
                return Ok(());
            }

            shared = self.space.wait(shared).unwrap();
        }
    }

    /// Attempts to push a value without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`TryPushError::Closed`] carrying `value` if the queue is
    /// closed, or [`TryPushError::Full`] carrying `value` if it is open but
    /// full.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::{BlockingQueue, TryPushError};
    ///
    /// let q = BlockingQueue::with_config(1, "q", true);
    ///
    /// assert!(q.try_push(1).is_ok());
    /// assert!(matches!(q.try_push(2), Err(TryPushError::Full(2))));
    ///
    /// q.close();
    /// assert!(matches!(q.try_push(3), Err(TryPushError::Closed(3))));
    /// ```
    pub fn try_push(&self, value: T) -> Result<(), TryPushError<T>> {
        let mut shared = self.shared.lock().unwrap();

        if !shared.open {
            return Err(TryPushError::Closed(value));
        }
        if shared.buffer.len() == self.capacity {
            return Err(TryPushError::Full(value));
        }

        shared.buffer.push_back(value);
        drop(shared);
        self.items.notify_one();
        Ok(())
    }

    /// Pushes a value, blocking at most `timeout` while the queue is full.
    ///
    /// The deadline is computed once at entry. A zero timeout checks the
    /// queue exactly once without parking.
    ///
    /// # Errors
    ///
    /// Returns [`PushTimeoutError::Closed`] carrying `value` if the queue
    /// is closed, or [`PushTimeoutError::Timeout`] carrying `value` if no
    /// slot freed up before the deadline.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use relay_queue::{BlockingQueue, PushTimeoutError};
    ///
    /// let q = BlockingQueue::with_config(1, "q", true);
    /// q.push(1).unwrap();
    ///
    /// let err = q.push_timeout(2, Duration::from_millis(10)).unwrap_err();
    /// assert!(matches!(err, PushTimeoutError::Timeout(2)));
    /// ```
    pub fn push_timeout(&self, value: T, timeout: Duration) -> Result<(), PushTimeoutError<T>> {
        let deadline = Instant::now() + timeout;
        let mut shared = self.shared.lock().unwrap();

        loop {
            if !shared.open {
                return Err(PushTimeoutError::Closed(value));
            }

            if shared.buffer.len() < self.capacity {
                shared.buffer.push_back(value);
                drop(shared);
                self.items.notify_one();
                return Ok(());
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(PushTimeoutError::Timeout(value));
            }

            shared = self.space.wait_timeout(shared, deadline - now).unwrap().0;
        }
    }

    /// Pops the oldest item, blocking while the queue is empty.
    ///
    /// Returns an error without blocking if the queue is closed. Closed
    /// overrides non-empty: once [`close`](Self::close) runs, buffered
    /// items are withheld until the queue is reopened or drained.
    ///
    /// # Errors
    ///
    /// Returns [`PopError`] if the queue is closed, whether it was already
    /// closed on entry or closed while this thread was waiting for an item.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::thread;
    /// use relay_queue::BlockingQueue;
    ///
    /// let q = Arc::new(BlockingQueue::with_config(4, "q", true));
    ///
    /// let producer = {
    ///     let q = Arc::clone(&q);
    ///     thread::spawn(move || q.push(42).unwrap())
    /// };
    ///
    /// assert_eq!(q.pop(), Ok(42));
    /// producer.join().unwrap();
    /// ```
    pub fn pop(&self) -> Result<T, PopError> {
        let mut shared = self.shared.lock().unwrap();

        loop {
            if !shared.open {
                return Err(PopError);
            }

            if let Some(value) = shared.buffer.pop_front() {
                drop(shared);
                self.space.notify_one();
                return Ok(value);
            }

            shared = self.items.wait(shared).unwrap();
        }
    }

    /// Attempts to pop the oldest item without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`TryPopError::Closed`] if the queue is closed (buffered or
    /// not), or [`TryPopError::Empty`] if it is open but empty.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::{BlockingQueue, TryPopError};
    ///
    /// let q = BlockingQueue::with_config(4, "q", true);
    ///
    /// assert!(matches!(q.try_pop(), Err(TryPopError::Empty)));
    ///
    /// q.push(1).unwrap();
    /// assert_eq!(q.try_pop(), Ok(1));
    ///
    /// q.close();
    /// assert!(matches!(q.try_pop(), Err(TryPopError::Closed)));
    /// ```
    pub fn try_pop(&self) -> Result<T, TryPopError> {
        let mut shared = self.shared.lock().unwrap();

        if !shared.open {
            return Err(TryPopError::Closed);
        }

        match shared.buffer.pop_front() {
            Some(value) => {
                drop(shared);
                self.space.notify_one();
                Ok(value)
            }
            None => Err(TryPopError::Empty),
        }
    }

    /// Pops the oldest item, blocking at most `timeout` while the queue is
    /// empty.
    ///
    /// The deadline is computed once at entry. A zero timeout checks the
    /// queue exactly once without parking.
    ///
    /// # Errors
    ///
    /// Returns [`PopTimeoutError::Closed`] if the queue is closed, or
    /// [`PopTimeoutError::Timeout`] if no item arrived before the deadline.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use relay_queue::{BlockingQueue, PopTimeoutError};
    ///
    /// let q = BlockingQueue::<u64>::with_config(4, "q", true);
    ///
    /// let err = q.pop_timeout(Duration::from_millis(10)).unwrap_err();
    /// assert_eq!(err, PopTimeoutError::Timeout);
    /// ```
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopTimeoutError> {
        let deadline = Instant::now() + timeout;
        let mut shared = self.shared.lock().unwrap();

        loop {
            if !shared.open {
                return Err(PopTimeoutError::Closed);
            }

            if let Some(value) = shared.buffer.pop_front() {
                drop(shared);
                self.space.notify_one();
                return Ok(value);
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(PopTimeoutError::Timeout);
            }

            shared = self.items.wait_timeout(shared, deadline - now).unwrap().0;
        }
    }

    /// Removes and returns all buffered items in FIFO order.
    ///
    /// Works in any lifecycle state. The main use is reclaiming items that
    /// [`close`](Self::close) stranded in the buffer. Parked pushers are
    /// woken for the freed slots.
    ///
    /// # Example
    ///
    /// ```
    /// use relay_queue::BlockingQueue;
    ///
    /// let q = BlockingQueue::with_config(4, "q", true);
    /// q.push(1).unwrap();
    /// q.push(2).unwrap();
    /// q.close();
    ///
    /// assert_eq!(q.drain(), vec![1, 2]);
    /// assert!(q.is_empty());
    /// ```
    pub fn drain(&self) -> Vec<T> {
        let mut shared = self.shared.lock().unwrap();
        let drained: Vec<T> = shared.buffer.drain(..).collect();
        drop(shared);

        if !drained.is_empty() {
            self.space.notify_all();
        }
        drained
    }

    /// Returns `true` if the queue is open.
    ///
    /// Note: This is a snapshot and may be immediately stale in concurrent
    /// contexts. The blocking operations perform their own checks; do not
    /// guard a `push` or `pop` with this.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.shared.lock().unwrap().open
    }

    /// Returns the number of buffered items.
    ///
    /// Note: This is a snapshot and may be immediately stale in concurrent
    /// contexts. It never exceeds [`capacity`](Self::capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.shared.lock().unwrap().buffer.len()
    }

    /// Returns `true` if no items are buffered.
    ///
    /// Note: This is a snapshot and may be immediately stale in concurrent
    /// contexts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().unwrap().buffer.is_empty()
    }

    /// Returns `true` if the buffer is at capacity.
    ///
    /// Note: This is a snapshot and may be immediately stale in concurrent
    /// contexts.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.shared.lock().unwrap().buffer.len() == self.capacity
    }

    /// Returns the maximum number of items the queue can buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the diagnostic name given at construction.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> fmt::Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.lock().unwrap();
        f.debug_struct("BlockingQueue")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("len", &shared.buffer.len())
            .field("open", &shared.open)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when [`BlockingQueue::push`] finds the queue closed.
///
/// Contains the value that was not accepted, allowing recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushError<T>(pub T);

impl<T> PushError<T> {
    /// Returns the value that was not accepted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue closed")
    }
}

impl<T: fmt::Debug> std::error::Error for PushError<T> {}

/// Error returned when [`BlockingQueue::pop`] finds the queue closed.
///
/// This is the designed stop signal for consumer loops, not a failure.
/// Buffered items may still exist; see [`BlockingQueue::drain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopError;

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue closed")
    }
}

impl std::error::Error for PopError {}

/// Error returned by [`BlockingQueue::try_push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryPushError<T> {
    /// The queue is open but full.
    ///
    /// The value is returned so it can be retried or handled.
    Full(T),

    /// The queue is closed.
    ///
    /// The value is returned for cleanup.
    Closed(T),
}

impl<T> TryPushError<T> {
    /// Returns the value that was not accepted.
    pub fn into_inner(self) -> T {
        match self {
            TryPushError::Full(v) | TryPushError::Closed(v) => v,
        }
    }

    /// Returns `true` if this error is the `Full` variant.
    pub fn is_full(&self) -> bool {
        matches!(self, TryPushError::Full(_))
    }

    /// Returns `true` if this error is the `Closed` variant.
    pub fn is_closed(&self) -> bool {
        matches!(self, TryPushError::Closed(_))
    }
}

impl<T> fmt::Display for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPushError::Full(_) => write!(f, "queue full"),
            TryPushError::Closed(_) => write!(f, "queue closed"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for TryPushError<T> {}

/// Error returned by [`BlockingQueue::push_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushTimeoutError<T> {
    /// No slot freed up before the deadline.
    ///
    /// The value is returned so it can be retried or handled.
    Timeout(T),

    /// The queue is closed.
    ///
    /// The value is returned for cleanup.
    Closed(T),
}

impl<T> PushTimeoutError<T> {
    /// Returns the value that was not accepted.
    pub fn into_inner(self) -> T {
        match self {
            PushTimeoutError::Timeout(v) | PushTimeoutError::Closed(v) => v,
        }
    }

    /// Returns `true` if this error is the `Timeout` variant.
    pub fn is_timeout(&self) -> bool {
        matches!(self, PushTimeoutError::Timeout(_))
    }

    /// Returns `true` if this error is the `Closed` variant.
    pub fn is_closed(&self) -> bool {
        matches!(self, PushTimeoutError::Closed(_))
    }
}

impl<T> fmt::Display for PushTimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushTimeoutError::Timeout(_) => write!(f, "push timed out"),
            PushTimeoutError::Closed(_) => write!(f, "queue closed"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for PushTimeoutError<T> {}

/// Error returned by [`BlockingQueue::try_pop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryPopError {
    /// The queue is open but empty.
    ///
    /// An item may arrive later.
    Empty,

    /// The queue is closed.
    ///
    /// Buffered items, if any, are withheld until reopen or drain.
    Closed,
}

impl TryPopError {
    /// Returns `true` if this error is the `Empty` variant.
    pub fn is_empty(&self) -> bool {
        matches!(self, TryPopError::Empty)
    }

    /// Returns `true` if this error is the `Closed` variant.
    pub fn is_closed(&self) -> bool {
        matches!(self, TryPopError::Closed)
    }
}

impl fmt::Display for TryPopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPopError::Empty => write!(f, "queue empty"),
            TryPopError::Closed => write!(f, "queue closed"),
        }
    }
}

impl std::error::Error for TryPopError {}

/// Error returned by [`BlockingQueue::pop_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopTimeoutError {
    /// No item arrived before the deadline.
    Timeout,

    /// The queue is closed.
    ///
    /// Buffered items, if any, are withheld until reopen or drain.
    Closed,
}

impl PopTimeoutError {
    /// Returns `true` if this error is the `Timeout` variant.
    pub fn is_timeout(&self) -> bool {
        matches!(self, PopTimeoutError::Timeout)
    }

    /// Returns `true` if this error is the `Closed` variant.
    pub fn is_closed(&self) -> bool {
        matches!(self, PopTimeoutError::Closed)
    }
}

impl fmt::Display for PopTimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopTimeoutError::Timeout => write!(f, "pop timed out"),
            PopTimeoutError::Closed => write!(f, "queue closed"),
        }
    }
}

impl std::error::Error for PopTimeoutError {}
