//! Edge cases: special float values, zero capacity, allocation failure,
//! release semantics and all-or-nothing failures

use fixed_priority_queue::{BoundedHeap, PriorityQueue, QueueError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_zero_capacity_queue() {
    init_logging();
    let mut queue: PriorityQueue = PriorityQueue::with_capacity(0).unwrap();

    assert_eq!(queue.capacity(), 0);
    assert!(queue.is_full());
    assert_eq!(
        queue.push(1.0),
        Err(QueueError::CapacityExceeded { capacity: 0 })
    );
    assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_allocation_failure_reported() {
    init_logging();
    let result: fixed_priority_queue::Result<PriorityQueue<u64>> =
        PriorityQueue::with_capacity(usize::MAX / 2);
    assert!(matches!(
        result,
        Err(QueueError::AllocationFailure { capacity }) if capacity == usize::MAX / 2
    ));
}

#[test]
fn test_infinities_order() {
    let mut queue: PriorityQueue = PriorityQueue::with_capacity(4).unwrap();
    queue.push(f64::INFINITY).unwrap();
    queue.push(0.0).unwrap();
    queue.push(f64::NEG_INFINITY).unwrap();
    queue.push(f64::MAX).unwrap();

    assert_eq!(queue.pop(), Ok(f64::NEG_INFINITY));
    assert_eq!(queue.pop(), Ok(0.0));
    assert_eq!(queue.pop(), Ok(f64::MAX));
    assert_eq!(queue.pop(), Ok(f64::INFINITY));
}

#[test]
fn test_signed_zeros_compare_equal() {
    let mut queue: PriorityQueue = PriorityQueue::with_capacity(2).unwrap();
    queue.push(0.0).unwrap();
    queue.push(-0.0).unwrap();

    // -0.0 == 0.0, so the second push does not displace the root.
    assert!(queue.peek().unwrap().is_sign_positive());
    assert_eq!(queue.pop(), Ok(0.0));
    assert_eq!(queue.pop(), Ok(-0.0));
}

#[test]
fn test_nan_is_accepted_and_counted() {
    let mut queue: PriorityQueue = PriorityQueue::with_capacity(3).unwrap();
    queue.push(2.0).unwrap();
    queue.push(f64::NAN).unwrap();
    queue.push(1.0).unwrap();
    assert_eq!(queue.len(), 3);

    // NaN never compares less, so it cannot displace a real minimum at the root.
    assert_eq!(queue.peek(), Ok(&1.0));

    let mut drained = Vec::new();
    while let Ok(value) = queue.pop() {
        drained.push(value);
    }
    assert_eq!(drained.len(), 3);
    assert_eq!(drained.iter().filter(|v| v.is_nan()).count(), 1);
    assert!(queue.is_empty());
}

#[test]
fn test_nan_at_root_stays_until_removed() {
    let mut queue: PriorityQueue = PriorityQueue::with_capacity(3).unwrap();
    queue.push(f64::NAN).unwrap();
    queue.push(-5.0).unwrap();

    // Nothing compares greater than the new value, so NaN keeps the root.
    assert!(queue.peek().unwrap().is_nan());
    assert!(queue.pop().unwrap().is_nan());
    assert_eq!(queue.pop(), Ok(-5.0));
}

#[test]
fn test_empty_errors_do_not_change_len() {
    let mut queue: PriorityQueue<i32> = PriorityQueue::with_capacity(2).unwrap();
    for _ in 0..3 {
        assert_eq!(queue.peek(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.delete_min(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.len(), 0);
    }
    queue.push(1).unwrap();
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_failed_push_is_all_or_nothing() {
    let mut queue: PriorityQueue<i32> = PriorityQueue::with_capacity(5).unwrap();
    queue.try_extend([9, 7, 5, 3, 1]).unwrap();
    let before = queue.as_slice().to_vec();

    for value in [i32::MIN, 0, i32::MAX] {
        assert_eq!(
            queue.push(value),
            Err(QueueError::CapacityExceeded { capacity: 5 })
        );
        assert_eq!(queue.as_slice(), &before[..]);
    }
}

#[test]
fn test_capacity_one() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::with_capacity(1).unwrap();
    for value in 0..=255u8 {
        queue.push(value).unwrap();
        assert!(queue.push(value).is_err());
        assert_eq!(queue.pop(), Ok(value));
    }
}

#[test]
fn test_release_consumes_queue() {
    init_logging();
    let mut queue: PriorityQueue = PriorityQueue::with_capacity(3).unwrap();
    queue.push(1.0).unwrap();
    queue.release();

    let mut slot: Option<PriorityQueue> = Some(PriorityQueue::with_capacity(3).unwrap());
    PriorityQueue::release_handle(slot.take());
    // Releasing the now-empty slot again is a no-op.
    PriorityQueue::release_handle(slot.take());
    assert!(slot.is_none());
}

#[test]
fn test_integer_element_types() {
    let mut small: PriorityQueue<i8> = PriorityQueue::with_capacity(3).unwrap();
    small.try_extend([i8::MAX, i8::MIN, 0]).unwrap();
    assert_eq!(small.pop(), Ok(i8::MIN));

    let mut wide: PriorityQueue<u128> = PriorityQueue::with_capacity(2).unwrap();
    wide.try_extend([u128::MAX, 1]).unwrap();
    assert_eq!(wide.pop(), Ok(1));

    let mut single: PriorityQueue<f32> = PriorityQueue::with_capacity(2).unwrap();
    single.try_extend([1.5f32, -1.5]).unwrap();
    assert_eq!(single.pop(), Ok(-1.5));
}
