use mergeable_collections::binomial_heap::{BinomialHeap, Error};
use rand::Rng;
use std::collections::BinaryHeap;
use std::cmp::Reverse;

const NUM_OF_OPERATIONS: usize = 100_000;

#[test]
fn int_test_binomial_heap() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut heap = BinomialHeap::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let val = rng.gen_range(0, 1000);

        heap.insert(val);
        expected.push(val);
    }

    expected.sort();

    assert_eq!(heap.len(), expected.len());
    assert_eq!(heap.peek(), Ok(&expected[0]));

    for val in expected {
        assert_eq!(heap.pop(), Ok(val));
    }
    assert_eq!(heap.pop(), Err(Error::EmptyHeap));
    assert!(heap.is_empty());
}

#[test]
fn int_test_binomial_heap_mixed() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut heap = BinomialHeap::new();
    let mut other = BinomialHeap::new();
    let mut expected = BinaryHeap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        match rng.gen_range(0, 10) {
            0..=4 => {
                let val = rng.next_u32();
                heap.insert(val);
                expected.push(Reverse(val));
            },
            5..=6 => {
                let val = rng.next_u32();
                other.insert(val);
                expected.push(Reverse(val));
            },
            7 => {
                heap.append(&mut other);
                assert!(other.is_empty());
            },
            _ => match expected.peek() {
                Some(Reverse(val)) if heap.peek() == Ok(val) => {
                    let val = *val;
                    expected.pop();
                    assert_eq!(heap.pop(), Ok(val));
                },
                _ => {},
            },
        }
        assert_eq!(heap.len() + other.len(), expected.len());
    }

    heap.append(&mut other);
    assert_eq!(heap.len(), expected.len());
    while let Some(Reverse(val)) = expected.pop() {
        assert_eq!(heap.pop(), Ok(val));
    }
    assert_eq!(heap.peek(), Err(Error::EmptyHeap));
}

#[test]
fn int_test_binomial_heap_scenarios() {
    let mut heap = BinomialHeap::new();
    for val in &[5, 3, 8, 1] {
        heap.insert(*val);
    }
    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.pop(), Ok(8));

    let mut n: BinomialHeap<u32> = vec![2, 7].into_iter().collect();
    let mut m: BinomialHeap<u32> = vec![1, 9].into_iter().collect();
    n.append(&mut m);
    assert_eq!(n.len(), 4);
    assert_eq!(m.len(), 0);
    assert_eq!(n.pop(), Ok(1));
    assert_eq!(n.pop(), Ok(2));
    assert_eq!(n.pop(), Ok(7));
    assert_eq!(n.pop(), Ok(9));

    let mut heap = BinomialHeap::new();
    assert_eq!(heap.pop(), Err(Error::EmptyHeap));
    assert_eq!(heap.len(), 0);
    heap.insert(10);
    assert_eq!(heap.peek(), Ok(&10));
}
