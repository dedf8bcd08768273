#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use hashtables::{hash::bucket_index, Config};
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Insert(String, String),
    Remove(String),
    Retrieve(String),
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    let capacity = (u8::arbitrary(&mut unstructured).unwrap_or(1) as usize).max(1);

    let Ok(ops) = <Vec<Op> as Arbitrary>::arbitrary(&mut unstructured) else {
        return;
    };

    let mut table = Config::new(capacity).open_fixed().unwrap();

    // Models the table as slot -> value
    let mut slots = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(key, value) => {
                slots.insert(bucket_index(&key, capacity), value.clone());
                table.insert(key, value);
            }
            Op::Remove(key) => {
                slots.remove(&bucket_index(&key, capacity));
                table.remove(&key);
            }
            Op::Retrieve(key) => {
                assert_eq!(
                    slots.get(&bucket_index(&key, capacity)).map(String::as_str),
                    table.retrieve(&key),
                );
            }
        }

        assert_eq!(slots.len(), table.len());
        assert!(table.len() <= capacity);
    }
});
