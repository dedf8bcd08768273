#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use hashtables::Config;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    Insert(u8, String),
    Remove(u8),
    Retrieve(u8),
    Resize,
}

// NOTE: Small key space so that keys are reused and chains get long
fn key(k: u8) -> String {
    format!("k{}", k % 64)
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    let capacity = (u8::arbitrary(&mut unstructured).unwrap_or(1) as usize).max(1);

    let max_load_factor = (u8::arbitrary(&mut unstructured).unwrap_or(7) as f32 / 10.0).max(0.1);

    let Ok(ops) = <Vec<Op> as Arbitrary>::arbitrary(&mut unstructured) else {
        return;
    };

    let mut table = Config::new(capacity)
        .max_load_factor(max_load_factor)
        .open_chained()
        .unwrap();

    let mut model = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(k, value) => {
                table.insert(key(k), value.clone());
                model.insert(key(k), value);
            }
            Op::Remove(k) => {
                assert_eq!(model.remove(&key(k)), table.remove(&key(k)));
            }
            Op::Retrieve(k) => {
                assert_eq!(
                    model.get(&key(k)).map(String::as_str),
                    table.retrieve(&key(k)),
                );
            }
            Op::Resize if table.capacity() < 4_096 => {
                let capacity = table.capacity();
                table.resize();
                assert_eq!(capacity * 2, table.capacity());
            }
            Op::Resize => {}
        }

        assert_eq!(model.len(), table.len());
    }

    for (k, v) in &model {
        assert_eq!(Some(v.as_str()), table.retrieve(k));
    }
});
