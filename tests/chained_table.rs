use hashtables::{hash::bucket_index, ChainedTable, Config};
use test_log::test;

const ITEM_COUNT: usize = 1_000;

#[test]
fn chained_table_ten_keys() -> hashtables::Result<()> {
    let mut table = Config::new(8).open_chained()?;

    for idx in 0..10 {
        table.insert(format!("key-{idx}"), format!("val-{idx}"));
    }

    assert_eq!(10, table.len());

    for idx in 0..10 {
        assert_eq!(
            Some(&*format!("val-{idx}")),
            table.retrieve(&format!("key-{idx}")),
        );
    }

    for idx in (0..10).rev() {
        assert_eq!(
            Some(format!("val-{idx}")),
            table.remove(&format!("key-{idx}")),
        );
    }

    assert_eq!(0, table.len());
    assert!(table.is_empty());

    for idx in 0..10 {
        assert_eq!(None, table.retrieve(&format!("key-{idx}")));
    }

    // Not found, only logs
    assert_eq!(None, table.remove("key-9"));
    assert_eq!(0, table.len());

    Ok(())
}

#[test]
fn chained_table_latest_value_wins() {
    let mut table = ChainedTable::new(16);

    table.insert("a", "1");
    let len = table.len();

    table.insert("a", "2");
    assert_eq!(len, table.len());
    assert_eq!(Some("2"), table.retrieve("a"));
}

#[test]
fn chained_table_remove_decrements() {
    let mut table = ChainedTable::new(16);

    for idx in 0..5 {
        table.insert(format!("key-{idx}"), format!("val-{idx}"));
    }

    let len = table.len();
    table.remove("key-2");

    assert_eq!(len - 1, table.len());
    assert_eq!(None, table.retrieve("key-2"));
}

#[test]
fn chained_table_same_bucket() -> hashtables::Result<()> {
    let mut table = Config::new(8)
        .max_load_factor(f32::INFINITY)
        .open_chained()?;

    let keys = (0..ITEM_COUNT)
        .map(|idx| format!("key-{idx}"))
        .filter(|key| bucket_index(key, 8) == 3)
        .collect::<Vec<_>>();

    assert!(keys.len() > 1);

    for key in &keys {
        table.insert(key.as_str(), key.to_uppercase());
    }

    assert_eq!(keys.len(), table.len());
    assert_eq!(keys.len(), table.longest_chain());

    for key in &keys {
        assert_eq!(Some(&*key.to_uppercase()), table.retrieve(key));
    }

    Ok(())
}

#[test]
fn chained_table_random_values() {
    let mut table = ChainedTable::new(16);

    let items = (0..ITEM_COUNT)
        .map(|idx| (format!("key-{idx}"), nanoid::nanoid!()))
        .collect::<Vec<_>>();

    for (key, value) in &items {
        table.insert(key.as_str(), value.as_str());
    }

    assert_eq!(ITEM_COUNT, table.len());

    for (key, value) in &items {
        assert_eq!(Some(value.as_str()), table.retrieve(key));
    }

    for (key, value) in items.iter().step_by(3) {
        assert_eq!(Some(value), table.remove(key).as_ref());
    }

    for (idx, (key, value)) in items.iter().enumerate() {
        if idx % 3 == 0 {
            assert_eq!(None, table.retrieve(key));
        } else {
            assert_eq!(Some(value.as_str()), table.retrieve(key));
        }
    }

    assert_eq!(ITEM_COUNT - ITEM_COUNT.div_ceil(3), table.len());
}

#[test]
fn chained_table_empty_key() {
    let mut table = ChainedTable::new(8);

    table.insert("", "empty");
    assert_eq!(Some("empty"), table.retrieve(""));

    assert_eq!(Some("empty".into()), table.remove(""));
    assert!(table.is_empty());
}
