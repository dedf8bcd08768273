use hashtables::{ChainedTable, Config};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rustc_hash::FxHashMap;
use test_log::test;

const OP_COUNT: usize = 50_000;
const KEY_SPACE: usize = 500;

fn check_against_model(table: &ChainedTable, model: &FxHashMap<String, String>) {
    assert_eq!(model.len(), table.len());

    for idx in 0..KEY_SPACE {
        let key = format!("k{idx}");
        assert_eq!(model.get(&key).map(String::as_str), table.retrieve(&key));
    }
}

fn run_model(seed: u64, config: Config) -> hashtables::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut table = config.open_chained()?;
    let mut model = FxHashMap::<String, String>::default();

    for op in 0..OP_COUNT {
        let key = format!("k{}", rng.random_range(0..KEY_SPACE));

        match rng.random_range(0..10) {
            0..=5 => {
                let value = nanoid::nanoid!();
                table.insert(key.as_str(), value.as_str());
                model.insert(key, value);
            }
            6..=8 => {
                assert_eq!(model.remove(&key), table.remove(&key));
            }
            _ => {
                assert_eq!(model.get(&key).map(String::as_str), table.retrieve(&key));
            }
        }

        if op % 5_000 == 0 {
            check_against_model(&table, &model);
        }
    }

    check_against_model(&table, &model);

    Ok(())
}

#[test]
fn chained_model_default() -> hashtables::Result<()> {
    for seed in 0..4 {
        run_model(seed, Config::new(8))?;
    }
    Ok(())
}

#[test]
fn chained_model_no_growth() -> hashtables::Result<()> {
    run_model(42, Config::new(7).max_load_factor(f32::INFINITY))
}

#[test]
fn chained_model_single_bucket() -> hashtables::Result<()> {
    run_model(7, Config::new(1).max_load_factor(f32::INFINITY))
}

#[test]
fn chained_model_eager_growth() -> hashtables::Result<()> {
    run_model(1_337, Config::new(1).max_load_factor(0.1))
}
