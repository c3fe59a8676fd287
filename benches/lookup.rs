use std::collections::BTreeMap;

use criterion::{Criterion, criterion_group, criterion_main};
use typenv::{Env, EnvSource, Schema};

fn bench_lookup(c: &mut Criterion) {
    let env = make_env(2_000);

    c.bench_function("get_number_in_memory", |b| {
        b.iter(|| env.get::<f64>("KEY_1000").expect("lookup should succeed"));
    });

    c.bench_function("get_or_missing_in_memory", |b| {
        b.iter(|| env.get_or("ABSENT", 1.0).expect("lookup should succeed"));
    });
}

fn make_env(entries: usize) -> Env {
    let mut schema = Schema::new().number("ABSENT");
    let mut vars = BTreeMap::new();
    for idx in 0..entries {
        let key = format!("KEY_{idx}");
        vars.insert(key.clone(), idx.to_string());
        schema = schema.number(key);
    }
    Env::create(schema).source(EnvSource::from_memory(vars))
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
