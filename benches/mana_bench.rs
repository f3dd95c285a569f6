use criterion::{criterion_group, criterion_main, Bencher, Criterion};

use kamifuda::domain::icons::IconRegistry;
use kamifuda::domain::mana;

fn bench(c: &mut Criterion) {
    let simple = "{2}{R}{U}";
    let awkward = "{X}{X}{W/U/P}{2/B}{G/P}{ s }{10}{H/R}";
    let registry = IconRegistry::new("assets/mana");

    c.bench_function("Parse simple cost", |b: &mut Bencher| {
        b.iter(|| mana::parse_mana_cost(Some(simple)))
    });

    c.bench_function("Parse awkward cost", |b: &mut Bencher| {
        b.iter(|| mana::parse_mana_cost(Some(awkward)))
    });

    c.bench_function("Resolve icons", |b: &mut Bencher| {
        b.iter(|| registry.icons_for(Some(awkward), true))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench
}

criterion_main!(benches);
