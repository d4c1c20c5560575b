use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use huffc::{encode_text, HuffcConfig};

fn bench_encode(c: &mut Criterion) {
	let text = "abracadabra".repeat(3); // 33 characters, 5 distinct symbols
	let config = HuffcConfig::default();
	let mut group = c.benchmark_group("coding");
	group.throughput(Throughput::Elements(text.chars().count() as u64));
	group.bench_function("encode_small_text", |b| {
		b.iter(|| encode_text(&text, &config).unwrap());
	});
	group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
