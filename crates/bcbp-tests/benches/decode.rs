use bcbp_decoder::BcbpDecoder;
use bcbp_tests::{conditional_unique, mandatory_repeated, mandatory_unique, MINIMAL_SINGLE_LEG};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_decode_minimal(c: &mut Criterion) {
    c.bench_function("decode_minimal", |b| {
        b.iter(|| BcbpDecoder::decode(MINIMAL_SINGLE_LEG).unwrap());
    });
}

fn bench_decode_full_featured(c: &mut Criterion) {
    // One leg with every optional section present: conditional unique,
    // conditional repeated, airline use, structured security.
    let payload = format!(
        "{}{}{}03014XY12^108ABCDEFGH",
        mandatory_unique('1', "DESMARAIS/LUC"),
        mandatory_repeated("YUL", "FRA", "14"),
        conditional_unique('5', "07", "MWO6225"),
    );

    c.bench_function("decode_full_featured", |b| {
        b.iter(|| BcbpDecoder::decode(&payload).unwrap());
    });
}

fn bench_decode_by_leg_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_legs");

    for leg_count in [1usize, 4, 9] {
        let digit = char::from_digit(leg_count as u32, 10).unwrap();
        let mut payload = mandatory_unique(digit, "DESMARAIS/LUC");
        for _ in 0..leg_count {
            payload.push_str(&mandatory_repeated("YUL", "FRA", "05"));
            payload.push_str("03014");
        }

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{leg_count}_legs")),
            &payload,
            |b, p| b.iter(|| BcbpDecoder::decode(p).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_minimal,
    bench_decode_full_featured,
    bench_decode_by_leg_count
);
criterion_main!(benches);
