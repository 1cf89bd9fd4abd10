use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semvr::{Comparator, Operator, PreReleaseVersion, Semver, Version};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.0.0-beta+exp.sha.5114f85",
        "1.0.0-x.7.z.92",
        "10.20.30-rc.1+20130313144700",
        "1.0.0-alpha.01",
        "1.2",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-rc.1", "1.0.0-rc.1.0"),
    ];
    let parsed: Vec<(Version, Version)> = cases
        .iter()
        .map(|(a, b)| (Version::parse(a).unwrap(), Version::parse(b).unwrap()))
        .collect();

    c.bench_function("compare_parsed", |b| {
        b.iter(|| {
            for (left, right) in &parsed {
                black_box(black_box(left).cmp(black_box(right)));
            }
        })
    });

    c.bench_function("comparator_strings", |b| {
        b.iter(|| {
            for (left, right) in cases {
                black_box(Comparator::compare(
                    black_box(left),
                    Operator::LessThan,
                    black_box(right),
                ).ok());
            }
        })
    });
}

fn bench_long_numeric_pre_release(c: &mut Criterion) {
    let a = PreReleaseVersion::parse("rc.123456789012345678901234567890.1").unwrap();
    let b = PreReleaseVersion::parse("rc.123456789012345678901234567891.1").unwrap();

    c.bench_function("compare_long_numeric_identifiers", |bench| {
        bench.iter(|| black_box(black_box(&a).cmp(black_box(&b))))
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0.0",
        "0.1.0",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "1.0.0-beta.11",
        "1.0.0-beta.2",
        "50.2.0",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)).ok());
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_compare,
    bench_long_numeric_pre_release,
    bench_sort
);
criterion_main!(benches);
