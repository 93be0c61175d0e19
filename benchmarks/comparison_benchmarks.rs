#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: announce-query vs url crate's form_urlencoded
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::hint::black_box;

const BASE_ADDR: &str = "https://www.subdomain.tracker.com:80/announce/?";

/// Typical announce queries, from minimal to fully populated
const ANNOUNCE_QUERIES: &[&str] = &[
    "peer_id=-TEST01-6wfG2wk6wWLc&port=6881&downloaded=1234&left=4321",
    "peer_id=-TEST01-6wfG2wk6wWLc&ip=192.168.0.1&port=6881&downloaded=1234&left=4321&event=started&numwant=13",
    "peer_id=%3Ckey%3A+0x90%3E&port=6881&downloaded=1234&left=4321&compact=0&no_peer_id=1&key=peerKey&trackerid=trackerId",
    "info_hash=%12%34%56%78%9A%BC%DE%F0%00%FF%12%34%56%78%9A%BC%DE%F0%00%FF&peer_id=%2DTR2940%2D%A1%B2%C3%D4%E5%F6%07%18%29%3A&port=51413&uploaded=0&downloaded=0&left=1048576&compact=1&event=started",
    "peer_id=&compact=",
];

fn announce_urls() -> Vec<String> {
    ANNOUNCE_QUERIES
        .iter()
        .map(|query| format!("{BASE_ADDR}{query}"))
        .collect()
}

/// Equivalent work with a generic decoder: locate the query, decode, build a map
fn form_urlencoded_parse(url: &str) -> HashMap<String, String> {
    let query = url.split_once('?').map_or("", |(_, query)| query);
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn bench_parse_announce_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_announce");
    let urls = announce_urls();

    group.bench_function("announce_query", |b| {
        b.iter(|| {
            for url in &urls {
                black_box(announce_query::parse(black_box(url)).unwrap());
            }
        });
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            for url in &urls {
                black_box(form_urlencoded_parse(black_box(url)));
            }
        });
    });

    group.finish();
}

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaling");

    for count in [10usize, 100, 1_000] {
        let query: Vec<String> = (0..count).map(|i| format!("k{i}=%41v{i}")).collect();
        let url = format!("{BASE_ADDR}{}", query.join("&"));

        group.bench_with_input(BenchmarkId::new("announce_query", count), &url, |b, url| {
            b.iter(|| announce_query::parse(black_box(url)).unwrap());
        });
    }

    group.finish();
}

fn bench_reject_invalid(c: &mut Criterion) {
    let mut group = c.benchmark_group("reject_invalid");
    let input = format!("{BASE_ADDR}info_hash=%0%a");

    group.bench_function("announce_query", |b| {
        b.iter(|| announce_query::parse(black_box(&input)).unwrap_err());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_announce_all,
    bench_parse_scaling,
    bench_reject_invalid
);

criterion_main!(benches);
