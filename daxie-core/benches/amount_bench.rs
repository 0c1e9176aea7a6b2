use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daxie_core::{amount_to_chinese, get_amount, parse_chinese, Decimal};

const NOTICE: &str = "定给予当事人处以罚款人民币陆拾贰万贰仟玖佰壹拾玖元肆角的行政处罚";
const UPPERCASE: &str = "拾壹亿壹仟万伍仟肆佰壹拾元贰角捌分肆厘";

fn extraction_benchmark(c: &mut Criterion) {
    c.bench_function("get_amount digits", |b| b.iter(|| get_amount(black_box("已履行行政处罚决定,罚款10000元"))));
    c.bench_function("get_amount uppercase", |b| b.iter(|| get_amount(black_box(NOTICE))));
}

fn conversion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_chinese", |b| b.iter(|| parse_chinese(black_box(UPPERCASE))));

    let value = Decimal::new(1_110_005_410_284, 3);
    c.bench_function("amount_to_chinese", |b| b.iter(|| amount_to_chinese(black_box(value))));
}

criterion_group!(benches, extraction_benchmark, conversion_benchmark);
criterion_main!(benches);
