//! Lexer Benchmarks
//!
//! Measures engine throughput on a C-like rule table.
//! Run with: `cargo bench --package lexel-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexel_lex::{FloatRules, IntegerRules, Lexer, RuleTable, TokenType, WordRule};

fn c_like_rules() -> RuleTable {
    let mut builder = RuleTable::builder()
        .line_comment("//")
        .unnestable_comment("/*", "*/")
        .line_string("\"", "\"", TokenType::new(2))
        .escape_chars("\\")
        .digit_separators("_")
        .integers(
            IntegerRules::new(TokenType::new(3))
                .default_base(10)
                .prefix("0x", 16)
                .prefix("0b", 2),
        )
        .floats(
            FloatRules::new(TokenType::new(4))
                .default_base(10, "e")
                .exponent_signs("+-")
                .radix_separators("."),
        )
        .default_word_type(TokenType::new(1))
        .word_rule(WordRule::Word);

    let punctuation = [
        "->", "<=", ">=", "==", "!=", "&&", "||", "(", ")", "{", "}", "[", "]", ";", ",", ":",
        ".", "=", "+", "-", "*", "/", "<", ">", "!", "&",
    ];
    for (i, punct) in punctuation.iter().enumerate() {
        builder = builder.punctuation(punct, TokenType::new(100 + i as i32));
    }
    for (i, keyword) in ["fn", "if", "else", "return", "struct", "let"].iter().enumerate() {
        builder = builder.keyword(keyword, TokenType::new(200 + i as i32));
    }
    builder.build()
}

fn lexer_token_count(source: &str, rules: &RuleTable) -> usize {
    Lexer::new(source, rules).count()
}

fn bench_lexer_simple(c: &mut Criterion) {
    let rules = c_like_rules();
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42; fn main() { let y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42;"), &rules))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source), &rules))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let rules = c_like_rules();
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        /* Recursive fibonacci */
        fn fibonacci(n: i32) -> i32 {
            if n <= 1 {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }

        struct Point {
            x: f64, // horizontal
            y: f64,
        }

        fn main() {
            let p = Point { x: 1.5e3, y: 0.25 };
            let mask = 0xFF_FF & 0b1010;
            printf("Point at (%f, %f)\n", p.x, p.y);
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source), &rules))
    });

    let large = source.repeat(100);
    group.throughput(Throughput::Bytes(large.len() as u64));

    group.bench_function("large_source", |b| {
        b.iter(|| lexer_token_count(black_box(&large), &rules))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let rules = c_like_rules();
    let mut group = c.benchmark_group("lexer_literals");

    let numbers = "1 22 333 0xDEAD_BEEF 0b1010 3.14 2.5e-3 1_000_000 ".repeat(50);
    group.throughput(Throughput::Bytes(numbers.len() as u64));
    group.bench_function("numbers", |b| {
        b.iter(|| lexer_token_count(black_box(&numbers), &rules))
    });

    let strings = r#""plain" "with \"escapes\"" "tab\there" "#.repeat(50);
    group.throughput(Throughput::Bytes(strings.len() as u64));
    group.bench_function("strings", |b| {
        b.iter(|| lexer_token_count(black_box(&strings), &rules))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_complex,
    bench_lexer_literals
);
criterion_main!(benches);
