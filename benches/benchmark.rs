//! Performance benchmarks for accessible-reader.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Main-content selection on a small synthetic page
//! - A full activate/deactivate cycle
//! - Scoring fallback on a page with many candidate containers

use accessible_reader::{dom, isolate, select_main_content, Options, ReaderView};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
</head>
<body>
    <header>
        <nav>
            <a href="/">Home</a>
            <a href="/about">About</a>
        </nav>
    </header>
    <article>
        <h1>Sample Article Title</h1>
        <p class="byline">By John Doe</p>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that the reader view should keep while hiding the page chrome.</p>
        <p>Here is a second paragraph with more content. The isolation step should
        preserve the text while removing navigation and other boilerplate.</p>
        <p>A third paragraph ensures we have enough content for meaningful
        benchmarking of the selection and activation steps.</p>
        <div class="share-buttons">Share</div>
    </article>
    <aside>
        <h3>Related Articles</h3>
        <ul>
            <li>Related article 1</li>
            <li>Related article 2</li>
        </ul>
    </aside>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn bench_select_main_content(c: &mut Criterion) {
    let doc = dom::parse(SAMPLE_HTML);
    let options = Options::default();

    c.bench_function("select_main_content", |b| {
        b.iter(|| select_main_content(black_box(&doc), black_box(&options)).is_some());
    });
}

fn bench_activation_cycle(c: &mut Criterion) {
    let doc = dom::parse(SAMPLE_HTML);

    c.bench_function("activate_deactivate", |b| {
        b.iter(|| {
            let mut reader = ReaderView::new(black_box(&doc));
            let _ = reader.activate();
            reader.deactivate();
        });
    });
}

fn bench_isolate(c: &mut Criterion) {
    c.bench_function("isolate", |b| {
        b.iter(|| isolate(black_box(SAMPLE_HTML)));
    });
}

/// Pages without semantic markup, so every container is scored.
fn bench_scoring_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring_fallback");

    for blocks in [10usize, 100, 500] {
        let mut html = String::from("<html><body>");
        for i in 0..blocks {
            html.push_str(&format!(
                "<div class=\"block-{i}\"><h2>Block {i}</h2><p>Some text for block {i}.</p></div>"
            ));
        }
        html.push_str("</body></html>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("isolate", blocks), &html, |b, html| {
            b.iter(|| isolate(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select_main_content,
    bench_activation_cycle,
    bench_isolate,
    bench_scoring_fallback
);
criterion_main!(benches);
