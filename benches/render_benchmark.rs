//! Full-frame render benchmarks
//!
//! Measures one complete frame (page blocks, navbar, hints) at common
//! terminal sizes, at rest and mid-reveal.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::app::App;
use folio::config::FolioConfig;
use folio::page::Section;
use folio::ui;
use ratatui::{backend::TestBackend, Terminal};

const SIZES: [(u16, u16); 3] = [(80, 24), (120, 40), (200, 60)];

fn bench_render_at_rest(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_at_rest");

    for (width, height) in SIZES {
        let mut app = App::new(FolioConfig::default().with_animations(false)).with_size(width, height);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(),
            |b, _| {
                b.iter(|| {
                    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
                    black_box(terminal.backend().buffer().area)
                });
            },
        );
    }

    group.finish();
}

/// Skills section mid-transition: every block is faded and offset.
fn bench_render_mid_reveal(c: &mut Criterion) {
    let mut app = App::new(FolioConfig::default()).with_size(120, 40);
    app.scroll_to(app.layout().anchor(Section::Skills));
    for _ in 0..20 {
        app.tick();
    }
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    c.bench_function("render_mid_reveal_120x40", |b| {
        b.iter(|| {
            terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
        });
    });
}

/// Form section with the contact form focused and filled in.
fn bench_render_contact(c: &mut Criterion) {
    let mut app = App::new(FolioConfig::default().with_animations(false)).with_size(120, 40);
    app.focus_field(folio::form::Field::Message);
    app.form
        .update_field(folio::form::Field::Message, "Hello!\n".repeat(12));
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    c.bench_function("render_contact_form_120x40", |b| {
        b.iter(|| {
            terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
        });
    });
}

criterion_group!(benches, bench_render_at_rest, bench_render_mid_reveal, bench_render_contact);
criterion_main!(benches);
