use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

use srvconf::database::{Database, DatabaseConfig};
use srvconf::output::{render, Format};
use srvconf::{ConfigurationFacade, ServerSettings, SettingsStore, SettingsValidator};

const URLS: &[&str] = &[
    "https://example.com",
    "http://localhost:8080/base",
    "  https://padded.example  ",
    "not-a-url",
    "",
];

fn setup_sqlite_facade() -> (TempDir, ConfigurationFacade) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let config = DatabaseConfig::new(temp_dir.path().join("settings.db"));
    let db = Database::open(config).expect("failed to open temporary database");
    let store = SettingsStore::open(Box::new(db), ServerSettings::default())
        .expect("failed to open settings store");
    (temp_dir, ConfigurationFacade::new(store))
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("base_url", |b| {
        b.iter(|| {
            for url in URLS {
                black_box(SettingsValidator::validate_base_url(black_box(url)).is_ok());
            }
        });
    });

    group.bench_function("port", |b| {
        b.iter(|| {
            for port in [-1i64, 0, 1, 8080, 65535, 65536] {
                black_box(SettingsValidator::validate_port(black_box(port)).is_ok());
            }
        });
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let facade = ConfigurationFacade::default();
    facade
        .set_server_settings("https://example.com", 8080)
        .expect("failed to seed settings");
    let failure = facade.set_server_settings("https://example.com", 0);

    let mut group = c.benchmark_group("rendering");
    for (name, format) in [("plain", Format::Plain), ("structured", Format::Structured)] {
        group.bench_function(format!("settings_{name}"), |b| {
            b.iter(|| black_box(render(&Ok::<_, srvconf::Failure>(facade.settings()), format)));
        });
        group.bench_function(format!("failure_{name}"), |b| {
            b.iter(|| black_box(render(&failure, format)));
        });
    }
    group.finish();
}

fn bench_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("updates");

    group.bench_function("in_memory_combined", |b| {
        let facade = ConfigurationFacade::default();
        b.iter(|| {
            facade
                .set_server_settings(black_box("https://example.com"), black_box(8080))
                .expect("update failed")
        });
    });

    group.bench_function("sqlite_combined", |b| {
        b.iter_batched(
            setup_sqlite_facade,
            |(temp_dir, facade)| {
                let _temp_dir = temp_dir;
                facade
                    .set_server_settings("https://example.com", 8080)
                    .expect("update failed")
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_validation, bench_rendering, bench_updates);
criterion_main!(benches);
