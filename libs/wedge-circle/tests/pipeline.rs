use config::constants::QUANTIZATION_LIMIT;
use config::search::SearchConfig;
use wedge_circle::store::{save_candidates, ParityFilter};
use wedge_circle::{
    compile, CancellationToken, MemoryStore, RadiusSearchEngine, RecordFilter, ResultStore,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn sweep_store_and_compile_every_record() {
    init_tracing();
    let mut store = MemoryStore::new();

    for odd_center in [false, true] {
        let config = SearchConfig::new(odd_center, 2.0, 14.0, 0.05, 0.5).unwrap();
        let report = RadiusSearchEngine::new(config).run();
        assert!(!report.cancelled);
        assert_eq!(report.evaluated, report.samples);
        let summary = save_candidates(&mut store, &report.candidates);
        assert_eq!(summary.inserted, report.candidates.len());
    }

    let records = store.records();
    assert!(records.iter().any(|r| r.odd_center));
    assert!(records.iter().any(|r| !r.odd_center));

    for record in &records {
        let polygon = record.polygon().unwrap();
        assert_eq!(polygon.sides(), record.sides);

        let shapes = compile(&polygon, QUANTIZATION_LIMIT).unwrap();
        assert_eq!(shapes.doubled_area(), polygon.doubled_area());
        assert!(shapes.max_span() <= QUANTIZATION_LIMIT);
    }
}

#[test]
fn rerunning_a_sweep_changes_nothing() {
    let config = SearchConfig::new(false, 4.0, 9.0, 0.1, 0.5).unwrap();
    let mut store = MemoryStore::new();

    let first = RadiusSearchEngine::new(config).run();
    save_candidates(&mut store, &first.candidates);
    let before = store.records();

    let second = RadiusSearchEngine::new(config).run();
    let summary = save_candidates(&mut store, &second.candidates);

    assert_eq!(summary.inserted + summary.replaced, 0);
    assert_eq!(store.records(), before);
}

#[test]
fn filtered_query_feeds_the_compiler() {
    let config = SearchConfig::new(true, 3.0, 12.0, 0.05, 0.5).unwrap();
    let report = RadiusSearchEngine::new(config).run();
    let mut store = MemoryStore::new();
    save_candidates(&mut store, &report.candidates);

    let filter = RecordFilter {
        max_deviation: Some(0.3),
        min_uniformity: Some(0.2),
        diameter: Some(6..=20),
        parity: ParityFilter::Odd,
        ..RecordFilter::default()
    };
    let hits = store.query(&filter);
    assert!(!hits.is_empty());

    for record in hits {
        assert!(record.max_deviation <= 0.3);
        let polygon = record.polygon().unwrap();
        assert!(compile(&polygon, QUANTIZATION_LIMIT).is_ok());
    }
}

#[test]
fn sweep_cancelled_before_start_evaluates_nothing() {
    let config = SearchConfig::new(false, 5.0, 40.0, 0.01, 0.5).unwrap();
    let token = CancellationToken::new();
    token.cancel();

    let engine = RadiusSearchEngine::new(config).with_cancellation(token);
    let report = engine.run();

    assert!(report.cancelled);
    assert!(report.evaluated < report.samples);
    assert!(report.candidates.is_empty());
}
