// バッチ処理のエンドツーエンドテスト
use data_processor::{
    process_data, transform_item, validate_item, BatchReporter, ConsoleBatchReporter,
    DataProcessor, DefaultProcessorConfig, ProcessingError, ProcessorStats,
};
use serde_json::{json, Value};
use std::cell::RefCell;

use crate::fixtures::{items, mixed_items, numbered_items};

/// 呼び出しを記録するテスト用レポーター
#[derive(Default)]
struct RecordingReporter {
    batches: RefCell<Vec<(usize, usize, usize)>>,
    completed: RefCell<Option<(usize, usize)>>,
}

impl BatchReporter for RecordingReporter {
    fn report_started(&self, _total_items: usize) {}

    fn report_batch(&self, batch_index: usize, batch_len: usize, accepted: usize) {
        self.batches
            .borrow_mut()
            .push((batch_index, batch_len, accepted));
    }

    fn report_failed(&self, _batch_index: usize, _error: &str) {}

    fn report_completed(&self, processed_count: usize, emitted: usize) {
        *self.completed.borrow_mut() = Some((processed_count, emitted));
    }
}

#[test]
fn test_mixed_scenario_with_batch_size_two() {
    let mut processor = DataProcessor::new(2).unwrap();

    let output = processor.process_batch(&mixed_items()).unwrap();

    assert_eq!(
        output,
        items(json!([
            {"id": 1, "value": 10, "processed": true},
            {"id": 3, "value": 20, "processed": true}
        ]))
    );
    assert_eq!(
        processor.get_stats(),
        ProcessorStats {
            processed_count: 3,
            batch_size: 2
        }
    );
}

#[test]
fn test_batch_output_matches_single_pass() {
    // スライス分割は結果に影響しない
    let input = numbered_items(23);
    let expected = process_data(&input).unwrap();

    for batch_size in [1, 2, 5, 23, 100] {
        let mut processor = DataProcessor::new(batch_size).unwrap();
        assert_eq!(processor.process_batch(&input).unwrap(), expected, "batch_size={batch_size}");
        assert_eq!(processor.processed_count(), 23);
    }
}

#[test]
fn test_processed_count_is_sum_of_inputs() {
    let mut processor = DataProcessor::new(4).unwrap();
    let lengths = [0, 1, 4, 9, 3];

    for len in lengths {
        processor.process_batch(&numbered_items(len)).unwrap();
    }

    assert_eq!(processor.processed_count(), lengths.iter().sum::<usize>());
}

#[test]
fn test_output_ids_follow_valid_input_order() {
    let input = items(json!([
        {"id": "z", "value": 1},
        {"id": "skip"},
        {"id": "m", "value": 2},
        {"value": 3},
        {"id": "a", "value": 4}
    ]));

    let valid_ids: Vec<&Value> = input
        .iter()
        .filter(|item| validate_item(item))
        .map(|item| &item["id"])
        .collect();

    let mut processor = DataProcessor::new(2).unwrap();
    let output = processor.process_batch(&input).unwrap();
    let output_ids: Vec<&Value> = output.iter().map(|item| &item["id"]).collect();

    assert_eq!(output_ids, valid_ids);
}

#[test]
fn test_transform_twice_quadruples() {
    let item = items(json!([{"id": 1, "value": 7}])).remove(0);
    let twice = transform_item(&transform_item(&item).unwrap()).unwrap();
    assert_eq!(twice["value"], json!(28));
}

#[test]
fn test_reporter_sees_slice_lengths() {
    let mut processor = DataProcessor::with_reporter(2, RecordingReporter::default()).unwrap();

    processor.process_batch(&mixed_items()).unwrap();

    let reporter = processor.reporter();
    assert_eq!(*reporter.batches.borrow(), vec![(0, 2, 1), (1, 1, 1)]);
    assert_eq!(*reporter.completed.borrow(), Some((3, 2)));
}

#[test]
fn test_processor_from_default_config() {
    let config = DefaultProcessorConfig::new().with_batch_size(3);
    let mut processor = DataProcessor::from_config(&config, ConsoleBatchReporter::quiet()).unwrap();

    processor.process_batch(&numbered_items(10)).unwrap();

    assert_eq!(
        processor.get_stats(),
        ProcessorStats {
            processed_count: 10,
            batch_size: 3
        }
    );
}

#[test]
fn test_failure_discards_partial_output() {
    let mut processor = DataProcessor::new(1).unwrap();
    let input = items(json!([
        {"id": 1, "value": 1},
        {"id": 2, "value": {"nested": 2}}
    ]));

    let error = processor.process_batch(&input).unwrap_err();

    assert!(matches!(error, ProcessingError::NonNumericValueError { .. }));
    assert!(error.to_string().contains("object"));
    assert_eq!(processor.processed_count(), 1);
}
