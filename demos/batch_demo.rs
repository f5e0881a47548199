use std::sync::{Arc, Mutex};
use std::thread;

use data_processor::{ConsoleBatchReporter, DataProcessor, Item};
use serde_json::json;

fn sample_items(offset: usize, count: usize) -> Vec<Item> {
    (offset..offset + count)
        .map(|i| {
            // 5件に1件は value を欠落させて無効データにする
            let value = if i % 5 == 0 {
                json!({"id": i})
            } else {
                json!({"id": i, "value": i * 10})
            };
            value.as_object().cloned().unwrap_or_default()
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== バッチ処理デモ ===\n");

    // 1. 単一スレッドでの利用
    println!("1. 単一スレッド:");
    let mut processor = DataProcessor::with_reporter(4, ConsoleBatchReporter::new())?;
    let output = processor.process_batch(&sample_items(0, 10))?;
    println!("  出力件数: {}", output.len());
    println!("  統計: {:?}", processor.get_stats());

    println!();

    // 2. 複数スレッドで共有する場合は呼び出し側でロックする
    println!("2. Mutexで共有:");
    let shared = Arc::new(Mutex::new(DataProcessor::new(8)?));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let items = sample_items(worker * 100, 25);
                let mut processor = shared.lock().map_err(|_| anyhow::anyhow!("lock poisoned"))?;
                let output = processor.process_batch(&items)?;
                Ok::<usize, anyhow::Error>(output.len())
            })
        })
        .collect();

    let mut emitted = 0;
    for handle in handles {
        emitted += handle
            .join()
            .map_err(|_| anyhow::anyhow!("worker panicked"))??;
    }

    let stats = shared
        .lock()
        .map_err(|_| anyhow::anyhow!("lock poisoned"))?
        .get_stats();
    println!("  出力件数: {emitted}");
    println!("  統計: {stats:?}");

    Ok(())
}
