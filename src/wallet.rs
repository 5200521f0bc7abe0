use log::debug;

use crate::constants::*;
use crate::derive::KeyGenerator;
use crate::output::*;
use crate::types::*;

/// Generates `count` wallets one after another and routes each through every
/// selected kind before the next wallet is created.
pub fn generate_wallets<G: KeyGenerator, S: LineSink>(count: u64, selection: &OutputSelection, generator: &mut G, router: &mut OutputRouter<S>) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let mut summary = RunSummary { total: 0, rows: Vec::with_capacity(preview_capacity(count)), ..Default::default() };
    for i in 0..count {
        let key = generator.generate().map_err(|e| format!("Key generation failed for wallet {}: {}", i + 1, e))?;
        let record = WalletRecord::new(i + 1, key);
        for &kind in selection {
            router.emit(&record, kind);
        }
        if summary.rows.len() < PREVIEW_ROWS {
            summary.rows.push(record.preview());
        }
        summary.total += 1;
        debug!("wallet {} of {} done", record.index, count);
    }
    summary.files_written = router.files_written();
    summary.failed_writes = router.failures();
    Ok(summary)
}

fn preview_capacity(count: u64) -> usize {
    usize::try_from(count).map_or(PREVIEW_ROWS, |c| c.min(PREVIEW_ROWS))
}
