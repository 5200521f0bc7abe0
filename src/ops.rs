use log::{info, warn};
use std::io::{BufRead, Write};

use crate::derive::KeyGenerator;
use crate::output::*;
use crate::prompt::*;
use crate::types::*;
use crate::utils::*;
use crate::wallet::*;

/// Answers supplied up front; anything left as `None` is prompted for.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub count: Option<u64>,
    pub selection: Option<Selection>,
    pub config: OutputConfig,
    pub banner: bool,
}

#[derive(Debug)]
pub enum RunOutcome {
    Aborted,
    Completed(RunSummary),
}

/// Full interactive run: collect input, prepare files, generate, report.
pub fn run_generator<G, S, R, W>(options: RunOptions, generator: &mut G, sink: S, input: &mut R, output: &mut W) -> Result<RunOutcome, Box<dyn std::error::Error>>
where
    G: KeyGenerator,
    S: LineSink,
    R: BufRead,
    W: Write,
{
    if options.banner {
        print_banner(output)?;
    }
    info!("Secure EVM Wallet Generator Initialized...");
    let count = match options.count {
        Some(count) => count,
        None => prompt_wallet_count(input, output)?,
    };
    let selection = match options.selection {
        Some(selection) => selection,
        None => prompt_output_selection(input, output)?,
    };
    let kinds = match selection {
        Selection::Abort => {
            info!("Exiting...");
            return Ok(RunOutcome::Aborted);
        }
        Selection::Export(kinds) => kinds,
    };
    if kinds.is_empty() {
        warn!("No recognised output selected; wallets will only be previewed.");
    } else {
        ensure_out_dir(&options.config)?;
    }
    let mut router = OutputRouter::new(options.config, sink);
    router.initialize(&kinds);
    info!("Generating {} wallets...", count);
    let summary = generate_wallets(count, &kinds, generator, &mut router)?;
    if let Err(e) = print_summary(output, &summary) {
        warn!("Could not print summary: {}", e);
    }
    Ok(RunOutcome::Completed(summary))
}
