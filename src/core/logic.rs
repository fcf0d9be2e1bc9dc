use crate::config::Config;
use crate::core::calculator::{labour, ratio, sales};
use crate::errors::AppResult;
use crate::input::{load_shifts, load_transactions};
use crate::models::{Analysis, ShiftRecord, TransactionRecord};
use tracing::{debug, info};

pub struct Core;

impl Core {
    /// Full pipeline over records already in memory.
    pub fn analyze(
        shifts: &[ShiftRecord],
        transactions: &[TransactionRecord],
        sales_decimals: u32,
    ) -> AppResult<Analysis> {
        let labour = labour::allocate_shifts(shifts);
        let sales = sales::aggregate_sales(transactions, sales_decimals);
        let ratios = ratio::compute_ratio(&labour, &sales);
        let (best_hour, worst_hour) = ratio::select_best_worst(&ratios)?;

        debug!(
            labour_total = labour.total(),
            sales_total = sales.total(),
            "analysis complete"
        );

        Ok(Analysis {
            labour,
            sales,
            ratios,
            best_hour,
            worst_hour,
        })
    }

    /// Load both CSV files named by `cfg` and run the pipeline.
    pub fn analyze_files(cfg: &Config) -> AppResult<Analysis> {
        let (shifts, transactions) = Self::load_inputs(cfg)?;
        Self::analyze(&shifts, &transactions, cfg.sales_decimals)
    }

    pub fn load_inputs(cfg: &Config) -> AppResult<(Vec<ShiftRecord>, Vec<TransactionRecord>)> {
        let shifts = load_shifts(&cfg.shifts_file, &cfg.break_separator)?;
        let transactions = load_transactions(&cfg.transactions_file)?;
        info!(
            shifts = shifts.len(),
            transactions = transactions.len(),
            "inputs loaded"
        );
        Ok((shifts, transactions))
    }
}
