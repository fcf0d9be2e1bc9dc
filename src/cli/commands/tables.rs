use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::{labour, ratio, sales};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::{Analysis, HourTable};
use crate::utils::colors::{RESET, color_for_ratio};
use crate::utils::formatting::{format_amount, format_ratio};
use crate::utils::table::{Column, Table};

/// Handle `labour`, `sales` and `ratio`: print one hourly table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (shifts, transactions) = Core::load_inputs(cfg)?;

    let (header, table, is_ratio) = match cmd {
        Commands::Labour => ("labour", labour::allocate_shifts(&shifts), false),
        Commands::Sales => (
            "sales",
            sales::aggregate_sales(&transactions, cfg.sales_decimals),
            false,
        ),
        Commands::Ratio => {
            let labour = labour::allocate_shifts(&shifts);
            let sales = sales::aggregate_sales(&transactions, cfg.sales_decimals);
            ("ratio", ratio::compute_ratio(&labour, &sales), true)
        }
        _ => return Ok(()),
    };

    println!("{}", render_single(header, &table, is_ratio));
    Ok(())
}

fn render_single(header: &str, table: &HourTable, is_ratio: bool) -> String {
    let mut out = Table::new(vec![
        Column::new("hour", 6),
        Column::new(header, 12).right(),
    ]);

    for (slot, value) in table.iter() {
        let cell = if is_ratio {
            format!("{}{}{RESET}", color_for_ratio(value), format_ratio(value))
        } else {
            format_amount(value)
        };
        out.add_row(vec![slot.key(), cell]);
    }

    out.render()
}

/// Full per-hour report: labour, sales and ratio side by side.
pub fn render_report(analysis: &Analysis) -> String {
    let mut out = Table::new(vec![
        Column::new("hour", 6),
        Column::new("labour", 12).right(),
        Column::new("sales", 12).right(),
        Column::new("ratio", 12).right(),
        Column::new("", 6),
    ]);

    for (slot, ratio) in analysis.ratios.iter() {
        let mark = if slot == analysis.best_hour {
            "best"
        } else if slot == analysis.worst_hour {
            "worst"
        } else {
            ""
        };

        out.add_row(vec![
            slot.key(),
            format_amount(analysis.labour[slot]),
            format_amount(analysis.sales[slot]),
            format!("{}{}{RESET}", color_for_ratio(ratio), format_ratio(ratio)),
            mark.to_string(),
        ]);
    }

    out.render()
}
