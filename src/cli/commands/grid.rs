use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::GridLogic;
use crate::core::range::DateRange;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::model::{GridHeader, grid_rows};
use crate::models::meal_slot::MealSlot;
use crate::ui::messages::{error, header, info, warning};
use crate::utils::colors::{colorize_mark, colorize_optional};
use crate::utils::table::{Group, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { from, to } = cmd {
        // Un intervallo non valido non è un crash: messaggio e nessuna tabella.
        let range = match DateRange::from_input(from.as_deref(), to.as_deref()) {
            Ok(r) => r,
            Err(AppError::InvalidRange(msg)) => {
                error(msg);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let grid = GridLogic::load(&mut pool)?;

        if grid.is_empty() {
            info("No attendance records found");
            return Ok(());
        }

        let dates = GridLogic::columns(&grid, Some(&range));
        if dates.is_empty() {
            warning("No attendance recorded in the selected range.");
        }

        let grid_header = GridHeader::new(&dates);
        let mut table = Table::new(grid_header.columns.clone()).with_groups(
            grid_header
                .groups
                .iter()
                .map(|(label, span)| Group {
                    label: label.clone(),
                    span: *span,
                })
                .collect(),
        );

        let identity_cols = grid_header.groups.first().map(|(_, s)| *s).unwrap_or(0);

        for row in grid_rows(&grid, &dates, &cfg.placeholder) {
            let mut cells = row.cells(cfg);
            for (i, cell) in cells.iter_mut().enumerate() {
                if i < identity_cols {
                    *cell = colorize_optional(cell, &cfg.placeholder);
                } else {
                    let offset = i - identity_cols;
                    let per_day = MealSlot::MEALS.len();
                    let present = row.days[offset / per_day].marks()[offset % per_day].is_present();
                    *cell = colorize_mark(cell, present);
                }
            }
            table.add_row(cells);
        }

        header(format!(
            "Meal grid {} → {}",
            range.first_day(),
            range.last_day()
        ));
        println!("{}", table.render());

        let missing = grid.missing_profiles();
        if !missing.is_empty() {
            warning(format!(
                "No student profile for: {} (shown as {})",
                missing.join(", "),
                cfg.placeholder
            ));
        }

        let unclassified = grid.unclassified_count();
        if unclassified > 0 {
            info(format!(
                "{unclassified} scan(s) fell outside every meal window and are not counted."
            ));
        }
    }

    Ok(())
}
