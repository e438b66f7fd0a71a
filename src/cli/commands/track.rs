use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::TrackLogic;
use crate::core::classifier::classify_at;
use crate::db::pool::DbPool;
use crate::db::queries::load_attendance;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_meal;
use crate::utils::date::format_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { by, query } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let all = load_attendance(&pool.conn, None)?;

        let records = TrackLogic::search(&all, *by, query.as_deref().unwrap_or(""))?;

        if records.is_empty() {
            info("No attendance records found");
            return Ok(());
        }

        for (date, events) in TrackLogic::group_by_date(&records) {
            header(format_date(&date));

            let mut table = Table::new(vec!["Unique ID", "Roll No", "Time", "Meal", "Status"]);
            for ev in &events {
                let slot = classify_at(&ev.timestamp);
                table.add_row(vec![
                    ev.student_id.clone(),
                    ev.roll_no.clone(),
                    ev.time_str(),
                    colorize_meal(slot.as_str(), slot.is_meal()),
                    ev.recorded_status.clone(),
                ]);
            }
            println!("{}", table.render());
        }

        info(format!("{} record(s) shown.", records.len()));
    }

    Ok(())
}
