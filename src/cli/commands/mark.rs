use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::MarkLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{meal, success};
use crate::utils::time::{self, parse_timestamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        unique_id,
        status,
        at,
    } = cmd
    {
        //
        // 1. Resolve scan time (default = now)
        //
        let timestamp = match at {
            Some(s) => parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))?,
            None => time::now(),
        };

        let status = status.as_deref().unwrap_or(cfg.default_status.as_str());

        //
        // 2. Store the scan
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let (ev, slot) = MarkLogic::mark(&mut pool, unique_id, status, timestamp)?;

        success(format!(
            "Attendance marked for {} ({}) at {} {}",
            ev.name,
            ev.roll_no,
            ev.date_str(),
            ev.time_str()
        ));

        //
        // 3. Report the meal it counts for
        //
        meal(slot);
    }

    Ok(())
}
