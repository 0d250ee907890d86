use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::or_dash;
use crate::utils::time::{now_clock, require_clock};

/// Duty window edits. Never blocked by a closed sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duty {
        start,
        end,
        now_start,
        now_end,
    } = cmd
    {
        let start = match (now_start, start) {
            (true, _) => Some(now_clock()),
            (false, Some(s)) => Some(require_clock(s)?),
            (false, None) => None,
        };
        let end = match (now_end, end) {
            (true, _) => Some(now_clock()),
            (false, Some(e)) => Some(require_clock(e)?),
            (false, None) => None,
        };

        let changed = start.is_some() || end.is_some();
        let mut pool = DbPool::new(&cfg.database)?;

        let duty = SheetLogic::apply(&mut pool, |sheet| {
            sheet.set_duty(start, end);
            Ok(sheet.duty.clone())
        })?;

        if changed {
            SheetLogic::audit(
                &pool,
                "duty",
                "",
                &format!("{}-{}", duty.duty_start, duty.duty_end),
            );
        }

        println!(
            "🕒 Duty: {} → {}  ({})",
            or_dash(&duty.duty_start),
            or_dash(&duty.duty_end),
            or_dash(&duty.duration())
        );
    }
    Ok(())
}
