use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

/// `close` and `new`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Close => {
            SheetLogic::apply(&mut pool, |sheet| {
                sheet.close();
                Ok(())
            })?;
            SheetLogic::audit(&pool, "close", "", "Sheet closed");
            success("Sheet closed. Export or print it, then start a new flight with 'new'.");
        }

        Commands::New { yes } => {
            let current = SheetLogic::snapshot(&pool);
            if !*yes
                && !current.is_closed()
                && !current.rows.is_empty()
                && !confirm(&format!(
                    "The sheet is still open with {} rows. Drop them and start a new flight?",
                    current.rows.len()
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            SheetLogic::apply(&mut pool, |sheet| {
                sheet.start_new_flight();
                Ok(())
            })?;
            SheetLogic::audit(&pool, "new", "", "New flight started");
            success("New flight started.");
        }

        _ => {}
    }

    Ok(())
}
