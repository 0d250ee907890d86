use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::field::RowField;
use crate::models::log_row::FERRY_LABEL;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;

/// Row commands: add, set, now, clear, del.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Add { ferry: true } => {
            let added = SheetLogic::apply(&mut pool, |sheet| sheet.add_ferry_row())?;
            if added {
                SheetLogic::audit(&pool, "add", FERRY_LABEL, "Added ferry row");
                success("Ferry row added.");
            } else {
                warning("The sheet already has a ferry row.");
            }
        }

        Commands::Add { ferry: false } => {
            let label = SheetLogic::apply(&mut pool, |sheet| sheet.add_load_row())?;
            SheetLogic::audit(&pool, "add", &label, "Added load row");
            success(format!("Load {label} added."));
        }

        Commands::Set { load, field, value } => {
            let f = RowField::from_name(field)?;
            SheetLogic::apply(&mut pool, |sheet| sheet.update_field(load, f, value))?;
            SheetLogic::audit(&pool, "set", load, &format!("{}='{}'", f.header(), value));
            success(format!("Load {load}: {} = '{value}'", f.header()));
        }

        Commands::Now { load, field } => {
            let f = RowField::from_name(field)?;
            let now = SheetLogic::apply(&mut pool, |sheet| sheet.set_now(load, f))?;
            SheetLogic::audit(&pool, "now", load, &format!("{}={}", f.header(), now));
            success(format!("Load {load}: {} = {now}", f.header()));
        }

        Commands::Clear { load } => {
            SheetLogic::apply(&mut pool, |sheet| sheet.clear_row(load))?;
            SheetLogic::audit(&pool, "clear", load, "Row cleared");
            success(format!("Load {load} cleared."));
        }

        Commands::Del { load, yes } => {
            if !*yes && !confirm(&format!("Delete load {load}? This action is irreversible.")) {
                info("Operation cancelled.");
                return Ok(());
            }
            SheetLogic::apply(&mut pool, |sheet| sheet.delete_row(load))?;
            SheetLogic::audit(&pool, "del", load, "Row deleted");
            success(format!("Load {load} deleted."));
        }

        _ => {}
    }

    Ok(())
}
