use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::sheet_meta::HeaderUpdate;
use crate::ui::messages::{success, warning};
use crate::utils::date::resolve_date;

/// Edit pilot / DZ / registration / date / starting fuel.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Header {
        pilot,
        dz,
        registration,
        date,
        fuel,
    } = cmd
    {
        let update = HeaderUpdate {
            pilot: pilot.clone(),
            dz: dz.clone(),
            registration: registration.clone(),
            date: date.as_deref().map(resolve_date),
            start_fuel: fuel.clone(),
        };

        if update.is_empty() {
            warning("Nothing to change: pass --pilot, --dz, --reg, --date or --fuel.");
            return Ok(());
        }

        let message = describe(&update);
        let mut pool = DbPool::new(&cfg.database)?;
        SheetLogic::apply(&mut pool, |sheet| sheet.update_header(update))?;
        SheetLogic::audit(&pool, "header", "", &message);

        success(format!("Header updated: {message}"));
    }
    Ok(())
}

fn describe(update: &HeaderUpdate) -> String {
    let fields = [
        ("pilot", &update.pilot),
        ("dz", &update.dz),
        ("reg", &update.registration),
        ("date", &update.date),
        ("fuel", &update.start_fuel),
    ];

    fields
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| format!("{k}='{v}'")))
        .collect::<Vec<_>>()
        .join(", ")
}
