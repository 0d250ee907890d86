use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let sheet = SheetLogic::snapshot(&pool);
        let path = expand_tilde(file);

        ExportLogic::export(&sheet, *format, &path, *force, cfg.page_size)?;

        SheetLogic::audit(
            &pool,
            "export",
            format.as_str(),
            &format!("Exported {} rows to {}", sheet.rows.len(), path.display()),
        );
    }
    Ok(())
}
