use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::PrintLogic;
use crate::export::print::print_text;
use crate::utils::path::expand_tilde;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Print { file, text } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let sheet = SheetLogic::snapshot(&pool);

        if *text {
            return print_text(&sheet, &mut io::stdout().lock());
        }

        let path = file.as_deref().map(expand_tilde);
        PrintLogic::print(
            &sheet,
            cfg.page_size,
            cfg.pdf_viewer.as_deref(),
            path.as_deref(),
        )?;
    }
    Ok(())
}
