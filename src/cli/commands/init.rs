use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::db::migrate::applied_count;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - empty header fields from the configured defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing flightlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let mut pool = DbPool::new(&db_path)?;
    let migrations = applied_count(&pool.conn)?;

    SheetLogic::apply(&mut pool, |sheet| {
        if sheet.meta.dz.is_empty() {
            sheet.meta.dz = cfg.default_dz.clone();
        }
        if sheet.meta.registration.is_empty() {
            sheet.meta.registration = cfg.default_registration.clone();
        }
        Ok(())
    })?;

    SheetLogic::audit(
        &pool,
        "init",
        "Database initialized",
        &format!("Database initialized at {db_path} ({migrations} migrations)"),
    );

    println!("🎉 flightlog initialization completed!");
    Ok(())
}
