use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::SheetLogic;
use crate::core::sheet::Sheet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::field::csv_headers;
use crate::utils::colors::{RESET, color_for_state, colorize_optional};
use crate::utils::formatting::{bold, or_dash};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let sheet = SheetLogic::snapshot(&pool);
        let query = search.as_deref().unwrap_or("");

        print_header(&sheet);
        print_rows(&sheet, query);
        print_totals(&sheet, query);
    }
    Ok(())
}

fn print_header(sheet: &Sheet) {
    let m = &sheet.meta;
    let state = if m.closed { "CLOSED" } else { "OPEN" };

    println!(
        "📋 {}  [{}{}{}]",
        bold("Flight log"),
        color_for_state(m.closed),
        state,
        RESET
    );
    println!(
        "Pilot: {}  DZ: {}  Reg: {}  Date: {}",
        or_dash(&m.pilot),
        or_dash(&m.dz),
        or_dash(&m.registration),
        or_dash(&m.date)
    );
    println!();
}

fn print_rows(sheet: &Sheet, query: &str) {
    let visible = sheet.visible_rows(query);

    if sheet.rows.is_empty() {
        println!("No rows yet. Add one with 'flightlog add'.");
        return;
    }
    if visible.is_empty() {
        println!("No rows match '{query}'.");
        return;
    }

    let mut table = Table::new(&csv_headers());
    for row in visible {
        table.add_row(row.cells());
    }
    print!("{}", table.render());
    println!();
}

fn print_totals(sheet: &Sheet, query: &str) {
    let totals = sheet.totals(query);

    if !query.is_empty() {
        println!("🔎 Totals for rows matching '{query}':");
    }
    println!(
        "Flights: {}  PAX: {}  LDG: {}  FLT/T: {}",
        totals.flights,
        totals.pax,
        totals.ldg,
        colorize_optional(&totals.flight_time)
    );
    println!(
        "Start fuel: {}  End fuel: {}",
        or_dash(&sheet.meta.start_fuel),
        or_dash(&sheet.ending_fuel())
    );
    println!(
        "Duty: {} → {}  ({})",
        or_dash(&sheet.duty.duty_start),
        or_dash(&sheet.duty.duty_end),
        or_dash(&sheet.duty.duration())
    );
}
