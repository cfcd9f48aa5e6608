use clap::Parser;
use std::error::Error;

use ringlist::dump::DumpLog;
use ringlist::RingList;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Demo { output } => run_demo(&output),
        Commands::Stress { head, tail } => run_stress(head, tail),
        Commands::Snapshot => run_snapshot(),
    };
    if let Err(error) = result {
        cli::report_err(&error.to_string());
        std::process::exit(1);
    }
}

fn le(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Formatter handed to the dump log; free slots may hold stale bytes, which
/// still decode fine as an `i32`.
fn show_i32(bytes: &[u8]) -> String {
    match <[u8; 4]>::try_from(bytes) {
        Ok(raw) => i32::from_le_bytes(raw).to_string(),
        Err(_) => format!("{:?}", bytes),
    }
}

/// The canonical demonstration: a burst of head/tail and positional
/// inserts and deletes, each phase recorded into the HTML report.
fn run_demo(output: &str) -> Result<(), Box<dyn Error>> {
    let mut list = RingList::for_type::<i32>()?;
    let mut log = DumpLog::create(output)?;
    log.record(&list, "newly created list", show_i32)?;

    list.push_front(&le(90))?;
    log.record(&list, "first head insertion", show_i32)?;
    list.push_back(&le(80))?;
    log.record(&list, "first tail insertion", show_i32)?;

    list.push_front(&le(-10))?;
    let pivot = list.push_front(&le(-20))?;
    list.pop_back()?;
    list.pop_back()?;
    let mid = list.insert_after(&le(100), pivot)?;
    list.push_front(&le(-98))?;
    list.insert_before(&le(-1), mid)?;
    if let Some(tail) = list.tail() {
        list.delete_before(tail)?;
    }
    list.delete_before(pivot)?;
    list.push_back(&le(666))?;
    list.delete_after(pivot)?;
    log.record(&list, "after mixed insert/delete churn", show_i32)?;

    for _ in 0..100 {
        list.push_front(&le(1000))?;
    }
    log.record(&list, "inserted 100 elements at the head in a loop", show_i32)?;
    for _ in 0..10 {
        list.push_back(&le(-1000))?;
    }
    log.record(&list, "inserted 10 elements at the tail in a loop", show_i32)?;

    list.verify()?;
    cli::report_ok(&format!(
        "{} elements across {} slots, report at {}",
        list.len(),
        list.capacity(),
        log.html_path().display()
    ));
    Ok(())
}

fn run_stress(head: usize, tail: usize) -> Result<(), Box<dyn Error>> {
    let mut list = RingList::for_type::<i64>()?;
    for value in 0..head {
        list.push_front(&(value as i64).to_le_bytes())?;
        list.verify()?;
    }
    for value in 0..tail {
        list.push_back(&(-(value as i64)).to_le_bytes())?;
        list.verify()?;
    }
    cli::report_ok(&format!(
        "{} inserts verified, size {} capacity {}",
        head + tail,
        list.len(),
        list.capacity()
    ));
    Ok(())
}

fn run_snapshot() -> Result<(), Box<dyn Error>> {
    let mut list = RingList::for_type::<i32>()?;
    let first = list.push_back(&le(90))?;
    list.push_back(&le(80))?;
    list.insert_after(&le(70), first)?;
    list.pop_back()?;
    println!("{}", serde_json::to_string_pretty(&list.snapshot())?);
    Ok(())
}
