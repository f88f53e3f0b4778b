use std::{io, process::exit};

use anyhow::{bail, Context};
use liblife::GridEngine;

fn main() -> anyhow::Result<()> {
    let mut engine = GridEngine::new(20, 20)?;
    engine.randomize();
    print_grid(&engine);

    for line_res in io::stdin().lines() {
        let line = line_res?;
        let args = line.split_whitespace();

        if let Err(e) = handle_cmd(&mut engine, args) {
            eprintln!("! {e:?}");
        }
    }

    Ok(())
}

fn handle_cmd<'a, I>(engine: &mut GridEngine, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            for _ in 0..times {
                engine.step();
            }
        }

        "random" => {
            engine.randomize();
        }

        "clear" => {
            engine.clear();
        }

        "set" => {
            let row = args.next().context("missing row")?.parse::<usize>()?;
            let col = args.next().context("missing col")?.parse::<usize>()?;
            let alive = args.next().context("missing state (0/1)")? == "1";

            engine.set_cell(row, col, alive)?;
        }

        "toggle" => {
            let row = args.next().context("missing row")?.parse::<usize>()?;
            let col = args.next().context("missing col")?.parse::<usize>()?;

            engine.toggle_cell(row, col)?;
        }

        "get" => {
            let row = args.next().context("missing row")?.parse::<usize>()?;
            let col = args.next().context("missing col")?.parse::<usize>()?;

            println!("{}", engine.get_cell(row, col)?);
        }

        "show" => {}

        "exit" => {
            exit(0);
        }

        _ => bail!("Unknown command"),
    }

    print_grid(engine);
    println!("OK");
    Ok(())
}

fn print_grid(engine: &GridEngine) {
    for row in engine.snapshot() {
        let line: String = row
            .into_iter()
            .map(|alive| if alive { '#' } else { '.' })
            .collect();
        println!("{line}");
    }
}
