mod args;
mod output;

use crate::{args::Args, output::Printer};
use color_eyre::Result;
use std::io::{stdout, Write};

/// Step the board described by `args`, writing the requested generations to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let mut board = args.config.board();
    log::info!(
        "Initial population: {}, generations: {}",
        board.population(),
        args.config.generations
    );

    let printer = Printer::new(args.pretty);

    if args.header {
        printer.write_config(out, &args.config)?;
    }

    if args.each {
        printer.write_generation(out, 0, board.living())?;
        for generation in 1..=args.config.generations {
            board.try_step_n(1)?;
            printer.write_generation(out, generation, board.living())?;
        }
    } else {
        board.try_step_n(args.config.generations)?;
        printer.write_cells(out, board.living())?;
    }

    out.flush()?;
    log::info!("Final population: {}", board.population());

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse_and_validate();
    run(&args, &mut stdout().lock())
}
