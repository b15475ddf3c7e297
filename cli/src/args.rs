use clap::{error::ErrorKind, CommandFactory, Parser};
use sparse_life_lib::Config;

/// Advance a Game of Life population on an unbounded grid, and print its living cells as JSON.
#[derive(Debug, Parser)]
#[command(name = "sparse-life")]
pub struct Args {
    #[command(flatten)]
    pub config: Config,

    /// Print every generation from 0 up to the last one, instead of only the last one.
    ///
    /// Each generation is printed on its own line as
    /// `{"generation": k, "cells": [[row, col], ...]}`.
    #[arg(long)]
    pub each: bool,

    /// Print the configuration as a JSON line before the generations.
    #[arg(long)]
    pub header: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let args = Self::parse();

        match args.config.check() {
            Ok(config) => Self { config, ..args },
            Err(e) => Self::command().error(ErrorKind::ValueValidation, e).exit(),
        }
    }
}
