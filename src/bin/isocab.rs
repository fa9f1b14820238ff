//! This is the main entry point for the cabinet listing tool.
//!
//! The program opens a CD-ROM device or disc image, prints the volume identifiers and the
//! root directory, then lists the components of a cabinet stored on the volume.

use clap::Parser;
use iso_cab::cabinet::Cabinet;
use iso_cab::report::Listing;
use iso_cab::traits::{BlockReader, LayoutDisplay};
use iso_cab::{Backing, Iso9660Fs, IsoCabIo};
use log::{error, warn};
use std::path::PathBuf;
use std::process::ExitCode;

/// Lists the components of an InstallShield cabinet stored on an ISO9660 medium.
#[derive(Parser, Debug)]
#[command(name = "isocab", version)]
struct Cli {
    /// Path to a CD-ROM device, a raw CD image or an ISO9660 image
    medium: PathBuf,
    /// Path of the cabinet file on the volume
    cabinet: String,
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Silence log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = stderrlog::new()
        .module(module_path!())
        .module("iso_cab")
        .quiet(cli.quiet)
        .verbosity(usize::from(cli.verbose))
        .init()
    {
        eprintln!("Logger initialisation failed: {err}");
    }

    run(&cli)
}

fn run(cli: &Cli) -> ExitCode {
    let backing = match Backing::select(&cli.medium) {
        Ok(backing) => backing,
        Err(err) => {
            error!("Could not open CD-ROM device or pseudo CD-ROM: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("{backing}");

    let volume = match Iso9660Fs::open(backing) {
        Ok(volume) => volume,
        Err(err) => {
            error!("Could not read the ISO9660 volume: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut io = IsoCabIo::new(volume);

    print_volume_info(&mut io);
    print_root_listing(&mut io);

    let stat = match io.volume_mut().stat(&cli.cabinet) {
        Ok(stat) => stat,
        Err(err) => {
            error!("Could not find {}: {err}", cli.cabinet);
            return ExitCode::FAILURE;
        }
    };

    match io
        .volume_mut()
        .reader_mut()
        .read_block(*stat.lsn(), *stat.size())
    {
        Ok(data) => println!("{} ({} bytes)", cli.cabinet, data.len()),
        Err(err) => {
            error!("Could not read {}: {err}", cli.cabinet);
            return ExitCode::FAILURE;
        }
    }

    match Cabinet::open(&mut io, &cli.cabinet) {
        Ok(cabinet) => {
            println!("{} contents:", cli.cabinet);
            for name in cabinet.component_names() {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(
                "Failed to open {} as an InstallShield Cabinet File: {err}",
                cli.cabinet
            );
            ExitCode::FAILURE
        }
    }
}

fn print_volume_info(io: &mut IsoCabIo<Backing>) {
    match io.volume_mut().read_pvd() {
        Ok(pvd) => match pvd.display_layout(0) {
            Ok(out) => print!("{out}"),
            Err(err) => error!("Print volume info error: {err}"),
        },
        Err(err) => warn!("Volume descriptor unavailable: {err}"),
    }
}

fn print_root_listing(io: &mut IsoCabIo<Backing>) {
    match io.volume_mut().readdir("/") {
        Ok(entries) => match Listing::new("/", &entries).display_layout(0) {
            Ok(out) => print!("{out}"),
            Err(err) => error!("Print listing error: {err}"),
        },
        Err(err) => warn!("Root directory unavailable: {err}"),
    }
}
