//! Renders a built-in demo molecule to a PNG file. Useful for eyeballing
//! layout, label, and grid changes without a chemical-file pipeline.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use mol_depict::{render, Atom, Bond, Direction, Element, Molecule, RenderOptions};

#[derive(Parser)]
#[command(name = "moldepict", version, about = "Render a demo molecule depiction to PNG")]
struct Cli {
    /// Built-in demo molecule to render
    #[arg(short, long, value_enum, default_value_t = Demo::Ethanol)]
    molecule: Demo,

    /// Output PNG file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    force: bool,

    /// Target maximum dimension in pixels
    #[arg(long, default_value_t = 512)]
    max_size: u32,

    /// Disable the checkerboard grid overlay
    #[arg(long)]
    no_grid: bool,

    /// Grid columns
    #[arg(long, default_value_t = 5)]
    grid_x: u32,

    /// Grid rows
    #[arg(long, default_value_t = 5)]
    grid_y: u32,

    /// Atom index (0-based) to mark as a stereocenter; repeatable
    #[arg(long = "stereo", value_name = "INDEX", action = clap::ArgAction::Append)]
    stereo: Vec<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// CH3-CH2-OH
    Ethanol,
    /// CH3-CH(NH2)-COOH, with a stereocenter at the alpha carbon
    Alanine,
    /// CH2=CH-C#N
    Acrylonitrile,
}

fn build_demo(demo: Demo) -> Molecule {
    let mut mol = Molecule::new();
    match demo {
        Demo::Ethanol => {
            mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
            mol.atoms.push(Atom::new(Element::C, 1.3, 0.75));
            mol.atoms.push(
                Atom::new(Element::O, 2.6, 0.0)
                    .with_hydrogens(1)
                    .with_spare_space(Direction::Right),
            );
            mol.bonds.push(Bond::new(0, 1, 1));
            mol.bonds.push(Bond::new(1, 2, 1));
        }
        Demo::Alanine => {
            mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
            mol.atoms
                .push(Atom::new(Element::C, 1.3, 0.75).with_spare_space(Direction::Bottom));
            mol.atoms.push(Atom::new(Element::C, 2.6, 0.0));
            mol.atoms.push(Atom::new(Element::O, 2.6, -1.5));
            mol.atoms.push(
                Atom::new(Element::O, 3.9, 0.75)
                    .with_hydrogens(1)
                    .with_spare_space(Direction::Right),
            );
            mol.atoms.push(
                Atom::new(Element::N, 1.3, 2.25)
                    .with_hydrogens(2)
                    .with_spare_space(Direction::Top),
            );
            mol.bonds.push(Bond::new(0, 1, 1));
            mol.bonds.push(Bond::new(1, 2, 1));
            mol.bonds.push(Bond::new(2, 3, 2));
            mol.bonds.push(Bond::new(2, 4, 1));
            mol.bonds.push(Bond::new(1, 5, 1));
        }
        Demo::Acrylonitrile => {
            mol.atoms.push(Atom::new(Element::C, 0.0, 0.0));
            mol.atoms.push(Atom::new(Element::C, 1.3, 0.75));
            mol.atoms.push(Atom::new(Element::C, 2.6, 0.0));
            mol.atoms.push(Atom::new(Element::N, 3.9, -0.75));
            mol.bonds.push(Bond::new(0, 1, 2));
            mol.bonds.push(Bond::new(1, 2, 1));
            mol.bonds.push(Bond::new(2, 3, 3));
        }
    }
    mol
}

fn run(cli: Cli) -> Result<()> {
    if cli.output.exists() && !cli.force {
        bail!(
            "output file already exists: {} (use --force to overwrite)",
            cli.output.display()
        );
    }

    let molecule = build_demo(cli.molecule);
    let options = RenderOptions {
        max_size: cli.max_size,
        grid_count_x: cli.grid_x,
        grid_count_y: cli.grid_y,
        draw_grid: !cli.no_grid,
        stereocenters: BTreeSet::from_iter(cli.stereo),
    };

    let pixmap = render(&molecule, &options).context("rendering failed")?;
    pixmap
        .save_png(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!(
        "wrote {} ({}x{} px)",
        cli.output.display(),
        pixmap.width(),
        pixmap.height()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
