#![allow(non_snake_case)]

//! Tabulate linear and Breit-Rabi Zeeman shifts for every ground-state
//! sublevel of 87Rb and 85Rb over a field sweep.
//!
//! Usage: `zeeman_table [constants.toml]`

use std::path::PathBuf;
use itertools::Itertools;
use ndarray as nd;
use atomic_zeeman::{
    mkdir,
    write_npz,
    breit_rabi::BreitRabi,
    Isotope,
    PhysicalConstants,
};

const B_MAX: f64 = 1e-3; // T
const NB: usize = 101;

struct Table {
    F: nd::Array1<f64>,
    m_F: nd::Array1<f64>,
    linear: nd::Array2<f64>,
    breit_rabi: nd::Array2<f64>,
}

fn tabulate(
    isotope: Isotope,
    consts: &PhysicalConstants,
    B: &nd::Array1<f64>,
) -> anyhow::Result<Table>
{
    let mut F: Vec<f64> = Vec::new();
    let mut m_F: Vec<f64> = Vec::new();
    let mut linear: Vec<nd::Array1<f64>> = Vec::new();
    let mut breit_rabi: Vec<nd::Array1<f64>> = Vec::new();
    for level in isotope.ground_levels_with(consts) {
        let g = level.g_f();
        for s in level.sublevels()? {
            let m = s.proj().f();
            let br = BreitRabi::new_with(isotope, level.f, m, consts)?;
            let offset = br.eval(0.0);
            F.push(level.f);
            m_F.push(m);
            linear.push(
                consts.zeeman_frequency(B, m, g)?
                    .into_dimensionality::<nd::Ix1>()?
            );
            breit_rabi.push(B.mapv(|b| br.eval(b) - offset));
        }
    }
    let stack = |rows: &[nd::Array1<f64>]| {
        nd::stack(
            nd::Axis(0),
            &rows.iter().map(|row| row.view()).collect::<Vec<_>>(),
        )
    };
    Ok(Table {
        F: F.into(),
        m_F: m_F.into(),
        linear: stack(&linear)?,
        breit_rabi: stack(&breit_rabi)?,
    })
}

fn print_table(isotope: Isotope, table: &Table, B_max: f64) {
    println!(
        "{} ground state at B = {:.3e} T (linear | Breit-Rabi, kHz)",
        isotope, B_max,
    );
    let rows
        = table.F.iter()
        .zip(table.m_F.iter())
        .zip(table.linear.outer_iter().zip(table.breit_rabi.outer_iter()))
        .map(|((f, m), (lin, br))| {
            let last = lin.len() - 1;
            format!(
                "  F = {:.0}  m_F = {:+.0}  {:>12.3} | {:>12.3}",
                f, m, lin[last] / 1e3, br[last] / 1e3,
            )
        })
        .join("\n");
    println!("{}", rows);
}

fn main() -> anyhow::Result<()> {
    let consts
        = match std::env::args().nth(1) {
            Some(path) => PhysicalConstants::from_toml_file(path)?,
            None => PhysicalConstants::default(),
        };

    let outdir = PathBuf::from("output");
    mkdir!(outdir);

    let B: nd::Array1<f64> = nd::Array1::linspace(0.0, B_MAX, NB);
    let rb87 = tabulate(Isotope::Rb87, &consts, &B)?;
    let rb85 = tabulate(Isotope::Rb85, &consts, &B)?;
    print_table(Isotope::Rb87, &rb87, B_MAX);
    print_table(Isotope::Rb85, &rb85, B_MAX);

    write_npz!(
        outdir.join("zeeman_table.npz"),
        arrays: {
            "B" => &B,
            "rb87_F" => &rb87.F,
            "rb87_mF" => &rb87.m_F,
            "rb87_linear" => &rb87.linear,
            "rb87_breit_rabi" => &rb87.breit_rabi,
            "rb85_F" => &rb85.F,
            "rb85_mF" => &rb85.m_F,
            "rb85_linear" => &rb85.linear,
            "rb85_breit_rabi" => &rb85.breit_rabi,
        }
    );
    println!("done");
    Ok(())
}
