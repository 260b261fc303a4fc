use std::io;

use gridhole::{complex::Edge, grid::GridPoint, Evaluation, GridholeError};
use itertools::Itertools;
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read points: {0}")]
    Csv(#[from] csv::Error),
    #[error("record {record}: expected `row,col` with non-negative integers, found {found:?}")]
    MalformedRecord { record: usize, found: String },
    #[error("threshold {0:?} is not a non-negative integer")]
    BadThreshold(String),
    #[error(transparent)]
    Gridhole(#[from] GridholeError),
}

/// Header-less CSV, one `row,col` pair per line.
fn read_points(reader: impl io::Read) -> Result<Vec<GridPoint>, CliError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.records()
        .enumerate()
        .map(|(record_idx, record)| {
            let record = record?;
            let coordinate = |i: usize| record.get(i).and_then(|f| f.parse::<u32>().ok());
            match (record.len(), coordinate(0), coordinate(1)) {
                (2, Some(row), Some(col)) => Ok(GridPoint::new(row, col)),
                _ => Err(CliError::MalformedRecord {
                    record: record_idx,
                    found: record.iter().join(","),
                }),
            }
        })
        .collect()
}

fn parse_threshold(arg: Option<String>) -> Result<u32, CliError> {
    match arg {
        None => Ok(1),
        Some(arg) => arg.parse().map_err(|_| CliError::BadThreshold(arg)),
    }
}

fn main() -> Result<(), CliError> {
    env_logger::init();

    let epsilon = parse_threshold(std::env::args().nth(1))?;
    let points = read_points(io::stdin())?;
    info!("Read {} points, epsilon={epsilon}", points.len());

    let evaluation = Evaluation::compute(&points, epsilon)?;
    let complex = &evaluation.complex;

    println!("Complex sizes:");
    println!("Vertices: {}", complex.n_vertices());
    println!("Edges: {}", complex.n_edges());
    println!("Triangles: {}", complex.n_triangles());
    println!("Euler characteristic: {}", evaluation.euler_characteristic());

    println!("\nBetti numbers:");
    println!(" beta_0={}", evaluation.betti_0);
    println!(" beta_1={}", evaluation.betti_1);

    println!("\nHoles:");
    for (idx, edges) in evaluation.hole_edges().iter().enumerate() {
        let rendered = edges
            .iter()
            .map(|Edge(u, v)| format!("{u}-{v}"))
            .join(" ");
        println!(" hole={idx}, edges=[{rendered}]");
    }
    Ok(())
}
