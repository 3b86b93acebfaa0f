//! Orthowire CLI
//!
//! Usage:
//!   orthowire [OPTIONS] [FILE]
//!
//! Reads a TOML diagram document (shapes, anchors, connections), routes the
//! connections, and prints each connection's polyline - as plain text, or as
//! a minimal SVG document with `--svg`.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use orthowire::{Diagram, Point};

#[derive(Parser)]
#[command(name = "orthowire")]
#[command(about = "Route orthogonal connections from a TOML diagram document")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Emit the routed polylines as a minimal SVG document
    #[arg(long)]
    svg: bool,

    /// Verbose logging (shows advisory geometry warnings and edit commits)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    if cli.input.is_none() && io::stdin().is_terminal() {
        eprintln!("No input file and stdin is a terminal; see --help for usage.");
        std::process::exit(2);
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            buffer
        }
    };

    let diagram = match orthowire::persist::load(&source) {
        Ok(diagram) => diagram,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.svg {
        print!("{}", render_svg(&diagram));
    } else {
        let mut connections: Vec<_> = diagram.connections().collect();
        connections.sort_by_key(|c| c.id);
        for connection in connections {
            let path = connection
                .points()
                .iter()
                .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("connection {}: {}", connection.id.0, path);
        }
    }
}

/// Minimal rendering sink: one polyline per connection, one rect per shape.
fn render_svg(diagram: &Diagram) -> String {
    let mut min = Point::new(f64::MAX, f64::MAX);
    let mut max = Point::new(f64::MIN, f64::MIN);
    let mut extend = |p: Point| {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    };
    for shape in diagram.shapes() {
        extend(Point::new(shape.bounds.x, shape.bounds.y));
        extend(Point::new(shape.bounds.right(), shape.bounds.bottom()));
    }
    for connection in diagram.connections() {
        for point in connection.points() {
            extend(point);
        }
    }
    if min.x > max.x {
        min = Point::new(0.0, 0.0);
        max = Point::new(0.0, 0.0);
    }

    let pad = 10.0;
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        min.x - pad,
        min.y - pad,
        (max.x - min.x) + 2.0 * pad,
        (max.y - min.y) + 2.0 * pad
    ));

    let mut shapes: Vec<_> = diagram.shapes().collect();
    shapes.sort_by_key(|s| s.id);
    for shape in shapes {
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#333\"/>\n",
            shape.bounds.x, shape.bounds.y, shape.bounds.width, shape.bounds.height
        ));
    }

    let mut connections: Vec<_> = diagram.connections().collect();
    connections.sort_by_key(|c| c.id);
    for connection in connections {
        let points = connection
            .points()
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"#06c\" stroke-width=\"2\"/>\n",
            points
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
