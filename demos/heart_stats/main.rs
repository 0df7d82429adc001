//! Builds a few hearts and logs their mesh statistics.
//!
//! Usage:
//! ```text
//! cargo run --example heart_stats                 # default sizes
//! cargo run --example heart_stats -- 3 2          # radius 3, height 2
//! RUST_LOG=cakeform=debug cargo run --example heart_stats
//! ```

use cakeform::heart::{BuildHeart, HeartCache, HeartTuning};
use cakeform::tessellation::TriangleMesh;
use cakeform::Result;
use tracing::{info, warn};

fn report(label: &str, mesh: &TriangleMesh) {
    let Some(bb) = mesh.bounding_box() else {
        warn!(label, "empty mesh");
        return;
    };
    let size = bb.size();
    info!(
        label,
        vertices = mesh.vertices.len(),
        triangles = mesh.triangle_count(),
        width = size.x,
        height = size.y,
        depth = size.z,
        volume = mesh.signed_volume(),
        "heart"
    );
}

fn parse_sizes() -> Vec<(f64, f64)> {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    match args.as_slice() {
        [radius, height, ..] => vec![(*radius, *height)],
        [radius] => vec![(*radius, 1.0)],
        [] => vec![(0.5, 0.5), (1.0, 1.0), (3.0, 2.0), (10.0, 3.0)],
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for cakeform and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=cakeform=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("heart_stats=info".parse().unwrap_or_default())
        .add_directive("cakeform=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut cache = HeartCache::default();
    for (radius, height) in parse_sizes() {
        let mesh = cache.get_or_build(radius, height)?;
        report(&format!("r={radius} h={height}"), &mesh);
    }

    let rounded = HeartTuning::new(0.45, 0.7, 1.0, 0.45)?;
    let mesh = BuildHeart::new(1.0, 1.0).with_tuning(rounded).execute()?;
    report("rounded tip", &mesh);

    Ok(())
}
