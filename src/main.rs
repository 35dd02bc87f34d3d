//! Solves the reference SIQR scenario and writes its chart to `siqr.svg`.

use log::{info, warn};

use siqr_models::{
    models::epidemic::siqr::{Compartments, PeakConfig, Siqr, SolverConfig},
    support::{
        grid::TimeGrid,
        plot::{self, PlotConfig},
    },
};

const OUTPUT: &str = "siqr.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let model = Siqr::default();
    let initial = Compartments::initial();
    let grid = TimeGrid::default();
    let solver = SolverConfig::default();

    let trajectory = model.solve(initial, &grid, &solver)?;
    info!(
        "solved {} samples over [{}, {}]",
        trajectory.len(),
        grid.start(),
        grid.end()
    );

    match model.infection_peaks(&trajectory, &PeakConfig::default(), &solver) {
        Ok(peaks) => {
            for peak in &peaks {
                info!("infection peak: I={:.4} at t={:.4}", peak.infected(), peak.time);
            }
        }
        Err(e) => warn!("infection peak search failed: {e}"),
    }

    if let Some(last) = trajectory.last() {
        let s = last.state;
        info!(
            "final state at t={}: S={:.4} I={:.4} Q={:.4} R={:.4}",
            last.time, s.susceptible, s.infected, s.quarantined, s.removed
        );
    }

    let drift = trajectory
        .totals()
        .into_iter()
        .map(|total| (total - initial.total()).abs())
        .fold(0.0, f64::max);
    info!("max total-population drift: {drift:.3e}");

    plot::render_svg(OUTPUT, &Siqr::chart_series(&trajectory), &PlotConfig::default())?;
    info!("wrote {OUTPUT}");

    Ok(())
}
